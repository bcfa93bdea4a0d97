//! JSON-lines journal of engine events.
//!
//! One record per line, appended as events are drained from the engine:
//!
//! ```text
//! {"seq":1,"t_ms":0,"type":"round_started","round_id":1,"human_role":"seeker","actors":[...]}
//! {"seq":2,"t_ms":512,"type":"ai_stepped","round_id":1,"tick":1,"actors":[...]}
//! {"seq":3,"t_ms":530,"type":"round_ended","round_id":1,"cause":"contact","by":2,"x":0,"y":1,"outcome":"won"}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Actor, EndCause, RoundEvent};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActorRecord {
    pub id: u8,
    pub x: u8,
    pub y: u8,
    pub role: &'static str,
}

impl From<&Actor> for ActorRecord {
    fn from(a: &Actor) -> Self {
        Self {
            id: a.id,
            x: a.position.x,
            y: a.position.y,
            role: a.role.as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    RoundStarted {
        round_id: u32,
        human_role: &'static str,
        actors: Vec<ActorRecord>,
    },
    HumanMoved {
        round_id: u32,
        direction: &'static str,
        x: u8,
        y: u8,
    },
    AiStepped {
        round_id: u32,
        tick: u32,
        actors: Vec<ActorRecord>,
    },
    RoundEnded {
        round_id: u32,
        cause: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        by: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        x: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        y: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        outcome: Option<&'static str>,
    },
}

impl From<&RoundEvent> for EventRecord {
    fn from(ev: &RoundEvent) -> Self {
        match ev {
            RoundEvent::RoundStarted {
                round_id,
                human_role,
                actors,
            } => EventRecord::RoundStarted {
                round_id: *round_id,
                human_role: human_role.as_str(),
                actors: actors.iter().map(ActorRecord::from).collect(),
            },
            RoundEvent::HumanMoved {
                round_id,
                direction,
                to,
                ..
            } => EventRecord::HumanMoved {
                round_id: *round_id,
                direction: direction.as_str(),
                x: to.x,
                y: to.y,
            },
            RoundEvent::AiStepped {
                round_id,
                tick,
                actors,
            } => EventRecord::AiStepped {
                round_id: *round_id,
                tick: *tick,
                actors: actors.iter().map(ActorRecord::from).collect(),
            },
            RoundEvent::RoundEnded { round_id, cause } => match *cause {
                EndCause::Contact { by, at, outcome } => EventRecord::RoundEnded {
                    round_id: *round_id,
                    cause: "contact",
                    by: Some(by),
                    x: Some(at.x),
                    y: Some(at.y),
                    outcome: Some(outcome.as_str()),
                },
                EndCause::Abandoned => EventRecord::RoundEnded {
                    round_id: *round_id,
                    cause: "abandoned",
                    by: None,
                    x: None,
                    y: None,
                    outcome: None,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Line<'a> {
    seq: u64,
    t_ms: u64,
    #[serde(flatten)]
    event: &'a EventRecord,
}

/// Append-only JSONL sink.
pub struct Journal {
    out: Box<dyn Write>,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal {
    pub fn new(out: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            seq: 0,
            buf: Vec::with_capacity(512),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Write one event at game time `t_ms`.
    pub fn record(&mut self, t_ms: u64, event: &RoundEvent) -> Result<()> {
        let record = EventRecord::from(event);
        self.seq += 1;
        self.buf.clear();
        serde_json::to_writer(
            &mut self.buf,
            &Line {
                seq: self.seq,
                t_ms,
                event: &record,
            },
        )?;
        self.buf.push(b'\n');
        self.out
            .write_all(&self.buf)
            .and_then(|_| self.out.flush())
            .with_context(|| {
                format!(
                    "write {} record of round {}",
                    event.kind(),
                    event.round_id()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEngine;
    use crate::types::{Position, Role};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_records_are_json_lines() {
        let sink = SharedBuf::default();
        let mut journal = Journal::new(sink.clone());

        let mut engine = GameEngine::new(1);
        engine.start_round_with(
            Role::Runner,
            [Position::new(8, 8), Position::new(0, 0), Position::new(0, 1)],
        );
        engine.tick();
        for (i, ev) in engine.take_events().iter().enumerate() {
            journal.record(i as u64 * 500, ev).unwrap();
        }
        assert_eq!(journal.seq(), 3);

        let text = String::from_utf8(sink.0.borrow().clone()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);

        assert_eq!(lines[0]["type"], "round_started");
        assert_eq!(lines[0]["seq"], 1);
        assert_eq!(lines[0]["human_role"], "runner");
        assert_eq!(lines[0]["actors"].as_array().unwrap().len(), 4);

        assert_eq!(lines[1]["type"], "ai_stepped");
        assert_eq!(lines[1]["t_ms"], 500);

        assert_eq!(lines[2]["type"], "round_ended");
        assert_eq!(lines[2]["cause"], "contact");
        assert_eq!(lines[2]["by"], 1);
        assert_eq!(lines[2]["x"], 9);
        assert_eq!(lines[2]["outcome"], "lost");
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_names_the_event() {
        let mut journal = Journal::new(Closed);
        let ev = RoundEvent::RoundEnded {
            round_id: 7,
            cause: EndCause::Abandoned,
        };
        let err = journal.record(0, &ev).unwrap_err();
        assert_eq!(err.to_string(), "write round_ended record of round 7");
    }

    #[test]
    fn test_abandoned_round_has_no_outcome() {
        let ev = RoundEvent::RoundEnded {
            round_id: 4,
            cause: EndCause::Abandoned,
        };
        let v = serde_json::to_value(EventRecord::from(&ev)).unwrap();
        assert_eq!(v["cause"], "abandoned");
        assert!(v.get("outcome").is_none());
        assert!(v.get("by").is_none());
    }
}
