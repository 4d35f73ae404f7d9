//! Append-only event log

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::BattleEvent;
use crate::ids::IdGenerator;

/// A recorded event with its identity and position in the log.
///
/// Fields are private; an envelope cannot be changed once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    id: String,
    revision: u64,
    #[serde(with = "unix_millis")]
    timestamp: SystemTime,
    #[serde(flatten)]
    event: BattleEvent,
}

impl EventEnvelope {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position in the log, starting at 1
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn event(&self) -> &BattleEvent {
        &self.event
    }

    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

/// Ordered history of a battle.
///
/// Revisions are assigned on append and are always `1..=len`.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    envelopes: Vec<EventEnvelope>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, stamping it with a fresh id, the current time and the next revision
    pub fn append(&mut self, ids: &mut dyn IdGenerator, event: BattleEvent) -> &EventEnvelope {
        let envelope = EventEnvelope {
            id: ids.next_id(),
            revision: self.envelopes.len() as u64 + 1,
            timestamp: SystemTime::now(),
            event,
        };
        self.envelopes.push(envelope);
        &self.envelopes[self.envelopes.len() - 1]
    }

    /// All events in append order
    pub fn events(&self) -> &[EventEnvelope] {
        &self.envelopes
    }

    /// Owned copy of the history
    pub fn snapshot(&self) -> Vec<EventEnvelope> {
        self.envelopes.clone()
    }

    pub fn last(&self) -> Option<&EventEnvelope> {
        self.envelopes.last()
    }

    pub fn len(&self) -> usize {
        self.envelopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventEnvelope> {
        self.envelopes.iter()
    }
}

/// Timestamps travel as milliseconds since the Unix epoch
mod unix_millis {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::BattleSnapshot;
    use crate::ids::SequentialIds;
    use crate::types::BattleState;

    fn started() -> BattleEvent {
        BattleEvent::Started(BattleSnapshot {
            battle_state: BattleState::new("battle"),
            home_team: Vec::new(),
            away_team: Vec::new(),
        })
    }

    #[test]
    fn test_revisions_are_gapless() {
        let mut ids = SequentialIds::new("event");
        let mut log = EventLog::new();

        for _ in 0..5 {
            log.append(&mut ids, started());
        }

        let revisions: Vec<u64> = log.iter().map(EventEnvelope::revision).collect();
        assert_eq!(revisions, vec![1, 2, 3, 4, 5]);
        assert_eq!(log.len(), 5);
    }

    #[test]
    fn test_append_assigns_ids() {
        let mut ids = SequentialIds::new("event");
        let mut log = EventLog::new();

        let first = log.append(&mut ids, started()).id().to_string();
        let second = log.append(&mut ids, started()).id().to_string();

        assert_eq!(first, "event-1");
        assert_eq!(second, "event-2");
        assert_eq!(log.last().map(EventEnvelope::id), Some("event-2"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut ids = SequentialIds::default();
        let mut log = EventLog::new();
        log.append(&mut ids, started());

        let snapshot = log.snapshot();
        log.append(&mut ids, started());

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_envelope_serialization() {
        let mut ids = SequentialIds::new("event");
        let mut log = EventLog::new();
        let envelope = log.append(&mut ids, started());

        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(value["id"], "event-1");
        assert_eq!(value["revision"], 1);
        assert_eq!(value["type"], "started");
        assert_eq!(value["payload"]["battleState"]["id"], "battle");
        assert!(value["timestamp"].is_u64());
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.events().is_empty());
    }
}
