//! Result history shared by all mini-games
//!
//! Newest entries first, capped at a configurable size. The host app owns the
//! clock and the storage; this only keeps the list and its JSON form.

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_LIMIT;
use crate::error::Result;
use crate::ladder::Trace;

/// Which mini-game produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Dice,
    Coin,
    Wheel,
    Arrow,
    Ladder,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Dice,
        GameKind::Coin,
        GameKind::Wheel,
        GameKind::Arrow,
        GameKind::Ladder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Dice => "Dice",
            GameKind::Coin => "Coin",
            GameKind::Wheel => "Wheel",
            GameKind::Arrow => "Arrow",
            GameKind::Ladder => "Ladder",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dice" => Some(GameKind::Dice),
            "coin" => Some(GameKind::Coin),
            "wheel" => Some(GameKind::Wheel),
            "arrow" => Some(GameKind::Arrow),
            "ladder" => Some(GameKind::Ladder),
            _ => None,
        }
    }
}

/// A single logged result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    /// Unix timestamp (ms) when recorded
    pub timestamp: f64,
    pub kind: GameKind,
    /// Display text of the outcome
    pub result: String,
}

impl LogEntry {
    /// Result text for a ladder trace, with 1-based lane labels
    pub fn ladder(trace: &Trace) -> String {
        format!("{} → {}", trace.start_lane + 1, trace.exit_lane + 1)
    }
}

/// Result log, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    entries: Vec<LogEntry>,
    next_id: u32,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    HISTORY_LIMIT
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Record a result at the top of the list, returns the entry ID
    pub fn record(&mut self, kind: GameKind, result: impl Into<String>, timestamp: f64) -> u32 {
        if self.next_id == u32::MAX {
            self.renumber();
        }
        let id = self.next_id;
        self.next_id += 1;

        self.entries.insert(
            0,
            LogEntry {
                id,
                timestamp,
                kind,
                result: result.into(),
            },
        );
        self.entries.truncate(self.limit);

        id
    }

    /// Record a resolved ladder trace
    pub fn record_trace(&mut self, trace: &Trace, timestamp: f64) -> u32 {
        self.record(GameKind::Ladder, LogEntry::ladder(trace), timestamp)
    }

    /// Entries of one kind, or all entries for `None`
    pub fn filtered(&self, kind: Option<GameKind>) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| kind.is_none_or(|k| e.kind == k))
            .collect()
    }

    /// Delete one entry, returns false if the ID is unknown
    pub fn remove(&mut self, id: u32) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Reassign IDs 1..=len, oldest first, once the counter runs out
    fn renumber(&mut self) {
        log::info!("Renumbering {} history entries", self.entries.len());
        let mut id = 0u32;
        for entry in self.entries.iter_mut().rev() {
            id = id.saturating_add(1);
            entry.id = id;
        }
        self.next_id = id.saturating_add(1);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode stored history
    pub fn from_json(json: &str) -> Result<Self> {
        let mut history: History = serde_json::from_str(json)?;
        history.limit = history.limit.max(1);
        // Keep IDs unique even if the stored counter is stale
        let max_id = history.entries.iter().map(|e| e.id).max().unwrap_or(0);
        match max_id.checked_add(1) {
            Some(next) => history.next_id = history.next_id.max(next),
            None => history.renumber(),
        }
        log::info!("Loaded {} history entries", history.entries.len());
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;
    use crate::ladder::{Board, resolve};

    #[test]
    fn test_newest_first() {
        let mut h = History::new();
        h.record(GameKind::Dice, "4", 1.0);
        h.record(GameKind::Coin, "Heads", 2.0);
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest().map(|e| e.result.as_str()), Some("Heads"));
        assert_eq!(h.entries()[1].kind, GameKind::Dice);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut h = History::with_limit(3);
        for i in 0..5 {
            h.record(GameKind::Wheel, i.to_string(), i as f64);
        }
        let results: Vec<&str> = h.entries().iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["4", "3", "2"]);
    }

    #[test]
    fn test_filter_by_kind() {
        let mut h = History::new();
        h.record(GameKind::Dice, "1", 0.0);
        h.record(GameKind::Ladder, "1 → 2", 0.0);
        h.record(GameKind::Dice, "6", 0.0);
        assert_eq!(h.filtered(Some(GameKind::Dice)).len(), 2);
        assert_eq!(h.filtered(Some(GameKind::Ladder)).len(), 1);
        assert_eq!(h.filtered(Some(GameKind::Arrow)).len(), 0);
        assert_eq!(h.filtered(None).len(), 3);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut h = History::new();
        let a = h.record(GameKind::Arrow, "N", 0.0);
        let b = h.record(GameKind::Arrow, "S", 0.0);
        assert!(h.remove(a));
        assert!(!h.remove(a));
        assert_eq!(h.latest().map(|e| e.id), Some(b));
        h.clear();
        assert!(h.is_empty());
    }

    #[test]
    fn test_record_trace() {
        let board = Board::from_rungs(4, vec![vec![true, false, false]]).unwrap();
        let trace = resolve(&board, 0).unwrap();
        let mut h = History::new();
        h.record_trace(&trace, 1_700_000_000_000.0);
        let entry = h.latest().unwrap();
        assert_eq!(entry.kind, GameKind::Ladder);
        assert_eq!(entry.result, "1 → 2");
    }

    #[test]
    fn test_json_roundtrip_keeps_ids_unique() {
        let mut h = History::new();
        h.record(GameKind::Dice, "2", 10.0);
        h.record(GameKind::Coin, "Tails", 20.0);
        let json = h.to_json().unwrap();

        let mut restored = History::from_json(&json).unwrap();
        assert_eq!(restored.entries(), h.entries());
        let id = restored.record(GameKind::Dice, "5", 30.0);
        assert!(h.entries().iter().all(|e| e.id != id));
    }

    #[test]
    fn test_stale_counter_is_repaired() {
        let json = r#"{"entries":[{"id":7,"timestamp":0.0,"kind":"Dice","result":"3"}],"next_id":1}"#;
        let mut h = History::from_json(json).unwrap();
        assert_eq!(h.record(GameKind::Dice, "4", 1.0), 8);
    }

    #[test]
    fn test_exhausted_ids_are_renumbered() {
        let json = r#"{"entries":[{"id":4294967295,"timestamp":2.0,"kind":"Coin","result":"Heads"},{"id":5,"timestamp":1.0,"kind":"Dice","result":"1"}],"next_id":1}"#;
        let mut h = History::from_json(json).unwrap();
        let ids: Vec<u32> = h.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(h.latest().map(|e| e.result.as_str()), Some("Heads"));
        assert_eq!(h.record(GameKind::Dice, "6", 3.0), 3);
    }

    #[test]
    fn test_record_at_counter_limit() {
        let json = r#"{"entries":[{"id":4294967294,"timestamp":0.0,"kind":"Arrow","result":"E"}],"next_id":4294967295}"#;
        let mut h = History::from_json(json).unwrap();
        let id = h.record(GameKind::Arrow, "W", 1.0);
        assert_eq!(id, 2);
        assert_eq!(h.entries()[1].id, 1);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            History::from_json("[1, 2"),
            Err(LadderError::Json(_))
        ));
    }

    #[test]
    fn test_kind_names() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(GameKind::from_str("LADDER"), Some(GameKind::Ladder));
        assert_eq!(GameKind::from_str("poker"), None);
    }
}
