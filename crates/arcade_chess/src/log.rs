//! Append-only record of the moves played in a game.

use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One executed move. Never changed once logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Color,
    /// Kind of the piece that moved
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
}

impl MoveRecord {
    pub fn captured_king(&self) -> bool {
        self.captured == Some(PieceKind::King)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(cap) => write!(
                f,
                "{} {} {}x{} (takes {})",
                self.color,
                self.kind.name(),
                self.from,
                self.to,
                cap.name()
            ),
            None => write!(
                f,
                "{} {} {}-{}",
                self.color,
                self.kind.name(),
                self.from,
                self.to
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rec: MoveRecord) {
        self.records.push(rec);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// The most recent `n` records, oldest first.
    pub fn last_n(&self, n: usize) -> &[MoveRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(from: &str, to: &str, captured: Option<PieceKind>) -> MoveRecord {
        MoveRecord {
            color: Color::White,
            kind: PieceKind::Pawn,
            from: Square::from_name(from).unwrap(),
            to: Square::from_name(to).unwrap(),
            captured,
        }
    }

    #[test]
    fn test_last_n_is_oldest_first() {
        let mut log = MoveLog::new();
        log.push(rec("a2", "a3", None));
        log.push(rec("b2", "b3", None));
        log.push(rec("c2", "c3", None));

        let tail = log.last_n(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].from.name(), "b2");
        assert_eq!(tail[1].from.name(), "c2");
        assert_eq!(log.last_n(10).len(), 3);
        assert!(log.last_n(0).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(rec("e2", "e4", None).to_string(), "White pawn e2-e4");
        assert_eq!(
            rec("e4", "d5", Some(PieceKind::Queen)).to_string(),
            "White pawn e4xd5 (takes queen)"
        );
    }

    #[test]
    fn test_king_capture_flag() {
        assert!(rec("e4", "d5", Some(PieceKind::King)).captured_king());
        assert!(!rec("e4", "d5", Some(PieceKind::Queen)).captured_king());
    }
}
