//! Direct-mapped transposition table
//!
//! A fixed-capacity array of tagged slots (empty or occupied), addressed by
//! `key % capacity`. Storing unconditionally overwrites the addressed slot:
//! O(1) memory and time, no chaining, no aging. Losing a deep entry to a
//! shallower one on collision only costs re-search, never correctness, since
//! probing validates the full 64-bit key and the caller validates depth.

use crate::constants::{DEFAULT_TT_CAPACITY, MATE_THRESHOLD};
use crate::error::{EngineError, EngineResult};
use chess::ChessMove;

/// Classification of a stored score relative to the window it was searched
/// with: an exact value, a lower bound (fail-high) or an upper bound
/// (fail-low).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

/// One cached search result.
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    pub key: u64,
    value: i32,
    pub depth: u8,
    pub bound: Bound,
    pub best: Option<ChessMove>,
}

impl TtEntry {
    /// The stored score, translated back to the probing node's ply.
    ///
    /// Mate scores are kept root-relative inside the table so that an entry
    /// written at one ply stays correct when read at another; everything
    /// else passes through unchanged.
    pub fn score_at(&self, ply: u8) -> i32 {
        from_tt_score(self.value, ply)
    }
}

/// Fixed-capacity, direct-mapped cache of prior search results keyed by
/// position hash.
pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
}

impl TranspositionTable {
    /// Build a table with `capacity` slots.
    pub fn new(capacity: usize) -> EngineResult<Self> {
        if capacity == 0 {
            return Err(EngineError::InvalidTableCapacity { capacity });
        }
        Ok(TranspositionTable {
            slots: vec![None; capacity],
        })
    }

    /// Table with the default slot count.
    pub fn with_default_capacity() -> Self {
        TranspositionTable {
            slots: vec![None; DEFAULT_TT_CAPACITY],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    /// Look up `key`. Returns the addressed entry only if its stored key
    /// matches exactly, guarding against index collisions across the full
    /// key space. Depth sufficiency is the caller's check.
    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        let slot = self.slots[self.index(key)].as_ref()?;
        if slot.key == key {
            Some(slot)
        } else {
            None
        }
    }

    /// Record a result for `key`, overwriting whatever occupied the slot.
    /// `value` is relative to the node at `ply`; mate scores are converted
    /// to root-relative form before storage.
    pub fn store(
        &mut self,
        key: u64,
        value: i32,
        depth: u8,
        bound: Bound,
        best: Option<ChessMove>,
        ply: u8,
    ) {
        let index = self.index(key);
        self.slots[index] = Some(TtEntry {
            key,
            value: to_tt_score(value, ply),
            depth,
            bound,
            best,
        });
    }

    /// Drop every entry. Used for the default rebuild-per-decision policy.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

/// Node-relative score -> table form (mate distances become root-relative).
fn to_tt_score(value: i32, ply: u8) -> i32 {
    if value >= MATE_THRESHOLD {
        value + i32::from(ply)
    } else if value <= -MATE_THRESHOLD {
        value - i32::from(ply)
    } else {
        value
    }
}

/// Table form -> score relative to a node at `ply`.
fn from_tt_score(value: i32, ply: u8) -> i32 {
    if value >= MATE_THRESHOLD {
        value - i32::from(ply)
    } else if value <= -MATE_THRESHOLD {
        value + i32::from(ply)
    } else {
        value
    }
}
