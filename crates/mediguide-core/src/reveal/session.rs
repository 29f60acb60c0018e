//! Reveal session state

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::classify::Fragment;

/// Process-wide generation counter; 0 is never issued
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifier of one reveal session.
///
/// Every allocated generation is strictly greater than all previously
/// allocated ones in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    /// Allocate a fresh generation
    pub fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::SeqCst))
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// Lifecycle of the scheduler's current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// No reveal started yet
    Idle,
    /// Fragments still being appended
    Revealing,
    /// Every fragment appended
    Done,
    /// Replaced by a newer reveal or its sink went away
    Superseded,
}

impl RevealState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Superseded)
    }
}

impl std::fmt::Display for RevealState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Revealing => write!(f, "revealing"),
            Self::Done => write!(f, "done"),
            Self::Superseded => write!(f, "superseded"),
        }
    }
}

/// One in-progress disclosure of a fragment sequence
#[derive(Debug, Clone)]
pub struct RevealSession {
    fragments: Vec<Fragment>,
    cursor: usize,
    generation: Generation,
    active: bool,
}

impl RevealSession {
    pub fn new(generation: Generation, fragments: Vec<Fragment>) -> Self {
        Self {
            fragments,
            cursor: 0,
            generation,
            active: true,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Index of the next fragment to reveal
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.fragments.len()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragments not yet revealed
    pub fn remaining(&self) -> &[Fragment] {
        &self.fragments[self.cursor.min(self.fragments.len())..]
    }

    /// Fragment at the cursor, moving the cursor forward by one
    pub(crate) fn advance(&mut self) -> Option<&Fragment> {
        let fragment = self.fragments.get(self.cursor)?;
        self.cursor += 1;
        Some(fragment)
    }

    /// Stop accepting steps
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}
