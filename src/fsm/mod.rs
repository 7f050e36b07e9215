//! Per-run wash state machine.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  TransitionTable                                         │
//! │  ┌───────────────┬──────────────────────────────────┐    │
//! │  │ WashState     │ allowed successors               │    │
//! │  ├───────────────┼──────────────────────────────────┤    │
//! │  │ Init          │ DoorChecked, Failed              │    │
//! │  │ DoorChecked   │ FilterChecked, Failed            │    │
//! │  │ FilterChecked │ Washing                          │    │
//! │  │ Washing       │ Rinsing, Done, Failed            │    │
//! │  │ Rinsing       │ Done, Failed                     │    │
//! │  │ Done / Failed │ (terminal)                       │    │
//! │  └───────────────┴──────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The orchestrator creates a fresh [`Fsm`] for every run and drives it
//! forward as each step succeeds.  The table only points forward, so a run
//! can never go back to an earlier check.

pub mod states;

use log::info;
use serde::{Deserialize, Serialize};

use states::{StateDescriptor, build_state_table};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Every state a single run passes through.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WashState {
    Init = 0,
    DoorChecked = 1,
    FilterChecked = 2,
    Washing = 3,
    Rinsing = 4,
    Done = 5,
    Failed = 6,
}

impl WashState {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 7;

    /// Convert an index back to `WashState`.  Panics on out-of-range in
    /// debug builds; returns `Failed` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Init,
            1 => Self::DoorChecked,
            2 => Self::FilterChecked,
            3 => Self::Washing,
            4 => Self::Rinsing,
            5 => Self::Done,
            6 => Self::Failed,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Failed
            }
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

// ---------------------------------------------------------------------------
// FSM
// ---------------------------------------------------------------------------

/// Forward-only tracker for one run.
pub struct Fsm {
    table: [StateDescriptor; WashState::COUNT],
    current: usize,
}

impl Fsm {
    pub fn new() -> Self {
        Self {
            table: build_state_table(),
            current: WashState::Init as usize,
        }
    }

    pub fn current_state(&self) -> WashState {
        WashState::from_index(self.current)
    }

    pub fn state_name(&self) -> &'static str {
        self.table[self.current].name
    }

    /// Whether `next` is a legal successor of the current state.
    pub fn can_transition(&self, next: WashState) -> bool {
        self.table[self.current].next.contains(&next)
    }

    /// Move to `next`.  Returns the state that was left.
    ///
    /// A transition outside the table trips a debug assertion and leaves
    /// the state unchanged.
    pub fn transition(&mut self, next: WashState) -> Option<WashState> {
        if !self.can_transition(next) {
            debug_assert!(
                false,
                "illegal wash transition: {} -> {:?}",
                self.state_name(),
                next
            );
            return None;
        }

        let from = self.current_state();
        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next as usize].name
        );
        self.current = next as usize;
        Some(from)
    }
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new()
    }
}
