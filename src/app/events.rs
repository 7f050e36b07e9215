//! Outbound run events.
//!
//! The [`DishWasher`](super::service::DishWasher) emits these through the
//! [`EventSink`](super::ports::EventSink) port while a run progresses.

use serde::Serialize;

use crate::fsm::WashState;

use super::result::{CycleReport, Status};

/// Structured events emitted by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WasherEvent {
    /// The run moved between states.
    StateChanged { from: WashState, to: WashState },

    /// A pour → run → drain cycle is about to begin.
    CycleStarted(CycleReport),

    /// A cycle drained successfully.
    CycleCompleted(CycleReport),

    /// The run terminated.  Always the last event of a run.
    Finished { status: Status, run_minutes: u32 },
}
