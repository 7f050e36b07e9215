//! Port traits — the boundary between the orchestrator and the machine.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DishWasher (domain)
//! ```
//!
//! Hardware drivers, simulators and test doubles implement these traits.
//! The [`DishWasher`](super::service::DishWasher) consumes them via
//! generics, so the orchestration logic never touches hardware directly.
//!
//! Every method takes `&mut self`: each collaborator stands for one
//! physical unit, and reading a switch or a sensor is an I/O operation.

use crate::config::{FillLevel, WashingProgram};
use crate::error::{EngineError, PumpError};

use super::events::WasherEvent;

// ───────────────────────────────────────────────────────────────
// Door (sensor + latch)
// ───────────────────────────────────────────────────────────────

pub trait Door {
    /// True when the door switch reports closed.
    fn closed(&mut self) -> bool;

    /// Engage the door latch before the first cycle.
    fn lock(&mut self);

    /// Release the door latch once the machine is idle again.
    fn unlock(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Dirt filter (sensor)
// ───────────────────────────────────────────────────────────────

pub trait DirtFilter {
    /// Remaining filter capacity, in the units of
    /// [`MAXIMAL_FILTER_CAPACITY`](super::service::MAXIMAL_FILTER_CAPACITY).
    fn capacity(&mut self) -> f64;
}

// ───────────────────────────────────────────────────────────────
// Water pump (actuator)
// ───────────────────────────────────────────────────────────────

pub trait WaterPump {
    /// Fill the tub to `level`.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;

    /// Empty the tub.
    fn drain(&mut self) -> Result<(), PumpError>;
}

// ───────────────────────────────────────────────────────────────
// Wash engine (actuator)
// ───────────────────────────────────────────────────────────────

pub trait Engine {
    /// Run the circulation/heating profile of `program` to completion.
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The orchestrator emits [`WasherEvent`]s through this port.  Adapters
/// decide where they go (serial log, front panel, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &WasherEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: &WasherEvent) {}
}
