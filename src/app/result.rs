//! Terminal outcome of one dishwasher run.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{FillLevel, WashingProgram};
use crate::error::HardwareFault;

/// Upper bound on wash cycles per run: the configured program plus one rinse pass.
pub const MAX_CYCLES: usize = 2;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    /// Door was open; nothing else was touched.
    DoorOpen,
    /// Tablets were used and the dirt filter reported too little capacity.
    ErrorFilter,
    /// The water pump faulted during pour or drain.
    ErrorPump,
    /// The wash engine faulted while running a program.
    ErrorEngine,
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "SUCCESS",
            Self::DoorOpen => "DOOR_OPEN",
            Self::ErrorFilter => "ERROR_FILTER",
            Self::ErrorPump => "ERROR_PUMP",
            Self::ErrorEngine => "ERROR_ENGINE",
        })
    }
}

/// One pour → run → drain cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub program: WashingProgram,
    pub fill_level: FillLevel,
}

/// Result handed back by [`DishWasher::start`](super::service::DishWasher::start).
///
/// Built once, at the point the run terminates, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    status: Status,
    run_minutes: u32,
    cycles: heapless::Vec<CycleReport, MAX_CYCLES>,
    fault: Option<HardwareFault>,
}

impl RunResult {
    /// A run rejected before any actuation.
    pub(crate) fn rejected(status: Status) -> Self {
        debug_assert!(matches!(status, Status::DoorOpen | Status::ErrorFilter));
        Self {
            status,
            run_minutes: 0,
            cycles: heapless::Vec::new(),
            fault: None,
        }
    }

    /// A run that reached actuation and either finished or faulted.
    pub(crate) fn completed(
        cycles: heapless::Vec<CycleReport, MAX_CYCLES>,
        fault: Option<HardwareFault>,
    ) -> Self {
        let run_minutes = cycles.iter().map(|c| c.program.time_in_minutes()).sum();
        Self {
            status: fault.map_or(Status::Success, HardwareFault::status),
            run_minutes,
            cycles,
            fault,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Engine minutes of every cycle that completed.
    pub fn run_minutes(&self) -> u32 {
        self.run_minutes
    }

    /// Cycles that completed, in execution order.
    pub fn cycles(&self) -> &[CycleReport] {
        &self.cycles
    }

    /// The hardware fault that aborted the run, if any.
    pub fn fault(&self) -> Option<HardwareFault> {
        self.fault
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
