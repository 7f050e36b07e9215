//! Simulated hardware.
//!
//! In-memory stand-ins for the four collaborators, used by the
//! `dishwasher-sim` binary, the fuzz target and unit tests.  Each one
//! counts what it was asked to do, and the actuators can be told to
//! fault on a chosen step.

use crate::app::ports::{DirtFilter, Door, Engine, WaterPump};
use crate::config::{FillLevel, WashingProgram};
use crate::error::{EngineError, PumpError};

// ── Door ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SimDoor {
    closed: bool,
    locked: bool,
    checks: u32,
    lock_count: u32,
}

impl SimDoor {
    pub fn new(closed: bool) -> Self {
        Self {
            closed,
            ..Self::default()
        }
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of `closed()` queries.
    pub fn checks(&self) -> u32 {
        self.checks
    }

    pub fn lock_count(&self) -> u32 {
        self.lock_count
    }
}

impl Door for SimDoor {
    fn closed(&mut self) -> bool {
        self.checks += 1;
        self.closed
    }

    fn lock(&mut self) {
        self.locked = true;
        self.lock_count += 1;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }
}

// ── Dirt filter ───────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SimFilter {
    capacity: f64,
    queries: u32,
}

impl SimFilter {
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            queries: 0,
        }
    }

    /// Number of `capacity()` queries.
    pub fn queries(&self) -> u32 {
        self.queries
    }
}

impl DirtFilter for SimFilter {
    fn capacity(&mut self) -> f64 {
        self.queries += 1;
        self.capacity
    }
}

// ── Water pump ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStep {
    Pour,
    Drain,
}

#[derive(Debug, Clone, Default)]
pub struct SimPump {
    pours: Vec<FillLevel>,
    drains: u32,
    /// Fault on the n-th (1-based) call of the given step.
    fault: Option<(PumpStep, u32, PumpError)>,
}

impl SimPump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(step: PumpStep, nth: u32, error: PumpError) -> Self {
        Self {
            fault: Some((step, nth, error)),
            ..Self::default()
        }
    }

    /// Fill levels of every pour that succeeded.
    pub fn pours(&self) -> &[FillLevel] {
        &self.pours
    }

    /// Number of drains that succeeded.
    pub fn drains(&self) -> u32 {
        self.drains
    }

    fn check(&self, step: PumpStep, attempt: u32) -> Result<(), PumpError> {
        match self.fault {
            Some((s, nth, error)) if s == step && nth == attempt => Err(error),
            _ => Ok(()),
        }
    }
}

impl WaterPump for SimPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.check(PumpStep::Pour, self.pours.len() as u32 + 1)?;
        self.pours.push(level);
        Ok(())
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.check(PumpStep::Drain, self.drains + 1)?;
        self.drains += 1;
        Ok(())
    }
}

// ── Wash engine ───────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SimEngine {
    programs: Vec<WashingProgram>,
    fault: Option<(WashingProgram, EngineError)>,
}

impl SimEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fault whenever `program` is run.
    pub fn failing_on(program: WashingProgram, error: EngineError) -> Self {
        Self {
            fault: Some((program, error)),
            ..Self::default()
        }
    }

    /// Programs that ran to completion.
    pub fn programs(&self) -> &[WashingProgram] {
        &self.programs
    }
}

impl Engine for SimEngine {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        if let Some((p, error)) = self.fault {
            if p == program {
                return Err(error);
            }
        }
        self.programs.push(program);
        Ok(())
    }
}
