//! Dishwasher orchestrator — the hexagonal core.
//!
//! [`DishWasher`] owns the four hardware collaborators and runs one
//! program per [`start`](DishWasher::start) call.  It keeps no state
//! between runs; everything a run needs lives in a [`RunContext`] local
//! to that call.
//!
//! ```text
//!        Door ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  DirtFilter ──▶ │       DishWasher        │
//!   WaterPump ◀── │  checks · cycles · FSM  │ ──▶ RunResult
//!      Engine ◀── └────────────────────────┘
//! ```
//!
//! Run order:
//!
//! 1. door closed?            no  → `DOOR_OPEN`
//! 2. tablets used?           yes → filter capacity ≥ max? no → `ERROR_FILTER`
//! 3. lock door
//! 4. cycle(configured program)
//! 5. cycle(RINSE) unless the configured program already is RINSE
//! 6. unlock door             → `SUCCESS`, or the status of the first fault

use log::{debug, error, info, warn};

use crate::config::{FillLevel, ProgramConfiguration, WashingProgram};
use crate::error::HardwareFault;
use crate::fsm::{Fsm, WashState};

use super::events::WasherEvent;
use super::ports::{DirtFilter, Door, Engine, EventSink, NoopSink, WaterPump};
use super::result::{CycleReport, MAX_CYCLES, RunResult, Status};

/// Minimum filter capacity required to run with a detergent tablet.
/// Capacities strictly below this value are rejected, and so is a NaN
/// reading.
pub const MAXIMAL_FILTER_CAPACITY: f64 = 50.0;

// ───────────────────────────────────────────────────────────────
// Per-run context
// ───────────────────────────────────────────────────────────────

/// Everything one run mutates.  Dropped when `start` returns.
struct RunContext<'a, S: EventSink> {
    fsm: Fsm,
    sink: &'a mut S,
    cycles: heapless::Vec<CycleReport, MAX_CYCLES>,
}

impl<'a, S: EventSink> RunContext<'a, S> {
    fn new(sink: &'a mut S) -> Self {
        Self {
            fsm: Fsm::new(),
            sink,
            cycles: heapless::Vec::new(),
        }
    }

    fn advance(&mut self, to: WashState) {
        if let Some(from) = self.fsm.transition(to) {
            self.sink.emit(&WasherEvent::StateChanged { from, to });
        }
    }
}

// ───────────────────────────────────────────────────────────────
// DishWasher
// ───────────────────────────────────────────────────────────────

/// The orchestrator.  Collaborators are injected at construction.
pub struct DishWasher<P, E, F, D> {
    pump: P,
    engine: E,
    filter: F,
    door: D,
}

impl<P, E, F, D> DishWasher<P, E, F, D>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
{
    pub fn new(pump: P, engine: E, filter: F, door: D) -> Self {
        Self {
            pump,
            engine,
            filter,
            door,
        }
    }

    // ── Entry points ──────────────────────────────────────────

    /// Run `config` to completion.  Never fails: every outcome is a
    /// [`Status`] on the returned [`RunResult`].
    pub fn start(&mut self, config: ProgramConfiguration) -> RunResult {
        self.start_with(config, &mut NoopSink)
    }

    /// Same as [`start`](Self::start), emitting progress to `sink`.
    pub fn start_with(
        &mut self,
        config: ProgramConfiguration,
        sink: &mut impl EventSink,
    ) -> RunResult {
        info!(
            "Starting {:?} (fill={:?}, tablets={})",
            config.program(),
            config.fill_level(),
            config.tablets_used()
        );

        let mut ctx = RunContext::new(sink);
        let result = self.run(config, &mut ctx);

        ctx.sink.emit(&WasherEvent::Finished {
            status: result.status(),
            run_minutes: result.run_minutes(),
        });
        result
    }

    // ── Collaborator access ───────────────────────────────────

    pub fn pump(&self) -> &P {
        &self.pump
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn door(&self) -> &D {
        &self.door
    }

    /// Give the collaborators back, e.g. to hand them to a new controller.
    pub fn into_parts(self) -> (P, E, F, D) {
        (self.pump, self.engine, self.filter, self.door)
    }

    // ── Internal ──────────────────────────────────────────────

    fn run<S: EventSink>(
        &mut self,
        config: ProgramConfiguration,
        ctx: &mut RunContext<'_, S>,
    ) -> RunResult {
        if let Some(status) = self.check_preconditions(config, ctx) {
            ctx.advance(WashState::Failed);
            return RunResult::rejected(status);
        }

        self.door.lock();
        let outcome = self.run_cycles(config, ctx);
        self.door.unlock();

        match outcome {
            Ok(()) => {
                ctx.advance(WashState::Done);
                info!("{:?} finished", config.program());
            }
            Err(fault) => {
                ctx.advance(WashState::Failed);
                error!("{:?} aborted: {}", config.program(), fault);
            }
        }

        RunResult::completed(core::mem::take(&mut ctx.cycles), outcome.err())
    }

    /// Door first, then the filter when a tablet is loaded.
    /// Returns the rejection status, or `None` when the run may proceed.
    fn check_preconditions<S: EventSink>(
        &mut self,
        config: ProgramConfiguration,
        ctx: &mut RunContext<'_, S>,
    ) -> Option<Status> {
        if !self.door.closed() {
            warn!("Door open, {:?} not started", config.program());
            return Some(Status::DoorOpen);
        }
        ctx.advance(WashState::DoorChecked);

        if config.tablets_used() {
            let capacity = self.filter.capacity();
            if capacity.is_nan() || capacity < MAXIMAL_FILTER_CAPACITY {
                warn!(
                    "Filter capacity {:.1} below {:.1}, {:?} not started",
                    capacity,
                    MAXIMAL_FILTER_CAPACITY,
                    config.program()
                );
                return Some(Status::ErrorFilter);
            }
            debug!("Filter capacity {:.1} ok", capacity);
        } else {
            debug!("No tablet loaded, filter check skipped");
        }
        ctx.advance(WashState::FilterChecked);

        None
    }

    fn run_cycles<S: EventSink>(
        &mut self,
        config: ProgramConfiguration,
        ctx: &mut RunContext<'_, S>,
    ) -> Result<(), HardwareFault> {
        let fill_level = config.fill_level();

        ctx.advance(WashState::Washing);
        self.wash_cycle(fill_level, config.program(), ctx)?;

        if !config.program().is_rinse() {
            ctx.advance(WashState::Rinsing);
            self.wash_cycle(fill_level, WashingProgram::Rinse, ctx)?;
        }

        Ok(())
    }

    /// pour → run → drain.  The first fault skips the rest.
    fn wash_cycle<S: EventSink>(
        &mut self,
        fill_level: FillLevel,
        program: WashingProgram,
        ctx: &mut RunContext<'_, S>,
    ) -> Result<(), HardwareFault> {
        let cycle = CycleReport {
            program,
            fill_level,
        };
        ctx.sink.emit(&WasherEvent::CycleStarted(cycle));

        debug!("Pour {:?}", fill_level);
        self.pump.pour(fill_level)?;
        debug!("Run {:?}", program);
        self.engine.run_program(program)?;
        debug!("Drain");
        self.pump.drain()?;

        let pushed = ctx.cycles.push(cycle);
        debug_assert!(pushed.is_ok(), "more than {MAX_CYCLES} cycles in one run");
        ctx.sink.emit(&WasherEvent::CycleCompleted(cycle));
        Ok(())
    }
}
