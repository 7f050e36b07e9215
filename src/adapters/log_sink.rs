//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing run events through the `log`
//! facade.  A front-panel or telemetry adapter would implement the same
//! trait.

use log::info;

use crate::app::events::WasherEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`WasherEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &WasherEvent) {
        match event {
            WasherEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            WasherEvent::CycleStarted(c) => {
                info!("CYCLE | start program={:?} fill={:?}", c.program, c.fill_level);
            }
            WasherEvent::CycleCompleted(c) => {
                info!(
                    "CYCLE | done program={:?} fill={:?} minutes={}",
                    c.program,
                    c.fill_level,
                    c.program.time_in_minutes()
                );
            }
            WasherEvent::Finished {
                status,
                run_minutes,
            } => {
                info!("RESULT | status={} minutes={}", status, run_minutes);
            }
        }
    }
}
