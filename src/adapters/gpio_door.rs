//! Door adapter over `embedded-hal` digital pins.
//!
//! * `sense` — reed switch on the door frame.
//! * `latch` — solenoid that holds the door shut during a run.
//!
//! ## Safety contract
//!
//! A switch that cannot be read counts as an open door, so a broken
//! harness never lets a program start.  Latch write failures are logged
//! and otherwise ignored; the orchestrator has no fallback for them.

use embedded_hal::digital::{InputPin, OutputPin};
use log::{error, warn};

use crate::app::ports::Door;

/// Electrical level the reed switch reports when the door is shut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchPolarity {
    ActiveHigh,
    ActiveLow,
}

pub struct GpioDoor<S, L> {
    sense: S,
    latch: L,
    polarity: SwitchPolarity,
}

impl<S: InputPin, L: OutputPin> GpioDoor<S, L> {
    pub fn new(sense: S, latch: L, polarity: SwitchPolarity) -> Self {
        Self {
            sense,
            latch,
            polarity,
        }
    }

    pub fn release(self) -> (S, L) {
        (self.sense, self.latch)
    }
}

impl<S: InputPin, L: OutputPin> Door for GpioDoor<S, L> {
    fn closed(&mut self) -> bool {
        let level = match self.polarity {
            SwitchPolarity::ActiveHigh => self.sense.is_high(),
            SwitchPolarity::ActiveLow => self.sense.is_low(),
        };
        match level {
            Ok(closed) => closed,
            Err(e) => {
                warn!("Door switch read failed ({:?}), treating door as open", e);
                false
            }
        }
    }

    fn lock(&mut self) {
        if let Err(e) = self.latch.set_high() {
            error!("Door latch engage failed: {:?}", e);
        }
    }

    fn unlock(&mut self) {
        if let Err(e) = self.latch.set_low() {
            error!("Door latch release failed: {:?}", e);
        }
    }
}
