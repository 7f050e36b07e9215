//! Fuzz target: program configuration decoding + run
//!
//! Decodes arbitrary bytes as a postcard and as a JSON configuration and
//! runs every one that decodes against simulated hardware, checking:
//! - No panics under arbitrary input
//! - Every run ends with a status consistent with the injected hardware
//! - At most two cycles, and the door is always released
//!
//! cargo fuzz run fuzz_program_config

#![no_main]

use libfuzzer_sys::fuzz_target;

use dishwasher::adapters::sim::{PumpStep, SimDoor, SimEngine, SimFilter, SimPump};
use dishwasher::app::result::Status;
use dishwasher::app::service::{DishWasher, MAXIMAL_FILTER_CAPACITY};
use dishwasher::config::{ProgramConfiguration, WashingProgram};
use dishwasher::error::{EngineError, PumpError};

fn run(cfg: ProgramConfiguration, knobs: u8) {
    let door_closed = knobs & 0b0001 != 0;
    let capacity = if knobs & 0b0010 != 0 {
        MAXIMAL_FILTER_CAPACITY
    } else {
        MAXIMAL_FILTER_CAPACITY - 1.0
    };
    let pump = if knobs & 0b0100 != 0 {
        SimPump::failing_at(PumpStep::Pour, 2, PumpError::InletBlocked)
    } else {
        SimPump::new()
    };
    let engine = if knobs & 0b1000 != 0 {
        SimEngine::failing_on(WashingProgram::Rinse, EngineError::Stalled)
    } else {
        SimEngine::new()
    };

    let mut dw = DishWasher::new(pump, engine, SimFilter::new(capacity), SimDoor::new(door_closed));
    let result = dw.start(cfg);

    assert!(result.cycles().len() <= 2);
    assert!(!dw.door().is_locked(), "door left locked");

    if !door_closed {
        assert_eq!(result.status(), Status::DoorOpen);
    } else if cfg.tablets_used() && capacity < MAXIMAL_FILTER_CAPACITY {
        assert_eq!(result.status(), Status::ErrorFilter);
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&knobs, rest)) = data.split_first() else {
        return;
    };

    if let Ok(cfg) = ProgramConfiguration::from_bytes(rest) {
        run(cfg, knobs);
    }

    if let Ok(json) = core::str::from_utf8(rest) {
        if let Ok(cfg) = ProgramConfiguration::from_json(json) {
            run(cfg, knobs);
        }
    }
});
