//! Hardware faults abort the run and come back as a status.

use dishwasher::app::events::WasherEvent;
use dishwasher::app::result::Status;
use dishwasher::config::{FillLevel, ProgramConfiguration, WashingProgram};
use dishwasher::error::{EngineError, HardwareFault, PumpError};

use crate::mock_hw::{HwCall, RecordingSink, Rig, recorded};

#[test]
fn pour_fault_skips_engine_and_unlocks_door() {
    let (mut washer, calls) = Rig::new()
        .pump_fault_at(0, PumpError::InletBlocked)
        .build();
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, false, FillLevel::Full);

    let result = washer.start(cfg);

    assert_eq!(result.status(), Status::ErrorPump);
    assert_eq!(result.fault(), Some(HardwareFault::Pump(PumpError::InletBlocked)));
    assert_eq!(
        recorded(&calls),
        [
            HwCall::DoorClosed,
            HwCall::DoorLock,
            HwCall::Pour(FillLevel::Full),
            HwCall::DoorUnlock,
        ]
    );
    assert_eq!(result.run_minutes(), 0);
}

#[test]
fn engine_fault_in_rinse_pass_skips_final_drain() {
    let (mut washer, calls) = Rig::new()
        .engine_fault_on(WashingProgram::Rinse, EngineError::HeaterFailure)
        .build();
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, false, FillLevel::Half);

    let result = washer.start(cfg);

    assert_eq!(result.status(), Status::ErrorEngine);
    assert_eq!(
        recorded(&calls),
        [
            HwCall::DoorClosed,
            HwCall::DoorLock,
            HwCall::Pour(FillLevel::Half),
            HwCall::RunProgram(WashingProgram::Eco),
            HwCall::Drain,
            HwCall::Pour(FillLevel::Half),
            HwCall::RunProgram(WashingProgram::Rinse),
            HwCall::DoorUnlock,
        ]
    );
    assert_eq!(result.run_minutes(), WashingProgram::Eco.time_in_minutes());
    assert_eq!(result.cycles().len(), 1);
}

#[test]
fn drain_fault_in_first_cycle_skips_rinse_pass() {
    let (mut washer, calls) = Rig::new()
        .pump_fault_at(1, PumpError::DrainBlocked)
        .build();
    let cfg = ProgramConfiguration::new(WashingProgram::Intensive, true, FillLevel::Full);

    let result = washer.start(cfg);

    assert_eq!(result.status(), Status::ErrorPump);
    let calls = recorded(&calls);
    assert!(!calls.contains(&HwCall::RunProgram(WashingProgram::Rinse)));
    assert_eq!(calls.last(), Some(&HwCall::DoorUnlock));
}

#[test]
fn engine_fault_on_first_cycle_never_drains() {
    let (mut washer, calls) = Rig::new()
        .engine_fault_on(WashingProgram::Rinse, EngineError::Stalled)
        .build();
    let cfg = ProgramConfiguration::new(WashingProgram::Rinse, false, FillLevel::Full);

    let result = washer.start(cfg);

    assert_eq!(result.status(), Status::ErrorEngine);
    assert!(!recorded(&calls).contains(&HwCall::Drain));
}

#[test]
fn fault_is_reported_in_finished_event() {
    let (mut washer, _) = Rig::new()
        .pump_fault_at(3, PumpError::Driver(0x11))
        .build();
    let mut sink = RecordingSink::default();
    let cfg = ProgramConfiguration::new(WashingProgram::Night, false, FillLevel::Full);

    let result = washer.start_with(cfg, &mut sink);

    assert_eq!(result.status(), Status::ErrorPump);
    assert_eq!(
        sink.events.last(),
        Some(&WasherEvent::Finished {
            status: Status::ErrorPump,
            run_minutes: WashingProgram::Night.time_in_minutes(),
        })
    );
}
