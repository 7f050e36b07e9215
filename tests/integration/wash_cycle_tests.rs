//! Cycle sequencing: pour → run → drain, plus the rinse pass.

use dishwasher::app::events::WasherEvent;
use dishwasher::app::result::{CycleReport, Status};
use dishwasher::config::{FillLevel, ProgramConfiguration, WashingProgram};
use dishwasher::fsm::WashState;

use crate::mock_hw::{HwCall, RecordingSink, Rig, recorded};

#[test]
fn eco_without_tablets_runs_program_then_rinse() {
    let (mut washer, calls) = Rig::new().build();
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, false, FillLevel::Full);

    let result = washer.start(cfg);

    assert_eq!(result.status(), Status::Success);
    assert_eq!(
        recorded(&calls),
        [
            HwCall::DoorClosed,
            HwCall::DoorLock,
            HwCall::Pour(FillLevel::Full),
            HwCall::RunProgram(WashingProgram::Eco),
            HwCall::Drain,
            HwCall::Pour(FillLevel::Full),
            HwCall::RunProgram(WashingProgram::Rinse),
            HwCall::Drain,
            HwCall::DoorUnlock,
        ]
    );
}

#[test]
fn rinse_program_runs_exactly_one_cycle() {
    let (mut washer, calls) = Rig::new().build();
    let cfg = ProgramConfiguration::new(WashingProgram::Rinse, true, FillLevel::Full);

    let result = washer.start(cfg);

    assert_eq!(result.status(), Status::Success);
    assert_eq!(
        recorded(&calls),
        [
            HwCall::DoorClosed,
            HwCall::FilterCapacity,
            HwCall::DoorLock,
            HwCall::Pour(FillLevel::Full),
            HwCall::RunProgram(WashingProgram::Rinse),
            HwCall::Drain,
            HwCall::DoorUnlock,
        ]
    );
    assert_eq!(result.run_minutes(), 12);
}

#[test]
fn intensive_uses_configured_fill_level_for_both_cycles() {
    let (mut washer, calls) = Rig::new().build();
    let cfg = ProgramConfiguration::new(WashingProgram::Intensive, false, FillLevel::Half);

    let result = washer.start(cfg);

    let pours: Vec<HwCall> = recorded(&calls)
        .into_iter()
        .filter(|c| matches!(c, HwCall::Pour(_)))
        .collect();
    assert_eq!(pours, [HwCall::Pour(FillLevel::Half), HwCall::Pour(FillLevel::Half)]);
    assert_eq!(
        result.cycles(),
        [
            CycleReport {
                program: WashingProgram::Intensive,
                fill_level: FillLevel::Half,
            },
            CycleReport {
                program: WashingProgram::Rinse,
                fill_level: FillLevel::Half,
            },
        ]
    );
    assert_eq!(result.run_minutes(), 120 + 12);
}

#[test]
fn events_follow_cycle_order() {
    let (mut washer, _) = Rig::new().build();
    let mut sink = RecordingSink::default();
    let cfg = ProgramConfiguration::new(WashingProgram::Night, false, FillLevel::Full);

    washer.start_with(cfg, &mut sink);

    let night = CycleReport {
        program: WashingProgram::Night,
        fill_level: FillLevel::Full,
    };
    let rinse = CycleReport {
        program: WashingProgram::Rinse,
        fill_level: FillLevel::Full,
    };
    let cycle_events: Vec<&WasherEvent> = sink
        .events
        .iter()
        .filter(|e| {
            matches!(
                e,
                WasherEvent::CycleStarted(_) | WasherEvent::CycleCompleted(_)
            )
        })
        .collect();
    assert_eq!(
        cycle_events,
        [
            &WasherEvent::CycleStarted(night),
            &WasherEvent::CycleCompleted(night),
            &WasherEvent::CycleStarted(rinse),
            &WasherEvent::CycleCompleted(rinse),
        ]
    );
    assert!(sink.events.contains(&WasherEvent::StateChanged {
        from: WashState::Washing,
        to: WashState::Rinsing,
    }));
}

#[test]
fn consecutive_runs_are_independent() {
    let (mut washer, calls) = Rig::new().build();

    let first = washer.start(ProgramConfiguration::new(
        WashingProgram::Rinse,
        false,
        FillLevel::Half,
    ));
    calls.borrow_mut().clear();
    let second = washer.start(ProgramConfiguration::new(
        WashingProgram::Eco,
        false,
        FillLevel::Full,
    ));

    assert_eq!(first.cycles().len(), 1);
    assert_eq!(second.cycles().len(), 2);
    assert_eq!(recorded(&calls).first(), Some(&HwCall::DoorClosed));
}
