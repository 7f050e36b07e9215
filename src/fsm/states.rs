//! Transition table for the wash state machine.
//!
//! ```text
//!  INIT ──[door closed]──▶ DOOR_CHECKED ──[filter ok / no tablets]──▶ FILTER_CHECKED
//!    │                          │                                         │
//!    └──[door open]──▶ FAILED ◀─┘[filter low]                             ▼
//!                        ▲                                             WASHING
//!                        │                               [program == RINSE] │ [else]
//!                        └──────[hardware fault]────── RINSING ◀────────────┤
//!                                                         │                 │
//!                                                         └──────▶ DONE ◀───┘
//! ```

use super::WashState;

/// One row of the table.
pub struct StateDescriptor {
    pub id: WashState,
    pub name: &'static str,
    pub next: &'static [WashState],
}

/// Build the transition table.  Rows are indexed by `WashState as usize`.
pub fn build_state_table() -> [StateDescriptor; WashState::COUNT] {
    [
        StateDescriptor {
            id: WashState::Init,
            name: "Init",
            next: &[WashState::DoorChecked, WashState::Failed],
        },
        StateDescriptor {
            id: WashState::DoorChecked,
            name: "DoorChecked",
            next: &[WashState::FilterChecked, WashState::Failed],
        },
        StateDescriptor {
            id: WashState::FilterChecked,
            name: "FilterChecked",
            next: &[WashState::Washing],
        },
        StateDescriptor {
            id: WashState::Washing,
            name: "Washing",
            next: &[WashState::Rinsing, WashState::Done, WashState::Failed],
        },
        StateDescriptor {
            id: WashState::Rinsing,
            name: "Rinsing",
            next: &[WashState::Done, WashState::Failed],
        },
        StateDescriptor {
            id: WashState::Done,
            name: "Done",
            next: &[],
        },
        StateDescriptor {
            id: WashState::Failed,
            name: "Failed",
            next: &[],
        },
    ]
}
