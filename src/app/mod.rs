//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the orchestration rules of the dishwasher:
//! precondition checks, wash and rinse cycle sequencing, and the
//! translation of hardware faults into a terminal status.  All
//! interaction with the machine happens through the **port traits** in
//! [`ports`], keeping this layer fully testable without real hardware.

pub mod events;
pub mod ports;
pub mod result;
pub mod service;
