//! Live fleet state for DMR FleetWatch
//!
//! Tracks the repeaters observed on the network: per-timeslot call state,
//! liveness and telemetry-polling cadence, driven by a periodic sweep.

pub mod repeaters;
