use std::net::IpAddr;

use dmr_core::Timeslot;

use super::repeater::Repeater;

/// Side effects raised by the registry sweep.
/// Implementations are fire-and-forget triggers into the polling and
/// state-sink subsystems; they must not call back into the registry.
pub trait RepeaterEvents {
    /// Trigger a telemetry (repeater info) poll for the given address.
    fn request_repeater_info(&mut self, addr: IpAddr);

    /// Trigger an RSSI poll for the given address.
    fn request_rssi(&mut self, addr: IpAddr);

    /// Invoked exactly once per call-ended transition on a timeslot.
    fn call_ended(&mut self, repeater: &Repeater, ts: Timeslot);
}
