use std::net::IpAddr;

use dmr_core::Timeslot;
use dmr_entities::repeaters::{Repeater, RepeaterEvents};

/// A sweep side-effect sink for testing purposes
/// Collects all raised events for later inspection
#[derive(Default)]
pub struct EventSink {
    pub info_requests: Vec<IpAddr>,
    pub rssi_requests: Vec<IpAddr>,
    pub calls_ended: Vec<(IpAddr, Timeslot)>,
}

impl RepeaterEvents for EventSink {
    fn request_repeater_info(&mut self, addr: IpAddr) {
        tracing::debug!("request_repeater_info: {}", addr);
        self.info_requests.push(addr);
    }

    fn request_rssi(&mut self, addr: IpAddr) {
        tracing::debug!("request_rssi: {}", addr);
        self.rssi_requests.push(addr);
    }

    fn call_ended(&mut self, repeater: &Repeater, ts: Timeslot) {
        tracing::debug!("call_ended: {} {}", repeater.addr, ts);
        self.calls_ended.push((repeater.addr, ts));
    }
}
