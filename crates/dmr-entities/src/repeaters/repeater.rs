use std::net::IpAddr;

use dmr_core::{RadioId, Timeslot, WallTime};

/// Per-timeslot call state.
#[derive(Debug, Clone, Default)]
pub struct RepeaterSlot {
    pub call_running: bool,
    pub last_packet_received_at: WallTime,
    pub call_ended_at: WallTime,
}

/// One repeater observed on the network, keyed by its network address.
/// Owned by the registry; callers must re-resolve by address after a sweep.
#[derive(Debug, Clone)]
pub struct Repeater {
    pub addr: IpAddr,
    pub id: RadioId,
    pub callsign: String,
    pub repeater_type: String,
    pub fw_version: String,
    pub dl_freq: u32,
    pub ul_freq: u32,
    pub last_active_time: WallTime,
    pub last_snmp_info_request_time: WallTime,
    pub snmp_ignored: bool,
    /// When set, auto RSSI polling is armed once this deadline has passed
    pub auto_rssi_update_enabled_at: Option<WallTime>,
    pub last_rssi_request_time: WallTime,
    pub slots: [RepeaterSlot; 2],
}

impl Repeater {
    pub fn new(addr: IpAddr) -> Self {
        Repeater {
            addr,
            id: 0,
            callsign: String::new(),
            repeater_type: String::new(),
            fw_version: String::new(),
            dl_freq: 0,
            ul_freq: 0,
            last_active_time: WallTime::default(),
            last_snmp_info_request_time: WallTime::default(),
            snmp_ignored: false,
            auto_rssi_update_enabled_at: None,
            last_rssi_request_time: WallTime::default(),
            slots: [RepeaterSlot::default(), RepeaterSlot::default()],
        }
    }

    pub fn slot(&self, ts: Timeslot) -> &RepeaterSlot {
        &self.slots[ts.index()]
    }

    pub fn slot_mut(&mut self, ts: Timeslot) -> &mut RepeaterSlot {
        &mut self.slots[ts.index()]
    }

    pub fn any_call_running(&self) -> bool {
        self.slots.iter().any(|s| s.call_running)
    }
}
