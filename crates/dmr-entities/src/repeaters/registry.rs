use std::collections::HashSet;
use std::fmt::Write;
use std::net::IpAddr;

use dmr_config::MonitorConfig;
use dmr_core::{Timeslot, WallTime};

use super::events::RepeaterEvents;
use super::repeater::Repeater;

#[derive(Debug, PartialEq, Eq)]
pub enum RegistryErr {
    CapacityExceeded { capacity: usize },
}

/// Bounded collection of observed repeaters, keyed by network address.
///
/// Storage is a fixed-capacity arena of optional slots; removal drops the
/// entry in place so a freed slot is reusable on the next add. The registry
/// owns all repeater state; mutation happens either on the ingest path
/// (add/refresh, slot updates through `find_by_addr_mut`) or inside
/// `process`, never concurrently.
pub struct RepeaterRegistry {
    slots: Vec<Option<Repeater>>,
    snmp_ignored_addrs: HashSet<IpAddr>,
}

impl RepeaterRegistry {
    pub fn new(capacity: usize, snmp_ignored_addrs: HashSet<IpAddr>) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        RepeaterRegistry { slots, snmp_ignored_addrs }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_addr(&self, addr: IpAddr) -> Option<&Repeater> {
        self.slots.iter().flatten().find(|r| r.addr == addr)
    }

    pub fn find_by_addr_mut(&mut self, addr: IpAddr) -> Option<&mut Repeater> {
        self.slots.iter_mut().flatten().find(|r| r.addr == addr)
    }

    /// Returns the repeater for `addr`, refreshing its activity timestamp.
    /// An unknown address is created in the first free slot; when no slot
    /// is free the address is not added and the caller must drop its
    /// packet context for this cycle.
    pub fn add(&mut self, addr: IpAddr, now: WallTime) -> Result<&mut Repeater, RegistryErr> {
        let idx = match self.slots.iter().position(|s| s.as_ref().is_some_and(|r| r.addr == addr)) {
            Some(idx) => idx,
            None => {
                let Some(free) = self.slots.iter().position(|s| s.is_none()) else {
                    tracing::warn!(
                        "repeaters [{}]: can't add new repeater, list is full ({} elements)",
                        addr, self.slots.len()
                    );
                    return Err(RegistryErr::CapacityExceeded { capacity: self.slots.len() });
                };
                let mut repeater = Repeater::new(addr);
                repeater.snmp_ignored = self.snmp_ignored_addrs.contains(&addr);
                tracing::info!("repeaters [{}]: added (snmp ignored: {})", addr, repeater.snmp_ignored);
                self.slots[free] = Some(repeater);
                free
            }
        };
        let repeater = self.slots[idx].as_mut().unwrap(); // Occupied above
        repeater.last_active_time = now;
        Ok(repeater)
    }

    /// Occupied entries with their slot numbers, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Repeater)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.as_ref().map(|r| (i, r)))
    }

    /// Formatted report of all occupied slots, in storage order.
    /// A pure read; rendering is left to the caller.
    pub fn list(&self, now: WallTime) -> String {
        let mut out = String::from(
            "      nr              ip     id  callsign  act  lstinf       type        fwver    dlfreq    ulfreq\n",
        );
        for (i, r) in self.iter() {
            let _ = writeln!(
                out,
                "  #{:4}: {:>15} {:6} {:>9} {:4} {:7} {:>10} {:>10} {:9} {:9} {}",
                i,
                r.addr,
                r.id,
                r.callsign,
                r.last_active_time.age_secs(now),
                r.last_snmp_info_request_time.age_secs(now),
                r.repeater_type,
                r.fw_version,
                r.dl_freq,
                r.ul_freq,
                if r.snmp_ignored { "snmp ignored" } else { "" },
            );
        }
        out
    }

    /// One scheduler tick over the whole registry, in storage order.
    ///
    /// Per occupied entry: inactivity expiry (removes the entry and skips
    /// the remaining checks), telemetry refresh, per-timeslot call expiry
    /// and in-call RSSI polling. `now` is sampled once by the tick driver.
    pub fn process(&mut self, now: WallTime, config: &MonitorConfig, events: &mut dyn RepeaterEvents) {
        for slot in self.slots.iter_mut() {
            let Some(repeater) = slot.as_mut() else { continue };

            if repeater.last_active_time.age_secs(now) > config.repeater_inactive_timeout_secs {
                tracing::info!("repeaters [{}]: timed out, removing", repeater.addr);
                *slot = None;
                continue;
            }

            if !repeater.snmp_ignored
                && repeater.last_snmp_info_request_time.age_secs(now) > config.snmp_info_update_secs
            {
                tracing::debug!("repeaters [{}]: requesting repeater info update", repeater.addr);
                events.request_repeater_info(repeater.addr);
                repeater.last_snmp_info_request_time = now;
            }

            for ts in Timeslot::BOTH {
                let s = repeater.slot_mut(ts);
                if s.call_running && s.last_packet_received_at.age_secs(now) > config.call_timeout_secs {
                    s.call_running = false;
                    s.call_ended_at = now;
                    tracing::info!("repeaters [{}]: call timeout on {}", repeater.addr, ts);
                    events.call_ended(repeater, ts);
                }
            }

            if let Some(enabled_at) = repeater.auto_rssi_update_enabled_at {
                if enabled_at <= now {
                    if !repeater.any_call_running() {
                        repeater.auto_rssi_update_enabled_at = None;
                    } else if repeater.last_rssi_request_time.age_millis(now)
                        > config.rssi_update_during_call_msecs
                    {
                        events.request_rssi(repeater.addr);
                        repeater.last_rssi_request_time = now;
                    }
                }
            }
        }
    }
}
