/// Operational timeouts and limits for the repeater monitor.
/// All values are externally supplied and read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Seconds without traffic after which a repeater entry is dropped
    pub repeater_inactive_timeout_secs: u64,
    /// Seconds between telemetry (repeater info) polls
    pub snmp_info_update_secs: u64,
    /// Seconds without a packet after which a running call is considered ended
    pub call_timeout_secs: u64,
    /// Milliseconds between RSSI polls while a call is running
    pub rssi_update_during_call_msecs: u64,
    /// Comma-separated hostnames excluded from SNMP polling
    pub ignored_snmp_repeater_hosts: String,
    /// Upper bound on simultaneously tracked repeaters
    pub max_repeater_count: usize,
}

impl Default for MonitorConfig {
    fn default() -> MonitorConfig {
        MonitorConfig {
            repeater_inactive_timeout_secs: 30,
            snmp_info_update_secs: 300,
            call_timeout_secs: 1,
            rssi_update_during_call_msecs: 500,
            ignored_snmp_repeater_hosts: String::new(),
            max_repeater_count: 20,
        }
    }
}
