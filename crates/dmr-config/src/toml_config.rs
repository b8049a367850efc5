use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::monitor_config::MonitorConfig;

/// Build `MonitorConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<MonitorConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.2";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref rep) = root.repeaters {
        if !rep.extra.is_empty() {
            return Err(format!("Unrecognized fields in repeaters: {:?}", sorted_keys(&rep.extra)).into());
        }
    }

    // Build config from defaults and optional overrides
    let mut cfg = MonitorConfig::default();
    if let Some(rep) = root.repeaters {
        apply_repeaters_patch(&mut cfg, rep);
    }

    Ok(cfg)
}

/// Build `MonitorConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<MonitorConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `MonitorConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MonitorConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_repeaters_patch(dst: &mut MonitorConfig, src: RepeatersDto) {
    if let Some(v) = src.inactive_timeout_secs {
        dst.repeater_inactive_timeout_secs = v;
    }
    if let Some(v) = src.snmp_info_update_secs {
        dst.snmp_info_update_secs = v;
    }
    if let Some(v) = src.call_timeout_secs {
        dst.call_timeout_secs = v;
    }
    if let Some(v) = src.rssi_update_during_call_msecs {
        dst.rssi_update_during_call_msecs = v;
    }
    if let Some(v) = src.ignored_snmp_hosts {
        dst.ignored_snmp_repeater_hosts = v;
    }
    if let Some(v) = src.max_count {
        dst.max_repeater_count = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,

    #[serde(default)]
    repeaters: Option<RepeatersDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct RepeatersDto {
    pub inactive_timeout_secs: Option<u64>,
    pub snmp_info_update_secs: Option<u64>,
    pub call_timeout_secs: Option<u64>,
    pub rssi_update_during_call_msecs: Option<u64>,
    pub ignored_snmp_hosts: Option<String>,
    pub max_count: Option<usize>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_absent() {
        let cfg = from_toml_str("config_version = \"0.2\"\n").unwrap();
        assert_eq!(cfg, MonitorConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let toml = r#"
config_version = "0.2"

[repeaters]
inactive_timeout_secs = 60
call_timeout_secs = 3
ignored_snmp_hosts = "rep1.example.net,rep2.example.net"
max_count = 5
"#;
        let cfg = from_toml_str(toml).unwrap();
        assert_eq!(cfg.repeater_inactive_timeout_secs, 60);
        assert_eq!(cfg.call_timeout_secs, 3);
        assert_eq!(cfg.ignored_snmp_repeater_hosts, "rep1.example.net,rep2.example.net");
        assert_eq!(cfg.max_repeater_count, 5);
        // untouched fields keep their defaults
        assert_eq!(cfg.snmp_info_update_secs, 300);
        assert_eq!(cfg.rssi_update_during_call_msecs, 500);
    }

    #[test]
    fn test_rejects_wrong_version() {
        assert!(from_toml_str("config_version = \"9.9\"\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let toml = r#"
config_version = "0.2"

[repeaters]
inactive_timeout_secs = 60
frobnicate = true
"#;
        assert!(from_toml_str(toml).is_err());
    }
}
