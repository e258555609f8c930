use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use crate::site_config::{CfgAcl, CfgSiteInfo, CfgTrunk, SharedConfig, TrunkConfig, TrunkState};

/// Build `SharedConfig` from a TOML configuration string.
pub fn from_toml_str(toml_str: &str) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.3";
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
    if !root.site_info.extra.is_empty() {
        return Err(format!("Unrecognized fields in site_info: {:?}", sorted_keys(&root.site_info.extra)).into());
    }
    if let Some(ref tr) = root.trunking {
        if !tr.extra.is_empty() {
            return Err(format!("Unrecognized fields in trunking: {:?}", sorted_keys(&tr.extra)).into());
        }
    }
    if let Some(ref acl) = root.access_control {
        if !acl.extra.is_empty() {
            return Err(format!("Unrecognized fields in access_control: {:?}", sorted_keys(&acl.extra)).into());
        }
    }

    // Build config from required and optional values
    let mut cfg = TrunkConfig {
        debug_log: root.debug_log,
        site: CfgSiteInfo {
            location_id: root.site_info.location_id,
            site_id: root.site_info.site_id,
            ran: root.site_info.ran,
            channel_no: root.site_info.channel_no,
            duplex: root.site_info.duplex.unwrap_or(true),
        },
        trunk: CfgTrunk::default(),
        acl: CfgAcl::default(),
    };

    if let Some(tr) = root.trunking {
        apply_trunking_patch(&mut cfg.trunk, tr);
    }
    if let Some(acl) = root.access_control {
        apply_acl_patch(&mut cfg.acl, acl);
    }

    cfg.validate().map_err(|e| e.to_string())?;

    Ok(SharedConfig::from_parts(cfg, TrunkState::default()))
}

/// Build `SharedConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `SharedConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    from_reader(r)
}

fn apply_trunking_patch(dst: &mut CfgTrunk, src: TrunkingDto) {
    if let Some(v) = src.enable_control {
        dst.enable_control = v;
    }
    if let Some(v) = src.verify_affiliation {
        dst.verify_affiliation = v;
    }
    if let Some(v) = src.verify_registration {
        dst.verify_registration = v;
    }
    if let Some(v) = src.grant_timeout_secs {
        dst.grant_timeout_secs = v;
    }
    if let Some(v) = src.tg_hang_secs {
        dst.tg_hang_secs = v;
    }
    if let Some(v) = src.queue_frames {
        dst.queue_frames = v;
    }
    dst.channels = src.channels;
    if let Some(v) = src.dump_rcch {
        dst.dump_rcch = v;
    }
    if let Some(v) = src.verbose {
        dst.verbose = v;
    }
    if let Some(v) = src.debug {
        dst.debug = v;
    }
}

fn apply_acl_patch(dst: &mut CfgAcl, src: AccessControlDto) {
    dst.rid_acl = src.rid_acl.unwrap_or(false);
    dst.tg_acl = src.tg_acl.unwrap_or(false);
    for rid in src.radio_ids {
        dst.radio_ids.push((rid.id, rid.enabled));
    }
    for tg in src.talkgroups {
        dst.talkgroups.push((tg.id, tg.active, tg.non_preferred.unwrap_or(false)));
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys
}

// Raw TOML DTOs ////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,
    site_info: SiteInfoDto,
    trunking: Option<TrunkingDto>,
    access_control: Option<AccessControlDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct SiteInfoDto {
    location_id: u32,
    site_id: u16,
    ran: u8,
    channel_no: u16,
    duplex: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct TrunkingDto {
    enable_control: Option<bool>,
    verify_affiliation: Option<bool>,
    verify_registration: Option<bool>,
    grant_timeout_secs: Option<u32>,
    tg_hang_secs: Option<u32>,
    queue_frames: Option<usize>,
    #[serde(default)]
    channels: Vec<u16>,
    dump_rcch: Option<bool>,
    verbose: Option<bool>,
    debug: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct AccessControlDto {
    rid_acl: Option<bool>,
    tg_acl: Option<bool>,
    #[serde(default)]
    radio_ids: Vec<RadioIdDto>,
    #[serde(default)]
    talkgroups: Vec<TalkgroupDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RadioIdDto {
    id: u16,
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct TalkgroupDto {
    id: u16,
    active: bool,
    non_preferred: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
config_version = "0.3"

[site_info]
location_id = 0x1A2B3
site_id = 1
ran = 1
channel_no = 1
duplex = true

[trunking]
enable_control = true
verify_affiliation = true
channels = [2, 3, 4]

[access_control]
rid_acl = true
tg_acl = true

[[access_control.radio_ids]]
id = 1001
enabled = true

[[access_control.talkgroups]]
id = 101
active = true
"#;

    #[test]
    fn test_parse_sample() {
        let shared = from_toml_str(SAMPLE).expect("sample config must parse");
        let cfg = shared.config();
        assert_eq!(cfg.site.location_id, 0x1A2B3);
        assert_eq!(cfg.trunk.channels, vec![2, 3, 4]);
        assert!(cfg.trunk.verify_affiliation);
        assert!(cfg.acl.rid_acl);
        assert_eq!(cfg.acl.radio_ids, vec![(1001, true)]);
        assert_eq!(cfg.acl.talkgroups, vec![(101, true, false)]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let bad = SAMPLE.replace("duplex = true", "duplex = true\nbogus_key = 7");
        assert!(from_toml_str(&bad).is_err());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let bad = SAMPLE.replace("\"0.3\"", "\"9.9\"");
        assert!(from_toml_str(&bad).is_err());
    }
}
