use std::sync::{Arc, RwLock};

use nxdn_core::{ChannelNo, SiteData};

use crate::acl_tables::{RadioIdTable, TalkgroupRules};

/// Site identity configuration.
#[derive(Debug, Clone)]
pub struct CfgSiteInfo {
    /// 24-bit location identity
    pub location_id: u32,
    /// 16-bit site identity
    pub site_id: u16,
    /// 6-bit Radio Access Number (1..=63; 0 is the wildcard)
    pub ran: u8,
    /// Control channel number
    pub channel_no: u16,
    pub duplex: bool,
}

impl Default for CfgSiteInfo {
    fn default() -> Self {
        Self {
            location_id: 1,
            site_id: 1,
            ran: 1,
            channel_no: 1,
            duplex: true,
        }
    }
}

impl CfgSiteInfo {
    pub fn site_data(&self) -> SiteData {
        SiteData::new(self.location_id, self.site_id, self.ran, self.channel_no, self.duplex)
    }
}

/// Trunking behavior configuration.
#[derive(Debug, Clone)]
pub struct CfgTrunk {
    /// Control-channel operation. When disabled every trunking request is
    /// answered with a service-unavailable denial.
    pub enable_control: bool,
    /// Require a source unit to be affiliated to the destination talkgroup
    /// before it may be granted a channel for that group
    pub verify_affiliation: bool,
    /// Require a source unit to already be registered before registration
    /// and affiliation responses accept it
    pub verify_registration: bool,
    /// Channel grant window in seconds
    pub grant_timeout_secs: u32,
    /// Talkgroup hang window in seconds. A just-granted talkgroup keeps
    /// priority over different destinations for this long.
    pub tg_hang_secs: u32,
    /// Transmit queue watermark, in frames
    pub queue_frames: usize,
    /// Voice channel pool
    pub channels: Vec<ChannelNo>,
    /// Dump decoded/encoded control-channel payloads to the log
    pub dump_rcch: bool,
    pub verbose: bool,
    pub debug: bool,
}

pub const DEFAULT_GRANT_TIMEOUT_SECS: u32 = 15;
pub const DEFAULT_TG_HANG_SECS: u32 = 5;
pub const DEFAULT_QUEUE_FRAMES: usize = 32;

impl Default for CfgTrunk {
    fn default() -> Self {
        Self {
            enable_control: true,
            verify_affiliation: false,
            verify_registration: false,
            grant_timeout_secs: DEFAULT_GRANT_TIMEOUT_SECS,
            tg_hang_secs: DEFAULT_TG_HANG_SECS,
            queue_frames: DEFAULT_QUEUE_FRAMES,
            channels: vec![],
            dump_rcch: false,
            verbose: true,
            debug: false,
        }
    }
}

/// Access-control configuration: the two policy tables and their enforcement
/// flags, as loaded from the configuration file.
#[derive(Debug, Clone, Default)]
pub struct CfgAcl {
    pub rid_acl: bool,
    pub tg_acl: bool,
    pub radio_ids: Vec<(u16, bool)>,
    /// (id, active, non_preferred)
    pub talkgroups: Vec<(u16, bool, bool)>,
}

impl CfgAcl {
    pub fn radio_id_table(&self) -> RadioIdTable {
        let mut table = RadioIdTable::new(self.rid_acl);
        for &(id, enabled) in &self.radio_ids {
            table.insert(id, enabled);
        }
        table
    }

    pub fn talkgroup_rules(&self) -> TalkgroupRules {
        let mut rules = TalkgroupRules::new(self.tg_acl);
        for &(id, active, non_preferred) in &self.talkgroups {
            rules.insert(id, active, non_preferred);
        }
        rules
    }
}

#[derive(Debug, Clone)]
pub struct TrunkConfig {
    pub debug_log: Option<String>,
    pub site: CfgSiteInfo,
    pub trunk: CfgTrunk,
    pub acl: CfgAcl,
}

impl TrunkConfig {
    pub fn new() -> Self {
        TrunkConfig {
            debug_log: None,
            site: CfgSiteInfo::default(),
            trunk: CfgTrunk::default(),
            acl: CfgAcl::default(),
        }
    }

    /// Validate that all required configuration fields are properly set.
    pub fn validate(&self) -> Result<(), &str> {
        if self.site.ran > 63 {
            return Err("site RAN must be in 0..=63");
        }
        if self.site.location_id >= 1 << 24 {
            return Err("site location_id must fit in 24 bits");
        }
        if self.trunk.enable_control && self.trunk.channels.is_empty() {
            return Err("control-channel operation requires a non-empty voice channel pool");
        }
        for &ch in &self.trunk.channels {
            if ch == 0 || ch > 1023 {
                return Err("voice channel numbers must be in 1..=1023");
            }
        }
        if self.trunk.channels.contains(&self.site.channel_no) {
            return Err("the control channel may not appear in the voice channel pool");
        }
        if self.trunk.queue_frames == 0 {
            return Err("transmit queue must hold at least one frame");
        }
        if self.trunk.grant_timeout_secs == 0 {
            return Err("grant timeout must be nonzero");
        }
        Ok(())
    }
}

impl Default for TrunkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable, stack-editable runtime state (lock-protected).
#[derive(Debug, Clone)]
pub struct TrunkState {
    /// Backhaul/network peer connection is up. When false the site always
    /// arbitrates grants locally.
    pub network_connected: bool,
}

impl Default for TrunkState {
    fn default() -> Self {
        Self {
            network_connected: false,
        }
    }
}

/// Global shared configuration: immutable config + mutable state.
#[derive(Clone)]
pub struct SharedConfig {
    /// Read-only configuration (immutable after construction).
    cfg: Arc<TrunkConfig>,
    /// Mutable state guarded with RwLock (write by the host, read by the core).
    state: Arc<RwLock<TrunkState>>,
}

impl SharedConfig {
    pub fn from_config(cfg: TrunkConfig) -> Self {
        Self::from_parts(cfg, TrunkState::default())
    }

    pub fn from_parts(cfg: TrunkConfig, state: TrunkState) -> Self {
        // Check config for validity before returning the SharedConfig object
        match cfg.validate() {
            Ok(_) => {}
            Err(e) => panic!("Invalid trunk configuration: {}", e),
        }

        Self {
            cfg: Arc::new(cfg),
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Access immutable config.
    pub fn config(&self) -> Arc<TrunkConfig> {
        Arc::clone(&self.cfg)
    }

    /// Read guard for mutable state.
    pub fn state_read(&self) -> std::sync::RwLockReadGuard<'_, TrunkState> {
        self.state.read().expect("TrunkState RwLock blocked")
    }

    /// Write guard for mutable state.
    pub fn state_write(&self) -> std::sync::RwLockWriteGuard<'_, TrunkState> {
        self.state.write().expect("TrunkState RwLock blocked")
    }
}
