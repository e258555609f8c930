use std::collections::HashMap;

use nxdn_core::{TalkgroupId, UnitId};

/// Radio-ID enablement lookup table. One of the two policy tables injected
/// into the access-control validator at start-up; the trunking core queries
/// it only through the validator.
#[derive(Debug, Clone, Default)]
pub struct RadioIdTable {
    /// When true, only explicitly enabled radio IDs may use the site.
    /// When false, unknown radio IDs pass by default.
    acl: bool,
    entries: HashMap<UnitId, bool>,
}

impl RadioIdTable {
    pub fn new(acl: bool) -> Self {
        RadioIdTable {
            acl,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: UnitId, enabled: bool) {
        self.entries.insert(id, enabled);
    }

    /// Returns the enablement flag for a known radio ID, None for unknown IDs.
    pub fn find(&self, id: UnitId) -> Option<bool> {
        self.entries.get(&id).copied()
    }

    pub fn acl_enabled(&self) -> bool {
        self.acl
    }
}

/// Per-talkgroup activation rule.
#[derive(Debug, Clone, Copy)]
pub struct TalkgroupRule {
    pub active: bool,
    pub non_preferred: bool,
}

/// Talkgroup activation lookup table, the second injected policy table.
#[derive(Debug, Clone, Default)]
pub struct TalkgroupRules {
    acl: bool,
    entries: HashMap<TalkgroupId, TalkgroupRule>,
}

impl TalkgroupRules {
    pub fn new(acl: bool) -> Self {
        TalkgroupRules {
            acl,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: TalkgroupId, active: bool, non_preferred: bool) {
        self.entries.insert(id, TalkgroupRule { active, non_preferred });
    }

    pub fn find(&self, id: TalkgroupId) -> Option<TalkgroupRule> {
        self.entries.get(&id).copied()
    }

    pub fn acl_enabled(&self) -> bool {
        self.acl
    }
}
