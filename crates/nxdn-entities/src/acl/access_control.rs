use std::sync::Arc;

use nxdn_config::{RadioIdTable, TalkgroupRules};
use nxdn_core::{TalkgroupId, UnitId};

/// Stateless access-control queries over the two injected policy tables.
/// Constructed once at start-up; the tables are shared, read-mostly state
/// whose synchronization (if edited at runtime) is the host's concern.
pub struct AccessControl {
    rid_lookup: Arc<RadioIdTable>,
    tgid_lookup: Arc<TalkgroupRules>,
}

impl AccessControl {
    pub fn new(rid_lookup: Arc<RadioIdTable>, tgid_lookup: Arc<TalkgroupRules>) -> Self {
        AccessControl { rid_lookup, tgid_lookup }
    }

    /// Helper to validate a source or target unit ID.
    pub fn validate_unit(&self, id: UnitId) -> bool {
        // without ACL enforcement, a unit passes unless explicitly disabled
        if !self.rid_lookup.acl_enabled() {
            return !matches!(self.rid_lookup.find(id), Some(false));
        }

        matches!(self.rid_lookup.find(id), Some(true))
    }

    /// Helper to validate a talkgroup ID.
    pub fn validate_talkgroup(&self, id: TalkgroupId) -> bool {
        // TG0 is never valid
        if id == 0 {
            return false;
        }

        if !self.tgid_lookup.acl_enabled() {
            return true;
        }

        match self.tgid_lookup.find(id) {
            Some(rule) => rule.active,
            None => false,
        }
    }

    /// Helper to determine if a talkgroup ID is non-preferred. Callers use
    /// this to deprioritize a grant, never to reject it.
    pub fn is_tg_non_preferred(&self, id: TalkgroupId) -> bool {
        if id == 0 {
            return false;
        }

        if !self.tgid_lookup.acl_enabled() {
            return false;
        }

        match self.tgid_lookup.find(id) {
            Some(rule) => rule.non_preferred,
            None => false,
        }
    }
}
