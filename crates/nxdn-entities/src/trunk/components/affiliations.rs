use std::collections::{HashMap, HashSet, VecDeque};

use nxdn_core::{ChannelNo, TalkgroupId, Timer, UnitId};

/// An active channel grant and its countdown.
#[derive(Debug, Clone)]
struct ChannelGrant {
    ch_no: ChannelNo,
    timer: Timer,
}

/// Unit registrations, group affiliations, per-talkgroup channel grants and
/// the free-channel pool. A talkgroup maps to at most one granted channel at
/// a time; a channel returns to the pool only on timer expiry or explicit
/// release.
pub struct Affiliations {
    unit_reg: HashSet<UnitId>,
    group_aff: HashMap<UnitId, TalkgroupId>,
    grants: HashMap<TalkgroupId, ChannelGrant>,
    free_channels: VecDeque<ChannelNo>,
}

impl Affiliations {
    pub fn new(channels: &[ChannelNo]) -> Self {
        Affiliations {
            unit_reg: HashSet::new(),
            group_aff: HashMap::new(),
            grants: HashMap::new(),
            free_channels: channels.iter().copied().collect(),
        }
    }

    pub fn is_unit_reg(&self, unit_id: UnitId) -> bool {
        self.unit_reg.contains(&unit_id)
    }

    /// Registers a unit. Re-registering is a no-op.
    pub fn unit_reg(&mut self, unit_id: UnitId) {
        self.unit_reg.insert(unit_id);
    }

    pub fn is_group_aff(&self, unit_id: UnitId, tg_id: TalkgroupId) -> bool {
        self.group_aff.get(&unit_id) == Some(&tg_id)
    }

    /// Records a group affiliation. Re-affiliating to the same talkgroup is a
    /// no-op; talkgroup 0 de-affiliates the unit.
    pub fn group_aff(&mut self, unit_id: UnitId, tg_id: TalkgroupId) {
        if tg_id == 0 {
            self.group_aff.remove(&unit_id);
        } else {
            self.group_aff.insert(unit_id, tg_id);
        }
    }

    pub fn is_granted(&self, tg_id: TalkgroupId) -> bool {
        self.grants.contains_key(&tg_id)
    }

    pub fn granted_ch(&self, tg_id: TalkgroupId) -> Option<ChannelNo> {
        self.grants.get(&tg_id).map(|g| g.ch_no)
    }

    /// Remaining grant window for a talkgroup, if it holds a grant.
    pub fn granted_remaining_ms(&self, tg_id: TalkgroupId) -> Option<u64> {
        self.grants.get(&tg_id).map(|g| g.timer.remaining_ms())
    }

    pub fn is_ch_available(&self) -> bool {
        !self.free_channels.is_empty()
    }

    pub fn free_ch_count(&self) -> usize {
        self.free_channels.len()
    }

    /// Allocates a channel to a talkgroup for `timeout_secs`. A talkgroup
    /// that already holds a grant keeps its channel, with the window
    /// restarted; a second channel is never consumed.
    pub fn grant_ch(&mut self, tg_id: TalkgroupId, timeout_secs: u32) -> bool {
        if let Some(grant) = self.grants.get_mut(&tg_id) {
            grant.timer.set_timeout_secs(timeout_secs);
            grant.timer.start();
            return true;
        }

        let Some(ch_no) = self.free_channels.pop_front() else {
            return false;
        };

        let mut timer = Timer::new_secs(timeout_secs);
        timer.start();
        self.grants.insert(tg_id, ChannelGrant { ch_no, timer });
        true
    }

    /// Releases a talkgroup's grant, returning its channel to the pool.
    pub fn release_grant(&mut self, tg_id: TalkgroupId) -> bool {
        match self.grants.remove(&tg_id) {
            Some(grant) => {
                self.free_channels.push_back(grant.ch_no);
                true
            }
            None => false,
        }
    }

    /// Updates the grant countdowns by the passed number of milliseconds,
    /// releasing any that expired.
    pub fn clock(&mut self, ms: u32) {
        for grant in self.grants.values_mut() {
            grant.timer.clock(ms);
        }

        let expired: Vec<TalkgroupId> = self
            .grants
            .iter()
            .filter(|(_, g)| g.timer.has_expired())
            .map(|(&tg_id, _)| tg_id)
            .collect();
        for tg_id in expired {
            tracing::debug!("grant expired, releasing channel for TG {}", tg_id);
            self.release_grant(tg_id);
        }
    }
}
