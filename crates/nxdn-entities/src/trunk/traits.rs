use nxdn_core::{ChannelNo, UnitId};
use nxdn_pdus::rcch_lc::RcchLc;

/// Physical-layer line coding, applied in place to the 48 frame bytes before
/// transmission. The modem owns the real transform; the trunking core only
/// ever sees it through this seam.
pub trait LineCoder {
    fn process(&mut self, frame: &mut [u8]);
}

/// Grant decision returned by a network peer that brokers channel grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantResponse {
    pub group: bool,
    pub src_id: UnitId,
    pub dst_id: u16,
    pub ch_no: ChannelNo,
}

/// Backhaul network peer. The peer runs its own connection and grant-broker
/// protocol; the trunking core only forwards already-built frames and polls
/// for decisions. No method may block.
pub trait TrunkNetwork {
    /// Forward an encoded control-channel frame (with its two leading tag
    /// bytes) to the peer.
    fn send_rcch(&mut self, lc: &RcchLc, data: &[u8]);

    /// Ask the peer to arbitrate a channel grant. Returns whether the request
    /// was taken on; the decision arrives later via `poll_grant_response`.
    fn request_grant(&mut self, group: bool, src_id: UnitId, dst_id: u16) -> bool;

    /// Non-blocking poll for a completed grant decision.
    fn poll_grant_response(&mut self) -> Option<GrantResponse>;

    /// True when the peer is authoritative for channel grants at this site.
    fn handles_grants(&self) -> bool;
}
