use nxdn_config::SharedConfig;
use nxdn_core::{activity_log, unimplemented_log, BitBuffer, SiteData, Timer, UnitId, RAN_WILDCARD};
use nxdn_pdus::cac::{Cac, CacStructure};
use nxdn_pdus::consts::{
    FRAME_LENGTH_BITS, FRAME_LENGTH_BYTES, RCCH_LC_LENGTH_BITS, RCCH_LC_SHORT_LENGTH_BITS, TAG_DATA,
};
use nxdn_pdus::enums::cause::CauseResponse;
use nxdn_pdus::enums::message_type::MessageType;
use nxdn_pdus::lich::{self, Lich};
use nxdn_pdus::rcch_lc::RcchLc;
use nxdn_pdus::sync;

use crate::acl::access_control::AccessControl;
use crate::trunk::components::affiliations::Affiliations;
use crate::trunk::components::frame_queue::FrameQueue;
use crate::trunk::traits::{GrantResponse, LineCoder, TrunkNetwork};

/// RF-side processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfState {
    Listening,
    Data,
    Rejected,
}

/// Network-side processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetState {
    Idle,
    Active,
}

/// Trunking control-channel engine.
///
/// Decodes inbound control/traffic-channel link control, applies access and
/// affiliation policy, arbitrates channel grants against the voice channel
/// pool and emits bit-exact outbound control messages. Driven serially by
/// the host's RF-frame callback and clock tick; performs no threading or
/// blocking of its own.
pub struct TrunkBs {
    config: SharedConfig,
    site: SiteData,
    acl: AccessControl,
    pub affiliations: Affiliations,
    pub queue: FrameQueue,
    network: Option<Box<dyn TrunkNetwork>>,
    line_coder: Box<dyn LineCoder>,

    /// Scratch link control for the RF-origin message currently being
    /// processed or built
    pub rf_lc: RcchLc,
    /// Scratch link control for the most recent network-origin message
    pub net_lc: RcchLc,

    pub rf_state: RfState,
    pub net_state: NetState,
    pub rf_last_dst_id: u16,
    pub net_last_dst_id: u16,
    rf_tg_hang: Timer,

    control: bool,
    verify_aff: bool,
    verify_reg: bool,
    grant_timeout_secs: u32,
    dump_rcch: bool,
    verbose: bool,
    debug: bool,
}

impl TrunkBs {
    pub fn new(
        config: SharedConfig,
        acl: AccessControl,
        affiliations: Affiliations,
        network: Option<Box<dyn TrunkNetwork>>,
        line_coder: Box<dyn LineCoder>,
    ) -> Self {
        let cfg = config.config();
        let site = cfg.site.site_data();
        let queue = FrameQueue::new(cfg.trunk.queue_frames * (FRAME_LENGTH_BYTES + 3));

        TrunkBs {
            site,
            acl,
            affiliations,
            queue,
            network,
            line_coder,
            rf_lc: RcchLc::new(&site),
            net_lc: RcchLc::new(&site),
            rf_state: RfState::Listening,
            net_state: NetState::Idle,
            rf_last_dst_id: 0,
            net_last_dst_id: 0,
            rf_tg_hang: Timer::new_secs(cfg.trunk.tg_hang_secs),
            control: cfg.trunk.enable_control,
            verify_aff: cfg.trunk.verify_affiliation,
            verify_reg: cfg.trunk.verify_registration,
            grant_timeout_secs: cfg.trunk.grant_timeout_secs,
            dump_rcch: cfg.trunk.dump_rcch,
            verbose: cfg.trunk.verbose,
            debug: cfg.trunk.debug,
            config,
        }
    }

    /// Resets the RF-side scratch link control to site-bound defaults.
    pub fn reset_rf(&mut self) {
        self.rf_lc = RcchLc::new(&self.site);
    }

    /// Resets the network-side scratch link control to site-bound defaults.
    pub fn reset_net(&mut self) {
        self.net_lc = RcchLc::new(&self.site);
    }

    /// Process a control-channel frame from the RF interface. `frame` carries
    /// the two leading tag bytes followed by the 48 frame bytes.
    pub fn process_rf(&mut self, fct: u8, option: u8, frame: &[u8]) -> bool {
        assert!(frame.len() >= FRAME_LENGTH_BYTES + 2);
        tracing::trace!("process_rf: fct = {}, option = {}", fct, option);

        let mut bits = BitBuffer::from_bytes(&frame[2..FRAME_LENGTH_BYTES + 2]);
        let mut cac = Cac::new();
        cac.verbose = self.dump_rcch;
        let valid = cac.decode(&mut bits);

        // malformed frames are ignored while idle, but tolerated while a data
        // exchange is already in progress
        if self.rf_state == RfState::Listening && !valid {
            return false;
        }

        if valid {
            let ran = cac.ran;
            if ran != self.site.ran && ran != RAN_WILDCARD {
                tracing::trace!("ignoring frame with foreign RAN {}, site RAN {}", ran, self.site.ran);
                return false;
            }
        }

        let prev_rf_state = self.rf_state;
        if self.rf_state != RfState::Data {
            self.rf_state = RfState::Data;
        }

        // a fresh inbound control message pre-empts anything still queued
        self.queue.clear();

        // payload fields are only meaningful when the container validated
        let mut payload = cac.data();
        if let Err(e) = self.rf_lc.decode(&mut payload, RCCH_LC_SHORT_LENGTH_BITS) {
            tracing::warn!("failed decoding link control: {:?}", e);
            self.rf_state = prev_rf_state;
            return false;
        }
        if self.dump_rcch {
            tracing::debug!("<- {}", self.rf_lc);
        }

        let src_id = self.rf_lc.src_id;
        let dst_id = self.rf_lc.dst_id;

        match MessageType::try_from(self.rf_lc.message_type as u64) {
            Ok(MessageType::RtchVcall) => {
                if !self.check_control_support("VCALL_REQ", MessageType::RtchVcall, src_id) {
                    return false;
                }

                if let Err(cause) = self.validate_vcall_request(src_id, dst_id) {
                    self.deny(cause, MessageType::RtchVcall);
                    self.rf_state = RfState::Rejected;
                    return false;
                }

                if self.verbose {
                    tracing::info!("VCALL_REQ (Voice Call Request), srcId = {}, dstId = {}", src_id, dst_id);
                }

                if !self.request_grant(true, false, false, false) {
                    return false;
                }
            }
            Ok(MessageType::RcchReg) => {
                if !self.check_control_support("REG_REQ", MessageType::RcchReg, src_id) {
                    return false;
                }

                if self.verbose {
                    tracing::info!("REG_REQ (Registration Request), srcId = {}", src_id);
                }

                self.send_reg_response(src_id);
            }
            Ok(MessageType::RcchGrpReg) => {
                if !self.check_control_support("GRP_REG_REQ", MessageType::RcchGrpReg, src_id) {
                    return false;
                }

                if self.verbose {
                    tracing::info!("GRP_REG_REQ (Group Registration Request), srcId = {}, dstId = {}", src_id, dst_id);
                }

                self.send_grp_reg_response(src_id, dst_id);
            }
            Ok(other) => {
                unimplemented_log!("{} message handling", other);
            }
            Err(_) => {
                tracing::error!("unhandled message type, messageType = ${:02X}", self.rf_lc.message_type);
            }
        }

        self.rf_state = prev_rf_state;
        true
    }

    /// Process a control message received from the network peer. An idle
    /// network side is the synchronization point that lets a
    /// network-originated cycle start from a clean slate.
    pub fn process_network(&mut self, fct: u8, option: u8, _frame: &[u8]) -> bool {
        tracing::trace!("process_network: fct = {}, option = {}", fct, option);

        if self.net_state == NetState::Idle {
            self.queue.clear();

            self.reset_rf();
            self.reset_net();
        }

        true
    }

    /// Updates the engine by the passed number of milliseconds.
    pub fn clock(&mut self, ms: u32) {
        if !self.control {
            return;
        }

        // an authoritative network peer may have finished arbitrating a grant
        if self.net_active() {
            let pending: Option<GrantResponse> = match self.network.as_mut() {
                Some(network) if network.handles_grants() => network.poll_grant_response(),
                _ => None,
            };

            if let Some(rsp) = pending {
                self.rf_lc.src_id = rsp.src_id;
                self.rf_lc.dst_id = rsp.dst_id;
                self.rf_lc.grp_vch_no = rsp.ch_no;

                self.request_grant(rsp.group, true, true, true);
            }
        }

        // grant countdowns and the talkgroup hang decay regardless of traffic
        self.affiliations.clock(ms);
        self.rf_tg_hang.clock(ms);
    }

    /// Helper to write control channel broadcast data. Builds exactly one
    /// broadcast per call, alternating by the caller's sequence index so the
    /// periodic announcements spread across successive scheduler slots.
    pub fn write_control_data(&mut self, frame_cnt: u8, n: u8, _adj_ss: bool) {
        if !self.control {
            return;
        }

        // don't add any frames if the queue is full
        let len = FRAME_LENGTH_BYTES + 2;
        if self.queue.free_space() < len + 1 {
            return;
        }

        if self.debug {
            tracing::debug!("write_control_data, frameCnt = {}, seq = {}", frame_cnt, n);
        }

        match n {
            0 => self.write_cc_site_info(),
            _ => self.write_cc_service_info(),
        }
    }

    // Inbound validation ///////////////////////////////////////////////////

    /// Make sure control data is supported; denies and rejects otherwise.
    fn check_control_support(&mut self, label: &'static str, service: MessageType, src_id: UnitId) -> bool {
        if self.control {
            return true;
        }

        tracing::warn!("{} denial, unsupported service, srcId = {}", label, src_id);
        self.deny(CauseResponse::SvcUnavailable, service);
        self.rf_state = RfState::Rejected;
        false
    }

    /// Ordered policy checks for a voice-call request; the first failing
    /// check decides the denial cause.
    fn validate_vcall_request(&self, src_id: UnitId, dst_id: u16) -> Result<(), CauseResponse> {
        if !self.acl.validate_unit(src_id) {
            tracing::warn!("VCALL_REQ denial, RID rejection, srcId = {}", src_id);
            return Err(CauseResponse::VdReqUnitNotPerm);
        }

        if !self.acl.validate_talkgroup(dst_id) {
            tracing::warn!("VCALL_REQ denial, TGID rejection, dstId = {}", dst_id);
            return Err(CauseResponse::VdTgtUnitNotPerm);
        }

        if self.verify_aff && !self.affiliations.is_group_aff(src_id, dst_id) {
            tracing::warn!("VCALL_REQ denial, RID not affiliated to TGID, srcId = {}, dstId = {}", src_id, dst_id);
            return Err(CauseResponse::VdReqUnitNotReg);
        }

        Ok(())
    }

    // Grant arbitration ////////////////////////////////////////////////////

    /// Helper to write a voice-call grant. `force_accept` bypasses the local
    /// arbitration guards (used when replaying a decision the network already
    /// made); `net` marks a network-originated request, which never rejects
    /// the RF side or leaves activity records; `skip_net_check` prevents
    /// re-delegating a decision that already came back from the network.
    pub fn request_grant(&mut self, grp: bool, force_accept: bool, net: bool, skip_net_check: bool) -> bool {
        let message_type = self.rf_lc.message_type;

        // is the network peer authoritative for grant decisions at this site?
        if !skip_net_check && self.net_active() {
            if let Some(network) = self.network.as_mut() {
                if network.handles_grants() {
                    return network.request_grant(grp, self.rf_lc.src_id, self.rf_lc.dst_id);
                }
            }
        }

        if !force_accept {
            // another RF burst is mid-flight
            if self.rf_state != RfState::Listening && self.rf_state != RfState::Data {
                if !net {
                    tracing::warn!("VCALL_REQ denied, traffic in progress, dstId = {}", self.rf_lc.dst_id);
                    self.deny(CauseResponse::VdQueGrpBusy, MessageType::RtchVcall);

                    activity_log!("NXDN", true, "group grant request from {} to TG {} denied", self.rf_lc.src_id, self.rf_lc.dst_id);
                    self.rf_state = RfState::Rejected;
                }

                self.rf_lc.message_type = message_type;
                return false;
            }

            // collision with an in-flight network call to the same destination
            if self.net_state != NetState::Idle && self.rf_lc.dst_id == self.net_last_dst_id {
                if !net {
                    tracing::warn!("VCALL_REQ denied, traffic in progress, dstId = {}", self.rf_lc.dst_id);
                    self.deny(CauseResponse::VdQueGrpBusy, MessageType::RtchVcall);

                    activity_log!("NXDN", true, "group grant request from {} to TG {} denied", self.rf_lc.src_id, self.rf_lc.dst_id);
                    self.rf_state = RfState::Rejected;
                }

                self.rf_lc.message_type = message_type;
                return false;
            }

            // don't grant while a different talkgroup's hang window is open;
            // the just-finished talkgroup keeps priority to resume
            if self.rf_last_dst_id != 0
                && self.rf_last_dst_id != self.rf_lc.dst_id
                && self.rf_tg_hang.is_running()
                && !self.rf_tg_hang.has_expired()
            {
                if !net {
                    self.deny(CauseResponse::VdQueGrpBusy, MessageType::RtchVcall);
                    self.rf_state = RfState::Rejected;
                }

                self.rf_lc.message_type = message_type;
                return false;
            }

            if !self.affiliations.is_granted(self.rf_lc.dst_id) {
                if !self.affiliations.is_ch_available() {
                    if !net {
                        tracing::warn!("VCALL_REQ queued, no channels available, dstId = {}", self.rf_lc.dst_id);
                        self.deny(CauseResponse::VdQueChnResourceNotAvail, MessageType::RtchVcall);

                        if grp {
                            activity_log!("NXDN", true, "group grant request from {} to TG {} queued", self.rf_lc.src_id, self.rf_lc.dst_id);
                        } else {
                            activity_log!("NXDN", true, "unit-to-unit grant request from {} to {} queued", self.rf_lc.src_id, self.rf_lc.dst_id);
                        }
                        self.rf_state = RfState::Rejected;
                    }

                    self.rf_lc.message_type = message_type;
                    return false;
                }

                if self.affiliations.grant_ch(self.rf_lc.dst_id, self.grant_timeout_secs) {
                    if let Some(ch_no) = self.affiliations.granted_ch(self.rf_lc.dst_id) {
                        self.rf_lc.grp_vch_no = ch_no;
                    }
                }
            } else {
                // retransmitted request for an already-active call reuses its
                // assigned channel
                if let Some(ch_no) = self.affiliations.granted_ch(self.rf_lc.dst_id) {
                    self.rf_lc.grp_vch_no = ch_no;
                }
            }
        }

        if !net {
            if grp {
                activity_log!("NXDN", true, "group grant request from {} to TG {}", self.rf_lc.src_id, self.rf_lc.dst_id);
            } else {
                activity_log!("NXDN", true, "unit-to-unit grant request from {} to {}", self.rf_lc.src_id, self.rf_lc.dst_id);
            }
        }

        if self.verbose {
            tracing::info!(
                "VCALL_RESP (Voice Call Response), emerg = {}, encrypt = {}, prio = {}, chNo = {}, srcId = {}, dstId = {}",
                self.rf_lc.emergency,
                self.rf_lc.encrypted,
                self.rf_lc.priority,
                self.rf_lc.grp_vch_no,
                self.rf_lc.src_id,
                self.rf_lc.dst_id
            );
        }

        self.rf_last_dst_id = self.rf_lc.dst_id;
        self.rf_tg_hang.start();

        // the grant pre-empts queued broadcast traffic and goes out at once
        self.rf_lc.message_type = MessageType::RtchVcall.into_raw();
        self.write_rf_message(false, true);

        self.rf_lc.message_type = message_type;
        true
    }

    // Outbound emission ////////////////////////////////////////////////////

    /// Helper to write a deny packet. Restores the caller's message type so a
    /// transient overwrite never leaks into subsequent traffic.
    fn deny(&mut self, reason: CauseResponse, service: MessageType) {
        let message_type = self.rf_lc.message_type;

        self.rf_lc.message_type = service.into_raw();
        self.rf_lc.cause = reason.into_raw();

        if self.verbose {
            tracing::info!(
                "MSG_DENIAL (Message Denial), reason = {}, service = {}, srcId = {}, dstId = {}",
                reason,
                service,
                self.rf_lc.src_id,
                self.rf_lc.dst_id
            );
        }

        self.write_rf_message(false, false);

        self.rf_lc.message_type = message_type;
    }

    /// Helper to write a unit registration response. Every check runs; the
    /// last failing check's cause wins.
    fn send_reg_response(&mut self, src_id: UnitId) {
        let message_type = self.rf_lc.message_type;

        self.rf_lc.message_type = MessageType::RcchReg.into_raw();
        self.rf_lc.cause = CauseResponse::MmRegAccepted.into_raw();

        // validate the location ID
        if self.rf_lc.loc_id != self.site.loc_id {
            tracing::warn!("REG_REQ denial, LOCID rejection, locId = ${:06X}", self.rf_lc.loc_id);
            activity_log!("NXDN", true, "unit registration request from {} denied", src_id);
            self.rf_lc.cause = CauseResponse::MmRegFailed.into_raw();
        }

        // validate the source RID
        if !self.acl.validate_unit(src_id) {
            tracing::warn!("REG_REQ denial, RID rejection, srcId = {}", src_id);
            activity_log!("NXDN", true, "unit registration request from {} denied", src_id);
            self.rf_lc.cause = CauseResponse::MmRegFailed.into_raw();
        }

        // validate the source RID is registered
        if self.verify_reg && !self.affiliations.is_unit_reg(src_id) {
            tracing::warn!("REG_REQ denial, RID not registered, srcId = {}", src_id);
            activity_log!("NXDN", true, "unit registration request from {} denied", src_id);
            self.rf_lc.cause = CauseResponse::MmRegRefused.into_raw();
        }

        if self.rf_lc.cause == CauseResponse::MmRegAccepted.into_raw() {
            if self.verbose {
                tracing::info!("REG_REQ (Registration Request), srcId = {}, locId = ${:06X}", src_id, self.rf_lc.loc_id);
            }

            activity_log!("NXDN", true, "unit registration request from {}", src_id);

            // update dynamic unit registration table
            if !self.affiliations.is_unit_reg(src_id) {
                self.affiliations.unit_reg(src_id);
            }
        }

        self.rf_lc.src_id = src_id;
        self.rf_lc.dst_id = src_id;

        self.write_rf_message(true, false);

        self.rf_lc.message_type = message_type;
    }

    /// Helper to write a group affiliation response. Every check runs; the
    /// last failing check's cause wins. A zero destination is a valid
    /// de-affiliation signal and is accepted.
    fn send_grp_reg_response(&mut self, src_id: UnitId, dst_id: u16) -> bool {
        let message_type = self.rf_lc.message_type;
        let mut ret = false;

        self.rf_lc.message_type = MessageType::RcchGrpReg.into_raw();
        self.rf_lc.cause = CauseResponse::MmRegAccepted.into_raw();

        // validate the location ID
        if self.rf_lc.loc_id != self.site.loc_id {
            tracing::warn!("GRP_REG_REQ denial, LOCID rejection, locId = ${:06X}", self.rf_lc.loc_id);
            activity_log!("NXDN", true, "group affiliation request from {} denied", src_id);
            self.rf_lc.cause = CauseResponse::MmRegFailed.into_raw();
        }

        // validate the source RID
        if !self.acl.validate_unit(src_id) {
            tracing::warn!("GRP_REG_REQ denial, RID rejection, srcId = {}", src_id);
            activity_log!("NXDN", true, "group affiliation request from {} to TG {} denied", src_id, dst_id);
            self.rf_lc.cause = CauseResponse::MmRegFailed.into_raw();
        }

        // validate the source RID is registered
        if self.verify_reg && !self.affiliations.is_unit_reg(src_id) {
            tracing::warn!("GRP_REG_REQ denial, RID not registered, srcId = {}", src_id);
            activity_log!("NXDN", true, "group affiliation request from {} to TG {} denied", src_id, dst_id);
            self.rf_lc.cause = CauseResponse::MmRegRefused.into_raw();
        }

        // validate the talkgroup ID
        if self.rf_lc.group {
            if dst_id == 0 {
                tracing::warn!("GRP_REG_REQ, TGID 0, de-affiliation, srcId = {}", src_id);
            } else if !self.acl.validate_talkgroup(dst_id) {
                tracing::warn!("GRP_REG_REQ denial, TGID rejection, dstId = {}", dst_id);
                activity_log!("NXDN", true, "group affiliation request from {} to TG {} denied", src_id, dst_id);
                self.rf_lc.cause = CauseResponse::MmLocAcptGrpRefuse.into_raw();
            }
        }

        if self.rf_lc.cause == CauseResponse::MmRegAccepted.into_raw() {
            if self.verbose {
                tracing::info!("GRP_REG_REQ (Group Registration Request), srcId = {}, dstId = {}", src_id, dst_id);
            }

            activity_log!("NXDN", true, "group affiliation request from {} to TG {}", src_id, dst_id);
            ret = true;

            // update dynamic affiliation table
            self.affiliations.group_aff(src_id, dst_id);
        }

        self.write_rf_message(false, false);

        self.rf_lc.message_type = message_type;
        ret
    }

    /// Helper to write a single-block RCCH packet from the RF scratch link
    /// control.
    fn write_rf_message(&mut self, no_network: bool, clear_before_write: bool) {
        if !self.control {
            return;
        }

        let data = self.build_rf_frame(lich::LICH_OPT_DATA_COMMON, CacStructure::Single, false);

        if !no_network {
            self.write_network(&data);
        }

        if clear_before_write {
            self.queue.clear();
        }

        if self.site.duplex {
            self.queue.push(&data);
        }
    }

    /// Helper to write a SITE_INFO broadcast packet.
    fn write_cc_site_info(&mut self) {
        if self.debug {
            tracing::debug!("SITE_INFO (Site Information)");
        }

        let message_type = self.rf_lc.message_type;

        self.rf_lc.message_type = MessageType::RcchSiteInfo.into_raw();
        let data = self.build_rf_frame(lich::LICH_OPT_DATA_NORMAL, CacStructure::HeadSingle, false);

        if self.site.duplex {
            self.queue.push(&data);
        }

        self.rf_lc.message_type = message_type;
    }

    /// Helper to write a SRV_INFO broadcast packet.
    fn write_cc_service_info(&mut self) {
        if self.debug {
            tracing::debug!("SRV_INFO (Service Information)");
        }

        let message_type = self.rf_lc.message_type;

        self.rf_lc.message_type = MessageType::RcchSrvInfo.into_raw();
        let data = self.build_rf_frame(lich::LICH_OPT_DATA_NORMAL, CacStructure::Dual, true);

        if self.site.duplex {
            self.queue.push(&data);
        }

        self.rf_lc.message_type = message_type;
    }

    /// Assembles one complete outbound frame: sync, LICH, link control, CAC,
    /// tag bytes, line coding and the trailing post-field run. Dual framing
    /// repeats a half-length link-control encoding in both payload halves.
    fn build_rf_frame(&mut self, option: u8, structure: CacStructure, dual: bool) -> Vec<u8> {
        let mut frame = BitBuffer::new(FRAME_LENGTH_BITS);
        sync::add_fsw(&mut frame);

        let lich = Lich {
            rfct: lich::LICH_RFCT_RCCH,
            fct: lich::LICH_FCT_CAC_OUTBOUND,
            option,
            outbound: true,
        };
        lich.encode(&mut frame);

        let mut lc_bits = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        if dual {
            self.rf_lc.encode(&mut lc_bits, RCCH_LC_LENGTH_BITS / 2);
            self.rf_lc.encode_at(&mut lc_bits, RCCH_LC_LENGTH_BITS / 2, RCCH_LC_LENGTH_BITS / 2);
        } else {
            self.rf_lc.encode(&mut lc_bits, RCCH_LC_LENGTH_BITS);
        }
        if self.dump_rcch {
            tracing::debug!("-> {}", self.rf_lc);
        }

        let mut cac = Cac::new();
        cac.verbose = self.dump_rcch;
        cac.ran = self.site.ran;
        cac.structure = structure;
        cac.set_data(&mut lc_bits);
        cac.encode(&mut frame);

        let mut data = vec![0u8; FRAME_LENGTH_BYTES + 2];
        data[0] = TAG_DATA;
        data[1] = 0x00;
        data[2..].copy_from_slice(frame.as_bytes());

        self.line_coder.process(&mut data[2..]);
        sync::add_post_bits(&mut data[2..]);

        data
    }

    /// Forward an already-built frame to the network peer, if one exists.
    fn write_network(&mut self, data: &[u8]) {
        let Some(network) = self.network.as_mut() else {
            return;
        };
        network.send_rcch(&self.rf_lc, data);
    }

    fn net_active(&self) -> bool {
        self.config.state_read().network_connected
    }
}
