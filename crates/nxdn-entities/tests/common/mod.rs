use std::sync::{Arc, Mutex};

use nxdn_config::{SharedConfig, TrunkConfig};
use nxdn_core::{BitBuffer, SiteData};
use nxdn_entities::acl::access_control::AccessControl;
use nxdn_entities::trunk::components::affiliations::Affiliations;
use nxdn_entities::trunk::components::line_coding::NullLineCoder;
use nxdn_entities::trunk::traits::{GrantResponse, TrunkNetwork};
use nxdn_entities::TrunkBs;
use nxdn_pdus::cac::{Cac, CacStructure};
use nxdn_pdus::consts::{FRAME_LENGTH_BITS, FRAME_LENGTH_BYTES, RCCH_LC_LENGTH_BITS, TAG_DATA};
use nxdn_pdus::lich::{self, Lich};
use nxdn_pdus::rcch_lc::RcchLc;
use nxdn_pdus::sync;

pub const TEST_SRC: u16 = 1001;
pub const TEST_TG: u16 = 101;

/// Creates a default config for testing. It can still be modified as needed
/// before passing it to `make_engine`.
pub fn default_test_config() -> TrunkConfig {
    let mut cfg = TrunkConfig::new();
    cfg.site.location_id = 0x01A2B3;
    cfg.site.site_id = 1;
    cfg.site.ran = 1;
    cfg.site.channel_no = 1;
    cfg.site.duplex = true;
    cfg.trunk.enable_control = true;
    cfg.trunk.verify_affiliation = true;
    cfg.trunk.channels = vec![2, 3];
    cfg
}

pub fn make_engine(cfg: TrunkConfig) -> TrunkBs {
    let (_, engine) = make_engine_with_network(cfg, None);
    engine
}

pub fn make_engine_with_network(
    cfg: TrunkConfig,
    network: Option<Box<dyn TrunkNetwork>>,
) -> (SharedConfig, TrunkBs) {
    let acl = AccessControl::new(
        Arc::new(cfg.acl.radio_id_table()),
        Arc::new(cfg.acl.talkgroup_rules()),
    );
    let affiliations = Affiliations::new(&cfg.trunk.channels);
    let shared = SharedConfig::from_config(cfg);
    let engine = TrunkBs::new(shared.clone(), acl, affiliations, network, Box::new(NullLineCoder));
    (shared, engine)
}

/// Builds an inbound request frame (two tag bytes + 48 frame bytes) carrying
/// the given link control.
pub fn build_frame_from_lc(lc: &RcchLc, ran: u8) -> Vec<u8> {
    let mut frame = BitBuffer::new(FRAME_LENGTH_BITS);
    sync::add_fsw(&mut frame);

    let lich = Lich {
        rfct: lich::LICH_RFCT_RCCH,
        fct: lich::LICH_FCT_CAC_INBOUND_LONG,
        option: lich::LICH_OPT_DATA_COMMON,
        outbound: false,
    };
    lich.encode(&mut frame);

    let mut lc_bits = BitBuffer::new(RCCH_LC_LENGTH_BITS);
    lc.encode(&mut lc_bits, RCCH_LC_LENGTH_BITS);

    let mut cac = Cac::new();
    cac.ran = ran;
    cac.structure = CacStructure::Single;
    cac.set_data(&mut lc_bits);
    cac.encode(&mut frame);

    let mut data = vec![0u8; FRAME_LENGTH_BYTES + 2];
    data[0] = TAG_DATA;
    data[1] = 0x00;
    data[2..].copy_from_slice(frame.as_bytes());
    data
}

/// Builds an inbound request frame with the common fields filled in.
pub fn build_request_frame(site: &SiteData, ran: u8, message_type: u8, src_id: u16, dst_id: u16) -> Vec<u8> {
    let mut lc = RcchLc::new(site);
    lc.message_type = message_type;
    lc.src_id = src_id;
    lc.dst_id = dst_id;
    build_frame_from_lc(&lc, ran)
}

/// Decodes an outbound frame taken from the transmit queue back into its
/// container and link control.
pub fn decode_outbound(frame: &[u8]) -> (Cac, RcchLc) {
    let mut bits = BitBuffer::from_bytes(&frame[2..FRAME_LENGTH_BYTES + 2]);
    let mut cac = Cac::new();
    assert!(cac.decode(&mut bits), "outbound frame must carry a valid container");

    let mut payload = cac.data();
    let mut lc = RcchLc::new(&SiteData::default());
    lc.decode(&mut payload, RCCH_LC_LENGTH_BITS).expect("Failed parsing");
    (cac, lc)
}

/// Recorded interactions of the stub network peer.
#[derive(Default)]
pub struct NetRecord {
    pub grant_reqs: Vec<(bool, u16, u16)>,
    pub sent_frames: usize,
    pub grant_rsp: Option<GrantResponse>,
}

/// Stub network peer that records every interaction for later inspection.
pub struct RecordingNetwork {
    state: Arc<Mutex<NetRecord>>,
    authoritative: bool,
}

impl RecordingNetwork {
    pub fn new(authoritative: bool) -> (Self, Arc<Mutex<NetRecord>>) {
        let state = Arc::new(Mutex::new(NetRecord::default()));
        let net = RecordingNetwork {
            state: state.clone(),
            authoritative,
        };
        (net, state)
    }
}

impl TrunkNetwork for RecordingNetwork {
    fn send_rcch(&mut self, _lc: &RcchLc, _data: &[u8]) {
        self.state.lock().unwrap().sent_frames += 1;
    }

    fn request_grant(&mut self, group: bool, src_id: u16, dst_id: u16) -> bool {
        self.state.lock().unwrap().grant_reqs.push((group, src_id, dst_id));
        true
    }

    fn poll_grant_response(&mut self) -> Option<GrantResponse> {
        self.state.lock().unwrap().grant_rsp.take()
    }

    fn handles_grants(&self) -> bool {
        self.authoritative
    }
}
