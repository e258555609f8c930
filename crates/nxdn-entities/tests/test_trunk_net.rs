mod common;

use common::{
    build_request_frame, decode_outbound, default_test_config, make_engine,
    make_engine_with_network, RecordingNetwork, TEST_SRC, TEST_TG,
};
use nxdn_core::debug;
use nxdn_entities::trunk::traits::GrantResponse;
use nxdn_entities::{NetState, RfState};
use nxdn_pdus::enums::cause::CauseResponse;
use nxdn_pdus::enums::message_type::MessageType;
use nxdn_pdus::lich;

#[test]
fn test_authoritative_network_arbitrates_grants() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let site = cfg.site.site_data();
    let (net, record) = RecordingNetwork::new(true);
    let (shared, mut trunk) = make_engine_with_network(cfg, Some(Box::new(net)));
    shared.state_write().network_connected = true;
    trunk.affiliations.group_aff(TEST_SRC, TEST_TG);

    let frame = build_request_frame(&site, site.ran, MessageType::RtchVcall.into_raw(), TEST_SRC, TEST_TG);
    assert!(trunk.process_rf(lich::LICH_FCT_CAC_INBOUND_LONG, 0, &frame));

    // the request went upstream; nothing was arbitrated or emitted locally
    assert_eq!(record.lock().unwrap().grant_reqs, vec![(true, TEST_SRC, TEST_TG)]);
    assert!(!trunk.affiliations.is_granted(TEST_TG));
    assert!(trunk.queue.is_empty());
}

#[test]
fn test_network_grant_response_replayed_on_clock() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let (net, record) = RecordingNetwork::new(true);
    let (shared, mut trunk) = make_engine_with_network(cfg, Some(Box::new(net)));
    shared.state_write().network_connected = true;

    record.lock().unwrap().grant_rsp = Some(GrantResponse {
        group: true,
        src_id: TEST_SRC,
        dst_id: TEST_TG,
        ch_no: 7,
    });

    let pool_before = trunk.affiliations.free_ch_count();
    trunk.clock(80);

    // the externally decided grant goes straight out, bypassing the pool
    assert_eq!(trunk.queue.len(), 1);
    let (_, lc) = decode_outbound(&trunk.queue.pop().unwrap());
    assert_eq!(lc.message_type, MessageType::RtchVcall.into_raw());
    assert_eq!(lc.src_id, TEST_SRC);
    assert_eq!(lc.dst_id, TEST_TG);
    assert_eq!(lc.grp_vch_no, 7);
    assert_eq!(trunk.affiliations.free_ch_count(), pool_before);

    // the response was consumed; the next tick polls empty
    trunk.clock(80);
    assert!(trunk.queue.is_empty());
}

#[test]
fn test_disconnected_network_falls_back_to_local_arbitration() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let site = cfg.site.site_data();
    let (net, record) = RecordingNetwork::new(true);
    let (_shared, mut trunk) = make_engine_with_network(cfg, Some(Box::new(net)));
    trunk.affiliations.group_aff(TEST_SRC, TEST_TG);

    // network_connected stays false: grants are arbitrated locally
    let frame = build_request_frame(&site, site.ran, MessageType::RtchVcall.into_raw(), TEST_SRC, TEST_TG);
    assert!(trunk.process_rf(lich::LICH_FCT_CAC_INBOUND_LONG, 0, &frame));

    assert!(record.lock().unwrap().grant_reqs.is_empty());
    assert!(trunk.affiliations.is_granted(TEST_TG));
}

#[test]
fn test_rf_grant_forwarded_to_network() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let site = cfg.site.site_data();
    // a peer that relays traffic but does not broker grants
    let (net, record) = RecordingNetwork::new(false);
    let (shared, mut trunk) = make_engine_with_network(cfg, Some(Box::new(net)));
    shared.state_write().network_connected = true;
    trunk.affiliations.group_aff(TEST_SRC, TEST_TG);

    let frame = build_request_frame(&site, site.ran, MessageType::RtchVcall.into_raw(), TEST_SRC, TEST_TG);
    assert!(trunk.process_rf(lich::LICH_FCT_CAC_INBOUND_LONG, 0, &frame));

    // the grant was decided locally and a copy went to the peer
    assert!(trunk.affiliations.is_granted(TEST_TG));
    assert_eq!(record.lock().unwrap().sent_frames, 1);
}

#[test]
fn test_network_collision_guard() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let site = cfg.site.site_data();
    let mut trunk = make_engine(cfg);
    trunk.affiliations.group_aff(TEST_SRC, TEST_TG);

    // a network-originated call to the same talkgroup is in flight
    trunk.net_state = NetState::Active;
    trunk.net_last_dst_id = TEST_TG;

    let frame = build_request_frame(&site, site.ran, MessageType::RtchVcall.into_raw(), TEST_SRC, TEST_TG);
    assert!(!trunk.process_rf(lich::LICH_FCT_CAC_INBOUND_LONG, 0, &frame));

    assert_eq!(trunk.rf_state, RfState::Rejected);
    let (_, lc) = decode_outbound(&trunk.queue.pop().unwrap());
    assert_eq!(lc.cause, CauseResponse::VdQueGrpBusy.into_raw());
    assert!(!trunk.affiliations.is_granted(TEST_TG));

    // a different destination is unaffected by the collision guard
    trunk.rf_state = RfState::Listening;
    trunk.affiliations.group_aff(1002, 102);
    let other = build_request_frame(&site, site.ran, MessageType::RtchVcall.into_raw(), 1002, 102);
    assert!(trunk.process_rf(lich::LICH_FCT_CAC_INBOUND_LONG, 0, &other));
    assert!(trunk.affiliations.is_granted(102));
}

#[test]
fn test_process_network_resets_scratch_state_when_idle() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let mut trunk = make_engine(cfg);

    trunk.rf_lc.src_id = 4242;
    trunk.net_lc.src_id = 4242;
    trunk.write_control_data(0, 0, false);
    assert!(!trunk.queue.is_empty());

    assert!(trunk.process_network(lich::LICH_FCT_CAC_OUTBOUND, 0, &[]));

    // idle network side: queue flushed, both scratch link controls rebuilt
    assert!(trunk.queue.is_empty());
    assert_eq!(trunk.rf_lc.src_id, 0);
    assert_eq!(trunk.net_lc.src_id, 0);
}
