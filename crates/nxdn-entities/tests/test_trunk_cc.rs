mod common;

use common::{decode_outbound, default_test_config, make_engine};
use nxdn_core::debug;
use nxdn_pdus::cac::CacStructure;
use nxdn_pdus::consts::RCCH_LC_LENGTH_BITS;
use nxdn_pdus::enums::message_type::MessageType;

#[test]
fn test_broadcast_alternates_by_sequence_index() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let mut trunk = make_engine(cfg);

    trunk.write_control_data(0, 0, false);
    trunk.write_control_data(1, 1, false);
    trunk.write_control_data(2, 2, false);
    assert_eq!(trunk.queue.len(), 3);

    // index 0 carries the site broadcast in head-single framing
    let (cac, lc) = decode_outbound(&trunk.queue.pop().unwrap());
    assert_eq!(cac.structure, CacStructure::HeadSingle);
    assert_eq!(lc.message_type, MessageType::RcchSiteInfo.into_raw());

    // every other index carries the service broadcast in dual framing
    for _ in 0..2 {
        let frame = trunk.queue.pop().unwrap();
        let (cac, _) = decode_outbound(&frame);
        assert_eq!(cac.structure, CacStructure::Dual);

        let payload = cac.data().to_bitstr();
        let (first, second) = payload.split_at(RCCH_LC_LENGTH_BITS / 2);
        assert_eq!(first, second, "dual framing repeats the half-length encoding");
        assert_eq!(
            u8::from_str_radix(&first[..6], 2).unwrap(),
            MessageType::RcchSrvInfo.into_raw()
        );
    }

    // the scratch link control is back to its idle default
    assert_eq!(trunk.rf_lc.message_type, MessageType::Idle.into_raw());
}

#[test]
fn test_broadcast_skipped_when_queue_full() {
    debug::setup_logging_verbose();

    let mut cfg = default_test_config();
    cfg.trunk.queue_frames = 2;
    let mut trunk = make_engine(cfg);

    trunk.write_control_data(0, 0, false);
    trunk.write_control_data(1, 1, false);
    trunk.write_control_data(2, 2, false);

    // the third broadcast was silently skipped, not an error
    assert_eq!(trunk.queue.len(), 2);
}

#[test]
fn test_broadcast_noop_when_control_disabled() {
    debug::setup_logging_verbose();

    let mut cfg = default_test_config();
    cfg.trunk.enable_control = false;
    cfg.trunk.channels = vec![];
    let mut trunk = make_engine(cfg);

    trunk.write_control_data(0, 0, false);
    assert!(trunk.queue.is_empty());
}

#[test]
fn test_simplex_site_does_not_self_queue() {
    debug::setup_logging_verbose();

    let mut cfg = default_test_config();
    cfg.site.duplex = false;
    let mut trunk = make_engine(cfg);

    trunk.write_control_data(0, 0, false);
    assert!(trunk.queue.is_empty());
}

#[test]
fn test_site_broadcast_carries_site_identity() {
    debug::setup_logging_verbose();

    let cfg = default_test_config();
    let site = cfg.site.site_data();
    let mut trunk = make_engine(cfg);

    trunk.write_control_data(0, 0, false);
    let (cac, lc) = decode_outbound(&trunk.queue.pop().unwrap());

    assert_eq!(cac.ran, site.ran);
    assert_eq!(lc.loc_id, site.loc_id);
    assert_eq!(lc.site_id, site.site_id);
}
