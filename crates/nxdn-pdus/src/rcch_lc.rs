use core::fmt;

use nxdn_core::{BitBuffer, FrameParseErr, SiteData};

use crate::consts::{RCCH_LC_LENGTH_BITS, RCCH_LC_SHORT_LENGTH_BITS};
use crate::enums::message_type::MessageType;

/// Service-information flags broadcast in SRV_INFO / SITE_INFO messages
pub const SRV_VOICE: u16 = 0x8000;
pub const SRV_DATA: u16 = 0x4000;
pub const SRV_REG: u16 = 0x2000;
pub const SRV_GRP_REG: u16 = 0x1000;
pub const SRV_AUTH: u16 = 0x0800;
pub const SRV_COMPOSITE_CONTROL: u16 = 0x0400;

/// Default service set advertised by a trunking control channel
pub const SRV_DEFAULT: u16 = SRV_VOICE | SRV_REG | SRV_GRP_REG | SRV_COMPOSITE_CONTROL;

/// Control/traffic-channel Link Control payload.
///
/// Full field layout (144 bits; the inbound short form carries the first 96):
///
/// ```text
///    0..6    message type        86..96   reserved
///    6..22   source unit ID      96..112  service information
///   22..38   destination ID     112..128  site identity
///   38..44   group/emergency/   128..144  reserved
///            encrypted/priority
///   44..54   granted channel
///   54..78   location ID
///   78..86   cause/response
/// ```
pub struct RcchLc {
    /// 6 bits, message type (raw; unknown values are preserved)
    pub message_type: u8,
    /// 16 bits, source unit ID
    pub src_id: u16,
    /// 16 bits, destination unit or talkgroup ID
    pub dst_id: u16,
    /// Group call flag
    pub group: bool,
    pub emergency: bool,
    pub encrypted: bool,
    /// 3 bits
    pub priority: u8,
    /// 10 bits, granted traffic channel number
    pub grp_vch_no: u16,
    /// 24 bits, location ID
    pub loc_id: u32,
    /// 8 bits, cause/response code (raw)
    pub cause: u8,
    /// 16 bits, service information flags
    pub svc_info: u16,
    /// 16 bits, site identity
    pub site_id: u16,
}

impl RcchLc {
    /// Fresh scratch link control bound to the given site data.
    pub fn new(site: &SiteData) -> Self {
        RcchLc {
            message_type: MessageType::Idle.into_raw(),
            src_id: 0,
            dst_id: 0,
            group: true,
            emergency: false,
            encrypted: false,
            priority: 0,
            grp_vch_no: 0,
            loc_id: site.loc_id,
            cause: 0,
            svc_info: SRV_DEFAULT,
            site_id: site.site_id,
        }
    }

    /// Parse `num_bits` of link control from the payload buffer. The short
    /// form stops before the broadcast-only fields, which keep their
    /// previous values.
    pub fn decode(&mut self, buf: &mut BitBuffer, num_bits: usize) -> Result<(), FrameParseErr> {
        self.message_type = buf.read_field(6, "message_type")? as u8;
        self.src_id = buf.read_field(16, "src_id")? as u16;
        self.dst_id = buf.read_field(16, "dst_id")? as u16;
        self.group = buf.read_field(1, "group")? != 0;
        self.emergency = buf.read_field(1, "emergency")? != 0;
        self.encrypted = buf.read_field(1, "encrypted")? != 0;
        self.priority = buf.read_field(3, "priority")? as u8;
        self.grp_vch_no = buf.read_field(10, "grp_vch_no")? as u16;
        self.loc_id = buf.read_field(24, "loc_id")? as u32;
        self.cause = buf.read_field(8, "cause")? as u8;
        let _ = buf.read_field(10, "reserved")?;

        if num_bits > RCCH_LC_SHORT_LENGTH_BITS {
            self.svc_info = buf.read_field(16, "svc_info")? as u16;
            self.site_id = buf.read_field(16, "site_id")? as u16;
            let _ = buf.read_field(16, "reserved")?;
        }
        Ok(())
    }

    /// Serialize the first `num_bits` of the layout at the start of `buf`.
    pub fn encode(&self, buf: &mut BitBuffer, num_bits: usize) {
        self.encode_at(buf, num_bits, 0);
    }

    /// Serialize the first `num_bits` of the layout at a bit offset. Dual
    /// structure broadcasts repeat a half-length encoding in both halves.
    pub fn encode_at(&self, buf: &mut BitBuffer, num_bits: usize, offset: usize) {
        let mut fields = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        self.write_fields(&mut fields);
        fields.seek(0);

        buf.seek(offset);
        buf.copy_bits(&mut fields, num_bits);
    }

    fn write_fields(&self, buf: &mut BitBuffer) {
        buf.write_bits((self.message_type & 0x3F) as u64, 6);
        buf.write_bits(self.src_id as u64, 16);
        buf.write_bits(self.dst_id as u64, 16);
        buf.write_bits(self.group as u64, 1);
        buf.write_bits(self.emergency as u64, 1);
        buf.write_bits(self.encrypted as u64, 1);
        buf.write_bits((self.priority & 0x07) as u64, 3);
        buf.write_bits((self.grp_vch_no & 0x3FF) as u64, 10);
        buf.write_bits((self.loc_id & 0x00FF_FFFF) as u64, 24);
        buf.write_bits(self.cause as u64, 8);
        buf.write_zeroes(10);
        buf.write_bits(self.svc_info as u64, 16);
        buf.write_bits(self.site_id as u64, 16);
        buf.write_zeroes(16);
    }
}

impl fmt::Display for RcchLc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RcchLc {{ message_type: ${:02X} src_id: {} dst_id: {} group: {} emergency: {} encrypted: {} priority: {} grp_vch_no: {} loc_id: ${:06X} cause: ${:02X} }}",
            self.message_type,
            self.src_id,
            self.dst_id,
            self.group,
            self.emergency,
            self.encrypted,
            self.priority,
            self.grp_vch_no,
            self.loc_id,
            self.cause,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::cause::CauseResponse;
    use nxdn_core::debug;

    fn sample_site() -> SiteData {
        SiteData::new(0x01A2B3, 0x0102, 1, 1, true)
    }

    #[test]
    fn test_full_roundtrip() {
        debug::setup_logging_verbose();

        let mut lc = RcchLc::new(&sample_site());
        lc.message_type = MessageType::RtchVcall.into_raw();
        lc.src_id = 1001;
        lc.dst_id = 101;
        lc.group = true;
        lc.emergency = true;
        lc.priority = 3;
        lc.grp_vch_no = 12;
        lc.cause = CauseResponse::VdAccepted.into_raw();

        let mut buf = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        lc.encode(&mut buf, RCCH_LC_LENGTH_BITS);
        buf.seek(0);
        tracing::info!("-> {}", buf.dump_hex());

        let mut decoded = RcchLc::new(&sample_site());
        decoded.decode(&mut buf, RCCH_LC_LENGTH_BITS).expect("Failed parsing");

        assert_eq!(decoded.message_type, lc.message_type);
        assert_eq!(decoded.src_id, 1001);
        assert_eq!(decoded.dst_id, 101);
        assert!(decoded.group);
        assert!(decoded.emergency);
        assert!(!decoded.encrypted);
        assert_eq!(decoded.priority, 3);
        assert_eq!(decoded.grp_vch_no, 12);
        assert_eq!(decoded.loc_id, 0x01A2B3);
        assert_eq!(decoded.cause, CauseResponse::VdAccepted.into_raw());
        assert_eq!(decoded.svc_info, SRV_DEFAULT);
        assert_eq!(decoded.site_id, 0x0102);
    }

    #[test]
    fn test_short_decode_keeps_broadcast_fields() {
        let mut lc = RcchLc::new(&sample_site());
        lc.message_type = MessageType::RcchReg.into_raw();
        lc.src_id = 42;
        lc.svc_info = 0xFFFF; // never encoded in the short form

        let mut buf = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        lc.encode(&mut buf, RCCH_LC_LENGTH_BITS);
        buf.seek(0);

        let mut decoded = RcchLc::new(&sample_site());
        decoded.decode(&mut buf, RCCH_LC_SHORT_LENGTH_BITS).expect("Failed parsing");
        assert_eq!(decoded.src_id, 42);
        assert_eq!(decoded.svc_info, SRV_DEFAULT);
    }

    #[test]
    fn test_container_roundtrip_reproduces_every_field() {
        use crate::cac::{Cac, CacStructure};
        use crate::consts::FRAME_LENGTH_BITS;
        use crate::sync;

        let mut lc = RcchLc::new(&sample_site());
        lc.message_type = MessageType::RtchVcall.into_raw();
        lc.src_id = 2040;
        lc.dst_id = 314;
        lc.grp_vch_no = 7;
        lc.cause = CauseResponse::VdQueGrpBusy.into_raw();

        let mut lc_bits = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        lc.encode(&mut lc_bits, RCCH_LC_LENGTH_BITS);

        let mut frame = BitBuffer::new(FRAME_LENGTH_BITS);
        sync::add_fsw(&mut frame);
        let mut cac = Cac::new();
        cac.ran = 1;
        cac.structure = CacStructure::Single;
        cac.set_data(&mut lc_bits);
        cac.encode(&mut frame);

        let mut decoded_cac = Cac::new();
        assert!(decoded_cac.decode(&mut frame));

        let mut payload = decoded_cac.data();
        let mut decoded = RcchLc::new(&sample_site());
        decoded.decode(&mut payload, RCCH_LC_LENGTH_BITS).expect("Failed parsing");

        assert_eq!(decoded.message_type, lc.message_type);
        assert_eq!(decoded.src_id, lc.src_id);
        assert_eq!(decoded.dst_id, lc.dst_id);
        assert_eq!(decoded.grp_vch_no, lc.grp_vch_no);
        assert_eq!(decoded.cause, lc.cause);
    }

    #[test]
    fn test_dual_halves_carry_identical_copies() {
        let mut lc = RcchLc::new(&sample_site());
        lc.message_type = MessageType::RcchSrvInfo.into_raw();
        lc.src_id = 7;
        lc.dst_id = 9;

        let mut buf = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        lc.encode(&mut buf, RCCH_LC_LENGTH_BITS / 2);
        lc.encode_at(&mut buf, RCCH_LC_LENGTH_BITS / 2, RCCH_LC_LENGTH_BITS / 2);

        let bits = buf.to_bitstr();
        let (first, second) = bits.split_at(RCCH_LC_LENGTH_BITS / 2);
        assert_eq!(first, second);
    }
}
