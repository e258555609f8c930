//! Common Access Channel container.
//!
//! The CAC body occupies bits 36..336 of the frame: structure tag (2 bits),
//! Radio Access Number (6 bits), 144-bit link-control payload and a CRC-16
//! over everything before it; the remainder of the body is zero-filled.
//! Decoding never fails hard on malformed input — it returns a validity flag
//! and callers are responsible for ignoring payload fields when invalid.

use nxdn_core::BitBuffer;

use crate::consts::{CAC_OFFSET_BITS, RCCH_LC_LENGTH_BITS};
use crate::crc16;
use crate::sync;

/// Container framing variant
/// Bits: 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CacStructure {
    Single = 0x00,
    Dual = 0x01,
    HeadSingle = 0x02,
    HeadDual = 0x03,
}

impl std::convert::TryFrom<u64> for CacStructure {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x00 => Ok(CacStructure::Single),
            0x01 => Ok(CacStructure::Dual),
            0x02 => Ok(CacStructure::HeadSingle),
            0x03 => Ok(CacStructure::HeadDual),
            _ => Err(()),
        }
    }
}

impl CacStructure {
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

pub struct Cac {
    /// 6 bits, Radio Access Number
    pub ran: u8,
    /// 2 bits, framing variant
    pub structure: CacStructure,
    /// Dump payload bits to the log on decode/encode
    pub verbose: bool,
    data: BitBuffer,
}

impl Cac {
    pub fn new() -> Self {
        Cac {
            ran: 0,
            structure: CacStructure::Single,
            verbose: false,
            data: BitBuffer::new(RCCH_LC_LENGTH_BITS),
        }
    }

    /// Parse the container from a full frame buffer. Returns true when the
    /// sync word and the CRC both check out; the payload fields are only
    /// meaningful when true is returned.
    pub fn decode(&mut self, frame: &mut BitBuffer) -> bool {
        if !sync::check_fsw(frame) {
            return false;
        }

        frame.seek(CAC_OFFSET_BITS);
        let Some(structure) = frame.read_bits(2) else {
            return false;
        };
        let Some(ran) = frame.read_bits(6) else {
            return false;
        };

        let mut data = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        data.copy_bits(frame, RCCH_LC_LENGTH_BITS);
        data.seek(0);

        let Some(found) = frame.read_bits(16) else {
            return false;
        };
        let expected = crc16::crc16_region(frame, CAC_OFFSET_BITS, 8 + RCCH_LC_LENGTH_BITS);

        self.structure = CacStructure::try_from(structure).unwrap(); // 2-bit field, all values mapped
        self.ran = ran as u8;
        self.data = data;

        let valid = found as u16 == expected;
        if self.verbose {
            tracing::debug!("<- CAC ran = {}, structure = {:?}, crc ok = {}, data {}", self.ran, self.structure, valid, self.data.dump_hex());
        }
        valid
    }

    /// Serialize the container into a full frame buffer.
    pub fn encode(&self, frame: &mut BitBuffer) {
        frame.seek(CAC_OFFSET_BITS);
        frame.write_bits(self.structure.into_raw() as u64, 2);
        frame.write_bits(self.ran as u64, 6);

        let mut data = self.data.clone();
        data.seek(0);
        frame.copy_bits(&mut data, RCCH_LC_LENGTH_BITS);

        let crc = crc16::crc16_region(frame, CAC_OFFSET_BITS, 8 + RCCH_LC_LENGTH_BITS);
        frame.write_bits(crc as u64, 16);
        // the remainder of the CAC body stays zero-filled

        if self.verbose {
            tracing::debug!("-> CAC ran = {}, structure = {:?}, data {}", self.ran, self.structure, self.data.dump_hex());
        }
    }

    /// Copies the link-control payload into the container.
    pub fn set_data(&mut self, buf: &mut BitBuffer) {
        buf.seek(0);
        let mut data = BitBuffer::new(RCCH_LC_LENGTH_BITS);
        data.copy_bits(buf, RCCH_LC_LENGTH_BITS);
        self.data = data;
    }

    /// Returns a copy of the link-control payload, positioned at its start.
    pub fn data(&self) -> BitBuffer {
        let mut data = self.data.clone();
        data.seek(0);
        data
    }
}

impl Default for Cac {
    fn default() -> Self {
        Self::new()
    }
}
