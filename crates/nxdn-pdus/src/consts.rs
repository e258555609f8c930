//! Frame geometry constants for the 4800 bit/s control channel.
//!
//! One RF frame is 384 bits (80 ms on air):
//!
//! ```text
//!   0        20        36                                336       360     384
//!   +--------+---------+---------------------------------+---------+-------+
//!   |  FSW   |  LICH   |           CAC body              |  guard  | post  |
//!   +--------+---------+---------------------------------+---------+-------+
//! ```

/// RF frame length
pub const FRAME_LENGTH_BITS: usize = 384;
pub const FRAME_LENGTH_BYTES: usize = 48;

/// Frame sync word, 20 bits
pub const FSW: u32 = 0xCDF59;
pub const FSW_LENGTH_BITS: usize = 20;

/// Link Information Channel header: 8 logical bits, each sent twice
pub const LICH_LENGTH_BITS: usize = 16;

/// CAC body: structure tag + RAN + link-control payload + CRC + padding
pub const CAC_LENGTH_BITS: usize = 300;
/// Bit offset of the CAC body within the frame
pub const CAC_OFFSET_BITS: usize = FSW_LENGTH_BITS + LICH_LENGTH_BITS;

/// Guard field between the CAC body and the post field
pub const CAC_E_GUARD_BITS: usize = 24;
/// Trailing post-field bit run, written from the preamble pattern
pub const CAC_E_POST_FIELD_BITS: usize = 24;

/// Link-control payload lengths
pub const RCCH_LC_LENGTH_BITS: usize = 144;
pub const RCCH_LC_SHORT_LENGTH_BITS: usize = 96;

/// Preamble pattern, source of the trailing post-field bit run
pub const POST_PREAMBLE: [u8; 3] = [0x57, 0x75, 0xFD];

/// Leading tag byte on every transmit frame handed to the modem
pub const TAG_DATA: u8 = 0x01;
