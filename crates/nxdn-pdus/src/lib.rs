//! Control-channel wire codecs
//!
//! Bit-exact encode/decode for the three nested control-channel structures:
//! the Common Access Channel container, the Link Information Channel header
//! and the Link Control payload, plus the message-type and cause enums they
//! carry.

pub mod cac;
pub mod consts;
pub mod crc16;
pub mod enums;
pub mod lich;
pub mod rcch_lc;
pub mod sync;

pub use cac::{Cac, CacStructure};
pub use lich::Lich;
pub use rcch_lc::RcchLc;
