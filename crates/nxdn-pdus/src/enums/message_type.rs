/// Control/traffic-channel link-control message types
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    RtchVcall = 0x01,
    RtchVcallIv = 0x03,
    RtchTxRelease = 0x08,
    Idle = 0x10,
    RcchSiteInfo = 0x18,
    RcchSrvInfo = 0x19,
    RcchReg = 0x20,
    RcchGrpReg = 0x24,
}

impl std::convert::TryFrom<u64> for MessageType {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(MessageType::RtchVcall),
            0x03 => Ok(MessageType::RtchVcallIv),
            0x08 => Ok(MessageType::RtchTxRelease),
            0x10 => Ok(MessageType::Idle),
            0x18 => Ok(MessageType::RcchSiteInfo),
            0x19 => Ok(MessageType::RcchSrvInfo),
            0x20 => Ok(MessageType::RcchReg),
            0x24 => Ok(MessageType::RcchGrpReg),
            _ => Err(()),
        }
    }
}

impl MessageType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl From<MessageType> for u8 {
    fn from(e: MessageType) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for MessageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MessageType::RtchVcall => write!(f, "VCALL"),
            MessageType::RtchVcallIv => write!(f, "VCALL_IV"),
            MessageType::RtchTxRelease => write!(f, "TX_REL"),
            MessageType::Idle => write!(f, "IDLE"),
            MessageType::RcchSiteInfo => write!(f, "SITE_INFO"),
            MessageType::RcchSrvInfo => write!(f, "SRV_INFO"),
            MessageType::RcchReg => write!(f, "REG"),
            MessageType::RcchGrpReg => write!(f, "GRP_REG"),
        }
    }
}
