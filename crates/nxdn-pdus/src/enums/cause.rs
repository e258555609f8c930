/// Cause/response codes carried in denial and response messages
/// Bits: 8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CauseResponse {
    /// Registration accepted
    MmRegAccepted = 0x01,
    /// Location accepted, group affiliation failed
    MmLocAcptGrpFail = 0x04,
    /// Location accepted, group affiliation refused
    MmLocAcptGrpRefuse = 0x05,
    /// Registration failed (location or identity rejection)
    MmRegFailed = 0x06,
    /// Registration refused (precondition unmet)
    MmRegRefused = 0x08,
    /// Voice call accepted
    VdAccepted = 0x10,
    /// Requesting unit not permitted
    VdReqUnitNotPerm = 0x11,
    /// Target unit/talkgroup not permitted
    VdTgtUnitNotPerm = 0x12,
    /// Requesting unit not registered/affiliated
    VdReqUnitNotReg = 0x15,
    /// Control-channel service unavailable
    SvcUnavailable = 0x20,
    /// Queued: channel resource not available
    VdQueChnResourceNotAvail = 0x30,
    /// Queued: traffic in progress / group busy
    VdQueGrpBusy = 0x32,
}

impl std::convert::TryFrom<u64> for CauseResponse {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(CauseResponse::MmRegAccepted),
            0x04 => Ok(CauseResponse::MmLocAcptGrpFail),
            0x05 => Ok(CauseResponse::MmLocAcptGrpRefuse),
            0x06 => Ok(CauseResponse::MmRegFailed),
            0x08 => Ok(CauseResponse::MmRegRefused),
            0x10 => Ok(CauseResponse::VdAccepted),
            0x11 => Ok(CauseResponse::VdReqUnitNotPerm),
            0x12 => Ok(CauseResponse::VdTgtUnitNotPerm),
            0x15 => Ok(CauseResponse::VdReqUnitNotReg),
            0x20 => Ok(CauseResponse::SvcUnavailable),
            0x30 => Ok(CauseResponse::VdQueChnResourceNotAvail),
            0x32 => Ok(CauseResponse::VdQueGrpBusy),
            _ => Err(()),
        }
    }
}

impl CauseResponse {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl From<CauseResponse> for u8 {
    fn from(e: CauseResponse) -> Self {
        e.into_raw()
    }
}

impl core::fmt::Display for CauseResponse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CauseResponse::MmRegAccepted => write!(f, "MM_REG_ACCEPTED"),
            CauseResponse::MmLocAcptGrpFail => write!(f, "MM_LOC_ACPT_GRP_FAIL"),
            CauseResponse::MmLocAcptGrpRefuse => write!(f, "MM_LOC_ACPT_GRP_REFUSE"),
            CauseResponse::MmRegFailed => write!(f, "MM_REG_FAILED"),
            CauseResponse::MmRegRefused => write!(f, "MM_REG_REFUSED"),
            CauseResponse::VdAccepted => write!(f, "VD_ACCEPTED"),
            CauseResponse::VdReqUnitNotPerm => write!(f, "VD_REQ_UNIT_NOT_PERM"),
            CauseResponse::VdTgtUnitNotPerm => write!(f, "VD_TGT_UNIT_NOT_PERM"),
            CauseResponse::VdReqUnitNotReg => write!(f, "VD_REQ_UNIT_NOT_REG"),
            CauseResponse::SvcUnavailable => write!(f, "SVC_UNAVAILABLE"),
            CauseResponse::VdQueChnResourceNotAvail => write!(f, "VD_QUE_CHN_RESOURCE_NOT_AVAIL"),
            CauseResponse::VdQueGrpBusy => write!(f, "VD_QUE_GRP_BUSY"),
        }
    }
}
