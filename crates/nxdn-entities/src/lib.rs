pub mod acl;
pub mod trunk;

// Re-export commonly used items
pub use acl::access_control::AccessControl;
pub use trunk::trunk_bs::{NetState, RfState, TrunkBs};
