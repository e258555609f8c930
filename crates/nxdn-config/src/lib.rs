pub mod acl_tables;
pub mod site_config;
pub mod toml_config;

pub use acl_tables::{RadioIdTable, TalkgroupRule, TalkgroupRules};
pub use site_config::{CfgAcl, CfgSiteInfo, CfgTrunk, SharedConfig, TrunkConfig, TrunkState};
