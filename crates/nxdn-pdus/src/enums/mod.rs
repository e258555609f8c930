pub mod cause;
pub mod message_type;
