pub mod affiliations;
pub mod frame_queue;
pub mod line_coding;
