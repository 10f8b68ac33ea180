pub mod message_box;
pub mod stats;
