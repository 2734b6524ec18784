pub mod commission;
pub mod core;
