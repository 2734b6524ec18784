pub mod balances;
pub mod core;
