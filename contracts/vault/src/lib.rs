#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

pub use contract::{VaultContract, VaultContractClient};
pub use errors::ContractErrors;

pub(crate) const DAY_LEDGER: u32 = 17280;
