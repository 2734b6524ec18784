use soroban_sdk::{Address, contracttype, Env};

use crate::DAY_LEDGER;

#[contracttype]
pub enum BalanceDataKeys {
    Balance(Address),
}

pub struct Balances {
    env: Env,
}

impl Balances {
    pub fn new(e: &Env) -> Balances {
        Balances { env: e.clone() }
    }

    /// Amount owed to `account`, zero when nothing was ever recorded.
    pub fn balance(&self, account: &Address) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&BalanceDataKeys::Balance(account.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(&self, account: &Address, amount: &u128) {
        self.env
            .storage()
            .persistent()
            .set(&BalanceDataKeys::Balance(account.clone()), amount);
    }

    pub fn remove_balance(&self, account: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&BalanceDataKeys::Balance(account.clone()));
    }

    pub fn bump_balance(&self, account: &Address) {
        self.env.storage().persistent().extend_ttl(
            &BalanceDataKeys::Balance(account.clone()),
            DAY_LEDGER * 15,
            DAY_LEDGER * 30,
        );
    }
}

pub trait BalancesDataFunc {
    fn _balances(&self) -> Balances;
}

impl BalancesDataFunc for Env {
    fn _balances(&self) -> Balances {
        Balances::new(self)
    }
}
