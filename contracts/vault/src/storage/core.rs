use soroban_sdk::{Address, contracttype, Env};

use crate::DAY_LEDGER;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreData {
    // Exempt from commission and the only one allowed to collect it
    pub owner: Address,

    // Token contract whose units are custodied
    pub paying_asset: Address,

    // Percentage of every non-owner withdrawal kept as owner income, 0 to 100
    pub owner_income_percentage: u32,
}

#[contracttype]
pub enum CoreDataKeys {
    CoreData,
    OwnerIncome,
}

pub struct Core {
    env: Env,
}

impl Core {
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn data(&self) -> Option<CoreData> {
        self.env.storage().instance().get(&CoreDataKeys::CoreData)
    }

    pub fn set_data(&self, core_data: &CoreData) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::CoreData, core_data);
    }

    pub fn owner_income(&self) -> u128 {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::OwnerIncome)
            .unwrap_or(0)
    }

    pub fn set_owner_income(&self, amount: &u128) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::OwnerIncome, amount);
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(DAY_LEDGER, DAY_LEDGER * 15);
    }
}

pub trait CoreDataFunc {
    fn _core(&self) -> Core;
}

impl CoreDataFunc for Env {
    fn _core(&self) -> Core {
        Core::new(self)
    }
}
