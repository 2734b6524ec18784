use soroban_sdk::{Address, Env, panic_with_error};

use crate::errors::ContractErrors;
use crate::storage::core::{CoreData, CoreDataFunc};

pub fn is_started(e: &Env) {
    if e._core().data().is_none() {
        panic_with_error!(&e, &ContractErrors::NotInitiated);
    }
}

pub fn get_core_data(e: &Env) -> CoreData {
    e._core().data().unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotInitiated);
    })
}

pub fn is_owner(e: &Env, core_data: &CoreData, caller: &Address) {
    if &core_data.owner != caller {
        panic_with_error!(&e, &ContractErrors::NotOwner);
    }
}
