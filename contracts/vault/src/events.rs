use soroban_sdk::{Address, Env, symbol_short};

pub fn init(e: &Env, owner: &Address, paying_asset: &Address, owner_income_percentage: u32) {
    e.events().publish(
        (symbol_short!("init"), owner.clone()),
        (paying_asset.clone(), owner_income_percentage),
    );
}

pub fn deposit(e: &Env, caller: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("deposit"), caller.clone()), amount);
}

// Data is (payout, commission)
pub fn withdraw(e: &Env, caller: &Address, payout: u128, commission: u128) {
    e.events()
        .publish((symbol_short!("withdraw"), caller.clone()), (payout, commission));
}

pub fn owner_income(e: &Env, owner: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("income"), owner.clone()), amount);
}
