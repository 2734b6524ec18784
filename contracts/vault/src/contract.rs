use soroban_sdk::{Address, contract, contractimpl, Env, panic_with_error, token};

use crate::errors::ContractErrors;
use crate::events;
use crate::storage::balances::BalancesDataFunc;
use crate::storage::core::{CoreData, CoreDataFunc};
use crate::utils::commission::split_withdrawal;
use crate::utils::core::{get_core_data, is_owner, is_started};

pub trait VaultContractTrait {
    fn init(e: Env, owner: Address, paying_asset: Address, owner_income_percentage: u32);

    fn deposit(e: &Env, caller: Address, amount: u128);

    fn withdraw(e: &Env, caller: Address) -> u128;

    fn withdraw_owner_income(e: &Env, caller: Address) -> u128;

    fn balance(e: &Env, account: Address) -> u128;

    fn owner(e: &Env) -> Address;

    fn owner_income_percentage(e: &Env) -> u32;

    fn owner_income(e: &Env) -> u128;

    fn paying_asset(e: &Env) -> Address;
}

#[contract]
pub struct VaultContract;

#[contractimpl]
impl VaultContractTrait for VaultContract {
    fn init(e: Env, owner: Address, paying_asset: Address, owner_income_percentage: u32) {
        owner.require_auth();

        if e._core().data().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitiated);
        }

        if owner_income_percentage > 100 {
            panic_with_error!(&e, &ContractErrors::InvalidPercentage);
        }

        e._core().set_data(&CoreData {
            owner: owner.clone(),
            paying_asset: paying_asset.clone(),
            owner_income_percentage,
        });
        e._core().set_owner_income(&0);
        e._core().bump();

        events::init(&e, &owner, &paying_asset, owner_income_percentage);
    }

    fn deposit(e: &Env, caller: Address, amount: u128) {
        caller.require_auth();
        let core_data: CoreData = get_core_data(&e);
        e._core().bump();

        // The token amount domain is i128, anything above it can't be pulled
        let token_amount: i128 = match i128::try_from(amount) {
            Ok(value) if value > 0 => value,
            _ => panic_with_error!(&e, &ContractErrors::InvalidAmount),
        };

        let asset = token::Client::new(&e, &core_data.paying_asset);
        let deposit_result =
            asset.try_transfer(&caller, &e.current_contract_address(), &token_amount);

        if deposit_result.is_err() {
            panic_with_error!(&e, &ContractErrors::FailedToDeposit);
        }

        let balance: u128 = e._balances().balance(&caller) + amount;
        e._balances().set_balance(&caller, &balance);
        e._balances().bump_balance(&caller);

        events::deposit(&e, &caller, amount);
    }

    fn withdraw(e: &Env, caller: Address) -> u128 {
        caller.require_auth();
        let core_data: CoreData = get_core_data(&e);
        e._core().bump();

        let balance: u128 = e._balances().balance(&caller);
        if balance == 0 {
            panic_with_error!(&e, &ContractErrors::NoBalance);
        }

        let (payout, commission): (u128, u128) = if caller == core_data.owner {
            (balance, 0)
        } else {
            split_withdrawal(balance, core_data.owner_income_percentage)
        };

        // Every write happens before the token call
        e._balances().remove_balance(&caller);
        if commission > 0 {
            let owner_income: u128 = e._core().owner_income() + commission;
            e._core().set_owner_income(&owner_income);
        }

        // Zero only at a 100% commission, nothing to send
        if payout > 0 {
            let asset = token::Client::new(&e, &core_data.paying_asset);
            let withdraw_result =
                asset.try_transfer(&e.current_contract_address(), &caller, &(payout as i128));

            if withdraw_result.is_err() {
                panic_with_error!(&e, &ContractErrors::TransferFailed);
            }
        }

        events::withdraw(&e, &caller, payout, commission);

        payout
    }

    fn withdraw_owner_income(e: &Env, caller: Address) -> u128 {
        caller.require_auth();
        let core_data: CoreData = get_core_data(&e);
        e._core().bump();

        is_owner(&e, &core_data, &caller);

        let income: u128 = e._core().owner_income();
        if income == 0 {
            panic_with_error!(&e, &ContractErrors::NoIncome);
        }

        e._core().set_owner_income(&0);

        let asset = token::Client::new(&e, &core_data.paying_asset);
        let income_result =
            asset.try_transfer(&e.current_contract_address(), &caller, &(income as i128));

        if income_result.is_err() {
            panic_with_error!(&e, &ContractErrors::TransferFailed);
        }

        events::owner_income(&e, &caller, income);

        income
    }

    fn balance(e: &Env, account: Address) -> u128 {
        e._balances().balance(&account)
    }

    fn owner(e: &Env) -> Address {
        get_core_data(&e).owner
    }

    fn owner_income_percentage(e: &Env) -> u32 {
        get_core_data(&e).owner_income_percentage
    }

    fn owner_income(e: &Env) -> u128 {
        is_started(&e);
        e._core().owner_income()
    }

    fn paying_asset(e: &Env) -> Address {
        get_core_data(&e).paying_asset
    }
}
