
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, Address, Env};

use crate::contract::{VaultContract, VaultContractClient};

pub const TEST_AMOUNT: u128 = 5_000_000_000_000_000_000;

pub struct TestData<'a> {
    pub e: Env,
    pub owner: Address,
    pub user: Address,
    pub vault: VaultContractClient<'a>,
    pub asset: token::Client<'a>,
    pub asset_admin: token::StellarAssetClient<'a>,
}

/// Vault initiated over a fresh Stellar asset, owner and user funded with
/// `TEST_AMOUNT` each.
pub fn create_test_data<'a>(owner_income_percentage: u32) -> TestData<'a> {
    let e: Env = Env::default();
    e.mock_all_auths();

    let owner: Address = Address::generate(&e);
    let user: Address = Address::generate(&e);

    let issuer: Address = Address::generate(&e);
    let sac = e.register_stellar_asset_contract_v2(issuer);
    let asset = token::Client::new(&e, &sac.address());
    let asset_admin = token::StellarAssetClient::new(&e, &sac.address());

    asset_admin.mint(&owner, &(TEST_AMOUNT as i128));
    asset_admin.mint(&user, &(TEST_AMOUNT as i128));

    let vault_id: Address = e.register(VaultContract, ());
    let vault = VaultContractClient::new(&e, &vault_id);
    vault.init(&owner, &sac.address(), &owner_income_percentage);

    TestData {
        e,
        owner,
        user,
        vault,
        asset,
        asset_admin,
    }
}

pub fn vault_holdings(test_data: &TestData) -> u128 {
    test_data.asset.balance(&test_data.vault.address) as u128
}
