//! Contract factory functions for creating test contracts.
//!
//! These functions simplify the creation of the sale contract and the two
//! asset contracts it works against.

use soroban_sdk::{token, Address, Env};
use token_sale::{TokenSaleContract, TokenSaleContractClient};

/// Creates a Stellar asset contract for testing.
///
/// # Arguments
/// * `env` - The contract environment
/// * `admin` - The admin address for the asset
///
/// # Returns
/// A tuple containing:
/// - Token address
/// - Token client
/// - Token admin client
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::{testutils::Address as _, Address, Env};
/// # use test_utils::factories::create_token_contract;
/// # let env = Env::default();
/// # let admin = Address::generate(&env);
/// let (token_address, token_client, token_admin) = create_token_contract(&env, &admin);
/// ```
pub fn create_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (Address, token::Client<'a>, token::StellarAssetClient<'a>) {
    let stellar_asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token_address = stellar_asset.address();
    let token_client = token::Client::new(env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(env, &token_address);
    (token_address, token_client, token_admin_client)
}

/// Creates an uninitialized sale contract for testing.
///
/// # Arguments
/// * `env` - The contract environment
///
/// # Returns
/// A tuple containing:
/// - Sale contract client
/// - Sale contract address
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::Env;
/// # use test_utils::factories::create_sale_contract;
/// # let env = Env::default();
/// let (sale_client, sale_address) = create_sale_contract(&env);
/// ```
pub fn create_sale_contract<'a>(env: &Env) -> (TokenSaleContractClient<'a>, Address) {
    let contract_id = env.register_contract(None, TokenSaleContract);
    let client = TokenSaleContractClient::new(env, &contract_id);
    (client, contract_id)
}
