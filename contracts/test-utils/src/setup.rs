//! Test setup helpers and SaleSetup struct.
//!
//! Provides a pre-wired sale environment: payment and sale assets, an
//! initialized sale contract, and the operator/beneficiary roles, with the
//! ledger clock positioned before the contribution window.

use soroban_sdk::{testutils::Address as _, testutils::Ledger, token, Address, Env};
use token_sale::TokenSaleContractClient;

use super::factories::{create_sale_contract, create_token_contract};

/// Ledger timestamp every setup starts at.
pub const BASE_TIME: u64 = 1_700_000_000;
/// Seconds between setup and the opening of the contribution window.
pub const OPENING_LEAD: u64 = 86_400;
/// Length of the contribution window in seconds.
pub const WINDOW: u64 = 14 * 86_400;

/// Pre-wired sale test environment.
///
/// Contains everything a sale test needs:
/// - Environment with mocked auths, clock at [`BASE_TIME`]
/// - Operator and beneficiary addresses
/// - Payment asset ("native") client and admin client
/// - Sale asset client, pre-minted to the sale contract
/// - Initialized sale contract client and address
///
/// # Example
/// ```rust,no_run
/// # use test_utils::setup::SaleSetup;
/// let setup = SaleSetup::new(10_000, 10_000_000_000);
/// let buyer = setup.participant(1_000);
/// setup.open_sale();
/// setup.sale.contribute(&buyer, &500);
/// ```
pub struct SaleSetup<'a> {
    pub env: Env,
    pub operator: Address,
    pub beneficiary: Address,
    pub native: token::Client<'a>,
    pub native_admin: token::StellarAssetClient<'a>,
    pub sale_token: token::Client<'a>,
    pub sale_token_admin: token::StellarAssetClient<'a>,
    pub sale: TokenSaleContractClient<'a>,
    pub sale_address: Address,
    pub opening_time: u64,
    pub closing_time: u64,
}

impl SaleSetup<'_> {
    /// Creates a sale with the given rate and reserved supply, funded and
    /// initialized, with the clock still before the opening time.
    pub fn new(rate: i128, supply_units: i128) -> Self {
        Self::with_extension(rate, supply_units, None)
    }

    /// Same as [`SaleSetup::new`] but with an extended closing time.
    pub fn with_extension(
        rate: i128,
        supply_units: i128,
        extended_closing_time: Option<u64>,
    ) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(BASE_TIME);

        let operator = Address::generate(&env);
        let beneficiary = Address::generate(&env);

        let (native_address, native, native_admin) = create_token_contract(&env, &operator);
        let (sale_token_address, sale_token, sale_token_admin) =
            create_token_contract(&env, &operator);
        let (sale, sale_address) = create_sale_contract(&env);

        let opening_time = BASE_TIME + OPENING_LEAD;
        let closing_time = opening_time + WINDOW;

        sale.init(
            &operator,
            &native_address,
            &sale_token_address,
            &rate,
            &supply_units,
            &opening_time,
            &closing_time,
            &extended_closing_time,
        );

        // Fund the sale with the supply it is allowed to distribute
        sale_token_admin.mint(&sale_address, &supply_units);

        Self {
            env,
            operator,
            beneficiary,
            native,
            native_admin,
            sale_token,
            sale_token_admin,
            sale,
            sale_address,
            opening_time,
            closing_time,
        }
    }

    /// Generates a fresh address, admits it, and funds it with
    /// `native_balance` of the payment asset.
    pub fn participant(&self, native_balance: i128) -> Address {
        let who = Address::generate(&self.env);
        self.sale.admit(&self.operator, &who);
        if native_balance > 0 {
            self.native_admin.mint(&who, &native_balance);
        }
        who
    }

    /// Moves the ledger clock to the opening time.
    pub fn open_sale(&self) {
        self.env.ledger().set_timestamp(self.opening_time);
    }

    /// Moves the ledger clock to the closing time.
    pub fn close_sale(&self) {
        self.env.ledger().set_timestamp(self.closing_time);
    }
}
