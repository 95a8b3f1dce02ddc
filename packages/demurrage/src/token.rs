use cosmwasm_std::{Binary, Uint128};
use cw20::Expiration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use cw20::{
    AllAccountsResponse, AllAllowancesResponse, AllowanceInfo, AllowanceResponse, BalanceResponse,
    MinterResponse, TokenInfoResponse,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Only with the "mintable" extension. Creates `amount` new tokens and adds them to
    /// `recipient`'s balance
    Mint {
        recipient: String,
        amount: Uint128,
    },
    /// Move `amount` tokens from the sender to `recipient`
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    /// Destroy `amount` of the sender's tokens, reducing total supply
    Burn {
        amount: Uint128,
    },
    /// Allow `spender` to move an additional `amount` of the sender's tokens
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expires: Option<Expiration>,
    },
    /// Lower `spender`'s allowance by `amount`
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expires: Option<Expiration>,
    },
    /// Move `amount` tokens from `owner` to `recipient`, consuming allowance granted to the sender
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Move `amount` tokens to `recipient` and trigger its receive hook with `msg`
    Send {
        recipient: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Same as `Send`, consuming allowance granted by `owner`
    SendFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Destroy `amount` of `owner`'s tokens, consuming allowance granted to the sender
    BurnFrom {
        owner: String,
        amount: Uint128,
    },
    /// Hand the minter role over to `new_minter`
    UpdateMinter {
        new_minter: String,
    },
    /// Redirect future demurrage tax to `address`
    ChangeSinkAddress {
        address: String,
    },
    /// Set the tax level applied on each demurrage period
    ChangeTaxLevel {
        amount: Uint128,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns the current balance of the given address, 0 if unset.
    /// Return type: `BalanceResponse`
    Balance {
        address: String,
    },
    /// Return type: `AllowanceResponse`
    Allowance {
        owner: String,
        spender: String,
    },
    /// Return type: `AllAllowancesResponse`
    AllAllowances {
        owner: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    /// Return type: `AllAccountsResponse`
    AllAccounts {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    /// Return type: `TokenInfoResponse`
    TokenInfo {},
    /// Return type: `Option<MinterResponse>`
    Minter {},
    /// Return type: `DemurrageAmountResponse`
    DemurrageAmount {},
    /// Return type: `TaxLevelResponse`
    TaxLevel {},
    /// Return type: `SinkAddressResponse`
    SinkAccount {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
pub struct DemurrageAmountResponse {
    pub demurrage_amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
pub struct SinkAddressResponse {
    pub sink_address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
pub struct TaxLevelResponse {
    pub tax_level: Uint128,
}
