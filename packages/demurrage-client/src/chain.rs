use async_trait::async_trait;
use cosmwasm_std::{Coin, Uint64};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat fee attached to a broadcast transaction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: Uint64,
}

impl Fee {
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self {
            amount,
            gas: Uint64::new(gas),
        }
    }
}

/// Fees used by a token binding. Only `exec` is consulted: every execute call pays it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Fees {
    pub exec: Fee,
}

/// Outcome of a broadcast transaction, as reported by the chain client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct TxResult {
    pub transaction_hash: String,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub gas_wanted: u64,
    #[serde(default)]
    pub gas_used: u64,
}

/// An already connected, signing-capable client of the chain hosting the token.
///
/// Transport, signing, broadcasting and confirmation all live behind this trait. Messages arrive
/// fully shaped as JSON; the implementation forwards them as-is.
#[async_trait]
pub trait ChainClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs a read-only smart query against `contract_address` and returns the decoded JSON.
    async fn query_smart(
        &self,
        contract_address: &str,
        query_msg: &Value,
    ) -> Result<Value, Self::Error>;

    /// Signs `execute_msg` as `sender_address`, broadcasts it to `contract_address` paying `fee`
    /// and waits for the result.
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        execute_msg: &Value,
        fee: &Fee,
    ) -> Result<TxResult, Self::Error>;
}
