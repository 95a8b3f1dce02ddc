use cosmwasm_std::Uint128;
use cw20::Expiration;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use demurrage::encode_callback;
use demurrage::token::{ExecuteMsg, QueryMsg};

use crate::chain::{ChainClient, Fee, Fees};
use crate::error::{ClientError, ClientResult};

/// Binds a chain client and a fee configuration; hands out token handles per contract address.
pub struct Cw20Demurrage<'a, C> {
    client: &'a C,
    fees: Fees,
}

impl<'a, C: ChainClient> Cw20Demurrage<'a, C> {
    pub fn new(client: &'a C, fees: Fees) -> Self {
        Self {
            client,
            fees,
        }
    }

    /// Returns a handle for the token deployed at `contract_address`.
    pub fn bind(&self, contract_address: impl Into<String>) -> DemurrageToken<'_, C> {
        DemurrageToken {
            client: self.client,
            fee: &self.fees.exec,
            contract_address: contract_address.into(),
        }
    }

    pub fn fees(&self) -> &Fees {
        &self.fees
    }
}

/// A demurrage token at a fixed address. Every execute call pays the same fee.
pub struct DemurrageToken<'a, C> {
    client: &'a C,
    fee: &'a Fee,
    contract_address: String,
}

type QueryResult<T, C> = ClientResult<T, <C as ChainClient>::Error>;
type TxHashResult<C> = ClientResult<String, <C as ChainClient>::Error>;

impl<'a, C: ChainClient> DemurrageToken<'a, C> {
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn fee(&self) -> &Fee {
        self.fee
    }

    /// Runs `msg` as a smart query and returns the response as the chain client decoded it.
    pub async fn query_raw(&self, msg: &QueryMsg) -> QueryResult<Value, C> {
        let msg = serde_json::to_value(msg)?;
        debug!("querying `{}` on {}", tag(&msg), self.contract_address);

        self.client.query_smart(&self.contract_address, &msg).await.map_err(ClientError::Chain)
    }

    /// Same as [`Self::query_raw`], decoding the response into `T`.
    pub async fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> QueryResult<T, C> {
        let res = self.query_raw(msg).await?;
        Ok(serde_json::from_value(res)?)
    }

    /// Broadcasts `msg` signed by `sender` and returns the transaction hash.
    pub async fn execute(&self, sender: &str, msg: &ExecuteMsg) -> TxHashResult<C> {
        let msg = serde_json::to_value(msg)?;
        debug!("executing `{}` on {} as {}", tag(&msg), self.contract_address, sender);

        let res = self
            .client
            .execute(sender, &self.contract_address, &msg, self.fee)
            .await
            .map_err(ClientError::Chain)?;

        debug!("`{}` broadcast in tx {}", tag(&msg), res.transaction_hash);
        Ok(res.transaction_hash)
    }

    //----------------------------------------------------------------------------------------------
    // Queries
    //----------------------------------------------------------------------------------------------

    /// The `balance` field of the response, a numeric string.
    pub async fn balance(&self, address: impl Into<String>) -> QueryResult<Value, C> {
        let res = self
            .query_raw(&QueryMsg::Balance {
                address: address.into(),
            })
            .await?;
        Ok(take_field(res, "balance"))
    }

    pub async fn allowance(
        &self,
        owner: impl Into<String>,
        spender: impl Into<String>,
    ) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::Allowance {
            owner: owner.into(),
            spender: spender.into(),
        })
        .await
    }

    pub async fn all_allowances(
        &self,
        owner: impl Into<String>,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::AllAllowances {
            owner: owner.into(),
            start_after,
            limit,
        })
        .await
    }

    /// The `accounts` field of the response.
    pub async fn all_accounts(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> QueryResult<Value, C> {
        let res = self
            .query_raw(&QueryMsg::AllAccounts {
                start_after,
                limit,
            })
            .await?;
        Ok(take_field(res, "accounts"))
    }

    pub async fn token_info(&self) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::TokenInfo {}).await
    }

    /// `null` if the token has no minter.
    pub async fn minter(&self) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::Minter {}).await
    }

    pub async fn demurrage_amount(&self) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::DemurrageAmount {}).await
    }

    pub async fn tax_level(&self) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::TaxLevel {}).await
    }

    pub async fn sink_address(&self) -> QueryResult<Value, C> {
        self.query_raw(&QueryMsg::SinkAccount {}).await
    }

    //----------------------------------------------------------------------------------------------
    // Transactions
    //----------------------------------------------------------------------------------------------

    pub async fn mint(
        &self,
        sender: &str,
        recipient: impl Into<String>,
        amount: Uint128,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::Mint {
                recipient: recipient.into(),
                amount,
            },
        )
        .await
    }

    pub async fn transfer(
        &self,
        sender: &str,
        recipient: impl Into<String>,
        amount: Uint128,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::Transfer {
                recipient: recipient.into(),
                amount,
            },
        )
        .await
    }

    pub async fn burn(&self, sender: &str, amount: Uint128) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::Burn {
                amount,
            },
        )
        .await
    }

    pub async fn increase_allowance(
        &self,
        sender: &str,
        spender: impl Into<String>,
        amount: Uint128,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::IncreaseAllowance {
                spender: spender.into(),
                amount,
                expires: None,
            },
        )
        .await
    }

    /// Same as [`Self::increase_allowance`], with the allowance lapsing at `expires`.
    pub async fn increase_allowance_until(
        &self,
        sender: &str,
        spender: impl Into<String>,
        amount: Uint128,
        expires: Expiration,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::IncreaseAllowance {
                spender: spender.into(),
                amount,
                expires: Some(expires),
            },
        )
        .await
    }

    pub async fn decrease_allowance(
        &self,
        sender: &str,
        spender: impl Into<String>,
        amount: Uint128,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::DecreaseAllowance {
                spender: spender.into(),
                amount,
                expires: None,
            },
        )
        .await
    }

    pub async fn decrease_allowance_until(
        &self,
        sender: &str,
        spender: impl Into<String>,
        amount: Uint128,
        expires: Expiration,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::DecreaseAllowance {
                spender: spender.into(),
                amount,
                expires: Some(expires),
            },
        )
        .await
    }

    pub async fn transfer_from(
        &self,
        sender: &str,
        owner: impl Into<String>,
        recipient: impl Into<String>,
        amount: Uint128,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::TransferFrom {
                owner: owner.into(),
                recipient: recipient.into(),
                amount,
            },
        )
        .await
    }

    /// Sends `amount` to `recipient` along with `msg`, which the recipient contract receives as
    /// base64 encoded JSON.
    pub async fn send<M: Serialize + ?Sized>(
        &self,
        sender: &str,
        recipient: impl Into<String>,
        amount: Uint128,
        msg: &M,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::Send {
                recipient: recipient.into(),
                amount,
                msg: encode_callback(msg)?,
            },
        )
        .await
    }

    pub async fn send_from<M: Serialize + ?Sized>(
        &self,
        sender: &str,
        owner: impl Into<String>,
        recipient: impl Into<String>,
        amount: Uint128,
        msg: &M,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::SendFrom {
                owner: owner.into(),
                recipient: recipient.into(),
                amount,
                msg: encode_callback(msg)?,
            },
        )
        .await
    }

    pub async fn burn_from(
        &self,
        sender: &str,
        owner: impl Into<String>,
        amount: Uint128,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::BurnFrom {
                owner: owner.into(),
                amount,
            },
        )
        .await
    }

    pub async fn update_minter(
        &self,
        sender: &str,
        new_minter: impl Into<String>,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::UpdateMinter {
                new_minter: new_minter.into(),
            },
        )
        .await
    }

    pub async fn change_sink_address(
        &self,
        sender: &str,
        address: impl Into<String>,
    ) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::ChangeSinkAddress {
                address: address.into(),
            },
        )
        .await
    }

    pub async fn change_tax_level(&self, sender: &str, amount: Uint128) -> TxHashResult<C> {
        self.execute(
            sender,
            &ExecuteMsg::ChangeTaxLevel {
                amount,
            },
        )
        .await
    }
}

// Messages serialize as `{"<tag>": {...}}`
fn tag(msg: &Value) -> &str {
    msg.as_object().and_then(|obj| obj.keys().next()).map(String::as_str).unwrap_or_default()
}

// A field missing from the response comes back as `null`
fn take_field(mut res: Value, field: &str) -> Value {
    res.get_mut(field).map(Value::take).unwrap_or(Value::Null)
}
