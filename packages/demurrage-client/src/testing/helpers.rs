use std::sync::Mutex;

use async_trait::async_trait;
use cosmwasm_std::coins;
use serde_json::Value;
use thiserror::Error;

use crate::chain::{ChainClient, Fee, Fees, TxResult};

pub(super) const TOKEN: &str = "terra1demurragetoken";
pub(super) const SENDER: &str = "terra1sender";

#[derive(Error, Debug, Clone, PartialEq)]
#[error("mock chain: {0}")]
pub(super) struct MockError(pub String);

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Call {
    Query {
        contract: String,
        msg: Value,
    },
    Execute {
        sender: String,
        contract: String,
        msg: Value,
        fee: Fee,
    },
}

/// Records every call and answers with canned responses.
pub(super) struct MockChain {
    calls: Mutex<Vec<Call>>,
    query_response: Value,
    tx_result: TxResult,
    failure: Option<String>,
}

impl MockChain {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            calls: Mutex::new(vec![]),
            query_response: Value::Null,
            tx_result: TxResult {
                transaction_hash: "ABC123".to_string(),
                height: 12345,
                gas_wanted: 200_000,
                gas_used: 123_456,
            },
            failure: None,
        }
    }

    pub fn returning(query_response: Value) -> Self {
        Self {
            query_response,
            ..Self::new()
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Asserts exactly one call was made and returns it.
    pub fn single_call(&self) -> Call {
        let mut calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.remove(0)
    }

    fn record(&self, call: Call) -> Result<(), MockError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(reason) => Err(MockError(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChainClient for MockChain {
    type Error = MockError;

    async fn query_smart(
        &self,
        contract_address: &str,
        query_msg: &Value,
    ) -> Result<Value, Self::Error> {
        self.record(Call::Query {
            contract: contract_address.to_string(),
            msg: query_msg.clone(),
        })?;
        Ok(self.query_response.clone())
    }

    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        execute_msg: &Value,
        fee: &Fee,
    ) -> Result<TxResult, Self::Error> {
        self.record(Call::Execute {
            sender: sender_address.to_string(),
            contract: contract_address.to_string(),
            msg: execute_msg.clone(),
            fee: fee.clone(),
        })?;
        Ok(self.tx_result.clone())
    }
}

pub(super) fn mock_fees() -> Fees {
    Fees {
        exec: Fee::new(coins(5000, "uluna"), 200_000),
    }
}

pub(super) fn query_call(msg: Value) -> Call {
    Call::Query {
        contract: TOKEN.to_string(),
        msg,
    }
}

pub(super) fn execute_call(msg: Value) -> Call {
    Call::Execute {
        sender: SENDER.to_string(),
        contract: TOKEN.to_string(),
        msg,
        fee: mock_fees().exec,
    }
}
