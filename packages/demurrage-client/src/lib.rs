pub mod chain;
mod error;
pub mod token;

#[cfg(test)]
mod testing;

pub use crate::chain::{ChainClient, Fee, Fees, TxResult};
pub use crate::error::{ClientError, ClientResult};
pub use crate::token::{Cw20Demurrage, DemurrageToken};
