use cosmwasm_std::StdError;
use thiserror::Error;

pub type ClientResult<T, E> = Result<T, ClientError<E>>;

#[derive(Error, Debug)]
pub enum ClientError<E> {
    /// Raised by the chain client; passed through untouched.
    #[error("chain client error: {0}")]
    Chain(#[source] E),

    /// A `send` callback payload could not be encoded.
    #[error("{0}")]
    Std(#[from] StdError),

    /// An outgoing message could not be encoded, or a typed query response did not decode.
    #[error("malformed message: {0}")]
    Serde(#[from] serde_json::Error),
}

impl<E> ClientError<E> {
    /// Returns the chain client's own error, if that is where the failure came from.
    pub fn into_chain(self) -> Option<E> {
        match self {
            ClientError::Chain(err) => Some(err),
            _ => None,
        }
    }
}
