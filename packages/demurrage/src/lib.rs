pub mod token;

mod extensions {
    use cosmwasm_std::{Binary, StdError, StdResult};
    use serde::Serialize;

    /// Encodes a callback payload the way the token expects it in the `msg` field of `send` and
    /// `send_from`: JSON text, as UTF-8 bytes, base64 encoded.
    ///
    /// `Binary` serializes as a standard padded base64 string, so embedding the returned value in
    /// an outer message produces the double encoding directly.
    pub fn encode_callback<T: Serialize + ?Sized>(payload: &T) -> StdResult<Binary> {
        serde_json::to_vec(payload)
            .map(Binary::from)
            .map_err(|err| StdError::serialize_err(std::any::type_name::<T>(), err))
    }
}

pub use extensions::encode_callback;
