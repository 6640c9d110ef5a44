use {
    crate::{Json, StdError, StdResult},
    serde::{de::DeserializeOwned, ser::Serialize},
};

/// Represents a Rust value that can be serialized into JSON.
pub trait JsonSerExt: Sized {
    /// Serialize the Rust value into JSON bytes.
    fn to_json_vec(&self) -> StdResult<Vec<u8>>;

    /// Serialize the Rust value into JSON string.
    fn to_json_string(&self) -> StdResult<String>;

    /// Serialize the Rust value into pretty JSON string.
    fn to_json_string_pretty(&self) -> StdResult<String>;

    /// Serialize the Rust value into JSON value.
    fn to_json_value(&self) -> StdResult<Json>;
}

impl<T> JsonSerExt for T
where
    T: Serialize,
{
    fn to_json_vec(&self) -> StdResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }

    fn to_json_string(&self) -> StdResult<String> {
        serde_json::to_string(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }

    fn to_json_string_pretty(&self) -> StdResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }

    fn to_json_value(&self) -> StdResult<Json> {
        serde_json::to_value(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }
}

/// Represents raw JSON data that can be deserialized into a Rust value.
pub trait JsonDeExt {
    /// Deserialize the raw data into a Rust value.
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned;
}

impl<T> JsonDeExt for &T
where
    T: AsRef<[u8]>,
{
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned,
    {
        serde_json::from_slice(self.as_ref())
            .map_err(|err| StdError::deserialize::<D, _>("json", err))
    }
}

impl JsonDeExt for Json {
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned,
    {
        serde_json::from_value(self).map_err(|err| StdError::deserialize::<D, _>("json", err))
    }
}
