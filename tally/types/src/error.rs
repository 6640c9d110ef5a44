use {
    crate::GasEstimateError,
    data_encoding::{BASE64, DecodeError},
    std::{any::type_name, array::TryFromSliceError, string::FromUtf8Error},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum StdError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    FromUtf8(#[from] FromUtf8Error),

    #[error(transparent)]
    TryFromSlice(#[from] TryFromSliceError),

    #[error(transparent)]
    GasEstimate(#[from] GasEstimateError),

    #[error("data not found! type: {ty}, storage key: {key}")]
    DataNotFound { ty: &'static str, key: String },

    /// An error reported by the host chain, of which only the stringified
    /// form survives the trip over the wire.
    #[error("host returned error: {0}")]
    Host(String),

    #[error("expecting a non-empty value of type {ty}, got empty")]
    EmptyValue { ty: &'static str },

    #[error("failed to parse string `{value}` into {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to serialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Serialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("failed to deserialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },
}

impl StdError {
    pub fn data_not_found<T>(key: &[u8]) -> Self {
        Self::DataNotFound {
            ty: type_name::<T>(),
            key: BASE64.encode(key),
        }
    }

    pub fn empty_value<T>() -> Self {
        Self::EmptyValue {
            ty: type_name::<T>(),
        }
    }

    pub fn host<E>(error: E) -> Self
    where
        E: ToString,
    {
        Self::Host(error.to_string())
    }

    pub fn parse_number<T, V, R>(value: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn serialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Serialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = Result<T, StdError>;
