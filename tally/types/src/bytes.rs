use crate::{StdError, StdResult};

/// Describes a byte storage that can back an [`EncodedBytes`](crate::EncodedBytes):
/// either a vector of variable length, or an array of fixed length.
pub trait Bytes: Sized {
    fn as_bytes(&self) -> &[u8];

    fn try_from_vec(vec: Vec<u8>) -> StdResult<Self>;
}

impl Bytes for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn try_from_vec(vec: Vec<u8>) -> StdResult<Self> {
        Ok(vec)
    }
}

impl<const N: usize> Bytes for [u8; N] {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn try_from_vec(vec: Vec<u8>) -> StdResult<Self> {
        vec.as_slice().try_into().map_err(StdError::from)
    }
}
