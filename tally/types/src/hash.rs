use crate::{EncodedBytes, HashEncoder};

/// A hash of a fixed length, in uppercase hex encoding.
pub type Hash<const N: usize> = EncodedBytes<[u8; N], HashEncoder>;

/// A 32-byte hash, used for transaction hashes and code hashes.
pub type Hash256 = Hash<32>;

impl<const N: usize> Hash<N> {
    pub const LENGTH: usize = N;

    /// The zero hash. Useful as a placeholder in tests.
    pub const ZERO: Self = Self::from_inner([0; N]);

    pub const fn from_array(array: [u8; N]) -> Self {
        Self::from_inner(array)
    }
}
