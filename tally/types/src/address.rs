use crate::{AddrEncoder, EncodedBytes};

/// An account or contract address.
///
/// Addresses are of 20-byte length, in lowercase hex encoding with the `0x`
/// prefix.
///
/// Addresses are validated during deserialization. If deserialization doesn't
/// throw an error, you can be sure the address is valid. Therefore it is safe
/// to use `Addr`s in JSON messages.
pub type Addr = EncodedBytes<[u8; 20], AddrEncoder>;

impl Addr {
    pub const LENGTH: usize = 20;

    /// Create a new address from a 20-byte array.
    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self::from_inner(array)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self::from_inner(bytes)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::Addr,
        hex_literal::hex,
        std::str::FromStr,
        test_case::test_case,
    };

    #[test_case(
        "0x299663875422cc5a4574816e6165824d0c5bfdba",
        Some(hex!("299663875422cc5a4574816e6165824d0c5bfdba"));
        "valid address"
    )]
    #[test_case(
        "299663875422cc5a4574816e6165824d0c5bfdba",
        None;
        "missing prefix"
    )]
    #[test_case(
        "0x299663875422cc5a4574816e6165824d0c5bfd",
        None;
        "wrong length"
    )]
    #[test_case(
        "0x299663875422cc5a4574816e6165824d0c5bfdzz",
        None;
        "not hex"
    )]
    fn parsing_address(input: &str, expect: Option<[u8; 20]>) {
        match (Addr::from_str(input), expect) {
            (Ok(addr), Some(raw)) => {
                assert_eq!(addr, Addr::from_array(raw));
                assert_eq!(addr.to_string(), input);
            },
            (Err(_), None) => {},
            _ => panic!("unexpected parse outcome for `{input}`"),
        }
    }
}
