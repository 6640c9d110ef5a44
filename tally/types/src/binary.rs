use crate::{Base64Encoder, EncodedBytes, Inner, StdResult};

/// Binary data of arbitrary length, serialized in its base64 encoding.
pub type Binary = EncodedBytes<Vec<u8>, Base64Encoder>;

/// Binary data of a fixed length, serialized in its base64 encoding.
pub type ByteArray<const N: usize> = EncodedBytes<[u8; N], Base64Encoder>;

impl Binary {
    /// Interpret the bytes as a UTF-8 string.
    ///
    /// Contracts store human readable texts, such as poll descriptions, as
    /// raw bytes on the wire. This undoes that encoding.
    pub fn into_string(self) -> StdResult<String> {
        String::from_utf8(self.into_inner()).map_err(Into::into)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{Binary, ByteArray, JsonDeExt, JsonSerExt},
        proptest::prelude::*,
    };

    #[test]
    fn binary() {
        let binary = Binary::from(vec![1, 2, 3]);
        let se = binary.to_json_string().unwrap();
        let de: Binary = se.deserialize_json().unwrap();
        assert_eq!(binary, de);
    }

    #[test]
    fn byte_array() {
        let fixed = ByteArray::from([1, 2, 3]);

        let se = fixed.to_json_string().unwrap();
        let de: ByteArray<3> = se.deserialize_json().unwrap();

        assert_eq!(fixed, de);

        // not working cause the array length is different
        serde_json::from_str::<ByteArray<4>>(&se).unwrap_err();
    }

    #[test]
    fn decoding_invalid_utf8() {
        // 0xff can't appear in UTF-8.
        Binary::from(vec![0xff, 0xfe, 0xfd]).into_string().unwrap_err();
    }

    proptest! {
        /// Any byte sequence must survive the base64 wire encoding unchanged.
        #[test]
        fn encoding_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let binary = Binary::from(bytes);
            let se = binary.to_json_string().unwrap();
            let de: Binary = se.deserialize_json().unwrap();
            prop_assert_eq!(binary, de);
        }

        /// Any text must survive being stored as raw bytes and read back.
        #[test]
        fn text_round_trip(text in ".{0,64}") {
            let binary = Binary::from(text.as_str());
            prop_assert_eq!(binary.into_string().unwrap(), text);
        }
    }
}
