use {
    crate::{StdError, StdResult},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        marker::PhantomData,
        str::FromStr,
    },
};

/// Describes a type that wraps another type.
pub trait Inner {
    type U;

    /// Returns an immutable reference to the inner value.
    fn inner(&self) -> &Self::U;

    /// Consume the wrapper, return an owned instance of the inner value.
    fn into_inner(self) -> Self::U;
}

// ------------------------------- generic type --------------------------------

/// A wrapper over a primitive integer, serialized as a string.
///
/// JSON supports integer numbers in the range of [-(2^53)+1, (2^53)-1].
/// Numbers beyond this range (uint64, uint128...) need to serialize as strings.
/// https://stackoverflow.com/questions/13502398/json-integers-limit-on-size#comment80159722_13502497
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int<U>(pub U);

impl<U> Int<U> {
    pub const fn new(value: U) -> Self {
        Self(value)
    }
}

impl<U> Inner for Int<U> {
    type U = U;

    fn inner(&self) -> &Self::U {
        &self.0
    }

    fn into_inner(self) -> Self::U {
        self.0
    }
}

impl<U> FromStr for Int<U>
where
    U: FromStr,
    <U as FromStr>::Err: ToString,
{
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        U::from_str(s)
            .map(Self)
            .map_err(|err| StdError::parse_number::<Self, _, _>(s, err))
    }
}

impl<U> fmt::Display for Int<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<U> ser::Serialize for Int<U>
where
    Int<U>: Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, U> de::Deserialize<'de> for Int<U>
where
    Int<U>: FromStr,
    <Int<U> as FromStr>::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(IntVisitor::<U>::new())
    }
}

struct IntVisitor<U> {
    _marker: PhantomData<U>,
}

impl<U> IntVisitor<U> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<U> de::Visitor<'_> for IntVisitor<U>
where
    Int<U>: FromStr,
    <Int<U> as FromStr>::Err: Display,
{
    type Value = Int<U>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a string-encoded unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Int::<U>::from_str(v).map_err(E::custom)
    }
}

// ------------------------------ concrete types -------------------------------

/// 64-bit unsigned integer.
pub type Uint64 = Int<u64>;

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{JsonDeExt, JsonSerExt, Uint64},
        std::str::FromStr,
    };

    #[test]
    fn serializing_as_string() {
        let number = Uint64::new(12345);
        assert_eq!(number.to_json_string().unwrap(), "\"12345\"");
        assert_eq!(
            "\"12345\"".deserialize_json::<Uint64>().unwrap(),
            number
        );
    }

    #[test]
    fn rejecting_bare_numbers() {
        // The wire format is a string, so a bare JSON number must not parse.
        "12345".deserialize_json::<Uint64>().unwrap_err();
    }

    #[test]
    fn parsing_garbage() {
        Uint64::from_str("not-a-number").unwrap_err();
        Uint64::from_str("-1").unwrap_err();
    }
}
