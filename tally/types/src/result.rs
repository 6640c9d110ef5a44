use {
    crate::{CheckTxError, CheckTxOutcome, CheckTxSuccess, TxError, TxOutcome, TxSuccess},
    std::fmt::{Debug, Display},
};

/// Result of which the error is a string.
///
/// The chain reports the outcome of executing a transaction as a raw log
/// string, so by the time a result reaches the client, whatever error type it
/// started out as has been stringified.
pub type GenericResult<T> = Result<T, String>;

/// Describes a result of which the error can be stringified into a
/// [`GenericResult`](crate::GenericResult).
pub trait GenericResultExt<T> {
    fn into_generic_result(self) -> GenericResult<T>;
}

impl<T, E> GenericResultExt<T> for Result<T, E>
where
    E: ToString,
{
    fn into_generic_result(self) -> GenericResult<T> {
        self.map_err(|err| err.to_string())
    }
}

/// Addition methods for result types.
/// Useful for testing, improving code readability.
pub trait ResultExt: Sized {
    type Success;
    type Error;

    /// Ensure the result is ok; return the value.
    fn should_succeed(self) -> Self::Success;

    /// Ensure the result is ok, and matches the expect value.
    fn should_succeed_and_equal<U>(self, expect: U) -> Self::Success
    where
        Self::Success: Debug + PartialEq<U>,
        U: Debug,
    {
        let success = self.should_succeed();
        assert_eq!(
            success, expect,
            "success as expected, but with different value! expecting: {expect:?}, got: {success:?}"
        );
        success
    }

    /// Ensure the result is error; return the error message;
    fn should_fail(self) -> Self::Error;

    /// Ensure the result is error, and matches the specified error.
    ///
    /// We consider the errors match, if the error message contains the expect
    /// value as a substring.
    fn should_fail_with_error<U>(self, expect: U) -> Self::Error
    where
        Self::Error: Display,
        U: Display,
    {
        let error = self.should_fail();
        assert!(
            error.to_string().contains(&expect.to_string()),
            "fail as expected, but with wrong error! expecting: {expect}, got: {error}"
        );
        error
    }
}

impl<T, E> ResultExt for Result<T, E>
where
    T: Debug,
    E: Display,
{
    type Error = E;
    type Success = T;

    fn should_succeed(self) -> Self::Success {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => panic!("expecting ok, got error: {err}"),
        }
    }

    fn should_fail(self) -> Self::Error {
        match self {
            Self::Err(err) => err,
            Self::Ok(value) => panic!("expecting error, got ok: {value:?}"),
        }
    }
}

impl ResultExt for TxOutcome {
    type Error = TxError;
    type Success = TxSuccess;

    fn should_succeed(self) -> TxSuccess {
        match self.result {
            Ok(_) => TxSuccess {
                gas_limit: self.gas_limit,
                gas_used: self.gas_used,
            },
            Err(err) => panic!("expecting success, got error: {err}"),
        }
    }

    fn should_fail(self) -> TxError {
        match self.result {
            Err(error) => TxError {
                gas_limit: self.gas_limit,
                gas_used: self.gas_used,
                error,
            },
            Ok(_) => panic!("expecting error, got success"),
        }
    }
}

impl ResultExt for CheckTxOutcome {
    type Error = CheckTxError;
    type Success = CheckTxSuccess;

    fn should_succeed(self) -> Self::Success {
        match self.result {
            Ok(_) => CheckTxSuccess {
                gas_limit: self.gas_limit,
                gas_used: self.gas_used,
            },
            Err(err) => panic!("expecting success, got error: {err}"),
        }
    }

    fn should_fail(self) -> Self::Error {
        match self.result {
            Err(error) => CheckTxError {
                gas_limit: self.gas_limit,
                gas_used: self.gas_used,
                error,
            },
            Ok(_) => panic!("expecting error, got success"),
        }
    }
}
