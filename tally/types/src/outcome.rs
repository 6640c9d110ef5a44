use {
    crate::{GenericResult, Hash256},
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display},
};

/// Outcome of the mempool check a node performs on a transaction before
/// admitting it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[must_use = "`CheckTxOutcome` must be checked for success or error with `should_succeed`, `should_fail`, or similar methods."]
pub struct CheckTxOutcome {
    pub gas_limit: u64,
    pub gas_used: u64,
    pub result: GenericResult<()>,
}

/// The success case of [`CheckTxOutcome`](crate::CheckTxOutcome).
#[derive(Debug, PartialEq, Eq)]
pub struct CheckTxSuccess {
    pub gas_limit: u64,
    pub gas_used: u64,
}

/// The error case of [`CheckTxOutcome`](crate::CheckTxOutcome).
#[derive(Debug, PartialEq, Eq)]
pub struct CheckTxError {
    pub gas_limit: u64,
    pub gas_used: u64,
    pub error: String,
}

// `CheckTxError` must implement `ToString`, such that it satisfies that trait
// bound required by `ResultExt::should_fail_with_error`.
impl Display for CheckTxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}",)
    }
}

/// Outcome of executing a transaction, or of simulating one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[must_use = "`TxOutcome` must be checked for success or error with `should_succeed`, `should_fail`, or similar methods."]
pub struct TxOutcome {
    pub gas_limit: u64,
    pub gas_used: u64,
    pub result: GenericResult<()>,
}

/// The success case of [`TxOutcome`](crate::TxOutcome).
#[derive(Debug, PartialEq, Eq)]
pub struct TxSuccess {
    pub gas_limit: u64,
    pub gas_used: u64,
}

/// The error case of [`TxOutcome`](crate::TxOutcome).
#[derive(Debug, PartialEq, Eq)]
pub struct TxError {
    pub gas_limit: u64,
    pub gas_used: u64,
    pub error: String,
}

// `TxError` must implement `ToString`, such that it satisfies that trait bound
// required by `ResultExt::should_fail_with_error`.
impl Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}",)
    }
}

/// Outcome of broadcasting a transaction.
///
/// Contains the transaction's hash, which can be used to track it later, and
/// the node's mempool check. The transaction's eventual execution result is
/// not known at this point.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BroadcastTxOutcome {
    pub tx_hash: Hash256,
    pub check_tx: CheckTxOutcome,
}
