mod broadcast;
mod extensions;

pub use {broadcast::*, extensions::*};

use {
    crate::{Query, QueryResponse, TxOutcome, UnsignedTx},
    async_trait::async_trait,
};

/// A client that can read the chain's state.
#[async_trait]
pub trait QueryClient {
    type Error;

    async fn query_chain(
        &self,
        query: Query,
        height: Option<u64>,
    ) -> Result<QueryResponse, Self::Error>;

    /// Dry-run a transaction, returning how much gas it would consume.
    async fn simulate(&self, unsigned_tx: UnsignedTx) -> Result<TxOutcome, Self::Error>;
}

/// Options on how to determine a transaction's gas limit.
#[derive(Debug, Clone, Copy)]
pub enum GasOption {
    /// Estimate the gas consumption by simulating the transaction, then adjust
    /// the estimate as:
    ///
    /// ```plain
    /// gas_limit := ceil(gas_used * scale) + flat_increase
    /// ```
    Simulate { flat_increase: u64, scale: f64 },
    /// Use a predefined gas limit, skipping the simulation round trip.
    Predefined { gas_limit: u64 },
}
