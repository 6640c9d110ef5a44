use {
    crate::{
        Addr, BroadcastClient, BroadcastTxOutcome, CheckTxOutcome, Config, ContractInfo,
        GenericResult, Hash256, Json, Query, QueryClient, QueryResponse, StdError, Tx, TxOutcome,
        UnsignedTx,
    },
    async_trait::async_trait,
    std::{collections::BTreeMap, sync::Mutex},
};

/// A function that handles Wasm smart queries.
pub type SmartQueryHandler = Box<dyn Fn(Addr, Json) -> GenericResult<Json> + Send + Sync>;

/// A mock implementation of the [`QueryClient`](crate::QueryClient) and
/// [`BroadcastClient`](crate::BroadcastClient) traits for testing purpose.
///
/// Queries are answered from in-memory tables, and broadcasted transactions
/// are recorded instead of being sent anywhere.
#[derive(Default)]
pub struct MockClient {
    config: Option<Config>,
    contracts: BTreeMap<Addr, ContractInfo>,
    smart_query_handler: Option<SmartQueryHandler>,
    simulate_error: Option<String>,
    broadcast_error: Option<String>,
    broadcasts: Mutex<Vec<Tx>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_contract(mut self, address: Addr, contract: ContractInfo) -> Self {
        self.contracts.insert(address, contract);
        self
    }

    pub fn with_smart_query_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Addr, Json) -> GenericResult<Json> + Send + Sync + 'static,
    {
        self.smart_query_handler = Some(Box::new(handler));
        self
    }

    /// Make all subsequent gas simulations fail with the given error message.
    pub fn with_simulate_error<E>(mut self, error: E) -> Self
    where
        E: Into<String>,
    {
        self.simulate_error = Some(error.into());
        self
    }

    /// Make all subsequent broadcasts fail the mempool check with the given
    /// error message.
    pub fn with_broadcast_error<E>(mut self, error: E) -> Self
    where
        E: Into<String>,
    {
        self.broadcast_error = Some(error.into());
        self
    }

    /// Return the transactions broadcasted so far, in order of broadcast.
    pub fn broadcasts(&self) -> Vec<Tx> {
        self.broadcasts.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryClient for MockClient {
    type Error = StdError;

    async fn query_chain(
        &self,
        query: Query,
        _height: Option<u64>,
    ) -> Result<QueryResponse, Self::Error> {
        match query {
            Query::Config(_req) => {
                let config = self.config.clone().expect("[MockClient]: config is not set");
                Ok(QueryResponse::Config(config))
            },
            Query::Contract(req) => {
                let contract = self.contracts.get(&req.address).cloned().ok_or_else(|| {
                    StdError::data_not_found::<ContractInfo>(req.address.as_ref())
                })?;
                Ok(QueryResponse::Contract(contract))
            },
            Query::WasmSmart(req) => {
                let handler = self
                    .smart_query_handler
                    .as_ref()
                    .expect("[MockClient]: smart query handler not set");
                let response = handler(req.contract, req.msg).map_err(StdError::host)?;
                Ok(QueryResponse::WasmSmart(response))
            },
        }
    }

    async fn simulate(&self, _unsigned_tx: UnsignedTx) -> Result<TxOutcome, Self::Error> {
        let result = match &self.simulate_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        };

        // The mock doesn't meter gas.
        Ok(TxOutcome {
            gas_limit: u64::MAX,
            gas_used: 0,
            result,
        })
    }
}

#[async_trait]
impl BroadcastClient for MockClient {
    type Error = StdError;

    async fn broadcast_tx(&self, tx: Tx) -> Result<BroadcastTxOutcome, Self::Error> {
        let result = match &self.broadcast_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        };

        let outcome = BroadcastTxOutcome {
            tx_hash: Hash256::ZERO,
            check_tx: CheckTxOutcome {
                gas_limit: tx.gas_limit,
                gas_used: 0,
                result,
            },
        };

        self.broadcasts.lock().unwrap().push(tx);

        Ok(outcome)
    }
}
