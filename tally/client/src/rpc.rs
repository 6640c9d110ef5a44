use {
    anyhow::bail,
    async_trait::async_trait,
    tally_types::{
        BroadcastClient, BroadcastTxOutcome, CheckTxOutcome, GenericResult, Hash256, JsonDeExt,
        JsonSerExt, Query, QueryClient, QueryResponse, Tx, TxOutcome, UnsignedTx,
    },
    tendermint::abci::Code,
    tendermint_rpc::{Client, HttpClient, endpoint::abci_query::AbciQuery},
};

/// A client for interacting with a Tally node via Tendermint RPC.
pub struct RpcClient {
    inner: HttpClient,
}

impl RpcClient {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let inner = HttpClient::new(endpoint)?;
        Ok(Self { inner })
    }

    pub async fn query(
        &self,
        path: &str,
        data: Vec<u8>,
        height: Option<u64>,
        prove: bool,
    ) -> anyhow::Result<AbciQuery> {
        let height = height.map(|h| h.try_into()).transpose()?;
        let res = self
            .inner
            .abci_query(Some(path.into()), data, height, prove)
            .await?;

        if res.code.is_err() {
            bail!(
                "query failed! codespace = {}, code = {}, log = {}",
                res.codespace,
                res.code.value(),
                res.log
            );
        }

        Ok(res)
    }
}

#[async_trait]
impl QueryClient for RpcClient {
    type Error = anyhow::Error;

    async fn query_chain(
        &self,
        query: Query,
        height: Option<u64>,
    ) -> Result<QueryResponse, Self::Error> {
        self.query("/app", query.to_json_vec()?, height, false)
            .await?
            .value
            .deserialize_json()
            .map_err(Into::into)
    }

    async fn simulate(&self, tx: UnsignedTx) -> Result<TxOutcome, Self::Error> {
        Ok(self
            .query("/simulate", tx.to_json_vec()?, None, false)
            .await?
            .value
            .deserialize_json()?)
    }
}

#[async_trait]
impl BroadcastClient for RpcClient {
    type Error = anyhow::Error;

    async fn broadcast_tx(&self, tx: Tx) -> Result<BroadcastTxOutcome, Self::Error> {
        let response = self.inner.broadcast_tx_sync(tx.to_json_vec()?).await?;

        tracing::debug!(tx_hash = %response.hash, "Broadcasted transaction");

        Ok(BroadcastTxOutcome {
            tx_hash: Hash256::from_inner(response.hash.as_bytes().try_into()?),
            check_tx: CheckTxOutcome {
                // Tendermint's CheckTx response doesn't come with gas info.
                gas_limit: tx.gas_limit,
                gas_used: 0,
                result: into_generic_result(response.code, response.log),
            },
        })
    }
}

fn into_generic_result(code: Code, log: String) -> GenericResult<()> {
    if code == Code::Ok {
        Ok(())
    } else {
        Err(log)
    }
}
