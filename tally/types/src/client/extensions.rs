use {
    super::QueryClient,
    crate::{Addr, Config, ContractInfo, JsonDeExt, Query, QueryRequest, StdError},
    async_trait::async_trait,
    serde::{Serialize, de::DeserializeOwned},
};

#[async_trait]
pub trait QueryClientExt: QueryClient
where
    Self::Error: From<StdError>,
{
    async fn query_config(&self, height: Option<u64>) -> Result<Config, Self::Error> {
        self.query_chain(Query::config(), height)
            .await
            .map(|res| res.as_config())
    }

    async fn query_contract(
        &self,
        address: Addr,
        height: Option<u64>,
    ) -> Result<ContractInfo, Self::Error> {
        self.query_chain(Query::contract(address), height)
            .await
            .map(|res| res.as_contract())
    }

    async fn query_wasm_smart<R>(
        &self,
        contract: Addr,
        req: R,
        height: Option<u64>,
    ) -> Result<R::Response, Self::Error>
    where
        R: QueryRequest + Send,
        R::Message: Serialize + Send,
        R::Response: DeserializeOwned,
    {
        let msg = R::Message::from(req);

        self.query_chain(Query::wasm_smart(contract, &msg)?, height)
            .await
            .and_then(|res| res.as_wasm_smart().deserialize_json().map_err(Into::into))
    }
}

impl<C> QueryClientExt for C
where
    C: QueryClient,
    C::Error: From<StdError>,
{
}
