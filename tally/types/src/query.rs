use {
    crate::{Addr, Config, ContractInfo, Json, JsonSerExt, StdResult},
    paste::paste,
    serde::{Deserialize, Serialize},
};

// ----------------------------------- trait -----------------------------------

/// Represents a query request to a contract.
///
/// A contract typically exposes multiple query methods, with a `QueryMsg` as an
/// enum with multiple variants. A `QueryRequest` represents one such variant.
pub trait QueryRequest: Sized {
    /// The full query message enum that contains this request.
    type Message: From<Self>;

    /// The response type for this query.
    type Response;
}

// ---------------------------------- request ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    /// Query the chain's global configuration.
    Config(QueryConfigRequest),
    /// Query the metadata of a single contract.
    Contract(QueryContractRequest),
    /// Call the contract's query entry point with the given message.
    WasmSmart(QueryWasmSmartRequest),
}

impl Query {
    pub fn config() -> Self {
        QueryConfigRequest {}.into()
    }

    pub fn contract(address: Addr) -> Self {
        QueryContractRequest { address }.into()
    }

    pub fn wasm_smart<M>(contract: Addr, msg: &M) -> StdResult<Self>
    where
        M: Serialize,
    {
        Ok(QueryWasmSmartRequest {
            contract,
            msg: msg.to_json_value()?,
        }
        .into())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryConfigRequest {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryContractRequest {
    pub address: Addr,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryWasmSmartRequest {
    pub contract: Addr,
    pub msg: Json,
}

macro_rules! impl_into_query {
    ($variant:ident => $req:ty => $res:ty) => {
        impl From<$req> for Query {
            #[inline]
            fn from(req: $req) -> Self {
                Query::$variant(req)
            }
        }
    };
    ($($variant:ident => $req:ty => $resp:ty),+ $(,)?) => {
        $(
            impl_into_query!($variant => $req => $resp);
        )+
    };
}

impl_into_query! {
    Config    => QueryConfigRequest    => Config,
    Contract  => QueryContractRequest  => ContractInfo,
    WasmSmart => QueryWasmSmartRequest => Json,
}

// --------------------------------- response ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryResponse {
    Config(Config),
    Contract(ContractInfo),
    WasmSmart(Json),
}

macro_rules! generate_downcast {
    ($id:ident => $ret:ty) => {
        paste! {
            pub fn [<as_$id:snake>](self) -> $ret {
                match self {
                    QueryResponse::$id(value) => value,
                    _ => panic!("QueryResponse is not {}", stringify!($id)),
                }
            }
        }
    };
    ($($id:ident => $ret:ty),+ $(,)?) => {
        $(
            generate_downcast!($id => $ret);
        )+
    };
}

impl QueryResponse {
    generate_downcast! {
        Config    => Config,
        Contract  => ContractInfo,
        WasmSmart => Json,
    }
}
