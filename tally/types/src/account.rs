//! Interface of the account contracts, to the extent the client needs it.

use {
    crate::QueryRequest,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Query the account's mutable state.
    State {},
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryStateRequest {}

impl QueryRequest for QueryStateRequest {
    type Message = QueryMsg;
    type Response = StateResponse;
}

impl From<QueryStateRequest> for QueryMsg {
    fn from(_req: QueryStateRequest) -> Self {
        QueryMsg::State {}
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateResponse {
    /// The number of transactions the account has sent to the chain so far.
    /// Used as the nonce when signing the next transaction.
    pub nonce: u32,
}
