//! Interface of the poll contract.
//!
//! The contract stores texts, such as poll and proposal descriptions, as raw
//! bytes, so the messages here use [`Binary`](crate::Binary) for them. Counts
//! and identifiers are 64-bit integers, which serialize as strings.

use {
    crate::{Binary, QueryRequest, Uint64},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Register a new poll with the given proposals.
    ///
    /// The tokens are one-time voting rights. The contract marks each of them
    /// spent once it has been used to cast a vote in this poll.
    CreatePoll {
        description: Binary,
        options: Vec<Binary>,
        tokens: Vec<Binary>,
    },
    /// Close a poll, so that no further votes are accepted.
    ClosePoll { poll_id: Uint64 },
    /// Spend a voting token on one of a poll's proposals.
    CastVote {
        token: Binary,
        poll_id: Uint64,
        proposal_id: Uint64,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Query the number of polls created so far.
    PollCount {},
    /// Query a single poll's record.
    Poll { poll_id: Uint64 },
    /// Query a single proposal's description.
    Proposal {
        poll_id: Uint64,
        proposal_id: Uint64,
    },
    /// Query the number of votes a proposal has received.
    VoteCount {
        poll_id: Uint64,
        proposal_id: Uint64,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryPollCountRequest {}

impl QueryRequest for QueryPollCountRequest {
    type Message = QueryMsg;
    type Response = Uint64;
}

impl From<QueryPollCountRequest> for QueryMsg {
    fn from(_req: QueryPollCountRequest) -> Self {
        QueryMsg::PollCount {}
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryPollRequest {
    pub poll_id: Uint64,
}

impl QueryRequest for QueryPollRequest {
    type Message = QueryMsg;
    type Response = PollInfo;
}

impl From<QueryPollRequest> for QueryMsg {
    fn from(req: QueryPollRequest) -> Self {
        QueryMsg::Poll {
            poll_id: req.poll_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryProposalRequest {
    pub poll_id: Uint64,
    pub proposal_id: Uint64,
}

impl QueryRequest for QueryProposalRequest {
    type Message = QueryMsg;
    type Response = Binary;
}

impl From<QueryProposalRequest> for QueryMsg {
    fn from(req: QueryProposalRequest) -> Self {
        QueryMsg::Proposal {
            poll_id: req.poll_id,
            proposal_id: req.proposal_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryVoteCountRequest {
    pub poll_id: Uint64,
    pub proposal_id: Uint64,
}

impl QueryRequest for QueryVoteCountRequest {
    type Message = QueryMsg;
    type Response = Uint64;
}

impl From<QueryVoteCountRequest> for QueryMsg {
    fn from(req: QueryVoteCountRequest) -> Self {
        QueryMsg::VoteCount {
            poll_id: req.poll_id,
            proposal_id: req.proposal_id,
        }
    }
}

/// A poll's record, as the contract stores it.
///
/// The proposal descriptions aren't part of the record. They live under their
/// own storage keys and must be queried one by one with
/// [`QueryProposalRequest`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PollInfo {
    pub description: Binary,
    pub proposal_count: Uint64,
    pub closed: bool,
}

/// A poll, decoded into human readable form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: u64,
    pub description: String,
    pub closed: bool,
    pub proposals: Vec<Proposal>,
}

/// A proposal, decoded into human readable form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: u64,
    pub description: String,
}

/// The number of votes each of a poll's proposals has received, in ascending
/// order of proposal ID.
pub type PollResults = Vec<ProposalTally>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalTally {
    pub proposal_id: u64,
    pub votes: u64,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::{ExecuteMsg, QueryMsg, QueryPollRequest},
        crate::{Binary, JsonSerExt, Uint64, json},
    };

    #[test]
    fn execute_msg_wire_format() {
        let msg = ExecuteMsg::CreatePoll {
            description: Binary::from("ice cream flavor"),
            options: vec![Binary::from("vanilla"), Binary::from("chocolate")],
            tokens: vec![Binary::from("token-1")],
        };

        // Texts go over the wire base64-encoded.
        assert_eq!(
            msg.to_json_value().unwrap(),
            json!({
                "create_poll": {
                    "description": "aWNlIGNyZWFtIGZsYXZvcg==",
                    "options": ["dmFuaWxsYQ==", "Y2hvY29sYXRl"],
                    "tokens": ["dG9rZW4tMQ=="],
                },
            }),
        );
    }

    #[test]
    fn query_msg_wire_format() {
        let msg = QueryMsg::from(QueryPollRequest {
            poll_id: Uint64::new(3),
        });

        // Identifiers go over the wire as strings.
        assert_eq!(
            msg.to_json_value().unwrap(),
            json!({
                "poll": {
                    "poll_id": "3",
                },
            }),
        );
    }
}
