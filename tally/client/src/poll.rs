use {
    crate::RpcClient,
    futures::future::try_join_all,
    std::ops::Deref,
    tally_types::{
        Addr, Binary, BroadcastClient, BroadcastClientExt, BroadcastTxOutcome, GasEstimateError,
        GasOption, Inner, QueryClient, QueryClientExt, Signer, StdError,
        poll::{
            ExecuteMsg, Poll, PollResults, Proposal, ProposalTally, QueryPollCountRequest,
            QueryPollRequest, QueryProposalRequest, QueryVoteCountRequest,
        },
    },
};

/// A client for the Tally poll contract.
///
/// Wraps a chain client and speaks the poll contract's interface: the message
/// texts go over the wire in their byte string form, and are decoded back to
/// UTF-8 strings here.
pub struct PollClient<C> {
    client: C,
    contract: Addr,
    chain_id: String,
}

impl PollClient<RpcClient> {
    /// Connect to a Tally node and locate the poll contract.
    ///
    /// This performs a round trip to the node, so it fails early if the node
    /// is unreachable, or if no contract is deployed at the given address.
    pub async fn connect(endpoint: &str, contract: Addr) -> anyhow::Result<Self> {
        let client = RpcClient::new(endpoint)?;

        Self::connect_with(client, contract).await
    }
}

impl<C> PollClient<C> {
    pub fn new<CI>(client: C, contract: Addr, chain_id: CI) -> Self
    where
        CI: Into<String>,
    {
        Self {
            client,
            contract,
            chain_id: chain_id.into(),
        }
    }

    pub fn contract(&self) -> Addr {
        self.contract
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }
}

impl<C> Deref for PollClient<C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl<C> PollClient<C>
where
    C: QueryClient + Send + Sync,
    C::Error: From<StdError>,
{
    /// Verify the chain client can reach the node and the poll contract is
    /// deployed, then build a client around it.
    pub async fn connect_with(client: C, contract: Addr) -> Result<Self, C::Error> {
        // The chain ID is needed later for signing transactions.
        let config = client.query_config(None).await?;
        client.query_contract(contract, None).await?;

        tracing::info!(
            chain_id = %config.chain_id,
            contract = %contract,
            "Connected to poll contract"
        );

        Ok(Self::new(client, contract, config.chain_id))
    }

    /// Query the number of polls ever created.
    pub async fn poll_count(&self) -> Result<u64, C::Error> {
        let count = self
            .client
            .query_wasm_smart(self.contract, QueryPollCountRequest {}, None)
            .await?;

        Ok(count.into_inner())
    }

    /// Fetch the description of a single proposal.
    pub async fn proposal(&self, poll_id: u64, proposal_id: u64) -> Result<Proposal, C::Error> {
        let description = self
            .client
            .query_wasm_smart(
                self.contract,
                QueryProposalRequest {
                    poll_id: poll_id.into(),
                    proposal_id: proposal_id.into(),
                },
                None,
            )
            .await?;

        Ok(Proposal {
            id: proposal_id,
            description: description.into_string()?,
        })
    }

    /// Fetch a single poll, including all its proposals.
    ///
    /// The proposals are fetched concurrently. Should any of the reads fail,
    /// the whole call fails.
    pub async fn poll(&self, poll_id: u64) -> Result<Poll, C::Error> {
        let info = self
            .client
            .query_wasm_smart(
                self.contract,
                QueryPollRequest {
                    poll_id: poll_id.into(),
                },
                None,
            )
            .await?;

        let proposals = try_join_all(
            (0..info.proposal_count.into_inner())
                .map(|proposal_id| self.proposal(poll_id, proposal_id)),
        )
        .await?;

        Ok(Poll {
            id: poll_id,
            description: info.description.into_string()?,
            closed: info.closed,
            proposals,
        })
    }

    /// Fetch all polls ever created, in ascending order of poll ID.
    ///
    /// The polls are fetched concurrently. Should any of the reads fail, the
    /// whole call fails.
    pub async fn polls(&self) -> Result<Vec<Poll>, C::Error> {
        let count = self.poll_count().await?;

        try_join_all((0..count).map(|poll_id| self.poll(poll_id))).await
    }

    /// Query the number of votes a single proposal has received.
    pub async fn vote_count(&self, poll_id: u64, proposal_id: u64) -> Result<u64, C::Error> {
        let votes = self
            .client
            .query_wasm_smart(
                self.contract,
                QueryVoteCountRequest {
                    poll_id: poll_id.into(),
                    proposal_id: proposal_id.into(),
                },
                None,
            )
            .await?;

        Ok(votes.into_inner())
    }

    /// Tally a poll: query the vote counts of all its proposals concurrently,
    /// returning exactly one entry per proposal, in the poll's proposal order.
    pub async fn results(&self, poll: &Poll) -> Result<PollResults, C::Error> {
        let votes = try_join_all(
            poll.proposals
                .iter()
                .map(|proposal| self.vote_count(poll.id, proposal.id)),
        )
        .await?;

        Ok(poll
            .proposals
            .iter()
            .zip(votes)
            .map(|(proposal, votes)| ProposalTally {
                proposal_id: proposal.id,
                votes,
            })
            .collect())
    }
}

impl<C> PollClient<C>
where
    C: QueryClient + BroadcastClient + Send + Sync,
    <C as QueryClient>::Error: From<StdError>,
    <C as BroadcastClient>::Error:
        From<GasEstimateError> + From<StdError> + From<<C as QueryClient>::Error>,
{
    /// Create a new poll with the given candidate options, granting one-time
    /// voting rights to the given tokens.
    ///
    /// This broadcasts a transaction with a single message executing the poll
    /// contract. The outcome carries the transaction hash for tracking.
    pub async fn create_poll<S>(
        &self,
        signer: &mut S,
        description: &str,
        options: Vec<String>,
        tokens: Vec<String>,
        gas_opt: GasOption,
    ) -> Result<BroadcastTxOutcome, <C as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
    {
        let msg = ExecuteMsg::CreatePoll {
            description: description.into(),
            options: options.into_iter().map(Binary::from).collect(),
            tokens: tokens.into_iter().map(Binary::from).collect(),
        };

        self.client
            .execute(signer, self.contract, &msg, gas_opt, &self.chain_id)
            .await
    }

    /// Close a poll, so that it no longer accepts votes.
    pub async fn close_poll<S>(
        &self,
        signer: &mut S,
        poll_id: u64,
        gas_opt: GasOption,
    ) -> Result<BroadcastTxOutcome, <C as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
    {
        let msg = ExecuteMsg::ClosePoll {
            poll_id: poll_id.into(),
        };

        self.client
            .execute(signer, self.contract, &msg, gas_opt, &self.chain_id)
            .await
    }

    /// Cast a vote on a poll's proposal, spending the given voting token.
    pub async fn cast_vote<S>(
        &self,
        signer: &mut S,
        token: &str,
        poll_id: u64,
        proposal_id: u64,
        gas_opt: GasOption,
    ) -> Result<BroadcastTxOutcome, <C as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
    {
        let msg = ExecuteMsg::CastVote {
            token: token.into(),
            poll_id: poll_id.into(),
            proposal_id: proposal_id.into(),
        };

        self.client
            .execute(signer, self.contract, &msg, gas_opt, &self.chain_id)
            .await
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::SingleSigner,
        tally_types::{
            Config, ContractInfo, GenericResultExt, Hash256, JsonDeExt, JsonSerExt, Message,
            MockClient, ResultExt, Uint64, json,
            poll::{PollInfo, QueryMsg},
        },
    };

    const CHAIN_ID: &str = "tally-1";

    fn poll_contract() -> Addr {
        Addr::mock(255)
    }

    /// A mock contract hosting two polls:
    ///
    /// | poll | description        | closed | proposals              | votes |
    /// | ---- | ------------------ | ------ | ---------------------- | ----- |
    /// | 0    | "ice cream flavor" | no     | "vanilla", "chocolate" | 3, 5  |
    /// | 1    | "pizza topping"    | yes    | "olives"               | 0     |
    fn mock_client() -> MockClient {
        MockClient::new()
            .with_config(Config {
                chain_id: CHAIN_ID.to_string(),
                owner: Addr::mock(0),
            })
            .with_contract(poll_contract(), ContractInfo {
                code_hash: Hash256::ZERO,
                admin: None,
            })
            .with_smart_query_handler(|contract, msg| {
                assert_eq!(contract, poll_contract());

                let msg: QueryMsg = msg.deserialize_json().into_generic_result()?;
                match msg {
                    QueryMsg::PollCount {} => Uint64::new(2).to_json_value(),
                    QueryMsg::Poll { poll_id } => match poll_id.into_inner() {
                        0 => PollInfo {
                            description: "ice cream flavor".into(),
                            proposal_count: Uint64::new(2),
                            closed: false,
                        }
                        .to_json_value(),
                        1 => PollInfo {
                            description: "pizza topping".into(),
                            proposal_count: Uint64::new(1),
                            closed: true,
                        }
                        .to_json_value(),
                        id => return Err(format!("poll not found: {id}")),
                    },
                    QueryMsg::Proposal {
                        poll_id,
                        proposal_id,
                    } => match (poll_id.into_inner(), proposal_id.into_inner()) {
                        (0, 0) => Binary::from("vanilla").to_json_value(),
                        (0, 1) => Binary::from("chocolate").to_json_value(),
                        (1, 0) => Binary::from("olives").to_json_value(),
                        ids => return Err(format!("proposal not found: {ids:?}")),
                    },
                    QueryMsg::VoteCount {
                        poll_id,
                        proposal_id,
                    } => match (poll_id.into_inner(), proposal_id.into_inner()) {
                        (0, 0) => Uint64::new(3).to_json_value(),
                        (0, 1) => Uint64::new(5).to_json_value(),
                        (1, 0) => Uint64::new(0).to_json_value(),
                        ids => return Err(format!("no vote count for proposal: {ids:?}")),
                    },
                }
                .into_generic_result()
            })
    }

    fn mock_poll_client() -> PollClient<MockClient> {
        PollClient::new(mock_client(), poll_contract(), CHAIN_ID)
    }

    #[tokio::test]
    async fn connecting_picks_up_the_chain_id() {
        let client = PollClient::connect_with(mock_client(), poll_contract())
            .await
            .unwrap();

        assert_eq!(client.chain_id(), CHAIN_ID);
        assert_eq!(client.contract(), poll_contract());
    }

    #[tokio::test]
    async fn connecting_fails_if_contract_not_deployed() {
        // The mock knows no contract at this address.
        let err = PollClient::connect_with(mock_client(), Addr::mock(123))
            .await
            .err()
            .unwrap();

        assert!(err.to_string().contains("data not found"));
    }

    #[tokio::test]
    async fn fetching_all_polls() {
        let client = mock_poll_client();

        // One entry per poll the contract reports, in ascending ID order,
        // with the texts decoded and the proposals in ID order.
        client.polls().await.should_succeed_and_equal(vec![
            Poll {
                id: 0,
                description: "ice cream flavor".to_string(),
                closed: false,
                proposals: vec![
                    Proposal {
                        id: 0,
                        description: "vanilla".to_string(),
                    },
                    Proposal {
                        id: 1,
                        description: "chocolate".to_string(),
                    },
                ],
            },
            Poll {
                id: 1,
                description: "pizza topping".to_string(),
                closed: true,
                proposals: vec![Proposal {
                    id: 0,
                    description: "olives".to_string(),
                }],
            },
        ]);
    }

    #[tokio::test]
    async fn tallying_votes() {
        let client = mock_poll_client();

        let poll = client.poll(0).await.should_succeed();

        // Exactly one entry per proposal, in proposal order.
        client
            .results(&poll)
            .await
            .should_succeed_and_equal(vec![
                ProposalTally {
                    proposal_id: 0,
                    votes: 3,
                },
                ProposalTally {
                    proposal_id: 1,
                    votes: 5,
                },
            ]);
    }

    #[tokio::test]
    async fn failed_sub_read_fails_the_whole_fetch() {
        // A contract of one poll with two proposals, of which only the first
        // is readable.
        let mock = MockClient::new().with_smart_query_handler(|_, msg| {
            let msg: QueryMsg = msg.deserialize_json().into_generic_result()?;
            match msg {
                QueryMsg::PollCount {} => Uint64::new(1).to_json_value().into_generic_result(),
                QueryMsg::Poll { .. } => PollInfo {
                    description: "ice cream flavor".into(),
                    proposal_count: Uint64::new(2),
                    closed: false,
                }
                .to_json_value()
                .into_generic_result(),
                QueryMsg::Proposal { proposal_id, .. } if proposal_id.into_inner() == 0 => {
                    Binary::from("vanilla").to_json_value().into_generic_result()
                },
                _ => Err("storage corrupted".to_string()),
            }
        });
        let client = PollClient::new(mock, poll_contract(), CHAIN_ID);

        // One of the concurrent proposal reads fails, which must fail the
        // whole fetch rather than yield a partial poll.
        client
            .polls()
            .await
            .should_fail_with_error("storage corrupted");
    }

    #[tokio::test]
    async fn creating_poll_broadcasts_exactly_one_execute() {
        let client = mock_poll_client();
        let mut signer = SingleSigner::new_random(Addr::mock(1)).with_nonce(0);

        let outcome = client
            .create_poll(
                &mut signer,
                "ice cream flavor",
                vec!["vanilla".to_string(), "chocolate".to_string()],
                vec!["token-1".to_string()],
                GasOption::Predefined {
                    gas_limit: 1_000_000,
                },
            )
            .await
            .should_succeed();

        outcome.check_tx.should_succeed();

        let broadcasts = client.broadcasts();
        assert_eq!(broadcasts.len(), 1);

        let tx = &broadcasts[0];
        assert_eq!(tx.sender, Addr::mock(1));
        assert_eq!(tx.msgs.inner().len(), 1);

        // The one message must execute the poll contract, with all the texts
        // in their byte string form.
        let Message::Execute(execute) = &tx.msgs.inner()[0];
        assert_eq!(execute.contract, poll_contract());
        assert_eq!(execute.msg, json!({
            "create_poll": {
                "description": "aWNlIGNyZWFtIGZsYXZvcg==",
                "options": ["dmFuaWxsYQ==", "Y2hvY29sYXRl"],
                "tokens": ["dG9rZW4tMQ=="],
            },
        }));
    }

    #[tokio::test]
    async fn closing_poll_broadcasts_exactly_one_execute() {
        let client = mock_poll_client();
        let mut signer = SingleSigner::new_random(Addr::mock(1)).with_nonce(0);

        client
            .close_poll(&mut signer, 7, GasOption::Predefined {
                gas_limit: 1_000_000,
            })
            .await
            .should_succeed();

        let broadcasts = client.broadcasts();
        assert_eq!(broadcasts.len(), 1);
        assert_eq!(broadcasts[0].msgs.inner().len(), 1);

        let Message::Execute(execute) = &broadcasts[0].msgs.inner()[0];
        assert_eq!(execute.contract, poll_contract());
        assert_eq!(execute.msg, json!({
            "close_poll": {
                "poll_id": "7",
            },
        }));
    }

    #[tokio::test]
    async fn casting_vote_broadcasts_exactly_one_execute() {
        let client = mock_poll_client();
        let mut signer = SingleSigner::new_random(Addr::mock(1)).with_nonce(0);

        client
            .cast_vote(&mut signer, "token-1", 0, 1, GasOption::Predefined {
                gas_limit: 1_000_000,
            })
            .await
            .should_succeed();

        let broadcasts = client.broadcasts();
        assert_eq!(broadcasts.len(), 1);
        assert_eq!(broadcasts[0].msgs.inner().len(), 1);

        let Message::Execute(execute) = &broadcasts[0].msgs.inner()[0];
        assert_eq!(execute.contract, poll_contract());
        assert_eq!(execute.msg, json!({
            "cast_vote": {
                "token": "dG9rZW4tMQ==",
                "poll_id": "0",
                "proposal_id": "1",
            },
        }));
    }

    #[tokio::test]
    async fn broadcast_rejection_is_not_swallowed() {
        let mock = mock_client().with_broadcast_error("invalid nonce");
        let client = PollClient::new(mock, poll_contract(), CHAIN_ID);
        let mut signer = SingleSigner::new_random(Addr::mock(1)).with_nonce(0);

        let outcome = client
            .close_poll(&mut signer, 0, GasOption::Predefined {
                gas_limit: 1_000_000,
            })
            .await
            .should_succeed();

        // The node rejected the transaction at the mempool check. The
        // rejection must be visible in the outcome.
        outcome.check_tx.should_fail_with_error("invalid nonce");
    }

    #[tokio::test]
    async fn failed_simulation_aborts_the_mutation() {
        let mock = mock_client().with_simulate_error("out of gas");
        let client = PollClient::new(mock, poll_contract(), CHAIN_ID);
        let mut signer = SingleSigner::new_random(Addr::mock(1)).with_nonce(0);

        client
            .close_poll(&mut signer, 0, GasOption::Simulate {
                scale: 1.2,
                flat_increase: 100_000,
            })
            .await
            .should_fail_with_error("failed to estimate gas consumption");

        // Nothing must have been broadcasted.
        assert!(client.broadcasts().is_empty());
    }
}
