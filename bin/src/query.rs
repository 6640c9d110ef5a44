use {
    crate::prompt::print_json_pretty,
    clap::{Parser, Subcommand},
    tally_client::{PollClient, RpcClient},
    tally_types::{Addr, Json, JsonDeExt, Query, QueryClient, QueryClientExt},
};

#[derive(Parser)]
pub struct QueryCmd {
    /// Tendermint RPC address
    #[arg(long, global = true, default_value = "http://127.0.0.1:26657")]
    node: String,

    /// The block height at which to perform queries [default: latest height]
    #[arg(long, global = true)]
    height: Option<u64>,

    #[command(subcommand, next_display_order = None)]
    subcmd: SubCmd,
}

#[derive(Subcommand)]
enum SubCmd {
    /// Query the chain's global configuration
    Config,
    /// Query metadata of the contract at the given address
    Contract {
        /// Contract address
        address: Addr,
    },
    /// Enumerate all polls of a poll contract, with their proposals
    Polls {
        /// Poll contract address
        contract: Addr,
    },
    /// Tally the votes of a poll
    Results {
        /// Poll contract address
        contract: Addr,
        /// Poll ID
        poll_id: u64,
    },
    /// Call a contract's query entry point with a raw JSON message
    WasmSmart {
        /// Contract address
        contract: Addr,
        /// JSON-encoded query message
        msg: String,
    },
}

impl QueryCmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = RpcClient::new(&self.node)?;

        match self.subcmd {
            SubCmd::Config => print_json_pretty(&client.query_config(self.height).await?),
            SubCmd::Contract { address } => {
                print_json_pretty(&client.query_contract(address, self.height).await?)
            },
            SubCmd::Polls { contract } => {
                let client = PollClient::connect_with(client, contract).await?;
                print_json_pretty(&client.polls().await?)
            },
            SubCmd::Results { contract, poll_id } => {
                let client = PollClient::connect_with(client, contract).await?;
                let poll = client.poll(poll_id).await?;
                print_json_pretty(&client.results(&poll).await?)
            },
            SubCmd::WasmSmart { contract, msg } => {
                let msg: Json = msg.deserialize_json()?;
                let res = client
                    .query_chain(Query::wasm_smart(contract, &msg)?, self.height)
                    .await?;
                print_json_pretty(&res.as_wasm_smart())
            },
        }
    }
}
