use {
    crate::prompt::{print_json_pretty, read_password},
    clap::{Parser, Subcommand},
    colored::Colorize,
    std::path::PathBuf,
    tally_client::{PollClient, SigningKey, SingleSigner},
    tally_types::{Addr, GasOption},
};

// Gas estimation parameters, for when no explicit gas limit is given.
// Simulation can undershoot, so pad the estimate.
const GAS_SCALE: f64 = 1.2;
const GAS_FLAT_INCREASE: u64 = 100_000;

#[derive(Parser)]
pub struct PollCmd {
    /// Tendermint RPC address
    #[arg(long, default_value = "http://127.0.0.1:26657")]
    node: String,

    /// Poll contract address
    #[arg(long)]
    contract: Addr,

    /// Name of the key to sign the transaction
    #[arg(long)]
    key: String,

    /// Address of the account to send the transaction from
    #[arg(long)]
    sender: Addr,

    /// Account nonce [default: query from chain]
    #[arg(long)]
    nonce: Option<u32>,

    /// Gas limit [default: estimate by simulation]
    #[arg(long)]
    gas_limit: Option<u64>,

    #[command(subcommand)]
    subcmd: SubCmd,
}

#[derive(Subcommand)]
enum SubCmd {
    /// Create a new poll
    Create {
        /// A text describing what the poll is about
        description: String,
        /// A candidate option voters choose between [repeat for each option]
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        /// A one-time voting token to grant [repeat for each token]
        #[arg(long = "token")]
        tokens: Vec<String>,
    },
    /// Close a poll, so that it stops accepting votes
    Close {
        /// Poll ID
        poll_id: u64,
    },
    /// Cast a vote on a poll's proposal
    Vote {
        /// Voting token
        token: String,
        /// Poll ID
        poll_id: u64,
        /// Proposal ID
        proposal_id: u64,
    },
}

impl PollCmd {
    pub async fn run(self, key_dir: PathBuf) -> anyhow::Result<()> {
        let client = PollClient::connect(&self.node, self.contract).await?;

        // load and decrypt the signing key
        let key_path = key_dir.join(format!("{}.json", self.key));
        let password =
            read_password(format!("🔑 Enter the password to decrypt key `{}`", self.key).bold())?;
        let sk = SigningKey::from_file(&key_path, &password)?;

        let signer = SingleSigner::new(self.sender, sk);
        let mut signer = match self.nonce {
            Some(nonce) => signer.with_nonce(nonce),
            None => signer.query_nonce(&*client).await?,
        };

        let gas_opt = match self.gas_limit {
            Some(gas_limit) => GasOption::Predefined { gas_limit },
            None => GasOption::Simulate {
                scale: GAS_SCALE,
                flat_increase: GAS_FLAT_INCREASE,
            },
        };

        let outcome = match self.subcmd {
            SubCmd::Create {
                description,
                options,
                tokens,
            } => {
                client
                    .create_poll(&mut signer, &description, options, tokens, gas_opt)
                    .await?
            },
            SubCmd::Close { poll_id } => client.close_poll(&mut signer, poll_id, gas_opt).await?,
            SubCmd::Vote {
                token,
                poll_id,
                proposal_id,
            } => {
                client
                    .cast_vote(&mut signer, &token, poll_id, proposal_id, gas_opt)
                    .await?
            },
        };

        print_json_pretty(&outcome)
    }
}
