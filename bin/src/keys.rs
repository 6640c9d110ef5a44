use {
    crate::prompt::{confirm, print_json_pretty, read_password, read_text},
    anyhow::ensure,
    bip32::{Language, Mnemonic},
    clap::Parser,
    colored::Colorize,
    rand::rngs::OsRng,
    std::{
        fs,
        path::{Path, PathBuf},
    },
    tally_client::{Keystore, SigningKey},
    tally_types::JsonDeExt,
};

/// We use the same BIP-44 coin type as Ethereum for better compatibility:
/// <https://github.com/satoshilabs/slips/blob/master/slip-0044.md>
const DEFAULT_COIN_TYPE: usize = 60;

#[derive(Parser)]
pub enum KeysCmd {
    /// Create a new or recover an existing secp256k1 private key and save it
    /// to an encrypted file
    Add {
        /// A human-readable name for the key
        name: String,
        /// Recover an existing seed phrase instead of generating a new one
        #[arg(long)]
        recover: bool,
        /// BIP-44 coin type for key derivation
        #[arg(long, default_value_t = DEFAULT_COIN_TYPE)]
        coin_type: usize,
    },
    /// Delete a key by name
    #[command(alias = "rm")]
    Delete {
        /// Name of the key to delete
        name: String,
    },
    /// Display details of a key by name
    Show {
        /// Name of the key to display
        name: String,
    },
    /// List all keys
    #[command(alias = "ls")]
    List,
}

impl KeysCmd {
    pub fn run(self, dir: PathBuf) -> anyhow::Result<()> {
        match self {
            KeysCmd::Add {
                name,
                recover,
                coin_type,
            } => add(&dir, &name, recover, coin_type),
            KeysCmd::Delete { name } => delete(&dir, &name),
            KeysCmd::Show { name } => show(&dir, &name),
            KeysCmd::List => list(&dir),
        }
    }
}

fn add(dir: &Path, name: &str, recover: bool, coin_type: usize) -> anyhow::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let filename = dir.join(format!("{name}.json"));
    ensure!(!filename.exists(), "file `{filename:?}` already exists");

    // generate or recover mnemonic phrase
    let mnemonic = if recover {
        let phrase = read_text("🔑 Enter your BIP-39 mnemonic".bold())?;
        Mnemonic::new(phrase, Language::English)?
    } else {
        Mnemonic::random(OsRng, Language::English)
    };

    // ask for password and save encrypted keystore
    let password =
        read_password(format!("🔑 Enter a password to encrypt file `{filename:?}`").bold())?;
    let sk = SigningKey::from_mnemonic(&mnemonic, coin_type)?;
    let keystore = sk.write_to_file(&filename, &password)?;

    println!();
    print_json_pretty(&keystore)?;

    if !recover {
        println!("\n{} write this mnemonic phrase in a safe place!", "Important:".bold());
        println!("It is the only way to recover your account if you ever forget your password.");
        println!("\n{}", mnemonic.phrase());
    }

    Ok(())
}

fn delete(dir: &Path, name: &str) -> anyhow::Result<()> {
    let filename = dir.join(format!("{name}.json"));
    ensure!(filename.exists(), "file {filename:?} not found");

    if confirm(format!("🚨 Confirm deleting file {filename:?}").bold())? {
        fs::remove_file(filename)?;
        println!("🗑️  Deleted!");
    }

    Ok(())
}

fn show(dir: &Path, name: &str) -> anyhow::Result<()> {
    let filename = dir.join(format!("{name}.json"));
    ensure!(filename.exists(), "file {filename:?} not found");

    let keystore: Keystore = fs::read_to_string(filename)?.deserialize_json()?;

    print_json_pretty(&keystore)
}

fn list(dir: &Path) -> anyhow::Result<()> {
    let mut keystores = vec![];
    for entry in dir.read_dir()? {
        let entry = entry?;
        let keystore: Keystore = fs::read_to_string(entry.path())?.deserialize_json()?;
        keystores.push(keystore);
    }

    print_json_pretty(&keystores)
}
