use {
    crate::{Addr, Hash256},
    serde::{Deserialize, Serialize},
    serde_with::skip_serializing_none,
};

/// Chain-level configurations. Not to be confused with contract-level configs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The network identifier. Signers commit to it in every transaction, so
    /// that a transaction for one network can't be replayed on another.
    pub chain_id: String,
    /// The account that can update this config.
    pub owner: Addr,
}

/// Metadata the chain keeps for each deployed contract.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContractInfo {
    pub code_hash: Hash256,
    /// The account that can migrate the contract to a new code hash. `None`
    /// means the contract is immutable.
    pub admin: Option<Addr>,
}
