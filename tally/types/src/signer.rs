use {
    crate::{Addr, Message, NonEmpty, StdResult, Tx, UnsignedTx},
    serde::{Deserialize, Serialize},
};

/// Represents an object that has an onchain address.
pub trait Addressable {
    fn address(&self) -> Addr;
}

impl Addressable for Addr {
    fn address(&self) -> Addr {
        *self
    }
}

/// Represents an object that can sign transactions in a synchronous manner.
pub trait Signer: Addressable {
    /// Generate an unsigned transaction with the appropriate metadata.
    fn unsigned_transaction(
        &self,
        msgs: NonEmpty<Vec<Message>>,
        chain_id: &str,
    ) -> StdResult<UnsignedTx>;

    /// Sign a transaction.
    ///
    /// ## Notes:
    ///
    /// This function takes a mutable reference to self, because signing may be
    /// a stateful process, e.g. the signer may keep track of a nonce, and this
    /// state may need to be updated.
    fn sign_transaction(
        &mut self,
        msgs: NonEmpty<Vec<Message>>,
        chain_id: &str,
        gas_limit: u64,
    ) -> StdResult<Tx>;
}

/// The document over which the transaction signature is produced.
///
/// The chain ID and nonce are included so that a signature can't be replayed
/// on another network, or on the same network a second time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignDoc {
    pub sender: Addr,
    pub chain_id: String,
    pub nonce: u32,
    pub msgs: NonEmpty<Vec<Message>>,
}
