use {
    crate::SigningKey,
    bip32::{Language, Mnemonic},
    tally_types::{
        Addr, Addressable, Defined, JsonSerExt, MaybeDefined, Message, NonEmpty, QueryClient,
        QueryClientExt, SignDoc, Signer, StdError, StdResult, Tx, Undefined, UnsignedTx,
        account::QueryStateRequest,
    },
};

/// Utility for signing transactions in the format expected by Tally's
/// single-signature account contracts.
#[derive(Debug)]
pub struct SingleSigner<T = Undefined<u32>>
where
    T: MaybeDefined<u32>,
{
    pub address: Addr,
    pub nonce: T,
    pub sk: SigningKey,
}

impl<T> SingleSigner<T>
where
    T: MaybeDefined<u32>,
{
    /// Query the sender's account contract for the nonce to use in the next
    /// transaction.
    pub async fn query_next_nonce<C>(&self, client: &C) -> Result<u32, C::Error>
    where
        C: QueryClient + Sync,
        C::Error: From<StdError>,
    {
        let state = client
            .query_wasm_smart(self.address, QueryStateRequest {}, None)
            .await?;

        Ok(state.nonce)
    }
}

impl SingleSigner<Undefined<u32>> {
    pub fn new(address: Addr, sk: SigningKey) -> Self {
        Self {
            address,
            nonce: Undefined::new(),
            sk,
        }
    }

    pub fn new_random(address: Addr) -> Self {
        Self::new(address, SigningKey::new_random())
    }

    pub fn from_mnemonic(address: Addr, mnemonic: &str, coin_type: usize) -> anyhow::Result<Self> {
        let mnemonic = Mnemonic::new(mnemonic, Language::English)?;
        let sk = SigningKey::from_mnemonic(&mnemonic, coin_type)?;

        Ok(Self::new(address, sk))
    }

    pub fn with_nonce(self, nonce: u32) -> SingleSigner<Defined<u32>> {
        SingleSigner {
            address: self.address,
            nonce: Defined::new(nonce),
            sk: self.sk,
        }
    }

    pub async fn query_nonce<C>(self, client: &C) -> Result<SingleSigner<Defined<u32>>, C::Error>
    where
        C: QueryClient + Sync,
        C::Error: From<StdError>,
    {
        let nonce = self.query_next_nonce(client).await?;

        Ok(SingleSigner {
            address: self.address,
            nonce: Defined::new(nonce),
            sk: self.sk,
        })
    }
}

impl<T> Addressable for SingleSigner<T>
where
    T: MaybeDefined<u32>,
{
    fn address(&self) -> Addr {
        self.address
    }
}

impl Signer for SingleSigner<Defined<u32>> {
    fn unsigned_transaction(
        &self,
        msgs: NonEmpty<Vec<Message>>,
        _chain_id: &str,
    ) -> StdResult<UnsignedTx> {
        Ok(UnsignedTx {
            sender: self.address,
            msgs,
        })
    }

    fn sign_transaction(
        &mut self,
        msgs: NonEmpty<Vec<Message>>,
        chain_id: &str,
        gas_limit: u64,
    ) -> StdResult<Tx> {
        let nonce = self.nonce.into_inner();
        *self.nonce.inner_mut() += 1;

        let sign_doc = SignDoc {
            sender: self.address,
            chain_id: chain_id.to_string(),
            nonce,
            msgs: msgs.clone(),
        };
        let credential = self.sk.sign(&sign_doc.to_json_vec()?);

        Ok(Tx {
            sender: self.address,
            gas_limit,
            msgs,
            credential,
        })
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        tally_types::{Inner, ResultExt, poll::ExecuteMsg},
    };

    #[test]
    fn sign_transaction_works() {
        let address = Addr::mock(1);
        let contract = Addr::mock(2);

        let mut signer = SingleSigner::new_random(address).with_nonce(0);

        let msg = Message::execute(contract, &ExecuteMsg::ClosePoll { poll_id: 7.into() })
            .should_succeed();

        let tx = signer
            .sign_transaction(NonEmpty::new_unchecked(vec![msg.clone()]), "tally-1", 1_000_000)
            .should_succeed();

        assert_eq!(tx.sender, address);
        assert_eq!(tx.gas_limit, 1_000_000);
        assert_eq!(tx.msgs.inner(), &vec![msg.clone()]);

        // The credential must verify against the sign doc, which commits to
        // the chain ID and the nonce that was current at signing time.
        let sign_doc = SignDoc {
            sender: address,
            chain_id: "tally-1".to_string(),
            nonce: 0,
            msgs: NonEmpty::new_unchecked(vec![msg]),
        };
        let expect = signer.sk.sign(&sign_doc.to_json_vec().unwrap());
        assert_eq!(tx.credential, expect);

        // The nonce must have advanced.
        assert_eq!(signer.nonce, Defined::new(1));
    }

    #[test]
    fn recovering_signer_from_mnemonic() {
        // A well-known test vector mnemonic.
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

        let signer = SingleSigner::from_mnemonic(Addr::mock(1), phrase, 60).should_succeed();

        // Derivation must be deterministic.
        let again = SingleSigner::from_mnemonic(Addr::mock(1), phrase, 60).should_succeed();
        assert_eq!(signer.sk.public_key(), again.sk.public_key());

        // A different coin type must yield a different key.
        let other = SingleSigner::from_mnemonic(Addr::mock(1), phrase, 118).should_succeed();
        assert_ne!(signer.sk.public_key(), other.sk.public_key());
    }

    #[test]
    fn unsigned_transaction_carries_sender_and_msgs() {
        let signer = SingleSigner::new_random(Addr::mock(3)).with_nonce(5);

        let msg = Message::execute(Addr::mock(4), &ExecuteMsg::ClosePoll { poll_id: 1.into() })
            .should_succeed();

        let unsigned = signer
            .unsigned_transaction(NonEmpty::new_unchecked(vec![msg.clone()]), "tally-1")
            .should_succeed();

        assert_eq!(unsigned.sender, Addr::mock(3));
        assert_eq!(unsigned.msgs.inner(), &vec![msg]);
    }
}
