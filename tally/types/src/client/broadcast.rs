use {
    crate::{
        Addr, BroadcastTxOutcome, GasOption, GenericResult, Message, NonEmpty, QueryClient, Signer,
        StdError, Tx, TxOutcome,
    },
    async_trait::async_trait,
    serde::Serialize,
};

/// Skip the CLI prompt confirmation, always consider it as if the user accepted.
fn no_confirmation<E>(_tx: &Tx) -> Result<bool, E> {
    Ok(true)
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to estimate gas consumption: {0}")]
pub struct GasEstimateError(String);

#[async_trait]
pub trait BroadcastClient {
    type Error;

    async fn broadcast_tx(&self, tx: Tx) -> Result<BroadcastTxOutcome, Self::Error>;
}

#[async_trait]
pub trait BroadcastClientExt: BroadcastClient + QueryClient
where
    <Self as BroadcastClient>::Error:
        From<GasEstimateError> + From<StdError> + From<<Self as QueryClient>::Error>,
{
    async fn broadcast_tx_with_confirmation<F>(
        &self,
        tx: Tx,
        confirm_fn: F,
    ) -> Result<Option<BroadcastTxOutcome>, <Self as BroadcastClient>::Error>
    where
        F: Fn(&Tx) -> Result<bool, <Self as BroadcastClient>::Error> + Send + Sync,
    {
        if confirm_fn(&tx)? {
            self.broadcast_tx(tx).await.map(Some)
        } else {
            Ok(None)
        }
    }

    /// Create, sign, and broadcast a transaction with a single message, without
    /// terminal prompt for confirmation.
    ///
    /// If you need the prompt confirmation, use `send_message_with_confirmation`.
    async fn send_message<S>(
        &self,
        signer: &mut S,
        msg: Message,
        gas_opt: GasOption,
        chain_id: &str,
    ) -> Result<BroadcastTxOutcome, <Self as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
    {
        self.send_messages(
            signer,
            NonEmpty::new_unchecked(vec![msg]),
            gas_opt,
            chain_id,
        )
        .await
    }

    /// Create, sign, and broadcast a transaction with a single message, with
    /// terminal prompt for confirmation.
    ///
    /// Returns `None` if the prompt is denied.
    async fn send_message_with_confirmation<S, F>(
        &self,
        signer: &mut S,
        msg: Message,
        gas_opt: GasOption,
        chain_id: &str,
        confirm_fn: F,
    ) -> Result<Option<BroadcastTxOutcome>, <Self as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
        F: Fn(&Tx) -> Result<bool, <Self as BroadcastClient>::Error> + Send + Sync,
    {
        self.send_messages_with_confirmation(
            signer,
            NonEmpty::new_unchecked(vec![msg]),
            gas_opt,
            chain_id,
            confirm_fn,
        )
        .await
    }

    /// Create, sign, and broadcast a transaction with the given messages,
    /// without terminal prompt for confirmation.
    ///
    /// If you need the prompt confirmation, use `send_messages_with_confirmation`.
    async fn send_messages<S>(
        &self,
        signer: &mut S,
        msgs: NonEmpty<Vec<Message>>,
        gas_opt: GasOption,
        chain_id: &str,
    ) -> Result<BroadcastTxOutcome, <Self as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
    {
        self.send_messages_with_confirmation(signer, msgs, gas_opt, chain_id, no_confirmation)
            .await
            .map(Option::unwrap)
    }

    /// Create, sign, and broadcast a transaction with the given messages, with
    /// terminal prompt for confirmation.
    ///
    /// Returns `None` if the prompt is denied.
    async fn send_messages_with_confirmation<S, F>(
        &self,
        signer: &mut S,
        msgs: NonEmpty<Vec<Message>>,
        gas_opt: GasOption,
        chain_id: &str,
        confirm_fn: F,
    ) -> Result<Option<BroadcastTxOutcome>, <Self as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
        F: Fn(&Tx) -> Result<bool, <Self as BroadcastClient>::Error> + Send + Sync,
    {
        // If gas limit is not provided, simulate
        let gas_limit = match gas_opt {
            GasOption::Simulate {
                flat_increase,
                scale,
            } => {
                let unsigned_tx = signer.unsigned_transaction(msgs.clone(), chain_id)?;
                match self.simulate(unsigned_tx).await? {
                    TxOutcome {
                        result: GenericResult::Ok(_),
                        gas_used,
                        ..
                    } => (gas_used as f64 * scale).ceil() as u64 + flat_increase,
                    TxOutcome {
                        result: GenericResult::Err(err),
                        ..
                    } => return Err(GasEstimateError(err).into()),
                }
            },
            GasOption::Predefined { gas_limit } => gas_limit,
        };

        let tx = signer.sign_transaction(msgs, chain_id, gas_limit)?;

        self.broadcast_tx_with_confirmation(tx, confirm_fn).await
    }

    /// Send a transaction with a single [`Message::Execute`](crate::Message::Execute).
    async fn execute<S, M>(
        &self,
        signer: &mut S,
        contract: Addr,
        msg: &M,
        gas_opt: GasOption,
        chain_id: &str,
    ) -> Result<BroadcastTxOutcome, <Self as BroadcastClient>::Error>
    where
        S: Signer + Send + Sync,
        M: Serialize + Send + Sync,
    {
        let msg = Message::execute(contract, msg)?;
        self.send_message(signer, msg, gas_opt, chain_id).await
    }
}

impl<C> BroadcastClientExt for C
where
    C: BroadcastClient + QueryClient + Send + Sync,
    <C as BroadcastClient>::Error:
        From<GasEstimateError> + From<StdError> + From<<C as QueryClient>::Error>,
{
}
