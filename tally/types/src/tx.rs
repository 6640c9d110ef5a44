use {
    crate::{Addr, ByteArray, Json, JsonSerExt, NonEmpty, StdResult},
    serde::{Deserialize, Serialize},
};

/// A transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tx {
    pub sender: Addr,
    pub gas_limit: u64,
    pub msgs: NonEmpty<Vec<Message>>,
    /// A secp256k1 signature over the sender, chain ID, nonce, and messages.
    pub credential: ByteArray<64>,
}

/// A transaction but without a gas limit or credential.
///
/// This is for using in gas simulation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTx {
    pub sender: Addr,
    pub msgs: NonEmpty<Vec<Message>>,
}

/// A message.
///
/// The chain knows more message types than this. The client only ever submits
/// contract calls, so only that variant is defined here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Execute a contract.
    Execute(MsgExecute),
}

impl Message {
    pub fn execute<M>(contract: Addr, msg: &M) -> StdResult<Self>
    where
        M: Serialize,
    {
        Ok(MsgExecute {
            contract,
            msg: msg.to_json_value()?,
        }
        .into())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MsgExecute {
    pub contract: Addr,
    pub msg: Json,
}

macro_rules! impl_into_message {
    ($variant:ident, $msg:ty) => {
        impl From<$msg> for Message {
            #[inline]
            fn from(msg: $msg) -> Self {
                Self::$variant(msg)
            }
        }
    };
    ($($variant:ident => $msg:ty),+ $(,)?) => {
        $(
            impl_into_message!($variant, $msg);
        )+
    };
}

impl_into_message! {
    Execute => MsgExecute,
}
