mod key;
mod keystore;
mod poll;
mod rpc;
mod signer;

pub use {key::*, keystore::*, poll::*, rpc::*, signer::*};
