mod address;
mod app;
mod binary;
mod builder;
mod bytes;
mod client;
mod encoded_bytes;
mod encoders;
mod error;
mod hash;
mod math;
mod non_empty;
mod outcome;
mod query;
mod result;
mod serializers;
mod signer;
mod tx;

pub use {
    address::*, app::*, binary::*, builder::*, bytes::*, client::*, encoded_bytes::*, encoders::*,
    error::*, hash::*, math::*, non_empty::*, outcome::*, query::*, result::*, serializers::*,
    signer::*, tx::*,
};

// ---------------------------- contract interfaces ----------------------------

pub mod account;
pub mod poll;

// ---------------------------------- testing ----------------------------------

mod testing;

pub use testing::*;

// -------------------------------- re-exports ---------------------------------

pub use serde_json::{json, Value as Json};
