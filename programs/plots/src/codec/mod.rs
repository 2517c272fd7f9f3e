pub mod blueprint;
pub mod minting_blob;

pub use blueprint::{pack, unpack, Field, LAYOUT};
pub use minting_blob::{atoi, format_minting_blob, parse_minting_blob, MintingBlob};
