#![cfg_attr(not(test), no_std)]

//! Fixed-layout wire codec for token program instruction payloads.
//!
//! Every instruction kind has a declarative field table; the encoded form is
//! always `[discriminant, fields...]` at fixed offsets with a span known
//! ahead of encoding. The codec knows nothing about accounts or signers.

extern crate alloc;

mod error;
mod field;
mod kind;
mod table;

pub use error::*;
pub use field::*;
pub use kind::*;
pub use table::*;
