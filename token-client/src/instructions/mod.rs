mod approve;
mod approve_checked;
mod burn;
mod burn_checked;
mod close_account;
mod freeze_account;
mod internal_utils;
mod mint_to;
mod mint_to_checked;
mod revoke;
mod thaw_account;
mod transfer;
mod transfer_checked;

pub use approve::*;
pub use approve_checked::*;
pub use burn::*;
pub use burn_checked::*;
pub use close_account::*;
pub use freeze_account::*;
pub use mint_to::*;
pub use mint_to_checked::*;
pub use revoke::*;
pub use thaw_account::*;
pub use transfer::*;
pub use transfer_checked::*;
