//! Parley Common - Shared types for the Parley chat daemon and client.

pub mod analysis;
pub mod games;
pub mod rpc;

pub use analysis::*;
pub use games::*;
pub use rpc::*;
