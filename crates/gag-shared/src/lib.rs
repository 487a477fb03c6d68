//! # Gag Shared
//!
//! Wire types exchanged with clients: view snapshots, request bodies and the
//! response envelope. Depends only on `gag-core`, so it can be compiled for a
//! WASM client as well.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
