//! CT v1 log API client for ctwatch
//!
//! Fetches signed tree heads and inclusion proofs over the RFC 6962 HTTP
//! API. Frozen (readonly/retired) logs are never queried; their fixed
//! final tree head comes from the log directory instead.

pub mod api;
pub mod client;
pub mod error;

pub use api::{ProofByHashResponse, SignedTreeHeadResponse};
pub use client::LogClient;
pub use error::{Error, Result};
