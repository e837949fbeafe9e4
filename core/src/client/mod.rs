//! Request layer used by consumers of the HTTP backend.
//!
//! Every call goes through a [`RetryPolicy`] and resolves to local mock data
//! once the policy is exhausted, so callers always get a usable value.

pub mod backend_client;
pub mod error;
pub mod retry;

pub use backend_client::{BackendClient, VideoOutcome};
pub use error::ClientError;
pub use retry::RetryPolicy;
