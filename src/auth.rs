//! Auth-domain identity and credential models.

pub mod consumer;
pub mod credential;

pub use consumer::*;
pub use credential::*;
