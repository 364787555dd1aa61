//! Optional observability helpers for signed service calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_rpc.call` with the `call`
//!   (round-trip kind) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth1_rpc_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Signed round-trip kinds observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Handshake call obtaining a request credential.
	RequestToken,
	/// Handshake call exchanging a request credential for an access credential.
	AccessToken,
	/// Business RPC method invocation.
	Invoke,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::RequestToken => "request_token",
			CallKind::AccessToken => "access_token",
			CallKind::Invoke => "invoke",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a signed round trip.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
