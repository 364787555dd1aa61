// self
use crate::{_prelude::*, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder wrapping every signed round trip.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth1_rpc.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> CallSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CallSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CallSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`CallSpan::entered`].
pub struct CallSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CallSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CallSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn call_span_noop_without_tracing() {
		let _guard = CallSpan::new(CallKind::RequestToken, "test").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(CallKind::Invoke, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
