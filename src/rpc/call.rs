//! Dynamic method call construction and argument marshalling.

// self
use crate::_prelude::*;

/// One named remote operation plus its named arguments.
///
/// The method surface is determined by the server, so any name can be carried here; argument
/// names become wire parameter names, which is why positional arguments do not exist.
#[derive(Clone, Debug)]
pub struct MethodCall {
	pub(crate) method: String,
	pub(crate) args: BTreeMap<String, Value>,
}
impl MethodCall {
	/// Starts a call to the named remote method.
	pub fn new(method: impl Into<String>) -> Self {
		Self { method: method.into(), args: BTreeMap::new() }
	}

	/// Adds a named argument, replacing any previous value under the same name.
	pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.args.insert(name.into(), value.into());

		self
	}

	/// Remote method name the call targets.
	pub fn method(&self) -> &str {
		&self.method
	}

	/// Named arguments accumulated so far.
	pub fn args(&self) -> &BTreeMap<String, Value> {
		&self.args
	}
}

/// Flattens one argument value into its wire form.
///
/// The wire protocol only defines flat key to scalar-or-JSON-string parameters, so compound
/// values serialize to their JSON text while scalars pass through bare.
pub(crate) fn wire_parameter(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

pub(crate) fn marshal_args(args: &BTreeMap<String, Value>) -> BTreeMap<String, String> {
	args.iter().map(|(name, value)| (name.clone(), wire_parameter(value))).collect()
}
