//! Loads the persisted access credential and invokes one named remote method with `name=value`
//! arguments supplied on the command line.

// std
use std::{collections::BTreeMap, env};
// crates.io
use color_eyre::{Result, eyre::eyre};
use serde_json::Value;
// self
use oauth1_rpc::{
	auth::ConsumerIdentity,
	rpc::RpcClient,
	service::ServiceDescriptor,
	store::{CredentialStore, FileStore},
};

const TOKEN_PATH: &str = "oauth1-rpc.tok";
const USAGE: &str = "Usage: call_method <consumer-key> <consumer-secret> <method> [name=value]...";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = env::args().skip(1);
	let consumer_key = args.next().ok_or_else(|| eyre!(USAGE))?;
	let consumer_secret = args.next().ok_or_else(|| eyre!(USAGE))?;
	let method = args.next().ok_or_else(|| eyre!(USAGE))?;
	let mut call_args = BTreeMap::new();

	for pair in args {
		let (name, value) = pair
			.split_once('=')
			.ok_or_else(|| eyre!("Arguments must look like name=value, got {pair:?}."))?;

		call_args.insert(name.to_owned(), Value::String(value.to_owned()));
	}

	let credential = FileStore::new(TOKEN_PATH)
		.load()
		.await?
		.ok_or_else(|| eyre!("No access credential at {TOKEN_PATH}; run the authorize demo first."))?;
	let client = RpcClient::new(
		ConsumerIdentity::new(consumer_key, consumer_secret),
		ServiceDescriptor::hosted(),
		credential,
	);
	let value = client.invoke(&method, call_args).await?;

	println!("{}", serde_json::to_string_pretty(&value)?);

	Ok(())
}
