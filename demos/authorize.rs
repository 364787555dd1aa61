//! Walks through the interactive three-legged handshake and persists the resulting access
//! credential for the `call_method` demo to reuse.

// std
use std::{
	env,
	io::{self, BufRead},
};
// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth1_rpc::{
	auth::ConsumerIdentity,
	flows::AuthorizationFlow,
	service::ServiceDescriptor,
	store::{CredentialStore, FileStore},
};

const TOKEN_PATH: &str = "oauth1-rpc.tok";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = env::args().skip(1);
	let consumer_key = args.next().unwrap_or_else(|| "demo-consumer-key".into());
	let consumer_secret = args.next().unwrap_or_else(|| "demo-consumer-secret".into());
	let service = match args.next() {
		Some(base) => ServiceDescriptor::new(Url::parse(&base)?)?,
		None => ServiceDescriptor::hosted(),
	};
	let flow =
		AuthorizationFlow::new(ConsumerIdentity::new(consumer_key, consumer_secret), service);
	let session = flow.begin_authorization(None).await?;

	println!("Visit {} and approve the request.", session.authorize_url);
	println!("Press return here once you have approved it.");

	let _ = io::stdin().lock().lines().next();

	let access = flow.complete_authorization(&session.request_credential).await?;
	let store = FileStore::new(TOKEN_PATH);

	store.save(access.clone()).await?;

	println!("Saved the access credential to {TOKEN_PATH}.");
	println!("Persisted form: {}.", access.to_wire_string());

	Ok(())
}
