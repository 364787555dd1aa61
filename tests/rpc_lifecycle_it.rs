// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use oauth1_rpc::{
	_preludet::*,
	auth::Credential,
	rpc::MethodCall,
	service::ServiceDescriptor,
};

const CONSUMER_KEY: &str = "c1361963e1c2475f";
const CONSUMER_SECRET: &str = "2cec36b84c7811c2";

fn build_client(server: &MockServer) -> oauth1_rpc::rpc::ReqwestRpcClient {
	let service = ServiceDescriptor::new(
		Url::parse(&server.base_url()).expect("Mock server URL should parse successfully."),
	)
	.expect("Mock server URL should satisfy endpoint validation.");

	build_test_rpc_client(
		service,
		CONSUMER_KEY,
		CONSUMER_SECRET,
		Credential::new("access-tok", "access-sec"),
	)
}

// Mirrors the create/read/delete lifecycle a real deployment exercises: a freshly created
// source is visible when listing by its identifier, and invisible again after removal.
#[tokio::test]
async fn source_lifecycle_round_trip() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/external/v2/json/createSource/");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"result\":\"OK\",\"response\":{\"source_uuid\":\"src-1\"}}");
		})
		.await;
	let created = client
		.call(
			MethodCall::new("createSource")
				.arg("name", "test_src_ticker")
				.arg("type_uuid", "3c554dfe-f094-5f7e-0013-000000000010")
				.arg("parameters", json!({"url": "http://news.example.com"})),
		)
		.await
		.expect("Source creation should succeed against the mock.");
	let source_uuid = created["source_uuid"]
		.as_str()
		.expect("Creation payload should carry the new identifier.")
		.to_owned();

	create_mock.assert_async().await;

	assert_eq!(source_uuid, "src-1");

	// While the source exists, a filtered listing returns exactly one matching entry.
	let mut list_one_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/external/v2/json/getSources/");
			then.status(200).header("content-type", "application/json").body(
				"{\"result\":\"OK\",\"response\":[{\"source_uuid\":\"src-1\",\"name\":\"test_src_ticker\"}]}",
			);
		})
		.await;
	let listed = client
		.invoke(
			"getSources",
			BTreeMap::from_iter([("source_uuid".to_owned(), json!(source_uuid))]),
		)
		.await
		.expect("Filtered listing should succeed against the mock.");
	let entries = listed.as_array().expect("Listing payload should be an array.");

	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0]["source_uuid"], json!("src-1"));

	list_one_mock.delete_async().await;

	let remove_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/external/v2/json/removeSource/");
			then.status(200).header("content-type", "application/json").body("{\"result\":\"OK\"}");
		})
		.await;
	let removed = client
		.call(MethodCall::new("removeSource").arg("source_uuid", source_uuid.clone()))
		.await
		.expect("Source removal should succeed against the mock.");

	remove_mock.assert_async().await;

	assert_eq!(removed, Value::Null);

	// After removal, the same filtered listing comes back empty.
	let _list_empty_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/external/v2/json/getSources/");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"result\":\"OK\",\"response\":[]}");
		})
		.await;
	let relisted = client
		.invoke(
			"getSources",
			BTreeMap::from_iter([("source_uuid".to_owned(), json!(source_uuid))]),
		)
		.await
		.expect("Re-listing should succeed against the mock.");
	let entries = relisted.as_array().expect("Re-listing payload should be an array.");

	assert!(entries.is_empty());
}
