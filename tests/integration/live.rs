//! Smoke tests against a real org. Ignored by default; they need
//! `SF_INSTANCE_URL` and `SF_ACCESS_TOKEN`.

use super::common::{init_tracing, Account};
use busbar_sf_typed::rest::{InsertOptions, SObject, SalesforceRestClient, UpdateOptions};
use busbar_sf_typed::soql::{Condition, QueryParams};

fn live_client() -> SalesforceRestClient {
    init_tracing();
    SalesforceRestClient::from_env()
        .expect("SF_INSTANCE_URL and SF_ACCESS_TOKEN must be set for live tests")
}

#[tokio::test]
#[ignore]
async fn test_live_limits() {
    let client = live_client();
    let limits = client.limits().await.expect("limits should succeed");
    assert!(limits.contains_key("DailyApiRequests"));
    assert!(client.api_usage().is_some());
}

#[tokio::test]
#[ignore]
async fn test_live_account_round_trip() {
    let client = live_client();
    let name = format!("busbar-sf-typed {}", chrono::Utc::now().timestamp_millis());

    let mut accounts = vec![Account::new(&name)];
    let inserted = client
        .insert(&mut accounts, InsertOptions::default())
        .await
        .expect("insert should succeed");
    assert!(inserted[0].success, "{:?}", inserted[0].errors);
    let id = accounts[0].id().map(str::to_string).expect("id written back");

    accounts[0].set_industry("Energy");
    let updated = client
        .update(&mut accounts, UpdateOptions::default())
        .await
        .expect("update should succeed");
    assert!(updated[0].success, "{:?}", updated[0].errors);

    let found: Vec<Account> = client
        .retrieve(|f| {
            Ok(QueryParams::new()
                .select(f.select(&["id", "name", "industry"])?)
                .filter(Condition::eq(f.field("id")?, id.as_str())))
        })
        .await
        .expect("retrieve should succeed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].industry.as_deref(), Some("Energy"));

    let deleted = client
        .delete(&accounts, true)
        .await
        .expect("delete should succeed");
    assert!(deleted[0].success);
}
