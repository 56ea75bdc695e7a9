//! SObject Collections batches against a mock org.

use super::common::{mock_client, record_id, Account, Contact};
use busbar_sf_typed::rest::{ErrorKind, InsertOptions, SObject, UpdateOptions, MAX_COLLECTION_SIZE};
use chrono::NaiveDate;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, Request, ResponseTemplate};

/// Answers a collection insert with one successful result per record.
fn echo_ids(request: &Request) -> ResponseTemplate {
    let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
    let count = body["records"].as_array().map(Vec::len).unwrap_or(0);
    let results: Vec<Value> = (0..count)
        .map(|i| json!({"id": record_id("003", i), "success": true, "errors": []}))
        .collect();
    ResponseTemplate::new(200).set_body_json(results)
}

#[tokio::test]
async fn test_insert_reconciles_each_record_independently() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/composite/sobjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "success": true, "errors": []},
            {"success": false, "errors": [
                {"statusCode": "FIELD_CUSTOM_VALIDATION_EXCEPTION", "message": "Email required", "fields": ["Email"]}
            ]},
            {"id": "3", "success": true, "errors": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut contacts = vec![
        Contact::new("Grace", "Hopper"),
        Contact::new("Margaret", "Hamilton"),
        Contact::new("Hedy", "Lamarr"),
    ];
    let results = client
        .insert(&mut contacts, InsertOptions::default().all_or_none(false))
        .await
        .unwrap();

    assert_eq!(contacts[0].id(), Some("1"));
    assert!(contacts[0].modified().is_empty());

    assert_eq!(contacts[1].id(), None);
    assert_eq!(contacts[1].modified_fields(), vec!["first_name", "last_name"]);
    assert_eq!(results[1].errors[0].fields, vec!["Email"]);

    assert_eq!(contacts[2].id(), Some("3"));
    assert!(contacts[2].modified().is_empty());
}

#[tokio::test]
async fn test_insert_without_set_id_only_clears_modified() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/composite/sobjects"))
        .respond_with(echo_ids)
        .mount(&server)
        .await;

    let mut accounts = vec![Account::new("Acme")];
    client
        .insert(&mut accounts, InsertOptions::default().set_id(false))
        .await
        .unwrap();

    assert_eq!(accounts[0].id(), None);
    assert!(accounts[0].modified().is_empty());
}

#[tokio::test]
async fn test_caller_chunks_large_inserts() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/composite/sobjects"))
        .respond_with(echo_ids)
        .expect(2)
        .mount(&server)
        .await;

    let mut contacts: Vec<Contact> = (0..250)
        .map(|i| Contact::new("Test", &format!("Contact {i}")))
        .collect();

    let err = client
        .insert(&mut contacts, InsertOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::BatchTooLarge { size: 250, .. }));
    assert!(err.is_precondition());

    for chunk in contacts.chunks_mut(MAX_COLLECTION_SIZE) {
        let results = client.insert(chunk, InsertOptions::default()).await.unwrap();
        assert!(results.iter().all(|r| r.success));
    }
    assert!(contacts.iter().all(|c| c.id().is_some() && c.modified().is_empty()));
}

#[tokio::test]
async fn test_update_sends_only_modified_fields() {
    let (server, client) = mock_client().await;
    let id = record_id("003", 7);

    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/composite/sobjects"))
        .and(body_json(json!({
            "allOrNone": true,
            "records": [{
                "attributes": {"type": "Contact"},
                "Email": "grace@example.com",
                "Birthdate": "1906-12-09",
                "Id": id
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": id, "success": true, "errors": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut loaded: Contact = serde_json::from_value(json!({
        "attributes": {"type": "Contact"},
        "Id": id,
        "FirstName": "Grace",
        "LastName": "Hopper",
        "Email": null
    }))
    .unwrap();
    loaded.set_email("grace@example.com");
    loaded.set_birthdate(NaiveDate::from_ymd_opt(1906, 12, 9).unwrap());

    let mut contacts = vec![loaded];
    client
        .update(&mut contacts, UpdateOptions::default())
        .await
        .unwrap();
    assert!(contacts[0].modified().is_empty());
}

#[tokio::test]
async fn test_update_requires_ids_before_io() {
    let (server, client) = mock_client().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut contacts = vec![Contact::new("No", "Id")];
    let err = client
        .update(&mut contacts, UpdateOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingRecordId { index: 0 }));
}

#[tokio::test]
async fn test_upsert_and_delete() {
    let (server, client) = mock_client().await;
    let created = record_id("001", 1);
    let existing = record_id("001", 2);

    Mock::given(method("PATCH"))
        .and(path(
            "/services/data/v62.0/composite/sobjects/Account/External_Key__c",
        ))
        .and(body_json(json!({
            "allOrNone": false,
            "records": [
                {"attributes": {"type": "Account"}, "Name": "Acme", "External_Key__c": "ACME"},
                {"attributes": {"type": "Account"}, "Industry": "Energy", "External_Key__c": "GLOBEX"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": created, "success": true, "errors": [], "created": true},
            {"id": existing, "success": true, "errors": [], "created": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/services/data/v62.0/composite/sobjects"))
        .and(query_param("ids", format!("{created},{existing}")))
        .and(query_param("allOrNone", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": created, "success": true, "errors": []},
            {"id": existing, "success": true, "errors": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut acme = Account::new("Acme");
    acme.set_external_key("ACME");
    let mut globex = Account::default();
    globex.external_key = Some("GLOBEX".to_string());
    globex.set_industry("Energy");
    let mut accounts = vec![acme, globex];

    let results = client
        .upsert(
            &mut accounts,
            "External_Key__c",
            UpdateOptions::default().all_or_none(false),
        )
        .await
        .unwrap();
    assert_eq!(results[0].created, Some(true));
    assert_eq!(results[1].created, Some(false));
    assert_eq!(accounts[0].id(), Some(created.as_str()));
    assert_eq!(accounts[1].id(), Some(existing.as_str()));

    let deleted = client.delete(&accounts, true).await.unwrap();
    assert!(deleted.iter().all(|r| r.success));
    assert_eq!(accounts[0].id(), Some(created.as_str()));
}
