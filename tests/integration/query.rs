//! Query composition and typed retrieval end to end.

use super::common::{mock_client, Account, Contact};
use busbar_sf_typed::rest::ErrorKind;
use busbar_sf_typed::soql::{
    build_query, build_query_object, compose_query, Condition, FieldResolver, ForClause, GroupBy,
    Literal, OrderBy, QueryParams, SoqlFunction,
};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_full_clause_example() {
    let soql = build_query::<Account, _>(|f| {
        Ok(QueryParams::new()
            .select([f.field("name")?])
            .filter(Condition::and([
                Condition::eq(f.field("name")?, "Acme"),
                Condition::gt(f.field("annual_revenue")?, 1000),
            ]))
            .limit(10))
    })
    .unwrap();
    assert_eq!(
        soql,
        "SELECT Name FROM Account WHERE Name = 'Acme' AND AnnualRevenue > 1000 LIMIT 10"
    );
}

#[test]
fn test_select_dedup_and_negated_group() {
    let soql = build_query::<Account, _>(|f| {
        let name = f.field("name")?;
        let industry = f.field("industry")?;
        Ok(QueryParams::new()
            .select([name.clone(), industry.clone(), name.clone()])
            .filter(!Condition::and([
                Condition::eq(name, "O'Brien"),
                Condition::in_list(industry, ["Energy", "Utilities"]),
            ])))
    })
    .unwrap();
    assert_eq!(
        soql,
        "SELECT Name, Industry FROM Account \
         WHERE NOT (Name = 'O\\'Brien' AND Industry IN ('Energy', 'Utilities'))"
    );
}

#[test]
fn test_compose_is_deterministic_and_matches_build_query() {
    let build = |f: &FieldResolver| -> busbar_sf_typed::soql::Result<QueryParams> {
        Ok(QueryParams::new()
            .select(f.select(&["id", "last_name"])?)
            .select([f.parent("account")?.parent("owner")?.field("name")?])
            .filter(Condition::or([
                Condition::ge(f.field("birthdate")?, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
                Condition::includes(f.field("hobbies")?, ["Chess", "Go"]),
            ]))
            .order_by(OrderBy::desc(f.field("birthdate")?).nulls_last())
            .limit(200)
            .offset(0)
            .for_clause(ForClause::View))
    };

    let spec = build_query_object::<Contact, _>(build).unwrap();
    let first = compose_query(&spec).unwrap();
    assert_eq!(first, compose_query(&spec).unwrap());
    assert_eq!(first, build_query::<Contact, _>(build).unwrap());
    assert_eq!(
        first,
        "SELECT Id, LastName, Account.Owner.Name FROM Contact \
         WHERE Birthdate >= 1990-01-01 OR Hobbies__c INCLUDES ('Chess', 'Go') \
         ORDER BY Birthdate DESC NULLS LAST LIMIT 200 OFFSET 0 FOR VIEW"
    );
}

#[test]
fn test_aggregate_with_rollup() {
    let soql = build_query::<Account, _>(|f| {
        let industry = f.field("industry")?;
        let count = f.count();
        Ok(QueryParams::new()
            .select([industry.clone()])
            .select([f.function(SoqlFunction::Avg, "annual_revenue")?.with_alias("avgRevenue")])
            .group_by(
                GroupBy::new([industry])
                    .rollup()
                    .having(Condition::gt(count, 2)),
            ))
    })
    .unwrap();
    assert_eq!(
        soql,
        "SELECT Industry, AVG(AnnualRevenue) avgRevenue FROM Account \
         GROUP BY ROLLUP(Industry) HAVING COUNT() > 2"
    );
}

#[test]
fn test_composition_errors() {
    let empty_in = build_query::<Account, _>(|f| {
        Ok(QueryParams::new()
            .select([f.field("name")?])
            .filter(Condition::in_list(f.field("industry")?, Vec::<String>::new())))
    });
    assert!(matches!(
        empty_in.unwrap_err().kind,
        busbar_sf_typed::soql::ErrorKind::EmptyListOperand { .. }
    ));

    let no_select = build_query::<Account, _>(|_| Ok(QueryParams::new()));
    assert_eq!(
        no_select.unwrap_err().kind,
        busbar_sf_typed::soql::ErrorKind::MissingSelectFields
    );

    let bad_date = Literal::date_literal("SOMETIME");
    assert!(bad_date.is_err());
}

#[tokio::test]
async fn test_retrieve_with_child_subquery() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param(
            "q",
            "SELECT Id, Name, (SELECT LastName FROM Contacts ORDER BY LastName ASC) \
             FROM Account WHERE Industry = 'Energy'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": {"type": "Account", "url": "/services/data/v62.0/sobjects/Account/001xx0000000000001"},
                "Id": "001xx0000000000001",
                "Name": "Acme",
                "Contacts": {"totalSize": 1, "done": true, "records": [{"LastName": "Hopper"}]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let accounts: Vec<Account> = client
        .retrieve(|f| {
            Ok(QueryParams::new()
                .select(f.select(&["id", "name"])?)
                .select([f.subquery("contacts", |c| {
                    Ok(QueryParams::new()
                        .select([c.field("last_name")?])
                        .order_by(OrderBy::asc(c.field("last_name")?)))
                })?])
                .filter(Condition::eq(f.field("industry")?, "Energy")))
        })
        .await
        .unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn test_invalid_field_fails_before_io() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .retrieve::<Contact, _>(|f| Ok(QueryParams::new().select([f.parent("email")?.field("name")?])))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Query(_)));
}

#[tokio::test]
async fn test_remote_query_error_is_propagated() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([{
            "errorCode": "MALFORMED_QUERY",
            "message": "unexpected token: 'FORM'"
        }])))
        .mount(&server)
        .await;

    let err = client
        .query::<serde_json::Value>("SELECT Id FORM Account")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Client(ref msg) if msg.contains("MALFORMED_QUERY")));
}
