//
//  docusign-client
//  tests/admin_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests of the admin operations against a mock DocuSign server.

use docusign_client::api::{AccountUser, Admin, ApiError, DocuSignClient, NewUser, Session};
use docusign_client::auth::Credentials;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const TOKEN: &str = "tok";

fn admin(server: &ServerGuard) -> Admin {
    let client = DocuSignClient::new(server.url()).unwrap();
    Admin::init(client, "42", format!("{}/accounts/42", server.url()), TOKEN)
}

fn base_url(server: &ServerGuard) -> String {
    format!("{}/accounts/42", server.url())
}

#[tokio::test]
async fn org_account_info_is_returned_unchanged() {
    let mut server = Server::new_async().await;
    let body = json!({"accountName": "Acme", "accountIdGuid": "guid-1"});
    let mock = server
        .mock("GET", "/accounts/42")
        .match_header("authorization", "bearer tok")
        .match_header("x-docusign-base-url", Matcher::Missing)
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let info = admin(&server).get_org_account_info().await.unwrap();

    mock.assert_async().await;
    assert_eq!(info, body);
}

#[tokio::test]
async fn org_account_info_forwards_provider_error_on_success_status() {
    let mut server = Server::new_async().await;
    let body = json!({"errorCode": "INVALID_ACCOUNT_ID", "message": "bad"});
    server
        .mock("GET", "/accounts/42")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let err = admin(&server).get_org_account_info().await.unwrap_err();

    assert_eq!(err.provider().unwrap().raw(), &body);
    assert_eq!(err.to_json(), body);
}

#[tokio::test]
async fn user_list_is_unwrapped() {
    let mut server = Server::new_async().await;
    let base = base_url(&server);
    let mock = server
        .mock("GET", "/accounts/42/users")
        .match_query(Matcher::UrlEncoded("additional_info".into(), "true".into()))
        .match_header("x-docusign-base-url", base.as_str())
        .with_status(200)
        .with_body(r#"{"users":[{"userId":"u1","userName":"Ann Lee"},{"userId":"u2"}],"resultSetSize":"2"}"#)
        .create_async()
        .await;

    let users = admin(&server).get_user_list().await.unwrap();

    mock.assert_async().await;
    let ids: Vec<_> = users.iter().filter_map(|u| u.user_id.as_deref()).collect();
    assert_eq!(ids, ["u1", "u2"]);
    assert_eq!(users[0].user_name.as_deref(), Some("Ann Lee"));
}

#[tokio::test]
async fn user_list_forwards_raw_provider_error() {
    let mut server = Server::new_async().await;
    let body = json!({"errorCode": "USER_AUTHENTICATION_FAILED", "message": "expired"});
    server
        .mock("GET", "/accounts/42/users")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(body.to_string())
        .create_async()
        .await;

    let err = admin(&server).get_user_list().await.unwrap_err();

    assert_eq!(err.to_json(), body);
}

#[tokio::test]
async fn add_users_sends_derived_entries() {
    let mut server = Server::new_async().await;
    let base = base_url(&server);
    let mock = server
        .mock("POST", "/accounts/42/users")
        .match_header("x-docusign-base-url", base.as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "newUsers": [{
                "firstName": "Ann",
                "lastName": "Lee",
                "userName": "Ann Lee",
                "email": "ann@example.com",
                "password": "pw",
                "userSettings": [{"name": "canSendEnvelope", "value": true}]
            }]
        })))
        .with_status(201)
        .with_body(r#"{"newUsers":[{"userId":"u9"}]}"#)
        .create_async()
        .await;

    let users = [NewUser {
        first: "Ann".to_string(),
        last: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        password: "pw".to_string(),
    }];
    let response = admin(&server).add_users(&users).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["newUsers"][0]["userId"], "u9");
}

#[tokio::test]
async fn delete_users_sends_only_ids() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/accounts/42/users")
        .match_body(Matcher::Json(json!({"users": [{"userId": "u1"}, {"userId": "u2"}]})))
        .with_status(200)
        .with_body(r#"{"users":[{"userId":"u1"},{"userId":"u2"}]}"#)
        .create_async()
        .await;

    let mut first = AccountUser::with_id("u1");
    first.email = Some("ann@example.com".to_string());
    let users = [first, AccountUser::with_id("u2")];
    admin(&server).delete_users(&users).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn templates_are_returned_unchanged() {
    let mut server = Server::new_async().await;
    let body = json!({"envelopeTemplates": [{"templateId": "t1", "name": "NDA"}]});
    let mock = server
        .mock("GET", "/accounts/42/templates")
        .match_header("x-docusign-base-url", Matcher::Missing)
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let templates = admin(&server).get_templates().await.unwrap();

    mock.assert_async().await;
    assert_eq!(templates, body);
}

#[tokio::test]
async fn templates_error_is_simplified() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/accounts/42/templates")
        .with_status(400)
        .with_body(r#"{"errorCode":"X","message":"Y"}"#)
        .create_async()
        .await;

    let err = admin(&server).get_templates().await.unwrap_err();

    assert!(matches!(err, ApiError::Simplified(ref msg) if msg == "X: Y"));
    assert_eq!(err.to_json(), json!({"error": "X: Y"}));
}

#[tokio::test]
async fn plan_derives_envelopes_left_and_name() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/accounts/42")
        .with_status(200)
        .with_body(
            r#"{"planName":"Business","billingPeriodEnvelopesAllowed":"100","billingPeriodEnvelopesSent":"30"}"#,
        )
        .create_async()
        .await;

    let plan = admin(&server).get_plan().await.unwrap();

    assert_eq!(plan.envelopes_left(), Some(70));
    assert_eq!(plan.name(), Some("Business"));
    assert_eq!(plan.get("planName"), Some(&json!("Business")));
    assert!(!plan.is_unlimited());
}

#[tokio::test]
async fn plan_without_allowance_is_unlimited() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/accounts/42")
        .with_status(200)
        .with_body(r#"{"planName":"Enterprise","billingPeriodEnvelopesSent":"12"}"#)
        .create_async()
        .await;

    let plan = admin(&server).get_plan().await.unwrap();

    assert_eq!(plan.envelopes_left(), Some(-1));
    assert!(plan.is_unlimited());
}

#[tokio::test]
async fn plan_derivation_is_idempotent() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/accounts/42")
        .with_status(200)
        .with_body(
            r#"{"planName":"Std","billingPeriodEnvelopesAllowed":50,"billingPeriodEnvelopesSent":5}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let admin = admin(&server);
    let first = admin.get_plan().await.unwrap();
    let second = admin.get_plan().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.envelopes_left(), Some(45));
}

#[tokio::test]
async fn session_binds_admin_to_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/42/templates")
        .match_header("authorization", "bearer tok")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = DocuSignClient::new(server.url()).unwrap();
    let session = Session::new(client, Credentials::new("42", base_url(&server), TOKEN));

    assert_eq!(session.admin().account_id(), "42");
    session.admin().get_templates().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn org_account_info_is_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/42")
        .with_status(200)
        .with_body(r#"{"accountName":"Acme","currentPlanId":"p-1"}"#)
        .expect(2)
        .create_async()
        .await;

    let admin = admin(&server);
    let first = admin.get_org_account_info().await.unwrap();
    let second = admin.get_org_account_info().await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn user_list_is_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/42/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"users":[{"userId":"u1","email":"ann@example.com","userStatus":"active"}]}"#)
        .expect(2)
        .create_async()
        .await;

    let admin = admin(&server);
    let first = admin.get_user_list().await.unwrap();
    let second = admin.get_user_list().await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[tokio::test]
async fn templates_are_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/42/templates")
        .with_status(200)
        .with_body(r#"{"envelopeTemplates":[{"templateId":"t1","name":"NDA"}]}"#)
        .expect(2)
        .create_async()
        .await;

    let admin = admin(&server);
    let first = admin.get_templates().await.unwrap();
    let second = admin.get_templates().await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn templates_error_is_simplified_the_same_way_twice() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/42/templates")
        .with_status(400)
        .with_body(r#"{"errorCode":"X","message":"Y"}"#)
        .expect(2)
        .create_async()
        .await;

    let admin = admin(&server);
    let first = admin.get_templates().await.unwrap_err().to_json();
    let second = admin.get_templates().await.unwrap_err().to_json();

    mock.assert_async().await;
    assert_eq!(first, json!({"error": "X: Y"}));
    assert_eq!(first, second);
}
