//
//  docusign-client
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/04.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth2 Password Grant
//!
//! DocuSign's legacy OAuth2 endpoints issue an access token in exchange for
//! an integrator key (the OAuth client id), the user's email and password.
//!
//! | Step | HTTP | URL |
//! |------|------|-----|
//! | Token | POST (form) | `{apiUrl}/oauth2/token` |
//! | Account lookup | GET | `{apiUrl}/login_information` |
//! | Revoke | POST (form) | `{apiUrl}/oauth2/revoke` |
//!
//! OAuth failures come back as `{"error": "...", "error_description": "..."}`
//! rather than DocuSign's `errorCode` shape; they are reported as
//! [`ApiError::Simplified`].

use serde::Deserialize;
use serde_json::Value;

use super::Credentials;
use crate::api::client::{build_headers, DocuSignClient};
use crate::api::common::{ApiError, RequestSpec};

/// Response of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

/// One account the user can access, from `login_information`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAccount {
    #[serde(default)]
    pub name: Option<String>,

    pub account_id: String,

    pub base_url: String,

    /// `"true"` for the user's default account
    #[serde(default)]
    pub is_default: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl LoginAccount {
    pub fn is_default(&self) -> bool {
        self.is_default
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true"))
    }
}

/// Response of `login_information`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInformation {
    #[serde(default)]
    pub login_accounts: Vec<LoginAccount>,
}

impl LoginInformation {
    /// The account flagged as default, or the first one listed.
    pub fn default_account(&self) -> Option<&LoginAccount> {
        self.login_accounts
            .iter()
            .find(|account| account.is_default())
            .or_else(|| self.login_accounts.first())
    }
}

/// `POST {apiUrl}/oauth2/token` (password grant)
pub fn token_request(api_url: &str, integrator_key: &str, email: &str, password: &str) -> RequestSpec {
    RequestSpec::post("Get OAuth Token", format!("{}/oauth2/token", api_url))
        .header("Accept", "application/json")
        .form([
            ("grant_type", "password"),
            ("client_id", integrator_key),
            ("username", email),
            ("password", password),
            ("scope", "api"),
        ])
}

/// `GET {apiUrl}/login_information`
pub fn login_information_request(api_url: &str, access_token: &str) -> RequestSpec {
    RequestSpec::get("Get Login Information", format!("{}/login_information", api_url))
        .headers(build_headers(access_token, None))
}

/// `POST {apiUrl}/oauth2/revoke`
pub fn revoke_request(api_url: &str, access_token: &str) -> RequestSpec {
    RequestSpec::post("Revoke OAuth Token", format!("{}/oauth2/revoke", api_url))
        .header("Accept", "application/json")
        .form([("token", access_token)])
}

/// Extracts the access token from a token endpoint response.
pub fn parse_token(body: Value) -> Result<String, ApiError> {
    let token: TokenResponse =
        serde_json::from_value(body).map_err(|e| ApiError::decode("invalid token response", e))?;

    match token.access_token {
        Some(access_token) if !access_token.is_empty() => Ok(access_token),
        _ => {
            let error = token.error.unwrap_or_else(|| "invalid_response".to_string());
            Err(ApiError::Simplified(match token.error_description {
                Some(description) => format!("{}: {}", error, description),
                None => error,
            }))
        }
    }
}

/// Authenticates and resolves the default account.
///
/// # Parameters
///
/// * `client` - The API client for the target environment
/// * `integrator_key` - The DocuSign integrator key (OAuth client id)
/// * `email` - The user's login email
/// * `password` - The user's password
///
/// # Errors
///
/// - Transport and provider errors from either request
/// - [`ApiError::Simplified`] if the token endpoint rejects the grant
/// - [`ApiError::Decode`] if the user has no accounts
pub async fn login(
    client: &DocuSignClient,
    integrator_key: &str,
    email: &str,
    password: &str,
) -> Result<Credentials, ApiError> {
    let body = client
        .execute(&token_request(client.api_url(), integrator_key, email, password))
        .await?;
    let access_token = parse_token(body)?;

    let body = client
        .execute(&login_information_request(client.api_url(), &access_token))
        .await?;
    let info: LoginInformation = serde_json::from_value(body)
        .map_err(|e| ApiError::decode("invalid login information", e))?;

    let account = info
        .default_account()
        .ok_or_else(|| ApiError::Decode("no login accounts for this user".to_string()))?;

    tracing::debug!(account_id = %account.account_id, "resolved login account");

    Ok(Credentials::new(
        account.account_id.clone(),
        account.base_url.clone(),
        access_token,
    ))
}

/// Revokes an access token.
pub async fn revoke(client: &DocuSignClient, access_token: &str) -> Result<(), ApiError> {
    client
        .execute(&revoke_request(client.api_url(), access_token))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{HttpMethod, RequestBody};
    use serde_json::json;

    #[test]
    fn test_token_request() {
        let spec = token_request("https://api", "key", "me@example.com", "pw");
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.url, "https://api/oauth2/token");
        assert_eq!(spec.header_value("Authorization"), None);
        match spec.body {
            Some(RequestBody::Form(fields)) => {
                assert!(fields.contains(&("grant_type".to_string(), "password".to_string())));
                assert!(fields.contains(&("client_id".to_string(), "key".to_string())));
                assert!(fields.contains(&("scope".to_string(), "api".to_string())));
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_parse_token() {
        let token = parse_token(json!({"access_token": "abc", "token_type": "bearer"})).unwrap();
        assert_eq!(token, "abc");

        let err = parse_token(json!({"error": "invalid_grant", "error_description": "bad password"}))
            .unwrap_err();
        assert_eq!(err.to_json(), json!({"error": "invalid_grant: bad password"}));
    }

    #[test]
    fn test_default_account() {
        let info: LoginInformation = serde_json::from_value(json!({
            "loginAccounts": [
                {"accountId": "1", "baseUrl": "https://one", "isDefault": "false"},
                {"accountId": "2", "baseUrl": "https://two", "isDefault": "true"}
            ]
        }))
        .unwrap();
        assert_eq!(info.default_account().map(|a| a.account_id.as_str()), Some("2"));

        let info: LoginInformation = serde_json::from_value(json!({
            "loginAccounts": [{"accountId": "1", "baseUrl": "https://one"}]
        }))
        .unwrap();
        assert_eq!(info.default_account().map(|a| a.account_id.as_str()), Some("1"));

        let empty: LoginInformation = serde_json::from_value(json!({})).unwrap();
        assert!(empty.default_account().is_none());
    }

    #[tokio::test]
    async fn test_login_resolves_credentials() {
        let mut server = mockito::Server::new_async().await;
        let token = server
            .mock("POST", "/oauth2/token")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("grant_type".into(), "password".into()),
                mockito::Matcher::UrlEncoded("username".into(), "me@example.com".into()),
            ]))
            .with_body(r#"{"access_token": "tok", "token_type": "bearer", "scope": "api"}"#)
            .create_async()
            .await;
        let info = server
            .mock("GET", "/login_information")
            .match_header("authorization", "bearer tok")
            .with_body(
                r#"{"loginAccounts": [{"accountId": "42", "baseUrl": "https://demo/accounts/42", "isDefault": "true"}]}"#,
            )
            .create_async()
            .await;

        let client = DocuSignClient::new(server.url()).unwrap();
        let credentials = login(&client, "key", "me@example.com", "pw").await.unwrap();
        assert_eq!(credentials, Credentials::new("42", "https://demo/accounts/42", "tok"));

        token.assert_async().await;
        info.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_without_accounts() {
        let mut server = mockito::Server::new_async().await;
        let _token = server
            .mock("POST", "/oauth2/token")
            .with_body(r#"{"access_token": "tok"}"#)
            .create_async()
            .await;
        let _info = server
            .mock("GET", "/login_information")
            .with_body(r#"{"loginAccounts": []}"#)
            .create_async()
            .await;

        let client = DocuSignClient::new(server.url()).unwrap();
        let err = login(&client, "key", "me@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
