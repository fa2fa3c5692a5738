//
//  docusign-client
//  api/admin.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/03.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account administration for a DocuSign organization.
//!
//! This module exposes the [`Admin`] capability object: a set of operations
//! bound to one account id, base URL and access token. Each operation follows
//! the same three steps:
//!
//! 1. **Build** a [`RequestSpec`] with one of the `*_request` functions
//! 2. **Execute** it through [`DocuSignClient::execute`]
//! 3. **Reshape** the result (unwrap, simplify or derive fields)
//!
//! The build and reshape steps are plain functions so they can be checked
//! without a server.
//!
//! # Operations
//!
//! | Method | HTTP | URL |
//! |--------|------|-----|
//! | [`Admin::get_org_account_info`] | GET | `{apiUrl}/accounts/{accountId}` |
//! | [`Admin::get_user_list`] | GET | `{baseUrl}/users?additional_info=true` |
//! | [`Admin::add_users`] | POST | `{baseUrl}/users` |
//! | [`Admin::delete_users`] | DELETE | `{baseUrl}/users` |
//! | [`Admin::get_templates`] | GET | `{baseUrl}/templates` |
//! | [`Admin::get_plan`] | GET | `{baseUrl}` |
//!
//! # Example
//!
//! ```rust,no_run
//! use docusign_client::api::{Admin, DocuSignClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DocuSignClient::new("https://demo.docusign.net/restapi/v2")?;
//! let admin = Admin::init(
//!     client,
//!     "1234567",
//!     "https://demo.docusign.net/restapi/v2/accounts/1234567",
//!     "access-token",
//! );
//!
//! let plan = admin.get_plan().await?;
//! println!("{} envelopes left", plan.envelopes_left().unwrap_or(-1));
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Inputs are not validated; DocuSign reports malformed input as an error body
//! - [`Admin::get_templates`] flattens provider errors to [`ApiError::Simplified`],
//!   every other operation returns [`ApiError::Provider`] with the raw body

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::{build_headers, DocuSignClient};
use super::common::{ApiError, RequestSpec};
use crate::auth::Credentials;

/// Sentinel for `envelopesLeft` when the allowance cannot be computed.
///
/// A negative count means the plan has no envelope limit.
pub const UNLIMITED_ENVELOPES: i64 = -1;

/// A user to create, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub first: String,
    pub last: String,
    pub email: String,
    pub password: String,
}

/// A single user setting in the `newUsers` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSetting {
    pub name: String,
    pub value: bool,
}

/// A user entry in the `newUsers` payload, shaped per the DocuSign schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserEntry {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_settings: Vec<UserSetting>,
}

impl From<&NewUser> for NewUserEntry {
    fn from(user: &NewUser) -> Self {
        Self {
            user_name: format!("{} {}", user.first, user.last),
            first_name: user.first.clone(),
            last_name: user.last.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            user_settings: vec![UserSetting {
                name: "canSendEnvelope".to_string(),
                value: true,
            }],
        }
    }
}

/// Body of the add-users call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUsersBody {
    pub new_users: Vec<NewUserEntry>,
}

/// A `{userId}` reference in the delete-users payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Body of the delete-users call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteUsersBody {
    pub users: Vec<UserIdEntry>,
}

/// A user of the account, as returned by the user list.
///
/// Only the commonly used fields are named; everything else DocuSign sends
/// is kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccountUser {
    /// Creates a reference carrying only a user id, for [`Admin::delete_users`].
    pub fn with_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }
}

/// The billing plan of an account, with derived fields.
///
/// Wraps the raw plan mapping. Two keys are added to it:
///
/// * `envelopesLeft` - `billingPeriodEnvelopesAllowed - billingPeriodEnvelopesSent`,
///   or [`UNLIMITED_ENVELOPES`] when either operand is missing or not numeric
/// * `name` - a copy of `planName`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillingPlan(Map<String, Value>);

impl BillingPlan {
    /// Derives the computed fields from a raw plan response.
    pub fn from_raw(mut plan: Map<String, Value>) -> Self {
        let left = match (
            numeric(plan.get("billingPeriodEnvelopesAllowed")),
            numeric(plan.get("billingPeriodEnvelopesSent")),
        ) {
            (Some(allowed), Some(sent)) => number(allowed - sent),
            _ => Value::from(UNLIMITED_ENVELOPES),
        };
        plan.insert("envelopesLeft".to_string(), left);

        if let Some(name) = plan.get("planName").cloned() {
            plan.insert("name".to_string(), name);
        }

        Self(plan)
    }

    /// Remaining envelope allowance for the billing period.
    pub fn envelopes_left(&self) -> Option<i64> {
        let left = self.0.get("envelopesLeft")?;
        left.as_i64().or_else(|| left.as_f64().map(|f| f.floor() as i64))
    }

    /// Whether the plan reports no envelope limit.
    pub fn is_unlimited(&self) -> bool {
        self.envelopes_left().is_some_and(|left| left < 0)
    }

    /// The plan name.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Looks up any field of the plan.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

}

/// Reads a plan counter; DocuSign sends these as numeric strings.
fn numeric(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(UNLIMITED_ENVELOPES))
    }
}

// Request builders

/// `GET {apiUrl}/accounts/{accountId}`
pub fn org_account_info_request(api_url: &str, account_id: &str, access_token: &str) -> RequestSpec {
    RequestSpec::get(
        "Get DS Org Account Info",
        format!("{}/accounts/{}", api_url, account_id),
    )
    .headers(build_headers(access_token, None))
}

/// `GET {baseUrl}/users?additional_info=true`
pub fn user_list_request(base_url: &str, access_token: &str) -> RequestSpec {
    RequestSpec::get(
        "Get DS Account User List",
        format!("{}/users?additional_info=true", base_url),
    )
    .headers(build_headers(access_token, Some(base_url)))
}

/// `POST {baseUrl}/users` with a `newUsers` body.
pub fn add_users_request(base_url: &str, access_token: &str, users: &[NewUser]) -> RequestSpec {
    let body = AddUsersBody {
        new_users: users.iter().map(NewUserEntry::from).collect(),
    };

    RequestSpec::post("Add Users to DS Account", format!("{}/users", base_url))
        .headers(build_headers(access_token, Some(base_url)))
        .json(json!(body))
}

/// `DELETE {baseUrl}/users` with a `users: [{userId}]` body.
pub fn delete_users_request(base_url: &str, access_token: &str, users: &[AccountUser]) -> RequestSpec {
    let body = DeleteUsersBody {
        users: users
            .iter()
            .map(|user| UserIdEntry {
                user_id: user.user_id.clone(),
            })
            .collect(),
    };

    RequestSpec::delete("Delete Users in DS Account", format!("{}/users", base_url))
        .headers(build_headers(access_token, Some(base_url)))
        .json(json!(body))
}

/// `GET {baseUrl}/templates`
pub fn templates_request(base_url: &str, access_token: &str) -> RequestSpec {
    RequestSpec::get("Get Templates", format!("{}/templates", base_url))
        .headers(build_headers(access_token, None))
}

/// `GET {baseUrl}`
pub fn plan_request(base_url: &str, access_token: &str) -> RequestSpec {
    RequestSpec::get("Get Billing Plan Info", base_url).headers(build_headers(access_token, None))
}

// Response transforms

/// Unwraps `response.users`; a response without the key is an empty list.
pub fn unwrap_users(result: Result<Value, ApiError>) -> Result<Vec<AccountUser>, ApiError> {
    let mut body = result?;
    match body.get_mut("users").map(Value::take) {
        Some(users) => serde_json::from_value(users)
            .map_err(|e| ApiError::decode("users is not a list of users", e)),
        None => Ok(Vec::new()),
    }
}

/// Flattens a provider error into [`ApiError::Simplified`].
pub fn simplify_errors(result: Result<Value, ApiError>) -> Result<Value, ApiError> {
    result.map_err(ApiError::simplify)
}

/// Derives the billing plan fields from a plan response.
pub fn derive_plan(result: Result<Value, ApiError>) -> Result<BillingPlan, ApiError> {
    match result? {
        Value::Object(plan) => Ok(BillingPlan::from_raw(plan)),
        other => Err(ApiError::Decode(format!(
            "billing plan is not an object: {}",
            other
        ))),
    }
}

/// Administration operations bound to one account.
///
/// Created by [`Admin::init`] (or [`Admin::from_credentials`]). The bound
/// credentials never change for the lifetime of the object. Cloning is cheap
/// and clones may be used concurrently.
#[derive(Debug, Clone)]
pub struct Admin {
    client: DocuSignClient,
    account_id: String,
    base_url: String,
    access_token: String,
}

impl Admin {
    /// Binds the administration operations to an account.
    ///
    /// # Parameters
    ///
    /// * `client` - The shared API client
    /// * `account_id` - The DocuSign account id
    /// * `base_url` - The account base URL returned by login
    /// * `access_token` - The OAuth2 access token
    pub fn init(
        client: DocuSignClient,
        account_id: impl Into<String>,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            account_id: account_id.into(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Binds the administration operations to resolved login credentials.
    pub fn from_credentials(client: DocuSignClient, credentials: &Credentials) -> Self {
        Self::init(
            client,
            credentials.account_id.clone(),
            credentials.base_url.clone(),
            credentials.access_token.clone(),
        )
    }

    /// Gets the account info for the bound org account.
    ///
    /// Both the success body and a provider error are returned unchanged.
    pub async fn get_org_account_info(&self) -> Result<Value, ApiError> {
        let spec = org_account_info_request(self.client.api_url(), &self.account_id, &self.access_token);
        self.client.execute(&spec).await
    }

    /// Returns the users of the account.
    ///
    /// The `users` array is unwrapped from the response. A provider error
    /// is returned unchanged.
    pub async fn get_user_list(&self) -> Result<Vec<AccountUser>, ApiError> {
        let spec = user_list_request(&self.base_url, &self.access_token);
        unwrap_users(self.client.execute(&spec).await)
    }

    /// Creates users in the account.
    ///
    /// Every user gets `userName` = `"<first> <last>"` and the
    /// `canSendEnvelope` setting. An empty slice is sent as-is.
    pub async fn add_users(&self, users: &[NewUser]) -> Result<Value, ApiError> {
        let spec = add_users_request(&self.base_url, &self.access_token, users);
        self.client.execute(&spec).await
    }

    /// Deletes users from the account.
    ///
    /// Only the `userId` of each entry is sent.
    pub async fn delete_users(&self, users: &[AccountUser]) -> Result<Value, ApiError> {
        let spec = delete_users_request(&self.base_url, &self.access_token, users);
        self.client.execute(&spec).await
    }

    /// Gets the templates of the account.
    ///
    /// Provider errors are flattened to [`ApiError::Simplified`], whose JSON
    /// form is `{"error": "<code>: <message>"}`.
    pub async fn get_templates(&self) -> Result<Value, ApiError> {
        let spec = templates_request(&self.base_url, &self.access_token);
        simplify_errors(self.client.execute(&spec).await)
    }

    /// Gets the billing plan of the account, with `envelopesLeft` and `name` added.
    pub async fn get_plan(&self) -> Result<BillingPlan, ApiError> {
        let spec = plan_request(&self.base_url, &self.access_token);
        derive_plan(self.client.execute(&spec).await)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::BASE_URL_HEADER;
    use crate::api::common::{HttpMethod, ProviderError};

    const API: &str = "https://demo.docusign.net/restapi/v2";
    const BASE: &str = "https://demo.docusign.net/restapi/v2/accounts/42";

    fn user(first: &str, last: &str) -> NewUser {
        NewUser {
            first: first.to_string(),
            last: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            password: "secret".to_string(),
        }
    }

    fn provider_error(code: &str, message: &str) -> ApiError {
        ApiError::Provider(
            ProviderError::from_body(&json!({"errorCode": code, "message": message})).unwrap(),
        )
    }

    #[test]
    fn test_org_account_info_request() {
        let spec = org_account_info_request(API, "42", "tok");
        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(spec.url, format!("{}/accounts/42", API));
        assert_eq!(spec.header_value("Authorization"), Some("bearer tok"));
        assert_eq!(spec.header_value(BASE_URL_HEADER), None);
        assert!(spec.body.is_none());
    }

    #[test]
    fn test_user_list_request() {
        let spec = user_list_request(BASE, "tok");
        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(spec.url, format!("{}/users?additional_info=true", BASE));
        assert_eq!(spec.header_value(BASE_URL_HEADER), Some(BASE));
        assert!(spec.body.is_none());
    }

    #[test]
    fn test_add_users_request() {
        let spec = add_users_request(BASE, "tok", &[user("Ada", "Lovelace"), user("Alan", "Turing")]);
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.url, format!("{}/users", BASE));
        assert_eq!(spec.header_value(BASE_URL_HEADER), Some(BASE));

        let body = spec.json_body().unwrap();
        let users = body["newUsers"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(
            users[0],
            json!({
                "userName": "Ada Lovelace",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "password": "secret",
                "userSettings": [{"name": "canSendEnvelope", "value": true}]
            })
        );
        assert_eq!(users[1]["userName"], "Alan Turing");
        assert_eq!(users[1]["userSettings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_add_users_empty() {
        let spec = add_users_request(BASE, "tok", &[]);
        assert_eq!(spec.json_body(), Some(&json!({"newUsers": []})));
    }

    #[test]
    fn test_delete_users_request_strips_fields() {
        let mut listed = AccountUser::with_id("u-1");
        listed.user_name = Some("Ada Lovelace".to_string());
        listed.email = Some("ada@example.com".to_string());
        listed.extra.insert("permissionProfileName".to_string(), json!("Admin"));

        let spec = delete_users_request(BASE, "tok", &[listed, AccountUser::with_id("u-2")]);
        assert_eq!(spec.method, HttpMethod::Delete);
        assert_eq!(spec.url, format!("{}/users", BASE));
        assert_eq!(
            spec.json_body(),
            Some(&json!({"users": [{"userId": "u-1"}, {"userId": "u-2"}]}))
        );
    }

    #[test]
    fn test_templates_and_plan_requests() {
        let templates = templates_request(BASE, "tok");
        assert_eq!(templates.url, format!("{}/templates", BASE));
        assert_eq!(templates.header_value(BASE_URL_HEADER), None);

        let plan = plan_request(BASE, "tok");
        assert_eq!(plan.method, HttpMethod::Get);
        assert_eq!(plan.url, BASE);
        assert_eq!(plan.header_value("Authorization"), Some("bearer tok"));
    }

    #[test]
    fn test_unwrap_users() {
        let users = unwrap_users(Ok(json!({
            "users": [{"userId": "u-1", "userName": "Ada", "isAdmin": "True"}],
            "resultSetSize": "1"
        })))
        .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id.as_deref(), Some("u-1"));
        assert_eq!(users[0].extra.get("isAdmin"), Some(&json!("True")));

        assert!(unwrap_users(Ok(json!({}))).unwrap().is_empty());
    }

    #[test]
    fn test_unwrap_users_forwards_raw_error() {
        let err = unwrap_users(Err(provider_error("X", "Y"))).unwrap_err();
        assert_eq!(err.to_json(), json!({"errorCode": "X", "message": "Y"}));
    }

    #[test]
    fn test_simplify_errors() {
        let err = simplify_errors(Err(provider_error("X", "Y"))).unwrap_err();
        assert_eq!(err.to_json(), json!({"error": "X: Y"}));

        let ok = simplify_errors(Ok(json!({"envelopeTemplates": []}))).unwrap();
        assert_eq!(ok, json!({"envelopeTemplates": []}));
    }

    #[test]
    fn test_derive_plan() {
        let plan = derive_plan(Ok(json!({
            "planName": "Business",
            "billingPeriodEnvelopesAllowed": 100,
            "billingPeriodEnvelopesSent": 40
        })))
        .unwrap();
        assert_eq!(plan.get("envelopesLeft"), Some(&json!(60)));
        assert_eq!(plan.envelopes_left(), Some(60));
        assert_eq!(plan.name(), Some("Business"));
        assert_eq!(plan.get("planName"), Some(&json!("Business")));
        assert!(!plan.is_unlimited());
    }

    #[test]
    fn test_derive_plan_numeric_strings() {
        let plan = derive_plan(Ok(json!({
            "billingPeriodEnvelopesAllowed": "25",
            "billingPeriodEnvelopesSent": "5"
        })))
        .unwrap();
        assert_eq!(plan.envelopes_left(), Some(20));
        assert_eq!(plan.name(), None);
    }

    #[test]
    fn test_derive_plan_missing_operand() {
        let plan = derive_plan(Ok(json!({
            "planName": "Free",
            "billingPeriodEnvelopesAllowed": 100
        })))
        .unwrap();
        assert_eq!(plan.get("envelopesLeft"), Some(&json!(-1)));
        assert!(plan.is_unlimited());

        let plan = derive_plan(Ok(json!({
            "billingPeriodEnvelopesAllowed": "unlimited",
            "billingPeriodEnvelopesSent": "3"
        })))
        .unwrap();
        assert_eq!(plan.envelopes_left(), Some(UNLIMITED_ENVELOPES));
    }

    #[test]
    fn test_derive_plan_errors() {
        assert!(derive_plan(Err(provider_error("X", "Y"))).unwrap_err().provider().is_some());
        assert!(matches!(derive_plan(Ok(json!([]))), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_billing_plan_serializes_flat() {
        let plan = BillingPlan::from_raw(
            json!({"planName": "Pro", "billingPeriodEnvelopesAllowed": 10, "billingPeriodEnvelopesSent": 10})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["envelopesLeft"], json!(0));
        assert_eq!(value["name"], json!("Pro"));
    }
}
