//! Domain DTOs for the accounts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently; the integration tests catch any schema drift between the
//! two crates. Identifiers stay `String` because the server, not the client,
//! decides whether an id is acceptable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed resource type of every account.
pub const ACCOUNT_TYPE: &str = "accounts";

/// An account resource.
///
/// `version` is assigned by the server and must be echoed back on delete.
/// Callers should always continue with the instance returned by
/// `create_account`, not the one they sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub organisation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountAttributes>,
}

impl AccountData {
    /// A new account of type `accounts` with a random id.
    pub fn new(organisation_id: impl Into<String>, attributes: AccountAttributes) -> Self {
        Self {
            kind: ACCOUNT_TYPE.to_string(),
            id: Uuid::new_v4().to_string(),
            organisation_id: organisation_id.into(),
            version: None,
            attributes: Some(attributes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub base_currency: String,
    #[serde(default)]
    pub bank_id: String,
    #[serde(default)]
    pub bank_id_code: String,
    #[serde(default)]
    pub bic: String,
    /// Account holder names, in order.
    #[serde(default)]
    pub name: Vec<String>,
}

/// Wire wrapper used for every request and response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_has_fixed_type_and_uuid_id() {
        let account = AccountData::new("org", AccountAttributes::default());
        assert_eq!(account.kind, "accounts");
        assert!(Uuid::parse_str(&account.id).is_ok());
        assert!(account.version.is_none());
    }

    #[test]
    fn account_serializes_with_wire_field_names() {
        let account = AccountData {
            kind: "accounts".to_string(),
            id: "id-1".to_string(),
            organisation_id: "org-1".to_string(),
            version: Some(3),
            attributes: Some(AccountAttributes {
                country: Some("GB".to_string()),
                base_currency: "GBP".to_string(),
                bank_id: "400300".to_string(),
                bank_id_code: "GBDSC".to_string(),
                bic: "NWBKGB22".to_string(),
                name: vec!["Hans Moleman".to_string()],
            }),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "accounts");
        assert_eq!(json["organisationId"], "org-1");
        assert_eq!(json["version"], 3);
        assert_eq!(json["attributes"]["baseCurrency"], "GBP");
        assert_eq!(json["attributes"]["bankId"], "400300");
        assert_eq!(json["attributes"]["bankIdCode"], "GBDSC");
        assert_eq!(json["attributes"]["name"][0], "Hans Moleman");
    }

    #[test]
    fn version_is_omitted_until_assigned() {
        let account = AccountData::new("org", AccountAttributes::default());
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("version").is_none());
        assert!(json["attributes"].get("country").is_none());
    }
}
