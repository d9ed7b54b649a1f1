//! Envelope encoding for account payloads.
//!
//! Every body exchanged with the API is `{"data": <account>}`. A payload that
//! cannot be encoded or decoded breaks the wire contract, so both directions
//! fail with `ApiError::Integrity` rather than a recoverable category.

use tracing::error;

use crate::error::ApiError;
use crate::types::{AccountData, Envelope};

pub fn encode(account: &AccountData) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(&Envelope { data: account }).map_err(|e| {
        error!(error = %e, "failed to encode account payload");
        ApiError::Integrity(format!("encoding account: {e}"))
    })
}

pub fn decode(body: &[u8]) -> Result<AccountData, ApiError> {
    serde_json::from_slice::<Envelope<AccountData>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| {
            error!(error = %e, "response body violates the account envelope");
            ApiError::Integrity(format!("decoding account: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountAttributes;

    fn account() -> AccountData {
        AccountData::new(
            "5a6c5f3e-1b8a-4c2e-9a52-2d6f1f0a9e10",
            AccountAttributes {
                country: Some("GB".to_string()),
                base_currency: "GBP".to_string(),
                bank_id: "400300".to_string(),
                bank_id_code: "GBDSC".to_string(),
                bic: "NWBKGB22".to_string(),
                name: vec!["Hans Moleman".to_string()],
            },
        )
    }

    #[test]
    fn encode_wraps_account_in_data() {
        let account = account();
        let body: serde_json::Value = serde_json::from_slice(&encode(&account).unwrap()).unwrap();
        assert_eq!(body["data"]["id"], account.id.as_str());
        assert_eq!(body["data"]["type"], "accounts");
    }

    #[test]
    fn decode_recovers_the_encoded_account() {
        let account = account();
        let decoded = decode(&encode(&account).unwrap()).unwrap();
        assert_eq!(decoded, account);
    }

    #[test]
    fn decode_keeps_server_assigned_version() {
        let body = br#"{"data":{"type":"accounts","id":"a","organisationId":"o","version":0}}"#;
        let decoded = decode(body).unwrap();
        assert_eq!(decoded.version, Some(0));
        assert!(decoded.attributes.is_none());
    }

    #[test]
    fn decode_rejects_bodies_without_envelope() {
        let err = decode(br#"{"type":"accounts"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Integrity(_)));

        let err = decode(b"not json").unwrap_err();
        assert!(matches!(err, ApiError::Integrity(_)));
    }
}
