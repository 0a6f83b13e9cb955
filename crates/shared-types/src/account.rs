//! Account state as exposed by `/address/{address}`.

use serde::{Deserialize, Serialize};

/// On-chain account state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub nonce: u64,
    /// Balance as a base-10 string.
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_hash: Option<String>,
}

/// Payload of `/address/{address}`: `{data: {account: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPayload {
    pub account: Account,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_optional_fields_omitted() {
        let account = Account {
            address: "aa".repeat(32),
            nonce: 1,
            balance: "100".to_string(),
            ..Account::default()
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("code"));
        assert!(!json.contains("rootHash"));
    }

    #[test]
    fn test_account_payload_round_trip() {
        let json = r#"{"account": {"address": "aa", "nonce": 5, "balance": "42"}}"#;
        let payload: AccountPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.account.nonce, 5);
        assert_eq!(payload.account.balance, "42");
    }
}
