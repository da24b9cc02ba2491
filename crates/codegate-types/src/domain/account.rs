use serde::{Deserialize, Serialize};

/// Credentials provisioned under one activation code.
///
/// Entirely server-owned: the client never creates, edits, or deletes one.
/// `activation_code_id` is a weak back-reference for grouping only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedAccount {
    pub id: u64,
    pub activation_code_id: u64,
    pub email: String,
    pub email_password: String,
    pub cursor_password: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl ProvisionedAccount {
    /// Labeled copyable fields in display order (detail view, copy actions).
    pub fn secret_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("email", &self.email),
            ("email password", &self.email_password),
            ("cursor password", &self.cursor_password),
            ("access token", &self.access_token),
            ("refresh token", &self.refresh_token),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserializes_wire_names() {
        let json = r#"{
            "id": 42,
            "activationCodeId": 7,
            "email": "user@example.com",
            "emailPassword": "mail-secret",
            "cursorPassword": "cursor-secret",
            "accessToken": "at-123",
            "refreshToken": "rt-456"
        }"#;

        let account: ProvisionedAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.activation_code_id, 7);
        assert_eq!(account.secret_fields()[0].1, "user@example.com");
        assert_eq!(account.secret_fields()[4].1, "rt-456");
    }
}
