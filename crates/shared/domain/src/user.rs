//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::password::Password;

/// Profile fields replaced together by a details change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub first_name: String,
    pub second_name: String,
    pub father_name: Option<String>,
    pub address: String,
}

/// Stored account: identity, profile and credential digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identity key, compared exactly as stored
    pub email: String,
    pub first_name: String,
    pub second_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    pub address: String,
    /// Encoded salt + derived key, never the plain text
    #[serde(skip_serializing)]
    pub password_digest: String,
}

impl UserRecord {
    /// Build a record around an already hashed password
    pub fn new(email: String, details: ProfileDetails, password: Password) -> Self {
        Self {
            email,
            first_name: details.first_name,
            second_name: details.second_name,
            father_name: details.father_name,
            address: details.address,
            password_digest: password.into_string(),
        }
    }

    /// Stored digest as a verifiable value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_digest.clone())
    }

    pub fn set_password(&mut self, password: Password) {
        self.password_digest = password.into_string();
    }

    /// Overwrite the profile fields; email and digest are left untouched
    pub fn apply_details(&mut self, details: ProfileDetails) {
        self.first_name = details.first_name;
        self.second_name = details.second_name;
        self.father_name = details.father_name;
        self.address = details.address;
    }

    pub fn details(&self) -> ProfileDetails {
        ProfileDetails {
            first_name: self.first_name.clone(),
            second_name: self.second_name.clone(),
            father_name: self.father_name.clone(),
            address: self.address.clone(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User email address
    pub email: String,
    pub first_name: String,
    pub second_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    pub address: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            email: user.email,
            first_name: user.first_name,
            second_name: user.second_name,
            father_name: user.father_name,
            address: user.address,
        }
    }
}

impl From<&UserRecord> for UserResponse {
    fn from(user: &UserRecord) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            second_name: user.second_name.clone(),
            father_name: user.father_name.clone(),
            address: user.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord::new(
            "nina83@yandex.ru".to_string(),
            ProfileDetails {
                first_name: "Nina".to_string(),
                second_name: "Mamonova".to_string(),
                father_name: Some("Dan".to_string()),
                address: "Orel".to_string(),
            },
            Password::new("B4KdcLZk*").unwrap(),
        )
    }

    #[test]
    fn test_apply_details_keeps_identity_and_digest() {
        let mut user = record();
        let digest = user.password_digest.clone();

        user.apply_details(ProfileDetails {
            first_name: "Ninel".to_string(),
            second_name: "Mamonova".to_string(),
            father_name: None,
            address: "Moscow".to_string(),
        });

        assert_eq!(user.first_name, "Ninel");
        assert_eq!(user.father_name, None);
        assert_eq!(user.email, "nina83@yandex.ru");
        assert_eq!(user.password_digest, digest);
    }

    #[test]
    fn test_digest_not_serialized() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("passwordDigest").is_none());
        assert_eq!(json["firstName"], "Nina");
    }

    #[test]
    fn test_record_serializes_as_public_view() {
        let user = record();
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::to_value(UserResponse::from(&user)).unwrap()
        );
    }

    #[test]
    fn test_record_password_verifies() {
        assert!(record().password().verify("B4KdcLZk*"));
    }
}
