//! Inbound account forms and their validation chains.

use serde::Deserialize;

use crate::user::ProfileDetails;
use crate::validation::{chains, Validate, ValidationOutcome, Validator};

/// Registration form: a candidate record with a plain text password
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub second_name: String,
    #[serde(default)]
    pub father_name: Option<String>,
    pub email: String,
    pub password: String,
    pub address: String,
}

impl RegistrationForm {
    pub fn details(&self) -> ProfileDetails {
        ProfileDetails {
            first_name: self.first_name.clone(),
            second_name: self.second_name.clone(),
            father_name: self.father_name.clone(),
            address: self.address.clone(),
        }
    }
}

impl Validate for RegistrationForm {
    fn validate(&self) -> ValidationOutcome {
        Validator::new()
            .field(chains::first_name(), &self.first_name)
            .field(chains::second_name(), &self.second_name)
            .optional(chains::father_name(), self.father_name.as_deref())
            .field(chains::email(), &self.email)
            .field(chains::password(), &self.password)
            .field(chains::address(), &self.address)
            .validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> ValidationOutcome {
        Validator::new()
            .field(chains::email(), &self.email)
            .field(chains::login_password(), &self.password)
            .validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordForm {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

impl Validate for ChangePasswordForm {
    fn validate(&self) -> ValidationOutcome {
        Validator::new()
            .field(chains::email(), &self.email)
            .field(chains::old_password(), &self.old_password)
            .field(chains::new_password(), &self.new_password)
            .validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChangeDetailsForm {
    pub email: String,
    pub first_name: String,
    pub second_name: String,
    #[serde(default)]
    pub father_name: Option<String>,
    pub address: String,
}

impl ChangeDetailsForm {
    /// Split into the target email and the replacement profile
    pub fn into_parts(self) -> (String, ProfileDetails) {
        (
            self.email,
            ProfileDetails {
                first_name: self.first_name,
                second_name: self.second_name,
                father_name: self.father_name,
                address: self.address,
            },
        )
    }
}

impl Validate for ChangeDetailsForm {
    fn validate(&self) -> ValidationOutcome {
        Validator::new()
            .field(chains::email(), &self.email)
            .field(chains::first_name(), &self.first_name)
            .field(chains::second_name(), &self.second_name)
            .optional(chains::father_name(), self.father_name.as_deref())
            .field(chains::address(), &self.address)
            .validate()
    }
}
