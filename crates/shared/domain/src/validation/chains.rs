//! Canonical field chains used by the account forms.

use super::rule::FieldRules;
use super::rules::{
    email_syntax, has_digit, has_lowercase, has_special, has_uppercase, letters_only, max_length,
    min_length, not_empty,
};
use crate::constants::{
    MAX_ADDRESS_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_SECOND_NAME_LENGTH,
};

pub fn email() -> FieldRules {
    FieldRules::new("email", "Email")
        .rule(not_empty())
        .rule(email_syntax())
}

pub fn first_name() -> FieldRules {
    FieldRules::new("firstName", "First Name")
        .rule(not_empty())
        .rule(letters_only())
        .rule(max_length(MAX_NAME_LENGTH))
}

pub fn second_name() -> FieldRules {
    FieldRules::new("secondName", "Second Name")
        .rule(not_empty())
        .rule(letters_only())
        .rule(min_length(MIN_SECOND_NAME_LENGTH))
        .rule(max_length(MAX_NAME_LENGTH))
}

/// Optional field: no not-empty rule
pub fn father_name() -> FieldRules {
    FieldRules::new("fatherName", "Father Name")
        .rule(letters_only())
        .rule(max_length(MAX_NAME_LENGTH))
}

pub fn address() -> FieldRules {
    FieldRules::new("address", "Address")
        .rule(not_empty())
        .rule(max_length(MAX_ADDRESS_LENGTH))
}

/// Full strength chain, shared by new, old and registration passwords.
pub fn password_strength(field: &'static str, display_name: &'static str) -> FieldRules {
    FieldRules::new(field, display_name)
        .rule(not_empty())
        .rule(min_length(MIN_PASSWORD_LENGTH))
        .rule(max_length(MAX_PASSWORD_LENGTH))
        .rule(has_uppercase())
        .rule(has_lowercase())
        .rule(has_digit())
        .rule(has_special())
}

pub fn password() -> FieldRules {
    password_strength("password", "Password")
}

pub fn old_password() -> FieldRules {
    password_strength("oldPassword", "Old Password")
}

pub fn new_password() -> FieldRules {
    password_strength("newPassword", "New Password")
}

/// Login only requires a password to be present
pub fn login_password() -> FieldRules {
    FieldRules::new("password", "Password").rule(not_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_chain_order() {
        assert_eq!(
            password().rule_names(),
            vec![
                "not-empty",
                "min-length",
                "max-length",
                "has-upper",
                "has-lower",
                "has-digit",
                "has-special"
            ]
        );
    }

    #[test]
    fn test_weak_password_reports_each_violation() {
        // Too short, no uppercase, no digit, no special character
        let failures = password().evaluate("ezpass");
        let messages: Vec<_> = failures.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "The length of Password must be at least 8 characters.",
                "Password must contain at least one uppercase letter.",
                "Password must contain at least one number.",
                "Password must contain at least one (!?*.).",
            ]
        );
    }

    #[test]
    fn test_password_boundaries() {
        assert!(password().evaluate("B4KdcLZk*").is_empty());
        // 8 and 16 characters are both accepted
        assert!(password().evaluate("Aa1!aaaa").is_empty());
        assert!(password().evaluate("Aa1!aaaaaaaaaaaa").is_empty());

        let too_short = password().evaluate("gRsj5rN");
        assert_eq!(too_short.len(), 2);

        let too_long = password().evaluate("0lEEraygK9aX7FTQuL");
        assert_eq!(
            too_long.iter().map(|f| f.message.as_str()).collect::<Vec<_>>(),
            vec![
                "The length of Password must be 16 characters or fewer.",
                "Password must contain at least one (!?*.).",
            ]
        );
    }

    #[test]
    fn test_easypass_and_uppercase_only() {
        assert_eq!(password().evaluate("easypass").len(), 3);
        assert_eq!(password().evaluate("EASYPASSWORD!").len(), 2);
    }

    #[test]
    fn test_empty_password_fails_every_content_rule() {
        let failures = password().evaluate("");
        assert_eq!(failures.len(), 6);
        assert_eq!(failures[0].message, "Password cannot be empty.");
    }

    #[test]
    fn test_old_and_new_password_display_names() {
        let old = old_password().evaluate("");
        let new = new_password().evaluate("");
        assert_eq!(old[0].field, "oldPassword");
        assert_eq!(old[0].message, "Old Password cannot be empty.");
        assert_eq!(new[0].field, "newPassword");
        assert_eq!(new[0].message, "New Password cannot be empty.");
    }

    #[test]
    fn test_second_name_min_length() {
        let failures = second_name().evaluate("М");
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "The length of Second Name must be at least 2 characters."
        );
        // First Name has no lower bound
        assert!(first_name().evaluate("М").is_empty());
    }

    #[test]
    fn test_name_too_long() {
        let long = "А".repeat(51);
        let failures = first_name().evaluate(&long);
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "The length of First Name must be 50 characters or fewer."
        );
        assert!(first_name().evaluate(&"А".repeat(50)).is_empty());
    }

    #[test]
    fn test_second_name_too_long() {
        let failures = second_name().evaluate(&"А".repeat(51));
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "The length of Second Name must be 50 characters or fewer."
        );
        assert!(second_name().evaluate(&"А".repeat(50)).is_empty());
    }

    #[test]
    fn test_father_name_too_long() {
        let failures = father_name().evaluate(&"А".repeat(51));
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "The length of Father Name must be 50 characters or fewer."
        );
        assert!(father_name().evaluate(&"А".repeat(50)).is_empty());
    }

    #[test]
    fn test_non_latin_password_lacks_both_cases() {
        let failures = password().evaluate("Пароль12!");
        let messages: Vec<_> = failures.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Password must contain at least one uppercase letter.",
                "Password must contain at least one lowercase letter.",
            ]
        );
        assert_eq!(password().evaluate("ÀÉ1!ßßßß").len(), 2);
    }

    #[test]
    fn test_empty_first_name() {
        let failures = first_name().evaluate("");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "First Name cannot be empty.");
    }

    #[test]
    fn test_father_name_allows_empty() {
        assert!(father_name().evaluate("").is_empty());
        assert_eq!(father_name().evaluate("Данииловна ").len(), 1);
    }

    #[test]
    fn test_email_chain() {
        assert!(email().evaluate("nina83@yandex.ru").is_empty());

        let incorrect = email().evaluate("nina83SOBAKAyandex.ru");
        assert_eq!(incorrect.len(), 1);
        assert_eq!(incorrect[0].message, "Email is incorrect.");

        let empty = email().evaluate("");
        assert_eq!(empty.len(), 2);
        assert_eq!(empty[0].message, "Email cannot be empty.");
    }

    #[test]
    fn test_address_chain() {
        assert!(address().evaluate("Россия, г. Орёл, Колхозный пер., д. 23 кв.38").is_empty());
        let failures = address().evaluate(&"д".repeat(101));
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "The length of Address must be 100 characters or fewer."
        );
    }

    #[test]
    fn test_login_password_only_requires_presence() {
        assert!(login_password().evaluate("wrong").is_empty());
        assert_eq!(login_password().evaluate("").len(), 1);
    }
}
