//! Primitive rules shared by the field chains.

use validator::ValidateEmail;

use super::rule::Rule;
use crate::constants::{
    MSG_EMAIL_INCORRECT, MSG_LETTERS_ONLY, MSG_NEEDS_DIGIT, MSG_NEEDS_LOWERCASE,
    MSG_NEEDS_SPECIAL, MSG_NEEDS_UPPERCASE, MSG_NOT_EMPTY, MSG_TOO_LONG, MSG_TOO_SHORT,
    PASSWORD_SPECIAL_CHARS,
};

/// Fails on empty and whitespace-only values
pub fn not_empty() -> Rule {
    Rule::new("not-empty", MSG_NOT_EMPTY, |v| !v.trim().is_empty())
}

/// Every character is alphabetic; the empty string passes
pub fn letters_only() -> Rule {
    Rule::new("letters-only", MSG_LETTERS_ONLY, |v| v.chars().all(char::is_alphabetic))
}

pub fn min_length(min: usize) -> Rule {
    Rule::new("min-length", MSG_TOO_SHORT, move |v| v.chars().count() >= min).with_min(min)
}

pub fn max_length(max: usize) -> Rule {
    Rule::new("max-length", MSG_TOO_LONG, move |v| v.chars().count() <= max).with_max(max)
}

/// At least one of `A-Z`
pub fn has_uppercase() -> Rule {
    Rule::new("has-upper", MSG_NEEDS_UPPERCASE, |v| v.chars().any(|c| c.is_ascii_uppercase()))
}

/// At least one of `a-z`
pub fn has_lowercase() -> Rule {
    Rule::new("has-lower", MSG_NEEDS_LOWERCASE, |v| v.chars().any(|c| c.is_ascii_lowercase()))
}

pub fn has_digit() -> Rule {
    Rule::new("has-digit", MSG_NEEDS_DIGIT, |v| v.chars().any(|c| c.is_ascii_digit()))
}

/// At least one of `! ? * .`
pub fn has_special() -> Rule {
    Rule::new("has-special", MSG_NEEDS_SPECIAL, |v| v.contains(PASSWORD_SPECIAL_CHARS))
}

pub fn email_syntax() -> Rule {
    Rule::new("email", MSG_EMAIL_INCORRECT, |v| v.validate_email())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        let rule = not_empty();
        assert!(rule.passes("a"));
        assert!(!rule.passes(""));
        assert!(!rule.passes("   "));
    }

    #[test]
    fn test_letters_only_accepts_unicode_letters() {
        let rule = letters_only();
        assert!(rule.passes("Нина"));
        assert!(rule.passes("Nina"));
        assert!(rule.passes(""));
        assert!(!rule.passes("Иван123"));
        assert!(!rule.passes("Данииловна "));
    }

    #[test]
    fn test_lengths_count_characters() {
        // 4 characters, 8 bytes
        assert!(max_length(4).passes("Нина"));
        assert!(!min_length(5).passes("Нина"));
        assert!(min_length(2).passes("Ян"));
    }

    #[test]
    fn test_character_classes() {
        assert!(has_uppercase().passes("aB"));
        assert!(!has_uppercase().passes("0leerayg!k9a"));
        assert!(has_lowercase().passes("Ab"));
        assert!(!has_lowercase().passes("0LEEERAYG!K9A"));
        assert!(has_digit().passes("a1"));
        assert!(!has_digit().passes("LEEERAYG!KA"));
        assert!(has_special().passes("a?"));
        assert!(has_special().passes("a."));
        assert!(!has_special().passes("0lEEraygK9a"));
    }

    #[test]
    fn test_letter_case_is_ascii_only() {
        assert!(!has_uppercase().passes("ПАРОЛЬ"));
        assert!(!has_uppercase().passes("ÀÉ"));
        assert!(!has_lowercase().passes("пароль"));
        assert!(!has_lowercase().passes("ßß"));
        assert!(has_uppercase().passes("ПарольA"));
        assert!(has_lowercase().passes("ПАРОЛЬa"));
    }

    #[test]
    fn test_email_syntax() {
        let rule = email_syntax();
        assert!(rule.passes("nina83@yandex.ru"));
        assert!(rule.passes("valentin.kozin@hotmail.com"));
        assert!(!rule.passes("nina83SOBAKAyandex.ru"));
        assert!(!rule.passes(""));
    }

    #[test]
    fn test_upper_and_lower_messages_differ() {
        assert_ne!(has_uppercase().render("Password"), has_lowercase().render("Password"));
        assert_eq!(
            has_lowercase().render("Password"),
            "Password must contain at least one lowercase letter."
        );
    }
}
