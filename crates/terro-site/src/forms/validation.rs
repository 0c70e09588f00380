//! Contact field validation rules

/// Shortest accepted message, in UTF-16 code units
pub const MIN_MESSAGE_LEN: usize = 10;

/// Why a field was rejected. The display text is shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: String },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Validate one field value.
///
/// `key` is the field's `name` (or id); it selects the format rule and
/// labels the required message. The value is trimmed first.
pub fn validate(key: &str, value: &str, required: bool) -> Result<(), FieldError> {
    let value = value.trim_matches(is_space);

    if required && value.is_empty() {
        return Err(FieldError::Required {
            label: format_field_name(key),
        });
    }
    if value.is_empty() {
        return Ok(());
    }

    match key {
        "email" if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        "phone" if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        "message" if value.encode_utf16().count() < MIN_MESSAGE_LEN => {
            Err(FieldError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

/// Browser whitespace: Unicode spaces and line breaks plus the BOM, but not NEL
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot in the domain with
/// at least one character on each side
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_space) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Optional `+`, optional `(`, one to four digits, optional `)`, then any
/// run of digits, whitespace, `-`, `.` or `/`
pub fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let rest = rest.strip_prefix('(').unwrap_or(rest);

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let after = &rest[digits..];
    // The closing paren may only follow the leading group of at most four digits
    let tail = if digits <= 4 {
        after.strip_prefix(')').unwrap_or(after)
    } else {
        after
    };
    tail.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | '/') || is_space(c))
}

/// `inquiry-type` -> `Inquiry Type`
pub fn format_field_name(key: &str) -> String {
    if key.is_empty() {
        return "This field".to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut prev_word = false;
    for c in key.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        let word = c.is_ascii_alphanumeric();
        out.push(if word && !prev_word { c.to_ascii_uppercase() } else { c });
        prev_word = word;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.terro.ai"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("(555)123.4567"));
        assert!(is_valid_phone("+44 20/7946 0958"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("(12345)678"));
        assert!(!is_valid_phone("++1 555"));
        assert!(!is_valid_phone("-555"));
    }

    #[test]
    fn test_field_name_label() {
        assert_eq!(format_field_name("inquiry-type"), "Inquiry Type");
        assert_eq!(format_field_name("first_name"), "First Name");
        assert_eq!(format_field_name("email"), "Email");
        assert_eq!(format_field_name(""), "This field");
    }

    #[test]
    fn test_rules() {
        assert_eq!(
            validate("name", "   ", true),
            Err(FieldError::Required { label: "Name".into() })
        );
        assert_eq!(validate("company", "", false), Ok(()));
        assert_eq!(validate("phone", "", false), Ok(()));
        assert_eq!(validate("email", "a@b", true), Err(FieldError::InvalidEmail));
        assert_eq!(validate("email", " a@b.com ", true), Ok(()));
        assert_eq!(validate("message", "123456789", true), Err(FieldError::MessageTooShort));
        assert_eq!(validate("message", "1234567890", true), Ok(()));
        assert_eq!(
            FieldError::Required { label: "Message".into() }.to_string(),
            "Message is required"
        );
    }

    #[test]
    fn test_browser_length_and_trim() {
        // Five emoji are ten UTF-16 units
        assert_eq!(validate("message", "😀😀😀😀😀", true), Ok(()));
        assert_eq!(validate("message", "😀😀😀😀", true), Err(FieldError::MessageTooShort));
        assert_eq!(
            validate("name", "\u{feff}", true),
            Err(FieldError::Required { label: "Name".into() })
        );
        assert_eq!(
            validate("message", "\u{feff} 123456789 \u{feff}", true),
            Err(FieldError::MessageTooShort)
        );
        // NEL is not trimmed, so it counts as content
        assert_eq!(validate("name", "\u{85}", true), Ok(()));
    }
}
