//! Field-level validation for the contact form. Only presence and a
//! permissive email-shape check run on the client; everything else is the
//! server's problem.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    Required,
    Email,
}

pub fn validate_field(field: Field, value: &str) -> Option<Violation> {
    let value = value.trim();
    if value.is_empty() {
        return Some(Violation::Required);
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some(Violation::Email);
    }
    None
}

/// Accepts the same inputs as the permissive `^[^\s@]+@[^\s@]+\.[^\s@]+$`
/// pattern: exactly one `@`, no whitespace, and a dot somewhere inside the
/// domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("مستخدم@مثال.كوم"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("no@dot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@.domain"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("white space@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn required_runs_before_shape() {
        assert_eq!(validate_field(Field::Email, "   "), Some(Violation::Required));
        assert_eq!(validate_field(Field::Email, "nope"), Some(Violation::Email));
        assert_eq!(validate_field(Field::Email, "a@b.c"), None);
    }

    #[test]
    fn only_email_field_gets_shape_checked() {
        assert_eq!(validate_field(Field::Name, "not an email"), None);
        assert_eq!(validate_field(Field::Message, ""), Some(Violation::Required));
    }
}
