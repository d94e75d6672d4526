use crate::error::{Result, ZoomError};

/// Longest password the webinar endpoints accept.
pub const MAX_PASSWORD_LEN: usize = 10;

/// Check a webinar password: at most 10 characters from `a-z A-Z 0-9 @ - _ *`.
///
/// # Errors
///
/// Returns `ZoomError::InvalidArgument` describing the first violation.
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(ZoomError::InvalidArgument(format!(
            "password must be at most {MAX_PASSWORD_LEN} characters"
        )));
    }
    if let Some(c) = password
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '@' | '-' | '_' | '*')))
    {
        return Err(ZoomError::InvalidArgument(format!(
            "password contains invalid character {c:?}"
        )));
    }
    Ok(())
}

/// Reject empty path identifiers before they turn into a different route.
pub fn require_id(kind: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(ZoomError::InvalidArgument(format!("{kind} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_characters() {
        assert!(validate_password("aZ09@-_*").is_ok());
        assert!(validate_password("").is_ok());
        assert!(validate_password("abcdefghij").is_ok());
    }

    #[test]
    fn rejects_long_passwords() {
        let err = validate_password("abcdefghijk").unwrap_err();
        assert!(matches!(err, ZoomError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_disallowed_characters() {
        for pw in ["pass word", "pass!", "pässw"] {
            assert!(validate_password(pw).is_err(), "{pw}");
        }
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert!(require_id("user id", "me").is_ok());
        assert!(require_id("user id", "  ").is_err());
    }
}
