//! Form input validation.
//!
//! Shape checks only, run before any provider call. A failed check blocks the
//! submission entirely; nothing reaches the network. Messages are the
//! user-facing pt-BR strings rendered next to the offending field.

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_SIGN_UP_PASSWORD_LEN: usize = 8;
pub const MIN_SIGN_IN_PASSWORD_LEN: usize = 6;

pub const MSG_NAME_TOO_SHORT: &str = "O nome deve ter pelo menos 3 caracteres.";
pub const MSG_INVALID_EMAIL: &str = "Por favor, insira um email válido.";
pub const MSG_SIGN_UP_PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 8 caracteres.";
pub const MSG_SIGN_IN_PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres.";

/// Per-field validation messages. Empty means the submission may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Loose well-formedness check: one `@`, non-empty local and domain parts,
/// no whitespace. Full RFC validation is the provider's problem.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    let parts = trimmed.split('@').collect::<Vec<_>>();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() && parts[1].contains('.')
}

/// Validate account-creation input: name ≥ 3 chars, well-formed email,
/// password ≥ 8 chars.
#[must_use]
pub fn validate_sign_up(name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().chars().count() < MIN_NAME_LEN {
        errors.name = Some(MSG_NAME_TOO_SHORT);
    }
    if !valid_email(email) {
        errors.email = Some(MSG_INVALID_EMAIL);
    }
    if password.chars().count() < MIN_SIGN_UP_PASSWORD_LEN {
        errors.password = Some(MSG_SIGN_UP_PASSWORD_TOO_SHORT);
    }
    errors
}

/// Validate sign-in input: well-formed email, password ≥ 6 chars.
#[must_use]
pub fn validate_sign_in(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if !valid_email(email) {
        errors.email = Some(MSG_INVALID_EMAIL);
    }
    if password.chars().count() < MIN_SIGN_IN_PASSWORD_LEN {
        errors.password = Some(MSG_SIGN_IN_PASSWORD_TOO_SHORT);
    }
    errors
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
