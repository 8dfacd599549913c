//! Login form schema.
//!
//! Credentials are checked client-side before `POST /user/loginuser`. Every
//! failing field gets its own message so the form can render them inline
//! next to the matching input.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 100;

/// Raw form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Credentials that passed validation; `username` is already trimmed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Per-field validation failures. At least one field is always set.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid login: {}", self.summary())]
pub struct LoginErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    fn summary(&self) -> String {
        [self.username.as_deref(), self.password.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validate a login form submission.
///
/// # Errors
///
/// Returns [`LoginErrors`] carrying a message for each field that broke a rule.
pub fn validate_login(input: &LoginInput) -> Result<LoginCredentials, LoginErrors> {
    let username = input.username.trim();
    let errors = LoginErrors {
        username: validate_username(username).err(),
        password: validate_password(&input.password).err(),
    };
    if errors.is_empty() {
        Ok(LoginCredentials { username: username.to_owned(), password: input.password.clone() })
    } else {
        Err(errors)
    }
}

/// Check an already-trimmed username.
///
/// # Errors
///
/// Returns the user-facing message for the first rule that fails.
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(format!("El usuario debe tener al menos {USERNAME_MIN_LEN} caracteres"));
    }
    if len > USERNAME_MAX_LEN {
        return Err(format!("El usuario no puede superar los {USERNAME_MAX_LEN} caracteres"));
    }
    if !username.chars().all(is_username_char) {
        return Err("El usuario solo puede contener letras, números, guiones y guiones bajos".to_owned());
    }
    Ok(())
}

/// Check a password. Passwords are never trimmed.
///
/// # Errors
///
/// Returns the user-facing message for the first rule that fails.
pub fn validate_password(password: &str) -> Result<(), String> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(format!("La contraseña debe tener al menos {PASSWORD_MIN_LEN} caracteres"));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(format!("La contraseña no puede superar los {PASSWORD_MAX_LEN} caracteres"));
    }
    Ok(())
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
