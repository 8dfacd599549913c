use super::*;

fn input(username: &str, password: &str) -> LoginInput {
    LoginInput { username: username.to_owned(), password: password.to_owned() }
}

// =============================================================
// Username
// =============================================================

#[test]
fn username_two_chars_fails() {
    let err = validate_login(&input("ab", "123456")).unwrap_err();
    assert!(err.username.is_some());
    assert!(err.password.is_none());
}

#[test]
fn username_three_chars_passes() {
    let creds = validate_login(&input("abc", "123456")).unwrap();
    assert_eq!(creds.username, "abc");
}

#[test]
fn username_with_space_fails() {
    let err = validate_login(&input("abc def", "123456")).unwrap_err();
    assert!(err.username.unwrap().contains("solo puede contener"));
}

#[test]
fn username_is_trimmed_before_checks() {
    let creds = validate_login(&input("  admin_1  ", "123456")).unwrap();
    assert_eq!(creds.username, "admin_1");

    // Surrounding whitespace does not count toward the minimum length.
    assert!(validate_login(&input("  ab  ", "123456")).is_err());
}

#[test]
fn username_allows_dash_and_underscore() {
    assert!(validate_username("ventas-norte_2").is_ok());
}

#[test]
fn username_rejects_non_ascii_letters() {
    assert!(validate_username("añoso").is_err());
}

#[test]
fn username_length_bounds() {
    assert!(validate_username(&"a".repeat(USERNAME_MAX_LEN)).is_ok());
    let err = validate_username(&"a".repeat(USERNAME_MAX_LEN + 1)).unwrap_err();
    assert!(err.contains("no puede superar"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_five_chars_fails() {
    let err = validate_login(&input("admin", "12345")).unwrap_err();
    assert!(err.password.is_some());
    assert!(err.username.is_none());
}

#[test]
fn password_six_chars_passes() {
    assert!(validate_login(&input("admin", "123456")).is_ok());
}

#[test]
fn password_accepts_any_characters_and_keeps_whitespace() {
    let creds = validate_login(&input("admin", " p@ss wörd ")).unwrap();
    assert_eq!(creds.password, " p@ss wörd ");
}

#[test]
fn password_max_length() {
    assert!(validate_password(&"x".repeat(PASSWORD_MAX_LEN)).is_ok());
    assert!(validate_password(&"x".repeat(PASSWORD_MAX_LEN + 1)).is_err());
}

// =============================================================
// LoginErrors
// =============================================================

#[test]
fn both_fields_report_independently() {
    let err = validate_login(&input("", "")).unwrap_err();
    assert!(err.username.is_some());
    assert!(err.password.is_some());
    assert!(!err.is_empty());
}

#[test]
fn display_joins_field_messages() {
    let err = LoginErrors { username: Some("u".to_owned()), password: Some("p".to_owned()) };
    assert_eq!(err.to_string(), "invalid login: u; p");
}
