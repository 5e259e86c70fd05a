use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}_.-]+$").expect("Invalid username regex"));

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 32;
pub const PASSWORD_MIN_LEN: usize = 4;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err("Kullanıcı adı 3 ile 32 karakter arasında olmalıdır.");
    }
    // 仅允许字母、数字、下划线、连字符和点
    if !USERNAME_RE.is_match(username) {
        return Err("Kullanıcı adı yalnızca harf, rakam, '_', '-' ve '.' içerebilir.");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err("Şifre boş olamaz.");
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err("Şifre en az 4 karakter olmalıdır.");
    }
    Ok(())
}

/// 去除首尾空白，空串视为缺失
pub fn require_text(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// `Option<String>` 版本，用于可选字段
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value.and_then(require_text).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("ali").is_ok());
        assert!(validate_username("ayse.yilmaz").is_ok());
        assert!(validate_username("ogr_2025-a").is_ok());
        assert!(validate_username("gülşen").is_ok());
        assert!(validate_username("öğrenci.çağrı").is_ok());
    }

    #[test]
    fn test_username_length() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
        assert!(validate_username(&"a".repeat(32)).is_ok());
    }

    #[test]
    fn test_username_charset() {
        assert!(validate_username("ali veli").is_err());
        assert!(validate_username("ali\tveli").is_err());
        assert!(validate_username("a@b.c").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("1234").is_ok());
        assert!(validate_password("123").is_err());
        assert!(validate_password("    ").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("  Başlık "), Some("Başlık"));
        assert_eq!(require_text(" \n\t"), None);
        assert_eq!(non_blank(Some(" hoca ")), Some("hoca".to_string()));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
