use crate::config::AppConfig;
use crate::errors::{Result, TeknofestError};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 按配置的 Argon2id 参数哈希密码
pub fn hash_password(password: &str) -> Result<String> {
    let argon = &AppConfig::get().argon2;
    hash_password_with(password, argon.memory_cost, argon.time_cost, argon.parallelism)
}

pub fn hash_password_with(
    password: &str,
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
) -> Result<String> {
    let params = Params::new(memory_cost, time_cost, parallelism, None)
        .map_err(|e| TeknofestError::validation(format!("Argon2 parametre hatası: {e}")))?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TeknofestError::validation(format!("Şifre işlenemedi: {e}")))
}

/// 校验密码，参数从哈希串本身读取
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password_with("1234", 1024, 1, 1).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("1234", &hash));
        assert!(!verify_password("4321", &hash));
    }

    #[test]
    fn salts_differ() {
        let a = hash_password_with("sifre", 1024, 1, 1).unwrap();
        let b = hash_password_with("sifre", 1024, 1, 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("x", "not-a-hash"));
    }
}
