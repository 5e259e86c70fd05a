use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色（与前端约定为大写字符串）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student, // 学生
    Teacher, // 指导教师
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "STUDENT";
    pub const TEACHER: &'static str = "TEACHER";
    pub const ADMIN: &'static str = "ADMIN";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher]
    }
    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Teacher, &Self::Admin]
    }

    /// 允许自助注册的角色
    pub fn can_self_register(&self) -> bool {
        matches!(self, UserRole::Student | UserRole::Teacher)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => Self::STUDENT,
            UserRole::Teacher => Self::TEACHER,
            UserRole::Admin => Self::ADMIN,
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Geçersiz rol: '{s}'. Desteklenen roller: STUDENT, TEACHER, ADMIN"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            Self::STUDENT => Ok(UserRole::Student),
            Self::TEACHER => Ok(UserRole::Teacher),
            Self::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    /// 学生的指导教师用户名
    pub advisor_username: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            self.role.as_str(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("Token üretilemedi: {e}"))
    }

    /// 该学生是否由指定教师指导
    pub fn is_advised_by(&self, teacher_username: &str) -> bool {
        self.role == UserRole::Student
            && self.advisor_username.as_deref() == Some(teacher_username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("student".parse::<UserRole>(), Ok(UserRole::Student));
        assert_eq!("TEACHER".parse::<UserRole>(), Ok(UserRole::Teacher));
        assert!("guest".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serializes_uppercase() {
        let json = serde_json::to_string(&UserRole::Admin).expect("serializable");
        assert_eq!(json, "\"ADMIN\"");
        assert!(!UserRole::Admin.can_self_register());
        assert!(UserRole::Student.can_self_register());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let now = chrono::Utc::now();
        let user = User {
            id: 1,
            username: "ayse".into(),
            password_hash: "secret-hash".into(),
            role: UserRole::Student,
            advisor_username: Some("hoca".into()),
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&user).expect("serializable");
        assert!(!json.contains("secret-hash"));
        assert!(user.is_advised_by("hoca"));
        assert!(!user.is_advised_by("baska"));
    }
}
