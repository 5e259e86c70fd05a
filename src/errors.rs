//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_teknofest_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TeknofestError {
            $($variant(String),)*
        }

        impl TeknofestError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TeknofestError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TeknofestError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TeknofestError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TeknofestError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TeknofestError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_teknofest_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
    AiService("E011", "AI Service Error"),
    DocumentGeneration("E012", "Document Generation Error"),
    DocumentExtraction("E013", "Document Extraction Error"),
}

impl TeknofestError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TeknofestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TeknofestError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TeknofestError {
    fn from(err: sea_orm::DbErr) -> Self {
        TeknofestError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TeknofestError {
    fn from(err: std::io::Error) -> Self {
        TeknofestError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TeknofestError {
    fn from(err: serde_json::Error) -> Self {
        TeknofestError::Serialization(err.to_string())
    }
}

// 去掉 URL，查询参数里可能带有凭据
impl From<reqwest::Error> for TeknofestError {
    fn from(err: reqwest::Error) -> Self {
        TeknofestError::AiService(err.without_url().to_string())
    }
}

// 启动失败时交给 main 的 io::Result
impl From<TeknofestError> for std::io::Error {
    fn from(err: TeknofestError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TeknofestError>;
