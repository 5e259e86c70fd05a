use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_SIZE: i64 = 20;
const MAX_SIZE: i64 = 100;

// 分页查询参数（查询字符串中的数字以字符串形式出现）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default = "default_page", deserialize_with = "number_or_string")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "number_or_string")]
    pub size: i64,
}

impl PaginationQuery {
    /// 规范化后的 (页码, 每页数量)，页码从 1 开始
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.max(1) as u64;
        let size = self.size.clamp(1, MAX_SIZE) as u64;
        (page, size)
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_clamps_values() {
        let query = PaginationQuery { page: 0, size: 500 };
        assert_eq!(query.normalized(), (1, MAX_SIZE as u64));

        let query = PaginationQuery { page: 3, size: 0 };
        assert_eq!(query.normalized(), (3, 1));
    }

    #[test]
    fn test_deserialize_from_strings_and_defaults() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page":"2","size":15}"#).expect("valid query");
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 15);

        let query: PaginationQuery = serde_json::from_str("{}").expect("empty query");
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.size, DEFAULT_SIZE);
    }
}
