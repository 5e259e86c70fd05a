use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 导出文件格式
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/export.ts")]
pub enum ExportFormat {
    #[default]
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/export.ts")]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub class: String,
}

// 团队介绍文件导出请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/export.ts")]
pub struct TeamFileRequest {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub team_description: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl TeamFileRequest {
    /// 至少保留一名成员（空白行）
    pub fn normalized_members(&self) -> Vec<TeamMember> {
        if self.members.is_empty() {
            vec![TeamMember::default()]
        } else {
            self.members.clone()
        }
    }

    pub fn file_name(&self) -> String {
        let base = self.team_name.trim();
        let base = if base.is_empty() { "takim" } else { base };
        format!("{base}_dosyasi.{}", self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_falls_back_to_takim() {
        let request = TeamFileRequest {
            format: ExportFormat::Pdf,
            team_name: "  ".into(),
            team_description: String::new(),
            members: vec![],
        };
        assert_eq!(request.file_name(), "takim_dosyasi.pdf");
        assert_eq!(request.normalized_members().len(), 1);
    }

    #[test]
    fn test_file_name_uses_team_name() {
        let request: TeamFileRequest =
            serde_json::from_str(r#"{"team_name":"Rize Tekno","members":[{"name":"Ali"}]}"#)
                .expect("valid request");
        assert_eq!(request.format, ExportFormat::Docx);
        assert_eq!(request.file_name(), "Rize Tekno_dosyasi.docx");
        assert_eq!(request.normalized_members()[0].name, "Ali");
    }
}
