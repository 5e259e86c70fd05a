//! Word / PDF 文件生成与文本提取

pub mod docx;
pub mod extract;
pub mod pdf;

use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};

use crate::errors::Result;
use crate::models::exports::{ExportFormat, TeamFileRequest};
use crate::models::projects::{Project, ProjectStatus};

/// 生成好的待下载文件
#[derive(Debug)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl GeneratedFile {
    /// `Content-Disposition` 头，同时提供 ASCII 回退名和 UTF-8 文件名
    pub fn content_disposition(&self) -> ContentDisposition {
        let fallback: String = self
            .file_name
            .chars()
            .map(|c| match c {
                'ç' => 'c',
                'Ç' => 'C',
                'ö' => 'o',
                'Ö' => 'O',
                'ü' => 'u',
                'Ü' => 'U',
                '"' | '\\' => '_',
                c if c.is_ascii() => c,
                c => pdf::transliterate_char(c).unwrap_or('_'),
            })
            .collect();

        ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![
                DispositionParam::Filename(fallback),
                DispositionParam::FilenameExt(ExtendedValue {
                    charset: Charset::Ext("UTF-8".to_string()),
                    language_tag: None,
                    value: self.file_name.clone().into_bytes(),
                }),
            ],
        }
    }
}

pub fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Draft => "Taslak",
        ProjectStatus::Submitted => "Öğretmene Gönderildi",
    }
}

/// 团队介绍文件
pub fn team_file(request: &TeamFileRequest) -> Result<GeneratedFile> {
    let members = request.normalized_members();
    let bytes = match request.format {
        ExportFormat::Docx => {
            docx::team_file(&request.team_name, &request.team_description, &members)?
        }
        ExportFormat::Pdf => pdf::team_file(&request.team_name, &request.team_description, &members)?,
    };
    Ok(GeneratedFile {
        file_name: request.file_name(),
        content_type: request.format.content_type(),
        bytes,
    })
}

/// 单个项目报告
pub fn project_report(project: &Project, format: ExportFormat) -> Result<GeneratedFile> {
    let bytes = match format {
        ExportFormat::Docx => docx::project_report(project)?,
        ExportFormat::Pdf => pdf::project_report(project)?,
    };
    Ok(GeneratedFile {
        file_name: format!("proje_{}.{}", project.id, format.extension()),
        content_type: format.content_type(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_has_ascii_fallback() {
        let file = GeneratedFile {
            file_name: "Işık Takımı_dosyasi.pdf".to_string(),
            content_type: "application/pdf",
            bytes: vec![],
        };
        let header = file.content_disposition().to_string();
        assert!(header.starts_with("attachment; filename=\"Isik Takimi_dosyasi.pdf\""));
        assert!(header.contains("filename*=UTF-8''I%C5%9F%C4%B1k%20Tak%C4%B1m%C4%B1_dosyasi.pdf"));
    }
}
