use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::errors::{Result, TeknofestError};

pub const DOCX_READ_ERROR: &str = "Word belgesi okunamadı.";
pub const PDF_READ_ERROR: &str = "PDF belgesi okunamadı.";
pub const DOCUMENT_TOO_LARGE: &str = "Belge içeriği işlenemeyecek kadar büyük.";
pub const UNSUPPORTED_TYPE: &str = "Lütfen sadece .pdf veya .docx formatında dosya yükleyin.";

// 正文中的文本片段、段落结束、制表符和换行
static DOCX_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab\s*/>|<w:br\s*/>|<w:cr\s*/>")
        .expect("Invalid docx token regex")
});

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|amp|lt|gt|quot|apos);").expect("Invalid entity regex"));

fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                    .and_then(|code| code.ok())
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// 把 `word/document.xml` 转成纯文本，每个段落一行
pub fn docx_xml_to_text(xml: &str) -> String {
    let mut text = String::new();
    for caps in DOCX_TOKEN_RE.captures_iter(xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&decode_entities(run.as_str())),
            None => {
                let token = &caps[0];
                if token.starts_with("<w:tab") {
                    text.push('\t');
                } else {
                    text.push('\n');
                }
            }
        }
    }
    text.trim().to_string()
}

/// 解压 `word/document.xml` 时最多读取 `max_xml_bytes` 字节，超出返回 `None`
fn read_document_xml(
    bytes: &[u8],
    max_xml_bytes: u64,
) -> std::result::Result<Option<String>, Box<dyn std::error::Error>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let entry = archive.by_name("word/document.xml")?;
    if entry.size() > max_xml_bytes {
        return Ok(None);
    }

    // 中央目录里的大小可以伪造，读取时再截断一次
    let mut xml = String::new();
    entry.take(max_xml_bytes + 1).read_to_string(&mut xml)?;
    if xml.len() as u64 > max_xml_bytes {
        return Ok(None);
    }
    Ok(Some(xml))
}

pub fn extract_docx(bytes: &[u8], max_xml_bytes: u64) -> Result<String> {
    match read_document_xml(bytes, max_xml_bytes) {
        Ok(Some(xml)) => Ok(docx_xml_to_text(&xml)),
        Ok(None) => {
            warn!("DOCX body exceeds {} bytes after decompression", max_xml_bytes);
            Err(TeknofestError::document_extraction(DOCUMENT_TOO_LARGE))
        }
        Err(e) => {
            warn!("DOCX extraction failed: {}", e);
            Err(TeknofestError::document_extraction(DOCX_READ_ERROR))
        }
    }
}

pub fn extract_pdf(bytes: &[u8]) -> Result<String> {
    // 解析器遇到畸形文件可能 panic
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match outcome {
        Ok(Ok(text)) => Ok(text.trim().to_string()),
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {}", e);
            Err(TeknofestError::document_extraction(PDF_READ_ERROR))
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            Err(TeknofestError::document_extraction(PDF_READ_ERROR))
        }
    }
}

/// 按扩展名（含点号）选择解析器
pub fn extract_text(extension: &str, bytes: &[u8], max_xml_bytes: u64) -> Result<String> {
    match extension {
        ".pdf" => extract_pdf(bytes),
        ".docx" => extract_docx(bytes, max_xml_bytes),
        _ => Err(TeknofestError::validation(UNSUPPORTED_TYPE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exports::TeamMember;
    use std::io::Write;

    const LIMIT: u64 = 1024 * 1024;

    fn docx_with_body(xml: &[u8]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn xml_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>PROJE</w:t></w:r><w:r><w:t xml:space="preserve"> ÖZETİ</w:t></w:r></w:p>
            <w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t></w:r></w:p>
            <w:p><w:r><w:t>Ar-Ge &amp; Tasarım &#x131; &#252;</w:t></w:r></w:p>
        </w:body></w:document>"#;
        assert_eq!(docx_xml_to_text(xml), "PROJE ÖZETİ\nA\tB\nAr-Ge & Tasarım ı ü");
    }

    #[test]
    fn unknown_entity_is_kept() {
        assert_eq!(decode_entities("a &nbsp; b"), "a &nbsp; b");
    }

    #[test]
    fn reads_generated_docx() {
        let members = vec![TeamMember {
            name: "Zeynep".into(),
            role: "Tasarım".into(),
            class: "11-B".into(),
        }];
        let bytes = crate::documents::docx::team_file("Fırtına", "Rüzgar enerjisi", &members).unwrap();
        let text = extract_text(".docx", &bytes, LIMIT).unwrap();
        assert!(text.contains("TAKIM TANITIM DOSYASI"));
        assert!(text.contains("Rüzgar enerjisi"));
        assert!(text.contains("Zeynep"));
    }

    #[test]
    fn corrupt_files_report_friendly_errors() {
        let err = extract_text(".docx", b"PK\x03\x04garbage", LIMIT).unwrap_err();
        assert_eq!(err.message(), DOCX_READ_ERROR);

        let err = extract_text(".pdf", b"%PDF-broken", LIMIT).unwrap_err();
        assert_eq!(err.message(), PDF_READ_ERROR);

        let err = extract_text(".txt", b"hello", LIMIT).unwrap_err();
        assert_eq!(err.message(), UNSUPPORTED_TYPE);
    }

    #[test]
    fn oversized_docx_body_is_rejected() {
        // 几 KB 的压缩包解压后远超上限
        let mut xml = b"<w:p><w:r><w:t>".to_vec();
        xml.extend(std::iter::repeat_n(b' ', 4 * 1024 * 1024));
        xml.extend_from_slice(b"</w:t></w:r></w:p>");
        let bytes = docx_with_body(&xml);
        assert!(bytes.len() < 64 * 1024);

        let err = extract_text(".docx", &bytes, LIMIT).unwrap_err();
        assert_eq!(err.message(), DOCUMENT_TOO_LARGE);

        let small = docx_with_body(b"<w:p><w:r><w:t>Sel riski</w:t></w:r></w:p>");
        assert_eq!(extract_text(".docx", &small, LIMIT).unwrap(), "Sel riski");
    }
}
