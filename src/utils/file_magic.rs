/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// 仅接受可被解析的文档格式：PDF 与 OOXML（ZIP 容器）。
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".pdf"）
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".pdf" => data.starts_with(b"%PDF"),
        ".docx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        _ => false,
    }
}

/// 从文件名取出小写扩展名（包含点号）
pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic() {
        assert!(validate_magic_bytes(b"%PDF-1.7\n", ".pdf"));
        assert!(validate_magic_bytes(b"%PDF-1.4", ".PDF"));
        assert!(!validate_magic_bytes(b"PK\x03\x04", ".pdf"));
    }

    #[test]
    fn test_docx_magic() {
        assert!(validate_magic_bytes(&[0x50, 0x4B, 0x03, 0x04, 0x14], ".docx"));
        assert!(!validate_magic_bytes(b"%PDF-1.7", ".docx"));
    }

    #[test]
    fn test_legacy_and_unknown_rejected() {
        let ole = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        assert!(!validate_magic_bytes(&ole, ".doc"));
        assert!(!validate_magic_bytes(b"hello", ".txt"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".pdf"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("Rapor.DOCX"), Some(".docx".to_string()));
        assert_eq!(extension_of("proje.final.pdf"), Some(".pdf".to_string()));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".pdf"), None);
    }
}
