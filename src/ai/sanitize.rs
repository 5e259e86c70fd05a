use once_cell::sync::Lazy;
use regex::Regex;

// 行首的 Markdown 标记：标题、列表、引用
static LEADING_MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[#*>\- ]+").expect("Invalid leading markup regex"));

static INLINE_MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#*`]").expect("Invalid inline markup regex"));

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
    )
    .expect("Invalid emoji regex")
});

/// 把模型输出整理为纯文本报告
pub fn sanitize_report(raw: &str) -> String {
    let text = LEADING_MARKUP_RE.replace_all(raw, "");
    let text = INLINE_MARKUP_RE.replace_all(&text, "");
    let text = EMOJI_RE.replace_all(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_headings_and_bullets() {
        let raw = "## PROJE ÖZETİ\n- Birinci madde\n> alıntı\n* yıldız\nDüz satır";
        assert_eq!(
            sanitize_report(raw),
            "PROJE ÖZETİ\nBirinci madde\nalıntı\nyıldız\nDüz satır"
        );
    }

    #[test]
    fn strips_inline_markup() {
        assert_eq!(
            sanitize_report("Bu **önemli** bir `kod` #etiket"),
            "Bu önemli bir kod etiket"
        );
    }

    #[test]
    fn removes_emoji_ranges() {
        assert_eq!(sanitize_report("Harika 🚀 proje ✅ 😀"), "Harika  proje");
    }

    #[test]
    fn keeps_inner_hyphens_and_trims() {
        assert_eq!(
            sanitize_report("\n\n  Hava-hava görevleri  \n"),
            "Hava-hava görevleri"
        );
    }
}
