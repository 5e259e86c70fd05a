use crate::models::teacher::responses::FeedbackPreset;

/// 教师面板的快捷评价按钮
pub static FEEDBACK_PRESETS: [FeedbackPreset; 6] = [
    FeedbackPreset {
        status_label: "👍 GÜÇLÜ",
        text: "Rapor düzeni ve akademik dil harika, jüriden tam puan alabilir.",
    },
    FeedbackPreset {
        status_label: "⚠️ GELİŞTİRİLMELİ",
        text: "Özgünlük kısmını biraz daha somut verilerle desteklemelisin.",
    },
    FeedbackPreset {
        status_label: "❌ UYGUN DEĞİL",
        text: "Yöntem veya proje içeriği Teknofest kriterlerine uygun görünmüyor.",
    },
    FeedbackPreset {
        status_label: "💡 TAVSİYE",
        text: "Yöntem kısmı net ama özgünlük zayıf.",
    },
    FeedbackPreset {
        status_label: "💡 TAVSİYE",
        text: "Sayısal veri ve kaynak kullanımı artırılmalı.",
    },
    FeedbackPreset {
        status_label: "💡 TAVSİYE",
        text: "Teknik detaylar yetersiz kalmış, algoritma ekleyebilirsin.",
    },
];

/// 写入留言的评价文本
pub fn format_feedback(status_label: &str, text: &str) -> String {
    format!("[DEĞERLENDİRME: {status_label}] {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_prefix() {
        assert_eq!(
            format_feedback("👍 GÜÇLÜ", "Çok iyi."),
            "[DEĞERLENDİRME: 👍 GÜÇLÜ] Çok iyi."
        );
    }
}
