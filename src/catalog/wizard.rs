use std::collections::HashMap;

use crate::ai::prompts::TEKNOFEST_EXPERT_PROMPT;
use crate::models::wizard::responses::{
    RejectionReason, ScoringCriterion, WizardQuestion, WizardQuestionsResponse, WizardStep,
};

pub const QUESTIONS_PER_STEP: usize = 6;
pub const MISSING_ANSWER: &str = "Öğrenci tarafından belirtilmedi.";
pub const DEFAULT_REPORT_TITLE: &str = "AI Destekli Teknofest Raporu";
const TITLE_MAX_CHARS: usize = 50;

const fn q(
    id: &'static str,
    section: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> WizardQuestion {
    WizardQuestion {
        id,
        section,
        label,
        placeholder,
    }
}

pub static QUESTION_SET: [WizardQuestion; 18] = [
    q("q1", "Problem ve İhtiyac", "Hangi problemi çözüyorum?", "Çözmek istediğiniz sorunu net bir şekilde tanımlayın."),
    q("q2", "Problem ve İhtiyac", "Bu problem neden önemli?", "Problemin güncelliği ve ciddiyeti nedir?"),
    q("q3", "Hedef Kitle", "Hedef kitle / kullanıcı kim?", "Bu çözümü kim kullanacak?"),
    q("q4", "Problem ve İhtiyac", "Mevcut çözümler neler ve neden yetersiz?", "Rakipler veya şu anki yöntemler nerede tıkanıyor?"),
    q("q5", "Çözüm", "Benim çözümüm ne öneriyor?", "Çözümünüzün temel çalışma prensibi nedir?"),
    q("q6", "İnovasyon", "Projenin özgün ve yenilikçi yönü ne?", "Sizi diğerlerinden ayıran o \"parlak\" fikir nedir?"),
    q("q7", "Teknik", "Hangi teknoloji ve yöntemleri kullanacağım?", "Yazılım dilleri, sensörler, algoritmalar..."),
    q("q8", "Kategori", "Proje hangi TEKNOFEST kategorisine uyuyor?", "Akıllı Ulaşım, İnsanlık Yararına Teknoloji vb."),
    q("q9", "Teknik", "Projenin teknik kapsamı ve sınırları neler?", "Proje neyi yapar, neyi yapmaz?"),
    q("q10", "Uygulanabilirlik", "Gerçek hayatta kullanım durumu nedir?", "Saha denemeleri veya prototip süreci nasıl olacak?"),
    q("q11", "Planlama", "Geliştirme süreci nasıl ilerleyecek?", "Tasarım, geliştirme, test aşamaları."),
    q("q12", "Takım", "Takım yapısı ve görev dağılımı nasıl olacak?", "Yazılım, Tasarım, Mekanik sorumluları."),
    q("q13", "Kaynaklar", "Gerekli donanım, yazılım ve veri kaynakları neler?", "Hangi malzemelere ihtiyacınız var?"),
    q("q14", "Risk", "Karşılaşılabilecek riskler ve çözüm planı nedir?", "Teknik veya lojistik aksaklıklara karşı B planınız ne?"),
    q("q15", "Başarı", "Başarıyı nasıl ölçeceğim?", "Hangi metriklerle projenin çalıştığını kanıtlayacaksınız?"),
    q("q16", "Etki", "Projenin yaygın etkisi ve sürdürülebilirliği nedir?", "Gelecekte proje nasıl büyüyecek?"),
    q("q17", "Etik", "Etik, güvenlik ve yasal boyutlar var mı?", "Veri gizliliği, güvenlik önlemleri vb."),
    q("q18", "Maliyet", "Tahmini maliyet ve bütçe planı nedir?", "Projenin hayata geçmesi için gereken yaklaşık tutar ve harcama kalemleri."),
];

const STEP_TITLES: [&str; 3] = [
    "Temel Konsept",
    "Teknik Detaylar",
    "Uygulanabilirlik & Maliyet",
];

pub static SCORING_CRITERIA: [ScoringCriterion; 6] = [
    ScoringCriterion {
        label: "Yöntem ve Hedef Kitle",
        score: "24 Puan",
        description: "Bilimsel temelli yöntem, somut veriler ve doğru hedef kitle tanımı.",
    },
    ScoringCriterion {
        label: "Çözüm / İhtiyaç",
        score: "16 Puan",
        description: "Net, mümkünse sayısal ve kaynaklı problem tanımı.",
    },
    ScoringCriterion {
        label: "Proje Özeti",
        score: "14 Puan",
        description: "Konu–amaç (6), kapsam–yöntem (8). En son bölümdür.",
    },
    ScoringCriterion {
        label: "Rapor Düzeni",
        score: "12 Puan",
        description: "Şablon, yazı tipi ve biçim kurallarına tam uyum (Kritik!).",
    },
    ScoringCriterion {
        label: "Diğer Bölümler",
        score: "22 Puan",
        description: "Yerlilik, özgünlük, yenilik, ticarileşme, takvim ve ekip.",
    },
    ScoringCriterion {
        label: "Kaynakça",
        score: "6 Puan",
        description: "Erişilebilir ve eksiksiz akademik kaynaklar.",
    },
];

pub static REJECTION_REASONS: [RejectionReason; 4] = [
    RejectionReason {
        label: "Şablon İhlali",
        description: "Word şablonunun değiştirilmesi doğrudan elenme sebebidir.",
    },
    RejectionReason {
        label: "Sayfa Sınırı",
        description: "Kapak ve kaynakça dahil toplam 6 sayfa aşılmamalıdır.",
    },
    RejectionReason {
        label: "Günlük Dil Kullanımı",
        description: "Öznel ve samimi dil kullanımı akademik raporda puan kaybettirir.",
    },
    RejectionReason {
        label: "Kaynak Göstermeme",
        description: "İnternet haberleri yerine akademik URL veya makale sunulmalıdır.",
    },
];

pub static WRITING_TIPS: [&str; 3] = [
    "Cümlelerinizi 'yaptım' yerine 'yapıldı' şeklinde kurun.",
    "AI'nın verdiği 'Güçlendirme Önerileri'ni mutlaka uygulayın.",
    "Maliyet hesabında gerçekçi rakamlar sunmaya özen gösterin.",
];

/// 按 6 题一组切分为三个步骤
pub fn steps() -> Vec<WizardStep> {
    QUESTION_SET
        .chunks(QUESTIONS_PER_STEP)
        .zip(STEP_TITLES)
        .enumerate()
        .map(|(index, (questions, title))| WizardStep {
            number: index as u8 + 1,
            title,
            questions: questions.to_vec(),
        })
        .collect()
}

pub fn questions_response() -> WizardQuestionsResponse {
    WizardQuestionsResponse {
        steps: steps(),
        criteria: SCORING_CRITERIA.to_vec(),
        rejection_reasons: REJECTION_REASONS.to_vec(),
        tips: WRITING_TIPS.to_vec(),
    }
}

fn answer_for<'a>(answers: &'a HashMap<String, String>, id: &str) -> Option<&'a str> {
    answers
        .get(id)
        .map(String::as_str)
        .filter(|answer| !answer.is_empty())
}

/// 评审提示词 + 每题一行 `"{题目}: {答案}"`
pub fn build_report_prompt(answers: &HashMap<String, String>) -> String {
    let answers_text = QUESTION_SET
        .iter()
        .map(|question| {
            format!(
                "{}: {}",
                question.label,
                answer_for(answers, question.id).unwrap_or(MISSING_ANSWER)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{TEKNOFEST_EXPERT_PROMPT}{answers_text}")
}

/// 以第一题答案作为项目标题，超过 50 字符截断并加省略号
pub fn derive_title(answers: &HashMap<String, String>) -> String {
    match answer_for(answers, "q1") {
        Some(problem) if problem.chars().count() > TITLE_MAX_CHARS => {
            let head: String = problem.chars().take(TITLE_MAX_CHARS).collect();
            format!("{head}...")
        }
        Some(problem) => problem.to_string(),
        None => DEFAULT_REPORT_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn three_steps_of_six() {
        let steps = steps();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.questions.len() == 6));
        assert_eq!(steps[0].title, "Temel Konsept");
        assert_eq!(steps[1].questions[0].id, "q7");
        assert_eq!(steps[2].number, 3);
        assert_eq!(steps[2].questions[5].id, "q18");
    }

    #[test]
    fn prompt_lists_every_question_in_order() {
        let prompt = build_report_prompt(&answers(&[("q1", "Sel riski"), ("q18", "")]));
        let body = prompt.strip_prefix(TEKNOFEST_EXPERT_PROMPT).unwrap();
        let lines: Vec<&str> = body.split('\n').collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "Hangi problemi çözüyorum?: Sel riski");
        assert_eq!(
            lines[1],
            "Bu problem neden önemli?: Öğrenci tarafından belirtilmedi."
        );
        assert_eq!(
            lines[17],
            "Tahmini maliyet ve bütçe planı nedir?: Öğrenci tarafından belirtilmedi."
        );
    }

    #[test]
    fn title_from_first_answer() {
        assert_eq!(derive_title(&answers(&[("q1", "Çay atıkları")])), "Çay atıkları");
        assert_eq!(derive_title(&answers(&[])), DEFAULT_REPORT_TITLE);
        assert_eq!(derive_title(&answers(&[("q1", "")])), DEFAULT_REPORT_TITLE);

        let exact = "ç".repeat(50);
        assert_eq!(derive_title(&answers(&[("q1", &exact)])), exact);

        let long = "ğ".repeat(51);
        let title = derive_title(&answers(&[("q1", &long)]));
        assert_eq!(title, format!("{}...", "ğ".repeat(50)));
    }
}
