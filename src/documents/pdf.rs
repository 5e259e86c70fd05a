use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rect, Rgb,
};

use super::status_label;
use crate::errors::{Result, TeknofestError};
use crate::models::exports::TeamMember;
use crate::models::projects::Project;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_X: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;
// Helvetica 平均字宽约 0.5em，用于估算换行
const AVG_CHAR_EM: f32 = 0.5;

const HEADER_GREEN: (u8, u8, u8) = (16, 185, 129);

/// 内置字体只支持 WinAnsi 编码，土耳其语特有字母替换为近似拉丁字母
pub fn transliterate_char(c: char) -> Option<char> {
    match c {
        'ğ' => Some('g'),
        'Ğ' => Some('G'),
        'ş' => Some('s'),
        'Ş' => Some('S'),
        'ı' => Some('i'),
        'İ' => Some('I'),
        _ => None,
    }
}

pub fn transliterate(text: &str) -> String {
    text.chars()
        .map(|c| transliterate_char(c).unwrap_or(c))
        .collect()
}

fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * PT_TO_MM * AVG_CHAR_EM
}

/// 按估算字宽把文本折行，保留原有的换行
pub fn wrap_text(text: &str, max_width_mm: f32, font_size: f32) -> Vec<String> {
    let max_chars = ((max_width_mm / (font_size * PT_TO_MM * AVG_CHAR_EM)) as usize).max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            // 超长单词强制断开
            while word.len() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let word: String = word.into_iter().collect();
            let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
            if needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pdf_error(e: impl std::fmt::Display) -> TeknofestError {
    TeknofestError::document_generation(format!("PDF oluşturulamadı: {e}"))
}

/// A4 画布，坐标以页面左上角为原点（毫米）
struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor: f32,
}

impl Canvas {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(transliterate(title), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Katman 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: MARGIN_TOP,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Katman 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = MARGIN_TOP;
    }

    /// 剩余高度不足时换页
    fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - MARGIN_BOTTOM {
            self.new_page();
        }
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(transliterate(text), size, Mm(x), Mm(PAGE_HEIGHT - y), font);
    }

    fn centered(&self, text: &str, size: f32, y: f32, bold: bool) {
        let x = (PAGE_WIDTH - text_width_mm(text, size)) / 2.0;
        self.text(text, size, x.max(MARGIN_X), y, bold);
    }

    fn fill_color(&self, (r, g, b): (u8, u8, u8)) {
        self.layer.set_fill_color(Color::Rgb(Rgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            None,
        )));
    }

    fn rect(&self, x: f32, y: f32, width: f32, height: f32, mode: PaintMode) {
        let rect = Rect::new(
            Mm(x),
            Mm(PAGE_HEIGHT - y - height),
            Mm(x + width),
            Mm(PAGE_HEIGHT - y),
        )
        .with_mode(mode);
        self.layer.add_rect(rect);
    }

    /// 从当前游标处逐行输出折行后的文本
    fn paragraph(&mut self, lines: &[String], size: f32, line_height: f32) {
        for line in lines {
            self.ensure_space(line_height);
            self.text(line, size, MARGIN_X, self.cursor, false);
            self.cursor += line_height;
        }
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}

const TABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
const ROW_HEIGHT: f32 = 8.0;

fn table_row(canvas: &mut Canvas, cells: [&str; 3], header: bool) {
    canvas.ensure_space(ROW_HEIGHT);
    let column = TABLE_WIDTH / 3.0;
    let y = canvas.cursor;

    if header {
        canvas.fill_color(HEADER_GREEN);
        canvas.rect(MARGIN_X, y, TABLE_WIDTH, ROW_HEIGHT, PaintMode::Fill);
        canvas.fill_color((255, 255, 255));
    } else {
        canvas.fill_color((0, 0, 0));
    }

    for (index, value) in cells.iter().enumerate() {
        let x = MARGIN_X + column * index as f32;
        canvas.rect(x, y, column, ROW_HEIGHT, PaintMode::Stroke);
        let shown = wrap_text(value, column - 4.0, 10.0)
            .into_iter()
            .next()
            .unwrap_or_default();
        canvas.text(&shown, 10.0, x + 2.0, y + 5.5, header);
    }

    canvas.fill_color((0, 0, 0));
    canvas.cursor += ROW_HEIGHT;
}

pub fn team_file(team_name: &str, team_description: &str, members: &[TeamMember]) -> Result<Vec<u8>> {
    let mut canvas = Canvas::new("Takım Tanıtım Dosyası")?;

    canvas.centered("TAKIM TANITIM DOSYASI", 22.0, 20.0, false);
    canvas.text("Takım İsmi:", 12.0, 20.0, 40.0, true);
    canvas.text(team_name, 12.0, 50.0, 40.0, false);
    canvas.text("Takım Açıklaması:", 12.0, 20.0, 50.0, true);

    canvas.cursor = 60.0;
    let description = wrap_text(team_description, 140.0, 12.0);
    canvas.paragraph(&description, 12.0, 7.0);

    canvas.ensure_space(ROW_HEIGHT * 2.0 + 5.0);
    canvas.text("Takım Üyeleri", 12.0, 20.0, canvas.cursor, true);
    canvas.cursor += 5.0;

    table_row(&mut canvas, ["Ad Soyad", "Görev", "Sınıf"], true);
    for member in members {
        table_row(
            &mut canvas,
            [&member.name, &member.role, &member.class],
            false,
        );
    }

    canvas.finish()
}

pub fn project_report(project: &Project) -> Result<Vec<u8>> {
    let mut canvas = Canvas::new(&project.title)?;

    for line in wrap_text(&project.title, TABLE_WIDTH, 18.0) {
        canvas.ensure_space(9.0);
        canvas.text(&line, 18.0, MARGIN_X, canvas.cursor + 6.0, true);
        canvas.cursor += 9.0;
    }
    canvas.cursor += 4.0;

    let meta = [
        ("Öğrenci:", project.student_username.clone()),
        ("Durum:", status_label(project.status).to_string()),
        (
            "Son Güncelleme:",
            project.updated_at.format("%d.%m.%Y %H:%M").to_string(),
        ),
    ];
    for (label, value) in &meta {
        canvas.text(label, 11.0, MARGIN_X, canvas.cursor, true);
        canvas.text(value, 11.0, MARGIN_X + 35.0, canvas.cursor, false);
        canvas.cursor += 6.0;
    }
    canvas.cursor += 6.0;

    let body = wrap_text(&project.description, TABLE_WIDTH, 11.0);
    canvas.paragraph(&body, 11.0, 6.0);

    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::projects::ProjectStatus;

    #[test]
    fn transliterates_non_winansi_letters() {
        assert_eq!(transliterate("Işık Şişe Dağ İz"), "Isik Sise Dag Iz");
        // WinAnsi 中已有的字母保持不变
        assert_eq!(transliterate("çöü ÇÖÜ"), "çöü ÇÖÜ");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        // 12pt 下 140mm 约 66 个字符
        let text = "kelime ".repeat(30);
        let lines = wrap_text(&text, 140.0, 12.0);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 66));
        assert!(lines.iter().all(|l| !l.starts_with(' ') && !l.ends_with(' ')));
    }

    #[test]
    fn wrap_keeps_explicit_breaks_and_splits_long_words() {
        let lines = wrap_text("a\n\nb", 100.0, 12.0);
        assert_eq!(lines, vec!["a", "", "b"]);

        let long = "x".repeat(150);
        let lines = wrap_text(&long, 140.0, 12.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.concat(), long);

        assert_eq!(wrap_text("", 100.0, 12.0), vec![String::new()]);
    }

    #[test]
    fn team_file_is_pdf() {
        let members = vec![TeamMember::default()];
        let bytes = team_file("Kaçkar", &"Açıklama ".repeat(200), &members).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn project_report_is_pdf() {
        let now = chrono::Utc::now();
        let project = Project {
            id: 1,
            student_username: "ayse".into(),
            title: "Çay Atığından Biyoplastik".into(),
            description: "PROJE ÖZETİ\n".repeat(120),
            status: ProjectStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        let bytes = project_report(&project).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
