use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow, WidthType,
};

use super::status_label;
use crate::errors::{Result, TeknofestError};
use crate::models::exports::TeamMember;
use crate::models::projects::Project;

const HEADING_1: &str = "Heading1";
const HEADING_2: &str = "Heading2";

fn base_document() -> Docx {
    Docx::new()
        .add_style(
            Style::new(HEADING_1, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_2, StyleType::Paragraph)
                .name("Heading 2")
                .size(26)
                .bold(),
        )
}

fn empty_line() -> Paragraph {
    Paragraph::new()
}

fn labelled(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(label).bold())
        .add_run(Run::new().add_text(value))
}

fn cell(text: &str, bold: bool) -> TableCell {
    let run = Run::new().add_text(text);
    let run = if bold { run.bold() } else { run };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

fn pack(docx: Docx) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| TeknofestError::document_generation(format!("DOCX oluşturulamadı: {e}")))?;
    Ok(buffer.into_inner())
}

pub fn team_file(team_name: &str, team_description: &str, members: &[TeamMember]) -> Result<Vec<u8>> {
    let header = TableRow::new(vec![
        cell("Ad Soyad", true),
        cell("Görev", true),
        cell("Sınıf", true),
    ]);
    let rows = std::iter::once(header)
        .chain(members.iter().map(|m| {
            TableRow::new(vec![
                cell(&m.name, false),
                cell(&m.role, false),
                cell(&m.class, false),
            ])
        }))
        .collect::<Vec<_>>();

    let docx = base_document()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("TAKIM TANITIM DOSYASI"))
                .style(HEADING_1)
                .align(AlignmentType::Center),
        )
        .add_paragraph(empty_line())
        .add_paragraph(labelled("Takım İsmi: ", team_name))
        .add_paragraph(empty_line())
        .add_paragraph(labelled("Takım Açıklaması: ", team_description))
        .add_paragraph(empty_line())
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Takım Üyeleri"))
                .style(HEADING_2),
        )
        .add_table(Table::new(rows).width(5000, WidthType::Pct));

    pack(docx)
}

pub fn project_report(project: &Project) -> Result<Vec<u8>> {
    let mut docx = base_document()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(&project.title))
                .style(HEADING_1)
                .align(AlignmentType::Center),
        )
        .add_paragraph(empty_line())
        .add_paragraph(labelled("Öğrenci: ", &project.student_username))
        .add_paragraph(labelled("Durum: ", status_label(project.status)))
        .add_paragraph(labelled(
            "Son Güncelleme: ",
            &project.updated_at.format("%d.%m.%Y %H:%M").to_string(),
        ))
        .add_paragraph(empty_line());

    // 每行正文一个段落，保留空行
    for line in project.description.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    pack(docx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::projects::ProjectStatus;
    use std::io::Read;

    fn document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[test]
    fn team_file_is_a_zip_with_table() {
        let members = vec![TeamMember {
            name: "Ayşe".into(),
            role: "Yazılım".into(),
            class: "10-A".into(),
        }];
        let bytes = team_file("Kaçkar", "Sel erken uyarı", &members).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));

        let xml = document_xml(&bytes);
        assert!(xml.contains("TAKIM TANITIM DOSYASI"));
        assert!(xml.contains("Takım İsmi: "));
        assert!(xml.contains("Ad Soyad"));
        assert!(xml.contains("Ayşe"));
        assert!(xml.contains("w:tbl"));
    }

    #[test]
    fn project_report_contains_description_lines() {
        let now = chrono::Utc::now();
        let project = Project {
            id: 3,
            student_username: "ali".into(),
            title: "Akıllı Çay Bahçesi".into(),
            description: "PROBLEM\nToprak nemi ölçülmüyor.".into(),
            status: ProjectStatus::Submitted,
            created_at: now,
            updated_at: now,
        };
        let xml = document_xml(&project_report(&project).unwrap());
        assert!(xml.contains("Akıllı Çay Bahçesi"));
        assert!(xml.contains("Toprak nemi ölçülmüyor."));
        assert!(xml.contains("Öğretmene Gönderildi"));
    }
}
