//! Turns an [`AnalysisResult`] into the sections a front end displays.

use crate::report::{AnalysisResult, ResultTable};

pub const TABLE_HEADERS: (&str, &str) = ("Field", "Value");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody<'a> {
    Text(&'a str),
    Table(&'a [(String, String)]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: &'static str,
    pub body: SectionBody<'a>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportView<'a> {
    pub sections: Vec<Section<'a>>,
}

impl<'a> ReportView<'a> {
    pub fn titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }
}

pub fn render(result: &AnalysisResult) -> ReportView<'_> {
    let mut sections = vec![Section {
        title: "Transcript (Urdu)",
        body: SectionBody::Text(&result.transcript),
    }];

    let tables: [(&'static str, &ResultTable); 5] = [
        ("Abusive Content Analysis", &result.abusive_table),
        ("Violent Content Analysis", &result.violent_table),
        ("NSFW Content Analysis", &result.nsfw_audio_table),
        ("Political Content Analysis", &result.political_table),
        ("Religious Content Analysis", &result.religious_table),
    ];
    for (title, table) in tables {
        if table.rows().is_empty() {
            tracing::warn!(section = title, "service sent an empty table, skipping");
            continue;
        }
        if table.is_not_analyzed() {
            continue;
        }
        sections.push(Section {
            title,
            body: SectionBody::Table(table.rows()),
        });
    }

    let video_texts = [
        ("Video NSFW Detection", result.video_nsfw_info.as_deref()),
        ("Video Violence Detection", result.video_violence_info.as_deref()),
    ];
    for (title, info) in video_texts {
        if let Some(info) = info.filter(|s| !s.is_empty()) {
            sections.push(Section {
                title,
                body: SectionBody::Text(info),
            });
        }
    }

    ReportView { sections }
}

/// Format a rendered report as human-readable markdown
pub fn format_report_readable(view: &ReportView<'_>) -> String {
    let mut output = String::new();

    for section in &view.sections {
        output.push_str(&format!("## {}\n\n", section.title));

        match section.body {
            SectionBody::Text(text) => {
                output.push_str(text.trim_end());
                output.push_str("\n\n");
            }
            SectionBody::Table(rows) => {
                let width = rows
                    .iter()
                    .map(|(label, _)| label.chars().count())
                    .chain(std::iter::once(TABLE_HEADERS.0.len()))
                    .max()
                    .unwrap_or_default();

                output.push_str(&format!(
                    "{:<width$}  {}\n",
                    TABLE_HEADERS.0, TABLE_HEADERS.1
                ));
                output.push_str(&format!("{}  {}\n", "-".repeat(width), "-".repeat(5)));

                for (label, value) in rows {
                    // Multi-line values continue under the value column.
                    let mut lines = value.lines();
                    let first = lines.next().unwrap_or_default();
                    output.push_str(&format!("{:<width$}  {}\n", label, first));
                    for line in lines {
                        output.push_str(&format!("{:<width$}  {}\n", "", line));
                    }
                }
                output.push('\n');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> ResultTable {
        rows.iter().copied().collect()
    }

    fn skipped() -> ResultTable {
        table(&[("N/A", "Not analyzed")])
    }

    fn result_with_abusive(abusive: ResultTable) -> AnalysisResult {
        AnalysisResult {
            transcript: "hello".into(),
            abusive_table: abusive,
            violent_table: skipped(),
            nsfw_audio_table: skipped(),
            political_table: skipped(),
            religious_table: skipped(),
            video_nsfw_info: None,
            video_violence_info: None,
        }
    }

    #[test]
    fn not_analyzed_section_is_omitted() {
        let result = result_with_abusive(table(&[("status", "Not analyzed")]));
        let view = render(&result);

        assert_eq!(view.titles(), vec!["Transcript (Urdu)"]);
    }

    #[test]
    fn analyzed_section_keeps_every_row_in_order() {
        let result = result_with_abusive(table(&[
            ("status", "clean"),
            ("reason", "none"),
            ("Not analyzed", "later rows are irrelevant"),
        ]));
        let view = render(&result);

        assert_eq!(
            view.titles(),
            vec!["Transcript (Urdu)", "Abusive Content Analysis"]
        );
        let Some(Section {
            body: SectionBody::Table(rows),
            ..
        }) = view
            .sections
            .iter()
            .find(|s| s.title == "Abusive Content Analysis")
        else {
            panic!("abusive section should be a table");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ("status".to_string(), "clean".to_string()));
        assert_eq!(rows[2].0, "Not analyzed");
    }

    #[test]
    fn transcript_is_always_first_even_when_empty() {
        let mut result = result_with_abusive(skipped());
        result.transcript.clear();
        let view = render(&result);

        assert_eq!(view.sections[0].body, SectionBody::Text(""));
    }

    #[test]
    fn video_sections_need_non_empty_text() {
        let mut result = result_with_abusive(skipped());
        result.video_nsfw_info = Some("nsfw 0.97".into());
        result.video_violence_info = Some(String::new());
        let view = render(&result);

        assert_eq!(
            view.titles(),
            vec!["Transcript (Urdu)", "Video NSFW Detection"]
        );
    }

    #[test]
    fn empty_table_is_skipped() {
        let result = result_with_abusive(ResultTable::default());
        let view = render(&result);
        assert_eq!(view.titles(), vec!["Transcript (Urdu)"]);
    }

    #[test]
    fn readable_output_lists_sections_and_rows() {
        let mut result = result_with_abusive(table(&[("status", "flagged"), ("terms", "a\nb")]));
        result.video_violence_info = Some("Violence\n".into());
        let out = format_report_readable(&render(&result));

        assert!(out.starts_with("## Transcript (Urdu)\n\nhello\n\n"));
        assert!(out.contains("## Abusive Content Analysis\n\nField   Value\n"));
        assert!(out.contains("status  flagged\n"));
        assert!(out.contains("terms   a\n        b\n"));
        assert!(out.contains("## Video Violence Detection\n\nViolence\n"));
        assert!(!out.contains("Violent Content Analysis"));
    }
}
