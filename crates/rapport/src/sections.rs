//! Report body: table of contents, front sections, chapters and annexes.
//!
//! Every section leaves unwritten content as an italic gray placeholder so
//! the generated skeleton stays legible. Chapter numbering is positional,
//! `1.` / `1.2.` / `1.2.3.`, recomputed identically in the table of
//! contents and the body.

use docx_rs::*;

use crate::model::{ChapterItem, ReportData};
use crate::support::{cm, or_placeholder, page_break, pt, PLACEHOLDER_GRAY};

/// Heuristic start page of the first numbered section (cover + contents).
const FIRST_CONTENT_PAGE: u32 = 3;

/// A heading paragraph in one of the registered styles.
fn heading(text: &str, style: &str, centered: bool) -> Paragraph {
    let mut para = Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style);
    if centered {
        para = para.align(AlignmentType::Center);
    }
    para
}

/// An italic gray placeholder line.
fn placeholder(text: &str) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(text)
            .italic()
            .color(PLACEHOLDER_GRAY),
    )
}

/// One contents line: indented title, dot leader, right-aligned page.
fn toc_entry(text: &str, level: u8, page: &str) -> Paragraph {
    let left = match level {
        1 => 0,
        2 => cm(0.75),
        _ => cm(1.5),
    };
    let mut title = Run::new().add_text(text);
    title = match level {
        1 => title.bold().size(pt(11)),
        2 => title.size(pt(10)),
        _ => title.size(pt(10)).italic(),
    };
    let mut page_run = Run::new()
        .add_text(page)
        .size(pt(if level == 1 { 11 } else { 10 }));
    if level == 1 {
        page_run = page_run.bold();
    }
    Paragraph::new()
        .indent(Some(left), Some(SpecialIndentType::FirstLine(0)), None, None)
        .line_spacing(LineSpacing::new().after(4 * 20))
        .add_tab(
            Tab::new()
                .val(TabValueType::Right)
                .leader(TabLeaderType::Dot)
                .pos(cm(15.0) as usize),
        )
        .add_run(title)
        .add_run(Run::new().add_tab())
        .add_run(page_run)
}

/// Table of contents with estimated page numbers.
///
/// Pages are a coarse one-page-per-section heuristic, not live references;
/// sub-chapters share their chapter's page. The annexes line closes the
/// table without advancing the counter.
pub fn toc(docx: Docx, data: &ReportData) -> Docx {
    let mut docx = docx
        .add_paragraph(heading("TABLE DES MATIÈRES", "Heading1", true))
        .add_paragraph(Paragraph::new());

    let mut page = FIRST_CONTENT_PAGE;
    if data.include_thanks {
        docx = docx.add_paragraph(toc_entry("REMERCIEMENTS", 1, &page.to_string()));
        page += 1;
    }
    if data.include_abstract {
        docx = docx.add_paragraph(toc_entry("RÉSUMÉ", 1, &page.to_string()));
        page += 1;
    }

    for (idx, chapter) in data.chapters.iter().enumerate() {
        let num = idx + 1;
        docx = docx.add_paragraph(toc_entry(
            &format!("{num}. {}", chapter.title),
            1,
            &page.to_string(),
        ));
        for (sub_idx, sub) in chapter.children.iter().enumerate() {
            let sub_num = sub_idx + 1;
            docx = docx.add_paragraph(toc_entry(
                &format!("{num}.{sub_num}. {}", sub.title),
                2,
                &page.to_string(),
            ));
            for (subsub_idx, subsub) in sub.children.iter().enumerate() {
                docx = docx.add_paragraph(toc_entry(
                    &format!("{num}.{sub_num}.{}. {}", subsub_idx + 1, subsub.title),
                    3,
                    &page.to_string(),
                ));
            }
        }
        page += 1;
    }

    if data.include_annexes {
        docx = docx.add_paragraph(toc_entry("ANNEXES", 1, &page.to_string()));
    }
    docx.add_paragraph(page_break())
}

/// Acknowledgments, built from the supervisor fields.
pub fn thanks(docx: Docx, data: &ReportData) -> Docx {
    let company = or_placeholder(&data.entreprise_nom, "[Entreprise]");
    let mut docx = docx
        .add_paragraph(heading("REMERCIEMENTS", "Heading1", true))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(format!(
            "Je tiens à remercier {company} pour m'avoir accueilli durant ce stage."
        ))));

    if !data.tuteur_nom.is_empty() {
        let mut para = Paragraph::new().add_run(
            Run::new().add_text(format!("Je remercie particulièrement {}", data.tuteur_nom)),
        );
        if !data.tuteur_poste.is_empty() {
            para = para.add_run(Run::new().add_text(format!(", {},", data.tuteur_poste)));
        }
        docx = docx.add_paragraph(
            para.add_run(Run::new().add_text(" pour son encadrement tout au long de ce stage.")),
        );
    }

    if !data.tuteur_academique_nom.is_empty() {
        let mut para = Paragraph::new().add_run(Run::new().add_text(format!(
            "Je remercie également {}",
            data.tuteur_academique_nom
        )));
        if !data.tuteur_academique_poste.is_empty() {
            para = para.add_run(Run::new().add_text(format!(
                ", {},",
                data.tuteur_academique_poste
            )));
        }
        docx = docx.add_paragraph(para.add_run(Run::new().add_text(" pour son suivi académique.")));
    }

    docx.add_paragraph(placeholder("[Compléter les remerciements...]"))
        .add_paragraph(page_break())
}

/// French summary and English abstract, both as placeholders.
pub fn resume(docx: Docx) -> Docx {
    docx.add_paragraph(heading("RÉSUMÉ", "Heading1", true))
        .add_paragraph(placeholder("[Résumé du rapport en français...]"))
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading("Abstract", "Heading2", false))
        .add_paragraph(placeholder("[English abstract...]"))
        .add_paragraph(page_break())
}

/// Numbered chapters to three levels, each top-level chapter on its own
/// page. Deeper nesting is ignored.
pub fn chapters(docx: Docx, chapters: &[ChapterItem]) -> Docx {
    let mut docx = docx;
    for (idx, chapter) in chapters.iter().enumerate() {
        let num = idx + 1;
        docx = docx
            .add_paragraph(heading(
                &format!("{num}. {}", chapter.title),
                "Heading1",
                false,
            ))
            .add_paragraph(placeholder(chapter_hint(&chapter.title)));

        for (sub_idx, sub) in chapter.children.iter().enumerate() {
            let sub_num = sub_idx + 1;
            docx = docx
                .add_paragraph(heading(
                    &format!("{num}.{sub_num}. {}", sub.title),
                    "Heading2",
                    false,
                ))
                .add_paragraph(placeholder("[Contenu à rédiger...]"));

            for (subsub_idx, subsub) in sub.children.iter().enumerate() {
                docx = docx
                    .add_paragraph(heading(
                        &format!("{num}.{sub_num}.{}. {}", subsub_idx + 1, subsub.title),
                        "Heading3",
                        false,
                    ))
                    .add_paragraph(placeholder("[Contenu à rédiger...]"));
            }
        }
        docx = docx.add_paragraph(page_break());
    }
    docx
}

/// Annexes: centered heading plus one template annex.
pub fn annexes(docx: Docx) -> Docx {
    docx.add_paragraph(heading("ANNEXES", "Heading1", true))
        .add_paragraph(heading("Annexe A - [Titre]", "Heading2", false))
        .add_paragraph(placeholder("[Contenu de l'annexe...]"))
}

/// Writing prompt matched on keywords of the chapter title.
pub fn chapter_hint(title: &str) -> &'static str {
    let t = title.to_lowercase();
    if t.contains("introduction") {
        "[Présenter le contexte, les objectifs et le plan du rapport...]"
    } else if t.contains("entreprise") || t.contains("présentation") {
        "[Présenter l'entreprise, son histoire, ses activités, son organisation...]"
    } else if t.contains("mission") {
        "[Décrire les missions confiées et leurs objectifs...]"
    } else if t.contains("travail") || t.contains("réalis") {
        "[Détailler le travail effectué, les méthodes et outils utilisés...]"
    } else if t.contains("bilan") {
        "[Analyser les résultats, difficultés et compétences acquises...]"
    } else if t.contains("conclusion") {
        "[Synthétiser les apports du stage et les perspectives...]"
    } else {
        "[Contenu à rédiger...]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, children: Vec<ChapterItem>) -> ChapterItem {
        ChapterItem {
            id: 0,
            title: title.to_owned(),
            level: 1,
            children,
        }
    }

    fn paragraph_texts(docx: &Docx) -> Vec<String> {
        let mut out = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                let mut text = String::new();
                for pc in &para.children {
                    if let ParagraphChild::Run(run) = pc {
                        for rc in &run.children {
                            if let RunChild::Text(t) = rc {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                if !text.is_empty() {
                    // docx-rs escapes text at construction.
                    out.push(text.replace("&apos;", "'").replace("&amp;", "&"));
                }
            }
        }
        out
    }

    #[test]
    fn hint_keywords_take_priority_in_order() {
        assert_eq!(
            chapter_hint("Introduction générale"),
            "[Présenter le contexte, les objectifs et le plan du rapport...]"
        );
        assert_eq!(
            chapter_hint("Bilan des réalisations"),
            "[Détailler le travail effectué, les méthodes et outils utilisés...]"
        );
        assert_eq!(chapter_hint("Annexe technique"), "[Contenu à rédiger...]");
    }

    #[test]
    fn toc_pages_advance_per_chapter_only() {
        let data = ReportData {
            include_thanks: true,
            include_abstract: true,
            include_annexes: true,
            chapters: vec![
                chapter("Introduction", vec![chapter("Contexte", vec![])]),
                chapter("Missions", vec![]),
            ],
            ..Default::default()
        };

        let docx = toc(Docx::new(), &data);
        let texts = paragraph_texts(&docx);
        assert_eq!(texts[0], "TABLE DES MATIÈRES");
        assert_eq!(texts[1], "REMERCIEMENTS3");
        assert_eq!(texts[2], "RÉSUMÉ4");
        assert_eq!(texts[3], "1. Introduction5");
        // Sub-chapter shares its chapter page.
        assert_eq!(texts[4], "1.1. Contexte5");
        assert_eq!(texts[5], "2. Missions6");
        // The annexes line does not advance the counter.
        assert_eq!(texts[6], "ANNEXES7");
    }

    #[test]
    fn body_numbering_matches_toc_numbering() {
        let items = vec![chapter(
            "Introduction",
            vec![chapter(
                "Contexte",
                vec![chapter("Historique", vec![])],
            )],
        )];
        let docx = chapters(Docx::new(), &items);
        let texts = paragraph_texts(&docx);
        assert_eq!(texts[0], "1. Introduction");
        assert_eq!(texts[2], "1.1. Contexte");
        assert_eq!(texts[4], "1.1.1. Historique");
    }

    #[test]
    fn fourth_level_nesting_is_dropped() {
        let items = vec![chapter(
            "A",
            vec![chapter(
                "B",
                vec![chapter("C", vec![chapter("D", vec![])])],
            )],
        )];
        let docx = chapters(Docx::new(), &items);
        let texts = paragraph_texts(&docx);
        assert!(texts.iter().any(|t| t == "1.1.1. C"));
        assert!(!texts.iter().any(|t| t.contains('D')));
    }

    #[test]
    fn thanks_skips_absent_supervisors() {
        let data = ReportData {
            entreprise_nom: "TechCorp".into(),
            ..Default::default()
        };
        let docx = thanks(Docx::new(), &data);
        let texts = paragraph_texts(&docx);
        assert!(texts[1].contains("TechCorp"));
        assert!(!texts.iter().any(|t| t.contains("particulièrement")));
        assert!(!texts.iter().any(|t| t.contains("académique")));
    }

    #[test]
    fn annexes_carry_template_annex() {
        let texts = paragraph_texts(&annexes(Docx::new()));
        assert_eq!(
            texts,
            vec!["ANNEXES", "Annexe A - [Titre]", "[Contenu de l'annexe...]"]
        );
    }
}
