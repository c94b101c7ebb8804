//! Document assembly: fixed section order, then OOXML packaging.

use std::io::Cursor;

use docx_rs::*;
use log::debug;

use crate::model::ReportData;
use crate::styles::StyleSheet;
use crate::support::page_break;
use crate::{cover, furniture, sections, Result};

/// Builds the in-memory document for the given report data.
///
/// Section order is fixed: cover, contents, acknowledgments, abstract,
/// chapters, annexes; each inclusion flag drops its section without
/// affecting the others. The result is deterministic for equal input.
pub fn build_docx(data: &ReportData) -> Docx {
    let mut docx = furniture::page_setup(Docx::new(), &data.page);
    docx = StyleSheet::new(&data.style).apply(docx);
    docx = furniture::attach(docx, data);

    if data.include_cover {
        docx = cover::render(docx, data);
        docx = docx.add_paragraph(page_break());
    }
    if data.include_toc {
        docx = sections::toc(docx, data);
    }
    if data.include_thanks {
        docx = sections::thanks(docx, data);
    }
    if data.include_abstract {
        docx = sections::resume(docx);
    }
    docx = sections::chapters(docx, &data.chapters);
    if data.include_annexes {
        docx = sections::annexes(docx);
    }
    docx
}

/// Generates the report as DOCX bytes.
pub fn generate_report(data: &ReportData) -> Result<Vec<u8>> {
    debug!(
        "generating report: cover={:?}, chapters={}",
        data.cover_model,
        data.chapters.len()
    );
    let docx = build_docx(data);
    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|err| crate::Error::from(format!("failed to pack document: {err}")))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::CoverKind;
    use crate::model::ChapterItem;

    fn document_xml(data: &ReportData) -> String {
        let xml = String::from_utf8(build_docx(data).document.build()).unwrap();
        // w14:paraId/w14:textId come from a process-global counter in
        // docx-rs; strip them so equal content compares equal.
        strip_attr(&strip_attr(&xml, "w14:paraId"), "w14:textId")
    }

    fn strip_attr(xml: &str, attr: &str) -> String {
        let marker = format!(" {attr}=\"");
        let mut out = String::with_capacity(xml.len());
        let mut rest = xml;
        while let Some(start) = rest.find(&marker) {
            out.push_str(&rest[..start]);
            let after = &rest[start + marker.len()..];
            match after.find('"') {
                Some(end) => rest = &after[end + 1..],
                None => rest = "",
            }
        }
        out.push_str(rest);
        out
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
                    out.push(text);
                }
            }
        }
        out
    }

    fn sample() -> ReportData {
        ReportData {
            prenom: "Alice".into(),
            nom: "Martin".into(),
            entreprise_nom: "TechCorp".into(),
            date_debut: "2024-01-15".into(),
            date_fin: "2024-07-15".into(),
            chapters: vec![ChapterItem {
                id: 1,
                title: "Introduction".into(),
                level: 1,
                children: vec![],
            }],
            ..ReportData::default()
        }
    }

    #[test]
    fn every_cover_model_packs() {
        let mut data = sample();
        for kind in CoverKind::ALL {
            data.cover_model = kind.key().to_owned();
            let bytes = generate_report(&data).unwrap();
            assert!(bytes.starts_with(b"PK"), "cover {} is not a zip", kind.key());
        }
    }

    #[test]
    fn unknown_cover_model_renders_as_classique() {
        let mut data = sample();
        data.cover_model = "classique".into();
        let reference = document_xml(&data);
        data.cover_model = "brutalist".into();
        assert_eq!(document_xml(&data), reference);
    }

    #[test]
    fn same_input_same_document() {
        let data = sample();
        assert_eq!(document_xml(&data), document_xml(&data));
    }

    #[test]
    fn toc_flag_drops_the_contents() {
        let mut data = sample();
        data.include_toc = false;
        let texts = paragraph_texts(&build_docx(&data));
        assert!(!texts.iter().any(|t| t.contains("TABLE DES MATIÈRES")));
        // The rest of the document is unaffected.
        assert!(texts.iter().any(|t| t == "REMERCIEMENTS"));
        assert!(texts.iter().any(|t| t == "1. Introduction"));
    }

    #[test]
    fn empty_input_still_produces_a_document() {
        let data = ReportData::default();
        let bytes = generate_report(&data).unwrap();
        assert!(bytes.starts_with(b"PK"));
        let texts = paragraph_texts(&build_docx(&data));
        // No chapters: front and back sections only, with placeholders.
        assert!(texts.iter().any(|t| t == "ANNEXES"));
        assert!(texts.iter().any(|t| t.contains("[Prénom] [NOM]")));
    }

    #[test]
    fn toc_and_body_agree_on_numbering() {
        let mut data = sample();
        data.chapters.push(ChapterItem {
            id: 2,
            title: "Missions".into(),
            level: 1,
            children: vec![ChapterItem {
                id: 3,
                title: "Premier projet".into(),
                level: 2,
                children: vec![],
            }],
        });
        let texts = paragraph_texts(&build_docx(&data));
        let toc_entry = texts
            .iter()
            .find(|t| t.starts_with("2.1. Premier projet"))
            .expect("toc entry missing");
        // TOC line carries a page suffix, the body heading does not.
        assert!(toc_entry.len() > "2.1. Premier projet".len());
        assert!(texts.iter().any(|t| t == "2.1. Premier projet"));
    }
}
