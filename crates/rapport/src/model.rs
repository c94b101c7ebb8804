//! Input data model for report generation.
//!
//! The types in this module mirror the JSON body accepted by callers. Every
//! field carries a serde default so a partial document deserializes to the
//! documented defaults; the generator itself never mutates a [`ReportData`]
//! once it has been constructed.

use serde::{Deserialize, Serialize};

/// A chapter or sub-chapter of the report outline.
///
/// The structure is recursive; the generator renders up to three levels
/// (chapter, sub-chapter, sub-sub-chapter) and ignores deeper children.
/// Numbering is positional: the `id` field is carried for callers that need
/// a stable handle but plays no role in the rendered numbering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChapterItem {
    /// Caller-assigned identifier, not used for numbering.
    pub id: i32,
    /// Title rendered in the heading and in the table of contents.
    pub title: String,
    /// Caller-declared depth, informational only.
    pub level: i32,
    /// Nested sub-chapters, in render order.
    pub children: Vec<ChapterItem>,
}

/// A glossary entry. Declared in the input schema but not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlossaryItem {
    /// The term being defined.
    pub term: String,
    /// Its definition.
    pub definition: String,
}

/// An entry of the list of figures. Declared in the input schema but not
/// rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FigureItem {
    /// Figure caption.
    pub name: String,
    /// Page label supplied by the caller.
    pub page: String,
}

/// A Gantt chart task. Declared in the input schema but not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GanttTask {
    /// Task label.
    pub task: String,
    /// ISO start date.
    pub start: String,
    /// ISO end date.
    pub end: String,
}

/// Typography configuration applied to the document's named styles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Body font family.
    pub font_family: String,
    /// Body font size in points.
    pub font_size: u32,
    /// Body line spacing factor (1.0 = single).
    pub line_spacing: f64,
    /// Heading 1 size in points.
    pub title1_size: u32,
    /// Whether heading 1 is bold.
    pub title1_bold: bool,
    /// Heading 1 color as `#rrggbb`; also the accent color used by covers.
    pub title1_color: String,
    /// Heading 2 size in points.
    pub title2_size: u32,
    /// Whether heading 2 is bold.
    pub title2_bold: bool,
    /// Heading 2 color as `#rrggbb`.
    pub title2_color: String,
    /// Heading 3 size in points.
    pub title3_size: u32,
    /// Whether heading 3 is italic.
    pub title3_italic: bool,
    /// Heading 3 color as `#rrggbb`.
    pub title3_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".into(),
            font_size: 12,
            line_spacing: 1.5,
            title1_size: 16,
            title1_bold: true,
            title1_color: "#1a365d".into(),
            title2_size: 14,
            title2_bold: true,
            title2_color: "#000000".into(),
            title3_size: 12,
            title3_italic: true,
            title3_color: "#333333".into(),
        }
    }
}

/// Page geometry and furniture visibility configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Top margin in centimeters.
    pub margin_top: f64,
    /// Bottom margin in centimeters.
    pub margin_bottom: f64,
    /// Left margin in centimeters.
    pub margin_left: f64,
    /// Right margin in centimeters.
    pub margin_right: f64,
    /// Whether the footer shows the page number field.
    pub show_page_number: bool,
    /// Whether the footer shows the student name.
    pub show_student_name: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            margin_top: 2.5,
            margin_bottom: 2.5,
            margin_left: 2.5,
            margin_right: 2.5,
            show_page_number: true,
            show_student_name: true,
        }
    }
}

/// Optional base64-encoded image payloads.
///
/// A payload counts as supplied only when it passes the presence threshold
/// (see [`crate::support::is_image_present`]); short placeholder strings are
/// treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogosConfig {
    /// School logo, base64 (optionally a data URI).
    pub logo_ecole: Option<String>,
    /// Company logo, base64 (optionally a data URI).
    pub logo_entreprise: Option<String>,
    /// Free-form center image shown on most covers.
    pub image_centrale: Option<String>,
}

/// The complete input for one report generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportData {
    /// Cover template key. Unknown keys fall back to the classic cover.
    pub cover_model: String,

    // Student
    /// First name.
    pub prenom: String,
    /// Last name.
    pub nom: String,
    /// Degree program.
    pub formation: String,
    /// School name.
    pub ecole: String,
    /// Academic year label.
    pub annee_scolaire: String,

    // Company
    /// Company name.
    pub entreprise_nom: String,
    /// Company business sector.
    pub entreprise_secteur: String,
    /// Company city.
    pub entreprise_ville: String,
    /// Company supervisor name.
    pub tuteur_nom: String,
    /// Company supervisor job title.
    pub tuteur_poste: String,
    /// Academic supervisor name.
    pub tuteur_academique_nom: String,
    /// Academic supervisor job title.
    pub tuteur_academique_poste: String,

    // Internship
    /// ISO start date (`YYYY-MM-DD`).
    pub date_debut: String,
    /// ISO end date (`YYYY-MM-DD`).
    pub date_fin: String,
    /// Internship subject, shown under the cover title.
    pub sujet_stage: String,
    /// Position held, carried for callers.
    pub poste: String,

    // Outline
    /// Top-level chapters, in render order.
    pub chapters: Vec<ChapterItem>,
    /// Glossary entries (schema fidelity, not rendered).
    pub glossary: Vec<GlossaryItem>,
    /// Figure list entries (schema fidelity, not rendered).
    pub figures: Vec<FigureItem>,
    /// Gantt tasks (schema fidelity, not rendered).
    #[serde(rename = "ganttTasks")]
    pub gantt_tasks: Vec<GanttTask>,

    // Inclusion flags
    /// Render the cover page.
    pub include_cover: bool,
    /// Render the acknowledgments section.
    pub include_thanks: bool,
    /// Render the table of contents.
    pub include_toc: bool,
    /// Declared but not rendered by the generator.
    pub include_figures_list: bool,
    /// Render the abstract section.
    pub include_abstract: bool,
    /// Declared but not rendered by the generator.
    pub include_glossary: bool,
    /// Declared but not rendered by the generator.
    pub include_gantt: bool,
    /// Render the annexes section.
    pub include_annexes: bool,

    /// Typography configuration.
    pub style: StyleConfig,
    /// Page geometry and furniture visibility.
    pub page: PageConfig,
    /// Optional image payloads.
    pub logos: LogosConfig,
}

impl Default for ReportData {
    fn default() -> Self {
        Self {
            cover_model: "classique".into(),
            prenom: String::new(),
            nom: String::new(),
            formation: String::new(),
            ecole: String::new(),
            annee_scolaire: String::new(),
            entreprise_nom: String::new(),
            entreprise_secteur: String::new(),
            entreprise_ville: String::new(),
            tuteur_nom: String::new(),
            tuteur_poste: String::new(),
            tuteur_academique_nom: String::new(),
            tuteur_academique_poste: String::new(),
            date_debut: String::new(),
            date_fin: String::new(),
            sujet_stage: String::new(),
            poste: String::new(),
            chapters: Vec::new(),
            glossary: Vec::new(),
            figures: Vec::new(),
            gantt_tasks: Vec::new(),
            include_cover: true,
            include_thanks: true,
            include_toc: true,
            include_figures_list: false,
            include_abstract: false,
            include_glossary: false,
            include_gantt: false,
            include_annexes: true,
            style: StyleConfig::default(),
            page: PageConfig::default(),
            logos: LogosConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let data: ReportData = serde_json::from_str(r#"{"nom": "Dupont"}"#).unwrap();
        assert_eq!(data.nom, "Dupont");
        assert_eq!(data.cover_model, "classique");
        assert!(data.include_cover && data.include_thanks && data.include_toc);
        assert!(!data.include_abstract);
        assert_eq!(data.style.font_family, "Times New Roman");
        assert_eq!(data.page.margin_top, 2.5);
        assert!(data.logos.logo_ecole.is_none());
    }

    #[test]
    fn gantt_tasks_use_wire_name() {
        let data: ReportData =
            serde_json::from_str(r#"{"ganttTasks": [{"task": "t", "start": "", "end": ""}]}"#)
                .unwrap();
        assert_eq!(data.gantt_tasks.len(), 1);
    }

    #[test]
    fn chapters_nest_recursively() {
        let json = r#"{"chapters": [
            {"id": 1, "title": "Introduction", "level": 1, "children": [
                {"id": 2, "title": "Contexte", "level": 2, "children": []}
            ]}
        ]}"#;
        let data: ReportData = serde_json::from_str(json).unwrap();
        assert_eq!(data.chapters[0].children[0].title, "Contexte");
    }
}
