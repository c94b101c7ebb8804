//! Cover page models.
//!
//! Twelve visual treatments of the same content: title, subject, student
//! identity, company block, dates and supervisors. Every model is a pure
//! function over the document builder; layout is done with borderless and
//! shaded tables so the covers survive any DOCX viewer. An unknown model
//! key falls back to [`CoverKind::Classique`].

mod banner;
mod classique;
mod framed;
mod geometrique;
mod minimal;
mod sidebar;

use docx_rs::*;

use crate::model::ReportData;
use crate::support::{
    centered_paragraph, cm, format_date_fr, hex, is_image_present, logo_run, or_placeholder, pt,
};

/// White, for text on shaded cells.
pub(crate) const WHITE: &str = "FFFFFF";
/// Light gray for secondary sidebar text.
pub(crate) const LIGHT_GRAY: &str = "C8C8C8";
/// Gold for the luxe cover ornaments and frames.
pub(crate) const GOLD: &str = "b8860b";

/// The set of cover models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverKind {
    /// Official layout: top logos, centered blocks, tutor table.
    Classique,
    /// Full-width shaded banner holding title and subject.
    Moderne,
    /// Thin colored stripe down the left edge.
    Elegant,
    /// White space dominant, a single rule under the title.
    Minimaliste,
    /// Traditional double frame.
    Academique,
    /// Colored corner block and asymmetric layout.
    Geometrique,
    /// Vertical split, shaded 40% column.
    Bicolore,
    /// Corporate header bar and label/value grid.
    Pro,
    /// Shaded banner variant with compact footer lines.
    Gradient,
    /// Vertical date timeline alongside the content.
    Timeline,
    /// Split title with decorative rules.
    Creative,
    /// Gold double frame with small-caps accents.
    Luxe,
}

impl CoverKind {
    /// All models, in presentation order.
    pub const ALL: [CoverKind; 12] = [
        CoverKind::Classique,
        CoverKind::Moderne,
        CoverKind::Elegant,
        CoverKind::Minimaliste,
        CoverKind::Academique,
        CoverKind::Geometrique,
        CoverKind::Bicolore,
        CoverKind::Pro,
        CoverKind::Gradient,
        CoverKind::Timeline,
        CoverKind::Creative,
        CoverKind::Luxe,
    ];

    /// Resolves a model key; anything unrecognized yields `Classique`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "moderne" => CoverKind::Moderne,
            "elegant" => CoverKind::Elegant,
            "minimaliste" => CoverKind::Minimaliste,
            "academique" => CoverKind::Academique,
            "geometrique" => CoverKind::Geometrique,
            "bicolore" => CoverKind::Bicolore,
            "pro" => CoverKind::Pro,
            "gradient" => CoverKind::Gradient,
            "timeline" => CoverKind::Timeline,
            "creative" => CoverKind::Creative,
            "luxe" => CoverKind::Luxe,
            _ => CoverKind::Classique,
        }
    }

    /// The wire key of this model.
    pub fn key(self) -> &'static str {
        match self {
            CoverKind::Classique => "classique",
            CoverKind::Moderne => "moderne",
            CoverKind::Elegant => "elegant",
            CoverKind::Minimaliste => "minimaliste",
            CoverKind::Academique => "academique",
            CoverKind::Geometrique => "geometrique",
            CoverKind::Bicolore => "bicolore",
            CoverKind::Pro => "pro",
            CoverKind::Gradient => "gradient",
            CoverKind::Timeline => "timeline",
            CoverKind::Creative => "creative",
            CoverKind::Luxe => "luxe",
        }
    }
}

/// Everything a cover renderer needs besides the raw data: formatted dates
/// and the accent color stripped of its `#`.
pub(crate) struct CoverContext<'a> {
    pub data: &'a ReportData,
    pub date_debut: String,
    pub date_fin: String,
    pub accent: String,
}

impl<'a> CoverContext<'a> {
    fn new(data: &'a ReportData) -> Self {
        Self {
            data,
            date_debut: format_date_fr(&data.date_debut),
            date_fin: format_date_fr(&data.date_fin),
            accent: hex(&data.style.title1_color).to_owned(),
        }
    }

    pub fn student_name(&self) -> String {
        format!(
            "{} {}",
            or_placeholder(&self.data.prenom, "[Prénom]"),
            or_placeholder(&self.data.nom, "[NOM]")
        )
    }

    pub fn formation(&self) -> &str {
        or_placeholder(&self.data.formation, "[Formation]")
    }

    pub fn ecole(&self) -> &str {
        or_placeholder(&self.data.ecole, "[Établissement]")
    }

    pub fn annee(&self) -> &str {
        or_placeholder(&self.data.annee_scolaire, "[Année]")
    }

    pub fn entreprise(&self) -> &str {
        or_placeholder(&self.data.entreprise_nom, "[Entreprise]")
    }

    pub fn tuteur(&self) -> &str {
        or_placeholder(&self.data.tuteur_nom, "[Nom]")
    }

    pub fn tuteur_academique(&self) -> &str {
        or_placeholder(&self.data.tuteur_academique_nom, "[Nom]")
    }

    pub fn logo_ecole(&self) -> Option<&str> {
        self.data
            .logos
            .logo_ecole
            .as_deref()
            .filter(|p| is_image_present(Some(p)))
    }

    pub fn logo_entreprise(&self) -> Option<&str> {
        self.data
            .logos
            .logo_entreprise
            .as_deref()
            .filter(|p| is_image_present(Some(p)))
    }

    pub fn image_centrale(&self) -> Option<&str> {
        self.data
            .logos
            .image_centrale
            .as_deref()
            .filter(|p| is_image_present(Some(p)))
    }
}

/// Renders the configured cover model onto the document.
pub fn render(docx: Docx, data: &ReportData) -> Docx {
    let kind = CoverKind::from_key(&data.cover_model);
    if kind == CoverKind::Classique && data.cover_model != kind.key() {
        log::warn!(
            "unknown cover model {:?}, falling back to classique",
            data.cover_model
        );
    }
    let ctx = CoverContext::new(data);
    match kind {
        CoverKind::Classique => classique::render(docx, &ctx),
        CoverKind::Moderne => banner::moderne(docx, &ctx),
        CoverKind::Elegant => sidebar::elegant(docx, &ctx),
        CoverKind::Minimaliste => minimal::minimaliste(docx, &ctx),
        CoverKind::Academique => framed::academique(docx, &ctx),
        CoverKind::Geometrique => geometrique::render(docx, &ctx),
        CoverKind::Bicolore => sidebar::bicolore(docx, &ctx),
        CoverKind::Pro => banner::pro(docx, &ctx),
        CoverKind::Gradient => banner::gradient(docx, &ctx),
        CoverKind::Timeline => sidebar::timeline(docx, &ctx),
        CoverKind::Creative => minimal::creative(docx, &ctx),
        CoverKind::Luxe => framed::luxe(docx, &ctx),
    }
}

/// A plain text run at the given point size.
pub(crate) fn text_run(text: impl Into<String>, size: u32) -> Run {
    Run::new().add_text(text).size(pt(size))
}

/// An empty centered paragraph used as vertical spacing.
pub(crate) fn spacer(space_after_pt: u32) -> Paragraph {
    centered_paragraph(space_after_pt)
}

/// A borderless centered two-column table from prebuilt cells.
pub(crate) fn two_columns(
    left: TableCell,
    right: TableCell,
    left_cm: f64,
    right_cm: f64,
) -> Table {
    let widths = [cm(left_cm) as usize, cm(right_cm) as usize];
    crate::support::borderless(
        Table::new(vec![TableRow::new(vec![
            left.width(widths[0], WidthType::Dxa),
            right.width(widths[1], WidthType::Dxa),
        ])])
        .set_grid(widths.to_vec())
        .align(TableAlignmentType::Center),
    )
}

/// A single-cell centered table of the given width, borders untouched.
pub(crate) fn single_column(cell: TableCell, width_cm: f64) -> Table {
    let width = cm(width_cm) as usize;
    Table::new(vec![TableRow::new(vec![cell.width(width, WidthType::Dxa)])])
        .set_grid(vec![width])
        .align(TableAlignmentType::Center)
        .width(width, WidthType::Dxa)
}

/// A centered paragraph holding an image at the given height, or an empty
/// paragraph when the payload is unusable.
pub(crate) fn image_paragraph(payload: &str, height_cm: f64, space_after_pt: u32) -> Paragraph {
    let mut para = centered_paragraph(space_after_pt);
    if let Some(run) = logo_run(payload, height_cm) {
        para = para.add_run(run);
    }
    para
}

/// One supervisor cell: small label above a bold name.
pub(crate) fn tutor_cell(label: &str, name: &str) -> TableCell {
    TableCell::new().add_paragraph(
        centered_paragraph(0)
            .add_run(text_run(label, 10).add_break(BreakType::TextWrapping))
            .add_run(text_run(name, 12).bold()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_classique() {
        assert_eq!(CoverKind::from_key("clasique"), CoverKind::Classique);
        assert_eq!(CoverKind::from_key(""), CoverKind::Classique);
        assert_eq!(CoverKind::from_key("LUXE"), CoverKind::Classique);
    }

    #[test]
    fn keys_round_trip() {
        for kind in CoverKind::ALL {
            assert_eq!(CoverKind::from_key(kind.key()), kind);
        }
    }

    #[test]
    fn every_model_renders_on_empty_data() {
        for kind in CoverKind::ALL {
            let data = ReportData {
                cover_model: kind.key().to_owned(),
                ..Default::default()
            };
            let docx = render(Docx::new(), &data);
            assert!(
                !docx.document.children.is_empty(),
                "cover {} produced nothing",
                kind.key()
            );
        }
    }

    #[test]
    fn placeholders_cover_missing_identity() {
        let data = ReportData::default();
        let ctx = CoverContext::new(&data);
        assert_eq!(ctx.student_name(), "[Prénom] [NOM]");
        assert_eq!(ctx.ecole(), "[Établissement]");
        assert_eq!(ctx.date_debut, "[Date]");
    }
}
