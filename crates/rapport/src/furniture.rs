//! Running page furniture: A4 page setup, header logos and the footer line.
//!
//! Header and footer share one symmetric 16 cm grid (5 | 6 | 5 cm) so their
//! columns line up vertically. When the cover page is included, an empty
//! first-page header and footer exempt it from the furniture.

use docx_rs::*;

use crate::model::{PageConfig, ReportData};
use crate::support::{
    borderless, cell_paragraph, cm, logo_paragraph, page_number_run, pt, MUTED_GRAY,
};

/// A4 page width in twips (21 cm).
const PAGE_WIDTH: u32 = 11906;
/// A4 page height in twips (29.7 cm).
const PAGE_HEIGHT: u32 = 16838;

/// Header logo height in centimeters.
const LOGO_HEIGHT_CM: f64 = 1.2;

/// Applies A4 geometry and the configured margins.
pub fn page_setup(docx: Docx, page: &PageConfig) -> Docx {
    docx.page_size(PAGE_WIDTH, PAGE_HEIGHT).page_margin(
        PageMargin::new()
            .top(cm(page.margin_top))
            .bottom(cm(page.margin_bottom))
            .left(cm(page.margin_left))
            .right(cm(page.margin_right)),
    )
}

/// One borderless 5 | 6 | 5 cm row, the shared header/footer grid.
fn furniture_row(left: Paragraph, center: Paragraph, right: Paragraph) -> Table {
    let widths = [cm(5.0) as usize, cm(6.0) as usize, cm(5.0) as usize];
    let row = TableRow::new(vec![
        TableCell::new()
            .add_paragraph(left)
            .width(widths[0], WidthType::Dxa),
        TableCell::new()
            .add_paragraph(center)
            .width(widths[1], WidthType::Dxa),
        TableCell::new()
            .add_paragraph(right)
            .width(widths[2], WidthType::Dxa),
    ]);
    borderless(
        Table::new(vec![row])
            .set_grid(widths.to_vec())
            .align(TableAlignmentType::Center)
            .width(cm(16.0) as usize, WidthType::Dxa),
    )
}

/// Header: school logo left, empty center, company logo right.
pub fn header(data: &ReportData) -> Header {
    Header::new().add_table(furniture_row(
        logo_paragraph(
            data.logos.logo_ecole.as_deref(),
            LOGO_HEIGHT_CM,
            AlignmentType::Left,
        ),
        cell_paragraph(0).align(AlignmentType::Center),
        logo_paragraph(
            data.logos.logo_entreprise.as_deref(),
            LOGO_HEIGHT_CM,
            AlignmentType::Right,
        ),
    ))
}

/// Footer: company name left, `- <page> -` center, student name right.
pub fn footer(data: &ReportData) -> Footer {
    let mut left = cell_paragraph(0).align(AlignmentType::Left);
    if !data.entreprise_nom.is_empty() {
        left = left.add_run(
            Run::new()
                .add_text(&data.entreprise_nom)
                .size(pt(9))
                .color(MUTED_GRAY),
        );
    }

    let mut center = cell_paragraph(0).align(AlignmentType::Center);
    if data.page.show_page_number {
        center = center
            .add_run(Run::new().add_text("- ").size(pt(9)))
            .add_run(page_number_run())
            .add_run(Run::new().add_text(" -").size(pt(9)));
    }

    let mut right = cell_paragraph(0).align(AlignmentType::Right);
    if data.page.show_student_name && !data.nom.is_empty() {
        right = right.add_run(
            Run::new()
                .add_text(format!("{} {}", data.prenom, data.nom))
                .size(pt(9))
                .color(MUTED_GRAY),
        );
    }

    Footer::new().add_table(furniture_row(left, center, right))
}

/// Attaches header and footer, always exempting the first page so the
/// cover stays clean. The exemption holds even without a cover, where the
/// table of contents opens the document.
pub fn attach(docx: Docx, data: &ReportData) -> Docx {
    docx.header(header(data))
        .footer(footer(data))
        .first_header(Header::new())
        .first_footer(Footer::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_respects_visibility_flags() {
        let data = ReportData {
            entreprise_nom: "TechCorp".into(),
            nom: "Martin".into(),
            prenom: "Alice".into(),
            page: crate::model::PageConfig {
                show_page_number: false,
                show_student_name: false,
                ..Default::default()
            },
            ..Default::default()
        };
        // A footer without page number or student name still has its grid.
        let footer = footer(&data);
        assert_eq!(footer.children.len(), 1);
    }

    #[test]
    fn first_page_is_exempt_even_without_cover() {
        let data = ReportData {
            include_cover: false,
            ..Default::default()
        };
        let docx = attach(Docx::new(), &data);
        assert!(docx.document.section_property.title_pg);
    }

    #[test]
    fn header_tolerates_missing_logos() {
        let data = ReportData::default();
        let header = header(&data);
        assert_eq!(header.children.len(), 1);
    }
}
