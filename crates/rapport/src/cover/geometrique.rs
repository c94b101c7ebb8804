//! Geometric cover: asymmetric layout built from shaded blocks.
//!
//! A colored block in the top-right corner holds the school year, a short
//! shaded bar underlines the title, and the bottom info grid is left-aligned
//! against the page margin.

use docx_rs::*;

use super::{spacer, text_run, CoverContext, WHITE};
use crate::support::{
    borderless, cell_paragraph, centered_paragraph, cm, logo_paragraph, logo_run, pt20, shaded,
    MUTED_GRAY,
};

pub(super) fn render(docx: Docx, ctx: &CoverContext) -> Docx {
    // Top row: logo against the colored year block.
    let year_para = cell_paragraph(0)
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().before(pt20(15)).after(pt20(15)))
        .add_run(text_run(ctx.annee(), 14).bold().color(WHITE));
    let top_widths = [cm(10.0) as usize, cm(6.0) as usize];
    let top = TableRow::new(vec![
        TableCell::new()
            .add_paragraph(logo_paragraph(ctx.logo_ecole(), 2.0, AlignmentType::Left))
            .width(top_widths[0], WidthType::Dxa),
        shaded(TableCell::new().add_paragraph(year_para), &ctx.accent)
            .width(top_widths[1], WidthType::Dxa),
    ]);
    let mut docx = docx.add_table(borderless(
        Table::new(vec![top])
            .set_grid(top_widths.to_vec())
            .align(TableAlignmentType::Center),
    ));

    docx = docx.add_paragraph(spacer(20)).add_paragraph(
        cell_paragraph(6).add_run(
            text_run("RAPPORT DE STAGE", 28)
                .bold()
                .color(ctx.accent.as_str()),
        ),
    );
    if !ctx.data.sujet_stage.is_empty() {
        docx = docx
            .add_paragraph(cell_paragraph(15).add_run(text_run(&ctx.data.sujet_stage, 14).italic()));
    }

    // Short shaded bar as a decorative rule.
    let bar_width = cm(5.0) as usize;
    let bar_cell = shaded(TableCell::new(), &ctx.accent)
        .add_paragraph(cell_paragraph(0))
        .width(bar_width, WidthType::Dxa);
    docx = docx.add_table(borderless(
        Table::new(vec![TableRow::new(vec![bar_cell])]).set_grid(vec![bar_width]),
    ));

    if let Some(run) = ctx.image_centrale().and_then(|p| logo_run(p, 3.0)) {
        docx = docx
            .add_paragraph(spacer(15))
            .add_paragraph(centered_paragraph(15).add_run(run));
    }

    docx = docx
        .add_paragraph(spacer(20))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(cell_paragraph(20).add_run(text_run(ctx.ecole(), 12).color(MUTED_GRAY)));

    // Bottom info grid, flush left.
    let half = cm(8.0) as usize;
    let first = TableRow::new(vec![
        TableCell::new()
            .add_paragraph(
                cell_paragraph(0)
                    .add_run(text_run("Entreprise : ", 10).color(MUTED_GRAY))
                    .add_run(text_run(ctx.entreprise(), 11).bold()),
            )
            .width(half, WidthType::Dxa),
        TableCell::new()
            .add_paragraph(cell_paragraph(0).add_run(text_run(
                format!("Du {} au {}", ctx.date_debut, ctx.date_fin),
                10,
            )))
            .width(half, WidthType::Dxa),
    ]);
    let second = TableRow::new(vec![
        TableCell::new()
            .add_paragraph(
                cell_paragraph(0).add_run(text_run(format!("Tuteur : {}", ctx.tuteur()), 10)),
            )
            .width(half, WidthType::Dxa),
        TableCell::new()
            .add_paragraph(logo_paragraph(
                ctx.logo_entreprise(),
                1.5,
                AlignmentType::Right,
            ))
            .width(half, WidthType::Dxa),
    ]);
    docx.add_table(borderless(
        Table::new(vec![first, second]).set_grid(vec![half, half]),
    ))
}
