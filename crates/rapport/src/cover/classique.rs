//! Default cover, following the usual French internship-report conventions:
//! institution logos on top, everything else centered in reading order.

use docx_rs::*;

use super::{image_paragraph, spacer, text_run, tutor_cell, two_columns, CoverContext};
use crate::support::{borderless, cell_paragraph, centered_paragraph, cm, logo_paragraph};

pub(super) fn render(docx: Docx, ctx: &CoverContext) -> Docx {
    let mut docx = docx;

    if ctx.logo_ecole().is_some() || ctx.logo_entreprise().is_some() {
        let widths = [cm(5.0) as usize, cm(6.0) as usize, cm(5.0) as usize];
        let row = TableRow::new(vec![
            TableCell::new()
                .add_paragraph(logo_paragraph(ctx.logo_ecole(), 2.0, AlignmentType::Center))
                .width(widths[0], WidthType::Dxa),
            TableCell::new()
                .add_paragraph(cell_paragraph(0))
                .width(widths[1], WidthType::Dxa),
            TableCell::new()
                .add_paragraph(logo_paragraph(
                    ctx.logo_entreprise(),
                    2.0,
                    AlignmentType::Center,
                ))
                .width(widths[2], WidthType::Dxa),
        ]);
        docx = docx.add_table(borderless(
            Table::new(vec![row])
                .set_grid(widths.to_vec())
                .align(TableAlignmentType::Center),
        ));
    }

    docx = docx.add_paragraph(spacer(25)).add_paragraph(
        centered_paragraph(6).add_run(
            text_run("RAPPORT DE STAGE", 28)
                .bold()
                .color(ctx.accent.as_str()),
        ),
    );

    if !ctx.data.sujet_stage.is_empty() {
        docx = docx.add_paragraph(
            centered_paragraph(15).add_run(text_run(&ctx.data.sujet_stage, 14).italic()),
        );
    }

    if let Some(image) = ctx.image_centrale() {
        docx = docx.add_paragraph(image_paragraph(image, 3.0, 12));
    }

    docx = docx
        .add_paragraph(spacer(18))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(
            centered_paragraph(20)
                .add_run(text_run(format!("{} — {}", ctx.ecole(), ctx.annee()), 12)),
        )
        .add_paragraph(
            centered_paragraph(4).add_run(text_run(
                format!("Stage réalisé chez {}", ctx.entreprise()),
                14,
            )),
        );

    if !ctx.data.entreprise_ville.is_empty() {
        docx = docx
            .add_paragraph(centered_paragraph(6).add_run(text_run(&ctx.data.entreprise_ville, 12)));
    }

    docx = docx.add_paragraph(centered_paragraph(15).add_run(text_run(
        format!("Du {} au {}", ctx.date_debut, ctx.date_fin),
        12,
    )));

    docx.add_table(two_columns(
        tutor_cell("Tuteur entreprise", ctx.tuteur()),
        tutor_cell("Tuteur académique", ctx.tuteur_academique()),
        7.0,
        7.0,
    ))
}
