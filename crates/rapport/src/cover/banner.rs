//! Banner-family covers: a full-width shaded block carries the title.
//!
//! `moderne` and `gradient` differ only in banner padding and the density of
//! the lines below it; `pro` trades the banner for a three-cell corporate
//! header bar and a label/value grid.

use docx_rs::*;

use super::{
    image_paragraph, single_column, spacer, text_run, tutor_cell, two_columns, CoverContext, WHITE,
};
use crate::support::{
    borderless, cell_paragraph, centered_paragraph, cm, logo_paragraph, logo_run, pt20, shaded,
    top_border, MUTED_GRAY,
};

/// The shaded 16 cm banner with the title and optional subject.
fn banner(ctx: &CoverContext, title_pad: (u32, u32), subject: (u32, u32)) -> Table {
    let mut cell = shaded(TableCell::new(), &ctx.accent).add_paragraph(
        cell_paragraph(0)
            .align(AlignmentType::Center)
            .line_spacing(
                LineSpacing::new()
                    .before(pt20(title_pad.0))
                    .after(pt20(title_pad.1)),
            )
            .add_run(text_run("RAPPORT DE STAGE", 28).bold().color(WHITE)),
    );
    if !ctx.data.sujet_stage.is_empty() {
        cell = cell.add_paragraph(
            cell_paragraph(subject.1)
                .align(AlignmentType::Center)
                .add_run(text_run(&ctx.data.sujet_stage, subject.0).italic().color(WHITE)),
        );
    }
    borderless(single_column(cell, 16.0))
}

/// Centered 7 + 7 cm logo pair, when at least one logo is usable.
fn logo_pair(ctx: &CoverContext, height_cm: f64) -> Option<Table> {
    if ctx.logo_ecole().is_none() && ctx.logo_entreprise().is_none() {
        return None;
    }
    Some(two_columns(
        TableCell::new().add_paragraph(logo_paragraph(
            ctx.logo_ecole(),
            height_cm,
            AlignmentType::Center,
        )),
        TableCell::new().add_paragraph(logo_paragraph(
            ctx.logo_entreprise(),
            height_cm,
            AlignmentType::Center,
        )),
        7.0,
        7.0,
    ))
}

pub(super) fn moderne(docx: Docx, ctx: &CoverContext) -> Docx {
    let mut docx = docx.add_table(banner(ctx, (18, 6), (14, 12)));

    docx = docx.add_paragraph(spacer(15));
    if let Some(logos) = logo_pair(ctx, 2.0) {
        docx = docx.add_table(logos);
    }

    if let Some(image) = ctx.image_centrale() {
        docx = docx.add_paragraph(image_paragraph(image, 3.0, 12));
    }

    docx = docx
        .add_paragraph(spacer(18))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(
            centered_paragraph(15)
                .add_run(text_run(format!("{}  •  {}", ctx.ecole(), ctx.annee()), 12)),
        )
        .add_paragraph(
            centered_paragraph(4).add_run(
                text_run(ctx.entreprise(), 14)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        );

    if !ctx.data.entreprise_ville.is_empty() {
        docx = docx
            .add_paragraph(centered_paragraph(6).add_run(text_run(&ctx.data.entreprise_ville, 12)));
    }

    docx.add_paragraph(centered_paragraph(15).add_run(text_run(
        format!("Du {} au {}", ctx.date_debut, ctx.date_fin),
        12,
    )))
    .add_table(two_columns(
        tutor_cell("Tuteur entreprise", ctx.tuteur()),
        tutor_cell("Tuteur académique", ctx.tuteur_academique()),
        7.0,
        7.0,
    ))
}

pub(super) fn gradient(docx: Docx, ctx: &CoverContext) -> Docx {
    let mut docx = docx.add_table(banner(ctx, (20, 8), (13, 15)));

    docx = docx.add_paragraph(spacer(15));
    if let Some(logos) = logo_pair(ctx, 1.8) {
        docx = docx.add_table(logos);
    }

    if let Some(image) = ctx.image_centrale() {
        docx = docx.add_paragraph(image_paragraph(image, 3.0, 10));
    }

    docx.add_paragraph(spacer(20))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(
            centered_paragraph(15).add_run(
                text_run(format!("{}  •  {}", ctx.ecole(), ctx.annee()), 11).color(MUTED_GRAY),
            ),
        )
        .add_paragraph(
            centered_paragraph(4).add_run(
                text_run(ctx.entreprise(), 13)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        )
        .add_paragraph(centered_paragraph(10).add_run(text_run(
            format!("Du {} au {}", ctx.date_debut, ctx.date_fin),
            11,
        )))
        .add_paragraph(
            centered_paragraph(4)
                .add_run(text_run(format!("Tuteur : {}", ctx.tuteur()), 10).color(MUTED_GRAY)),
        )
}

pub(super) fn pro(docx: Docx, ctx: &CoverContext) -> Docx {
    // Header bar: every cell shaded so the bar reads as one block.
    let left = if let Some(run) = ctx.logo_ecole().and_then(|p| logo_run(p, 1.5)) {
        cell_paragraph(0)
            .align(AlignmentType::Left)
            .line_spacing(LineSpacing::new().before(pt20(10)).after(pt20(10)))
            .add_run(run)
    } else {
        cell_paragraph(0).line_spacing(LineSpacing::new().before(pt20(15)).after(pt20(15)))
    };
    let center = cell_paragraph(0)
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().before(pt20(15)).after(pt20(15)))
        .add_run(text_run(ctx.annee(), 11).color(WHITE));
    let right = if let Some(run) = ctx.logo_entreprise().and_then(|p| logo_run(p, 1.5)) {
        cell_paragraph(0)
            .align(AlignmentType::Right)
            .line_spacing(LineSpacing::new().before(pt20(10)).after(pt20(10)))
            .add_run(run)
    } else {
        cell_paragraph(0)
    };

    let widths = [cm(5.0) as usize, cm(6.0) as usize, cm(5.0) as usize];
    let bar = TableRow::new(vec![
        shaded(TableCell::new().add_paragraph(left), &ctx.accent).width(widths[0], WidthType::Dxa),
        shaded(TableCell::new().add_paragraph(center), &ctx.accent)
            .width(widths[1], WidthType::Dxa),
        shaded(TableCell::new().add_paragraph(right), &ctx.accent).width(widths[2], WidthType::Dxa),
    ]);
    let mut docx = docx.add_table(borderless(
        Table::new(vec![bar])
            .set_grid(widths.to_vec())
            .align(TableAlignmentType::Center),
    ));

    docx = docx.add_paragraph(spacer(30)).add_paragraph(
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
        docx = docx.add_paragraph(image_paragraph(image, 3.0, 15));
    }

    docx = docx
        .add_paragraph(spacer(25))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(
            centered_paragraph(4)
                .add_run(text_run(format!("{}  •  {}", ctx.formation(), ctx.ecole()), 12)),
        )
        .add_paragraph(spacer(30));

    // Label/value grid for the company block.
    let period = format!("{} — {}", ctx.date_debut, ctx.date_fin);
    let rows = [
        ("Entreprise", text_run(ctx.entreprise(), 12).bold()),
        ("Période", text_run(&period, 11)),
        ("Tuteur", text_run(ctx.tuteur(), 11)),
    ];
    let label_width = cm(4.0) as usize;
    let value_width = cm(8.0) as usize;
    let mut grid: Vec<TableRow> = rows
        .into_iter()
        .map(|(label, value)| info_row(label, value, label_width, value_width))
        .collect();
    if !ctx.data.tuteur_academique_nom.is_empty() {
        grid.push(info_row(
            "Suivi",
            text_run(&ctx.data.tuteur_academique_nom, 11),
            label_width,
            value_width,
        ));
    }
    docx = docx.add_table(borderless(
        Table::new(grid)
            .set_grid(vec![label_width, value_width])
            .align(TableAlignmentType::Center),
    ));

    // Footer rule with the company line under it.
    let footer_text = if ctx.data.entreprise_ville.is_empty() {
        ctx.data.entreprise_nom.clone()
    } else {
        format!("{} — {}", ctx.data.entreprise_nom, ctx.data.entreprise_ville)
    };
    let footer_cell = TableCell::new().add_paragraph(
        cell_paragraph(0)
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().before(pt20(10)).after(0))
            .add_run(text_run(footer_text, 10).color(MUTED_GRAY)),
    );
    docx.add_paragraph(spacer(30))
        .add_table(top_border(single_column(footer_cell, 16.0), &ctx.accent, 18))
}

fn info_row(label: &str, value: Run, label_width: usize, value_width: usize) -> TableRow {
    TableRow::new(vec![
        TableCell::new()
            .add_paragraph(cell_paragraph(0).add_run(text_run(label, 10).color(MUTED_GRAY)))
            .width(label_width, WidthType::Dxa),
        TableCell::new()
            .add_paragraph(cell_paragraph(0).add_run(value))
            .width(value_width, WidthType::Dxa),
    ])
}
