//! Framed covers: content inside a traditional double border.
//!
//! `academique` draws the frame in the accent color, `luxe` in gold with
//! ornamental rules. Both nest a 15 cm bordered table inside a 16 cm one.

use docx_rs::*;

use super::{single_column, text_run, two_columns, CoverContext, GOLD};
use crate::support::{cell_paragraph, logo_paragraph, logo_run, or_placeholder, outlined, MUTED_GRAY};

/// Centered logo pair for a frame interior.
fn centered_logos(ctx: &CoverContext, height_cm: f64) -> Option<Table> {
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

pub(super) fn academique(docx: Docx, ctx: &CoverContext) -> Docx {
    let centered = |after: u32| cell_paragraph(after).align(AlignmentType::Center);

    let mut content = TableCell::new();
    if let Some(logos) = centered_logos(ctx, 1.8) {
        content = content.add_table(logos);
    }
    content = content
        .add_paragraph(cell_paragraph(10))
        .add_paragraph(
            centered(6).add_run(text_run(ctx.ecole(), 14).bold().color(ctx.accent.as_str())),
        )
        .add_paragraph(centered(15).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(
            centered(6).add_run(
                text_run("RAPPORT DE STAGE", 28)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        );
    if !ctx.data.sujet_stage.is_empty() {
        content = content.add_paragraph(centered(12).add_run(text_run(&ctx.data.sujet_stage, 14).italic()));
    }
    if let Some(run) = ctx.image_centrale().and_then(|p| logo_run(p, 3.0)) {
        content = content.add_paragraph(centered(15).add_run(run));
    }
    content = content
        .add_paragraph(cell_paragraph(10))
        .add_paragraph(centered(4).add_run(text_run("Présenté par", 10)))
        .add_paragraph(centered(8).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(centered(4).add_run(text_run(
            format!("Stage effectué chez {}", ctx.entreprise()),
            12,
        )))
        .add_paragraph(centered(15).add_run(text_run(
            format!("Du {} au {}", ctx.date_debut, ctx.date_fin),
            11,
        )))
        .add_paragraph(
            centered(4).add_run(text_run(format!("Tuteur entreprise : {}", ctx.tuteur()), 10)),
        );
    if !ctx.data.tuteur_academique_nom.is_empty() {
        content = content.add_paragraph(centered(4).add_run(text_run(
            format!("Tuteur académique : {}", ctx.data.tuteur_academique_nom),
            10,
        )));
    }
    content = content.add_paragraph(cell_paragraph(10)).add_paragraph(
        centered(6).add_run(
            text_run(
                or_placeholder(&ctx.data.annee_scolaire, "[Année scolaire]"),
                12,
            )
            .color(ctx.accent.as_str()),
        ),
    );

    let inner = outlined(single_column(content, 15.0), &ctx.accent, 12);
    let outer_cell = TableCell::new()
        .add_paragraph(cell_paragraph(4))
        .add_table(inner);
    docx.add_table(outlined(single_column(outer_cell, 16.0), &ctx.accent, 24))
}

pub(super) fn luxe(docx: Docx, ctx: &CoverContext) -> Docx {
    // Near-black and charcoal accents used only by this model.
    const DARK: &str = "323232";
    const CHARCOAL: &str = "505050";

    let centered = |after: u32| cell_paragraph(after).align(AlignmentType::Center);

    let mut content = TableCell::new();
    if let Some(logos) = centered_logos(ctx, 1.5) {
        content = content.add_paragraph(cell_paragraph(6)).add_table(logos);
    }
    content = content
        .add_paragraph(cell_paragraph(10))
        .add_paragraph(centered(4).add_run(text_run(ctx.ecole(), 11).color(GOLD)))
        .add_paragraph(centered(6).add_run(text_run("— ✦ —", 10).color(GOLD)))
        .add_paragraph(centered(6).add_run(text_run("RAPPORT DE STAGE", 26).bold().color(DARK)));
    if !ctx.data.sujet_stage.is_empty() {
        content = content.add_paragraph(
            centered(8).add_run(text_run(&ctx.data.sujet_stage, 13).italic().color(CHARCOAL)),
        );
    }
    if let Some(run) = ctx.image_centrale().and_then(|p| logo_run(p, 2.5)) {
        content = content.add_paragraph(centered(10).add_run(run));
    }
    content = content
        .add_paragraph(cell_paragraph(10))
        .add_paragraph(centered(8).add_run(text_run("───────────────────", 10).color(GOLD)))
        .add_paragraph(centered(6).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(centered(2).add_run(text_run(ctx.formation(), 11).italic()))
        .add_paragraph(cell_paragraph(10))
        .add_paragraph(centered(2).add_run(text_run(ctx.entreprise(), 13).color(GOLD)))
        .add_paragraph(centered(4).add_run(
            text_run(format!("{}  —  {}", ctx.date_debut, ctx.date_fin), 10).color(MUTED_GRAY),
        ))
        .add_paragraph(cell_paragraph(8))
        .add_paragraph(
            centered(6).add_run(
                text_run(
                    or_placeholder(&ctx.data.annee_scolaire, "[Année scolaire]"),
                    10,
                )
                .color(GOLD),
            ),
        );

    let inner = outlined(single_column(content, 15.0), GOLD, 18);
    let outer_cell = TableCell::new()
        .add_paragraph(cell_paragraph(6))
        .add_table(inner);
    docx.add_table(outlined(single_column(outer_cell, 16.0), GOLD, 36))
}
