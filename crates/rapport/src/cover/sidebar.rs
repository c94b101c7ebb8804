//! Sidebar-family covers: a narrow column beside the main content.
//!
//! `elegant` uses a thin shaded stripe, `bicolore` a full 40% shaded
//! column, `timeline` a vertical date rail drawn with text glyphs.

use docx_rs::*;

use super::{text_run, two_columns, CoverContext, LIGHT_GRAY, WHITE};
use crate::support::{cell_paragraph, logo_paragraph, logo_run, shaded, MUTED_GRAY};

/// Nested borderless logo pair for a content cell.
fn nested_logos(ctx: &CoverContext, height_cm: f64, col_cm: f64) -> Option<Table> {
    if ctx.logo_ecole().is_none() && ctx.logo_entreprise().is_none() {
        return None;
    }
    Some(two_columns(
        TableCell::new().add_paragraph(logo_paragraph(
            ctx.logo_ecole(),
            height_cm,
            AlignmentType::Left,
        )),
        TableCell::new().add_paragraph(logo_paragraph(
            ctx.logo_entreprise(),
            height_cm,
            AlignmentType::Right,
        )),
        col_cm,
        col_cm,
    ))
}

pub(super) fn elegant(docx: Docx, ctx: &CoverContext) -> Docx {
    let stripe = shaded(TableCell::new(), &ctx.accent).add_paragraph(cell_paragraph(0));

    let mut content = TableCell::new();
    if let Some(logos) = nested_logos(ctx, 2.0, 7.0) {
        content = content.add_table(logos);
    }
    content = content
        .add_paragraph(cell_paragraph(25))
        .add_paragraph(
            cell_paragraph(4).add_run(
                text_run("RAPPORT DE STAGE", 28)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        );
    if !ctx.data.sujet_stage.is_empty() {
        content =
            content.add_paragraph(cell_paragraph(12).add_run(text_run(&ctx.data.sujet_stage, 14).italic()));
    }
    if let Some(run) = ctx.image_centrale().and_then(|p| logo_run(p, 3.0)) {
        content = content.add_paragraph(cell_paragraph(12).add_run(run));
    }
    content = content
        .add_paragraph(cell_paragraph(18))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(
            cell_paragraph(15).add_run(text_run(format!("{}  |  {}", ctx.ecole(), ctx.annee()), 12)),
        )
        .add_paragraph(
            cell_paragraph(4).add_run(
                text_run(ctx.entreprise(), 14)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        );
    if !ctx.data.entreprise_ville.is_empty() {
        content =
            content.add_paragraph(cell_paragraph(6).add_run(text_run(&ctx.data.entreprise_ville, 12)));
    }
    content = content
        .add_paragraph(cell_paragraph(15).add_run(text_run(
            format!("Du {} au {}", ctx.date_debut, ctx.date_fin),
            12,
        )))
        .add_paragraph(
            cell_paragraph(4)
                .add_run(text_run(format!("Tuteur entreprise : {}", ctx.tuteur()), 12)),
        );
    if !ctx.data.tuteur_academique_nom.is_empty() {
        content = content.add_paragraph(cell_paragraph(0).add_run(text_run(
            format!("Tuteur académique : {}", ctx.data.tuteur_academique_nom),
            12,
        )));
    }

    docx.add_table(two_columns(stripe, content, 0.5, 15.5))
}

pub(super) fn bicolore(docx: Docx, ctx: &CoverContext) -> Docx {
    let centered = |after: u32| cell_paragraph(after).align(AlignmentType::Center);

    let mut left = shaded(TableCell::new(), &ctx.accent);
    if let Some(run) = ctx.logo_ecole().and_then(|p| logo_run(p, 2.0)) {
        left = left
            .add_paragraph(cell_paragraph(15))
            .add_paragraph(centered(15).add_run(run));
    }
    for _ in 0..3 {
        left = left.add_paragraph(cell_paragraph(20));
    }
    left = left
        .add_paragraph(centered(30).add_run(text_run("STAGE", 24).bold().color(WHITE)))
        .add_paragraph(centered(10).add_run(text_run(ctx.annee(), 12).color(LIGHT_GRAY)))
        .add_paragraph(
            centered(30).add_run(
                text_run(&ctx.date_debut, 10)
                    .color(LIGHT_GRAY)
                    .add_break(BreakType::TextWrapping)
                    .add_text("—")
                    .add_break(BreakType::TextWrapping)
                    .add_text(&ctx.date_fin),
            ),
        );
    if let Some(run) = ctx.logo_entreprise().and_then(|p| logo_run(p, 1.5)) {
        left = left
            .add_paragraph(cell_paragraph(20))
            .add_paragraph(cell_paragraph(20))
            .add_paragraph(centered(10).add_run(run));
    }

    let mut right = TableCell::new().add_paragraph(cell_paragraph(30)).add_paragraph(
        cell_paragraph(6).add_run(
            text_run("RAPPORT", 28)
                .bold()
                .color(ctx.accent.as_str())
                .add_break(BreakType::TextWrapping)
                .add_text("DE STAGE"),
        ),
    );
    if !ctx.data.sujet_stage.is_empty() {
        right = right
            .add_paragraph(cell_paragraph(12))
            .add_paragraph(cell_paragraph(12).add_run(text_run(&ctx.data.sujet_stage, 14).italic()));
    }
    if let Some(run) = ctx.image_centrale().and_then(|p| logo_run(p, 2.5)) {
        right = right
            .add_paragraph(cell_paragraph(8))
            .add_paragraph(cell_paragraph(12).add_run(run));
    }
    right = right
        .add_paragraph(cell_paragraph(25))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.formation(), 12)))
        .add_paragraph(cell_paragraph(20).add_run(text_run(ctx.ecole(), 11).color(MUTED_GRAY)))
        .add_paragraph(
            cell_paragraph(4).add_run(
                text_run(ctx.entreprise(), 14)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        );
    if !ctx.data.entreprise_ville.is_empty() {
        right =
            right.add_paragraph(cell_paragraph(15).add_run(text_run(&ctx.data.entreprise_ville, 11)));
    }
    right = right
        .add_paragraph(cell_paragraph(20))
        .add_paragraph(
            cell_paragraph(4)
                .add_run(text_run(format!("Tuteur : {}", ctx.tuteur()), 10).color(MUTED_GRAY)),
        );

    docx.add_table(two_columns(left, right, 6.4, 9.6))
}

pub(super) fn timeline(docx: Docx, ctx: &CoverContext) -> Docx {
    let centered = |after: u32| cell_paragraph(after).align(AlignmentType::Center);
    let day = |date: &str| date.split_whitespace().next().unwrap_or("").to_owned();

    let mut rail = TableCell::new()
        .add_paragraph(centered(4).add_run(text_run("●", 14).color(ctx.accent.as_str())))
        .add_paragraph(centered(20).add_run(text_run(day(&ctx.date_debut), 8).color(MUTED_GRAY)));
    for _ in 0..6 {
        rail = rail.add_paragraph(centered(0).add_run(text_run("│", 10).color(ctx.accent.as_str())));
    }
    rail = rail
        .add_paragraph(cell_paragraph(20))
        .add_paragraph(centered(4).add_run(text_run("●", 14).color(ctx.accent.as_str())))
        .add_paragraph(centered(0).add_run(text_run(day(&ctx.date_fin), 8).color(MUTED_GRAY)));

    let mut content = TableCell::new();
    if let Some(logos) = nested_logos(ctx, 1.5, 6.0) {
        content = content.add_table(logos);
    }
    content = content.add_paragraph(cell_paragraph(15)).add_paragraph(
        cell_paragraph(4).add_run(
            text_run("RAPPORT DE STAGE", 26)
                .bold()
                .color(ctx.accent.as_str()),
        ),
    );
    if !ctx.data.sujet_stage.is_empty() {
        content =
            content.add_paragraph(cell_paragraph(10).add_run(text_run(&ctx.data.sujet_stage, 13).italic()));
    }
    if let Some(run) = ctx.image_centrale().and_then(|p| logo_run(p, 2.5)) {
        content = content.add_paragraph(cell_paragraph(10).add_run(run));
    }
    content = content
        .add_paragraph(cell_paragraph(15))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(cell_paragraph(4).add_run(text_run(ctx.formation(), 11)))
        .add_paragraph(cell_paragraph(10).add_run(text_run(ctx.ecole(), 10).color(MUTED_GRAY)))
        .add_paragraph(
            cell_paragraph(4).add_run(
                text_run(ctx.entreprise(), 13)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        )
        .add_paragraph(cell_paragraph(10))
        .add_paragraph(
            cell_paragraph(0)
                .add_run(text_run(format!("Tuteur : {}", ctx.tuteur()), 10).color(MUTED_GRAY)),
        );

    docx.add_table(two_columns(rail, content, 2.0, 14.0))
}
