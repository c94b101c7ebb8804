//! Whitespace-driven covers.
//!
//! `minimaliste` is all centered text and empty space; `creative` splits the
//! title in two weights and separates blocks with drawn rules.

use docx_rs::*;

use super::{image_paragraph, spacer, text_run, two_columns, CoverContext, LIGHT_GRAY};
use crate::support::{centered_paragraph, logo_paragraph, MUTED_GRAY, PLACEHOLDER_GRAY};

pub(super) fn minimaliste(docx: Docx, ctx: &CoverContext) -> Docx {
    let mut docx = docx;
    for _ in 0..5 {
        docx = docx.add_paragraph(spacer(18));
    }

    docx = docx
        .add_paragraph(
            centered_paragraph(6).add_run(
                text_run("RAPPORT DE STAGE", 28)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        )
        .add_paragraph(
            centered_paragraph(15)
                .add_run(text_run("─────────────", 12).color(ctx.accent.as_str())),
        );

    if !ctx.data.sujet_stage.is_empty() {
        docx = docx.add_paragraph(
            centered_paragraph(25).add_run(text_run(&ctx.data.sujet_stage, 14).italic()),
        );
    }
    if let Some(image) = ctx.image_centrale() {
        docx = docx.add_paragraph(image_paragraph(image, 2.5, 15));
    }

    docx.add_paragraph(spacer(25))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(centered_paragraph(15).add_run(text_run(ctx.formation(), 11)))
        .add_paragraph(spacer(30))
        .add_paragraph(
            centered_paragraph(4).add_run(text_run(ctx.entreprise(), 12).color(MUTED_GRAY)),
        )
        .add_paragraph(centered_paragraph(4).add_run(
            text_run(format!("{} — {}", ctx.date_debut, ctx.date_fin), 11).color(PLACEHOLDER_GRAY),
        ))
}

pub(super) fn creative(docx: Docx, ctx: &CoverContext) -> Docx {
    let mut docx = docx;

    if ctx.logo_ecole().is_some() || ctx.logo_entreprise().is_some() {
        docx = docx.add_table(two_columns(
            TableCell::new().add_paragraph(logo_paragraph(
                ctx.logo_ecole(),
                1.8,
                AlignmentType::Left,
            )),
            TableCell::new().add_paragraph(logo_paragraph(
                ctx.logo_entreprise(),
                1.8,
                AlignmentType::Right,
            )),
            8.0,
            8.0,
        ));
    }

    docx = docx
        .add_paragraph(spacer(30))
        .add_paragraph(
            centered_paragraph(0)
                .add_run(text_run("RAPPORT", 32).bold().color(ctx.accent.as_str())),
        )
        .add_paragraph(centered_paragraph(8).add_run(text_run("DE STAGE", 16).color("969696")))
        .add_paragraph(
            centered_paragraph(15)
                .add_run(text_run("━━━━━━━━━━━━━━━━", 10).color(ctx.accent.as_str())),
        );

    if !ctx.data.sujet_stage.is_empty() {
        docx = docx.add_paragraph(
            centered_paragraph(15)
                .add_run(text_run(format!("« {} »", ctx.data.sujet_stage), 13).italic()),
        );
    }
    if let Some(image) = ctx.image_centrale() {
        docx = docx.add_paragraph(image_paragraph(image, 3.0, 15));
    }

    docx = docx
        .add_paragraph(spacer(20))
        .add_paragraph(centered_paragraph(4).add_run(text_run(ctx.student_name(), 16).bold()))
        .add_paragraph(
            centered_paragraph(4).add_run(text_run(ctx.formation(), 11).color(MUTED_GRAY)),
        )
        .add_paragraph(
            centered_paragraph(15)
                .add_run(text_run(format!("{}  |  {}", ctx.ecole(), ctx.annee()), 10)),
        )
        // This rule keeps the body size, only the color changes.
        .add_paragraph(
            centered_paragraph(10)
                .add_run(Run::new().add_text("─────────────").color(LIGHT_GRAY)),
        )
        .add_paragraph(
            centered_paragraph(4).add_run(
                text_run(ctx.entreprise(), 13)
                    .bold()
                    .color(ctx.accent.as_str()),
            ),
        );

    if !ctx.data.entreprise_ville.is_empty() {
        docx = docx
            .add_paragraph(centered_paragraph(4).add_run(text_run(&ctx.data.entreprise_ville, 10)));
    }

    docx.add_paragraph(centered_paragraph(8).add_run(
        text_run(format!("{}  —  {}", ctx.date_debut, ctx.date_fin), 10).color(MUTED_GRAY),
    ))
    .add_paragraph(
        centered_paragraph(4)
            .add_run(text_run(format!("Encadré par {}", ctx.tuteur()), 10).color("787878")),
    )
}
