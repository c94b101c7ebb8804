//! Named paragraph styles derived from the report style configuration.
//!
//! Body text and the three heading levels are registered once on the
//! document; everything rendered through `.style("...")` then inherits font,
//! size, color and indentation from here, so a single [`StyleConfig`] change
//! restyles the whole report.

use docx_rs::*;

use crate::model::StyleConfig;
use crate::support::{cm, hex, pt, pt20};

/// Builds the document style sheet from a [`StyleConfig`].
#[derive(Clone, Debug)]
pub struct StyleSheet<'a> {
    config: &'a StyleConfig,
}

impl<'a> StyleSheet<'a> {
    /// Creates a style sheet for the given configuration.
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    fn body_fonts(&self) -> RunFonts {
        let family = self.config.font_family.as_str();
        RunFonts::new()
            .ascii(family)
            .hi_ansi(family)
            .east_asia(family)
            .cs(family)
    }

    /// Body style: configured font and size, configured line spacing, 1.25 cm
    /// first-line indent and 6 pt spacing after.
    fn normal(&self) -> Style {
        // Line spacing ratio in 240ths of a line, auto rule.
        let line = (self.config.line_spacing * 240.0).round() as i32;
        Style::new("Normal", StyleType::Paragraph)
            .name("Normal")
            .fonts(self.body_fonts())
            .size(pt(self.config.font_size))
            .line_spacing(
                LineSpacing::new()
                    .after(pt20(6))
                    .line(line)
                    .line_rule(LineSpacingType::Auto),
            )
            .indent(
                Some(0),
                Some(SpecialIndentType::FirstLine(cm(1.25))),
                None,
                None,
            )
    }

    fn heading1(&self) -> Style {
        let mut style = Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .fonts(self.body_fonts())
            .size(pt(self.config.title1_size))
            .color(hex(&self.config.title1_color))
            .line_spacing(LineSpacing::new().before(pt20(18)).after(pt20(12)))
            .indent(Some(0), Some(SpecialIndentType::FirstLine(0)), None, None);
        if self.config.title1_bold {
            style = style.bold();
        }
        style
    }

    fn heading2(&self) -> Style {
        let mut style = Style::new("Heading2", StyleType::Paragraph)
            .name("Heading 2")
            .fonts(self.body_fonts())
            .size(pt(self.config.title2_size))
            .color(hex(&self.config.title2_color))
            .line_spacing(LineSpacing::new().before(pt20(14)).after(pt20(8)))
            .indent(
                Some(cm(0.75)),
                Some(SpecialIndentType::FirstLine(0)),
                None,
                None,
            );
        if self.config.title2_bold {
            style = style.bold();
        }
        style
    }

    fn heading3(&self) -> Style {
        let mut style = Style::new("Heading3", StyleType::Paragraph)
            .name("Heading 3")
            .fonts(self.body_fonts())
            .size(pt(self.config.title3_size))
            .color(hex(&self.config.title3_color))
            .line_spacing(LineSpacing::new().before(pt20(10)).after(pt20(6)))
            .indent(
                Some(cm(1.5)),
                Some(SpecialIndentType::FirstLine(0)),
                None,
                None,
            );
        if self.config.title3_italic {
            style = style.italic();
        }
        style
    }

    /// Registers every report style on the document.
    pub fn apply(&self, docx: Docx) -> Docx {
        docx.add_style(self.normal())
            .add_style(self.heading1())
            .add_style(self.heading2())
            .add_style(self.heading3())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_report_styles() {
        let config = StyleConfig::default();
        let docx = StyleSheet::new(&config).apply(Docx::new());
        let ids: Vec<&str> = docx
            .styles
            .styles
            .iter()
            .map(|s| s.style_id.as_str())
            .collect();
        for id in ["Normal", "Heading1", "Heading2", "Heading3"] {
            assert!(ids.contains(&id), "missing style {id}");
        }
    }

    #[test]
    fn heading_levels_step_down_in_indent() {
        assert_eq!(cm(0.75), 425);
        assert_eq!(cm(1.5), 850);
        assert_eq!(cm(1.25), 708);
    }
}
