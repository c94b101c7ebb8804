//! Layout primitives shared by covers, furniture and sections.
//!
//! Everything here is a small pure helper over the `docx-rs` builder types:
//! indentation-reset paragraphs for cover content, border and shading
//! helpers for layout tables, the PAGE field code, and the date/duration and
//! image-payload plumbing. Image handling is best-effort by contract: a
//! payload that cannot be decoded yields `None` and the call site simply
//! omits the picture run.

use std::io::Cursor;

use base64::Engine;
use chrono::{Datelike, NaiveDate};
use docx_rs::*;
use log::debug;

/// EMU per centimeter.
pub const EMU_PER_CM: f64 = 360_000.0;
/// EMU per twip.
pub const EMU_PER_TWIP: i64 = 635;

/// Minimum payload length for an image field to count as supplied.
///
/// Anything shorter is an empty-but-non-null placeholder and is treated
/// exactly like an absent image.
pub const IMAGE_PRESENCE_THRESHOLD: usize = 100;

/// Muted gray used for secondary furniture text.
pub const MUTED_GRAY: &str = "646464";
/// Gray used for placeholder runs.
pub const PLACEHOLDER_GRAY: &str = "808080";

/// French month names, indexed by `month - 1`.
const MOIS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Converts centimeters to twips, truncating through EMU so values match
/// OOXML lengths stored as `Cm(..)` in existing documents.
pub fn cm(v: f64) -> i32 {
    ((v * EMU_PER_CM) as i64 / EMU_PER_TWIP) as i32
}

/// Converts points to half-points, the run size unit.
pub fn pt(v: u32) -> usize {
    (v * 2) as usize
}

/// Converts points to twentieths of a point, the spacing unit.
pub fn pt20(v: u32) -> u32 {
    v * 20
}

/// Converts centimeters to EMU, the picture size unit.
pub fn cm_to_emu(v: f64) -> u32 {
    (v * EMU_PER_CM).round() as u32
}

/// Returns `value`, or `fallback` when `value` is empty.
///
/// Used for the bracketed placeholders that keep every labeled position of
/// the document legible with no input data.
pub fn or_placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// Strips the leading `#` of a hex color.
pub fn hex(color: &str) -> &str {
    color.trim_start_matches('#')
}

/// Formats an ISO `YYYY-MM-DD` date as `"<day> <month> <year>"` in French.
///
/// Empty or unparsable input yields the `[Date]` placeholder; this never
/// fails.
pub fn format_date_fr(date: &str) -> String {
    if date.is_empty() {
        return "[Date]".into();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} {} {}", d.day(), MOIS[d.month0() as usize], d.year()),
        Err(_) => "[Date]".into(),
    }
}

/// Whole-month difference between two ISO dates, rendered as `"N mois"`.
///
/// The day of month is deliberately ignored: a range from the 28th to the
/// 2nd of the following month still counts as one month. Missing or
/// unparsable input yields the `[durée]` placeholder.
pub fn duration_months(start: &str, end: &str) -> String {
    if start.is_empty() || end.is_empty() {
        return "[durée]".into();
    }
    let (Ok(d1), Ok(d2)) = (
        NaiveDate::parse_from_str(start, "%Y-%m-%d"),
        NaiveDate::parse_from_str(end, "%Y-%m-%d"),
    ) else {
        return "[durée]".into();
    };
    let months = (d2.year() - d1.year()) * 12 + d2.month() as i32 - d1.month() as i32;
    if months == 1 {
        "1 mois".into()
    } else {
        format!("{months} mois")
    }
}

/// Whether an optional image payload passes the presence threshold.
pub fn is_image_present(payload: Option<&str>) -> bool {
    payload.is_some_and(|p| p.len() > IMAGE_PRESENCE_THRESHOLD)
}

/// A decoded image payload, normalized to PNG when possible.
pub struct LogoImage {
    /// PNG bytes, or the raw decoded bytes when re-encoding failed.
    pub data: Vec<u8>,
    /// Pixel dimensions, when the payload could be decoded.
    pub dimensions: Option<(u32, u32)>,
}

/// Decodes a base64 image payload and normalizes it to an opaque RGB PNG.
///
/// An optional `data:...;base64,` prefix is stripped first. Transparency is
/// flattened against a white background so the picture renders identically
/// in viewers that ignore alpha. When re-encoding fails the raw decoded
/// bytes are returned as a last resort; when base64 decoding itself fails
/// the payload is unusable and `None` is returned.
pub fn decode_logo(payload: &str) -> Option<LogoImage> {
    let b64 = match payload.split_once(',') {
        Some((_, rest)) => rest,
        None => payload,
    };
    let decoded = match base64::engine::general_purpose::STANDARD.decode(b64.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("skipping image: base64 decode failed: {err}");
            return None;
        }
    };
    match reencode_opaque_png(&decoded) {
        Ok((data, dimensions)) => Some(LogoImage {
            data,
            dimensions: Some(dimensions),
        }),
        Err(err) => {
            debug!("image normalization failed, embedding raw bytes: {err}");
            Some(LogoImage {
                data: decoded,
                dimensions: None,
            })
        }
    }
}

/// Re-encodes arbitrary raster bytes as an opaque RGB PNG.
fn reencode_opaque_png(data: &[u8]) -> crate::Result<(Vec<u8>, (u32, u32))> {
    let img = image::load_from_memory(data).map_err(|e| e.to_string())?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut flat = image::RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let blend = |c: u8| -> u8 {
            ((c as u32 * a as u32 + 255 * (255 - a as u32)) / 255) as u8
        };
        flat.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }

    let mut buffer = Vec::new();
    image::DynamicImage::ImageRgb8(flat)
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .map_err(|e| e.to_string())?;
    Ok((buffer, (width, height)))
}

/// Builds a picture run for an image payload, scaled to the given height.
///
/// Width follows the source aspect ratio, with a 4:3 fallback when the
/// dimensions are unknown. Returns `None` when the payload cannot be
/// decoded; the caller then leaves the paragraph without that run.
pub fn logo_run(payload: &str, height_cm: f64) -> Option<Run> {
    let logo = decode_logo(payload)?;
    let height = cm_to_emu(height_cm);
    let width = match logo.dimensions {
        Some((w, h)) if h > 0 => ((height as u64 * w as u64) / h as u64) as u32,
        _ => height / 3 * 4,
    };
    let pic = Pic::new(&logo.data).size(width, height);
    Some(Run::new().add_image(pic))
}

/// A cell paragraph carrying a logo run when the payload is usable.
///
/// Absent, short or undecodable payloads leave the paragraph empty.
pub fn logo_paragraph(payload: Option<&str>, height_cm: f64, align: AlignmentType) -> Paragraph {
    let mut para = cell_paragraph(0).align(align);
    if is_image_present(payload)
        && let Some(run) = payload.and_then(|p| logo_run(p, height_cm))
    {
        para = para.add_run(run);
    }
    para
}

/// A new centered paragraph with the cover indentation reset.
///
/// Zero first-line and left indent, zero spacing before, configurable
/// spacing after (points). Cover content must not inherit the body
/// first-line indent.
pub fn centered_paragraph(space_after_pt: u32) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .indent(Some(0), Some(SpecialIndentType::FirstLine(0)), None, None)
        .line_spacing(LineSpacing::new().before(0).after(pt20(space_after_pt)))
}

/// A new left-aligned paragraph with the indentation reset, for table cells.
pub fn cell_paragraph(space_after_pt: u32) -> Paragraph {
    Paragraph::new()
        .indent(Some(0), Some(SpecialIndentType::FirstLine(0)), None, None)
        .line_spacing(LineSpacing::new().before(0).after(pt20(space_after_pt)))
}

/// A paragraph containing a single explicit page break.
pub fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

/// The live page-number field: begin / `PAGE` / separate / "1" / end.
///
/// `docx-rs` exposes no high-level PAGE field, so the raw field characters
/// and instruction text are emitted directly.
pub fn page_number_run() -> Run {
    Run::new()
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::Unsupported("PAGE".to_owned()))
        .add_field_char(FieldCharType::Separate, false)
        .add_text("1")
        .add_field_char(FieldCharType::End, false)
}

/// Removes every border of a layout table.
pub fn borderless(table: Table) -> Table {
    table.clear_all_border()
}

/// Draws a single border around a table in the given color.
///
/// `size` is in eighths of a point. Inside borders stay cleared, so the
/// helper is safe to apply over pre-existing border properties.
pub fn outlined(table: Table, color: &str, size: usize) -> Table {
    let color = hex(color).to_owned();
    let mut table = table.clear_all_border();
    for position in [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
    ] {
        table = table.set_border(
            TableBorder::new(position)
                .border_type(BorderType::Single)
                .size(size)
                .color(color.clone()),
        );
    }
    table
}

/// Draws only a top border on a table, used for footer rules.
pub fn top_border(table: Table, color: &str, size: usize) -> Table {
    borderless(table).set_border(
        TableBorder::new(TableBorderPosition::Top)
            .border_type(BorderType::Single)
            .size(size)
            .color(hex(color).to_owned()),
    )
}

/// Fills a table cell background with the given hex color.
pub fn shaded(cell: TableCell, color: &str) -> TableCell {
    cell.shading(Shading::new().shd_type(ShdType::Clear).fill(hex(color)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_base64(width: u32, height: u32, alpha: u8) -> String {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, alpha]));
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        base64::engine::general_purpose::STANDARD.encode(buffer)
    }

    #[test]
    fn formats_french_dates() {
        assert_eq!(format_date_fr("2024-01-15"), "15 janvier 2024");
        assert_eq!(format_date_fr("2023-08-01"), "1 août 2023");
        assert_eq!(format_date_fr("2022-12-31"), "31 décembre 2022");
    }

    #[test]
    fn bad_dates_share_one_placeholder() {
        assert_eq!(format_date_fr(""), "[Date]");
        assert_eq!(format_date_fr("not-a-date"), "[Date]");
        assert_eq!(format_date_fr("2024-13-40"), "[Date]");
    }

    #[test]
    fn duration_counts_whole_months() {
        assert_eq!(duration_months("2024-01-01", "2024-07-01"), "6 mois");
        assert_eq!(duration_months("2024-01-01", "2024-02-01"), "1 mois");
        // Day of month is ignored: the 28th to the 2nd is still one month.
        assert_eq!(duration_months("2024-01-28", "2024-02-02"), "1 mois");
        assert_eq!(duration_months("2023-09-01", "2024-09-01"), "12 mois");
    }

    #[test]
    fn duration_placeholder_on_missing_input() {
        assert_eq!(duration_months("", "2024-07-01"), "[durée]");
        assert_eq!(duration_months("2024-01-01", ""), "[durée]");
        assert_eq!(duration_months("junk", "2024-07-01"), "[durée]");
    }

    #[test]
    fn presence_threshold_guards_short_payloads() {
        assert!(!is_image_present(None));
        assert!(!is_image_present(Some("")));
        assert!(!is_image_present(Some(&"a".repeat(100))));
        assert!(is_image_present(Some(&"a".repeat(101))));
    }

    #[test]
    fn decodes_and_flattens_alpha() {
        let payload = png_base64(4, 4, 128);
        let logo = decode_logo(&payload).unwrap();
        assert_eq!(logo.dimensions, Some((4, 4)));
        let img = image::load_from_memory(&logo.data).unwrap();
        // Alpha flattened against white: the result is strictly lighter.
        let px = img.to_rgb8().get_pixel(0, 0).0;
        assert!(px[0] > 10 && px[1] > 20 && px[2] > 30);
    }

    #[test]
    fn strips_data_uri_prefix() {
        let payload = format!("data:image/png;base64,{}", png_base64(2, 2, 255));
        assert!(decode_logo(&payload).is_some());
    }

    #[test]
    fn invalid_base64_yields_none() {
        assert!(decode_logo("!!not base64!!").is_none());
    }

    #[test]
    fn undecodable_image_falls_back_to_raw_bytes() {
        let payload = base64::engine::general_purpose::STANDARD.encode(b"not an image at all");
        let logo = decode_logo(&payload).unwrap();
        assert_eq!(logo.data, b"not an image at all");
        assert!(logo.dimensions.is_none());
    }

    #[test]
    fn logo_run_keeps_aspect_ratio() {
        let payload = png_base64(8, 4, 255);
        assert!(logo_run(&payload, 2.0).is_some());
        assert!(logo_run("!!", 2.0).is_none());
    }

    #[test]
    fn placeholder_substitution() {
        assert_eq!(or_placeholder("", "[Nom]"), "[Nom]");
        assert_eq!(or_placeholder("Martin", "[Nom]"), "Martin");
    }
}
