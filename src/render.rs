// certificate-pdf: certificate assembly

use crate::config::{
    CertificateRequest, COURSE_TEXT, FOOTER_VALUE, LIGHT_GRAY, MAX_TEXT_WIDTH_PT, PAGE_HEIGHT_PT,
    PAGE_WIDTH_PT,
};
use crate::draw::{Canvas, Placement};
use crate::error::CertificateError;
use crate::logo::resolve_logo;
use crate::metrics::{encodable_text, is_encodable, FontFace, REPLACEMENT};
use crate::text::{fit_font_size, wrap_text};
use printpdf::{BuiltinFont, Mm, Pt, PdfDocument};

/// Smallest size the participant name is shrunk to
const NAME_MIN_SIZE: u32 = 18;

/// Name underline geometry
const NAME_UNDERLINE_DROP_PT: f32 = 8.0;
const NAME_UNDERLINE_PADDING_PT: f32 = 40.0;

/// Accent lines sit this far below the title baseline
const TITLE_ACCENT_DROP_PT: f32 = 18.0;

/// Footer date block
const FOOTER_Y_PT: f32 = 90.0;
const FOOTER_ACCENT_RISE_PT: f32 = 35.0;
const FOOTER_LABEL: &str = "Fecha";
const FOOTER_LABEL_SIZE: f32 = 11.0;
const FOOTER_VALUE_SIZE: f32 = 10.0;
const FOOTER_VALUE_DROP_PT: f32 = 15.0;

/// What ended up on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub name: String,
    pub name_size: u32,
    pub course_lines: Vec<String>,
    pub logo: Option<Placement>,
    pub date: Option<String>,
}

/// A finished certificate.
#[derive(Debug, Clone)]
pub struct Certificate {
    pub pdf: Vec<u8>,
    pub report: RenderReport,
}

/// Render `request` onto a single landscape page.
///
/// Logo problems are logged and the certificate is produced without a logo.
/// Only a failure to serialize the PDF is returned as an error.
pub fn generate_certificate(request: &CertificateRequest) -> Result<Certificate, CertificateError> {
    let style = &request.style;

    let (doc, page, layer) = PdfDocument::new(
        "Certificate",
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Layer 1",
    );

    let font_regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CertificateError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CertificateError::Pdf(e.to_string()))?;

    let canvas = Canvas::new(doc.get_page(page).get_layer(layer), font_regular, font_bold);

    if style.show_border {
        canvas.draw_double_border(
            style.primary_color,
            style.border_width as f32,
            style.border_distance as f32,
        );
    }

    if style.show_guides {
        canvas.draw_guides();
    }

    let logo = resolve_logo(&request.logo_sources).and_then(|img| {
        canvas.draw_image_fit(
            &img,
            style.logo_x as f32,
            style.logo_y as f32,
            style.logo_max_width as f32,
            style.logo_max_height as f32,
        )
    });

    // Title
    let title_y = style.title_y as f32;
    canvas.draw_centered_text(
        &style.title_text,
        title_y,
        FontFace::Bold,
        style.title_size as f32,
        style.primary_color,
        0.0,
    );
    if style.show_accent_lines {
        canvas.draw_accent_lines(
            title_y - TITLE_ACCENT_DROP_PT,
            style.primary_color,
            style.accent_line_width as f32,
        );
    }

    canvas.draw_centered_text(
        &style.awarded_text,
        style.awarded_y as f32,
        FontFace::Regular,
        style.awarded_size as f32,
        style.secondary_color,
        0.0,
    );

    // Participant name, shrunk to fit, with a light underline
    let name = drawable("Participant name", request.display_name());
    let name_y = style.name_y as f32;
    let name_size = fit_font_size(
        &name,
        MAX_TEXT_WIDTH_PT,
        style.name_size,
        NAME_MIN_SIZE,
        FontFace::Bold,
    );
    log::debug!("Name {:?} fitted at {}pt (requested {}pt)", name, name_size, style.name_size);
    let name_width = canvas.draw_centered_text(
        &name,
        name_y,
        FontFace::Bold,
        name_size as f32,
        style.primary_color,
        0.0,
    );

    let underline_width = (name_width + NAME_UNDERLINE_PADDING_PT).min(MAX_TEXT_WIDTH_PT);
    let underline_x = (PAGE_WIDTH_PT - underline_width) / 2.0;
    let underline_y = name_y - NAME_UNDERLINE_DROP_PT;
    canvas.set_stroke(LIGHT_GRAY, 1.0);
    canvas.draw_line(underline_x, underline_y, underline_x + underline_width, underline_y);

    canvas.draw_centered_text(
        &style.course_text,
        style.course_phrase_y as f32,
        FontFace::Regular,
        style.course_phrase_size as f32,
        style.secondary_color,
        0.0,
    );

    // Course title, wrapped
    let course = drawable("Course title", request.display_course());
    let course_size = style.course_size as f32;
    let course_lines = wrap_text(&course, MAX_TEXT_WIDTH_PT, FontFace::Bold, course_size);
    log::debug!("Course title wrapped onto {} line(s)", course_lines.len());
    let mut y = style.course_y as f32;
    for line in &course_lines {
        canvas.draw_centered_text(line, y, FontFace::Bold, course_size, COURSE_TEXT, 0.0);
        y -= style.course_line_spacing as f32;
    }

    // Footer: date block centered on the left half
    let date = request.display_date().map(str::to_string);
    if let Some(date) = &date {
        if style.show_accent_lines {
            canvas.draw_accent_lines(FOOTER_Y_PT + FOOTER_ACCENT_RISE_PT, LIGHT_GRAY, 1.0);
        }

        let column_center = PAGE_WIDTH_PT / 4.0;
        canvas.draw_centered_text_at(
            FOOTER_LABEL,
            column_center,
            FOOTER_Y_PT,
            FontFace::Bold,
            FOOTER_LABEL_SIZE,
            style.secondary_color,
            0.0,
        );
        canvas.draw_centered_text_at(
            date,
            column_center,
            FOOTER_Y_PT,
            FontFace::Regular,
            FOOTER_VALUE_SIZE,
            FOOTER_VALUE,
            -FOOTER_VALUE_DROP_PT,
        );
    }

    let pdf = doc
        .save_to_bytes()
        .map_err(|e| CertificateError::Pdf(e.to_string()))?;

    Ok(Certificate {
        pdf,
        report: RenderReport {
            name,
            name_size,
            course_lines,
            logo,
            date,
        },
    })
}

/// `text` as the built-in fonts will draw it, warning when characters are lost.
fn drawable(field: &str, text: String) -> String {
    if is_encodable(&text) {
        return text;
    }
    log::warn!(
        "{} {:?} has characters the built-in fonts cannot draw; they are shown as '{}'",
        field,
        text,
        REPLACEMENT
    );
    encodable_text(&text).into_owned()
}
