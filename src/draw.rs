// certificate-pdf: drawing primitives on a single landscape page

use crate::config::{Color, GUIDE_CENTER, GUIDE_MARGIN, MARGIN_PT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::metrics::{encodable_text, text_width, FontFace};
use ::image::{DynamicImage, Rgba, RgbImage};
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Line, Mm,
    PdfLayerReference, Point, Pt, Px, Rgb,
};

/// Gap between the outer and inner border rectangles
const INNER_BORDER_GAP_PT: f32 = 6.0;

/// Accent line geometry
const ACCENT_LINE_LENGTH_PT: f32 = 80.0;
const ACCENT_CENTER_GAP_PT: f32 = 120.0;

const GUIDE_THICKNESS_PT: f32 = 0.5;

/// Where and how large the logo ended up on the page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scale `img_w` x `img_h` uniformly so it fits inside `max_w` x `max_h`.
///
/// Returns `None` when either the image or the box is empty.
pub fn fit_image(img_w: f32, img_h: f32, max_w: f32, max_h: f32) -> Option<(f32, f32)> {
    if img_w <= 0.0 || img_h <= 0.0 || max_w <= 0.0 || max_h <= 0.0 {
        return None;
    }
    let ratio = (max_w / img_w).min(max_h / img_h);
    Some((img_w * ratio, img_h * ratio))
}

fn pt(value: f32) -> Mm {
    Mm::from(Pt(value))
}

fn pdf_color(color: Color) -> printpdf::Color {
    let (r, g, b) = color.to_unit();
    printpdf::Color::Rgb(Rgb::new(r, g, b, None))
}

// ============================================================================
// Canvas
// ============================================================================

/// A page layer plus the two built-in fonts, addressed in points with the
/// origin at the bottom-left corner.
pub struct Canvas {
    layer: PdfLayerReference,
    font_regular: IndirectFontRef,
    font_bold: IndirectFontRef,
}

impl Canvas {
    pub fn new(layer: PdfLayerReference, font_regular: IndirectFontRef, font_bold: IndirectFontRef) -> Self {
        Self {
            layer,
            font_regular,
            font_bold,
        }
    }

    fn font(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.font_regular,
            FontFace::Bold => &self.font_bold,
        }
    }

    pub fn draw_text(&self, text: &str, x: f32, y: f32, face: FontFace, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        self.layer.set_fill_color(pdf_color(color));
        self.layer
            .use_text(encodable_text(text), size, pt(x), pt(y), self.font(face));
    }

    /// Draw `text` horizontally centered on the page. Returns the text width.
    pub fn draw_centered_text(
        &self,
        text: &str,
        y: f32,
        face: FontFace,
        size: f32,
        color: Color,
        y_offset: f32,
    ) -> f32 {
        self.draw_centered_text_at(text, PAGE_WIDTH_PT / 2.0, y, face, size, color, y_offset)
    }

    /// Draw `text` centered on the vertical line `center_x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_centered_text_at(
        &self,
        text: &str,
        center_x: f32,
        y: f32,
        face: FontFace,
        size: f32,
        color: Color,
        y_offset: f32,
    ) -> f32 {
        let width = text_width(text, face, size);
        self.draw_text(text, center_x - width / 2.0, y + y_offset, face, size, color);
        width
    }

    /// Draw `text` so that its right edge sits on `x_right`.
    pub fn draw_right_aligned_text(&self, text: &str, x_right: f32, y: f32, face: FontFace, size: f32, color: Color) {
        let width = text_width(text, face, size);
        self.draw_text(text, x_right - width, y, face, size, color);
    }

    pub fn set_stroke(&self, color: Color, thickness: f32) {
        self.layer.set_outline_color(pdf_color(color));
        self.layer.set_outline_thickness(thickness);
    }

    pub fn draw_line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let points = vec![
            (Point::new(pt(x1), pt(y1)), false),
            (Point::new(pt(x2), pt(y2)), false),
        ];
        let line = Line {
            points,
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    /// Stroke an axis-aligned rectangle with its bottom-left corner at `(x, y)`.
    pub fn stroke_rect(&self, x: f32, y: f32, width: f32, height: f32) {
        let points = vec![
            (Point::new(pt(x), pt(y)), false),
            (Point::new(pt(x + width), pt(y)), false),
            (Point::new(pt(x + width), pt(y + height)), false),
            (Point::new(pt(x), pt(y + height)), false),
        ];
        let line = Line {
            points,
            is_closed: true,
        };
        self.layer.add_line(line);
    }

    // ========================================================================
    // Decoration
    // ========================================================================

    /// Double frame: outer rectangle at `thickness`, inner one 6 pt further
    /// in at half the thickness.
    pub fn draw_double_border(&self, color: Color, thickness: f32, distance: f32) {
        self.set_stroke(color, thickness);
        self.stroke_rect(
            distance,
            distance,
            PAGE_WIDTH_PT - 2.0 * distance,
            PAGE_HEIGHT_PT - 2.0 * distance,
        );

        let inner = distance + INNER_BORDER_GAP_PT;
        self.set_stroke(color, thickness * 0.5);
        self.stroke_rect(
            inner,
            inner,
            PAGE_WIDTH_PT - 2.0 * inner,
            PAGE_HEIGHT_PT - 2.0 * inner,
        );
    }

    /// Two short strokes flanking a gap in the middle of the page.
    pub fn draw_accent_lines(&self, y: f32, color: Color, thickness: f32) {
        self.set_stroke(color, thickness);
        let (left, right) = accent_line_starts();
        self.draw_line(left, y, left + ACCENT_LINE_LENGTH_PT, y);
        self.draw_line(right, y, right + ACCENT_LINE_LENGTH_PT, y);
    }

    /// Margin and center guides for layout calibration.
    pub fn draw_guides(&self) {
        self.set_stroke(GUIDE_MARGIN, GUIDE_THICKNESS_PT);
        self.draw_line(MARGIN_PT, 0.0, MARGIN_PT, PAGE_HEIGHT_PT);
        self.draw_line(PAGE_WIDTH_PT - MARGIN_PT, 0.0, PAGE_WIDTH_PT - MARGIN_PT, PAGE_HEIGHT_PT);
        self.draw_line(0.0, MARGIN_PT, PAGE_WIDTH_PT, MARGIN_PT);
        self.draw_line(0.0, PAGE_HEIGHT_PT - MARGIN_PT, PAGE_WIDTH_PT, PAGE_HEIGHT_PT - MARGIN_PT);

        self.set_stroke(GUIDE_CENTER, GUIDE_THICKNESS_PT);
        self.draw_line(PAGE_WIDTH_PT / 2.0, 0.0, PAGE_WIDTH_PT / 2.0, PAGE_HEIGHT_PT);
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Draw `img` scaled to fit `max_w` x `max_h` with its bottom-left corner
    /// at `(x, y)`.
    pub fn draw_image_fit(&self, img: &DynamicImage, x: f32, y: f32, max_w: f32, max_h: f32) -> Option<Placement> {
        let (width_px, height_px) = (img.width(), img.height());
        let (width, height) = fit_image(width_px as f32, height_px as f32, max_w, max_h)?;

        let image = Image::from(ImageXObject {
            width: Px(width_px as usize),
            height: Px(height_px as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: flatten_on_white(img).into_raw(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });

        // Pixels per inch that make the image `width` points wide
        let dpi = width_px as f32 * 72.0 / width;

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(pt(x)),
                translate_y: Some(pt(y)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );

        Some(Placement { x, y, width, height })
    }
}

/// Left x of each accent stroke.
fn accent_line_starts() -> (f32, f32) {
    let left = (PAGE_WIDTH_PT - ACCENT_CENTER_GAP_PT) / 2.0 - ACCENT_LINE_LENGTH_PT;
    let right = (PAGE_WIDTH_PT + ACCENT_CENTER_GAP_PT) / 2.0;
    (left, right)
}

/// Composite transparent pixels against a white background.
fn flatten_on_white(img: &DynamicImage) -> RgbImage {
    let rgba_image = img.to_rgba8();
    let (width_px, height_px) = rgba_image.dimensions();

    let mut rgb_image = RgbImage::new(width_px, height_px);
    for (x, y, pixel) in rgba_image.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let blend = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        rgb_image.put_pixel(x, y, ::image::Rgb([blend(r), blend(g), blend(b)]));
    }
    rgb_image
}
