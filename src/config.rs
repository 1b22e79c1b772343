// certificate-pdf: render request and style configuration

use crate::error::CertificateError;
use crate::logo::LogoSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Constants
// ============================================================================

/// Landscape A4 dimensions in points
pub const PAGE_WIDTH_PT: f32 = 841.889_76;
pub const PAGE_HEIGHT_PT: f32 = 595.275_6;

/// Distance of the layout margins from each page edge
pub const MARGIN_PT: f32 = 50.0;

/// Widest a name or course line may be drawn
pub const MAX_TEXT_WIDTH_PT: f32 = PAGE_WIDTH_PT - MARGIN_PT * 3.0;

pub const NAME_PLACEHOLDER: &str = "NOMBRE DEL/DE LA PARTICIPANTE";
pub const COURSE_PLACEHOLDER: &str = "TÍTULO DEL CURSO";

/// Logo looked up in the working directory when nothing else is supplied
pub const DEFAULT_LOGO_PATH: &str = "logo_codelco_gm.png";

/// Accepted ranges for the bounded style fields, shared by presets and CLI flags
pub const TITLE_SIZE_RANGE: RangeInclusive<i64> = 28..=52;
pub const AWARDED_SIZE_RANGE: RangeInclusive<i64> = 12..=24;
pub const NAME_SIZE_RANGE: RangeInclusive<i64> = 24..=48;
pub const COURSE_PHRASE_SIZE_RANGE: RangeInclusive<i64> = 12..=24;
pub const COURSE_SIZE_RANGE: RangeInclusive<i64> = 16..=32;
pub const COURSE_LINE_SPACING_RANGE: RangeInclusive<i64> = 18..=40;
pub const BORDER_WIDTH_RANGE: RangeInclusive<i64> = 1..=5;
pub const BORDER_DISTANCE_RANGE: RangeInclusive<i64> = 15..=40;
pub const ACCENT_LINE_WIDTH_RANGE: RangeInclusive<i64> = 1..=4;

// ============================================================================
// Colors
// ============================================================================

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        let unit = |v: u8| v as f32 / 255.0;
        (unit(self.r), unit(self.g), unit(self.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = CertificateError;

    /// Accepts `#RRGGBB`, `RRGGBB` and the short `#RGB` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CertificateError::InvalidColor(s.to_string());
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::from_rgb8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Fixed palette
pub const LIGHT_GRAY: Color = Color::from_rgb8(0xE8, 0xE8, 0xE8);
pub const COURSE_TEXT: Color = Color::from_rgb8(0x2C, 0x2C, 0x2C);
pub const FOOTER_VALUE: Color = Color::from_rgb8(0x66, 0x66, 0x66);
pub const GUIDE_MARGIN: Color = Color::from_rgb8(0xCC, 0xCC, 0xCC);
pub const GUIDE_CENTER: Color = Color::from_rgb8(0xBB, 0xBB, 0xBB);

// ============================================================================
// Style Options
// ============================================================================

/// Every tunable of the certificate layout. Positions are in points from the
/// bottom of the page; sizes are font sizes in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub primary_color: Color,
    pub secondary_color: Color,

    pub title_size: u32,
    pub awarded_size: u32,
    pub name_size: u32,
    pub course_phrase_size: u32,
    pub course_size: u32,

    pub title_y: i32,
    pub awarded_y: i32,
    pub name_y: i32,
    pub course_phrase_y: i32,
    pub course_y: i32,
    pub course_line_spacing: u32,

    pub logo_x: i32,
    pub logo_y: i32,
    pub logo_max_width: u32,
    pub logo_max_height: u32,

    pub show_border: bool,
    pub border_width: u32,
    pub border_distance: u32,

    pub show_accent_lines: bool,
    pub accent_line_width: u32,

    pub show_guides: bool,

    pub title_text: String,
    pub awarded_text: String,
    pub course_text: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        let top = |offset: f32| (PAGE_HEIGHT_PT - offset) as i32;
        Self {
            primary_color: Color::from_rgb8(0xE7, 0x62, 0x27),
            secondary_color: Color::from_rgb8(0x4A, 0x4A, 0x4A),
            title_size: 38,
            awarded_size: 15,
            name_size: 34,
            course_phrase_size: 15,
            course_size: 22,
            title_y: top(100.0),
            awarded_y: top(165.0),
            name_y: top(215.0),
            course_phrase_y: top(280.0),
            course_y: top(320.0),
            course_line_spacing: 26,
            logo_x: 230,
            logo_y: 40,
            logo_max_width: 400,
            logo_max_height: 400,
            show_border: true,
            border_width: 2,
            border_distance: 25,
            show_accent_lines: false,
            accent_line_width: 2,
            show_guides: false,
            title_text: "DIPLOMA".to_string(),
            awarded_text: "Se otorga el presente certificado a:".to_string(),
            course_text: "Por haber completado satisfactoriamente el curso:".to_string(),
        }
    }
}

impl StyleOptions {
    /// Load a style preset from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, CertificateError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CertificateError::Style(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, CertificateError> {
        let style: Self = serde_json::from_str(json)
            .map_err(|e| CertificateError::Style(format!("Invalid JSON: {}", e)))?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_json(&self) -> Result<String, CertificateError> {
        serde_json::to_string_pretty(self).map_err(|e| CertificateError::Style(e.to_string()))
    }

    /// Check the bounded fields against the same ranges the CLI accepts.
    pub fn validate(&self) -> Result<(), CertificateError> {
        let checks: [(&str, u32, &RangeInclusive<i64>); 9] = [
            ("title_size", self.title_size, &TITLE_SIZE_RANGE),
            ("awarded_size", self.awarded_size, &AWARDED_SIZE_RANGE),
            ("name_size", self.name_size, &NAME_SIZE_RANGE),
            ("course_phrase_size", self.course_phrase_size, &COURSE_PHRASE_SIZE_RANGE),
            ("course_size", self.course_size, &COURSE_SIZE_RANGE),
            ("course_line_spacing", self.course_line_spacing, &COURSE_LINE_SPACING_RANGE),
            ("border_width", self.border_width, &BORDER_WIDTH_RANGE),
            ("border_distance", self.border_distance, &BORDER_DISTANCE_RANGE),
            ("accent_line_width", self.accent_line_width, &ACCENT_LINE_WIDTH_RANGE),
        ];
        for (field, value, range) in checks {
            if !range.contains(&(value as i64)) {
                return Err(CertificateError::Style(format!(
                    "{} = {} is outside {}..={}",
                    field,
                    value,
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Render Request
// ============================================================================

/// Everything needed to render one certificate.
#[derive(Debug, Clone, Default)]
pub struct CertificateRequest {
    pub participant_name: String,
    pub course_title: String,
    pub date_text: Option<String>,
    /// Tried in order; the first source that decodes is drawn.
    pub logo_sources: Vec<LogoSource>,
    pub style: StyleOptions,
}

impl CertificateRequest {
    pub fn new(participant_name: impl Into<String>, course_title: impl Into<String>) -> Self {
        Self {
            participant_name: participant_name.into(),
            course_title: course_title.into(),
            ..Default::default()
        }
    }

    /// Name as printed: trimmed and uppercased, or the placeholder.
    pub fn display_name(&self) -> String {
        let name = self.participant_name.trim();
        if name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            name.to_uppercase()
        }
    }

    /// Course title as printed: trimmed, or the placeholder.
    pub fn display_course(&self) -> String {
        let course = self.course_title.trim();
        if course.is_empty() {
            COURSE_PLACEHOLDER.to_string()
        } else {
            course.to_string()
        }
    }

    /// The date line, if there is anything to show.
    pub fn display_date(&self) -> Option<&str> {
        self.date_text
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Reject requests missing a participant name or course title.
pub fn validate_required(request: &CertificateRequest) -> Result<(), CertificateError> {
    if request.participant_name.trim().is_empty() {
        return Err(CertificateError::MissingField("participant name"));
    }
    if request.course_title.trim().is_empty() {
        return Err(CertificateError::MissingField("course title"));
    }
    Ok(())
}

/// Download filename for a participant, e.g. `Certificado_Jane_Doe.pdf`.
///
/// Spaces, path separators and characters not allowed in file names become
/// `_`, so the result is always a single path component.
pub fn suggested_filename(participant_name: &str) -> String {
    let stem: String = participant_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("Certificado_{}.pdf", stem)
}
