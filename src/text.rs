// certificate-pdf: text fitting and wrapping

use crate::metrics::{text_width, FontFace};

/// Largest size in `min_size..=base_size` at which `text` fits in `max_width`.
///
/// Sizes are tried one point at a time from `base_size` downwards. When even
/// `min_size` is too wide, `min_size` is returned and the text is allowed to
/// overflow.
pub fn fit_font_size(text: &str, max_width: f32, base_size: u32, min_size: u32, font: FontFace) -> u32 {
    // Width is linear in size, so nothing above one past the exact bound fits
    let unit_width = text_width(text, font, 1.0);
    let start = if unit_width > 0.0 && max_width >= 0.0 {
        let bound = (max_width / unit_width).ceil();
        if bound < base_size as f32 {
            bound as u32 + 1
        } else {
            base_size
        }
    } else {
        base_size
    };

    (min_size..=start)
        .rev()
        .find(|&size| text_width(text, font, size as f32) <= max_width)
        .unwrap_or(min_size)
}

/// Greedy word wrap.
///
/// Words are packed onto a line while the joined line still measures within
/// `max_width`. A word that is wider than `max_width` on its own gets a line
/// to itself and is not split.
pub fn wrap_text(text: &str, max_width: f32, font: FontFace, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if text_width(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_COURSE: &str = "Programa Avanzado de Seguridad y Salud Ocupacional en Operaciones \
                               Mineras de Gran Escala con Enfoque en Prevencion de Riesgos Criticos";

    #[test]
    fn fit_returns_base_when_text_fits() {
        assert_eq!(fit_font_size("JANE DOE", 500.0, 34, 18, FontFace::Bold), 34);
    }

    #[test]
    fn fit_shrinks_until_text_fits() {
        let text = "MARIA FERNANDA DE LOS ANGELES GONZALEZ";
        let size = fit_font_size(text, 400.0, 34, 10, FontFace::Bold);
        assert!(size < 34);
        assert!(text_width(text, FontFace::Bold, size as f32) <= 400.0);
        assert!(text_width(text, FontFace::Bold, (size + 1) as f32) > 400.0);
    }

    #[test]
    fn fit_clamps_to_minimum() {
        let text = "X".repeat(500);
        assert_eq!(fit_font_size(&text, 100.0, 34, 18, FontFace::Bold), 18);
    }

    #[test]
    fn fit_from_huge_base_size_is_immediate() {
        let size = fit_font_size("JANE DOE", 691.0, u32::MAX, 18, FontFace::Bold);
        assert!(text_width("JANE DOE", FontFace::Bold, size as f32) <= 691.0);
        assert!(text_width("JANE DOE", FontFace::Bold, (size + 1) as f32) > 691.0);
    }

    #[test]
    fn fit_with_inverted_bounds_returns_minimum() {
        assert_eq!(fit_font_size("A", 1000.0, 10, 18, FontFace::Bold), 18);
    }

    #[test]
    fn fit_is_bounded_and_non_increasing_as_text_grows() {
        let mut previous = u32::MAX;
        let mut text = String::new();
        for _ in 0..60 {
            text.push_str("AB ");
            let size = fit_font_size(&text, 300.0, 34, 18, FontFace::Bold);
            assert!((18..=34).contains(&size));
            assert!(size <= previous);
            previous = size;
        }
    }

    #[test]
    fn wrap_empty_input_yields_no_lines() {
        assert!(wrap_text("", 100.0, FontFace::Bold, 22.0).is_empty());
        assert!(wrap_text("   \t\n ", 100.0, FontFace::Bold, 22.0).is_empty());
    }

    #[test]
    fn wrap_short_text_is_single_line() {
        let lines = wrap_text("  Advanced   Systems Design ", 691.0, FontFace::Bold, 22.0);
        assert_eq!(lines, vec!["Advanced Systems Design".to_string()]);
    }

    #[test]
    fn wrap_long_text_produces_fitting_lines() {
        let max_width = 400.0;
        let lines = wrap_text(LONG_COURSE, max_width, FontFace::Bold, 22.0);
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(text_width(line, FontFace::Bold, 22.0) <= max_width, "{line} overflows");
        }
    }

    #[test]
    fn wrap_preserves_words_in_order() {
        let lines = wrap_text(LONG_COURSE, 250.0, FontFace::Regular, 16.0);
        let rejoined = lines.join(" ");
        let original: Vec<&str> = LONG_COURSE.split_whitespace().collect();
        assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), original);
    }

    #[test]
    fn wrap_places_oversized_word_alone() {
        let lines = wrap_text(
            "Intro Otorrinolaringologia avanzada",
            120.0,
            FontFace::Bold,
            22.0,
        );
        assert_eq!(lines, vec!["Intro", "Otorrinolaringologia", "avanzada"]);
        assert!(text_width(&lines[1], FontFace::Bold, 22.0) > 120.0);
    }
}
