// certificate-pdf: Generate course completion certificates

use certificate_pdf::config::{
    ACCENT_LINE_WIDTH_RANGE, AWARDED_SIZE_RANGE, BORDER_DISTANCE_RANGE, BORDER_WIDTH_RANGE,
    COURSE_LINE_SPACING_RANGE, COURSE_PHRASE_SIZE_RANGE, COURSE_SIZE_RANGE, DEFAULT_LOGO_PATH,
    NAME_SIZE_RANGE, TITLE_SIZE_RANGE,
};
use certificate_pdf::{
    generate_certificate, suggested_filename, validate_required, CertificateError,
    CertificateRequest, Color, LogoSource, StyleOptions,
};
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a single-page course completion certificate")]
struct Args {
    /// Participant name
    #[arg(short, long)]
    name: String,

    /// Course title
    #[arg(short, long)]
    course: String,

    /// Date text shown in the footer
    #[arg(short, long, conflicts_with = "today")]
    date: Option<String>,

    /// Use today's date (DD-MM-YYYY) in the footer
    #[arg(long)]
    today: bool,

    /// Output filename (defaults to Certificado_<name>.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logo image (file path or URL)
    #[arg(long)]
    logo: Option<String>,

    /// Logo used when --logo is missing or unreadable
    #[arg(long, default_value = DEFAULT_LOGO_PATH)]
    default_logo: PathBuf,

    /// Do not fall back to the default logo
    #[arg(long)]
    no_default_logo: bool,

    /// Style preset (JSON); individual flags below override it
    #[arg(long)]
    style: Option<PathBuf>,

    #[command(flatten)]
    overrides: StyleArgs,
}

/// Per-field style overrides. Unset flags keep the preset/default value.
#[derive(clap::Args, Debug)]
struct StyleArgs {
    /// Primary color (hex)
    #[arg(long)]
    primary_color: Option<Color>,
    /// Secondary color (hex)
    #[arg(long)]
    secondary_color: Option<Color>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(TITLE_SIZE_RANGE))]
    title_size: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(AWARDED_SIZE_RANGE))]
    awarded_size: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(NAME_SIZE_RANGE))]
    name_size: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(COURSE_PHRASE_SIZE_RANGE))]
    course_phrase_size: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(COURSE_SIZE_RANGE))]
    course_size: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    title_y: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    awarded_y: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    name_y: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    course_phrase_y: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    course_y: Option<i32>,
    /// Distance between wrapped course title lines (pt)
    #[arg(long, value_parser = clap::value_parser!(u32).range(COURSE_LINE_SPACING_RANGE))]
    course_line_spacing: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    logo_x: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    logo_y: Option<i32>,
    #[arg(long)]
    logo_max_width: Option<u32>,
    #[arg(long)]
    logo_max_height: Option<u32>,

    /// Draw the double border
    #[arg(long, conflicts_with = "no_border")]
    border: bool,
    /// Hide the double border
    #[arg(long)]
    no_border: bool,
    #[arg(long, value_parser = clap::value_parser!(u32).range(BORDER_WIDTH_RANGE))]
    border_width: Option<u32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(BORDER_DISTANCE_RANGE))]
    border_distance: Option<u32>,

    /// Draw accent lines under the title and above the footer
    #[arg(long, conflicts_with = "no_accent_lines")]
    accent_lines: bool,
    /// Hide the accent lines
    #[arg(long)]
    no_accent_lines: bool,
    #[arg(long, value_parser = clap::value_parser!(u32).range(ACCENT_LINE_WIDTH_RANGE))]
    accent_line_width: Option<u32>,

    /// Overlay margin and center guides
    #[arg(long, conflicts_with = "no_guides")]
    guides: bool,
    /// Hide the guides
    #[arg(long)]
    no_guides: bool,

    /// Main title text
    #[arg(long)]
    title_text: Option<String>,
    /// "Awarded to" phrase
    #[arg(long)]
    awarded_text: Option<String>,
    /// Phrase introducing the course title
    #[arg(long)]
    course_text: Option<String>,
}

impl StyleArgs {
    fn apply(self, style: &mut StyleOptions) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut style.primary_color, self.primary_color);
        set(&mut style.secondary_color, self.secondary_color);
        set(&mut style.title_size, self.title_size);
        set(&mut style.awarded_size, self.awarded_size);
        set(&mut style.name_size, self.name_size);
        set(&mut style.course_phrase_size, self.course_phrase_size);
        set(&mut style.course_size, self.course_size);
        set(&mut style.title_y, self.title_y);
        set(&mut style.awarded_y, self.awarded_y);
        set(&mut style.name_y, self.name_y);
        set(&mut style.course_phrase_y, self.course_phrase_y);
        set(&mut style.course_y, self.course_y);
        set(&mut style.course_line_spacing, self.course_line_spacing);
        set(&mut style.logo_x, self.logo_x);
        set(&mut style.logo_y, self.logo_y);
        set(&mut style.logo_max_width, self.logo_max_width);
        set(&mut style.logo_max_height, self.logo_max_height);
        set(&mut style.border_width, self.border_width);
        set(&mut style.border_distance, self.border_distance);
        set(&mut style.accent_line_width, self.accent_line_width);
        set(&mut style.title_text, self.title_text);
        set(&mut style.awarded_text, self.awarded_text);
        set(&mut style.course_text, self.course_text);

        if self.border {
            style.show_border = true;
        }
        if self.no_border {
            style.show_border = false;
        }
        if self.accent_lines {
            style.show_accent_lines = true;
        }
        if self.no_accent_lines {
            style.show_accent_lines = false;
        }
        if self.guides {
            style.show_guides = true;
        }
        if self.no_guides {
            style.show_guides = false;
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CertificateError> {
    let args = Args::parse();

    let mut style = match &args.style {
        Some(path) => StyleOptions::from_json_file(path)?,
        None => StyleOptions::default(),
    };
    args.overrides.apply(&mut style);
    style.validate()?;

    let date_text = if args.today {
        Some(Local::now().format("%d-%m-%Y").to_string())
    } else {
        args.date
    };

    let mut logo_sources = Vec::new();
    if let Some(location) = &args.logo {
        logo_sources.push(LogoSource::from_location(location));
    }
    if !args.no_default_logo {
        logo_sources.push(LogoSource::File(args.default_logo));
    }

    let request = CertificateRequest {
        participant_name: args.name,
        course_title: args.course,
        date_text,
        logo_sources,
        style,
    };

    validate_required(&request)?;

    let output_file = args
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_filename(request.participant_name.trim())));

    let certificate = generate_certificate(&request)?;
    write_output(&output_file, &certificate.pdf)?;

    let report = &certificate.report;
    println!("✓ Generated: {}", output_file.display());
    println!("  Participant: {} ({}pt)", report.name, report.name_size);
    println!("  Course: {}", report.course_lines.join(" / "));
    if let Some(date) = &report.date {
        println!("  Date: {}", date);
    }
    match &report.logo {
        Some(logo) => println!("  Logo: {:.0}x{:.0}pt at ({}, {})", logo.width, logo.height, logo.x, logo.y),
        None => println!("  Logo: none"),
    }

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), CertificateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
