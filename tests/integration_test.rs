use std::fs;
use std::path::Path;
use std::process::Command;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_certificate-pdf"))
}

fn output_dir() -> &'static Path {
    Path::new("tests/output")
}

fn setup() {
    fs::create_dir_all(output_dir()).expect("Failed to create output directory");
}

fn cleanup_file(name: &str) {
    let path = output_dir().join(name);
    if path.exists() {
        fs::remove_file(&path).ok();
    }
}

fn assert_pdf(path: &Path) {
    assert!(path.exists(), "PDF file was not created");
    let bytes = fs::read(path).expect("Failed to read PDF");
    assert!(bytes.len() > 1000, "PDF file is too small, likely empty or corrupt");
    assert_eq!(&bytes[0..5], b"%PDF-", "Missing PDF header");
}

#[test]
fn test_basic_certificate() {
    setup();
    let output_file = "test-basic.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Advanced Systems Design",
            "--no-default-logo",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("JANE DOE"), "Unexpected output: {}", stdout);

    assert_pdf(&output_dir().join(output_file));
}

#[test]
fn test_default_filename_from_name() {
    let dir = output_dir().join("default-name");
    fs::create_dir_all(&dir).expect("Failed to create output directory");
    let expected = dir.join("Certificado_Ana_Maria_Rojas.pdf");
    if expected.exists() {
        fs::remove_file(&expected).ok();
    }

    let output = Command::new(env!("CARGO_BIN_EXE_certificate-pdf"))
        .current_dir(&dir)
        .args(["-n", "Ana Maria Rojas", "-c", "Primeros Auxilios"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(&expected);
}

#[test]
fn test_missing_name_is_rejected() {
    let output_file = "should-not-exist-name.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "",
            "-c", "Intro",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for empty name");
    assert!(!output_dir().join(output_file).exists());
}

#[test]
fn test_missing_course_is_rejected() {
    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "   ",
            "-o", "tests/output/should-not-exist-course.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for blank course");
}

#[test]
fn test_decorations_and_date() {
    setup();
    let output_file = "test-decorated.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Programa Avanzado de Seguridad y Salud Ocupacional en Operaciones Mineras de Gran Escala",
            "-d", "18-10-2026",
            "--accent-lines",
            "--guides",
            "--border-width", "4",
            "--primary-color", "#003366",
            "--title-text", "CERTIFICADO",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(&output_dir().join(output_file));
}

#[test]
fn test_today_date() {
    setup();
    let output_file = "test-today.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--today",
            "--no-default-logo",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Date:"), "Unexpected output: {}", stdout);
    assert_pdf(&output_dir().join(output_file));
}

#[test]
fn test_style_preset() {
    setup();
    let preset = output_dir().join("preset.json");
    fs::write(
        &preset,
        r##"{ "primary_color": "#1F4E79", "show_border": false, "name_size": 40 }"##,
    )
    .expect("Failed to write preset");
    let output_file = "test-preset.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--style", "tests/output/preset.json",
            "--border",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("40pt"), "Unexpected output: {}", stdout);
    assert_pdf(&output_dir().join(output_file));
}

#[test]
fn test_unreadable_logo_still_renders() {
    setup();
    let output_file = "test-bad-logo.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--logo", "nonexistent-logo.png",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Logo: none"), "Unexpected output: {}", stdout);
    assert_pdf(&output_dir().join(output_file));
}

#[test]
fn test_invalid_style_preset() {
    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--style", "nonexistent.json",
            "-o", "tests/output/should-not-exist-style.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing preset");
}

#[test]
fn test_invalid_color() {
    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--primary-color", "orange",
            "-o", "tests/output/should-not-exist-color.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for invalid color");
}

#[test]
fn test_out_of_range_font_size() {
    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--title-size", "80",
            "-o", "tests/output/should-not-exist-size.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for out-of-range size");
}

#[test]
fn test_name_with_path_separator() {
    let dir = output_dir().join("slash-name");
    fs::create_dir_all(&dir).expect("Failed to create output directory");
    let expected = dir.join("Certificado_Ana_Rojas.pdf");
    if expected.exists() {
        fs::remove_file(&expected).ok();
    }

    let output = cargo_bin()
        .current_dir(&dir)
        .args(["-n", "Ana/Rojas", "-c", "Intro", "--no-default-logo"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(&expected);
    assert!(!dir.join("Certificado_Ana").exists(), "Name was treated as a directory");
}

#[test]
fn test_out_of_range_preset_is_rejected() {
    setup();
    let preset = output_dir().join("oversized-preset.json");
    fs::write(&preset, r#"{"name_size": 10000000}"#).expect("Failed to write preset");

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--style", preset.to_str().unwrap(),
            "--no-default-logo",
            "-o", "tests/output/should-not-exist-preset-range.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for out-of-range preset");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("name_size"), "Unexpected error: {}", stderr);
}

#[test]
fn test_turning_off_preset_decorations() {
    setup();
    let preset = output_dir().join("decorated-preset.json");
    fs::write(&preset, r#"{"show_accent_lines": true, "show_guides": true}"#)
        .expect("Failed to write preset");
    let output_file = "test-no-decorations.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-n", "Jane Doe",
            "-c", "Intro",
            "--style", preset.to_str().unwrap(),
            "--no-accent-lines",
            "--no-guides",
            "--no-default-logo",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(&output_dir().join(output_file));
}
