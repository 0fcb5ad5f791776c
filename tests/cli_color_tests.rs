//! End-to-end tests for `fieldkit color` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Convert Command Tests
// ============================================================================

#[test]
fn test_color_convert_rgb() {
    let output = run_isolated(&["color", "convert", "#ff0000", "--format", "rgb"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_line(&output), "rgb(255, 0, 0)");
}

#[test]
fn test_color_convert_hsl() {
    let output = run_isolated(&["color", "convert", "#ff0000", "--format", "hsl"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_line(&output), "hsl(0, 100%, 50%)");
}

#[test]
fn test_color_convert_rgb_with_alpha() {
    let output = run_isolated(&["color", "convert", "#ff0000", "--format", "rgb", "--alpha", "0.5"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_line(&output), "rgba(255, 0, 0, 0.5)");
}

#[test]
fn test_color_convert_hex_ignores_alpha() {
    let output = run_isolated(&["color", "convert", "#123abc", "--alpha", "0.3"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_line(&output), "#123abc");
}

#[test]
fn test_color_convert_short_hex_expanded() {
    let output = run_isolated(&["color", "convert", "#fff", "--format", "rgb"]);
    assert_exit(&output, 0);
    assert_eq!(stdout_line(&output), "rgb(255, 255, 255)");
}

#[test]
fn test_color_convert_invalid_hex() {
    let output = run_isolated(&["color", "convert", "not-a-color", "--format", "rgb"]);
    assert_exit(&output, 1);
}

#[test]
fn test_color_convert_invalid_format() {
    let output = run_isolated(&["color", "convert", "#ff0000", "--format", "cmyk"]);
    assert_exit(&output, 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cmyk"), "stderr: {stderr}");
}

#[test]
fn test_color_convert_alpha_out_of_range() {
    let output = run_isolated(&["color", "convert", "#ff0000", "--format", "rgb", "--alpha", "1.5"]);
    assert_exit(&output, 1);

    let output = run_isolated(&["color", "convert", "#ff0000", "--alpha", "-0.5"]);
    assert_exit(&output, 1);
}

#[test]
fn test_color_convert_json() {
    let output = run_isolated(&["color", "convert", "#2196f3", "--format", "hsl", "--json"]);
    assert_exit(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["input"], "#2196f3");
    assert_eq!(result["format"], "hsl");
    assert_eq!(result["value"], "hsl(207, 90%, 54%)");
    assert!(result.get("alpha").is_none());
}

#[test]
fn test_color_convert_uses_configured_format_and_alpha() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "[color]\nformat = \"rgb\"\nshow_alpha = true\n");

    let output = run_with_config(&["color", "convert", "#000000"], temp_dir.path());
    assert_exit(&output, 0);
    assert_eq!(stdout_line(&output), "rgba(0, 0, 0, 1)");
}

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_color_validate() {
    assert_exit(&run_isolated(&["color", "validate", "#ff0000"]), 0);
    assert_exit(&run_isolated(&["color", "validate", "#fff"]), 0);
    assert_exit(&run_isolated(&["color", "validate", "ff0000"]), 1);
    assert_exit(&run_isolated(&["color", "validate", "#ggg000"]), 1);
    assert_exit(&run_isolated(&["color", "validate", "#ffff"]), 1);
}

#[test]
fn test_color_validate_shows_expanded_form() {
    let output = run_isolated(&["color", "validate", "#abc"]);
    assert_exit(&output, 0);
    assert!(stdout_line(&output).contains("#aabbcc"));
}

// ============================================================================
// Presets Command Tests
// ============================================================================

#[test]
fn test_color_presets_builtin_groups() {
    let output = run_isolated(&["color", "presets", "--json"]);
    assert_exit(&output, 0);

    let groups = stdout_json(&output);
    let groups = groups.as_array().expect("Should be an array of groups");
    let names: Vec<&str> = groups.iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Primary", "Secondary", "Neutral"]);

    let total: usize = groups
        .iter()
        .map(|g| g["presets"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 20);
    assert_eq!(groups[0]["presets"][0]["label"], "Red");
    assert_eq!(groups[0]["presets"][0]["value"], "#f44336");
}

#[test]
fn test_color_presets_from_config_use_fallback_group() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        r##"
[[color.presets]]
label = "Brand"
value = "#0a7cff"

[[color.presets]]
label = "Accent"
value = "#f0f"
group = "Extras"
"##,
    );

    let output = run_with_config(&["color", "presets"], temp_dir.path());
    assert_exit(&output, 0);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Colors (1):"), "stdout: {stdout}");
    assert!(stdout.contains("Extras (1):"), "stdout: {stdout}");
    assert!(stdout.contains("#0a7cff"));
}
