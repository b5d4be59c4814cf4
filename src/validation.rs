//! Prompt and brand-color checks that gate a generation request.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::models::{GenerationRequest, StylePreset};

pub const MIN_PROMPT_CHARS: usize = 3;
pub const MAX_PROMPT_CHARS: usize = 200;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Prompt is required")]
    Required,
    #[error("Prompt cannot be empty")]
    EmptyPrompt,
    #[error("Prompt must be at least 3 characters")]
    TooShort,
    #[error("Prompt must be less than 200 characters")]
    TooLong,
    #[error("Invalid HEX colors: {}. Use format #RRGGBB", .0.join(", "))]
    InvalidHex(Vec<String>),
}

pub fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    let trimmed = prompt.trim();
    let chars = trimmed.chars().count();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPrompt);
    }
    if chars < MIN_PROMPT_CHARS {
        return Err(ValidationError::TooShort);
    }
    if chars > MAX_PROMPT_CHARS {
        return Err(ValidationError::TooLong);
    }
    Ok(())
}

/// Validates an untyped form value. Anything other than a JSON string is
/// rejected as [`ValidationError::Required`].
pub fn validate_prompt_value(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(prompt) => validate_prompt(prompt),
        _ => Err(ValidationError::Required),
    }
}

/// Trims, collapses every whitespace run to one space and caps the result at
/// [`MAX_PROMPT_CHARS`] characters.
pub fn sanitize_prompt(prompt: &str) -> String {
    let collapsed = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_PROMPT_CHARS).collect();
    // Truncation can land right after a collapsed space.
    truncated.trim_end().to_string()
}

pub fn sanitize_prompt_value(value: &Value) -> String {
    match value {
        Value::String(prompt) => sanitize_prompt(prompt),
        _ => String::new(),
    }
}

/// An empty string counts as "unset" and is accepted.
pub fn validate_hex_color(color: &str) -> bool {
    color.is_empty() || HEX_COLOR.is_match(color)
}

fn is_blank(color: &str) -> bool {
    color.trim().is_empty()
}

pub fn validate_colors<S: AsRef<str>>(colors: &[S]) -> Result<(), ValidationError> {
    let invalid: Vec<String> = colors
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !is_blank(c))
        .filter(|c| !validate_hex_color(c))
        .map(str::to_string)
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidHex(invalid))
    }
}

/// Non-blank colors in their original order.
pub fn forwarded_colors<S: AsRef<str>>(colors: &[S]) -> Vec<String> {
    colors
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !is_blank(c))
        .map(str::to_string)
        .collect()
}

/// Builds the request only when both the prompt and the colors pass. The
/// prompt is sanitized after validation and blank color slots are dropped.
pub fn prepare_request<S: AsRef<str>>(
    prompt: &str,
    style: StylePreset,
    colors: &[S],
) -> Result<GenerationRequest, ValidationError> {
    validate_prompt(prompt)?;
    validate_colors(colors)?;

    Ok(GenerationRequest {
        prompt: sanitize_prompt(prompt),
        style,
        colors: forwarded_colors(colors),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_validation_table() {
        assert_eq!(validate_prompt(""), Err(ValidationError::EmptyPrompt));
        assert_eq!(validate_prompt("   \t "), Err(ValidationError::EmptyPrompt));
        assert_eq!(validate_prompt("ab"), Err(ValidationError::TooShort));
        assert_eq!(validate_prompt("  ab  "), Err(ValidationError::TooShort));
        assert_eq!(validate_prompt("abc"), Ok(()));
        assert_eq!(validate_prompt(&"a".repeat(200)), Ok(()));
        assert_eq!(validate_prompt(&"a".repeat(201)), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_prompt_length_counts_characters() {
        // 200 two-byte characters are still 200 characters.
        assert_eq!(validate_prompt(&"é".repeat(200)), Ok(()));
        assert_eq!(validate_prompt("日本語"), Ok(()));
    }

    #[test]
    fn test_untyped_prompt_must_be_a_string() {
        assert_eq!(validate_prompt_value(&json!(null)), Err(ValidationError::Required));
        assert_eq!(validate_prompt_value(&json!(42)), Err(ValidationError::Required));
        assert_eq!(validate_prompt_value(&json!("weather icons")), Ok(()));
        assert_eq!(sanitize_prompt_value(&json!(["a"])), "");
        assert_eq!(sanitize_prompt_value(&json!("  a   b ")), "a b");
    }

    #[test]
    fn test_sanitize_prompt() {
        assert_eq!(sanitize_prompt("  Office \n\t supplies  "), "Office supplies");
        assert_eq!(sanitize_prompt(""), "");

        let long = format!("{} tail", "x".repeat(250));
        assert_eq!(sanitize_prompt(&long).chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn test_sanitize_prompt_bounds_hold_for_awkward_inputs() {
        let inputs = [
            format!("{} {}", "a".repeat(199), "b".repeat(10)),
            format!("   {}   ", "word  ".repeat(60)),
            "\u{3000}wide\u{3000}\u{3000}space\u{3000}".to_string(),
            " \n ".to_string(),
        ];

        for input in inputs.iter() {
            let sanitized = sanitize_prompt(input);
            assert!(sanitized.chars().count() <= MAX_PROMPT_CHARS);
            assert_eq!(sanitized, sanitized.trim());
            let chars: Vec<char> = sanitized.chars().collect();
            assert!(
                !chars.windows(2).any(|w| w[0].is_whitespace() && w[1].is_whitespace()),
                "whitespace run left in {:?}",
                sanitized
            );
        }
    }

    #[test]
    fn test_hex_color() {
        assert!(validate_hex_color(""));
        assert!(validate_hex_color("#FF5733"));
        assert!(validate_hex_color("#ff5733"));
        assert!(!validate_hex_color("FF5733"));
        assert!(!validate_hex_color("#GG5733"));
        assert!(!validate_hex_color("#FFF"));
        assert!(!validate_hex_color("#FF57331"));
    }

    #[test]
    fn test_colors_blank_entries_are_dropped() {
        let colors = ["", "#FF5733", "  "];
        assert_eq!(validate_colors(&colors), Ok(()));
        assert_eq!(forwarded_colors(&colors), vec!["#FF5733".to_string()]);

        let empty: [&str; 0] = [];
        assert_eq!(validate_colors(&empty), Ok(()));
    }

    #[test]
    fn test_colors_error_names_every_offender() {
        let err = validate_colors(&["notacolor", "#00FF00", "#12"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidHex(vec!["notacolor".into(), "#12".into()])
        );
        assert_eq!(
            err.to_string(),
            "Invalid HEX colors: notacolor, #12. Use format #RRGGBB"
        );
    }

    #[test]
    fn test_prepare_request_gates_and_normalizes() {
        let request =
            prepare_request("  hockey   gear ", StylePreset::Outline, &["", "#FF5733", ""])
                .unwrap();
        assert_eq!(request.prompt, "hockey gear");
        assert_eq!(request.style, StylePreset::Outline);
        assert_eq!(request.colors, vec!["#FF5733".to_string()]);

        assert_eq!(
            prepare_request("ab", StylePreset::Auto, &["#FF5733"]),
            Err(ValidationError::TooShort)
        );
        assert!(matches!(
            prepare_request("hockey gear", StylePreset::Auto, &["red"]),
            Err(ValidationError::InvalidHex(_))
        ));
    }
}
