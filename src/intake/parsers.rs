// ABOUTME: Low-level text-to-value extraction for questionnaire answers
// ABOUTME: Numbers, comma lists, digits, and unit-suffixed value parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit and token parsers
//!
//! Every function is total: malformed text yields `None` or an empty list,
//! never an error.

/// Pounds to kilograms
pub const LB_TO_KG: f64 = 0.453_592;
/// Meters to centimeters
pub const M_TO_CM: f64 = 100.0;
/// Feet to centimeters
pub const FT_TO_CM: f64 = 30.48;
/// Inches to centimeters
pub const IN_TO_CM: f64 = 2.54;

/// Weight unit keywords, in match priority order
pub const WEIGHT_UNITS: &[&str] = &["kg", "lb", "lbs"];
/// Height unit keywords, in match priority order
pub const HEIGHT_UNITS: &[&str] = &["cm", "m", "ft", "in"];
/// Body-fat unit keywords, in match priority order
pub const BODY_FAT_UNITS: &[&str] = &["%", "percent"];

/// First numeric token (contiguous digits/decimal point) in `text`
#[must_use]
pub fn first_number(text: &str) -> Option<f64> {
    text.split(|c: char| !c.is_ascii_digit() && c != '.')
        .filter(|token| !token.is_empty())
        .find_map(|token| token.parse::<f64>().ok())
}

/// Comma-separated tokens, trimmed, with empty tokens dropped
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// All digits in `text` concatenated and parsed ("3 + snacks" -> 3)
#[must_use]
pub fn extract_digits(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// The value immediately preceding the first matching unit keyword
///
/// Keywords are tried in order; the whitespace-delimited token before the
/// keyword is stripped to digits and dots before parsing. A keyword whose
/// preceding token fails to parse falls through to the next keyword.
#[must_use]
pub fn value_before_unit(text: &str, units: &[&'static str]) -> Option<(f64, &'static str)> {
    for &unit in units {
        if let Some(index) = text.find(unit) {
            let token = text[..index].split_whitespace().last().unwrap_or("");
            let cleaned: String = token
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            if let Ok(value) = cleaned.parse::<f64>() {
                return Some((value, unit));
            }
        }
    }
    None
}

/// Convert a weight value to kilograms based on its unit keyword
#[must_use]
pub fn to_kilograms(value: f64, unit: &str) -> f64 {
    if unit.contains("lb") {
        value * LB_TO_KG
    } else {
        value
    }
}

/// Convert a height value to centimeters based on its unit keyword
#[must_use]
pub fn to_centimeters(value: f64, unit: &str) -> f64 {
    match unit {
        "m" => value * M_TO_CM,
        "ft" => value * FT_TO_CM,
        "in" => value * IN_TO_CM,
        _ => value,
    }
}
