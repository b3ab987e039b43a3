//! Validação de qualidade de entrada antes de chamadas de geração por IA.
//!
//! Heurísticas conservadoras que rejeitam texto livre curto, degenerado ou
//! sintético (placeholder, teclado digitado ao acaso) antes de gastar uma
//! chamada cara ao gateway de IA. Falsos negativos são aceitáveis; falsos
//! positivos em entradas curtas legítimas são mitigados pela ordem dos
//! checks — o de comprimento dispara antes do de diversidade, produzindo um
//! erro mais específico.

use serde::Serialize;

/// Substrings that indicate keyboard mashing rather than real input.
const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdf", "zxcv", "1234", "abcd"];

/// Outcome of a validation check: either valid, or invalid with a
/// human-readable message for the UI. Constructed and consumed within a
/// single call — no identity, no lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// Trims and collapses internal whitespace runs to single spaces.
///
/// Idempotent: `sanitize_input(sanitize_input(x)) == sanitize_input(x)`.
pub fn sanitize_input(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validates a free-text business description before an AI generation call.
///
/// Checks run in order and the first failure wins:
/// 1. empty after normalization
/// 2. shorter than `min_length`
/// 3. any character repeated 5+ times in a row
/// 4. any 1-2 character pattern repeated 4+ times in a row (whitespace
///    stripped)
/// 5. fewer than 5 distinct characters (case-insensitive, whitespace
///    stripped)
/// 6. fewer than 2 words longer than one character
/// 7. a known keyboard-mashing substring (case-insensitive)
pub fn validate_business_input(text: &str, field_name: &str, min_length: usize) -> ValidationResult {
    let sanitized = sanitize_input(text);

    if sanitized.is_empty() {
        return ValidationResult::fail(format!("{field_name} is required."));
    }

    if sanitized.chars().count() < min_length {
        return ValidationResult::fail(format!(
            "{field_name} must have at least {min_length} characters."
        ));
    }

    if has_char_run(&sanitized, 5) {
        return ValidationResult::fail(garbage_message(field_name));
    }

    let stripped: Vec<char> = sanitized.chars().filter(|c| !c.is_whitespace()).collect();
    if has_repeated_pattern(&stripped, 2, 4) {
        return ValidationResult::fail(garbage_message(field_name));
    }

    let mut distinct: Vec<char> = stripped
        .iter()
        .flat_map(|c| c.to_lowercase())
        .collect();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 5 {
        return ValidationResult::fail(format!(
            "{field_name} needs more information diversity."
        ));
    }

    let real_words = sanitized
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .count();
    if real_words < 2 {
        return ValidationResult::fail(format!(
            "{field_name} must contain at least two words."
        ));
    }

    let lower = sanitized.to_lowercase();
    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return ValidationResult::fail(garbage_message(field_name));
    }

    ValidationResult::ok()
}

/// Validates a short field such as a name.
///
/// Same normalize/empty/length checks as [`validate_business_input`] but
/// with a looser repeated-character threshold (4+ in a row) and none of the
/// diversity, word-count or keyboard checks.
pub fn validate_short_input(text: &str, field_name: &str, min_length: usize) -> ValidationResult {
    let sanitized = sanitize_input(text);

    if sanitized.is_empty() {
        return ValidationResult::fail(format!("{field_name} is required."));
    }

    if sanitized.chars().count() < min_length {
        return ValidationResult::fail(format!(
            "{field_name} must have at least {min_length} characters."
        ));
    }

    if has_char_run(&sanitized, 4) {
        return ValidationResult::fail(garbage_message(field_name));
    }

    ValidationResult::ok()
}

fn garbage_message(field_name: &str) -> String {
    format!("Fill in {field_name} with real business information.")
}

/// True if any character appears `min_run` or more times consecutively.
fn has_char_run(text: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

/// True if any pattern of up to `max_pattern_len` chars repeats
/// `min_repeats` or more times back to back.
fn has_repeated_pattern(chars: &[char], max_pattern_len: usize, min_repeats: usize) -> bool {
    for pat_len in 1..=max_pattern_len {
        let window = pat_len * min_repeats;
        if chars.len() < window {
            continue;
        }
        for start in 0..=chars.len() - window {
            let pattern = &chars[start..start + pat_len];
            let repeats = (1..min_repeats).all(|r| {
                chars[start + r * pat_len..start + (r + 1) * pat_len] == *pattern
            });
            if repeats {
                return true;
            }
        }
    }
    false
}
