use std::collections::HashSet;

use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercase, strip accents (NFKD, combining marks dropped), map punctuation to
/// spaces and collapse runs of whitespace.
pub fn normalize_text(input: &str) -> String {
	let mut out = String::with_capacity(input.len());

	for ch in input.nfkd() {
		if is_combining_mark(ch) {
			continue;
		}
		if ch.is_alphanumeric() {
			for lower in ch.to_lowercase() {
				out.push(lower);
			}
		} else {
			out.push(' ');
		}
	}

	out.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn normalize_email(input: &str) -> String {
	input.trim().to_lowercase()
}

pub fn token_set(text: &str) -> HashSet<String> {
	let mut out = HashSet::new();

	for token in normalize_text(text).split_whitespace() {
		if token.len() < 2 {
			continue;
		}

		out.insert(token.to_string());
	}

	out
}

/// Dice coefficient over the two token sets. 1.0 for identical sets, 0.0 when
/// either side has no usable tokens.
pub fn token_set_overlap(a: &str, b: &str) -> f32 {
	let tokens_a = token_set(a);
	let tokens_b = token_set(b);

	if tokens_a.is_empty() || tokens_b.is_empty() {
		return 0.0;
	}

	let shared = tokens_a.intersection(&tokens_b).count();

	(2 * shared) as f32 / (tokens_a.len() + tokens_b.len()) as f32
}

/// Similarity between two person/company names after normalization. The better
/// of Jaro-Winkler and token-set overlap, so word reordering and small typos
/// both stay above the fuzzy threshold.
pub fn name_similarity(a: &str, b: &str) -> f32 {
	let normalized_a = normalize_text(a);
	let normalized_b = normalize_text(b);

	if normalized_a.is_empty() || normalized_b.is_empty() {
		return 0.0;
	}

	let edit = strsim::jaro_winkler(&normalized_a, &normalized_b) as f32;
	let overlap = token_set_overlap(a, b);

	edit.max(overlap)
}

/// Digits of a CPV code, with the check digit and separators dropped from the
/// comparison form, e.g. "71355000-1" -> "71355000".
pub fn cpv_digits(code: &str) -> String {
	let digits: String = code.chars().filter(char::is_ascii_digit).collect();

	match digits.len() {
		// Full CPV codes carry a trailing check digit.
		9 => digits[..8].to_string(),
		_ => digits,
	}
}

pub fn is_valid_cpv(code: &str) -> bool {
	Regex::new(r"^\d{8}(-\d)?$").map(|re| re.is_match(code.trim())).unwrap_or(false)
}
