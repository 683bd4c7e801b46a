use std::sync::LazyLock;

use regex::Regex;

/// Any whitespace-free run containing an `http:` or `https:` scheme.
static URL_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\S*https?:\S*").expect("URL pattern is valid"));

/// Maximal runs of ASCII word characters.
static TOKEN_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("token pattern is valid"));

/// Removes every URL-like substring from a raw text.
///
/// Applied once when a text enters an `Author`, never inside `tokenize`.
/// The whitespace around a removed URL is left untouched.
pub fn strip_urls(text: &str) -> String {
	URL_RE.replace_all(text, "").into_owned()
}

/// Splits a text into word tokens.
///
/// Tokens keep their original case; every character outside
/// `[A-Za-z0-9_]` acts as a separator and is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
	TOKEN_RE
		.find_iter(text)
		.map(|m| m.as_str().to_owned())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokenize_drops_punctuation_and_keeps_case() {
		assert_eq!(tokenize("Hello, World! it's 2024_v2"), vec!["Hello", "World", "it", "s", "2024_v2"]);
	}

	#[test]
	fn tokenize_empty_input() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  ... !!! ").is_empty());
	}

	#[test]
	fn strip_urls_removes_whole_run() {
		assert_eq!(strip_urls("look https://t.co/abc now"), "look  now");
		assert_eq!(strip_urls("see:http://x.y/z"), "");
		assert_eq!(strip_urls("no links here"), "no links here");
	}

	#[test]
	fn non_ascii_letters_are_separators() {
		assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
	}
}
