// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query tokenization and n-gram candidate generation.
//!
//! A query line becomes lookup candidates in three steps:
//! 1. [`Tokenizer::tokenize`] splits it into words and punctuation.
//! 2. [`expand_delimiters`] appends the fragments of every token that
//!    contains a delimiter (`MCF-7` adds `MCF` and `7`).
//! 3. [`for_each_ngram`] joins every contiguous window, longest first.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that split tokens into additional fragments.
pub const DEFAULT_DELIMITERS: &str = "-_+/";

/// Splits a chunk into leading punctuation, core word, trailing punctuation.
#[allow(clippy::expect_used)]
static CHUNK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?s)(?P<lead>[(\[{<"']*)(?P<core>.*?)(?P<trail>[)\]}>"',;:!?]*)$"#)
        .expect("valid regex")
});

/// Splits text into word tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Treebank-style word tokenizer.
///
/// Splits on whitespace, then separates opening brackets and quotes at the
/// front of a word and closing brackets, quotes and `,;:!?` at its end. A
/// period is split off only at the end of the line. Hyphens, slashes and
/// other intra-word punctuation stay inside the token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let chunks: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = Vec::with_capacity(chunks.len());

        for (i, chunk) in chunks.iter().enumerate() {
            let is_last = i + 1 == chunks.len();
            match chunk.strip_suffix('.') {
                Some(rest) if is_last => {
                    split_chunk(rest, &mut tokens);
                    tokens.push(".".to_string());
                }
                _ => split_chunk(chunk, &mut tokens),
            }
        }

        tokens
    }
}

fn split_chunk(chunk: &str, tokens: &mut Vec<String>) {
    if chunk.is_empty() {
        return;
    }
    let Some(caps) = CHUNK.captures(chunk) else {
        tokens.push(chunk.to_string());
        return;
    };

    tokens.extend(caps["lead"].chars().map(String::from));
    if !caps["core"].is_empty() {
        tokens.push(caps["core"].to_string());
    }
    tokens.extend(caps["trail"].chars().map(String::from));
}

/// Append the delimiter-split fragments of each token after all tokens.
///
/// Tokens without a delimiter contribute nothing extra; empty fragments are
/// dropped.
pub fn expand_delimiters(mut tokens: Vec<String>, delimiters: &[char]) -> Vec<String> {
    if delimiters.is_empty() {
        return tokens;
    }

    let fragments: Vec<String> = tokens
        .iter()
        .filter(|t| t.contains(delimiters))
        .flat_map(|t| t.split(delimiters))
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    tokens.extend(fragments);
    tokens
}

/// Visit every contiguous n-gram of at most `max_len` tokens, longest first,
/// left to right.
///
/// Windows are joined with single spaces into one reused buffer, so memory
/// stays linear in the line length. Repeated n-grams are visited again.
pub fn for_each_ngram(tokens: &[String], max_len: usize, mut visit: impl FnMut(&str)) {
    let mut gram = String::new();

    for len in (1..=max_len.min(tokens.len())).rev() {
        for window in tokens.windows(len) {
            gram.clear();
            for (i, token) in window.iter().enumerate() {
                if i > 0 {
                    gram.push(' ');
                }
                gram.push_str(token);
            }
            visit(&gram);
        }
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
