//! Cleanup of text extracted from PDF files
//!
//! PDF text comes out with layout debris: bullets, page numbers, hyphenated
//! line breaks, running headers/footers. [`normalize_text`] removes the
//! layout noise and [`remove_repeating_slogans`] strips text that repeats
//! on (nearly) every page.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use crate::core::models::CHARACTERS_PER_PAGE;

/// Longest snippet considered as a slogan
const MAX_SNIPPET_CHARS: usize = 200;
/// Shortest snippet considered as a slogan
const MIN_SNIPPET_CHARS: usize = 34;
/// A slogan must occur on at least this share of the pages (in percent)
const SLOGAN_PAGE_SHARE_PERCENT: usize = 95;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex")
}

static SPECIAL_CHAR: LazyLock<Regex> = LazyLock::new(|| regex(r"[·•▪▫\x{25AC}-\x{25FF}]"));
static PAGE_NUM: LazyLock<Regex> = LazyLock::new(|| regex(r"\n+\s*\d+\s*\n+"));
static HYPHENATION: LazyLock<Regex> = LazyLock::new(|| regex(r"-\x02|-\s*\n\s*"));
static NEWLINE: LazyLock<Regex> = LazyLock::new(|| regex(r"\s*\n\s*"));
static TAB_OR_FORM_FEED: LazyLock<Regex> = LazyLock::new(|| regex(r"[\t\x0C]"));
static DOTS: LazyLock<Regex> = LazyLock::new(|| regex(r"(\s*\.\s*)+"));
static LARGE_NUMBERS: LazyLock<Regex> = LazyLock::new(|| regex(r"[\d\s]{9,}"));

/// Clean extracted PDF text into a single line of prose
///
/// The order of the passes matters: page numbers are only recognisable
/// while line breaks still exist, hyphenation must be joined before line
/// breaks are collapsed, and line breaks between words are collapsed before
/// long digit runs are measured.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let text = SPECIAL_CHAR.replace_all(text, " ");
    let text = PAGE_NUM.replace_all(&text, " ");
    let text = join_between_words(&HYPHENATION, &text, "");
    let text = join_between_words(&NEWLINE, &text, " ");
    let text = TAB_OR_FORM_FEED.replace_all(&text, " ");
    let text = DOTS.replace_all(&text, ". ");
    let text = LARGE_NUMBERS.replace_all(&text, " ");

    text.split_whitespace()
        .enumerate()
        .filter(|(i, token)| *i == 0 || !is_single_word_char(token))
        .map(|(_, token)| token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace matches of `pattern` that sit between two word characters.
/// Neighbours are read from the input, so back-to-back matches all qualify.
/// The `-\x02` soft-hyphen artefact is always removed.
fn join_between_words<'t>(pattern: &Regex, text: &'t str, with: &str) -> Cow<'t, str> {
    pattern.replace_all(text, |caps: &Captures<'_>| {
        let found = &caps[0];
        let Some(m) = caps.get(0) else { return found.to_string() };
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if found == "-\x02" || (before.is_some_and(is_word_char) && after.is_some_and(is_word_char)) {
            with.to_string()
        } else {
            found.to_string()
        }
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_single_word_char(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_word_char(c))
}

/// Remove snippets that repeat on nearly every page (running headers,
/// campaign slogans in the footer)
///
/// Snippet lengths are tried from long to short. A snippet is a slogan when
/// it is strictly the most frequent snippet of its length and occurs at
/// least once on 95% of the pages. Texts shorter than a page are returned
/// unchanged.
#[must_use]
pub fn remove_repeating_slogans(text: &str) -> String {
    let mut text = text.to_string();

    for size in (MIN_SNIPPET_CHARS..=MAX_SNIPPET_CHARS).rev() {
        let chars = text.chars().count();
        if chars < CHARACTERS_PER_PAGE {
            break;
        }

        if let Some(slogan) = dominant_snippet(&text, size, chars) {
            debug!("Removing repeated snippet of {size} chars: {slogan:?}");
            text = text.replace(&slogan, "");
        }
    }

    text
}

/// The most frequent snippet of `size` chars, if it qualifies as a slogan
fn dominant_snippet(text: &str, size: usize, chars: usize) -> Option<String> {
    let bounds: Vec<usize> =
        text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len())).collect();
    if chars <= size {
        return None;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for start in 0..chars - size {
        *counts.entry(&text[bounds[start]..bounds[start + size]]).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    let mut runner_up = 0;
    for (snippet, count) in counts {
        match best {
            Some((_, top)) if count <= top => runner_up = runner_up.max(count),
            Some((_, top)) => {
                runner_up = top;
                best = Some((snippet, count));
            },
            None => best = Some((snippet, count)),
        }
    }

    let (snippet, top) = best?;
    // top >= 0.95 * pages, with pages = chars / CHARACTERS_PER_PAGE
    let frequent_enough =
        top * CHARACTERS_PER_PAGE * 100 >= chars * SLOGAN_PAGE_SHARE_PERCENT;
    (top != runner_up && frequent_enough).then(|| snippet.to_string())
}
