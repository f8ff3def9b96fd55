use std::sync::LazyLock;

use regex::Regex;

use super::dto::{NormalizeOptions, NormalizedComments};

/// Largest batch the HTTP layer accepts before normalization runs.
pub const MAX_ACCEPTED_COMMENTS: usize = 200;
/// Fewest cleaned comments worth sending to the model.
pub const MIN_CLEANED_COMMENTS: usize = 3;

pub const MIN_COMMENT_CHARS: usize = 10;
pub const MAX_COMMENT_CHARS: usize = 800;
pub const MAX_NORMALIZED_COMMENTS: usize = 100;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w").unwrap());
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(https?://|www\.)").unwrap());
// Whole-string match only: "first time here" is a real comment, "FIRST!!" is not.
static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(first|second|third|early|late|here|me|lol)[!.]*$").unwrap()
});

/// Trims the comment and collapses every whitespace run to a single space.
pub fn clean_comment(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}

fn is_filler(comment: &str) -> bool {
    FILLER_RE.is_match(comment)
}

fn is_acceptable(comment: &str, options: &NormalizeOptions) -> bool {
    let chars = comment.chars().count();

    if chars == 0 || chars < options.min_chars || chars > options.max_chars {
        return false;
    }

    WORD_RE.is_match(comment) && !URL_RE.is_match(comment) && !is_filler(comment)
}

/// Filters, dedupes and caps raw comments, keeping input order.
pub fn normalize_comments<I, S>(comments: I, options: &NormalizeOptions) -> NormalizedComments
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized = NormalizedComments::new();

    for raw in comments {
        if normalized.len() >= options.max_comments {
            break;
        }

        let comment = clean_comment(raw.as_ref());

        if !is_acceptable(&comment, options) {
            continue;
        }

        normalized.insert(comment);
    }

    log::debug!("Normalized comments: kept {}", normalized.len());

    normalized
}
