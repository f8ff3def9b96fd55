use std::collections::HashSet;

use super::handler::{MAX_COMMENT_CHARS, MAX_NORMALIZED_COMMENTS, MIN_COMMENT_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub min_chars: usize,
    pub max_chars: usize,
    pub max_comments: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            min_chars: MIN_COMMENT_CHARS,
            max_chars: MAX_COMMENT_CHARS,
            max_comments: MAX_NORMALIZED_COMMENTS,
        }
    }
}

/// Cleaned comments in first-seen order. Membership is tracked separately so
/// repeats are rejected without rescanning the list.
#[derive(Debug, Clone, Default)]
pub struct NormalizedComments {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl NormalizedComments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the text was already present.
    pub fn insert(&mut self, comment: String) -> bool {
        if self.seen.contains(&comment) {
            return false;
        }

        self.seen.insert(comment.clone());
        self.items.push(comment);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_occurrence_order() {
        let mut comments = NormalizedComments::new();

        assert!(comments.insert("b comment".to_string()));
        assert!(comments.insert("a comment".to_string()));
        assert!(!comments.insert("b comment".to_string()));

        assert_eq!(comments.len(), 2);
        assert_eq!(comments.as_slice(), &["b comment", "a comment"]);
    }

    #[test]
    fn test_default_options() {
        let options = NormalizeOptions::default();
        assert_eq!(options.min_chars, 10);
        assert_eq!(options.max_chars, 800);
        assert_eq!(options.max_comments, 100);
    }
}
