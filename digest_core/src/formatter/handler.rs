use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}

/// Cleans model output for markdown rendering: no empty lines except a single
/// blank line ahead of each heading.
pub fn format_summary(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");

    let lines: Vec<&str> = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut formatted = String::with_capacity(text.len());

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            formatted.push('\n');
            if is_heading(line) {
                formatted.push('\n');
            }
        }
        formatted.push_str(line);
    }

    formatted
}
