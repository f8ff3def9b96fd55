use super::dto::PromptVariant;

/// Renders comments as `[n] text` lines so the model can cite them.
pub fn render_comment_list<S: AsRef<str>>(comments: &[S]) -> String {
    comments
        .iter()
        .enumerate()
        .map(|(index, comment)| format!("[{}] {}", index + 1, comment.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt<S: AsRef<str>>(comments: &[S], variant: PromptVariant) -> String {
    let count = comments.len();
    let list = render_comment_list(comments);

    match variant {
        PromptVariant::Simple => build_simple_prompt(count, &list),
        PromptVariant::Detailed => build_detailed_prompt(count, &list),
    }
}

fn build_simple_prompt(count: usize, list: &str) -> String {
    format!(
        r#"You are an assistant that summarizes audience feedback. Below are {count} comments left by viewers.

Write a short analysis in markdown with:
## Overall Sentiment
One or two sentences on the general mood (positive, neutral or negative).
## Main Themes
Up to three bullet points naming what people talk about most.
## Takeaway
One sentence the creator can act on.

Keep it under 200 words. Do not invent opinions that are not in the comments.

Comments:
{list}"#
    )
}

fn build_detailed_prompt(count: usize, list: &str) -> String {
    format!(
        r#"You are an expert community analyst. Below are {count} comments left by viewers, each tagged with an index like [1].

Produce a structured analysis in markdown with exactly these sections:
## Overall Sentiment
Describe the general mood and give a rough split of positive, neutral and negative comments as percentages.
## Recurring Themes
Three to six bullet points. For each theme, say how common it is and cite two or three supporting comments by index, e.g. [4], [17].
## Outlier Opinions
Bullet points for views that differ sharply from the majority, with their index.
## Actionable Insights
Three to five concrete suggestions the creator can act on, each tied to the comments that motivate it.

Rules:
- Only use information present in the comments.
- Cite comments by their index, never quote more than one sentence from a comment.
- Keep the whole answer under 450 words.

Comments:
{list}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("comment number {i}")).collect()
    }

    #[test]
    fn test_render_comment_list_indexes_from_one() {
        let list = render_comment_list(&["first comment", "second comment"]);
        assert_eq!(list, "[1] first comment\n[2] second comment");
    }

    #[test]
    fn test_build_simple_prompt() {
        let comments = sample(3);
        let prompt = build_prompt(&comments, PromptVariant::Simple);

        assert!(prompt.contains("Below are 3 comments"));
        assert!(prompt.contains("## Main Themes"));
        assert!(prompt.ends_with("[1] comment number 1\n[2] comment number 2\n[3] comment number 3"));
        assert!(!prompt.contains("## Actionable Insights"));
    }

    #[test]
    fn test_build_detailed_prompt() {
        let comments = sample(25);
        let prompt = build_prompt(&comments, PromptVariant::Detailed);

        assert!(prompt.contains("Below are 25 comments"));
        assert!(prompt.contains("## Recurring Themes"));
        assert!(prompt.contains("## Outlier Opinions"));
        assert!(prompt.contains("## Actionable Insights"));
        assert!(prompt.contains("[25] comment number 25"));
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let comments = sample(30);
        let variant = PromptVariant::for_count(comments.len());

        assert_eq!(
            build_prompt(&comments, variant),
            build_prompt(&comments, variant)
        );
    }
}
