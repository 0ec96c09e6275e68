use omnirepute_core::{DataSource, MentionRow};

/// At most this many mentions are embedded in the model prompt, regardless of
/// how large the warehouse sample was.
pub const PROMPT_SAMPLE_LIMIT: usize = 50;

/// Per-mention character cap inside the prompt, to keep token usage bounded.
const MENTION_TEXT_LIMIT: usize = 400;

/// Builds the analysis prompt from the brand, source filter, and mention
/// sample. Embeds the total sample size but only the first
/// [`PROMPT_SAMPLE_LIMIT`] mention texts.
pub(crate) fn build_prompt(
    brand_name: &str,
    source: DataSource,
    mentions: &[MentionRow],
) -> String {
    let total = mentions.len();
    let embedded = total.min(PROMPT_SAMPLE_LIMIT);

    let mut prompt = format!(
        "You are a brand reputation analyst. Analyze the public perception of \
         \"{brand_name}\" based on a sample of {total} mentions collected from \
         source \"{source}\".\n\
         Produce a reputation report covering: an overall score from 0 (worst) \
         to 100 (best), a one-sentence rationale that references the data \
         source, 3 to 5 key insights, concrete improvement strategies, \
         recurring themes users love and hate, and suggested responses to the \
         most common complaints.\n\n\
         Mention sample (first {embedded} of {total}):\n"
    );

    for mention in mentions.iter().take(PROMPT_SAMPLE_LIMIT) {
        let text = truncate_chars(&mention.full_text, MENTION_TEXT_LIMIT);
        prompt.push_str("- [");
        prompt.push_str(&mention.source);
        prompt.push_str("] ");
        prompt.push_str(&text);
        prompt.push('\n');
    }

    prompt
}

/// Truncates on a character boundary, never mid code point.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_owned()
    } else {
        text.chars().take(limit).collect()
    }
}
