/// Source text beyond this many characters is dropped before prompting.
pub const MAX_SOURCE_CHARS: usize = 5000;

/// Cut `text` to at most [`MAX_SOURCE_CHARS`] characters, on a char boundary.
pub fn truncate_source(text: &str) -> &str {
    match text.char_indices().nth(MAX_SOURCE_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Build the generation prompt for `source_text`.
///
/// Asks for bare quasi-CSV lines: question, five options, zero-based answer
/// index. The parser accepts other option counts too.
pub fn build_prompt(source_text: &str) -> String {
    format!(
        "You are a helpful assistant that generates multiple-choice questions from text.
Based on the following text, generate 5-10 multiple-choice questions.

The output must be in a strictly CSV-like format with the following columns:
Question, OptionA, OptionB, OptionC, OptionD, OptionE, Base 0 Index of Correct Answer (0-4)

Do not include a header row.
Do not include any other text, explanations, or markdown formatting. Just the CSV lines.
Ensure options are distinct.
If a question or option contains a comma, wrap it in double quotes.

Text content:
{}
",
        truncate_source(source_text)
    )
}
