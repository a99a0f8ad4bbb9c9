//! Lenient quasi-CSV parsing of model replies into questions.
//!
//! The model is asked for lines of the form
//! `question,option,option,...,answer_index`, but nothing enforces that.
//! [`parse`] salvages whatever lines are usable and silently drops the
//! rest, so its result is a best-effort, possibly empty list rather than a
//! `Result`. An empty list is a normal outcome.
//!
//! Per-line rules:
//! - blank lines are skipped;
//! - fields are split on commas outside double quotes, quotes are dropped,
//!   and every field is trimmed;
//! - at least 4 fields are needed: question, options..., answer;
//! - empty options are dropped and at least 2 must remain;
//! - the answer must start with an integer and is clamped into the option
//!   range instead of being rejected.

use crate::error::RecordRejection;
use crate::question::GeneratedQuestion;
use tracing::{debug, instrument};

/// Fewest fields a line can have and still carry question, two options and an answer.
pub const MIN_FIELDS: usize = 4;

/// Fewest non-empty options a question can have.
pub const MIN_OPTIONS: usize = 2;

/// Parse a raw completion into every question it contains, in line order.
#[instrument(target = "quiz_gen::parser", skip(raw), fields(raw_len = raw.len()))]
pub fn parse(raw: &str) -> Vec<GeneratedQuestion> {
    let mut questions = Vec::new();
    let mut discarded = 0usize;

    for (line_no, line) in raw.lines().enumerate() {
        if trim_field(line).is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(question) => questions.push(question),
            Err(reason) => {
                discarded += 1;
                debug!(target: "quiz_gen::parser", line = line_no + 1, %reason, "Discarding line");
            }
        }
    }

    debug!(target: "quiz_gen::parser", accepted = questions.len(), discarded, "Parsed completion");
    questions
}

/// Parse a single line, reporting why it was rejected.
pub fn parse_line(line: &str) -> Result<GeneratedQuestion, RecordRejection> {
    let mut fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(RecordRejection::TooFewFields(fields.len()));
    }

    // Length checked above.
    let answer_field = fields.pop().unwrap_or_default();
    let mut fields = fields.into_iter();
    let question = fields.next().unwrap_or_default();
    let options: Vec<String> = fields.filter(|opt| !opt.is_empty()).collect();

    if question.is_empty() {
        return Err(RecordRejection::EmptyQuestion);
    }
    if options.len() < MIN_OPTIONS {
        return Err(RecordRejection::TooFewOptions(options.len()));
    }
    let answer = parse_leading_int(&answer_field).ok_or(RecordRejection::InvalidAnswerIndex)?;

    Ok(GeneratedQuestion::new(question, options, answer))
}

/// Split a line on commas that sit outside double quotes.
///
/// Each `"` toggles quoting and is dropped; there is no escaping.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(trim_field(&current).to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(trim_field(&current).to_string());
    fields
}

/// Trim whitespace and byte-order marks from both ends.
fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Read an optionally signed integer from the start of `s`.
///
/// A `0x`/`0X` prefix switches to base 16. Trailing text after the digits
/// is ignored (`"3)"` is 3). Returns `None` when no digit follows the sign
/// or the hex prefix. Overflow saturates.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = trim_field(s);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        value = value.saturating_mul(i64::from(radix)).saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_variants() {
        assert_eq!(parse_leading_int("1"), Some(1));
        assert_eq!(parse_leading_int(" -2 "), Some(-2));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("3)"), Some(3));
        assert_eq!(parse_leading_int("2.7"), Some(2));
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("notanumber"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("B"), None);
        assert_eq!(parse_leading_int("0x2"), Some(2));
        assert_eq!(parse_leading_int("0X1f"), Some(31));
        assert_eq!(parse_leading_int("-0x3"), Some(-3));
        assert_eq!(parse_leading_int("0x1g"), Some(1));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xz"), None);
        assert_eq!(parse_leading_int("\u{FEFF}4"), Some(4));
    }

    #[test]
    fn split_keeps_quoted_commas() {
        assert_eq!(split_fields(r#"a, "b, c" ,d"#), vec!["a", "b, c", "d"]);
    }

    #[test]
    fn split_strips_byte_order_mark() {
        assert_eq!(split_fields("\u{FEFF}Q, A ,B"), vec!["Q", "A", "B"]);
    }

    #[test]
    fn split_trailing_comma_yields_empty_field() {
        assert_eq!(split_fields("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn split_unbalanced_quote_swallows_rest() {
        assert_eq!(split_fields(r#"a,"b,c,d"#), vec!["a", "b,c,d"]);
    }

    #[test]
    fn line_rejections() {
        assert_eq!(parse_line("Q,A,1"), Err(RecordRejection::TooFewFields(3)));
        assert_eq!(parse_line(",A,B,1"), Err(RecordRejection::EmptyQuestion));
        assert_eq!(parse_line("Q,A,,1"), Err(RecordRejection::TooFewOptions(1)));
        assert_eq!(parse_line("Q,A,B,x"), Err(RecordRejection::InvalidAnswerIndex));
    }
}
