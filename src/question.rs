use schemars::JsonSchema;
use serde::Serialize;

/// A validated multiple-choice question.
///
/// Fields are private: a question only comes out of the parser, which
/// guarantees a non-empty question, at least two options, and an answer
/// index that points at one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(
    title = "Generated Question",
    description = "A multiple-choice question parsed from a model reply"
)]
pub struct GeneratedQuestion {
    /// The question prompt
    question: String,
    /// Answer options in the order the model listed them
    #[schemars(length(min = 2))]
    options: Vec<String>,
    /// Zero-based index into `options`
    correct_answer: usize,
}

impl GeneratedQuestion {
    /// Build a question, clamping `answer` into the option range.
    ///
    /// Callers must pass at least one option.
    pub(crate) fn new(question: String, options: Vec<String>, answer: i64) -> Self {
        debug_assert!(!options.is_empty());
        let last = options.len().saturating_sub(1);
        let correct_answer = if answer <= 0 {
            0
        } else {
            usize::try_from(answer).map_or(last, |idx| idx.min(last))
        };
        Self { question, options, correct_answer }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    /// The text of the option marked correct.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("opt{i}")).collect()
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(GeneratedQuestion::new("q".into(), opts(3), -4).correct_answer(), 0);
        assert_eq!(GeneratedQuestion::new("q".into(), opts(3), 3).correct_answer(), 2);
        assert_eq!(GeneratedQuestion::new("q".into(), opts(3), i64::MAX).correct_answer(), 2);
        assert_eq!(GeneratedQuestion::new("q".into(), opts(3), 1).correct_answer(), 1);
    }

    #[test]
    fn serializes_with_camel_case_answer() {
        let options = vec!["Paris".into(), "Rome".into()];
        let q = GeneratedQuestion::new("Capital of France?".into(), options, 0);
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["question"], "Capital of France?");
        assert_eq!(v["options"][1], "Rome");
        assert_eq!(v["correctAnswer"], 0);
        assert_eq!(q.correct_option(), "Paris");
    }
}
