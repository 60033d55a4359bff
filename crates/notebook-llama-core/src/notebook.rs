//! The notebook extracted from a source document.

use serde::{Deserialize, Serialize};

use crate::error::{check_min, ValidationError};
use crate::schema::StructuredOutput;

/// Minimum number of question/answer pairs.
pub const MIN_QUESTIONS: usize = 5;
/// Minimum number of highlights.
pub const MIN_HIGHLIGHTS: usize = 4;

/// Summary, Q&A pairs and highlights extracted from one document.
///
/// `questions` and `answers` are parallel: `answers[i]` answers
/// `questions[i]`. Both the constructor and deserialization reject
/// payloads that break the length rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNotebook")]
pub struct Notebook {
    summary: String,
    questions: Vec<String>,
    answers: Vec<String>,
    highlights: Vec<String>,
}

#[derive(Deserialize)]
struct RawNotebook {
    summary: String,
    questions: Vec<String>,
    answers: Vec<String>,
    highlights: Vec<String>,
}

impl TryFrom<RawNotebook> for Notebook {
    type Error = ValidationError;

    fn try_from(raw: RawNotebook) -> Result<Self, Self::Error> {
        Notebook::new(raw.summary, raw.questions, raw.answers, raw.highlights)
    }
}

impl Notebook {
    pub fn new(
        summary: impl Into<String>,
        questions: Vec<String>,
        answers: Vec<String>,
        highlights: Vec<String>,
    ) -> Result<Self, ValidationError> {
        check_min("questions", questions.len(), MIN_QUESTIONS)?;
        if questions.len() != answers.len() {
            return Err(ValidationError::QuestionAnswerMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }
        check_min("highlights", highlights.len(), MIN_HIGHLIGHTS)?;

        Ok(Self {
            summary: summary.into(),
            questions,
            answers,
            highlights,
        })
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    /// Iterates `(question, answer)` pairs in order.
    pub fn qa_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// Markdown rendering of the Q&A pairs, as stored in `q_and_a`.
    pub fn q_and_a_markdown(&self) -> String {
        self.qa_pairs()
            .map(|(q, a)| format!("**{}**\n\n{}", q, a))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Markdown bullet list of the highlights, as stored in `bullet_points`.
    pub fn bullet_points_markdown(&self) -> String {
        self.highlights
            .iter()
            .map(|h| format!("- {}", h))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StructuredOutput for Notebook {
    const SCHEMA_NAME: &'static str = "Notebook";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "summary": {
                    "type": "string",
                    "description": "Summary of the document."
                },
                "questions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": MIN_QUESTIONS,
                    "description": "Questions about the document, answerable from its content."
                },
                "answers": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": MIN_QUESTIONS,
                    "description": "Answers to the questions, in the same order as the questions."
                },
                "highlights": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": MIN_HIGHLIGHTS,
                    "description": "Key highlights of the document."
                }
            },
            "required": ["summary", "questions", "answers", "highlights"],
            "additionalProperties": false
        })
    }
}
