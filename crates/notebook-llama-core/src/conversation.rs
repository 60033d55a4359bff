//! Two-speaker dialogue used as the podcast script.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_max, check_min, ValidationError};
use crate::schema::StructuredOutput;

pub const MIN_TURNS: usize = 3;
pub const MAX_TURNS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Speaker1,
    Speaker2,
}

impl Speaker {
    /// The speaker expected at a given turn index.
    pub fn for_turn(index: usize) -> Self {
        if index % 2 == 0 {
            Speaker::Speaker1
        } else {
            Speaker::Speaker2
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Speaker1 => "speaker1",
            Speaker::Speaker2 => "speaker2",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
        }
    }
}

/// A dialogue that starts with `speaker1` and strictly alternates.
///
/// Length must be within `[MIN_TURNS, MAX_TURNS]`. The turn list is only
/// readable after construction, so the alternation cannot be broken later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConversation")]
pub struct MultiTurnConversation {
    conversation: Vec<ConversationTurn>,
}

#[derive(Deserialize)]
struct RawConversation {
    conversation: Vec<ConversationTurn>,
}

impl TryFrom<RawConversation> for MultiTurnConversation {
    type Error = ValidationError;

    fn try_from(raw: RawConversation) -> Result<Self, Self::Error> {
        MultiTurnConversation::new(raw.conversation)
    }
}

impl MultiTurnConversation {
    pub fn new(conversation: Vec<ConversationTurn>) -> Result<Self, ValidationError> {
        check_min("conversation", conversation.len(), MIN_TURNS)?;
        check_max("conversation", conversation.len(), MAX_TURNS)?;

        if conversation[0].speaker != Speaker::Speaker1 {
            return Err(ValidationError::MustStartWithSpeaker1);
        }
        for (index, turn) in conversation.iter().enumerate() {
            if turn.speaker != Speaker::for_turn(index) {
                return Err(ValidationError::BrokenAlternation {
                    index,
                    found: turn.speaker,
                });
            }
        }

        Ok(Self { conversation })
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.conversation
    }

    pub fn len(&self) -> usize {
        self.conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }
}

impl StructuredOutput for MultiTurnConversation {
    const SCHEMA_NAME: &'static str = "MultiTurnConversation";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "conversation": {
                    "type": "array",
                    "description": "List of conversation turns. Conversation must start with speaker1, and continue with an alternance of speaker1 and speaker2",
                    "minItems": MIN_TURNS,
                    "maxItems": MAX_TURNS,
                    "items": {
                        "type": "object",
                        "properties": {
                            "speaker": {
                                "type": "string",
                                "enum": ["speaker1", "speaker2"],
                                "description": "The person who is speaking"
                            },
                            "content": {
                                "type": "string",
                                "description": "The content of the speech"
                            }
                        },
                        "required": ["speaker", "content"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["conversation"],
            "additionalProperties": false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Speaker::{Speaker1, Speaker2};

    fn turns(speakers: &[Speaker]) -> Vec<ConversationTurn> {
        speakers
            .iter()
            .enumerate()
            .map(|(i, s)| ConversationTurn::new(*s, format!("line {}", i)))
            .collect()
    }

    #[test]
    fn test_conversation_valid() {
        let conv = MultiTurnConversation::new(vec![
            ConversationTurn::new(Speaker1, "Hello, who are you?"),
            ConversationTurn::new(Speaker2, "I am very well, how about you?"),
            ConversationTurn::new(Speaker1, "I am well too, thanks!"),
        ])
        .unwrap();
        assert_eq!(conv.len(), 3);
        assert_eq!(conv.turns()[0].speaker, Speaker1);
        assert_eq!(conv.turns()[0].content, "Hello, who are you?");
    }

    #[test]
    fn test_conversation_too_short() {
        let err = MultiTurnConversation::new(turns(&[Speaker1, Speaker2])).unwrap_err();
        assert!(matches!(err, ValidationError::TooFew { min: 3, .. }));
    }

    #[test]
    fn test_conversation_too_long() {
        let speakers: Vec<Speaker> = (0..51).map(Speaker::for_turn).collect();
        let err = MultiTurnConversation::new(turns(&speakers)).unwrap_err();
        assert!(matches!(err, ValidationError::TooMany { max: 50, .. }));

        let speakers: Vec<Speaker> = (0..50).map(Speaker::for_turn).collect();
        assert!(MultiTurnConversation::new(turns(&speakers)).is_ok());
    }

    #[test]
    fn test_conversation_must_start_with_speaker1() {
        let err = MultiTurnConversation::new(turns(&[Speaker2, Speaker1, Speaker2])).unwrap_err();
        assert_eq!(err, ValidationError::MustStartWithSpeaker1);
    }

    #[test]
    fn test_conversation_repeated_speaker() {
        let err = MultiTurnConversation::new(turns(&[Speaker1, Speaker1, Speaker2])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BrokenAlternation {
                index: 1,
                found: Speaker1
            }
        );

        let err = MultiTurnConversation::new(turns(&[Speaker1, Speaker2, Speaker2])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BrokenAlternation {
                index: 2,
                found: Speaker2
            }
        );
    }

    #[test]
    fn test_conversation_deserialize() {
        let raw = r#"{"conversation":[
            {"speaker":"speaker1","content":"Hi"},
            {"speaker":"speaker2","content":"Hello"},
            {"speaker":"speaker1","content":"Bye"}
        ]}"#;
        let conv = MultiTurnConversation::from_json_str(raw).unwrap();
        assert_eq!(conv.turns()[1].speaker, Speaker2);

        let raw = r#"{"conversation":[
            {"speaker":"speaker1","content":"Hi"},
            {"speaker":"speaker3","content":"Hello"},
            {"speaker":"speaker1","content":"Bye"}
        ]}"#;
        assert!(MultiTurnConversation::from_json_str(raw).is_err());
    }
}
