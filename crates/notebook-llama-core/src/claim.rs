//! Verdict on whether a claim is supported by source passages.

use serde::{Deserialize, Serialize};

use crate::error::{check_max, check_min, ValidationError};
use crate::schema::StructuredOutput;

/// Citation list substituted for any citations on a false claim.
pub const FALSE_CLAIM_CITATION: &str = "The claim was deemed false.";

pub const MIN_CITATIONS: usize = 1;
pub const MAX_CITATIONS: usize = 3;

/// A claim verdict with up to three supporting citations.
///
/// When present, `supporting_citations` holds between one and three
/// entries. A false verdict never carries caller-supplied citations: they
/// are replaced with [`FALSE_CLAIM_CITATION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClaimVerification")]
pub struct ClaimVerification {
    claim_is_true: bool,
    supporting_citations: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawClaimVerification {
    claim_is_true: bool,
    #[serde(default)]
    supporting_citations: Option<Vec<String>>,
}

impl TryFrom<RawClaimVerification> for ClaimVerification {
    type Error = ValidationError;

    fn try_from(raw: RawClaimVerification) -> Result<Self, Self::Error> {
        ClaimVerification::new(raw.claim_is_true, raw.supporting_citations)
    }
}

impl ClaimVerification {
    pub fn new(
        claim_is_true: bool,
        supporting_citations: Option<Vec<String>>,
    ) -> Result<Self, ValidationError> {
        if let Some(citations) = &supporting_citations {
            check_min("supporting_citations", citations.len(), MIN_CITATIONS)?;
            check_max("supporting_citations", citations.len(), MAX_CITATIONS)?;
        }

        let supporting_citations = match supporting_citations {
            Some(_) if !claim_is_true => Some(vec![FALSE_CLAIM_CITATION.to_string()]),
            other => other,
        };

        Ok(Self {
            claim_is_true,
            supporting_citations,
        })
    }

    pub fn claim_is_true(&self) -> bool {
        self.claim_is_true
    }

    pub fn supporting_citations(&self) -> Option<&[String]> {
        self.supporting_citations.as_deref()
    }
}

impl StructuredOutput for ClaimVerification {
    const SCHEMA_NAME: &'static str = "ClaimVerification";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "claim_is_true": {
                    "type": "boolean",
                    "description": "Based on the provided sources information, the claim passes or not."
                },
                "supporting_citations": {
                    "type": ["array", "null"],
                    "items": { "type": "string" },
                    "minItems": MIN_CITATIONS,
                    "maxItems": MAX_CITATIONS,
                    "description": "A minimum of one and a maximum of three citations from the sources supporting the claim. If the claim is not supported, please leave empty"
                }
            },
            "required": ["claim_is_true", "supporting_citations"],
            "additionalProperties": false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citations(n: usize) -> Option<Vec<String>> {
        Some((1..=n).map(|i| format!("Support {}", i)).collect())
    }

    #[test]
    fn test_true_claim_keeps_citations() {
        let cl = ClaimVerification::new(true, citations(2)).unwrap();
        assert!(cl.claim_is_true());
        assert_eq!(
            cl.supporting_citations().unwrap(),
            &["Support 1".to_string(), "Support 2".to_string()]
        );
    }

    #[test]
    fn test_false_claim_replaces_citations() {
        for n in 1..=3 {
            let cl = ClaimVerification::new(false, citations(n)).unwrap();
            assert_eq!(
                cl.supporting_citations().unwrap(),
                &[FALSE_CLAIM_CITATION.to_string()]
            );
        }
    }

    #[test]
    fn test_false_claim_without_citations() {
        let cl = ClaimVerification::new(false, None).unwrap();
        assert!(cl.supporting_citations().is_none());
    }

    #[test]
    fn test_citation_bounds() {
        assert!(ClaimVerification::new(true, citations(4)).is_err());
        assert!(ClaimVerification::new(true, Some(vec![])).is_err());
        // Bounds are checked before the false-claim normalization.
        assert!(ClaimVerification::new(false, citations(4)).is_err());
    }

    #[test]
    fn test_deserialize_normalizes() {
        let cl: ClaimVerification = serde_json::from_str(
            r#"{"claim_is_true": false, "supporting_citations": ["made up"]}"#,
        )
        .unwrap();
        assert_eq!(
            cl.supporting_citations().unwrap(),
            &[FALSE_CLAIM_CITATION.to_string()]
        );

        let cl: ClaimVerification = serde_json::from_str(r#"{"claim_is_true": true}"#).unwrap();
        assert!(cl.supporting_citations().is_none());
    }
}
