//! Mind-map graph: short-content nodes connected by directed edges.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::schema::StructuredOutput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Short label, five words or fewer by convention.
    pub content: String,
}

impl Node {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from_id: String,
    pub to_id: String,
}

impl Edge {
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
        }
    }
}

/// A validated mind map.
///
/// Construction fails when the declared node ids form a strict subset of
/// the ids referenced by edges. Edges whose endpoints share no overlap
/// with the declared nodes are not rejected by this rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMindMap")]
pub struct MindMap {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct RawMindMap {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<RawMindMap> for MindMap {
    type Error = ValidationError;

    fn try_from(raw: RawMindMap) -> Result<Self, Self::Error> {
        MindMap::new(raw.nodes, raw.edges)
    }
}

impl MindMap {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, ValidationError> {
        let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let edge_ids: HashSet<&str> = edges
            .iter()
            .flat_map(|e| [e.from_id.as_str(), e.to_id.as_str()])
            .collect();

        if node_ids.is_subset(&edge_ids) && node_ids != edge_ids {
            return Err(ValidationError::DanglingEdges);
        }

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl StructuredOutput for MindMap {
    const SCHEMA_NAME: &'static str = "MindMap";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "nodes": {
                    "type": "array",
                    "description": "List of nodes in the mind map, each represented as a Node object with an 'id' and concise 'content' (no more than 5 words).",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "content": { "type": "string" }
                        },
                        "required": ["id", "content"],
                        "additionalProperties": false
                    }
                },
                "edges": {
                    "type": "array",
                    "description": "The edges connecting the nodes of the mind map, as a list of Edge objects with from_id and to_id fields representing the source and target node IDs.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "from_id": { "type": "string" },
                            "to_id": { "type": "string" }
                        },
                        "required": ["from_id", "to_id"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["nodes", "edges"],
            "additionalProperties": false
        })
    }
}
