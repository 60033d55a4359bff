//! Managed documents and their storage encoding.
//!
//! A [`ManagedDocument`] is the bundle of artifacts derived from one
//! source file. It is written to storage as a [`DocumentRow`], whose text
//! fields carry doubled quote characters. Reading a row back reverses the
//! doubling. The two directions are separate functions,
//! [`ManagedDocument::to_storage_row`] and
//! [`ManagedDocument::from_storage_row`], so each call site states which
//! way it converts.
//!
//! The encoding is a storage format, not an injection defence: stores
//! bind every value as a statement parameter.

use serde::{Deserialize, Serialize};

/// Literal token fixed up after unescaping. The mind-map HTML stored in
/// the `mindmap` field references its container as `'mynetwork'`.
const MYNETWORK_DOUBLED: &str = "''mynetwork''";
const MYNETWORK: &str = "'mynetwork'";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDocument {
    pub document_name: String,
    pub content: String,
    pub summary: String,
    pub q_and_a: String,
    pub mindmap: String,
    pub bullet_points: String,
}

/// Encoded form of a [`ManagedDocument`], field for field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub document_name: String,
    pub content: String,
    pub summary: String,
    pub q_and_a: String,
    pub mindmap: String,
    pub bullet_points: String,
}

impl ManagedDocument {
    pub fn to_storage_row(&self) -> DocumentRow {
        DocumentRow {
            document_name: escape_quotes(&self.document_name),
            content: escape_quotes(&self.content),
            summary: escape_quotes(&self.summary),
            q_and_a: escape_quotes(&self.q_and_a),
            mindmap: escape_quotes(&self.mindmap),
            bullet_points: escape_quotes(&self.bullet_points),
        }
    }

    pub fn from_storage_row(row: DocumentRow) -> Self {
        Self {
            document_name: unescape_quotes(&row.document_name),
            content: unescape_quotes(&row.content),
            summary: unescape_quotes(&row.summary),
            q_and_a: unescape_quotes(&row.q_and_a),
            mindmap: unescape_mindmap(&row.mindmap),
            bullet_points: unescape_quotes(&row.bullet_points),
        }
    }
}

/// Doubles every single-quote and double-quote character.
pub fn escape_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\'' || ch == '"' {
            out.push(ch);
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`escape_quotes`].
///
/// Doubled pairs collapse left to right. A lone quote (which
/// [`escape_quotes`] never produces) is kept as is.
pub fn unescape_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if (ch == '\'' || ch == '"') && chars.peek() == Some(&ch) {
            chars.next();
        }
    }
    out
}

/// [`unescape_quotes`] plus the `''mynetwork''` fix-up. Only the `mindmap`
/// field goes through this.
pub fn unescape_mindmap(text: &str) -> String {
    let out = unescape_quotes(text);
    if out.contains(MYNETWORK_DOUBLED) {
        return out.replace(MYNETWORK_DOUBLED, MYNETWORK);
    }
    out
}
