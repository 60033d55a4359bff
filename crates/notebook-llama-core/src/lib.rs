//! # notebook-llama core
//!
//! Shared, I/O-free logic for notebook-llama: the structured shapes that
//! flow between the application and the hosted extraction / chat
//! services, their validation rules, the storage encoding of managed
//! documents, and the [`store::DocumentStore`] abstraction.
//!
//! This crate contains no tokio, sqlx, or HTTP dependencies. Every type
//! that carries an invariant validates it when it is constructed, either
//! through its `new` constructor or while being deserialized, so an
//! invalid value never exists.

pub mod claim;
pub mod conversation;
pub mod document;
pub mod error;
pub mod mindmap;
pub mod notebook;
pub mod schema;
pub mod store;

pub use claim::ClaimVerification;
pub use conversation::{ConversationTurn, MultiTurnConversation, Speaker};
pub use document::{DocumentRow, ManagedDocument};
pub use error::{StoreError, ValidationError};
pub use mindmap::{Edge, MindMap, Node};
pub use notebook::Notebook;
pub use schema::StructuredOutput;
