//! Query routing and response composition for ARGO profile data.
//!
//! This crate is the decision pipeline: free-text prompts are classified
//! by ordered keyword rules, turned into structured filter queries or
//! region lookups, and answered by one of four response branches
//! (external fallback, tsunami risk, templated intelligent narrative, or
//! the generic statistical summary). The [`engine::ChatEngine`] ties the
//! branches together over a process-wide read-only dataset and a
//! per-session conversation log.

pub mod conversation;
pub mod engine;
pub mod external;
pub mod intent;
pub mod responder;
pub mod response;

pub use conversation::{ConversationLog, ConversationTurn, Role};
pub use engine::ChatEngine;
pub use intent::Intent;
pub use response::{ChartRenderer, ChatRequest, ChatResponse, NullRenderer};
