//! Request and response payload types.
//!
//! Each response branch has its own statically known shape; the four
//! shapes form one tagged union discriminated by `query_type` on the
//! wire. Chart rendering is an external collaborator behind the
//! [`ChartRenderer`] trait; the engine only passes its opaque payloads
//! through.

use crate::conversation::ConversationTurn;
use floatchat_argo::{Dataset, Variable};
use floatchat_risk::RegionRisk;
use floatchat_stats::{AnomalyFinding, Probabilities, QueryStats};
use serde::{Deserialize, Serialize, Serializer};

fn default_session() -> String {
    "default".to_string()
}

/// An incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default = "default_session")]
    pub session_id: String,
}

impl ChatRequest {
    /// Request against the default session.
    pub fn new(prompt: impl Into<String>) -> Self {
        ChatRequest {
            prompt: prompt.into(),
            session_id: default_session(),
        }
    }
}

/// Boundary to the chart-rendering collaborator.
///
/// Implementations turn a filtered subset into opaque serialized chart
/// payloads (the engine never inspects them). `None` means "no chart",
/// which is also what the default renderer always answers.
pub trait ChartRenderer {
    fn profile_chart(&self, subset: &Dataset, variable: Variable) -> Option<serde_json::Value>;
    fn heatmap(&self, subset: &Dataset, variable: Variable) -> Option<serde_json::Value>;
    fn distribution(&self, subset: &Dataset, variable: Variable) -> Option<serde_json::Value>;
}

/// Renderer that draws nothing. Used when no chart backend is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl ChartRenderer for NullRenderer {
    fn profile_chart(&self, _: &Dataset, _: Variable) -> Option<serde_json::Value> {
        None
    }
    fn heatmap(&self, _: &Dataset, _: Variable) -> Option<serde_json::Value> {
        None
    }
    fn distribution(&self, _: &Dataset, _: Variable) -> Option<serde_json::Value> {
        None
    }
}

/// Serialize a missing probability summary as an empty map, matching the
/// "neutral result, never an error" contract for no-data conditions.
fn probabilities_or_empty<S: Serializer>(
    value: &Option<Probabilities>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(p) => p.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

/// One chat answer, discriminated by `query_type` on the wire.
///
/// Every branch carries the narrative `summary` and the trailing
/// `conversation_history` (last 10 turns, most-recent-last).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "query_type", rename_all = "lowercase")]
pub enum ChatResponse {
    /// Off-domain prompt answered by the external fallback service.
    External {
        summary: String,
        conversation_history: Vec<ConversationTurn>,
    },
    /// Regional tsunami risk assessment.
    Tsunami {
        summary: String,
        tsunami_risks: Vec<RegionRisk>,
        all_regions: Vec<RegionRisk>,
        recommendations: Vec<&'static str>,
        conversation_history: Vec<ConversationTurn>,
    },
    /// Templated narrative matched to a specific intent.
    Intelligent {
        summary: String,
        conversation_history: Vec<ConversationTurn>,
    },
    /// Generic statistical summary over the filtered subset.
    General {
        summary: String,
        stats: Option<QueryStats>,
        chart: Option<serde_json::Value>,
        heatmap: Option<serde_json::Value>,
        probability_distribution: Option<serde_json::Value>,
        #[serde(serialize_with = "probabilities_or_empty")]
        probabilities: Option<Probabilities>,
        issues: Vec<AnomalyFinding>,
        location_insights: String,
        show_visualizations: bool,
        conversation_history: Vec<ConversationTurn>,
    },
}

impl ChatResponse {
    /// The narrative text of any branch.
    pub fn summary(&self) -> &str {
        match self {
            ChatResponse::External { summary, .. }
            | ChatResponse::Tsunami { summary, .. }
            | ChatResponse::Intelligent { summary, .. }
            | ChatResponse::General { summary, .. } => summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_session_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(request.session_id, "default");

        let named: ChatRequest =
            serde_json::from_str(r#"{"prompt": "hi", "session_id": "abc"}"#).unwrap();
        assert_eq!(named.session_id, "abc");
    }

    #[test]
    fn responses_are_tagged_by_query_type() {
        let response = ChatResponse::Intelligent {
            summary: "text".to_string(),
            conversation_history: Vec::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["query_type"], "intelligent");
        assert_eq!(value["summary"], "text");
    }

    #[test]
    fn missing_probabilities_serialize_as_empty_map() {
        let response = ChatResponse::General {
            summary: "none".to_string(),
            stats: None,
            chart: None,
            heatmap: None,
            probability_distribution: None,
            probabilities: None,
            issues: Vec::new(),
            location_insights: "No data available.".to_string(),
            show_visualizations: false,
            conversation_history: Vec::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["query_type"], "general");
        assert!(value["probabilities"].as_object().unwrap().is_empty());
        assert!(value["chart"].is_null());
    }
}
