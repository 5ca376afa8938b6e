//! Chat orchestration over the loaded dataset.
//!
//! One engine owns the process-wide read-only dataset, the per-session
//! conversation log, and the injected collaborator handles (chart
//! renderer, optional temperature predictor, optional external fallback
//! client). Each request is an independent, stateless computation over
//! the shared dataset; the conversation log is the only mutable state.

use crate::conversation::{ConversationLog, ConversationTurn, Role};
use crate::external;
use crate::intent::{self, Intent};
use crate::responder;
use crate::response::{ChartRenderer, ChatRequest, ChatResponse, NullRenderer};
use floatchat_argo::Dataset;
use floatchat_model::TempModel;
use floatchat_risk::generate_analysis;
use floatchat_stats::{find_anomalies, location_insights, probabilities, query_stats};

/// Number of prior turns echoed back with every response.
const HISTORY_LIMIT: usize = 10;

/// Prompt words that request chart payloads.
static VISUALIZATION_WORDS: &[&str] =
    &["graph", "chart", "plot", "heatmap", "map", "visualize", "show"];

pub struct ChatEngine {
    dataset: Dataset,
    log: ConversationLog,
    charts: Box<dyn ChartRenderer + Send + Sync>,
    predictor: Option<TempModel>,
    #[cfg(feature = "external-ai")]
    fallback: Option<external::GeminiClient>,
}

impl ChatEngine {
    /// Engine over a loaded dataset, with no chart backend, no predictor
    /// and no external fallback wired up.
    pub fn new(dataset: Dataset) -> Self {
        ChatEngine {
            dataset,
            log: ConversationLog::new(),
            charts: Box::new(NullRenderer),
            predictor: None,
            #[cfg(feature = "external-ai")]
            fallback: None,
        }
    }

    /// Attach a chart-rendering collaborator.
    pub fn with_charts(mut self, charts: Box<dyn ChartRenderer + Send + Sync>) -> Self {
        self.charts = charts;
        self
    }

    /// Attach a fitted temperature predictor.
    ///
    /// The chat pipeline never consults it; it is carried here so callers
    /// that do predict get it from the engine context rather than from
    /// global state.
    pub fn with_predictor(mut self, model: TempModel) -> Self {
        self.predictor = Some(model);
        self
    }

    /// Attach the external fallback AI client.
    #[cfg(feature = "external-ai")]
    pub fn with_fallback(mut self, client: external::GeminiClient) -> Self {
        self.fallback = Some(client);
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn predictor(&self) -> Option<&TempModel> {
        self.predictor.as_ref()
    }

    /// Answer one chat request.
    ///
    /// Every branch terminates with a well-formed response and appends
    /// the assistant turn to the session log; there is no fatal path.
    pub async fn respond(&mut self, request: &ChatRequest) -> ChatResponse {
        let session = request.session_id.as_str();
        let prompt = request.prompt.as_str();
        self.log.add(session, Role::User, prompt, None);

        let text = prompt.to_lowercase();
        let show_visualizations = VISUALIZATION_WORDS.iter().any(|w| text.contains(w));

        if !external::is_oceanographic(prompt) {
            let summary = self.fallback_response(session, prompt).await;
            self.log.add(session, Role::Assistant, summary.clone(), None);
            return ChatResponse::External {
                summary,
                conversation_history: self.history(session),
            };
        }

        if intent::classify(prompt) == Intent::Tsunami {
            let analysis = generate_analysis(&self.dataset);
            self.log
                .add(session, Role::Assistant, analysis.summary.clone(), None);
            return ChatResponse::Tsunami {
                summary: analysis.summary,
                tsunami_risks: analysis.top_risks,
                all_regions: analysis.all_regions,
                recommendations: analysis.recommendations,
                conversation_history: self.history(session),
            };
        }

        if let Some(summary) = responder::intelligent_response(prompt, &self.dataset) {
            self.log.add(session, Role::Assistant, summary.clone(), None);
            return ChatResponse::Intelligent {
                summary,
                conversation_history: self.history(session),
            };
        }

        // The tsunami branch was already taken above on the classifier's
        // narrower keyword set, so query_type is not consulted here.
        let query = intent::parse_prompt(prompt);
        let filtered = self.dataset.filter(&query);

        let Some(stats) = query_stats(&filtered, query.variable, self.dataset.len()) else {
            self.log
                .add(session, Role::Assistant, responder::NO_DATA_SUMMARY, None);
            return ChatResponse::General {
                summary: responder::NO_DATA_SUMMARY.to_string(),
                stats: None,
                chart: None,
                heatmap: None,
                probability_distribution: None,
                probabilities: None,
                issues: Vec::new(),
                location_insights: "No data available.".to_string(),
                show_visualizations: false,
                conversation_history: self.history(session),
            };
        };

        let summary = responder::summarize(&stats);
        let (chart, heatmap, probability_distribution) = if show_visualizations {
            (
                self.charts.profile_chart(&filtered, query.variable),
                self.charts.heatmap(&filtered, query.variable),
                self.charts.distribution(&filtered, query.variable),
            )
        } else {
            (None, None, None)
        };

        log::info!(
            "engine: general query over {} of {} records ({})",
            filtered.len(),
            self.dataset.len(),
            stats.variable.name()
        );

        self.log.add(
            session,
            Role::Assistant,
            summary.clone(),
            serde_json::to_value(&stats).ok(),
        );
        ChatResponse::General {
            summary,
            issues: find_anomalies(&filtered, query.variable),
            probabilities: probabilities(&filtered, query.variable),
            location_insights: location_insights(&filtered),
            stats: Some(stats),
            chart,
            heatmap,
            probability_distribution,
            show_visualizations,
            conversation_history: self.history(session),
        }
    }

    fn history(&self, session: &str) -> Vec<ConversationTurn> {
        self.log.history(session, HISTORY_LIMIT)
    }

    /// Off-domain answer, with recent session turns prepended so the
    /// external service sees the conversation so far.
    #[cfg(feature = "external-ai")]
    async fn fallback_response(&self, session: &str, prompt: &str) -> String {
        match &self.fallback {
            Some(client) => {
                let context = self.log.context(session);
                if context.is_empty() {
                    client.generate(prompt).await
                } else {
                    client
                        .generate(&format!("Previous conversation:\n{context}\nUser: {prompt}"))
                        .await
                }
            }
            None => external::FALLBACK_TEXT.to_string(),
        }
    }

    #[cfg(not(feature = "external-ai"))]
    async fn fallback_response(&self, _session: &str, _prompt: &str) -> String {
        external::FALLBACK_TEXT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_argo::ProfileRecord;

    fn record(lat: f64, lon: f64, pressure: f64, temperature: f64, salinity: f64) -> ProfileRecord {
        ProfileRecord {
            time: None,
            latitude: lat,
            longitude: lon,
            pressure,
            temperature,
            salinity,
        }
    }

    /// Twelve records inside the Japan Coast tsunami box plus a handful
    /// of deep southern-ocean profiles.
    fn seeded_engine() -> ChatEngine {
        let mut records: Vec<ProfileRecord> = (0..12)
            .map(|i| record(35.0 + (i as f64) * 0.5, 140.0, 200.0 + i as f64, 12.0, 34.8))
            .collect();
        for i in 0..4 {
            records.push(record(-55.0, 30.0, 1500.0 + i as f64 * 50.0, 2.0, 34.4));
        }
        ChatEngine::new(Dataset::new(records))
    }

    #[tokio::test]
    async fn tsunami_prompt_ranks_seeded_japan_box() {
        let mut engine = seeded_engine();
        assert_eq!(engine.dataset().len(), 16);
        let response = engine
            .respond(&ChatRequest::new("What is the tsunami risk near Japan?"))
            .await;

        let ChatResponse::Tsunami { all_regions, tsunami_risks, recommendations, .. } = response
        else {
            panic!("expected tsunami branch");
        };
        assert!(all_regions.iter().any(|r| r.region == "Japan Coast"));
        assert!(tsunami_risks.len() <= 5);
        assert_eq!(recommendations.len(), 4);
    }

    #[tokio::test]
    async fn off_topic_prompt_takes_external_branch() {
        let mut engine = seeded_engine();
        let response = engine.respond(&ChatRequest::new("Tell me a joke")).await;

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["query_type"], "external");
        assert!(response.summary().contains("outside my oceanography expertise"));
    }

    #[tokio::test]
    async fn pressure_prompt_takes_intelligent_branch() {
        let mut engine = seeded_engine();
        let response = engine
            .respond(&ChatRequest::new("How strong is the water pressure here?"))
            .await;

        let ChatResponse::Intelligent { summary, .. } = response else {
            panic!("expected intelligent branch");
        };
        assert!(summary.starts_with("**Water Pressure Analysis"));
    }

    #[tokio::test]
    async fn deep_temperature_prompt_takes_general_branch() {
        let mut engine = seeded_engine();
        let response = engine
            .respond(&ChatRequest::new("Show deep water temperature stats"))
            .await;

        let ChatResponse::General {
            stats,
            show_visualizations,
            chart,
            issues,
            probabilities,
            ..
        } = response
        else {
            panic!("expected general branch");
        };
        let stats = stats.unwrap();
        // Only the four deep southern records pass the min-depth filter.
        assert_eq!(stats.data_points, 4);
        assert_eq!(stats.total_records, 16);
        assert!(show_visualizations);
        // The null renderer never produces a payload.
        assert!(chart.is_none());
        assert!(probabilities.is_some());
        // Four records is sparse.
        assert!(issues.iter().any(|i| i.value == 4.0));
    }

    #[tokio::test]
    async fn empty_subset_yields_no_data_payload() {
        let mut engine = ChatEngine::new(Dataset::default());
        let response = engine
            .respond(&ChatRequest::new("surface temperature trends"))
            .await;

        let ChatResponse::General { summary, stats, show_visualizations, .. } = response else {
            panic!("expected general branch");
        };
        assert!(summary.starts_with("No ARGO data available"));
        assert!(stats.is_none());
        assert!(!show_visualizations);
    }

    #[test]
    fn attached_predictor_is_reachable() {
        let model = TempModel {
            weights: [0.0, 0.0, -0.01],
            intercept: 20.0,
        };
        let engine = seeded_engine().with_predictor(model);
        let predicted = engine.predictor().unwrap().predict(0.0, 0.0, 1000.0);
        assert_eq!(predicted, 10.0);
    }

    #[tokio::test]
    async fn history_is_capped_at_ten_turns() {
        let mut engine = seeded_engine();
        let mut last = None;
        for _ in 0..7 {
            last = Some(
                engine
                    .respond(&ChatRequest::new("deep water temperature"))
                    .await,
            );
        }
        let ChatResponse::General { conversation_history, .. } = last.unwrap() else {
            panic!("expected general branch");
        };
        assert_eq!(conversation_history.len(), 10);
        assert_eq!(conversation_history.last().unwrap().role, Role::Assistant);
    }
}
