use async_trait::async_trait;

use omnirepute_core::{
    ComplaintResponse, DataSource, ImprovementStrategy, MentionRow, ReputationReport,
};

use crate::error::GeneratorError;
use crate::ReportGenerator;

/// Fallback/demo generator used when no model credential is configured.
///
/// Shapes a report deterministically from the sample size, brand name, and
/// source only — mention content is never inspected. Never fails.
pub struct SyntheticGenerator;

impl SyntheticGenerator {
    /// Score in [60, 100], scaling with how large the sample was. A full
    /// 700-row sample maps to 100.
    fn score_for(sample_size: usize) -> u8 {
        let capped = sample_size.min(700);
        u8::try_from(60 + capped * 40 / 700).unwrap_or(100)
    }
}

#[async_trait]
impl ReportGenerator for SyntheticGenerator {
    async fn generate(
        &self,
        brand_name: &str,
        source: DataSource,
        mentions: &[MentionRow],
    ) -> Result<ReputationReport, GeneratorError> {
        let count = mentions.len();

        Ok(ReputationReport {
            reputation_score: Self::score_for(count),
            score_rationale: format!(
                "Based on {count} mentions from {source}, {brand_name} shows a generally \
                 positive reputation with room for improvement."
            ),
            key_insights: vec![
                format!("{brand_name} is frequently mentioned in discussions about innovation"),
                "Users appreciate the company's forward-thinking approach".to_string(),
                "Some concerns about market volatility and competition".to_string(),
                "Strong brand recognition across multiple platforms".to_string(),
            ],
            improvement_strategies: vec![
                ImprovementStrategy {
                    title: "Enhance Customer Communication".to_string(),
                    description: "Improve transparency and regular updates to stakeholders"
                        .to_string(),
                },
                ImprovementStrategy {
                    title: "Strengthen Market Position".to_string(),
                    description:
                        "Focus on competitive advantages and unique value propositions".to_string(),
                },
            ],
            what_users_love: vec![
                "Innovation and technological advancement".to_string(),
                "Visionary leadership".to_string(),
                "Market disruption capabilities".to_string(),
            ],
            what_users_hate: vec![
                "Market volatility concerns".to_string(),
                "Communication gaps during changes".to_string(),
                "Competition from established players".to_string(),
            ],
            complaint_responses: vec![
                ComplaintResponse {
                    complaint: "Market volatility concerns".to_string(),
                    suggested_response:
                        "We understand concerns about market fluctuations. Our long-term vision \
                         remains focused on sustainable growth and innovation."
                            .to_string(),
                },
                ComplaintResponse {
                    complaint: "Communication gaps".to_string(),
                    suggested_response:
                        "Thank you for the feedback. We're committed to improving our \
                         communication channels and providing more regular updates."
                            .to_string(),
                },
            ],
        })
    }
}
