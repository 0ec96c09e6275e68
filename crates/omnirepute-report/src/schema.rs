use serde_json::{json, Value};

/// Structured-output schema sent with every model call, mirroring
/// `ReputationReport` exactly: same field names, types, and required list.
/// The model may not omit or rename anything the UI renders.
pub(crate) fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "reputationScore": {
                "type": "INTEGER",
                "description": "Overall reputation score, 0 worst to 100 best."
            },
            "scoreRationale": {
                "type": "STRING",
                "description": "One sentence explaining the score, referencing the data source."
            },
            "keyInsights": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "minItems": 3,
                "maxItems": 5
            },
            "improvementStrategies": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["title", "description"]
                }
            },
            "whatUsersLove": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "whatUsersHate": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "complaintResponses": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "complaint": { "type": "STRING" },
                        "suggestedResponse": { "type": "STRING" }
                    },
                    "required": ["complaint", "suggestedResponse"]
                }
            }
        },
        "required": [
            "reputationScore",
            "scoreRationale",
            "keyInsights",
            "improvementStrategies",
            "whatUsersLove",
            "whatUsersHate",
            "complaintResponses"
        ]
    })
}
