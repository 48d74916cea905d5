use serde::Serialize;
use serde_json::{Map, Value};
use crate::enums::failure_tag::FailureTag;

/// Outcome of one analysis kind. Serializes as the payload object either way,
/// so consumers see the same shape; a failure additionally carries an
/// `analysis_error` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Success(Map<String, Value>),
    Failure(AnalysisFailure),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisFailure {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub analysis_error: FailureDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDescriptor {
    pub tag: FailureTag,
    pub message: String,
}

impl AnalysisResult {
    pub fn failure(tag: FailureTag, message: String, payload: Map<String, Value>) -> Self {
        Self::Failure(AnalysisFailure {
            payload,
            analysis_error: FailureDescriptor { tag, message },
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure_tag(&self) -> Option<FailureTag> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.analysis_error.tag),
        }
    }

    pub fn payload(&self) -> &Map<String, Value> {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(failure) => &failure.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_serializes_with_payload_fields_inline() {
        let mut payload = Map::new();
        payload.insert("security_overview".into(), json!("unavailable"));
        let result = AnalysisResult::failure(FailureTag::QuotaExceeded, "quota".into(), payload);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["security_overview"], "unavailable");
        assert_eq!(value["analysis_error"]["tag"], "QUOTA_EXCEEDED");
        assert_eq!(result.failure_tag(), Some(FailureTag::QuotaExceeded));
    }

    #[test]
    fn success_serializes_as_plain_object() {
        let mut payload = Map::new();
        payload.insert("quality_score".into(), json!("8/10"));
        let value = serde_json::to_value(AnalysisResult::Success(payload)).unwrap();
        assert_eq!(value, json!({ "quality_score": "8/10" }));
    }
}
