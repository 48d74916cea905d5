use std::collections::BTreeMap;
use serde::Serialize;
use crate::enums::analysis_kind::AnalysisKind;
use crate::structs::analysis_result::AnalysisResult;

#[derive(Serialize, Debug, Clone)]
pub struct SummaryResponse {
    pub summary: Summary,
}

/// Either every kind's result or the one that was asked for.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Summary {
    All(BTreeMap<AnalysisKind, Option<AnalysisResult>>),
    Single(Option<AnalysisResult>),
}
