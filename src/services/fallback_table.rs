use std::collections::HashMap;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::failure_tag::FailureTag;
use crate::structs::analysis_result::AnalysisResult;

/// Text a placeholder is filled with.
pub struct FallbackNotice<'a> {
    pub error: &'a str,
    pub action: &'a str,
}

type PlaceholderBuilder = fn(&FallbackNotice) -> Value;

/// Kind → placeholder shaped like that kind's success schema. Adding a kind
/// means adding a row here.
static FALLBACK_TABLE: Lazy<HashMap<AnalysisKind, PlaceholderBuilder>> = Lazy::new(|| {
    let mut table: HashMap<AnalysisKind, PlaceholderBuilder> = HashMap::new();
    table.insert(AnalysisKind::Architecture, architecture_placeholder);
    table.insert(AnalysisKind::MindMap, mind_map_placeholder);
    table.insert(AnalysisKind::CodeQuality, code_quality_placeholder);
    table.insert(AnalysisKind::Security, security_placeholder);
    table.insert(AnalysisKind::Performance, performance_placeholder);
    table
});

pub struct FallbackTable;

impl FallbackTable {
    /// `detail` is the underlying error text, recorded in the descriptor.
    pub fn result_for(kind: AnalysisKind, tag: FailureTag, detail: &str) -> AnalysisResult {
        let notice = FallbackNotice {
            error: tag.error_message(),
            action: tag.remediation(),
        };
        let message = if detail.is_empty() { tag.error_message().to_string() } else { detail.to_string() };
        AnalysisResult::failure(tag, message, Self::placeholder(kind, &notice))
    }

    pub fn placeholder(kind: AnalysisKind, notice: &FallbackNotice) -> Map<String, Value> {
        match FALLBACK_TABLE.get(&kind).map(|build| build(notice)) {
            Some(Value::Object(payload)) => payload,
            _ => Map::new(),
        }
    }
}

fn architecture_placeholder(notice: &FallbackNotice) -> Value {
    json!({
        "architecture_summary": format!("Unable to analyze architecture: {}", notice.error),
        "execution_flow": [{
            "step": 1,
            "description": "Analysis unavailable due to API issues",
            "files_involved": ["N/A"],
            "purpose": "Please check API configuration"
        }],
        "main_components": [{
            "name": "API Configuration",
            "purpose": "Ensure proper API key setup",
            "location": ".env file",
            "dependencies": ["Valid Gemini API key"]
        }],
        "entry_points": [notice.action],
        "data_flow": "Analysis unavailable - check API setup",
        "key_insights": [format!("Action required: {}", notice.action)],
        "complexity_level": "UNKNOWN"
    })
}

fn mind_map_placeholder(notice: &FallbackNotice) -> Value {
    json!({
        "mind_map_overview": format!("Unable to generate mind map: {}", notice.error),
        "main_categories": [{
            "category": "Setup Required",
            "description": "API configuration needed",
            "subcategories": [{
                "name": "API Keys",
                "files": [".env"],
                "purpose": "Configure Gemini API keys"
            }],
            "importance": "HIGH"
        }],
        "core_features": ["API Key Management"],
        "file_relationships": [{
            "from": "User",
            "to": "API Configuration",
            "relationship": "Setup required"
        }],
        "visual_structure": "Configure API keys to enable analysis",
        "key_insights": [format!("Next step: {}", notice.action)]
    })
}

fn code_quality_placeholder(notice: &FallbackNotice) -> Value {
    json!({
        "quality_overview": format!("Unable to analyze code quality: {}", notice.error),
        "quality_score": "0/10 - API configuration required",
        "strengths": ["Error handling is working correctly"],
        "areas_for_improvement": [{
            "area": "API Configuration",
            "current_state": "API keys not configured or quota exceeded",
            "recommendation": notice.action,
            "priority": "HIGH"
        }],
        "code_organization": "Analysis unavailable",
        "readability": "Analysis unavailable",
        "documentation_status": "Analysis unavailable",
        "testing_coverage": "Analysis unavailable",
        "maintainability": "Analysis unavailable",
        "immediate_improvements": [notice.action]
    })
}

fn security_placeholder(notice: &FallbackNotice) -> Value {
    json!({
        "security_overview": format!("Unable to perform security analysis: {}", notice.error),
        "critical_issues": [{
            "issue": "API Configuration Issue",
            "severity": "HIGH",
            "impact": "Security analysis unavailable",
            "fix": notice.action
        }],
        "security_strengths": ["Error handling prevents crashes"],
        "authentication_status": "Analysis unavailable",
        "data_protection": "Analysis unavailable",
        "immediate_actions": [notice.action],
        "overall_risk": "UNKNOWN",
        "security_score": "0/10 - API setup required"
    })
}

fn performance_placeholder(notice: &FallbackNotice) -> Value {
    json!({
        "performance_overview": format!("Unable to analyze performance: {}", notice.error),
        "performance_score": "0/10 - API configuration required",
        "bottlenecks": [{
            "issue": "API Configuration",
            "impact": "Performance analysis unavailable",
            "location": "API setup",
            "solution": notice.action
        }],
        "optimization_opportunities": [{
            "area": "API Setup",
            "potential_gain": "Enable all analysis features",
            "effort": "LOW",
            "recommendation": notice.action
        }],
        "scalability": "Analysis unavailable",
        "resource_efficiency": "Analysis unavailable",
        "caching_strategies": "Analysis unavailable",
        "database_performance": "Analysis unavailable",
        "monitoring_suggestions": [notice.action],
        "quick_wins": [notice.action]
    })
}
