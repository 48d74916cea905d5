use crate::constants::prompts::{
    ARCHITECTURE_PROMPT, CODE_QUALITY_PROMPT, MIND_MAP_PROMPT, PERFORMANCE_PROMPT, SECURITY_PROMPT,
};
use crate::enums::analysis_kind::AnalysisKind;
use crate::structs::repo_digest::RepoDigest;

pub fn template_for(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Architecture => ARCHITECTURE_PROMPT,
        AnalysisKind::MindMap => MIND_MAP_PROMPT,
        AnalysisKind::CodeQuality => CODE_QUALITY_PROMPT,
        AnalysisKind::Security => SECURITY_PROMPT,
        AnalysisKind::Performance => PERFORMANCE_PROMPT,
    }
}

pub fn generate_prompt(kind: AnalysisKind, digest: &RepoDigest, contents_chars: usize) -> String {
    let contents = serde_json::to_string(&digest.file_contents).unwrap_or_default();
    let file_tree = digest.file_tree_text();
    let readme = if digest.readme.trim().is_empty() { "(none)" } else { digest.readme.as_str() };

    render_template(template_for(kind), &[
        ("file_tree", file_tree.as_str()),
        ("file_contents", truncate_chars(&contents, contents_chars)),
        ("readme", readme),
    ])
}

/// Single-pass `{{name}}` substitution; substituted text is never re-scanned.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match values.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => rendered.push_str(value),
                    None => {
                        rendered.push_str("{{");
                        rendered.push_str(name);
                        rendered.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                rendered.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn digest() -> RepoDigest {
        RepoDigest {
            file_tree: vec!["README.md".into(), "src/app.py".into()],
            file_contents: BTreeMap::from([("src/app.py".to_string(), "print('hi')".to_string())]),
            readme: String::new(),
        }
    }

    #[test]
    fn prompt_embeds_digest_and_placeholder_readme() {
        let prompt = generate_prompt(AnalysisKind::Security, &digest(), 3000);
        assert!(prompt.contains("README.md\nsrc/app.py"));
        assert!(prompt.contains("print('hi')"));
        assert!(prompt.contains("README: (none)"));
        assert!(prompt.contains("\"security_overview\""));
    }

    #[test]
    fn contents_are_truncated_to_the_cap() {
        let mut digest = digest();
        digest.file_contents.insert("big.js".into(), "x".repeat(10_000));
        let prompt = generate_prompt(AnalysisKind::Performance, &digest, 100);
        assert!(!prompt.contains(&"x".repeat(200)));
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let out = render_template("{{a}}-{{b}}", &[("a", "{{b}}"), ("b", "B")]);
        assert_eq!(out, "{{b}}-B");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
