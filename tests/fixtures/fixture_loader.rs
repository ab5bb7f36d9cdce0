/// Rendering fixture loader
///
/// Fixtures are a JSON array of rendering cases, with plain strings as
/// section comments (the layout of the WPT URL test data).
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    RenderUrl,
    RenderRelativeUrl,
    RenderContextRelativeUrl,
    RenderFullUrl,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum FixtureCase {
    /// A rendering case
    Render {
        operation: Operation,
        base: String,
        #[serde(default)]
        context_path: String,
        #[serde(default)]
        filter_path: String,
        input: Option<String>,
        /// Mark the parsed target as relative to the context root
        #[serde(default)]
        context_relative: bool,
        #[serde(default)]
        expected: Option<String>,
        #[serde(default)]
        failure: bool,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub operation: Operation,
    pub base: String,
    pub input: Option<String>,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failures.len())
    }
}

pub fn load_fixtures(data: &str) -> Vec<FixtureCase> {
    serde_json::from_str(data).expect("fixture file is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_comment_and_case() {
        let cases = load_fixtures(
            r#"["section", {"operation": "render_url", "base": "a", "input": "", "expected": "."}]"#,
        );
        assert_eq!(cases.len(), 2);
        assert!(matches!(cases[0], FixtureCase::Comment(_)));
        match &cases[1] {
            FixtureCase::Render {
                operation,
                context_path,
                context_relative,
                failure,
                ..
            } => {
                assert_eq!(*operation, Operation::RenderUrl);
                assert!(context_path.is_empty());
                assert!(!context_relative);
                assert!(!failure);
            }
            FixtureCase::Comment(_) => panic!("expected a rendering case"),
        }
    }
}
