/// Scenario fixture loader
///
/// Fixtures live in `scenario_data.json` and follow the shape of the WPT
/// `urltestdata.json` and `setters_tests.json` files: bare strings are
/// section comments, objects are cases, and every expected accessor is
/// optional.
use fluent_url::{Field, FieldValue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub parsing: Vec<ParseCase>,
    pub setters: Vec<SetterCase>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ParseCase {
    Case {
        #[serde(default)]
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
        #[serde(flatten)]
        expected: Expected,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct SetterCase {
    #[serde(default)]
    #[allow(dead_code)]
    pub comment: Option<String>,
    pub href: String,
    pub setter: String,
    pub new_value: String,
    pub expected: Expected,
}

/// Accessor values a case expects. Missing entries are not checked.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expected {
    pub href: Option<String>,
    pub is_relative: Option<bool>,
    pub protocol: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
    pub hash_path: Option<String>,
    pub origin: Option<String>,
}

impl Expected {
    /// Every expectation present, as field/value pairs.
    pub fn checks(&self) -> Vec<(Field, FieldValue)> {
        let text = [
            (Field::Href, &self.href),
            (Field::Protocol, &self.protocol),
            (Field::Username, &self.username),
            (Field::Password, &self.password),
            (Field::Host, &self.host),
            (Field::Hostname, &self.hostname),
            (Field::Port, &self.port),
            (Field::Pathname, &self.pathname),
            (Field::Search, &self.search),
            (Field::Hash, &self.hash),
            (Field::HashPath, &self.hash_path),
            (Field::Origin, &self.origin),
        ];
        let mut checks: Vec<(Field, FieldValue)> = text
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, FieldValue::from(v))))
            .collect();
        if let Some(is_relative) = self.is_relative {
            checks.push((Field::IsRelative, FieldValue::Bool(is_relative)));
        }
        checks
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<ScenarioFailure>,
}

impl ScenarioResult {
    pub fn fail(&mut self, case_num: usize, input: &str, field: &str, expected: String, actual: String) {
        self.failed += 1;
        self.failures.push(ScenarioFailure {
            case_num,
            input: input.to_string(),
            field: field.to_string(),
            expected,
            actual,
        });
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("Passed: {}, Failed: {}", self.passed, self.failed);
        for failure in &self.failures {
            summary.push_str(&format!(
                "\n  #{} {:?} {}: expected {}, got {}",
                failure.case_num, failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        summary
    }
}

pub fn load() -> ScenarioFile {
    let data = include_str!("scenario_data.json");
    serde_json::from_str(data).expect("Failed to parse scenario data")
}

#[test]
fn test_load_scenarios() {
    let file = load();
    assert!(file.parsing.iter().any(|case| matches!(case, ParseCase::Comment(_))));
    assert!(file.setters.len() >= 10);
}

#[test]
fn test_checks_skip_missing() {
    let expected = Expected {
        href: Some("/".to_string()),
        is_relative: Some(true),
        ..Expected::default()
    };
    assert_eq!(
        expected.checks(),
        vec![
            (Field::Href, FieldValue::from("/")),
            (Field::IsRelative, FieldValue::Bool(true)),
        ]
    );
}
