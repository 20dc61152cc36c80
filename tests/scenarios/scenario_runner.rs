use super::scenario_loader::{Expected, ParseCase, ScenarioResult, SetterCase, load};
/// Scenario runner
///
/// Runs the parsing and setter fixtures against `FluentUrl` and collects
/// every mismatch before asserting.
use fluent_url::{Field, FieldValue, FluentUrl};

const AUTHORITY_FIELDS: [Field; 7] = [
    Field::Protocol,
    Field::Username,
    Field::Password,
    Field::Host,
    Field::Hostname,
    Field::Port,
    Field::Origin,
];

fn check(result: &mut ScenarioResult, case_num: usize, input: &str, url: &FluentUrl, expected: &Expected) {
    let mut ok = true;
    for (field, value) in expected.checks() {
        let actual = url.get_field(field);
        if actual != value {
            ok = false;
            result.fail(case_num, input, field.name(), format!("{value:?}"), format!("{actual:?}"));
        }
    }

    // A relative reference never exposes its authority, promoted or not.
    if expected.is_relative == Some(true) {
        for field in AUTHORITY_FIELDS {
            let actual = url.get_field(field);
            if !actual.is_absent() {
                ok = false;
                result.fail(case_num, input, field.name(), "Absent".to_string(), format!("{actual:?}"));
            }
        }
    }

    if ok {
        result.passed += 1;
    }
}

pub fn run_parse_cases(cases: Vec<ParseCase>) -> ScenarioResult {
    let mut result = ScenarioResult::default();
    let mut case_num = 0;

    for case in cases {
        let ParseCase::Case {
            input,
            base,
            failure,
            expected,
        } = case
        else {
            continue;
        };
        case_num += 1;

        match (FluentUrl::parse(&input, base.as_deref()), failure == Some(true)) {
            (Ok(url), true) => {
                result.fail(case_num, &input, "parsing", "failure".to_string(), url.href());
            }
            (Err(_), true) => result.passed += 1,
            (Err(err), false) => {
                result.fail(case_num, &input, "parsing", "success".to_string(), err.to_string());
            }
            (Ok(url), false) => check(&mut result, case_num, &input, &url, &expected),
        }
    }

    result
}

pub fn run_setter_cases(cases: Vec<SetterCase>) -> ScenarioResult {
    let mut result = ScenarioResult::default();

    for (index, case) in cases.into_iter().enumerate() {
        let case_num = index + 1;
        let Some(field) = Field::from_name(&case.setter) else {
            result.fail(case_num, &case.href, &case.setter, "a field".to_string(), "unknown".to_string());
            continue;
        };
        let mut url = match FluentUrl::parse(&case.href, None) {
            Ok(url) => url,
            Err(err) => {
                result.fail(case_num, &case.href, "parsing", "success".to_string(), err.to_string());
                continue;
            }
        };
        if let Err(err) = url.set_field(field, &FieldValue::from(case.new_value.as_str())) {
            result.fail(case_num, &case.href, field.name(), "success".to_string(), err.to_string());
            continue;
        }
        check(&mut result, case_num, &case.href, &url, &case.expected);
    }

    result
}

#[test]
fn test_parse_scenarios() {
    let result = run_parse_cases(load().parsing);
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed >= 11);
}

#[test]
fn test_setter_scenarios() {
    let result = run_setter_cases(load().setters);
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed >= 14);
}
