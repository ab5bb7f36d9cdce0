use super::fixture_loader::{FixtureCase, FixtureFailure, FixtureResult, Operation, load_fixtures};
/// Rendering fixture runner
///
/// Runs every fixture case against a freshly configured renderer
use urlrender::{Deployment, RenderError, Renderer, Url};

fn render(
    renderer: &Renderer,
    operation: Operation,
    input: Option<&str>,
    context_relative: bool,
) -> Result<String, RenderError> {
    if operation == Operation::RenderContextRelativeUrl {
        return renderer.render_context_relative_url(input);
    }

    let input = input.ok_or(RenderError::InvalidArgument("input"))?;
    let target = Url::parse(input)?.with_context_relative(context_relative);
    Ok(match operation {
        Operation::RenderUrl => renderer.render_url(&target),
        Operation::RenderRelativeUrl => renderer.render_relative_url(&target),
        Operation::RenderFullUrl => renderer.render_full_url(&target),
        Operation::RenderContextRelativeUrl => unreachable!(),
    })
}

/// Run fixture cases and return results
pub fn run_fixtures(cases: Vec<FixtureCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut case_num = 0;

    for case in cases {
        let FixtureCase::Render {
            operation,
            base,
            context_path,
            filter_path,
            input,
            context_relative,
            expected,
            failure,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let base_url = Url::parse(&base).expect("fixture base URL parses");
        let renderer =
            Renderer::with_deployment(base_url, Deployment::new(&context_path, &filter_path));
        let rendered = render(&renderer, operation, input.as_deref(), context_relative);

        let (expected, actual) = match (rendered, failure) {
            (Err(_), true) => {
                result.passed += 1;
                continue;
            }
            (Ok(actual), true) => ("an error".to_string(), actual),
            (Ok(actual), false) => {
                let expected = expected.unwrap_or_default();
                if actual == expected {
                    result.passed += 1;
                    continue;
                }
                (expected, actual)
            }
            (Err(err), false) => (expected.unwrap_or_default(), err.to_string()),
        };

        result.failures.push(FixtureFailure {
            case_num,
            operation,
            base,
            input,
            expected,
            actual,
        });
    }

    result
}

#[test]
fn test_render_fixtures() {
    let data = include_str!("render_cases.json");
    let result = run_fixtures(load_fixtures(data));

    for failure in &result.failures {
        eprintln!(
            "case {} ({:?}): base {:?}, input {:?}: expected {:?}, got {:?}",
            failure.case_num,
            failure.operation,
            failure.base,
            failure.input,
            failure.expected,
            failure.actual
        );
    }
    assert!(result.failures.is_empty(), "{}", result.summary());
    assert!(result.passed > 0);
}
