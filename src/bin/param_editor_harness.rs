use std::fs;
use std::path::PathBuf;

use param_editor::api::{ChangeCheck, ChangeExpectation, EditEvent, ParamEditor, ParamEditorConfig};
use param_editor::render::NullRenderer;
use param_editor::telemetry::init_default_tracing;

struct CliArgs {
    config_path: PathBuf,
    expectation: ChangeExpectation,
    edits: Vec<EditEvent>,
}

const EXIT_PASS: i32 = 0;
const EXIT_CHECK_FAILED: i32 = 2;
const EXIT_ERROR: i32 = 1;

fn main() {
    let _ = init_default_tracing();
    let result = run();
    if let Err(err) = &result {
        eprintln!("error: {err}");
    }
    std::process::exit(exit_code(&result));
}

fn exit_code(result: &Result<bool, String>) -> i32 {
    match result {
        Ok(true) => EXIT_PASS,
        Ok(false) => EXIT_CHECK_FAILED,
        Err(_) => EXIT_ERROR,
    }
}

fn run() -> Result<bool, String> {
    let args = parse_args(std::env::args().skip(1))?;
    let raw = fs::read_to_string(&args.config_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.config_path.display()))?;
    let config = ParamEditorConfig::from_json_str(&raw).map_err(|err| err.to_string())?;
    let mut editor =
        ParamEditor::from_config(NullRenderer::default(), config).map_err(|err| err.to_string())?;

    let before = editor.get_model();
    let check = ChangeCheck::new("edit session", args.expectation, before.clone());

    for edit in args.edits {
        editor.handle_edit(edit);
    }
    editor.render().map_err(|err| err.to_string())?;

    let after = editor.get_model();
    println!(
        "before:\n{}",
        before.to_json_pretty().map_err(|err| err.to_string())?
    );
    println!(
        "after:\n{}",
        after.to_json_pretty().map_err(|err| err.to_string())?
    );

    let report = check.evaluate(&after);
    println!("{}", report.banner());
    Ok(report.outcome.is_pass())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut expectation = ChangeExpectation::ExpectChange;
    let mut edits = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--expect" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --expect".to_owned())?;
                expectation = match value.as_str() {
                    "changed" => ChangeExpectation::ExpectChange,
                    "unchanged" => ChangeExpectation::ExpectUnchanged,
                    other => return Err(format!("unknown expectation `{other}`")),
                };
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin param_editor_harness -- --config <path> [--expect changed|unchanged] [<id>=<value> ...]"
                );
                std::process::exit(0);
            }
            _ => edits.push(parse_edit(&arg)?),
        }
    }

    Ok(CliArgs {
        config_path: config_path.ok_or_else(|| "missing --config <path>".to_owned())?,
        expectation,
        edits,
    })
}

fn parse_edit(arg: &str) -> Result<EditEvent, String> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("unknown argument `{arg}`"))?;
    let param_id = id
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid parameter id `{id}`: {err}"))?;
    Ok(EditEvent::new(param_id, value))
}

#[cfg(test)]
mod tests {
    use super::{EXIT_CHECK_FAILED, EXIT_ERROR, EXIT_PASS, exit_code, parse_args, parse_edit};
    use param_editor::api::{ChangeExpectation, EditEvent};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn edit_splits_on_first_equals_sign() {
        let edit = parse_edit("3=a=b").expect("valid edit");
        assert_eq!(edit, EditEvent::new(3, "a=b"));
    }

    #[test]
    fn edit_accepts_empty_value_and_padded_id() {
        assert_eq!(parse_edit(" 7 =").expect("valid edit"), EditEvent::new(7, ""));
        assert_eq!(parse_edit("-2=x").expect("valid edit"), EditEvent::new(-2, "x"));
    }

    #[test]
    fn edit_rejects_non_numeric_id_and_missing_equals() {
        let err = parse_edit("abc=1").expect_err("non-numeric id");
        assert!(err.contains("invalid parameter id `abc`"));

        let err = parse_edit("--verbose").expect_err("not an edit");
        assert!(err.contains("unknown argument `--verbose`"));
    }

    #[test]
    fn args_collect_config_expectation_and_edits() {
        let parsed = parse_args(args(&[
            "1=вечернее",
            "--config",
            "form.json",
            "--expect",
            "unchanged",
            "3=хлопок",
        ]))
        .expect("valid args");

        assert_eq!(parsed.config_path.to_str(), Some("form.json"));
        assert_eq!(parsed.expectation, ChangeExpectation::ExpectUnchanged);
        assert_eq!(
            parsed.edits,
            vec![EditEvent::new(1, "вечернее"), EditEvent::new(3, "хлопок")]
        );
    }

    #[test]
    fn args_default_to_expect_change() {
        let parsed = parse_args(args(&["--config", "form.json"])).expect("valid args");
        assert_eq!(parsed.expectation, ChangeExpectation::ExpectChange);
        assert!(parsed.edits.is_empty());
    }

    #[test]
    fn args_require_config_and_known_expectation() {
        let err = parse_args(args(&["1=a"])).err().expect("missing config");
        assert!(err.contains("missing --config"));

        let err = parse_args(args(&["--config", "f.json", "--expect", "maybe"]))
            .err()
            .expect("bad expectation");
        assert!(err.contains("unknown expectation `maybe`"));

        let err = parse_args(args(&["--config"])).err().expect("missing value");
        assert!(err.contains("missing value for --config"));
    }

    #[test]
    fn exit_codes_distinguish_pass_fail_and_error() {
        assert_eq!(exit_code(&Ok(true)), EXIT_PASS);
        assert_eq!(exit_code(&Ok(false)), EXIT_CHECK_FAILED);
        assert_eq!(exit_code(&Err("boom".to_owned())), EXIT_ERROR);
        assert_eq!((EXIT_PASS, EXIT_CHECK_FAILED, EXIT_ERROR), (0, 2, 1));
    }
}
