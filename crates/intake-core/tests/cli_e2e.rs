//! End-to-end tests for the intake binary.
//!
//! Each test runs the real binary with lexicon lookup confined to a
//! temporary directory, so the built-in lexicon is used unless a test
//! supplies its own.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Get a Command for the intake binary with an isolated environment.
fn intake(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("intake").expect("intake binary should exist");
    cmd.env_remove("CASE_INTAKE_LEXICON")
        .env_remove("CASE_INTAKE_LOG")
        .env_remove("CASE_INTAKE_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .env("CASE_INTAKE_CONFIG_DIR", home.path().join("intake"))
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_lexicon(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// redact
// ============================================================================

mod redact {
    use super::*;

    #[test]
    fn full_name_and_date_from_stdin() {
        let home = TempDir::new().unwrap();
        let output = intake(&home)
            .arg("redact")
            .write_stdin("Ion Popescu a semnat contractul pe 15.03.2023.")
            .assert()
            .code(1)
            .get_output()
            .clone();

        let value = stdout_json(&output);
        assert_eq!(value["sanitizedText"], "[NUME] a semnat contractul pe [DATĂ].");
        assert_eq!(value["extractedItems"][0], "15.03.2023");
        assert_eq!(value["extractedItems"][1], "Ion Popescu");
        assert_eq!(value["urgency"], "LOW");
    }

    #[test]
    fn email_from_file() {
        let home = TempDir::new().unwrap();
        let file = home.path().join("narrative.txt");
        std::fs::write(&file, "Contact me at jane.doe@example.com regarding the case.").unwrap();

        let output = intake(&home)
            .arg("redact")
            .arg(&file)
            .assert()
            .code(1)
            .get_output()
            .clone();

        let value = stdout_json(&output);
        assert_eq!(value["sanitizedText"], "Contact me at [EMAIL] regarding the case.");
        assert_eq!(value["extractedItems"], serde_json::json!(["jane.doe@example.com"]));
    }

    #[test]
    fn dash_reads_stdin() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["redact", "-"])
            .write_stdin("Suma datorată este 500 lei.")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[SUMĂ]"));
    }

    #[test]
    fn clean_narrative_exits_zero() {
        let home = TempDir::new().unwrap();
        let text = "bună ziua, am o întrebare despre o chirie.";
        let output = intake(&home)
            .arg("redact")
            .write_stdin(text)
            .assert()
            .code(0)
            .get_output()
            .clone();

        let value = stdout_json(&output);
        assert_eq!(value["extractedItems"], serde_json::json!([]));
        assert_eq!(value["sanitizedText"], text);
        assert_eq!(value["urgency"], "LOW");
    }

    #[test]
    fn organization_is_not_a_name() {
        let home = TempDir::new().unwrap();
        let output = intake(&home)
            .arg("redact")
            .write_stdin("Popescu SRL a refuzat plata.")
            .assert()
            .code(1)
            .get_output()
            .clone();

        let value = stdout_json(&output);
        assert_eq!(value["extractedItems"], serde_json::json!(["Popescu SRL"]));
        assert_eq!(value["sanitizedText"], "[ORGANIZAȚIE] a refuzat plata.");
    }

    #[test]
    fn summary_format() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["redact", "-f", "summary"])
            .write_stdin("Suma datorată este 500 lei.")
            .assert()
            .code(1)
            .stdout("urgency=LOW items=1 chars=26\n");
    }

    #[test]
    fn md_format() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["redact", "--format", "md"])
            .write_stdin("Vă rog ajutați urgent, scrieți la ana@firma.ro")
            .assert()
            .code(1)
            .stdout(
                predicate::str::contains("# Redaction")
                    .and(predicate::str::contains("**Urgency:** HIGH"))
                    .and(predicate::str::contains("- `ana@firma.ro`")),
            );
    }
}

// ============================================================================
// urgency / concepts
// ============================================================================

mod secondary {
    use super::*;

    #[test]
    fn urgent_keyword_is_high() {
        let home = TempDir::new().unwrap();
        let output = intake(&home)
            .arg("urgency")
            .write_stdin("Vă rog ajutați urgent, este o urgență!")
            .assert()
            .code(0)
            .get_output()
            .clone();
        assert_eq!(stdout_json(&output)["urgency"], "HIGH");
    }

    #[test]
    fn urgency_summary_is_bare_level() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["urgency", "-f", "summary"])
            .write_stdin("am primit o somație de plată")
            .assert()
            .code(0)
            .stdout("MEDIUM\n");
    }

    #[test]
    fn concepts_in_lexicon_order() {
        let home = TempDir::new().unwrap();
        let output = intake(&home)
            .arg("concepts")
            .write_stdin("Am un litigiu privind custodie și partaj.")
            .assert()
            .code(0)
            .get_output()
            .clone();
        assert_eq!(
            stdout_json(&output)["concepts"],
            serde_json::json!(["custodie", "partaj", "litigiu"])
        );
    }

    #[test]
    fn concepts_none_summary() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["concepts", "--format", "summary"])
            .write_stdin("nimic relevant aici")
            .assert()
            .code(0)
            .stdout("(none)\n");
    }
}

// ============================================================================
// lexicon resolution
// ============================================================================

mod lexicon {
    use super::*;

    #[test]
    fn check_reports_builtin_default() {
        let home = TempDir::new().unwrap();
        let output = intake(&home).arg("check").assert().code(0).get_output().clone();

        let value = stdout_json(&output);
        assert_eq!(value["status"], "ok");
        assert_eq!(value["lexicon"]["source"], "builtin default");
        assert!(value["lexicon"]["path"].is_null());
        assert_eq!(value["lexicon"]["hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn check_reports_cli_path() {
        let home = TempDir::new().unwrap();
        let path = write_lexicon(&home, "custom.json", r#"{"urgent_keywords": ["incendiu"]}"#);

        let output = intake(&home)
            .arg("check")
            .arg("--lexicon")
            .arg(&path)
            .assert()
            .code(0)
            .get_output()
            .clone();

        let value = stdout_json(&output);
        assert_eq!(value["lexicon"]["source"], "CLI argument");
        assert_eq!(value["lexicon"]["counts"]["urgent_keywords"], 1);
    }

    #[test]
    fn env_lexicon_is_used() {
        let home = TempDir::new().unwrap();
        let path = write_lexicon(&home, "env.json", r#"{"urgent_keywords": ["incendiu"]}"#);

        let output = intake(&home)
            .env("CASE_INTAKE_LEXICON", &path)
            .arg("urgency")
            .write_stdin("a fost un incendiu")
            .assert()
            .code(0)
            .get_output()
            .clone();
        assert_eq!(stdout_json(&output)["urgency"], "HIGH");
    }

    #[test]
    fn config_dir_lexicon_is_used() {
        let home = TempDir::new().unwrap();
        std::fs::create_dir_all(home.path().join("intake")).unwrap();
        std::fs::write(
            home.path().join("intake").join("lexicon.json"),
            r#"{"common_terms": ["popescu"]}"#,
        )
        .unwrap();

        let output = intake(&home)
            .arg("redact")
            .write_stdin("am vorbit cu Popescu")
            .assert()
            .code(0)
            .get_output()
            .clone();
        assert_eq!(stdout_json(&output)["sanitizedText"], "am vorbit cu Popescu");
    }

    #[test]
    fn custom_common_terms_change_names() {
        let home = TempDir::new().unwrap();
        let path = write_lexicon(&home, "lex.json", r#"{"common_terms": ["popescu"]}"#);

        intake(&home)
            .arg("--lexicon")
            .arg(&path)
            .arg("redact")
            .write_stdin("am vorbit cu Popescu")
            .assert()
            .code(0);

        intake(&home)
            .arg("redact")
            .write_stdin("am vorbit cu Popescu")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("am vorbit cu [NUME]"));
    }
}

// ============================================================================
// logging
// ============================================================================

mod logging {
    use super::*;

    #[test]
    fn logs_go_to_stderr() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .arg("redact")
            .write_stdin("Suma datorată este 500 lei.")
            .assert()
            .stderr(predicate::str::contains("narrative redacted"))
            .stdout(predicate::str::contains("narrative redacted").not());
    }

    #[test]
    fn quiet_suppresses_info() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["-q", "redact"])
            .write_stdin("Suma datorată este 500 lei.")
            .assert()
            .code(1)
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn jsonl_log_format() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .env("CASE_INTAKE_LOG_FORMAT", "jsonl")
            .arg("redact")
            .write_stdin("Suma datorată este 500 lei.")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("\"message\":\"narrative redacted\""));
    }

    #[test]
    fn trace_logs_never_contain_narrative_spans() {
        let home = TempDir::new().unwrap();
        intake(&home)
            .args(["-vv", "redact"])
            .write_stdin("Ion Popescu a semnat contractul pe 15.03.2023, ion@exemplu.ro.")
            .assert()
            .code(1)
            .stderr(
                predicate::str::contains("stage complete")
                    .and(predicate::str::contains("Popescu").not())
                    .and(predicate::str::contains("15.03.2023").not())
                    .and(predicate::str::contains("ion@exemplu.ro").not()),
            );
    }
}

// ============================================================================
// version
// ============================================================================

#[test]
fn version_json() {
    let home = TempDir::new().unwrap();
    let output = intake(&home).arg("version").assert().code(0).get_output().clone();
    let value = stdout_json(&output);
    assert_eq!(value["intake_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["lexicon_schema_version"], "1.0.0");
}

#[test]
fn version_human() {
    let home = TempDir::new().unwrap();
    intake(&home)
        .args(["version", "-f", "summary"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("intake "));
}

#[cfg(feature = "categorize")]
#[test]
fn categorize_timeout_defaults_to_client_timeout() {
    let home = TempDir::new().unwrap();
    intake(&home)
        .args(["categorize", "--help"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[default: 10]"));
}
