//! Behavioral specs for output formats, color and timing.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// JSON Lines
// =============================================================================

/// > JSON output is one object per query line.
#[test]
fn json_is_one_object_per_query() {
    let lines = cells().json();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["exact"], true);
    assert_eq!(lines[1]["exact"], false);
    assert_eq!(
        lines[1]["terms"],
        serde_json::json!(["CL_0000000", "CVCL_0031", "CVCL_0032"])
    );
    assert_eq!(lines[4]["query"], "zebrafish fin");
    assert_eq!(lines[4]["terms"], serde_json::json!([]));
}

/// > Each hit names the matched part, term, match type, label and synonym.
#[test]
fn json_hit_fields() {
    let lines = cells().json();

    assert_eq!(
        lines[2]["hits"],
        serde_json::json!([{
            "matched_part": "MCF7",
            "term_id": "CVCL_0031",
            "match_type": "exact_synonym",
            "term_label": "MCF-7",
            "matched_synonym": "MCF7",
        }])
    );
    assert_eq!(lines[0]["hits"][0]["matched_synonym"], serde_json::Value::Null);
}

// =============================================================================
// Text
// =============================================================================

/// > Text output lists each query with indented hits.
#[test]
fn text_output_layout() {
    cells()
        .format("text")
        .passes()
        .stdout_has("cell [exact]\n  CL_0000000  cell  label \"cell\"\n")
        .stdout_has("zebrafish fin\n  (no match)\n")
        .stdout_has("5 of 6 queries matched\n");
}

/// > Text output is uncolored when piped.
#[test]
fn text_output_uncolored_when_piped() {
    cells().format("text").passes().stdout_lacks("\x1b[");
}

/// > --color forces escapes even when piped.
#[test]
fn color_flag_forces_color() {
    cells()
        .format("text")
        .args(&["--color"])
        .passes()
        .stdout_has("\x1b[");
}

/// > COLOR env var forces escapes; NO_COLOR wins over it.
#[test]
fn color_env_vars() {
    cells()
        .format("text")
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[");

    cells()
        .format("text")
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

/// > TSV never carries color.
#[test]
fn tsv_ignores_color_flag() {
    cells().args(&["--color"]).passes().stdout_lacks("\x1b[");
}

// =============================================================================
// Timing and logging
// =============================================================================

/// > --timing reports phases on stderr, leaving stdout untouched.
#[test]
fn timing_goes_to_stderr() {
    let plain = cells().passes().stdout();

    cells()
        .args(&["--timing"])
        .passes()
        .stdout_eq(&plain)
        .stderr_has(predicates::str::is_match(r"(?m)^load: \d+ms$").unwrap())
        .stderr_has(predicates::str::is_match(r"(?m)^index: \d+ms$").unwrap())
        .stderr_has(predicates::str::is_match(r"(?m)^search: \d+ms$").unwrap())
        .stderr_has(predicates::str::is_match(r"(?m)^total: \d+ms$").unwrap())
        .stderr_has("queries: 5/6 matched");
}

/// > Logging is off unless ONTOMATCH_LOG enables it.
#[test]
fn logging_controlled_by_env() {
    cells().passes().stderr_lacks("Built term index");

    cells()
        .env("ONTOMATCH_LOG", "info")
        .passes()
        .stderr_has("Built term index");
}
