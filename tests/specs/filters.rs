//! Behavioral specs for `-c PROPERTY:VALUE` inclusion conditions.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Terms failing a condition are never indexed, so no query can hit them.
#[test]
fn condition_excludes_terms_from_index() {
    cells()
        .condition("hasDbXref:NCBI_TaxID:9606")
        .passes()
        .stdout_eq(&format!(
            "{TSV_HEADER}\
             cell\t\t\t\t\t\n\
             MCF-7 cell\tMCF-7\tCVCL_0031\tlabel\tMCF-7\t\n\
             MCF-7 cell\tMCF\tCVCL_0032\tlabel\tMCF\t\n\
             MCF7\tMCF7\tCVCL_0031\texact_synonym\tMCF-7\tMCF7\n\
             mcf-7\tmcf-7\tCVCL_0031\tlowercase_synonym\tMCF-7\tmcf-7\n\
             zebrafish fin\t\t\t\t\t\n\
             HeLa\tHeLa\tCVCL_0030\tlabel\tHeLa\t\n"
        ));
}

/// > Value matching is by substring.
#[test]
fn condition_value_is_substring() {
    let lines = cells().condition("hasDbXref:10090").json();
    let terms: Vec<_> = lines.iter().map(|l| l["terms"].clone()).collect();

    // Only L-929 (mouse) survives; it answers "HeLa" through its synonym.
    assert_eq!(terms[5], serde_json::json!(["CVCL_0462"]));
    assert!(terms[..5].iter().all(|t| t == &serde_json::json!([])));
}

/// > Repeated conditions combine with AND.
#[test]
fn repeated_conditions_are_conjunctive() {
    let lines = cells()
        .condition("hasDbXref:NCBI_TaxID:9606")
        .condition("inSubset:breast")
        .json();

    let matched: Vec<_> = lines
        .iter()
        .filter(|l| !l["terms"].as_array().unwrap().is_empty())
        .map(|l| l["query"].as_str().unwrap())
        .collect();

    assert_eq!(matched, vec!["MCF-7 cell", "MCF7", "mcf-7"]);
    assert_eq!(lines[1]["terms"], serde_json::json!(["CVCL_0031"]));
}

/// > A condition on a property no class carries excludes everything.
#[test]
fn unknown_property_matches_nothing() {
    let lines = cells().condition("hasColour:blue").json();
    assert!(lines.iter().all(|l| l["hits"] == serde_json::json!([])));
}

/// > Conditions from the config file apply before CLI ones.
#[test]
fn config_conditions_combine_with_cli() {
    let temp = Project::empty();
    temp.config("[query]\nconditions = [\"hasDbXref:NCBI_TaxID:9606\"]\n");
    temp.file("q.txt", "HeLa\nMCF\n");

    let output = run("q.txt", fixture("cells/cells.owl"))
        .pwd(temp.path())
        .condition("inSubset:cervix")
        .passes()
        .stdout();

    assert_eq!(
        output,
        format!("{TSV_HEADER}HeLa\tHeLa\tCVCL_0030\tlabel\tHeLa\t\nMCF\t\t\t\t\t\n")
    );
}

/// > Malformed conditions are rejected before any file is read.
#[test]
fn malformed_condition_is_usage_error() {
    run("does-not-exist.txt", "does-not-exist.owl")
        .condition("no-colon-here")
        .exits(2)
        .stderr_has("ontomatch: argument error: invalid condition `no-colon-here`")
        .stderr_lacks("does-not-exist");
}

/// > An empty property name is malformed.
#[test]
fn empty_property_is_usage_error() {
    cells()
        .condition(":9606")
        .exits(2)
        .stderr_has("property name is empty");
}
