// boostrules-core/tests/pipeline_tests.rs
//! End-to-end tests for the extraction -> sanitize -> build pipeline.

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

use boostrules_core::{
    generate_document, generate_from_path, BoostRulesError, GeneratorConfig, RuleDocument,
};

const HEADER: &str = "ID,Name,attribute:pa_manufacturer,attribute:pa_caliber-gauge,attribute:pa_brand-fit,attribute:pa_model-fit";

fn fixed_config() -> GeneratorConfig {
    GeneratorConfig {
        date: NaiveDate::from_ymd_opt(2026, 2, 18),
        ..GeneratorConfig::default()
    }
}

fn export(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

#[test]
fn test_realistic_export() -> Result<()> {
    let csv = export(&[
        r#"101,Pistol,Smith & Wesson,"9mm, .40 S&W",,"#,
        r#"102,Rifle,Ruger,.223 Rem/5.56 NATO,,"#,
        r#"103,Holster,"Smith & Wesson, Ruger",,"Glock, Sig","G19, P365""#,
        r#"104,Shotgun,Mossberg,12 Gauge,,"#,
        r#"105,Mystery,---,9mm,,"#,
    ]);
    let generation = generate_document(csv.as_bytes(), &fixed_config())?;
    let names: Vec<&str> = generation.document.rules.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Brand: Mossberg",
            "Brand: Ruger",
            "Brand: Smith & Wesson",
            "Caliber: .223 Rem/5.56 NATO",
            "Caliber: .40 S&W",
            "Caliber: 12 Gauge",
            "Caliber: 9mm",
        ]
    );

    let slugs: Vec<&str> = generation
        .document
        .rules
        .iter()
        .map(|r| r.conditions[&0][0].condition_value.as_str())
        .collect();
    assert_eq!(
        slugs,
        vec!["mossberg", "ruger", "smith-wesson", "223-rem-5-56-nato", "40-sw", "12-gauge", "9mm"]
    );

    assert_eq!(generation.extracted.rows, 5);
    assert_eq!(generation.extracted.values("pa_brand-fit").unwrap().len(), 2);
    assert_eq!(generation.groups[0].skipped, vec!["---".to_string()]);
    Ok(())
}

#[test]
fn test_dedup_across_rows() -> Result<()> {
    let csv = export(&[r#"1,a,"A, B",,,"#, r#"2,b,A,,,"#]);
    let generation = generate_document(csv.as_bytes(), &fixed_config())?;
    assert_eq!(generation.extracted.values("pa_manufacturer").unwrap().len(), 2);
    assert_eq!(generation.rule_count(), 2);
    Ok(())
}

#[test]
fn test_generated_document_is_reproducible() -> Result<()> {
    let csv = export(&[r#"1,a,"Zeta, Alpha, Mid",10mm,,"#, r#"2,b,Beta,"9mm, 10mm",,"#]);
    let first = generate_document(csv.as_bytes(), &fixed_config())?.document.to_json_pretty()?;
    let second = generate_document(csv.as_bytes(), &fixed_config())?.document.to_json_pretty()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_generate_from_path_and_save() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all(export(&["1,x,Acme Corp,9mm,,"]).as_bytes())?;

    let generation = generate_from_path(input.path(), &fixed_config())?;
    let dir = tempdir()?;
    let output = dir.path().join("woobooster-rules-import.json");
    generation.document.save(&output)?;

    let text = fs::read_to_string(&output)?;
    assert!(text.starts_with("{\n    \"version\": \"1.0.2\",\n    \"date\": \"2026-02-18\","));
    let reloaded = RuleDocument::from_json(&text)?;
    assert_eq!(reloaded.rules.len(), 2);
    assert_eq!(reloaded.rules[0].name, "Brand: Acme Corp");
    assert_eq!(reloaded.rules[1].name, "Caliber: 9mm");
    Ok(())
}

#[test]
fn test_missing_input_is_not_found() {
    let dir = tempdir().unwrap();
    let err = generate_from_path(&dir.path().join("absent.csv"), &fixed_config()).unwrap_err();
    assert!(matches!(err, BoostRulesError::InputNotFound { .. }));
}

#[test]
fn test_input_directory_is_read_error() {
    let dir = tempdir().unwrap();
    let err = generate_from_path(dir.path(), &fixed_config()).unwrap_err();
    assert!(matches!(
        err,
        BoostRulesError::InputRead { .. } | BoostRulesError::Io(_)
    ));
}

#[test]
fn test_short_and_long_rows_still_generate_rules() -> Result<()> {
    let csv = export(&["1,a,Acme Corp,9mm,,", "2,b,Beta", "3,c,Gamma,12 Gauge,,,trailing"]);
    let generation = generate_document(csv.as_bytes(), &fixed_config())?;
    let names: Vec<&str> = generation.document.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Brand: Acme Corp",
            "Brand: Beta",
            "Brand: Gamma",
            "Caliber: 12 Gauge",
            "Caliber: 9mm",
        ]
    );
    assert_eq!(generation.extracted.rows, 3);
    Ok(())
}

#[test]
fn test_malformed_row_is_reported_with_line_in_strict_mode() {
    let csv = export(&["1,a,Acme,9mm,,", "2,b"]);
    let config = GeneratorConfig {
        flexible_rows: false,
        ..fixed_config()
    };
    match generate_document(csv.as_bytes(), &config) {
        Err(BoostRulesError::MalformedRow { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed row, got {other:?}"),
    }
}
