//! End-to-end tests for the EU classifier and the US/EU reconciler.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use additives_cli::config::PipelineConfig;
use additives_cli::pipeline::{run_eu_classifier, run_reconciler};
use additives_normalization::NormalizationMode;

const US_PREAMBLE: &[u8] = b"Inventory of Food Contact Substances\r\n\
    Indirect Additives used in Food Contact Substances\r\n\
    \r\n\
    Reg prohibited189 marks substances prohibited under 21 CFR 189\r\n";

const US_HEADER: &[u8] =
    b"Substance,Other Names,SYN01,SYN02,CAS Registry No. (or other ID),Reg prohibited189\r\n";

fn workspace() -> (TempDir, PipelineConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig::default().with_data_root(dir.path());
    (dir, config)
}

fn write_file(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn eu_record(name: &str, tag: &str, value: &str) -> String {
    format!(
        r#"{{"additive_e_code": "E100", "additive_name": "{name}",
            "food_category": "Beverages", "legislation_short": "Reg 1333/2008",
            "restriction_type": "{tag}", "restriction_value": {value},
            "restriction_unit": "mg/kg", "restriction_note": ""}}"#
    )
}

fn write_eu_feed(config: &PipelineConfig, records: &[String]) {
    let json = format!("[{}]", records.join(",\n"));
    write_file(&config.eu_feed_path(), json.as_bytes());
}

fn write_us_feed(config: &PipelineConfig, rows: &[&[u8]]) {
    let mut content = US_PREAMBLE.to_vec();
    content.extend_from_slice(US_HEADER);
    for row in rows {
        content.extend_from_slice(row);
        content.extend_from_slice(b"\r\n");
    }
    write_file(&config.us_feed_path(), &content);
}

fn read_csv(path: &Path) -> String {
    fs::read_to_string(path).unwrap().replace("\r\n", "\n")
}

#[test]
fn test_banned_additive_carried_through() {
    let (_dir, config) = workspace();
    write_eu_feed(&config, &[eu_record("Curcumin", "maximum-level", "0")]);

    let summary = run_eu_classifier(&config).unwrap();

    assert_eq!(summary.records, 1);
    assert_eq!(summary.banned.rows(), 1);
    assert_eq!(
        read_csv(&config.banned_additives_path()),
        "e_code,name,category,legislation,note\nE100,Curcumin,Beverages,Reg 1333/2008,\n"
    );
}

#[test]
fn test_high_risk_threshold_end_to_end() {
    let (_dir, config) = workspace();
    write_eu_feed(
        &config,
        &[
            eu_record("Tartrazine", "ML", "25"),
            eu_record("Sorbic acid", "ML", "75"),
        ],
    );

    let summary = run_eu_classifier(&config).unwrap();

    assert!(!summary.banned.is_written());
    assert!(!config.banned_additives_path().exists());
    assert_eq!(summary.high_risk.rows(), 1);
    let high_risk = read_csv(&config.high_risk_additives_path());
    assert_eq!(
        high_risk,
        "e_code,name,max_level,unit,category,note\nE100,Tartrazine,25,mg/kg,Beverages,\n"
    );
    assert!(!high_risk.contains("Sorbic acid"));
}

#[test]
fn test_unrestricted_records_skipped() {
    let (_dir, config) = workspace();
    let unrestricted = r#"{"additive_e_code": "E 160c", "additive_name": "Paprika extract",
        "food_category": "All", "legislation_short": "Reg 1333/2008"}"#;
    write_eu_feed(
        &config,
        &[unrestricted.to_string(), eu_record("Curcumin", "ML", "0")],
    );

    let summary = run_eu_classifier(&config).unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(
        read_csv(&config.banned_additives_path()),
        "e_code,name,category,legislation,note\nE100,Curcumin,Beverages,Reg 1333/2008,\n"
    );
}

#[test]
fn test_selected_record_missing_field_is_fatal() {
    let (_dir, config) = workspace();
    write_file(
        &config.eu_feed_path(),
        br#"[{"additive_e_code": "E100", "additive_name": "Curcumin",
              "food_category": "Beverages", "legislation_short": "Reg 1333/2008",
              "restriction_type": "ML", "restriction_value": 0}]"#,
    );

    let error = run_eu_classifier(&config).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("classify EU restriction records"));
    assert!(message.contains("restriction_note"));
    assert!(!config.banned_additives_path().exists());
}

#[test]
fn test_eu_feed_missing_name_is_fatal() {
    let (_dir, config) = workspace();
    write_file(
        &config.eu_feed_path(),
        br#"[{"additive_e_code": "E100", "food_category": "Beverages",
              "legislation_short": "Reg 1333/2008"}]"#,
    );

    let error = run_eu_classifier(&config).unwrap_err();
    assert!(format!("{error:#}").contains("load EU restriction feed"));
}

#[test]
fn test_eu_feed_missing_file_is_fatal() {
    let (_dir, config) = workspace();
    assert!(run_eu_classifier(&config).is_err());
}

#[test]
fn test_banned_in_both_with_cas() {
    let (_dir, config) = workspace();
    write_eu_feed(&config, &[eu_record("Sodium Benzoate", "ML", "0")]);
    write_us_feed(&config, &[b"Sodium Benzoate,,,,532-32-1,X"]);

    run_eu_classifier(&config).unwrap();
    let summary = run_reconciler(&config).unwrap();

    assert_eq!(summary.banned_in_both, 1);
    assert_eq!(summary.banned_in_eu_only, 0);
    // The same record is high risk too, but only allowed US names qualify
    assert_eq!(summary.high_risk_in_eu, 0);
    assert_eq!(summary.unmatched_high_risk, 1);

    insta::assert_snapshot!(read_csv(&config.comparison_path()), @r#"
    Category,Substance Name,US CAS Number,Details
    Banned in both US and EU,Sodium Benzoate,532-32-1,"EU Category: Beverages, Legislation: Reg 1333/2008"
    "#);
}

#[test]
fn test_unmatched_banned_produces_no_rows() {
    let (_dir, config) = workspace();
    write_eu_feed(&config, &[eu_record("Unobtainium", "ML", "0")]);
    write_us_feed(&config, &[b"Ethanol,,,,64-17-5,"]);

    run_eu_classifier(&config).unwrap();
    let summary = run_reconciler(&config).unwrap();

    assert_eq!(summary.output.rows(), 0);
    assert_eq!(summary.unmatched_banned, 1);
    assert_eq!(
        read_csv(&config.comparison_path()),
        "Category,Substance Name,US CAS Number,Details\n"
    );
}

#[test]
fn test_comparison_blocks_in_category_order() {
    let (_dir, config) = workspace();
    write_eu_feed(
        &config,
        &[
            eu_record("Curcumin", "ML", "0"),
            eu_record("Sodium Benzoate", "ML", "0"),
            eu_record("Sunset Yellow", "ML", "25"),
        ],
    );
    write_us_feed(
        &config,
        &[
            b"Diferuloylmethane,Turmeric yellow,Curcumin,,458-37-7,",
            b"Sodium Benzoate,,,,532-32-1,X",
            b"FD&C Yellow No. 6,,Sunset Yellow,,2783-94-0,",
        ],
    );

    run_eu_classifier(&config).unwrap();
    let summary = run_reconciler(&config).unwrap();

    assert_eq!(summary.us_substances, 3);
    assert_eq!(summary.output.rows(), 4);
    insta::assert_snapshot!(read_csv(&config.comparison_path()), @r#"
    Category,Substance Name,US CAS Number,Details
    Banned in both US and EU,Sodium Benzoate,532-32-1,"EU Category: Beverages, Legislation: Reg 1333/2008"
    Banned in EU only,Curcumin,458-37-7,"EU Category: Beverages, Legislation: Reg 1333/2008"
    High risk in EU,Curcumin,458-37-7,"Category: Beverages, Max Level: 0 mg/kg"
    High risk in EU,Sunset Yellow,2783-94-0,"Category: Beverages, Max Level: 25 mg/kg"
    "#);
}

#[test]
fn test_us_feed_decoded_as_latin1() {
    let (_dir, config) = workspace();
    write_eu_feed(&config, &[eu_record("Caf\u{e9}ine", "ML", "0")]);
    write_us_feed(&config, &[b"Caf\xe9ine,,,,58-08-2,"]);

    run_eu_classifier(&config).unwrap();
    let summary = run_reconciler(&config).unwrap();

    assert_eq!(summary.banned_in_eu_only, 1);
}

#[test]
fn test_canonical_normalization_from_config() {
    let (_dir, mut config) = workspace();
    write_eu_feed(&config, &[eu_record("L-Glutamic acid", "ML", "0")]);
    write_us_feed(&config, &[b"Glutamic acid,,,,56-86-0,"]);

    run_eu_classifier(&config).unwrap();
    assert_eq!(run_reconciler(&config).unwrap().banned_in_eu_only, 0);

    config.normalization = NormalizationMode::Canonical;
    assert_eq!(run_reconciler(&config).unwrap().banned_in_eu_only, 1);
}

#[test]
fn test_reconciler_requires_classifier_outputs() {
    let (_dir, config) = workspace();
    write_us_feed(&config, &[b"Ethanol,,,,64-17-5,"]);

    let error = run_reconciler(&config).unwrap_err();

    assert!(format!("{error:#}").contains("load EU banned additives"));
    assert!(!config.comparison_path().exists());
}

#[test]
fn test_reconciler_requires_us_feed() {
    let (_dir, config) = workspace();
    write_eu_feed(&config, &[eu_record("Curcumin", "ML", "0")]);
    run_eu_classifier(&config).unwrap();

    let error = run_reconciler(&config).unwrap_err();

    assert!(format!("{error:#}").contains("load US substance registry"));
    assert!(!config.comparison_path().exists());
}

#[test]
fn test_malformed_us_row_is_fatal() {
    let (_dir, config) = workspace();
    write_eu_feed(&config, &[eu_record("Curcumin", "ML", "0")]);
    write_us_feed(&config, &[b"Curcumin,,,,458-37-7,", b"Ethanol,64-17-5"]);
    run_eu_classifier(&config).unwrap();

    assert!(run_reconciler(&config).is_err());
    assert!(!config.comparison_path().exists());
}
