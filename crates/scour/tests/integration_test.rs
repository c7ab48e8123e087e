//! Integration tests for the scour pipeline.

use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

use scour::{
    CleanOperation, ColumnType, Parser, ParserConfig, Pipeline, PipelineConfig, ScourError,
    WriterConfig,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn employee_csv() -> &'static str {
    "First_name,Last_name,State,Apt\n\
     Alice,Smith,WA,10\n\
     ,Jones,,\n\
     Bob,Brown,OR,20\n\
     ,Jones,,\n\
     Carol,White,CA,30\n"
}

// =============================================================================
// End-to-End Pipeline Tests
// =============================================================================

#[test]
fn test_employee_cleaning_end_to_end() {
    let file = create_test_file(employee_csv());
    let dir = tempdir().unwrap();
    let out = dir.path().join("updated.tsv");

    let config = PipelineConfig {
        parser: ParserConfig {
            max_rows: Some(5),
            ..ParserConfig::default()
        },
        operations: vec![
            CleanOperation::FillConstant {
                column: "First_name".to_string(),
                value: "No Name".to_string(),
            },
            CleanOperation::FillConstant {
                column: "Last_name".to_string(),
                value: "No Name".to_string(),
            },
            CleanOperation::FillConstant {
                column: "State".to_string(),
                value: "No State".to_string(),
            },
            CleanOperation::FillMean {
                column: "Apt".to_string(),
            },
            CleanOperation::DropDuplicates,
        ],
        ..PipelineConfig::default()
    };

    let report = Pipeline::with_config(config).run(file.path(), &out).unwrap();

    // Two identical blank rows collapse into one after identical fills.
    assert_eq!(report.changes.rows_removed, 1);
    assert_eq!(report.table.row_count(), 4);

    // Mean of 10, 20, 30 is 20.0; both blank Apt cells received it.
    let apt_idx = report.table.column_index("Apt").unwrap();
    let apt: Vec<&str> = report.table.column_values(apt_idx).collect();
    assert_eq!(apt, vec!["10", "20.0", "20", "30"]);

    // No missing values remain in any covered column.
    for name in ["First_name", "Last_name", "State", "Apt"] {
        let idx = report.table.column_index(name).unwrap();
        assert!(
            report
                .table
                .column_values(idx)
                .all(|v| !scour::DataTable::is_null_value(v)),
            "column {} still has missing values",
            name
        );
    }

    // Output is tab-delimited with a header and no index column.
    let contents = std::fs::read_to_string(&out).unwrap();
    let first_line = contents.lines().next().unwrap();
    assert_eq!(first_line, "First_name\tLast_name\tState\tApt");
    assert_eq!(contents.lines().count(), 5);
}

#[test]
fn test_mean_fill_literal_values() {
    // Column [10, null, 20, null, 30] -> mean 20.0 -> [10, 20.0, 20, 20.0, 30]
    let file = create_test_file("Apt\n10\nNA\n20\nNA\n30\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.tsv");

    let config = PipelineConfig {
        operations: vec![CleanOperation::FillMean {
            column: "Apt".to_string(),
        }],
        ..PipelineConfig::default()
    };

    let report = Pipeline::with_config(config).run(file.path(), &out).unwrap();

    let values: Vec<&str> = report.table.column_values(0).collect();
    assert_eq!(values, vec!["10", "20.0", "20", "20.0", "30"]);
}

#[test]
fn test_constant_fill_idempotent_through_pipeline() {
    let file = create_test_file("State\nWA\nNA\nOR\n");
    let dir = tempdir().unwrap();

    let run = |out: &std::path::Path| {
        let config = PipelineConfig {
            operations: vec![
                CleanOperation::FillConstant {
                    column: "State".to_string(),
                    value: "No State".to_string(),
                },
                CleanOperation::FillConstant {
                    column: "State".to_string(),
                    value: "No State".to_string(),
                },
            ],
            ..PipelineConfig::default()
        };
        Pipeline::with_config(config).run(file.path(), out).unwrap()
    };

    let report = run(&dir.path().join("out.tsv"));
    let values: Vec<&str> = report.table.column_values(0).collect();
    assert_eq!(values, vec!["WA", "No State", "OR"]);

    // Second application filled nothing.
    assert_eq!(report.changes.changes[1].values_changed, 0);
}

#[test]
fn test_duplicate_order_preserved() {
    // Rows [A, B, A, C, B] -> [A, B, C]
    let file = create_test_file("v\nA\nB\nA\nC\nB\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.tsv");

    let config = PipelineConfig {
        operations: vec![CleanOperation::DropDuplicates],
        ..PipelineConfig::default()
    };

    let report = Pipeline::with_config(config).run(file.path(), &out).unwrap();
    let values: Vec<&str> = report.table.column_values(0).collect();
    assert_eq!(values, vec!["A", "B", "C"]);
}

// =============================================================================
// Load / Persist Round Trips
// =============================================================================

#[test]
fn test_round_trip_preserves_cells() {
    let file = create_test_file(employee_csv());
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.tsv");

    // No operations: Persist(Load(path)) with only a delimiter change.
    let report = Pipeline::new().run(file.path(), &out).unwrap();

    let (reloaded, meta) = Parser::new().parse_file(&out).unwrap();
    assert_eq!(meta.format, "tsv");
    assert_eq!(reloaded.headers, report.table.headers);
    assert_eq!(reloaded.rows, report.table.rows);
}

#[test]
fn test_max_rows_truncation_on_large_file() {
    let mut content = String::from("n,sq\n");
    for i in 0..100 {
        content.push_str(&format!("{},{}\n", i, i * i));
    }
    let file = create_test_file(&content);

    let parser = Parser::with_config(ParserConfig {
        max_rows: Some(5),
        ..ParserConfig::default()
    });
    let (table, meta) = parser.parse_file(file.path()).unwrap();

    assert_eq!(meta.row_count, 5);
    assert_eq!(table.row_count(), 5);
    let values: Vec<&str> = table.column_values(0).collect();
    assert_eq!(values, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn test_output_delimiter_configurable() {
    let file = create_test_file("a,b\n1,2\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.csv");

    let config = PipelineConfig {
        writer: WriterConfig {
            delimiter: b';',
            ..WriterConfig::default()
        },
        ..PipelineConfig::default()
    };
    Pipeline::with_config(config).run(file.path(), &out).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(contents, "a;b\n1;2\n");
}

// =============================================================================
// Error Paths
// =============================================================================

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let err = Pipeline::new()
        .run(dir.path().join("absent.csv"), dir.path().join("out.tsv"))
        .unwrap_err();
    assert!(matches!(err, ScourError::Io { .. }));
}

#[test]
fn test_mean_on_all_missing_column_fails() {
    // Property: fail rather than silently producing NaN.
    let file = create_test_file("Apt\nNA\nna\nnull\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.tsv");

    let config = PipelineConfig {
        operations: vec![CleanOperation::FillMean {
            column: "Apt".to_string(),
        }],
        ..PipelineConfig::default()
    };

    let err = Pipeline::with_config(config)
        .run(file.path(), &out)
        .unwrap_err();
    assert!(matches!(err, ScourError::EmptyColumn(_)));
    assert!(!out.exists());
}

#[test]
fn test_unknown_column_fails() {
    let file = create_test_file("a\n1\n");
    let dir = tempdir().unwrap();

    let config = PipelineConfig {
        operations: vec![CleanOperation::FillConstant {
            column: "Zip".to_string(),
            value: "0".to_string(),
        }],
        ..PipelineConfig::default()
    };

    let err = Pipeline::with_config(config)
        .run(file.path(), dir.path().join("out.tsv"))
        .unwrap_err();
    assert!(matches!(err, ScourError::ColumnNotFound(_)));
}

// =============================================================================
// Profiling
// =============================================================================

#[test]
fn test_profile_types_and_counts() {
    let file = create_test_file(employee_csv());
    let dir = tempdir().unwrap();
    let report = Pipeline::new()
        .run(file.path(), dir.path().join("out.tsv"))
        .unwrap();

    let profile = &report.profile;
    assert_eq!(profile.column_count(), 4);
    assert_eq!(
        profile.column("Apt").unwrap().inferred_type,
        ColumnType::Integer
    );
    assert_eq!(
        profile.column("State").unwrap().inferred_type,
        ColumnType::String
    );
    assert_eq!(profile.column("Apt").unwrap().stats.null_count, 2);

    // Preview captures the table before any cleaning.
    assert_eq!(report.preview.len(), 5);
    assert_eq!(report.preview[0][0], "Alice");
}
