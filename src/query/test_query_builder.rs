use anyhow::Result;

use super::query_builder::{
    array_fmt, find_sample_by_field_query, patient_to_sample_query, quote, PATIENT_FIELD,
};

#[test]
fn test_quote() -> Result<()> {
    struct TestCase {
        case_name: String,
        input: String,
        expected: String,
    }

    let test_cases = vec![
        TestCase {
            case_name: "simple".to_string(),
            input: "TCGA-CS-4938".to_string(),
            expected: "\"TCGA-CS-4938\"".to_string(),
        },
        TestCase {
            case_name: "empty".to_string(),
            input: "".to_string(),
            expected: "\"\"".to_string(),
        },
        TestCase {
            case_name: "with-spaces".to_string(),
            input: "a b c".to_string(),
            expected: "\"a b c\"".to_string(),
        },
    ];

    for test_case in test_cases {
        assert_eq!(
            quote(&test_case.input),
            test_case.expected,
            "case: {}",
            test_case.case_name
        );
    }

    Ok(())
}

#[test]
fn test_array_fmt() -> Result<()> {
    struct TestCase {
        case_name: String,
        input: Vec<String>,
        expected: String,
    }

    let test_cases = vec![
        TestCase {
            case_name: "empty".to_string(),
            input: vec![],
            expected: "[]".to_string(),
        },
        TestCase {
            case_name: "single".to_string(),
            input: vec!["TCGA-CS-4938".to_string()],
            expected: "[\"TCGA-CS-4938\"]".to_string(),
        },
        TestCase {
            case_name: "order-preserved".to_string(),
            input: vec![
                "TCGA-HT-7693".to_string(),
                "TCGA-CS-4938".to_string(),
                "TCGA-CS-6665".to_string(),
            ],
            expected: "[\"TCGA-HT-7693\", \"TCGA-CS-4938\", \"TCGA-CS-6665\"]".to_string(),
        },
    ];

    for test_case in test_cases {
        assert_eq!(
            array_fmt(&test_case.input),
            test_case.expected,
            "case: {}",
            test_case.case_name
        );
    }

    Ok(())
}

#[test]
fn test_array_fmt_round_trip() -> Result<()> {
    // the bracketed literal must parse back to the same elements in the
    // same order
    let input = vec!["a", "b", "c"];
    let formatted = array_fmt(&input);

    let inner = formatted
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap();
    let parsed: Vec<&str> = inner
        .split(", ")
        .map(|s| s.trim_matches('"'))
        .collect();

    assert_eq!(parsed, input);

    Ok(())
}

#[test]
fn test_patient_query_matches_field_query() -> Result<()> {
    let patients = vec![
        "TCGA-CS-4938".to_string(),
        "TCGA-HT-7693".to_string(),
        "TCGA-CS-6665".to_string(),
        "TCGA-S9-A7J2".to_string(),
        "TCGA-FG-A6J3".to_string(),
    ];

    assert_eq!(
        patient_to_sample_query("TCGA.LGG.sampleMap", &patients),
        find_sample_by_field_query("TCGA.LGG.sampleMap", PATIENT_FIELD, &patients),
    );

    Ok(())
}

#[test]
fn test_sample_query_template_fidelity() -> Result<()> {
    let patients = vec!["TCGA-CS-4938", "TCGA-HT-7693"];
    let query = patient_to_sample_query("TCGA.LGG.sampleMap", &patients);

    assert!(query.contains("cohort \"TCGA.LGG.sampleMap\""));
    assert!(query.contains("[:= :field.name \"_PATIENT\"]"));
    assert!(query.contains("[:= :field.name \"sampleID\"]"));
    assert!(query.contains("[\"TCGA-CS-4938\", \"TCGA-HT-7693\"]"));
    assert!(query.contains("[:in :field_value [\"TCGA-CS-4938\", \"TCGA-HT-7693\"]]"));

    // the template is a complete let expression
    assert!(query.trim_start().starts_with("(let [cohort"));

    Ok(())
}
