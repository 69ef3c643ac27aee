use dataelement_codegen::{generate_artifacts, parse_document};
use pretty_assertions::assert_eq;

const SCHEMA: &str = r#"{
    "package": "org.example.app",
    "element": "Sample",
    "collection": "samples",
    "fields": [
        { "name": "reading", "type": "f64", "default": 0.5 },
        { "name": "label", "type": "String", "alias": [{ "name": "tag" }] },
        { "name": "note", "type": "String", "nullable": true, "visibility": "crate" }
    ]
}"#;

#[test]
fn one_artifact_per_surface() {
    let doc = parse_document(SCHEMA).unwrap();
    let artifacts = generate_artifacts(&doc).unwrap();

    let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "sample.rs",
            "sample_implementation.rs",
            "sample_persistence_handler.rs"
        ]
    );
}

#[test]
fn persistence_artifact_requires_a_collection() {
    let doc = parse_document(
        r#"{ "package": "p", "element": "Bare", "fields": [] }"#,
    )
    .unwrap();

    let artifacts = generate_artifacts(&doc).unwrap();
    let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();

    assert_eq!(names, ["bare.rs", "bare_implementation.rs"]);
}

#[test]
fn generated_surfaces_carry_the_declared_fields() {
    let doc = parse_document(SCHEMA).unwrap();
    let artifacts = generate_artifacts(&doc).unwrap();

    let interface = &artifacts[0].contents;
    assert!(interface.contains("pub trait Sample"));
    assert!(interface.contains("fn label"));
    assert!(interface.contains("fn tag"));
    // Crate-visible fields stay off the public trait.
    assert!(!interface.contains("fn note"));

    let implementation = &artifacts[1].contents;
    assert!(implementation.contains("struct SampleImplementation"));
    assert!(implementation.contains("fn set_note"));

    let persistence = &artifacts[2].contents;
    assert!(persistence.contains("\"samples\""));
    assert!(persistence.contains("fn find_by_reading"));
    // Identity lookups resolve to a single element, not a sequence.
    assert!(persistence.contains("fn find_by_uuid"));
    assert!(persistence.contains("Option < SampleImplementation >"));
}

#[test]
fn baseline_fields_are_always_generated() {
    let doc = parse_document(
        r#"{ "package": "p", "element": "Bare", "fields": [] }"#,
    )
    .unwrap();

    let implementation = &generate_artifacts(&doc).unwrap()[1].contents;

    for accessor in ["fn name", "fn description", "fn comment", "fn context"] {
        assert!(implementation.contains(accessor), "missing {accessor}");
    }
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(parse_document("{ not json").is_err());
    assert!(parse_document(r#"{ "element": "NoPackage" }"#).is_err());
}

#[test]
fn invalid_field_specs_fail_generation() {
    let doc = parse_document(
        r#"{
            "package": "p",
            "element": "Bad",
            "fields": [{ "name": "count", "type": "i64", "nullable": true }]
        }"#,
    )
    .unwrap();

    assert!(generate_artifacts(&doc).is_err());
}

#[test]
fn output_is_deterministic() {
    let doc = parse_document(SCHEMA).unwrap();

    assert_eq!(
        generate_artifacts(&doc).unwrap(),
        generate_artifacts(&doc).unwrap()
    );
}
