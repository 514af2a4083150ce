#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Entry-point behaviour: `is`, `value_is`, their named variants, host
//! reporting and caller attribution.

mod common;

use std::collections::HashMap;

use contesta::{value_eq, Config, Locus, Value};
use pretty_assertions::assert_eq;

use common::contesta;

#[test]
fn is_passes_on_equal_values() {
    let (mut c, emitter) = contesta();
    assert!(c.is(42_i32, 42_i32));

    let emitted = emitter.emitted();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].assertion, "is");
    assert!(emitted[0].records[0].is_pass());
    assert_eq!(c.host().failed, 0);
    assert_eq!(c.host().helper, 1);
}

#[test]
fn is_fails_in_value() {
    let (mut c, emitter) = contesta();
    assert!(!c.is("got", "want"));

    let records = emitter.last();
    assert_eq!(records[0].locus(), Some(Locus::InValue));
    assert_eq!(records[0].op(), Some("=="));
    assert_eq!(c.host().failed, 1);
    assert!(c.host().fatal.is_empty());
}

#[test]
fn is_fails_in_type_for_different_types() {
    let (mut c, emitter) = contesta();
    assert!(!c.is(42_i32, 42_i64));
    assert_eq!(emitter.last()[0].locus(), Some(Locus::InType));
}

#[test]
fn is_accepts_matchers() {
    let (mut c, _) = contesta();
    assert!(c.is(42_i32, value_eq(42.0_f64)));
}

#[test]
fn named_variants_use_the_given_name() {
    let (mut c, emitter) = contesta();
    c.is_named(1_u8, 1_u8, "bytes match");
    c.value_is_named(1_u8, 1_i64, &format!("case {}", 2));
    let names: Vec<String> = emitter.emitted().into_iter().map(|e| e.assertion).collect();
    assert_eq!(names, vec!["bytes match", "case 2"]);
}

#[test]
fn value_is_converts_numbers() {
    let (mut c, emitter) = contesta();
    assert!(c.value_is(42_i32, 42.0_f64));
    assert!(!c.value_is(42_i32, 43.0_f64));
    assert_eq!(emitter.last()[0].locus(), Some(Locus::InValue));
    assert_eq!(emitter.last()[0].op(), Some("== (value)"));
}

#[test]
fn value_is_reports_overflow() {
    let (mut c, emitter) = contesta();
    assert!(!c.value_is(42_i32, 3_000_000_000_u64));
    let record = &emitter.last()[0];
    assert_eq!(record.locus(), Some(Locus::InType));
    assert_eq!(
        record.description(),
        Some("Cannot convert 64-bit uint (3000000000) to 32-bit int without overflow")
    );
}

#[test]
fn numeric_symmetry_at_the_boundary() {
    let (mut c, _) = contesta();
    assert!(c.value_is(127_u8, 127_i8));
    assert!(c.value_is(127_i8, 127_u8));
    assert!(!c.value_is(200_u8, 100_i8));
    assert!(!c.value_is(100_i8, 200_u8));
}

#[test]
fn value_is_rejects_matchers() {
    let (mut c, emitter) = contesta();
    assert!(!c.value_is(42_i32, value_eq(42)));

    let record = &emitter.last()[0];
    assert_eq!(record.locus(), Some(Locus::InUsage));
    assert_eq!(
        record.description(),
        Some("You cannot pass a matcher as the expected value to value_is")
    );
    assert_eq!(record.actual().map(|a| a.value().to_string()), Some("42".to_owned()));
    assert_eq!(
        record.expected().map(|e| e.value().to_string()),
        Some("ValueEq {}".to_owned())
    );
    assert_eq!(c.host().failed, 1);
}

#[test]
fn untyped_nil_equals_nil_map() {
    let (mut c, _) = contesta();
    let nil_map = Value::nil_of::<HashMap<String, i32>>();
    assert!(c.is(Value::Nil, nil_map.clone()));
    assert!(c.is(nil_map, Value::Nil));
}

#[test]
fn typed_nils_of_different_types_differ() {
    let (mut c, emitter) = contesta();
    assert!(!c.is(None::<i32>, None::<String>));
    assert_eq!(emitter.last()[0].locus(), Some(Locus::InType));
}

#[test]
fn bytes_compare_by_content() {
    let (mut c, _) = contesta();
    let a = contesta::Bytes::new(vec![1, 2, 3]);
    let b = contesta::Bytes::new(vec![1, 2, 3]);
    assert!(c.is(a, b));
}

#[test]
fn root_element_names_the_actual_type() {
    let (mut c, emitter) = contesta();
    c.is(vec![1_i32], vec![2_i32]);

    let record = &emitter.last()[0];
    let root = &record.paths()[0];
    assert_eq!(root.data, "Vec<i32>");
    assert_eq!(root.callee, "Contesta::is");
}

#[test]
fn caller_is_relative_to_the_test_directory() {
    let (mut c, emitter) = contesta();
    let line = line!() + 1;
    c.value_is(1_i32, 2_i32);

    let records = emitter.last();
    let root = &records[0].paths()[0];
    assert_eq!(root.caller, format!("assertions.rs@{line}"));
    assert_eq!(root.callee, "Contesta::value_is");
}

#[test]
fn registered_internal_modules_collapse_to_function_names() {
    let (c, emitter) = contesta();
    let mut config = Config::default();
    config.register_caller_module();
    let mut c = c.with_config(config);
    c.is(1_i32, 2_i32);

    let records = emitter.last();
    let root = &records[0].paths()[0];
    assert_eq!(root.caller, "assertions");
}

#[test]
fn depth_limit_faults_are_fatal() {
    let (c, emitter) = contesta();
    let mut c = c.with_config(Config::default().with_max_depth(2));
    let nested = vec![vec![vec![vec![1_i32]]]];
    assert!(!c.is(nested.clone(), nested));

    assert_eq!(
        c.host().fatal,
        vec!["structural comparison exceeded the recursion limit of 2 levels".to_owned()]
    );
    assert!(emitter.emitted().is_empty());
}

#[test]
fn every_failure_marks_the_host() {
    let (mut c, _) = contesta();
    c.is(1_i32, 2_i32);
    c.is(1_i32, 1_i32);
    c.value_is(1_i32, 3.5_f32);
    let host = c.into_host();
    assert_eq!(host.failed, 2);
    assert_eq!(host.helper, 3);
}
