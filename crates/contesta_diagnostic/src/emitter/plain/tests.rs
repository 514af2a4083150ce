use contesta_value::IntoValue;
use pretty_assertions::assert_eq;

use super::*;
use crate::{Locus, PathElement};

fn render(assertion: &str, records: &[Record]) -> String {
    let mut emitter = PlainEmitter::new(Vec::new());
    emitter.emit(assertion, records);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn test_pass() {
    assert_eq!(render("is", &[Record::pass()]), "Assertion ok: is\n");
}

#[test]
fn test_value_failure() {
    let record = Record::fail(Locus::InValue)
        .with_actual(43_i64.into_value())
        .with_expected(42_i64.into_value())
        .with_op("==")
        .with_paths(vec![
            PathElement::new("Map<String, i64>", "Contesta::is", "tests/map.rs@10"),
            PathElement::new("foo", "KeyMatcher", "tests/map.rs@11"),
        ]);

    let expected = "\
Assertion not ok: is
  path:
    Map<String, i64>  tests/map.rs@10 called Contesta::is
    foo               tests/map.rs@11 called KeyMatcher
  got:      43 (i64)
  op:       ==
  expected: 42 (i64)
  failure:  in value

";
    assert_eq!(render("is", &[record]), expected);
}

#[test]
fn test_description_without_values() {
    let record = Record::fail(Locus::InStructure)
        .with_description("1 key in the map was not checked: \"b\"");
    let expected = "\
Assertion not ok: exhaustive
  failure:  in structure
  1 key in the map was not checked: \"b\"

";
    assert_eq!(render("exhaustive", &[record]), expected);
}

#[test]
fn test_mixed_records() {
    let out = render(
        "mixed",
        &[Record::pass(), Record::fail(Locus::InType).with_actual(1_u8.into_value())],
    );
    assert!(out.starts_with("Assertion ok: mixed\nAssertion not ok: mixed\n"));
    assert!(out.contains("got:      1 (u8)"));
    assert!(out.contains("failure:  in type"));
}
