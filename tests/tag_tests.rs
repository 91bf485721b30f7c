//! Integration tests for the group code registry and tagged values

mod common;

use common::{dxfstr_all, records};
use dxf_upright::io::dxf::{
    cast_tag_value, compile_tags, is_point_code, is_point_tag, is_pointer_code, tag_type, DxfTag,
    DxfVertex, TagType, TagValue, MAX_GROUP_CODE, TYPE_RULES,
};
use dxf_upright::DxfError;
use proptest::prelude::*;

#[test]
fn test_every_rule_resolves_to_its_decoder() {
    for (expected, codes) in TYPE_RULES {
        for code in codes.clone() {
            assert_eq!(tag_type(code), *expected, "group code {code}");
        }
    }
}

#[test]
fn test_codes_without_rule_are_text() {
    let covered = |code: i32| TYPE_RULES.iter().any(|(_, codes)| codes.contains(&code));
    for code in -10..=MAX_GROUP_CODE + 10 {
        if !covered(code) {
            assert_eq!(tag_type(code), TagType::Text, "group code {code}");
        }
    }
}

#[test]
fn test_point_and_pointer_predicates() {
    assert!(is_point_code(10));
    assert!(!is_point_code(20));
    assert!(is_pointer_code(390));
    assert!(!is_pointer_code(10));

    let tags = compile_tags([(10, "1"), (20, "2"), (40, "3")]).unwrap();
    assert!(is_point_tag(&tags[0]));
    assert!(!is_point_tag(&tags[1]));
}

#[test]
fn test_vertex_serializes_as_three_records() {
    let vertex = DxfTag::vertex(10, [1.0, 2.0, 3.0]).unwrap();
    let expected = [
        DxfTag::new(10, 1.0).dxfstr(),
        DxfTag::new(20, 2.0).dxfstr(),
        DxfTag::new(30, 3.0).dxfstr(),
    ]
    .concat();
    assert_eq!(vertex.dxfstr(), expected);
    assert_eq!(vertex.dxfstr(), " 10\n1.0\n 20\n2.0\n 30\n3.0\n");
}

#[test]
fn test_vertex_reassembles_from_records() {
    let original = DxfVertex::new(10, [1.0, 2.0, 3.0]).unwrap();
    let tags = compile_tags(records(&original.dxfstr())).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0], DxfTag::from(original));
    assert_eq!(tags[0].value(), TagValue::Point(vec![1.0, 2.0, 3.0]));
}

#[test]
fn test_2d_vertex_reassembles_from_records() {
    let original = DxfTag::vertex(1012, [-0.25, 8.0]).unwrap();
    let tags = compile_tags(records(&original.dxfstr())).unwrap();
    assert_eq!(tags, vec![original]);
}

#[test]
fn test_entity_record_roundtrip() {
    let source = "  0\nARC\n  8\nLAYER_1\n 10\n1.5\n 20\n-2.0\n 30\n0.0\n 40\n5.0\n 50\n30.0\n 51\n120.0\n210\n0.0\n220\n0.0\n230\n-1.0\n 62\n3\n";
    let tags = compile_tags(records(source)).unwrap();
    assert_eq!(tags.len(), 8);
    assert_eq!(tags[0], (0, TagValue::from("ARC")));
    assert_eq!(tags[2], (10, TagValue::Point(vec![1.5, -2.0, 0.0])));
    assert_eq!(tags[6], (210, TagValue::Point(vec![0.0, 0.0, -1.0])));
    assert_eq!(tags[7], (62, TagValue::Int(3)));
    assert_eq!(dxfstr_all(&tags), source);
}

#[test]
fn test_malformed_float_surfaces_at_decode() {
    let err = compile_tags([(40, "1,5")]).unwrap_err();
    assert!(matches!(
        err,
        DxfError::InvalidTagValue { code: 40, expected: TagType::Float, .. }
    ));
}

proptest! {
    #[test]
    fn prop_tag_type_is_total(code in any::<i32>()) {
        let tag_type = tag_type(code);
        if !(0..=MAX_GROUP_CODE).contains(&code) {
            prop_assert_eq!(tag_type, TagType::Text);
        }
    }

    #[test]
    fn prop_float_roundtrip(code in 40i32..60, value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let tag = DxfTag::new(code, value);
        let record = records(&tag.dxfstr());
        prop_assert_eq!(record.len(), 1);
        prop_assert_eq!(cast_tag_value(code, &record[0].1).unwrap(), TagValue::Float(value));
    }

    #[test]
    fn prop_int_roundtrip(code in 60i32..100, value in any::<i64>()) {
        let tag = DxfTag::new(code, value);
        let record = records(&tag.dxfstr());
        prop_assert_eq!(cast_tag_value(code, &record[0].1).unwrap(), TagValue::Int(value));
    }

    #[test]
    fn prop_vertex_roundtrip(
        base in prop::sample::select(vec![10, 11, 15, 19, 110, 112, 210, 1010, 1019]),
        x in -1e9f64..1e9,
        y in -1e9f64..1e9,
        z in prop::option::of(-1e9f64..1e9),
    ) {
        let components: Vec<f64> = [Some(x), Some(y), z].into_iter().flatten().collect();
        let vertex = DxfTag::vertex(base, components.clone()).unwrap();
        let tags = compile_tags(records(&vertex.dxfstr())).unwrap();
        prop_assert_eq!(tags.len(), 1);
        prop_assert_eq!(tags[0].value(), TagValue::Point(components));
    }
}
