//! Standard converters: tags, scalar text and quoting

use noderep::represent::Settings;
use noderep::{Data, FlowStyle, NodeTree, Representer, ScalarStyle, Tag};
use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet};

fn represent(data: Data) -> NodeTree {
    Representer::with_defaults()
        .represent(&data)
        .expect("standard types are representable")
}

fn root_scalar(data: Data) -> (Tag, String, ScalarStyle) {
    let tree = represent(data);
    let scalar = tree.root_node().as_scalar().expect("scalar").clone();
    (scalar.tag, scalar.value, scalar.style)
}

#[rstest]
#[case(Data::from(true), Tag::BOOL, "true")]
#[case(Data::from(false), Tag::BOOL, "false")]
#[case(Data::from(-17i32), Tag::INT, "-17")]
#[case(Data::new(255u8), Tag::INT, "255")]
#[case(Data::new(i128::MAX), Tag::INT, "170141183460469231731687303715884105727")]
#[case(Data::from(2.5f64), Tag::FLOAT, "2.5")]
#[case(Data::from(3.0f64), Tag::FLOAT, "3.0")]
#[case(Data::new(f32::INFINITY), Tag::FLOAT, ".inf")]
#[case(Data::new(1.1f32), Tag::FLOAT, "1.1")]
#[case(Data::from(f64::NAN), Tag::FLOAT, ".nan")]
#[case(Data::from('x'), Tag::STR, "x")]
#[case(Data::from(String::from("owned")), Tag::STR, "owned")]
fn test_scalar_tags(#[case] data: Data, #[case] tag: Tag, #[case] value: &str) {
    let (actual_tag, actual_value, style) = root_scalar(data);
    assert_eq!(actual_tag, tag);
    assert_eq!(actual_value, value);
    assert_eq!(style, ScalarStyle::Plain);
}

#[rstest]
#[case("null", ScalarStyle::SingleQuoted)]
#[case("NULL", ScalarStyle::SingleQuoted)]
#[case("not-null", ScalarStyle::Plain)]
#[case("true", ScalarStyle::SingleQuoted)]
#[case("42", ScalarStyle::SingleQuoted)]
#[case("4.2", ScalarStyle::SingleQuoted)]
#[case("", ScalarStyle::SingleQuoted)]
#[case("forty-two", ScalarStyle::Plain)]
#[case("two\nlines", ScalarStyle::Literal)]
fn test_string_quoting(#[case] text: &'static str, #[case] expected: ScalarStyle) {
    let (tag, value, style) = root_scalar(Data::from(text));
    assert_eq!(tag, Tag::STR);
    assert_eq!(value, text);
    assert_eq!(style, expected);
}

#[test]
fn test_null_lookalikes_in_block_list() {
    let settings = Settings::builder()
        .default_scalar_style(ScalarStyle::Plain)
        .default_flow_style(FlowStyle::Block)
        .build();
    let data = Data::list([
        Data::from("null"),
        Data::from("NULL"),
        Data::from("not-null"),
    ]);
    let tree = Representer::with_settings(settings)
        .represent(&data)
        .expect("representable");

    let styles: Vec<ScalarStyle> = tree
        .children(tree.root())
        .iter()
        .map(|node| node.as_scalar().expect("scalar").style)
        .collect();
    assert_eq!(
        styles,
        vec![
            ScalarStyle::SingleQuoted,
            ScalarStyle::SingleQuoted,
            ScalarStyle::Plain
        ]
    );
    assert_eq!(tree.root_node().flow_style(), Some(FlowStyle::Block));
}

#[test]
fn test_non_plain_default_style_applies_to_everything() {
    let settings = Settings::builder()
        .default_scalar_style(ScalarStyle::DoubleQuoted)
        .build();
    let data = Data::list([Data::from("null"), Data::from("a\nb"), Data::from(1i64)]);
    let tree = Representer::with_settings(settings)
        .represent(&data)
        .expect("representable");

    for child in tree.children(tree.root()) {
        assert_eq!(
            child.as_scalar().expect("scalar").style,
            ScalarStyle::DoubleQuoted
        );
    }
    // quoted children make the list block
    assert_eq!(tree.root_node().flow_style(), Some(FlowStyle::Block));
}

#[test]
fn test_binary() {
    let (tag, value, style) = root_scalar(Data::from(b"hello".to_vec()));
    assert_eq!(tag, Tag::BINARY);
    assert_eq!(value, "aGVsbG8=");
    assert_eq!(style, ScalarStyle::Literal);
}

#[test]
fn test_vec_of_data_is_a_sequence() {
    let tree = represent(Data::new(vec![Data::from(1i64), Data::null()]));
    let seq = tree.root_node().as_sequence().expect("sequence");
    assert_eq!(seq.tag, Tag::SEQ);
    assert_eq!(seq.items.len(), 2);
    assert_eq!(tree.get(seq.items[1]).tag(), &Tag::NULL);
}

#[test]
fn test_btreemap_keeps_key_order() {
    let mut map = BTreeMap::new();
    map.insert("b".to_string(), Data::from(2i64));
    map.insert("a".to_string(), Data::from(1i64));
    let tree = represent(Data::new(map));

    let keys: Vec<String> = tree
        .root_node()
        .as_mapping()
        .expect("mapping")
        .entries
        .iter()
        .map(|&(key, _)| tree.get(key).as_scalar().expect("key").value.clone())
        .collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_set_is_a_mapping_to_nulls() {
    let set: BTreeSet<String> = ["red", "green"].into_iter().map(String::from).collect();
    let tree = represent(Data::new(set));

    let map = tree.root_node().as_mapping().expect("mapping");
    assert_eq!(map.tag, Tag::SET);
    assert_eq!(map.entries.len(), 2);
    for &(_, value) in &map.entries {
        assert_eq!(tree.get(value).tag(), &Tag::NULL);
    }
}
