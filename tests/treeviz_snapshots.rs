//! Treeviz outlines of represented graphs

use noderep::represent::Settings;
use noderep::{Data, FlowStyle, Representer};

fn outline(data: &Data) -> String {
    Representer::with_defaults()
        .represent(data)
        .expect("representable")
        .to_treeviz()
}

#[test]
fn test_shared_list_under_two_keys() {
    let shared = Data::list([Data::from("a"), Data::from("b")]);
    let root = Data::map([
        (Data::from("first"), shared.clone()),
        (Data::from("second"), shared),
    ]);

    insta::assert_snapshot!(outline(&root), @r###"
    !!map block (2 entries)
    ├─ ? !!str first
    ├─ : &1 !!seq flow (2 items)
    │ ├─ !!str a
    │ └─ !!str b
    ├─ ? !!str second
    └─ : *1
    "###);
}

#[test]
fn test_self_containing_map() {
    let root = Data::map([(Data::from("name"), Data::from("loop"))]);
    root.as_map().expect("map").push("self", root.clone());

    insta::assert_snapshot!(outline(&root), @r###"
    &1 !!map block (2 entries)
    ├─ ? !!str name
    ├─ : !!str loop
    ├─ ? !!str self
    └─ : *1
    "###);
}

#[test]
fn test_mixed_scalars() {
    let root = Data::list([
        Data::from("null"),
        Data::from(12i64),
        Data::from(1.5f64),
        Data::null(),
        Data::from(true),
    ]);

    insta::assert_snapshot!(outline(&root), @r###"
    !!seq block (5 items)
    ├─ !!str 'null'
    ├─ !!int 12
    ├─ !!float 1.5
    ├─ !!null null
    └─ !!bool true
    "###);
}

#[test]
fn test_forced_block_default() {
    let settings = Settings::builder()
        .default_flow_style(FlowStyle::Block)
        .build();
    let root = Data::list([Data::list([Data::from(1i64)]), Data::map([])]);
    let tree = Representer::with_settings(settings)
        .represent(&root)
        .expect("representable");

    insta::assert_snapshot!(tree.to_treeviz(), @r###"
    !!seq block (2 items)
    ├─ !!seq block (1 items)
    │ └─ !!int 1
    └─ !!map block (0 entries)
    "###);
}
