//! Pins the worked-example locator catalog to its exact query texts.

use locq::Locator;

fn catalog() -> Vec<Locator> {
    vec![
        Locator::id(" 1 ").and(Locator::name("")),
        Locator::id("ID 4"),
        Locator::id("ID 1")
            .and(Locator::class("CLASS 2"))
            .and(Locator::name("NAME 3")),
        Locator::button()
            .and(Locator::class("CLASS 332"))
            .and(Locator::name("NAME-4"))
            .child(Locator::id("_id_")),
        Locator::combobox(),
        Locator::button().and(Locator::id("U")),
        Locator::edit().child(Locator::name("").and(Locator::button()).and(Locator::id("I"))),
        Locator::edit()
            .and(Locator::combobox())
            .and(Locator::button())
            .child(Locator::edit()),
    ]
}

#[test]
fn catalog_matches_expected_queries() {
    let expected = [
        r#"id:" 1 " and name:"""#,
        r#"id:"ID 4""#,
        r#"id:"ID 1" and class:"CLASS 2" and name:"NAME 3""#,
        r#"type:Button and class:"CLASS 332" and name:"NAME-4" > id:_id_"#,
        "type:Combobox",
        "type:Button and id:U",
        r#"type:Edit > name:"" and type:Button and id:I"#,
        "type:Edit and type:Combobox and type:Button > type:Edit",
    ];

    let catalog = catalog();
    assert_eq!(catalog.len(), expected.len());
    for (num, (locator, expected)) in catalog.iter().zip(expected).enumerate() {
        assert_eq!(locator.as_str(), expected, "catalog entry {}", num + 1);
    }
}

#[test]
fn catalog_queries_are_stable_across_reads() {
    for locator in catalog() {
        assert_eq!(locator.to_string(), locator.as_str());
    }
}
