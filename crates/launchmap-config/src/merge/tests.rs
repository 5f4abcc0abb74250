use super::deep::record_leaves;
use super::path::set_nested;
use super::*;

#[test]
fn test_deep_merge_scalars() {
    let mut base: toml::Value = toml::from_str(
        r#"
        [resolver]
        pass_order = "capabilities_first"
        validate_inputs = true
    "#,
    )
    .unwrap();

    let overlay: toml::Value = toml::from_str(
        r"
        [resolver]
        validate_inputs = false
    ",
    )
    .unwrap();

    let mut sources = FieldSources::new();
    deep_merge_tracking(&mut base, &overlay, "", &ConfigLayer::User, &mut sources);

    let resolver = base.as_table().unwrap()["resolver"].as_table().unwrap();
    assert_eq!(
        resolver["pass_order"].as_str().unwrap(),
        "capabilities_first"
    );
    assert!(!resolver["validate_inputs"].as_bool().unwrap());
    assert_eq!(sources.get("resolver.validate_inputs"), Some(&ConfigLayer::User));
    assert!(!sources.contains_key("resolver.pass_order"));
}

#[test]
fn test_deep_merge_new_keys() {
    let mut base: toml::Value = toml::from_str(
        r#"
        [resolver]
        match_strategy = "substring"
    "#,
    )
    .unwrap();

    let overlay: toml::Value = toml::from_str(
        r#"
        [logging]
        level = "debug"
    "#,
    )
    .unwrap();

    let mut sources = FieldSources::new();
    deep_merge_tracking(&mut base, &overlay, "", &ConfigLayer::System, &mut sources);

    let table = base.as_table().unwrap();
    assert!(table.contains_key("resolver"));
    assert_eq!(
        table["logging"].as_table().unwrap()["level"].as_str().unwrap(),
        "debug"
    );
    assert_eq!(sources.get("logging.level"), Some(&ConfigLayer::System));
}

#[test]
fn test_deep_merge_tracking() {
    let mut base: toml::Value = toml::from_str(
        r#"
        [resolver]
        pass_order = "capabilities_first"
        match_strategy = "substring"
    "#,
    )
    .unwrap();

    let overlay: toml::Value = toml::from_str(
        r#"
        [resolver]
        match_strategy = "glob"
        [logging]
        level = "warn"
    "#,
    )
    .unwrap();

    let mut sources = FieldSources::new();
    record_leaves(&base, "", &ConfigLayer::Defaults, &mut sources);
    deep_merge_tracking(&mut base, &overlay, "", &ConfigLayer::User, &mut sources);

    assert_eq!(
        sources.get("resolver.pass_order"),
        Some(&ConfigLayer::Defaults)
    );
    assert_eq!(
        sources.get("resolver.match_strategy"),
        Some(&ConfigLayer::User)
    );
    assert_eq!(sources.get("logging.level"), Some(&ConfigLayer::User));
}

#[test]
fn test_set_nested_requires_parent_table() {
    let mut base: toml::Value = toml::from_str(
        r#"
        [logging]
        level = "info"
    "#,
    )
    .unwrap();

    set_nested(
        &mut base,
        &["logging", "level"],
        toml::Value::String("trace".to_owned()),
    );
    set_nested(
        &mut base,
        &["missing", "key"],
        toml::Value::Boolean(true),
    );

    let table = base.as_table().unwrap();
    assert_eq!(
        table["logging"].as_table().unwrap()["level"].as_str().unwrap(),
        "trace"
    );
    assert!(!table.contains_key("missing"));
}
