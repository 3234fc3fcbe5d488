use collapse::{BinderConfig, ConfigError, ToggleBinder};
use pagedom::Key;

#[test]
fn test_defaults() {
    let config = BinderConfig::default();
    assert_eq!(config.container_selector, ".collapse");
    assert_eq!(config.title_selector, ".collapse-title");
    assert_eq!(config.default_tabindex, "0");
    assert_eq!(config.trigger_keys, vec![Key::Enter, Key::SPACE]);

    let binder = ToggleBinder::new(config).unwrap();
    assert_eq!(binder.trigger_keys(), ToggleBinder::default().trigger_keys());
    assert_eq!(
        binder.container_selector(),
        ToggleBinder::default().container_selector()
    );
}

#[test]
fn test_from_json_fills_missing_fields() {
    let config = BinderConfig::from_json(r#"{ "trigger_keys": ["Enter"] }"#).unwrap();
    assert_eq!(config.trigger_keys, vec![Key::Enter]);
    assert_eq!(config.container_selector, ".collapse");
}

#[test]
fn test_from_json_space_key() {
    let config = BinderConfig::from_json(r#"{ "trigger_keys": [" ", "Enter"] }"#).unwrap();
    assert_eq!(config.trigger_keys, vec![Key::SPACE, Key::Enter]);
}

#[test]
fn test_from_json_rejects_unknown_key() {
    let err = BinderConfig::from_json(r#"{ "trigger_keys": ["Meta+Q"] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_invalid_selector() {
    let config = BinderConfig {
        title_selector: ".collapse .title".to_string(),
        ..Default::default()
    };
    let err = ToggleBinder::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::Selector { field: "title", .. }));
    assert!(err.to_string().starts_with("invalid title selector"));
}

#[test]
fn test_empty_trigger_keys() {
    let config = BinderConfig {
        trigger_keys: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(
        ToggleBinder::new(config),
        Err(ConfigError::NoTriggerKeys)
    ));
}
