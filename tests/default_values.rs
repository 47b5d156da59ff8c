//! Tests for default value lookup through the public API

use runner_options::config::{DEFAULT_OPTIONS, find_option, registered_options};
use runner_options::{DefaultValue, get_default_config_value};

#[test]
fn test_returns_the_default_value() {
    assert_eq!(get_default_config_value("self-hosted"), Some(DefaultValue::Bool(false)));
    assert_eq!(get_default_config_value("privileged"), Some(DefaultValue::Bool(false)));
}

#[test]
fn test_defaults_compare_as_booleans() {
    let self_hosted = get_default_config_value("self-hosted").unwrap();
    assert!(self_hosted == false);
    assert_eq!(self_hosted.as_bool(), Some(false));
}

#[test]
fn test_returns_none_for_unknown_option() {
    assert!(get_default_config_value("unknown").is_none());
    assert!(get_default_config_value("").is_none());
    assert!(get_default_config_value("Self-Hosted").is_none());
}

#[test]
fn test_lookup_is_repeatable() {
    for _ in 0..3 {
        assert_eq!(get_default_config_value("privileged"), Some(DefaultValue::Bool(false)));
        assert_eq!(get_default_config_value("unknown"), None);
    }
}

#[test]
fn test_lookup_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| get_default_config_value("self-hosted")))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(DefaultValue::Bool(false)));
    }
}

#[test]
fn test_registry_exposes_descriptions() {
    assert_eq!(registered_options().len(), DEFAULT_OPTIONS.len());
    let entry = find_option("self-hosted").unwrap();
    assert_eq!(entry.value, DefaultValue::Bool(false));
    assert!(!entry.description.is_empty());
}
