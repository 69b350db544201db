//! Integration tests for mapping `-v` counts to filter directives.

use logging::{LogConfig, LogLevel};

#[test]
fn quiet_maps_to_warn() {
    let config = LogConfig::from_verbose_level(0);
    assert_eq!(config.level(), LogLevel::Warn);
    assert_eq!(config, LogConfig::default());
}

#[test]
fn each_flag_raises_sstr_targets_only() {
    for (count, level) in [(1, "info"), (2, "debug"), (3, "trace")] {
        let directives = LogConfig::from_verbose_level(count).filter_directives();
        assert_eq!(directives, format!("warn,sstr={level}"));
    }
}

#[test]
fn default_level_override_is_respected() {
    let config = LogConfig {
        default_level: LogLevel::Info,
        ..LogConfig::from_verbose_level(1)
    };
    assert_eq!(config.filter_directives(), "info");
}

#[cfg(feature = "tracing")]
#[test]
fn second_install_is_rejected() {
    let config = LogConfig::from_verbose_level(3);
    let first = logging::init_tracing(&config);
    let second = logging::init_tracing(&config);
    assert!(first.is_ok());
    assert!(second.is_err());
}
