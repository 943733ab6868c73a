//! 日志配置功能测试

use autotranslate::infrastructure::logging::level_directive;

#[test]
fn test_log_level_parsing() {
    for (level, expected) in [
        ("DEBUG", "debug"),
        ("INFO", "info"),
        ("WARN", "warn"),
        ("ERROR", "error"),
        ("TRACE", "trace"),
    ] {
        assert_eq!(level_directive(level), expected);
    }
}

#[test]
fn test_log_level_is_case_insensitive() {
    assert_eq!(level_directive("debug"), "debug");
    assert_eq!(level_directive("Info"), "info");
}

#[test]
fn test_log_level_default() {
    assert_eq!(level_directive(""), "warn");
    assert_eq!(level_directive("verbose"), "warn");
}
