//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "shiplog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "shiplog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".shiplog.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".shiplog.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# shiplog configuration

[git]
# since_tag = "v1.0.0"

[changelog]
file = "CHANGELOG.md"
insert_offset = 4
date_format = "%Y-%m-%d"

[ticket]
project_code = "M3"

[keywords]
excluded = ["test", "script", "storybook", "e2e"]
breaking = ["break", "deprecate"]
changed = ["update", "change", "perf"]
fixed = ["fix", "repair", "bug", "docs", "refactor", "build"]

[report]
emit_empty_query = false
"#;
