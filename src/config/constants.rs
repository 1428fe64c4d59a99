pub const CONFIG_PATH_ENV: &str = "PROMPTP_CONFIG";
pub const CONFIG_DIR_NAME: &str = ".promptp";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SAMPLE_CONFIG: &str = r#"# promptp configuration

[engine]
# Content type used when --type is not given: "text", "image" or "code"
default_type = "text"

# Default tone; one of the names listed by `promptp catalog`
tone = "professional"

# "short", "medium" or "long"
length = "medium"

# Fixes the random picks in image prompts. Remove for varied output.
# seed = 42

[output]
# "text" or "json"
format = "text"
show_suggestions = true
show_metadata = true
"#;
