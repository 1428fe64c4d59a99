pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_prompt_type() -> String {
        "text".to_string()
    }

    pub fn default_length() -> String {
        "medium".to_string()
    }

    pub fn default_output_format() -> String {
        "text".to_string()
    }

    pub fn default_show_suggestions() -> bool {
        true
    }

    pub fn default_show_metadata() -> bool {
        true
    }
}
