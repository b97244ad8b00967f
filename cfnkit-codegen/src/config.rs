//! Generator configuration

/// Options controlling the emitted Rust code
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenConfig {
    /// Path of the core crate in generated `use` statements
    pub core_crate: String,
    /// Path of the registry entry type in generated modules
    pub registry_type: String,
    /// Maximum description length (in characters) kept in doc comments
    pub description_max_len: usize,
    /// Definition name that maps to the core `CfnTag`
    pub tag_definition: String,
    /// Treat ``value`` lists in string descriptions as enum values
    pub infer_enums_from_descriptions: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            core_crate: "cfnkit_core".to_string(),
            registry_type: "crate::ResourceTypeInfo".to_string(),
            description_max_len: 200,
            tag_definition: "Tag".to_string(),
            infer_enums_from_descriptions: false,
        }
    }
}

impl CodegenConfig {
    /// Collapse whitespace and truncate to `description_max_len` characters
    pub fn clean_description(&self, description: &str) -> String {
        let collapsed = description.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() > self.description_max_len {
            let truncated: String = collapsed.chars().take(self.description_max_len).collect();
            format!("{}...", truncated.trim_end())
        } else {
            collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CodegenConfig::default();
        assert_eq!(config.core_crate, "cfnkit_core");
        assert_eq!(config.description_max_len, 200);
        assert_eq!(config.tag_definition, "Tag");
        assert!(!config.infer_enums_from_descriptions);
    }

    #[test]
    fn clean_description_collapses_whitespace() {
        let config = CodegenConfig::default();
        assert_eq!(
            config.clean_description("The  certificate\n   status."),
            "The certificate status."
        );
    }

    #[test]
    fn clean_description_truncates_on_char_boundary() {
        let config = CodegenConfig {
            description_max_len: 5,
            ..Default::default()
        };
        assert_eq!(config.clean_description("héllo wörld"), "héllo...");
        assert_eq!(config.clean_description("short"), "short");
    }
}
