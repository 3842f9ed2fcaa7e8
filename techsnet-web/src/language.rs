use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        "en",
        LanguageInfo {
            code: "en",
            translation: include_str!("../translations/en.json"),
            native_name: "English",
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_ships_valid_json() {
        let languages = supported_languages();
        let english = languages.get(DEFAULT_LANGUAGE).expect("english is shipped");
        let parsed: serde_json::Value =
            serde_json::from_str(english.translation).expect("translation is JSON");
        assert!(parsed.get("nav").is_some());
        assert!(parsed.pointer("/login/google").is_some());
    }
}
