//! Internationalization module
//!
//! Provides translations for English (en) and Indonesian (id).
//! Supports automatic language detection based on system locale.

mod en;
mod id;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang
        };

        self.translations = match lang {
            "id" => id::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "id" { "id" } else { "en" }.to_string();

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string and fill its `{}` placeholders in order
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let template = self.get(key);
        let mut out = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut rest = template.as_str();
        while let Some(pos) = rest.find("{}") {
            out.push_str(&rest[..pos]);
            out.push_str(args.next().copied().unwrap_or("{}"));
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("id", "Bahasa Indonesia")]
    }

    /// Whether `lang` is "auto" or one of the available language codes
    pub fn is_supported(lang: &str) -> bool {
        lang == "auto" || Self::available_languages().iter().any(|(code, _)| *code == lang)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the usual locale variables
fn detect_system_language() -> &'static str {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_from_locale(&lang_env)
}

/// Extract a supported language code (e.g., "id_ID.UTF-8" -> "id")
fn language_from_locale(locale: &str) -> &'static str {
    let lang_code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code {
        "id" | "in" => "id",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_languages_have_same_keys() {
        let en: HashSet<String> = en::get_translations().into_keys().collect();
        let id: HashSet<String> = id::get_translations().into_keys().collect();
        assert_eq!(en, id);
    }

    #[test]
    fn test_get_and_fallback() {
        let i18n = I18n::new("id");
        assert_eq!(i18n.current_language(), "id");
        assert_eq!(i18n.get("table.cost"), "Biaya");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        let i18n = I18n::new("fr");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("table.cost"), "Cost");
    }

    #[test]
    fn test_format_placeholders() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.format("tariff.rate", &["Rp", "1,444.70"]), "Rate: Rp 1,444.70 per kWh");
        assert_eq!(i18n.format("summary.devices", &[]), "{} device(s)");
    }

    #[test]
    fn test_is_supported() {
        assert!(I18n::is_supported("auto"));
        assert!(I18n::is_supported("en"));
        assert!(I18n::is_supported("id"));
        assert!(!I18n::is_supported("fr"));
        assert!(!I18n::is_supported(""));
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("id_ID.UTF-8"), "id");
        assert_eq!(language_from_locale("en_US.UTF-8"), "en");
        assert_eq!(language_from_locale("C"), "en");
    }
}
