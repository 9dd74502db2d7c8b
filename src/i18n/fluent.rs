// SPDX-License-Identifier: MPL-2.0
//! Fluent-based message lookup with embedded `.ftl` bundles.
//!
//! Locale resolution order: CLI flag, then config file, then the OS locale,
//! then `en-US`. Only locales with an embedded bundle are eligible.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Locales;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Locales::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Locales::get(filename) {
                        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                        let res = FluentResource::try_new(source)
                            .expect("embedded FTL file is well-formed");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle
                            .add_resource(res)
                            .expect("embedded FTL file has no duplicate messages");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        let default_locale: LanguageIdentifier = "en-US".parse().expect("valid default locale");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// The locale messages are currently resolved against.
    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Locales that shipped with an embedded bundle.
    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Looks up a message by key in the current locale.
    ///
    /// A missing key renders as `MISSING: <key>` so untranslated strings are
    /// visible in the UI instead of silently blank.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI flag
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "ru".parse().unwrap()]
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("ru".to_string()), &config, &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli_flag() {
        let config = Config {
            language: Some("ru".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn unavailable_locale_is_skipped() {
        let config = Config {
            language: Some("ja".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &available());
        // Falls through to the OS locale, which is system dependent; it can
        // only be one of the available locales or nothing.
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_include_english_and_russian() {
        let i18n = I18n::default();
        assert!(i18n.available_locales().contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales().contains(&"ru".parse().unwrap()));
    }

    #[test]
    fn tr_renders_known_key() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("gallery-next-button"), "Next");
    }

    #[test]
    fn tr_flags_missing_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
