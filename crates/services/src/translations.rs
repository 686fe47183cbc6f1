//! UI string catalog with remote fetch and an embedded English fallback.

use std::collections::HashMap;

use crate::error::TranslationsError;

type Dictionary = HashMap<String, String>;

/// Translated UI strings, keyed by language code and then by string key.
///
/// Lookup falls through requested language → English → the raw key, so a
/// partially translated catalog still renders something usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    languages: HashMap<String, Dictionary>,
}

impl TranslationCatalog {
    #[must_use]
    pub fn new(languages: HashMap<String, Dictionary>) -> Self {
        Self { languages }
    }

    /// The embedded English catalog used when the remote fetch fails.
    #[must_use]
    pub fn fallback() -> Self {
        let english: Dictionary = [
            ("title", "Multiplication Practice"),
            ("minNumber", "Minimum Number:"),
            ("maxNumber", "Maximum Number:"),
            ("timerMinutes", "Timer (minutes):"),
            ("readyButton", "Ready - Start Practice!"),
            ("progress", "Progress"),
            ("finish", "Finish"),
            ("settings", "Settings"),
            ("practiceComplete", "Practice Complete!"),
            ("time", "Time:"),
            ("yourAnswer", "Your answer:"),
            ("noAnswer", "No answer"),
            ("practiceAgain", "Practice Again"),
            (
                "shareMessage",
                "I scored {score}% ({correct}/{total}) in {time} practicing arithmetic!",
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

        Self {
            languages: HashMap::from([("en".to_owned(), english)]),
        }
    }

    /// Download a catalog as JSON (`{ "en": { "title": "..." }, ... }`).
    ///
    /// # Errors
    ///
    /// Returns `TranslationsError::HttpStatus` on a non-success response and
    /// `TranslationsError::Http` on transport or decode failures.
    pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Self, TranslationsError> {
        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslationsError::HttpStatus(status));
        }
        let languages = response.json::<HashMap<String, Dictionary>>().await?;
        Ok(Self { languages })
    }

    /// Like [`TranslationCatalog::fetch`] but never fails: any error yields
    /// the embedded fallback.
    pub async fn fetch_or_fallback(client: &reqwest::Client, url: &str) -> Self {
        match Self::fetch(client, url).await {
            Ok(catalog) => catalog,
            Err(_) => Self::fallback(),
        }
    }

    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Resolve `key` for `language`, falling through to English and finally
    /// to the key itself.
    #[must_use]
    pub fn lookup<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.languages
            .get(language)
            .and_then(|dict| dict.get(key))
            .or_else(|| self.languages.get("en").and_then(|dict| dict.get(key)))
            .map_or(key, String::as_str)
    }
}
