//! Language selection passed explicitly to consumers.

use super::dictionary::Dictionary;
use super::language::Language;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Current language plus the dictionaries for every language.
///
/// Consumers receive the context (or a clone of it) at construction; there
/// is no process-wide language. Clones share the selection, and
/// [`subscribe`](Self::subscribe) lets views react to switches.
#[derive(Clone)]
pub struct LanguageContext {
    current: Arc<watch::Sender<Language>>,
    ar: Arc<Dictionary>,
    en: Arc<Dictionary>,
}

impl LanguageContext {
    /// Context with the bundled dictionaries.
    pub fn new(language: Language) -> Self {
        Self::with_dictionaries(
            language,
            Dictionary::builtin(Language::Ar),
            Dictionary::builtin(Language::En),
        )
    }

    pub fn with_dictionaries(language: Language, ar: Dictionary, en: Dictionary) -> Self {
        let (current, _) = watch::channel(language);
        Self {
            current: Arc::new(current),
            ar: Arc::new(ar),
            en: Arc::new(en),
        }
    }

    pub fn language(&self) -> Language {
        *self.current.borrow()
    }

    pub fn set(&self, language: Language) {
        let changed = self.current.send_if_modified(|current| {
            let changed = *current != language;
            *current = language;
            changed
        });
        if changed {
            debug!(language = %language, dir = %language.dir(), "Language changed");
        }
    }

    /// Switches between Arabic and English and returns the new language.
    pub fn toggle(&self) -> Language {
        let next = self.language().toggled();
        self.set(next);
        next
    }

    pub fn dictionary(&self) -> &Dictionary {
        match self.language() {
            Language::Ar => &*self.ar,
            Language::En => &*self.en,
        }
    }

    /// Translates `key` in the current language.
    pub fn t(&self, key: &str) -> String {
        self.dictionary().translate(key).to_string()
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.current.subscribe()
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
