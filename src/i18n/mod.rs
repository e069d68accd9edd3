//! Localized UI strings.
//!
//! `I18n` resolves dot-separated keys (`employees.form.save`) in the active
//! language. Missing keys are logged and returned verbatim so the UI shows
//! something instead of failing.

mod catalog;

pub use catalog::{Catalog, I18nError};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::bus::{Listener, Subscription, SubscriptionBus};
use crate::model::Language;
use crate::store::Store;

/// Shared translation service. Clones share the active language.
#[derive(Clone)]
pub struct I18n {
    inner: Arc<I18nInner>,
}

struct I18nInner {
    catalog: Catalog,
    language: RwLock<Language>,
    bus: SubscriptionBus<Language>,
}

impl I18n {
    /// Builtin translations, starting in `language`.
    pub fn new(language: Language) -> Self {
        Self::with_catalog(Catalog::builtin(), language)
    }

    pub fn with_catalog(catalog: Catalog, language: Language) -> Self {
        Self {
            inner: Arc::new(I18nInner {
                catalog,
                language: RwLock::new(language),
                bus: SubscriptionBus::new(),
            }),
        }
    }

    pub fn language(&self) -> Language {
        *self.inner.language.read()
    }

    /// Switch the active language.
    ///
    /// Languages without a table are ignored. Subscribers are notified only
    /// when the language actually changes. Returns whether it changed.
    pub fn set_language(&self, language: Language) -> bool {
        if !self.inner.catalog.has_language(language) {
            tracing::warn!(language = language.code(), "No translations for language");
            return false;
        }
        {
            let mut current = self.inner.language.write();
            if *current == language {
                return false;
            }
            *current = language;
        }
        tracing::debug!(language = language.code(), "Language changed");
        self.inner.bus.notify(&language);
        true
    }

    /// Translate `key`, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        let language = self.language();
        match self.inner.catalog.lookup(language, key) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key, language = language.code(), "Translation key not found");
                key.to_string()
            }
        }
    }

    /// Translate `key` and substitute `{name}` placeholders.
    ///
    /// Every occurrence of a placeholder is replaced. Placeholders without
    /// a matching variable are left as is.
    pub fn t_format(&self, key: &str, variables: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in variables {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Language-change subscription.
    pub fn subscribe(&self, listener: Listener<Language>) -> Subscription {
        self.inner.bus.subscribe(listener)
    }

    pub fn subscribe_fn<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Language) + Send + Sync + 'static,
    {
        self.inner.bus.subscribe_fn(listener)
    }

    /// Track the store's `language` field from now on.
    pub fn follow(&self, store: &Store) -> Subscription {
        self.set_language(store.state().language);
        let i18n = self.clone();
        store.subscribe_fn(move |state| {
            if state.language != i18n.language() {
                i18n.set_language(state.language);
            }
        })
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn translates_active_language() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.t("employees.form.save"), "Save");
        i18n.set_language(Language::Tr);
        assert_eq!(i18n.t("employees.form.save"), "Kaydet");
    }

    #[test]
    fn missing_key_returns_key() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.t("employees.unknown.key"), "employees.unknown.key");
    }

    #[test]
    fn format_replaces_every_occurrence() {
        let catalog =
            Catalog::from_sources(&[(Language::En, "greet = \"{name}, hi {name}! {other}\"")])
                .unwrap();
        let i18n = I18n::with_catalog(catalog, Language::En);
        assert_eq!(
            i18n.t_format("greet", &[("name", "Ada")]),
            "Ada, hi Ada! {other}"
        );
    }

    #[test]
    fn format_builtin_confirmation() {
        let i18n = I18n::new(Language::En);
        assert_eq!(
            i18n.t_format("employees.confirmations.delete", &[("fullName", "Ada Lovelace")]),
            "You are now deleting the record of Ada Lovelace. Are you sure?"
        );
    }

    #[test]
    fn language_subscribers_fire_on_change_only() {
        let i18n = I18n::new(Language::En);
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        i18n.subscribe_fn(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!i18n.set_language(Language::En));
        assert!(i18n.set_language(Language::Tr));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_table_is_ignored() {
        let catalog = Catalog::from_sources(&[(Language::En, "a = \"b\"")]).unwrap();
        let i18n = I18n::with_catalog(catalog, Language::En);
        assert!(!i18n.set_language(Language::Tr));
        assert_eq!(i18n.language(), Language::En);
    }

    #[test]
    fn follows_store_language() {
        let store = Store::in_memory();
        let i18n = I18n::new(Language::En);
        let sub = i18n.follow(&store);

        store.set_language(Language::Tr);
        assert_eq!(i18n.language(), Language::Tr);

        sub.unsubscribe();
        store.set_language(Language::En);
        assert_eq!(i18n.language(), Language::Tr);
    }
}
