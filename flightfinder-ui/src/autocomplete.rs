use flightfinder_core::gateway::SuggestionSource;
use flightfinder_core::{normalize_code, CodeLookup, Suggestion};
use flightfinder_store::Config;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use crate::dom::{ClickEvent, Document, ElementRef};
use crate::error::UiResult;

/// A visible text field and the hidden field carrying its airport code
#[derive(Clone)]
pub struct FieldPair {
    pub text: ElementRef,
    pub code: ElementRef,
}

impl FieldPair {
    pub fn new(text: ElementRef, code: ElementRef) -> Self {
        Self { text, code }
    }

    /// Fill an empty hidden code from the visible text. Returns the code
    /// written, or `Unrecognized` when nothing was written: either a code was
    /// already present (left untouched, text not read) or the text holds none.
    pub fn backfill_code(&self) -> CodeLookup {
        if !self.code.value().trim().is_empty() {
            return CodeLookup::Unrecognized;
        }
        let lookup = normalize_code(&self.text.value());
        if let CodeLookup::Code(code) = &lookup {
            debug!("Backfilled #{} with {}", self.code.id(), code);
            self.code.set_value(code.as_str());
        }
        lookup
    }

    pub fn clear(&self) {
        self.text.set_value("");
        self.code.set_value("");
    }
}

/// Element ids one autocomplete is wired to
#[derive(Debug, Clone)]
pub struct AutocompleteBinding {
    pub text_id: String,
    pub code_id: String,
    pub list_id: String,
    /// Clicks outside this element close the list
    pub container_id: String,
    /// Inline, non-blocking message shown when lookups fail
    pub status_id: String,
}

impl AutocompleteBinding {
    pub fn new(text_id: &str, code_id: &str, list_id: &str, container_id: &str, status_id: &str) -> Self {
        Self {
            text_id: text_id.to_string(),
            code_id: code_id.to_string(),
            list_id: list_id.to_string(),
            container_id: container_id.to_string(),
            status_id: status_id.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutocompleteSettings {
    pub min_query_length: usize,
    pub lookup_failed_message: String,
}

impl From<&Config> for AutocompleteSettings {
    fn from(config: &Config) -> Self {
        Self {
            min_query_length: config.suggestions.min_query_length,
            lookup_failed_message: config.form.lookup_failed_message.clone(),
        }
    }
}

/// What a keystroke ended up doing to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Query too short, no lookup issued
    Cleared,
    Rendered(usize),
    NoMatches,
    Failed,
    /// A newer keystroke or selection happened while this lookup was in flight
    Superseded,
}

pub struct AutocompleteController {
    pair: FieldPair,
    list: ElementRef,
    status: ElementRef,
    container_id: String,
    source: Arc<dyn SuggestionSource>,
    settings: AutocompleteSettings,
    latest: AtomicU64,
    shown: RwLock<Vec<Suggestion>>,
    chosen_label: RwLock<Option<String>>,
}

impl AutocompleteController {
    pub fn attach(
        document: &Document,
        binding: &AutocompleteBinding,
        source: Arc<dyn SuggestionSource>,
        settings: AutocompleteSettings,
    ) -> UiResult<Self> {
        let pair = FieldPair::new(document.get(&binding.text_id)?, document.get(&binding.code_id)?);
        let list = document.get(&binding.list_id)?;
        let status = document.get(&binding.status_id)?;
        // The container only has to exist; clicks are matched by id
        document.get(&binding.container_id)?;

        list.set_visible(false);
        status.set_visible(false);

        Ok(Self {
            pair,
            list,
            status,
            container_id: binding.container_id.clone(),
            source,
            settings,
            latest: AtomicU64::new(0),
            shown: RwLock::new(Vec::new()),
            chosen_label: RwLock::new(None),
        })
    }

    pub fn pair(&self) -> &FieldPair {
        &self.pair
    }

    pub fn list(&self) -> &ElementRef {
        &self.list
    }

    pub fn status(&self) -> &ElementRef {
        &self.status
    }

    /// React to the visible field changing. Lookups run concurrently; only
    /// the most recently issued one may touch the list.
    pub async fn on_input(&self) -> LookupOutcome {
        let text = self.pair.text.value();
        self.forget_stale_code(&text).await;

        let query = text.trim();
        if query.chars().count() < self.settings.min_query_length {
            self.latest.fetch_add(1, Ordering::SeqCst);
            self.close().await;
            return LookupOutcome::Cleared;
        }

        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(seq, query, field = self.pair.text.id(), "Looking up suggestions");
        let result = self.source.lookup(query).await;

        // Holding the list lock orders the sequence check against other renders
        let mut shown = self.shown.write().await;
        if self.latest.load(Ordering::SeqCst) != seq {
            debug!(seq, field = self.pair.text.id(), "Discarding superseded suggestions");
            return LookupOutcome::Superseded;
        }

        match result {
            Ok(suggestions) if suggestions.is_empty() => {
                shown.clear();
                self.hide_list();
                self.hide_status();
                LookupOutcome::NoMatches
            }
            Ok(suggestions) => {
                let count = suggestions.len();
                self.list.set_rows(suggestions.iter().map(Suggestion::label).collect());
                self.list.set_visible(true);
                self.hide_status();
                *shown = suggestions;
                LookupOutcome::Rendered(count)
            }
            Err(e) => {
                warn!("Suggestion lookup for '{}' failed: {}", query, e);
                shown.clear();
                self.hide_list();
                self.status.set_text(&self.settings.lookup_failed_message);
                self.status.set_visible(true);
                LookupOutcome::Failed
            }
        }
    }

    /// Choose the row at `index` of the rendered list
    pub async fn select(&self, index: usize) -> Option<Suggestion> {
        let mut shown = self.shown.write().await;
        let suggestion = shown.get(index).cloned()?;
        let label = suggestion.label();

        self.pair.text.set_value(&label);
        self.pair.code.set_value(&suggestion.code);
        *self.chosen_label.write().await = Some(label);

        // A late response must not reopen the list
        self.latest.fetch_add(1, Ordering::SeqCst);
        shown.clear();
        self.hide_list();
        self.hide_status();

        debug!("Selected {} for #{}", suggestion.code, self.pair.text.id());
        Some(suggestion)
    }

    pub async fn handle_click(&self, event: &ClickEvent) {
        if !event.passes_through(&self.container_id) {
            // Dismissed: a lookup still in flight must not reopen the list
            self.latest.fetch_add(1, Ordering::SeqCst);
            if self.list.is_visible() {
                self.close().await;
            }
            return;
        }

        if let Some(index) = event.row {
            if event.passes_through(self.list.id()) {
                self.select(index).await;
            }
        }
    }

    /// Empty and hide the list and any inline message
    pub async fn close(&self) {
        self.shown.write().await.clear();
        self.hide_list();
        self.hide_status();
    }

    /// Back to a pristine field: nothing typed, nothing chosen, list closed
    pub async fn reset(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.pair.clear();
        *self.chosen_label.write().await = None;
        self.close().await;
    }

    async fn forget_stale_code(&self, text: &str) {
        let mut chosen = self.chosen_label.write().await;
        if chosen.as_deref() == Some(text) {
            return;
        }
        if chosen.take().is_some() || !self.pair.code.value().is_empty() {
            self.pair.code.set_value("");
        }
    }

    fn hide_list(&self) {
        self.list.set_rows(Vec::new());
        self.list.set_visible(false);
    }

    fn hide_status(&self) {
        self.status.set_text("");
        self.status.set_visible(false);
    }
}
