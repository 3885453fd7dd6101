use flightfinder_core::gateway::SuggestionSource;
use flightfinder_core::passengers::PassengerCount;
use flightfinder_core::trip::default_second_leg_date;
use flightfinder_core::{CodeLookup, FieldRule, TripType};
use flightfinder_store::Config;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::autocomplete::{AutocompleteBinding, AutocompleteController, AutocompleteSettings};
use crate::dom::{ClickEvent, Document, ElementRef, PageShowEvent};
use crate::error::{UiError, UiResult, ValidationError};

/// Element ids of the search form. The defaults match the page markup.
#[derive(Debug, Clone)]
pub struct FormLayout {
    pub origin: AutocompleteBinding,
    pub destination: AutocompleteBinding,
    pub second_destination: AutocompleteBinding,
    pub trip_type: String,
    pub date_from: String,
    pub return_group: String,
    pub date_to: String,
    pub multi_city_group: String,
    pub second_date: String,
    pub adults: String,
    /// Counts the backend rejects when sent as zero or blank
    pub optional_counts: Vec<String>,
    /// Other named controls that are submitted and cleared as-is
    pub other_fields: Vec<String>,
    pub loading: String,
    pub submit_button: String,
    pub alert: String,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            origin: AutocompleteBinding::new(
                "origin_text",
                "origin_code",
                "origin_text-list",
                "origin_group",
                "origin_text-status",
            ),
            destination: AutocompleteBinding::new(
                "destination_text",
                "destination_code",
                "destination_text-list",
                "destination_group",
                "destination_text-status",
            ),
            second_destination: AutocompleteBinding::new(
                "destination_text_2",
                "destination_code_2",
                "destination_text_2-list",
                "destination_group_2",
                "destination_text_2-status",
            ),
            trip_type: "trip_type".to_string(),
            date_from: "date_from".to_string(),
            return_group: "returnDateGroup".to_string(),
            date_to: "date_to".to_string(),
            multi_city_group: "multiCityGroup".to_string(),
            second_date: "date_from_2".to_string(),
            adults: "adults".to_string(),
            optional_counts: vec!["children".to_string(), "infants".to_string()],
            other_fields: vec!["cabin_class".to_string()],
            loading: "loading".to_string(),
            submit_button: "search_button".to_string(),
            alert: "form_alert".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormLabels {
    pub submit: String,
    pub working: String,
    pub multi_city_message: String,
}

impl From<&Config> for FormLabels {
    fn from(config: &Config) -> Self {
        Self {
            submit: config.form.submit_label.clone(),
            working: config.form.working_label.clone(),
            multi_city_message: config.form.multi_city_message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// Name/value pairs the browser posts: enabled, named controls in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Let the native post go ahead with this payload
    Proceed(FormPayload),
    Blocked(ValidationError),
    /// A submission is already running
    Ignored,
}

pub struct FormOrchestrator {
    origin: AutocompleteController,
    destination: AutocompleteController,
    second_destination: AutocompleteController,
    trip_type: ElementRef,
    date_from: ElementRef,
    return_group: ElementRef,
    date_to: ElementRef,
    multi_city_group: ElementRef,
    second_date: ElementRef,
    adults: ElementRef,
    optional_counts: Vec<ElementRef>,
    other_fields: Vec<ElementRef>,
    loading: ElementRef,
    submit_button: ElementRef,
    alert: ElementRef,
    labels: FormLabels,
    submitting: AtomicBool,
}

impl FormOrchestrator {
    /// Wire the whole form: three autocompletes, the trip-type toggle and the
    /// submit lifecycle. Leaves the form idle with the selected trip type applied.
    pub fn initialize(
        document: &Document,
        layout: &FormLayout,
        source: Arc<dyn SuggestionSource>,
        config: &Config,
    ) -> UiResult<Self> {
        let settings = AutocompleteSettings::from(config);
        let attach = |binding: &AutocompleteBinding| {
            AutocompleteController::attach(document, binding, source.clone(), settings.clone())
        };
        let lookup_all = |ids: &[String]| -> UiResult<Vec<ElementRef>> {
            ids.iter().map(|id| document.get(id)).collect()
        };

        let form = Self {
            origin: attach(&layout.origin)?,
            destination: attach(&layout.destination)?,
            second_destination: attach(&layout.second_destination)?,
            trip_type: document.get(&layout.trip_type)?,
            date_from: document.get(&layout.date_from)?,
            return_group: document.get(&layout.return_group)?,
            date_to: document.get(&layout.date_to)?,
            multi_city_group: document.get(&layout.multi_city_group)?,
            second_date: document.get(&layout.second_date)?,
            adults: document.get(&layout.adults)?,
            optional_counts: lookup_all(&layout.optional_counts)?,
            other_fields: lookup_all(&layout.other_fields)?,
            loading: document.get(&layout.loading)?,
            submit_button: document.get(&layout.submit_button)?,
            alert: document.get(&layout.alert)?,
            labels: FormLabels::from(config),
            submitting: AtomicBool::new(false),
        };

        form.set_submitting(false);
        form.alert.set_visible(false);
        let trip_type = form.current_trip_type().unwrap_or_else(|e| {
            warn!("{}, falling back to {}", e, TripType::default());
            form.trip_type.set_value(TripType::default().as_str());
            TripType::default()
        });
        form.apply_trip_type(trip_type);

        Ok(form)
    }

    pub fn origin(&self) -> &AutocompleteController {
        &self.origin
    }

    pub fn destination(&self) -> &AutocompleteController {
        &self.destination
    }

    pub fn second_destination(&self) -> &AutocompleteController {
        &self.second_destination
    }

    pub fn submission_state(&self) -> SubmissionState {
        if self.submitting.load(Ordering::SeqCst) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    pub fn current_trip_type(&self) -> UiResult<TripType> {
        let raw = self.trip_type.value();
        raw.parse().map_err(|_| UiError::UnknownTripType(raw))
    }

    /// The trip-type selector changed
    pub fn on_trip_type_change(&self) -> UiResult<TripType> {
        let trip_type = self.current_trip_type()?;
        self.apply_trip_type(trip_type);
        Ok(trip_type)
    }

    fn apply_trip_type(&self, trip_type: TripType) {
        let rules = trip_type.field_rules();
        debug!(%trip_type, "Applying trip type");

        self.return_group.set_visible(rules.return_date.visible);
        apply_rule(&self.date_to, rules.return_date);
        if trip_type == TripType::OneWay {
            self.date_to.set_value("");
        }

        let second = self.second_destination.pair();
        self.multi_city_group.set_visible(rules.second_leg.visible);
        apply_rule(&second.text, rules.second_leg);
        apply_rule(&self.second_date, rules.second_leg);
        // The hidden code travels with its text field but is never "required"
        second.code.set_disabled(!rules.second_leg.enabled);

        if trip_type == TripType::MultiCity && self.second_date.value().trim().is_empty() {
            if let Some(date) = default_second_leg_date(&self.date_from.value()) {
                self.second_date.set_value(&date);
            }
        }

        self.enable_optional_counts();
    }

    /// Fill empty hidden codes from what was typed. Returns how many were filled.
    pub fn extract_codes(&self) -> usize {
        let mut filled = 0;
        for controller in [&self.origin, &self.destination, &self.second_destination] {
            if let CodeLookup::Code(_) = controller.pair().backfill_code() {
                filled += 1;
            }
        }
        filled
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let trip_type = self.current_trip_type().unwrap_or_default();
        if trip_type == TripType::MultiCity
            && self.second_destination.pair().code.value().trim().is_empty()
        {
            return Err(ValidationError::MissingSecondDestination);
        }
        Ok(())
    }

    /// Disable optional counts the backend would reject so they are left out
    fn omit_rejected_counts(&self) {
        for field in &self.optional_counts {
            match PassengerCount::parse(&field.value()) {
                PassengerCount::Omitted => field.set_disabled(true),
                PassengerCount::Invalid => {
                    warn!("#{} holds '{}', not a passenger count", field.id(), field.value())
                }
                PassengerCount::Count(_) => {}
            }
        }
    }

    fn enable_optional_counts(&self) {
        for field in &self.optional_counts {
            field.set_disabled(false);
        }
    }

    /// The form is being submitted. Codes are extracted before the guards run;
    /// on success the loading state is shown and the native post proceeds.
    pub fn submit(&self) -> SubmitOutcome {
        if self.submission_state() == SubmissionState::Submitting {
            debug!("Submit ignored, search already running");
            return SubmitOutcome::Ignored;
        }

        self.extract_codes();

        if let Err(e) = self.validate() {
            warn!("Search blocked: {}", e);
            let message = match e {
                ValidationError::MissingSecondDestination => &self.labels.multi_city_message,
            };
            self.alert.set_text(message);
            self.alert.set_visible(true);
            return SubmitOutcome::Blocked(e);
        }

        self.alert.set_text("");
        self.alert.set_visible(false);
        self.omit_rejected_counts();
        self.set_submitting(true);

        let payload = self.payload();
        info!(
            origin = payload.get("origin_code").unwrap_or_default(),
            destination = payload.get("destination_code").unwrap_or_default(),
            "Submitting flight search"
        );
        SubmitOutcome::Proceed(payload)
    }

    /// What the browser would post right now
    pub fn payload(&self) -> FormPayload {
        let mut fields = Vec::new();
        for element in self.controls() {
            if element.is_disabled() {
                continue;
            }
            if let Some(name) = element.name() {
                fields.push((name.to_string(), element.value()));
            }
        }
        FormPayload { fields }
    }

    fn controls(&self) -> Vec<&ElementRef> {
        let mut controls = Vec::new();
        for controller in [&self.origin, &self.destination] {
            controls.push(&controller.pair().text);
            controls.push(&controller.pair().code);
        }
        controls.extend([&self.trip_type, &self.date_from, &self.date_to]);
        let second = self.second_destination.pair();
        controls.extend([&second.text, &second.code, &self.second_date, &self.adults]);
        controls.extend(self.optional_counts.iter());
        controls.extend(self.other_fields.iter());
        controls
    }

    /// The "Clear" button: empty every field and return to the default trip type
    pub async fn clear(&self) {
        for controller in [&self.origin, &self.destination, &self.second_destination] {
            controller.reset().await;
        }
        let plain = [&self.date_from, &self.date_to, &self.second_date, &self.adults];
        for field in plain.into_iter().chain(&self.optional_counts).chain(&self.other_fields) {
            reset_control(field);
        }

        self.trip_type.set_value(TripType::default().as_str());
        self.alert.set_text("");
        self.alert.set_visible(false);
        self.set_submitting(false);
        self.apply_trip_type(TripType::default());
        info!("Search form cleared");
    }

    /// The page was shown again, possibly restored from the history cache
    /// after a submission. Whatever was left behind, go back to idle.
    pub fn on_page_show(&self, event: PageShowEvent) {
        debug!(persisted = event.persisted, "Page shown");
        self.set_submitting(false);
        self.enable_optional_counts();
    }

    /// Document-level click, forwarded to every autocomplete
    pub async fn handle_click(&self, event: &ClickEvent) {
        for controller in [&self.origin, &self.destination, &self.second_destination] {
            controller.handle_click(event).await;
        }
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.store(submitting, Ordering::SeqCst);
        self.loading.set_visible(submitting);
        self.submit_button.set_disabled(submitting);
        let label = if submitting { &self.labels.working } else { &self.labels.submit };
        self.submit_button.set_text(label);
    }
}

fn apply_rule(element: &ElementRef, rule: FieldRule) {
    element.set_visible(rule.visible);
    element.set_required(rule.required);
    element.set_disabled(!rule.enabled);
}

/// Empty inputs, first option for selects
fn reset_control(element: &ElementRef) {
    let value = element.options().first().cloned().unwrap_or_default();
    element.set_value(&value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryElement;
    use async_trait::async_trait;
    use flightfinder_core::gateway::LookupError;
    use flightfinder_core::Suggestion;

    struct StaticSource;

    #[async_trait]
    impl SuggestionSource for StaticSource {
        async fn lookup(&self, _query: &str) -> Result<Vec<Suggestion>, LookupError> {
            Ok(vec![Suggestion::new("Rome Fiumicino", "Italy", "FCO")])
        }
    }

    fn search_page() -> Document {
        let mut document = Document::new();
        for (prefix, group) in [
            ("origin", "origin_group"),
            ("destination", "destination_group"),
        ] {
            document.add(MemoryElement::block(group));
            document.add(MemoryElement::input(&format!("{}_text", prefix), &format!("{}_text", prefix)));
            document.add(MemoryElement::hidden(&format!("{}_code", prefix), &format!("{}_code", prefix)));
            document.add(MemoryElement::hidden_block(&format!("{}_text-list", prefix)));
            document.add(MemoryElement::hidden_block(&format!("{}_text-status", prefix)));
        }
        document.add(MemoryElement::block("destination_group_2"));
        document.add(MemoryElement::input("destination_text_2", "destination_text_2"));
        document.add(MemoryElement::hidden("destination_code_2", "destination_code_2"));
        document.add(MemoryElement::hidden_block("destination_text_2-list"));
        document.add(MemoryElement::hidden_block("destination_text_2-status"));

        document.add(MemoryElement::select("trip_type", "trip_type", &["round-trip", "one-way", "multi-city"]));
        document.add(MemoryElement::input("date_from", "date_from"));
        document.add(MemoryElement::block("returnDateGroup"));
        document.add(MemoryElement::input("date_to", "date_to"));
        document.add(MemoryElement::hidden_block("multiCityGroup"));
        document.add(MemoryElement::input("date_from_2", "date_from_2"));
        document.add(MemoryElement::input("adults", "adults").with_value("1"));
        document.add(MemoryElement::input("children", "children"));
        document.add(MemoryElement::input("infants", "infants"));
        document.add(MemoryElement::select("cabin_class", "cabin_class", &["economy", "business", "first"]));
        document.add(MemoryElement::hidden_block("loading"));
        document.add(MemoryElement::button("search_button", "Search Flights"));
        document.add(MemoryElement::hidden_block("form_alert"));
        document
    }

    fn form(document: &Document) -> FormOrchestrator {
        FormOrchestrator::initialize(document, &FormLayout::default(), Arc::new(StaticSource), &Config::default())
            .unwrap()
    }

    fn el(document: &Document, id: &str) -> ElementRef {
        document.get(id).unwrap()
    }

    fn switch(document: &Document, form: &FormOrchestrator, trip_type: TripType) {
        el(document, "trip_type").set_value(trip_type.as_str());
        form.on_trip_type_change().unwrap();
    }

    /// (visible, required, disabled) for each trip-dependent control
    fn snapshot(document: &Document) -> Vec<(bool, bool, bool)> {
        ["returnDateGroup", "date_to", "multiCityGroup", "destination_text_2", "destination_code_2", "date_from_2"]
            .iter()
            .map(|id| {
                let e = el(document, id);
                (e.is_visible(), e.is_required(), e.is_disabled())
            })
            .collect()
    }

    #[test]
    fn test_initialize_requires_every_element() {
        let mut layout = FormLayout::default();
        layout.alert = "missing_alert".to_string();
        let result = FormOrchestrator::initialize(&search_page(), &layout, Arc::new(StaticSource), &Config::default());
        assert!(matches!(result, Err(UiError::MissingElement(id)) if id == "missing_alert"));
    }

    #[test]
    fn test_trip_type_fields() {
        let document = search_page();
        let form = form(&document);

        // Default is round-trip
        assert!(el(&document, "date_to").is_required());
        assert!(el(&document, "returnDateGroup").is_visible());
        assert!(!el(&document, "multiCityGroup").is_visible());
        assert!(el(&document, "destination_text_2").is_disabled());

        switch(&document, &form, TripType::OneWay);
        assert!(!el(&document, "returnDateGroup").is_visible());
        assert!(!el(&document, "date_to").is_required());
        assert!(el(&document, "date_to").is_disabled());
        assert!(!el(&document, "multiCityGroup").is_visible());

        switch(&document, &form, TripType::MultiCity);
        assert!(!el(&document, "date_to").is_required());
        assert!(el(&document, "multiCityGroup").is_visible());
        assert!(el(&document, "destination_text_2").is_required());
        assert!(el(&document, "date_from_2").is_required());
        assert!(!el(&document, "destination_code_2").is_disabled());
    }

    #[test]
    fn test_trip_type_toggle_is_idempotent() {
        for target in TripType::ALL {
            let direct_doc = search_page();
            let direct = form(&direct_doc);
            switch(&direct_doc, &direct, target);

            let toggled_doc = search_page();
            let toggled = form(&toggled_doc);
            for step in TripType::ALL.iter().chain(TripType::ALL.iter().rev()) {
                switch(&toggled_doc, &toggled, *step);
            }
            switch(&toggled_doc, &toggled, target);
            switch(&toggled_doc, &toggled, target);

            assert_eq!(snapshot(&direct_doc), snapshot(&toggled_doc), "{}", target);
        }
    }

    #[test]
    fn test_one_way_clears_return_date() {
        let document = search_page();
        let form = form(&document);
        el(&document, "date_to").set_value("2025-03-10");

        switch(&document, &form, TripType::OneWay);
        assert_eq!(el(&document, "date_to").value(), "");
        assert!(!form.payload().contains("date_to"));
    }

    #[test]
    fn test_multi_city_defaults_second_date() {
        let document = search_page();
        let form = form(&document);
        el(&document, "date_from").set_value("2025-03-01");

        switch(&document, &form, TripType::MultiCity);
        assert_eq!(el(&document, "date_from_2").value(), "2025-03-02");

        // A chosen date is kept
        el(&document, "date_from_2").set_value("2025-03-05");
        switch(&document, &form, TripType::RoundTrip);
        switch(&document, &form, TripType::MultiCity);
        assert_eq!(el(&document, "date_from_2").value(), "2025-03-05");
    }

    #[test]
    fn test_unknown_trip_type_is_rejected() {
        let document = search_page();
        let form = form(&document);
        let before = snapshot(&document);

        el(&document, "trip_type").set_value("open-jaw");
        assert!(matches!(form.on_trip_type_change(), Err(UiError::UnknownTripType(v)) if v == "open-jaw"));
        assert_eq!(snapshot(&document), before);
    }

    #[test]
    fn test_submit_extracts_codes_first() {
        let document = search_page();
        let form = form(&document);
        el(&document, "origin_text").set_value("Paris (CDG)");
        el(&document, "destination_text").set_value("jfk");
        el(&document, "date_from").set_value("2025-03-01");
        el(&document, "date_to").set_value("2025-03-09");

        let SubmitOutcome::Proceed(payload) = form.submit() else {
            panic!("submission should proceed");
        };
        assert_eq!(payload.get("origin_code"), Some("CDG"));
        assert_eq!(payload.get("destination_code"), Some("JFK"));
        assert_eq!(payload.get("date_to"), Some("2025-03-09"));
        assert_eq!(payload.get("cabin_class"), Some("economy"));
        assert!(!payload.contains("destination_text_2"));
        assert!(!payload.contains("date_from_2"));
    }

    #[test]
    fn test_multi_city_without_second_destination_is_blocked() {
        let document = search_page();
        let form = form(&document);
        switch(&document, &form, TripType::MultiCity);
        el(&document, "destination_text_2").set_value("Somewhere warm");

        assert_eq!(
            form.submit(),
            SubmitOutcome::Blocked(ValidationError::MissingSecondDestination)
        );
        let alert = el(&document, "form_alert");
        assert!(alert.is_visible());
        assert_eq!(alert.text(), "Please select a second destination for Multi-City");
        assert_eq!(form.submission_state(), SubmissionState::Idle);
        assert!(!el(&document, "loading").is_visible());
        assert!(!el(&document, "search_button").is_disabled());
    }

    #[test]
    fn test_multi_city_with_typed_code_proceeds() {
        let document = search_page();
        let form = form(&document);
        switch(&document, &form, TripType::MultiCity);
        el(&document, "destination_text_2").set_value("Rome (FCO)");

        let SubmitOutcome::Proceed(payload) = form.submit() else {
            panic!("submission should proceed");
        };
        assert_eq!(payload.get("destination_code_2"), Some("FCO"));
        assert!(payload.contains("date_from_2"));
        assert!(!payload.contains("date_to"));
    }

    #[test]
    fn test_zero_and_blank_counts_are_omitted() {
        let document = search_page();
        let form = form(&document);
        el(&document, "children").set_value("0");
        el(&document, "infants").set_value("");

        let SubmitOutcome::Proceed(payload) = form.submit() else {
            panic!("submission should proceed");
        };
        assert!(!payload.contains("children"));
        assert!(!payload.contains("infants"));
        assert_eq!(payload.get("adults"), Some("1"));

        form.on_page_show(PageShowEvent { persisted: true });
        el(&document, "children").set_value("2");
        let SubmitOutcome::Proceed(payload) = form.submit() else {
            panic!("submission should proceed");
        };
        assert_eq!(payload.get("children"), Some("2"));
        assert!(!payload.contains("infants"));
    }

    #[test]
    fn test_submission_lifecycle_and_page_show() {
        let document = search_page();
        let form = form(&document);
        let button = el(&document, "search_button");
        let loading = el(&document, "loading");

        assert!(matches!(form.submit(), SubmitOutcome::Proceed(_)));
        assert_eq!(form.submission_state(), SubmissionState::Submitting);
        assert!(loading.is_visible());
        assert!(button.is_disabled());
        assert_eq!(button.text(), "Searching...");
        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        form.on_page_show(PageShowEvent { persisted: true });
        assert_eq!(form.submission_state(), SubmissionState::Idle);
        assert!(!loading.is_visible());
        assert!(!button.is_disabled());
        assert_eq!(button.text(), "Search Flights");

        // Reset holds even when the page was left in an odd state
        loading.set_visible(true);
        button.set_disabled(true);
        button.set_text("???");
        form.on_page_show(PageShowEvent::default());
        assert!(!loading.is_visible());
        assert!(!button.is_disabled());
        assert_eq!(button.text(), "Search Flights");
    }

    #[tokio::test]
    async fn test_clear_resets_everything() {
        let document = search_page();
        let form = form(&document);

        switch(&document, &form, TripType::MultiCity);
        el(&document, "origin_text").set_value("Rom");
        form.origin().on_input().await;
        assert!(el(&document, "origin_text-list").is_visible());
        el(&document, "cabin_class").set_value("business");
        el(&document, "destination_text").set_value("Paris (CDG)");
        el(&document, "date_from").set_value("2025-03-01");
        form.submit();

        form.clear().await;

        for id in ["origin_text", "origin_code", "destination_text", "destination_code", "date_from", "date_to", "adults"] {
            assert_eq!(el(&document, id).value(), "", "#{}", id);
        }
        assert_eq!(el(&document, "cabin_class").value(), "economy");
        assert_eq!(el(&document, "trip_type").value(), "round-trip");
        assert!(!el(&document, "origin_text-list").is_visible());
        assert!(!el(&document, "form_alert").is_visible());
        assert!(!el(&document, "loading").is_visible());
        assert_eq!(form.submission_state(), SubmissionState::Idle);
        assert!(el(&document, "date_to").is_required());
        assert!(!el(&document, "multiCityGroup").is_visible());
    }

    #[tokio::test]
    async fn test_document_click_reaches_every_list() {
        let document = search_page();
        let form = form(&document);
        el(&document, "origin_text").set_value("Rom");
        el(&document, "destination_text").set_value("Rom");
        form.origin().on_input().await;
        form.destination().on_input().await;

        form.handle_click(&ClickEvent::on_row(&["destination_text-list", "destination_group"], 0))
            .await;
        assert_eq!(el(&document, "destination_code").value(), "FCO");
        assert_eq!(el(&document, "origin_code").value(), "");
        assert!(!el(&document, "origin_text-list").is_visible());
        assert!(!el(&document, "destination_text-list").is_visible());
    }
}
