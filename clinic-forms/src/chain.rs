//! Cascading selector chains.
//!
//! A chain is an ordered list of select fields plus the links that feed one
//! target's options from a field's value. The chain never touches the
//! network: `change` and `replay` hand back `FetchRequest`s, and the caller
//! reports each outcome through `apply_records` or `apply_failure`.
//!
//! Every pending target remembers the ticket of the request it waits for.
//! Resetting a target forgets the ticket, so a response that resolves after
//! its parent was changed again is recognised and dropped.

use clinic_core::endpoint::Endpoint;
use clinic_core::error::FormError;
use clinic_core::records::{Choice, RecordKind};
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, BTreeSet};

/// One rendered `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn empty(label: &str, selected: bool) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            selected,
        }
    }
}

/// A dependent `<select>` and its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorField {
    pub dom_id: String,
    pub name: String,
    prompt: String,
    blocked_placeholder: Option<String>,
    value: Option<String>,
    enabled: bool,
    choices: Vec<Choice>,
    preselect: Option<String>,
    awaiting: Option<u64>,
}

impl SelectorField {
    /// `prompt` is the empty-selection option shown once the field is enabled.
    pub fn new(dom_id: &str, name: &str, prompt: &str) -> Self {
        Self {
            dom_id: dom_id.to_string(),
            name: name.to_string(),
            prompt: prompt.to_string(),
            blocked_placeholder: None,
            value: None,
            enabled: false,
            choices: Vec::new(),
            preselect: None,
            awaiting: None,
        }
    }

    /// Single option shown while the field is disabled, e.g. "Select a country first".
    pub fn blocked_with(mut self, placeholder: &str) -> Self {
        self.blocked_placeholder = Some(placeholder.to_string());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Options as rendered: the prompt followed by one option per choice when
    /// enabled, otherwise just the blocked placeholder (if any).
    pub fn options(&self) -> Vec<SelectOption> {
        if !self.enabled {
            return self
                .blocked_placeholder
                .as_deref()
                .map(|placeholder| vec![SelectOption::empty(placeholder, true)])
                .unwrap_or_default();
        }
        let mut options = Vec::with_capacity(self.choices.len() + 1);
        options.push(SelectOption::empty(&self.prompt, self.value.is_none()));
        options.extend(self.choices.iter().map(|choice| SelectOption {
            value: choice.value.clone(),
            label: choice.label.clone(),
            selected: self.value.as_deref() == Some(choice.value.as_str()),
        }));
        options
    }

    fn reset(&mut self) {
        self.value = None;
        self.enabled = false;
        self.choices.clear();
        self.preselect = None;
        self.awaiting = None;
    }
}

/// A group of checkboxes filled from an endpoint (the visit form's procedures).
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    pub dom_id: String,
    pub input_name: String,
    choices: Vec<Choice>,
    checked: BTreeSet<String>,
    preselect: BTreeSet<String>,
    awaiting: Option<u64>,
}

impl Checklist {
    pub fn new(dom_id: &str, input_name: &str) -> Self {
        Self {
            dom_id: dom_id.to_string(),
            input_name: input_name.to_string(),
            choices: Vec::new(),
            checked: BTreeSet::new(),
            preselect: BTreeSet::new(),
            awaiting: None,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.contains(value)
    }

    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    fn reset(&mut self) {
        self.choices.clear();
        self.checked.clear();
        self.preselect.clear();
        self.awaiting = None;
    }
}

/// What a link fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Field(usize),
    Checklist(usize),
}

/// Dependency edge: when `trigger` gets a value, load `target` from `endpoint`.
///
/// Each parameter names the query key and the field whose value it carries.
#[derive(Debug, Clone, PartialEq)]
struct Link {
    trigger: usize,
    target: Target,
    endpoint: Endpoint,
    params: Vec<(&'static str, usize)>,
}

/// A load the host must perform and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub target: Target,
    pub endpoint: Endpoint,
    pub url: String,
    ticket: u64,
}

impl FetchRequest {
    pub fn kind(&self) -> RecordKind {
        self.endpoint.record_kind()
    }
}

/// Values already chosen when the page was rendered, keyed by DOM id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preselection {
    values: BTreeMap<String, String>,
    checked: BTreeMap<String, BTreeSet<String>>,
}

impl Preselection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank values are ignored.
    pub fn with_value(mut self, dom_id: &str, value: &str) -> Self {
        if let Some(value) = non_blank(value) {
            self.values.insert(dom_id.to_string(), value);
        }
        self
    }

    pub fn with_checked<I, S>(mut self, dom_id: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checked
            .entry(dom_id.to_string())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn value(&self, dom_id: &str) -> Option<String> {
        self.values.get(dom_id).cloned()
    }

    pub fn checked(&self, dom_id: &str) -> BTreeSet<String> {
        self.checked.get(dom_id).cloned().unwrap_or_default()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// An ordered chain of dependent selects.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorChain {
    fields: Vec<SelectorField>,
    checklists: Vec<Checklist>,
    links: Vec<Link>,
    endpoint_base: String,
    next_ticket: u64,
}

impl SelectorChain {
    pub fn new(endpoint_base: &str) -> Self {
        Self {
            fields: Vec::new(),
            checklists: Vec::new(),
            links: Vec::new(),
            endpoint_base: endpoint_base.to_string(),
            next_ticket: 0,
        }
    }

    /// Append a field. The first field has no upstream and starts enabled.
    pub fn with_field(mut self, mut field: SelectorField) -> Self {
        field.enabled = self.fields.is_empty();
        self.fields.push(field);
        self
    }

    pub fn with_checklist(mut self, checklist: Checklist) -> Self {
        self.checklists.push(checklist);
        self
    }

    pub fn with_link(
        mut self,
        trigger: usize,
        target: Target,
        endpoint: Endpoint,
        params: &[(&'static str, usize)],
    ) -> Self {
        self.links.push(Link {
            trigger,
            target,
            endpoint,
            params: params.to_vec(),
        });
        self
    }

    pub fn endpoint_base(&self) -> &str {
        &self.endpoint_base
    }

    pub fn fields(&self) -> &[SelectorField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&SelectorField> {
        self.fields.get(index)
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn checklist(&self, index: usize) -> Option<&Checklist> {
        self.checklists.get(index)
    }

    /// Position of the field with the given DOM id.
    pub fn position(&self, dom_id: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.dom_id == dom_id)
    }

    /// Options of the first field, which the server renders rather than loads.
    pub fn set_root_choices(&mut self, choices: Vec<Choice>) {
        if let Some(root) = self.fields.first_mut() {
            root.choices = choices;
        }
    }

    /// Handle a `change` on field `index`.
    ///
    /// Every descendant is reset before anything is requested. A blank value
    /// stops there; otherwise the loads fed by this field are returned.
    ///
    /// Disabled fields and values outside the field's options are rejected
    /// without touching the chain. A root field with no server-rendered
    /// options accepts any value.
    pub fn change(&mut self, index: usize, value: &str) -> Result<Vec<FetchRequest>, FormError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or(FormError::UnknownTarget(index))?;
        if !field.enabled {
            return Err(FormError::Blocked(index));
        }
        let value = non_blank(value);
        if let Some(value) = &value {
            let open_root = index == 0 && field.choices.is_empty();
            if !open_root && !field.choices.iter().any(|choice| &choice.value == value) {
                return Err(FormError::UnknownChoice {
                    position: index,
                    value: value.clone(),
                });
            }
        }
        field.value = value;
        field.preselect = None;
        let has_value = field.value.is_some();

        self.reset_below(index);
        if !has_value {
            return Ok(Vec::new());
        }
        Ok(self.requests_from(index))
    }

    /// Tick or untick a checkbox.
    pub fn toggle(&mut self, checklist: usize, value: &str, checked: bool) -> Result<(), FormError> {
        let checklist = self
            .checklists
            .get_mut(checklist)
            .ok_or(FormError::UnknownTarget(checklist))?;
        if !checklist.choices.iter().any(|choice| choice.value == value) {
            warn!("Ignoring unknown {} value {:?}", checklist.dom_id, value);
            return Ok(());
        }
        if checked {
            checklist.checked.insert(value.to_string());
        } else {
            checklist.checked.remove(value);
        }
        Ok(())
    }

    /// Restore server-rendered selections.
    ///
    /// Everything below the root is reset and remembers its preselected value.
    /// Loading proceeds one level at a time: a field's children are requested
    /// only once its own options arrived and contained the preselected value.
    pub fn replay(&mut self, preselection: &Preselection) -> Vec<FetchRequest> {
        for field in self.fields.iter_mut().skip(1) {
            field.reset();
            field.preselect = preselection.value(&field.dom_id);
        }
        for checklist in self.checklists.iter_mut() {
            checklist.reset();
            checklist.preselect = preselection.checked(&checklist.dom_id);
        }

        let Some(root) = self.fields.first_mut() else {
            return Vec::new();
        };
        root.value = preselection.value(&root.dom_id);
        root.preselect = None;
        root.awaiting = None;
        match root.value.as_deref() {
            Some(value) => {
                info!("Replaying preselected {} = {}", root.dom_id, value);
                self.requests_from(0)
            }
            None => Vec::new(),
        }
    }

    /// Install a successful response. Returns follow-up loads when a
    /// preselected value was found in the new options.
    pub fn apply_records(&mut self, request: &FetchRequest, choices: Vec<Choice>) -> Vec<FetchRequest> {
        if !self.is_current(request) {
            debug!("Discarding stale response from {}", request.url);
            return Vec::new();
        }

        match request.target {
            Target::Field(index) => {
                let field = &mut self.fields[index];
                field.awaiting = None;
                field.enabled = true;
                field.value = None;
                field.choices = choices;

                let Some(wanted) = field.preselect.take() else {
                    return Vec::new();
                };
                if field.choices.iter().any(|choice| choice.value == wanted) {
                    field.value = Some(wanted);
                    self.requests_from(index)
                } else {
                    warn!(
                        "Preselected {} value {:?} is not among the loaded options",
                        field.dom_id, wanted
                    );
                    Vec::new()
                }
            }
            Target::Checklist(index) => {
                let checklist = &mut self.checklists[index];
                checklist.awaiting = None;
                let preselect = std::mem::take(&mut checklist.preselect);
                checklist.checked = choices
                    .iter()
                    .filter(|choice| preselect.contains(&choice.value))
                    .map(|choice| choice.value.clone())
                    .collect();
                checklist.choices = choices;
                Vec::new()
            }
        }
    }

    /// Record a failed load. The target stays as it was (disabled and empty)
    /// and replay stops at it.
    pub fn apply_failure(&mut self, request: &FetchRequest, err: &anyhow::Error) {
        error!("Error fetching {}: {:#}", request.url, err);
        if !self.is_current(request) {
            return;
        }
        match request.target {
            Target::Field(index) => {
                let field = &mut self.fields[index];
                field.awaiting = None;
                field.preselect = None;
            }
            Target::Checklist(index) => {
                let checklist = &mut self.checklists[index];
                checklist.awaiting = None;
                checklist.preselect.clear();
            }
        }
    }

    fn is_current(&self, request: &FetchRequest) -> bool {
        let awaiting = match request.target {
            Target::Field(index) => self.fields.get(index).and_then(|f| f.awaiting),
            Target::Checklist(index) => self.checklists.get(index).and_then(|c| c.awaiting),
        };
        awaiting == Some(request.ticket)
    }

    // Fields after `index`, and every checklist fed by `index` or a descendant.
    fn reset_below(&mut self, index: usize) {
        for field in self.fields.iter_mut().skip(index + 1) {
            field.reset();
        }
        for link in self.links.iter().filter(|link| link.trigger >= index) {
            if let Target::Checklist(target) = link.target {
                if let Some(checklist) = self.checklists.get_mut(target) {
                    checklist.reset();
                }
            }
        }
    }

    fn requests_from(&mut self, index: usize) -> Vec<FetchRequest> {
        let links: Vec<Link> = self
            .links
            .iter()
            .filter(|link| link.trigger == index)
            .cloned()
            .collect();

        let mut requests = Vec::with_capacity(links.len());
        for link in links {
            let values: Vec<(&str, String)> = link
                .params
                .iter()
                .map(|(key, source)| {
                    let value = self
                        .fields
                        .get(*source)
                        .and_then(|field| field.value.clone())
                        .unwrap_or_default();
                    (*key, value)
                })
                .collect();
            let params: Vec<(&str, &str)> = values.iter().map(|(k, v)| (*k, v.as_str())).collect();
            let url = link.endpoint.url(&self.endpoint_base, &params);

            self.next_ticket += 1;
            let ticket = self.next_ticket;
            match link.target {
                Target::Field(target) => match self.fields.get_mut(target) {
                    Some(field) => field.awaiting = Some(ticket),
                    None => continue,
                },
                Target::Checklist(target) => match self.checklists.get_mut(target) {
                    Some(checklist) => checklist.awaiting = Some(ticket),
                    None => continue,
                },
            }

            debug!("Requesting {}", url);
            requests.push(FetchRequest {
                target: link.target,
                endpoint: link.endpoint,
                url,
                ticket,
            });
        }
        requests
    }
}
