//! Form state managed via Dioxus context.
//!
//! `FormState` wraps the selector chain in a signal and performs the loads
//! the chain asks for. `ScheduleState` does the same for the working
//! schedule. Child components retrieve them with `use_context`.

use crate::binding::PageBinding;
use crate::fetch;
use clinic_core::dom;
use clinic_forms::accumulator::ScheduleAccumulator;
use clinic_forms::chain::{FetchRequest, SelectorChain};
use dioxus::prelude::*;
use log::error;

/// Shared state for the cascading select forms.
#[derive(Clone, Copy)]
pub struct FormState {
    pub chain: Signal<SelectorChain>,
}

impl FormState {
    pub fn new(chain: SelectorChain) -> Self {
        Self {
            chain: Signal::new(chain),
        }
    }

    /// A select at `index` changed.
    pub fn change(&self, index: usize, value: &str) {
        let mut chain = self.chain;
        let result = chain.write().change(index, value);
        match result {
            Ok(requests) => self.dispatch(requests),
            Err(e) => error!("Ignoring change: {}", e),
        }
    }

    /// A checkbox in checklist `index` was (un)ticked.
    pub fn toggle(&self, index: usize, value: &str, checked: bool) {
        let mut chain = self.chain;
        let result = chain.write().toggle(index, value, checked);
        if let Err(e) = result {
            error!("Ignoring checkbox change: {}", e);
        }
    }

    /// Fire every request independently; each outcome is reported back to
    /// the chain, and any follow-ups are dispatched in turn.
    pub fn dispatch(&self, requests: Vec<FetchRequest>) {
        for request in requests {
            let state = *self;
            spawn(async move {
                let mut chain = state.chain;
                let follow_ups = match fetch::fetch_choices(&request).await {
                    Ok(choices) => chain.write().apply_records(&request, choices),
                    Err(e) => {
                        chain.write().apply_failure(&request, &e);
                        Vec::new()
                    }
                };
                state.dispatch(follow_ups);
            });
        }
    }
}

/// Provide `FormState` for a chain built by `preset`, seeded from the page.
pub fn use_chain_form(preset: fn(&str) -> SelectorChain) -> FormState {
    use_context_provider(move || {
        let binding = PageBinding::locate(dom::SEED_ELEMENT);
        let (chain, replay) = binding.bind(preset);
        let state = FormState::new(chain);
        state.dispatch(replay);
        state
    })
}

/// Shared state for the working schedule calendar.
#[derive(Clone, Copy)]
pub struct ScheduleState {
    pub schedule: Signal<ScheduleAccumulator>,
}

/// Provide `ScheduleState` seeded from the page's stored schedule.
pub fn use_schedule_form() -> ScheduleState {
    use_context_provider(|| {
        let binding = PageBinding::locate(dom::SEED_ELEMENT);
        ScheduleState {
            schedule: Signal::new(binding.schedule()),
        }
    })
}
