//! Page binding: the one place that reads server-rendered state from the DOM.

use clinic_forms::accumulator::ScheduleAccumulator;
use clinic_forms::chain::{FetchRequest, SelectorChain};
use clinic_forms::seed::PageSeed;
use log::{info, warn};

/// Server-provided state for one mounted form, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageBinding {
    seed: PageSeed,
}

impl PageBinding {
    /// Decode the JSON seed element. A missing element or malformed JSON
    /// leaves the form blank.
    pub fn locate(seed_element_id: &str) -> Self {
        let seed = match element_text(seed_element_id) {
            Some(raw) => PageSeed::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed page seed #{}: {:#}", seed_element_id, e);
                PageSeed::default()
            }),
            None => {
                info!("No page seed #{} found, starting blank", seed_element_id);
                PageSeed::default()
            }
        };
        Self { seed }
    }

    pub fn seed(&self) -> &PageSeed {
        &self.seed
    }

    pub fn endpoint_base(&self) -> &str {
        self.seed.endpoint_base()
    }

    /// Build a chain from `preset` and start replaying preselected values.
    pub fn bind(&self, preset: fn(&str) -> SelectorChain) -> (SelectorChain, Vec<FetchRequest>) {
        let mut chain = preset(self.endpoint_base());
        let replay = self.seed.apply(&mut chain);
        (chain, replay)
    }

    pub fn schedule(&self) -> ScheduleAccumulator {
        ScheduleAccumulator::from_hidden_value(self.seed.working_schedule().as_deref())
    }
}

fn element_text(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(id)?.text_content()
}
