//! Form state machines for the clinic scheduling pages.
//!
//! Nothing here touches the DOM or the network, so every behavior is
//! testable natively:
//! - `chain`: cascading selects (country → state → city and friends)
//! - `presets`: the three chains used by the location, appointment and visit forms
//! - `accumulator`: drag-selected working schedule ranges and their hidden field
//! - `seed`: initial state embedded in the page by the server

pub mod accumulator;
pub mod chain;
pub mod presets;
pub mod seed;

#[cfg(test)]
mod testing;
