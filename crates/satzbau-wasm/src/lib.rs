pub mod components;
mod layout;
pub mod logging;

pub use components::{ExercisePage, ExerciseView, SentenceArranger, WordToken};

use satzbau_core::ApiConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_env();
    logging::init_tracing(&config.log_level);
    tracing::info!(base_url = %config.base_url, "sentence builder starting");

    yew::Renderer::<ExercisePage>::new().render();
}
