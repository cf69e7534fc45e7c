//! Browser bindings. The page's view state lives here for the lifetime of
//! the loaded module; JavaScript forwards tab clicks to [`select_phase`] and
//! re-renders from [`render_view`] or [`render_document`].

use std::sync::{Mutex, MutexGuard};

use showcase_core::{
    Document, HtmlOptions, PhaseIndex, Showcase, ThemeMode, render_document as render_html,
};
use wasm_bindgen::prelude::*;

static SHOWCASE: Mutex<Showcase> = Mutex::new(Showcase::initial());

fn showcase() -> Result<MutexGuard<'static, Showcase>, JsError> {
    SHOWCASE
        .lock()
        .map_err(|_| JsError::new("showcase state poisoned"))
}

/// Number of timeline tabs.
#[wasm_bindgen]
pub fn phase_count() -> usize {
    PhaseIndex::COUNT
}

/// Index of the active tab.
#[wasm_bindgen]
pub fn active_phase() -> Result<usize, JsError> {
    Ok(showcase()?.active().get())
}

/// Select a tab. Returns whether the selection changed.
#[wasm_bindgen]
pub fn select_phase(index: usize) -> Result<bool, JsError> {
    let index = PhaseIndex::new(index).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(showcase()?.select_phase(index))
}

/// Back to the first tab, as on a fresh page load.
#[wasm_bindgen]
pub fn reset() -> Result<(), JsError> {
    *showcase()? = Showcase::new();
    Ok(())
}

/// Render commands for the current state, as JSON.
#[wasm_bindgen]
pub fn render_view() -> Result<String, JsError> {
    let commands = showcase()?.render();
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// The full page for the current state, as an HTML document.
#[wasm_bindgen]
pub fn render_document(dark: bool) -> Result<String, JsError> {
    let document = {
        let state = showcase()?;
        Document::for_showcase(&state)
    };
    let options = HtmlOptions {
        theme: if dark { ThemeMode::Dark } else { ThemeMode::Light },
        include_styles: true,
    };
    tracing::trace!(dark, "rendering document");
    Ok(render_html(&document, &options))
}

/// CSS gradient for the tab at `index`.
#[wasm_bindgen]
pub fn gradient_for_index(index: usize) -> String {
    showcase_core::gradient_for_index(index).to_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the bridge state is process-wide.
    #[test]
    fn bridge_round_trip() {
        assert_eq!(phase_count(), 3);
        assert!(reset().is_ok());
        assert_eq!(active_phase().ok(), Some(0));

        assert_eq!(select_phase(1).ok(), Some(true));
        assert_eq!(select_phase(1).ok(), Some(false));
        assert_eq!(active_phase().ok(), Some(1));

        let json = render_view().expect("view renders");
        assert!(json.contains("\"Azure Service Bus\""));

        let html = render_document(false).expect("document renders");
        assert!(html.contains("<title>C# Skills Showcase</title>"));
        assert!(html.contains(r#"data-phase="1""#));

        assert_eq!(gradient_for_index(3), gradient_for_index(0));
        assert!(reset().is_ok());
        assert_eq!(active_phase().ok(), Some(0));
    }
}
