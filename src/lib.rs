use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod chat_page;
pub mod constants;
pub mod dom_utils;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Run the page initializer exactly once, after the document structure is
    // fully parsed. Module scripts are deferred, so by the time the WASM
    // module executes the document is usually past "loading" already; the
    // listener covers the remaining case.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move || {
            if let Err(e) = chat_page::init_chat_page(&doc) {
                web_sys::console::error_1(&format!("chat page init failed: {:?}", e).into());
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        chat_page::init_chat_page(&document)?;
    }

    Ok(())
}
