use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{CHAT_LAYOUT_SELECTOR, CHAT_MESSAGES_ID, ROOM_ID_ATTR};
use crate::dom_utils;

// Page-load initializer for the room-detail page. Pages without a chat layout
// (login, room list, ...) load the same bundle, so a missing root is the
// normal case and not an error.
//
// Returns the room identifier carried by the layout root. The id is consumed
// elsewhere in the application (the room subscription lives server-side for
// now); here it is extracted and handed back untouched.
pub fn init_chat_page(document: &Document) -> Result<Option<String>, JsValue> {
    let chat_root = match document.query_selector(CHAT_LAYOUT_SELECTOR)? {
        Some(el) => el,
        None => return Ok(None),
    };

    let room_id = chat_root.get_attribute(ROOM_ID_ATTR);

    // Jump to the newest message
    if let Some(messages_el) = document.get_element_by_id(CHAT_MESSAGES_ID) {
        dom_utils::scroll_to_bottom(&messages_el);
    }

    Ok(room_id)
}
