// DOM contract with the room-detail page template - these are the single
// source of truth for the selectors this crate depends on.
pub const CHAT_LAYOUT_SELECTOR: &str = ".chat-layout";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const ROOM_ID_ATTR: &str = "data-room-id";
