//! Wire records for buttons, list payloads and messages.
//!
//! - `button`: `Button` and its type tag, plus typed batch inputs.
//! - `list`: `ListData` / `ListSection` / `ListRow` for single-select lists.
//! - `message`: the assembled `Message` and its input options.
//!
//! Field names follow the messaging client's camelCase schema; the construction
//! rules live in `crate::builder` and `crate::detect`.

pub mod button;
pub mod list;
pub mod message;

pub use button::{
    Button, ButtonRecord, ButtonText, ButtonType, NativeFlowInfo, QuickReplyInput, UrlInput,
};
pub use list::{ListData, ListRow, ListSection};
pub use message::{MediaRef, Message, MessageOptions, MessageRequest};
