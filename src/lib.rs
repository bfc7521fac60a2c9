#![forbid(unsafe_code)]
#![doc = r#"
Prince Buttons

Build WhatsApp (Baileys) button and message payloads from simple descriptive inputs.

Crate highlights
- Builders: `quick_reply`, `url_button`, `call_button`, `list_button` return typed `Button` records
  that serialize to the client's camelCase schema.
- Messages: `generate_message` assembles caption, footer, media and buttons, with defaults taken
  from a `ButtonConfig`.
- Auto-detection: `auto_detect` turns loose JSON records (`{text, url}`, `{text, phone}`, ...)
  into buttons using a fixed priority order.

Modules
- `models`: Wire records (`Button`, `ListData`, `Message`, ...).
- `builder`: `ButtonBuilder`, list constructors and message assembly.
- `detect`: Classification of loose records into button kinds.
- `presets`: Ready-made button sets.
- `config`: `ButtonConfig` defaults from JSON files and the environment.
- `util`: Shared helpers (tracing, timestamp ids).

Note: No URL or phone number validation is performed; the transmitting client owns that.
"#]

pub mod builder;
pub mod config;
pub mod detect;
pub mod error;
pub mod models;
pub mod presets;
pub mod util;

pub use crate::builder::{
    call_button, create_list_data, create_row, create_section, generate_message, list_button,
    quick_reply, url_button, ButtonBuilder,
};
pub use crate::config::ButtonConfig;
pub use crate::detect::{auto_detect, ButtonInput};
pub use crate::error::{ButtonError, Result};
pub use crate::presets::{download_buttons, help_buttons, menu_nav_buttons, social_buttons};

// Re-export the record types for convenience (downstream users can do `use prince_buttons::Button`).
pub use crate::models::{
    Button, ButtonRecord, ButtonType, ListData, ListRow, ListSection, Message, MessageOptions,
    MessageRequest, QuickReplyInput, UrlInput,
};
