//! Button builders and the message assembler.
//!
//! `ButtonBuilder` carries an immutable `ButtonConfig` whose values are used as
//! message defaults. The free functions at the bottom of this module run against a
//! default builder for one-off calls.

use crate::config::ButtonConfig;
use crate::error::{require, ButtonError, Result};
use crate::models::{
    Button, ButtonType, ListData, ListRow, ListSection, MediaRef, Message, MessageOptions,
    MessageRequest, NativeFlowInfo, QuickReplyInput, UrlInput,
};
use crate::util::timestamp_id;
use serde_json::Value;

/// `nativeFlowInfo.name` for list buttons.
pub const SINGLE_SELECT: &str = "single_select";

/// Title used by `create_list_data` when none is given.
pub const DEFAULT_LIST_TITLE: &str = "Menu";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonBuilder {
    config: ButtonConfig,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ButtonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Quick reply button (type 1). Both arguments must be non-empty.
    pub fn quick_reply(&self, display_text: &str, button_id: &str) -> Result<Button> {
        require(
            &[display_text, button_id],
            "displayText and buttonId are required for quickReply",
        )?;
        Ok(Button::new(
            ButtonType::QuickReply,
            button_id.to_string(),
            display_text.to_string(),
        ))
    }

    /// Quick replies in input order; a missing or empty id becomes `btn_<position>`.
    pub fn quick_replies(&self, inputs: &[QuickReplyInput]) -> Result<Vec<Button>> {
        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| match input.id.as_deref() {
                Some(id) if !id.is_empty() => self.quick_reply(&input.text, id),
                _ => self.quick_reply(&input.text, &format!("btn_{}", index + 1)),
            })
            .collect()
    }

    /// URL button (type 2) with a timestamp-derived id.
    pub fn url_button(&self, display_text: &str, url: &str) -> Result<Button> {
        require(
            &[display_text, url],
            "displayText and url are required for urlButton",
        )?;
        let mut button = Button::new(
            ButtonType::Url,
            timestamp_id("url"),
            display_text.to_string(),
        );
        button.url = Some(url.to_string());
        Ok(button)
    }

    pub fn url_buttons(&self, inputs: &[UrlInput]) -> Result<Vec<Button>> {
        inputs
            .iter()
            .map(|input| self.url_button(&input.text, &input.url))
            .collect()
    }

    /// Call button (type 3). The phone number is not checked for format.
    pub fn call_button(&self, display_text: &str, phone_number: &str) -> Result<Button> {
        require(
            &[display_text, phone_number],
            "displayText and phoneNumber are required for callButton",
        )?;
        let mut button = Button::new(
            ButtonType::Call,
            timestamp_id("call"),
            display_text.to_string(),
        );
        button.phone_number = Some(phone_number.to_string());
        Ok(button)
    }

    /// Single-select list button (type 4).
    ///
    /// `list_data` is embedded as a compact JSON string in
    /// `nativeFlowInfo.paramsJson`. Without `button_id` (or with an empty one) the
    /// id is timestamp-derived.
    pub fn list_button(
        &self,
        display_text: &str,
        list_data: &ListData,
        button_id: Option<&str>,
    ) -> Result<Button> {
        require(&[display_text], "displayText is required for listButton")?;
        let params_json = serde_json::to_string(list_data).map_err(|e| {
            ButtonError::invalid(format!("listData could not be serialized: {e}"))
        })?;

        let button_id = match button_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => timestamp_id("list"),
        };
        let mut button = Button::new(ButtonType::List, button_id, display_text.to_string());
        button.native_flow_info = Some(NativeFlowInfo {
            name: SINGLE_SELECT.to_string(),
            params_json,
        });
        Ok(button)
    }

    /// Assemble a complete message.
    ///
    /// Mapping:
    /// - body -> caption (required)
    /// - footer -> footer ("" when absent)
    /// - image/video -> `{ url }` when non-empty; both may be present
    /// - view_once/header_type -> per-call value, else the builder configuration
    /// - buttons -> attached only when non-empty
    pub fn generate_message(&self, options: MessageOptions) -> Result<Message> {
        require(&[options.body.as_str()], "body is required for generateMessage")?;

        let image = media(options.image);
        let video = media(options.video);
        if image.is_some() && video.is_some() {
            tracing::debug!("message carries both image and video");
        }

        let buttons = if options.buttons.is_empty() {
            None
        } else {
            Some(options.buttons)
        };

        Ok(Message {
            image,
            video,
            caption: options.body,
            footer: options.footer.unwrap_or_default(),
            view_once: options.view_once.unwrap_or(self.config.view_once),
            header_type: options.header_type.unwrap_or(self.config.header_type),
            buttons,
        })
    }

    /// Run the raw `buttons` of a request through the auto-detector, then assemble
    /// the message.
    pub fn message_from_request(&self, request: MessageRequest) -> Result<Message> {
        let buttons = match request.buttons.as_ref() {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => self.auto_detect(raw)?,
        };

        self.generate_message(MessageOptions {
            body: request.body,
            footer: request.footer,
            image: request.image,
            video: request.video,
            buttons,
            view_once: request.view_once,
            header_type: request.header_type,
        })
    }

    /// Normalize a whole JSON document.
    ///
    /// An object with a `body` key is a `MessageRequest` and yields a message;
    /// anything else is one button record or an array of them and yields a button
    /// array.
    pub fn process_document(&self, doc: &Value) -> Result<Value> {
        let out = if doc.get("body").is_some() {
            let request: MessageRequest = serde_json::from_value(doc.clone())
                .map_err(|e| ButtonError::invalid(format!("malformed message request: {e}")))?;
            serde_json::to_value(self.message_from_request(request)?)
        } else {
            serde_json::to_value(self.auto_detect(doc)?)
        };
        out.map_err(|e| ButtonError::invalid(format!("output could not be serialized: {e}")))
    }
}

fn media(url: Option<String>) -> Option<MediaRef> {
    url.filter(|u| !u.is_empty()).map(|url| MediaRef { url })
}

/// List payload; an empty title becomes "Menu". Section and row order is kept.
pub fn create_list_data(title: &str, sections: Vec<ListSection>) -> ListData {
    let title = if title.is_empty() {
        DEFAULT_LIST_TITLE
    } else {
        title
    };
    ListData {
        title: title.to_string(),
        sections,
    }
}

pub fn create_section(title: &str, rows: Vec<ListRow>) -> ListSection {
    ListSection {
        title: title.to_string(),
        rows,
    }
}

pub fn create_row(title: &str, description: &str, id: &str) -> ListRow {
    ListRow {
        title: title.to_string(),
        description: description.to_string(),
        id: id.to_string(),
    }
}

// Convenience functions using the default configuration.

pub fn quick_reply(display_text: &str, button_id: &str) -> Result<Button> {
    ButtonBuilder::default().quick_reply(display_text, button_id)
}

pub fn url_button(display_text: &str, url: &str) -> Result<Button> {
    ButtonBuilder::default().url_button(display_text, url)
}

pub fn call_button(display_text: &str, phone_number: &str) -> Result<Button> {
    ButtonBuilder::default().call_button(display_text, phone_number)
}

pub fn list_button(display_text: &str, list_data: &ListData) -> Result<Button> {
    ButtonBuilder::default().list_button(display_text, list_data, None)
}

pub fn generate_message(options: MessageOptions) -> Result<Message> {
    ButtonBuilder::default().generate_message(options)
}
