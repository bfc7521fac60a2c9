use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::button::ButtonRecord;

/// Media reference; the client fetches the file from `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
}

/// Complete button message as consumed by the messaging client.
///
/// Notes:
/// - `image` and `video` are independent; both may be set at once.
/// - `buttons` is either absent or non-empty. An empty list is never serialized,
///   since clients treat "missing" and "present but empty" differently.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub image: Option<MediaRef>,
    #[serde(default)]
    pub video: Option<MediaRef>,
    pub caption: String,
    pub footer: String,
    pub view_once: bool,
    pub header_type: u32,
    #[serde(default)]
    pub buttons: Option<Vec<ButtonRecord>>,
}

/// Typed input for `ButtonBuilder::generate_message`.
///
/// `None` for `view_once`/`header_type` means "use the builder's configuration".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub buttons: Vec<ButtonRecord>,
    #[serde(default)]
    pub view_once: Option<bool>,
    #[serde(default)]
    pub header_type: Option<u32>,
}

impl MessageOptions {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn video(mut self, url: impl Into<String>) -> Self {
        self.video = Some(url.into());
        self
    }

    pub fn buttons<B, I>(mut self, buttons: I) -> Self
    where
        B: Into<ButtonRecord>,
        I: IntoIterator<Item = B>,
    {
        self.buttons = buttons.into_iter().map(Into::into).collect();
        self
    }

    pub fn view_once(mut self, view_once: bool) -> Self {
        self.view_once = Some(view_once);
        self
    }

    pub fn header_type(mut self, header_type: u32) -> Self {
        self.header_type = Some(header_type);
        self
    }
}

/// Loosely-typed message request, e.g. read from a JSON document.
///
/// Unlike `MessageOptions`, `buttons` holds raw records (a single object or an
/// array) that still need to go through the auto-detector.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub buttons: Option<serde_json::Value>,
    #[serde(default)]
    pub view_once: Option<bool>,
    #[serde(default)]
    pub header_type: Option<u32>,
}
