use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Numeric button type tag understood by the messaging client.
///
/// Serialized as the bare integer: 1 = quick reply, 2 = URL, 3 = call, 4 = list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ButtonType {
    QuickReply = 1,
    Url = 2,
    Call = 3,
    List = 4,
}

impl From<ButtonType> for u8 {
    fn from(kind: ButtonType) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for ButtonType {
    type Error = String;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(ButtonType::QuickReply),
            2 => Ok(ButtonType::Url),
            3 => Ok(ButtonType::Call),
            4 => Ok(ButtonType::List),
            other => Err(format!("unknown button type {other}")),
        }
    }
}

/// Label wrapper; the client expects `{ "displayText": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonText {
    pub display_text: String,
}

/// Payload of a type-4 (single select list) button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowInfo {
    /// Always "single_select" for list buttons.
    pub name: String,
    /// `ListData` serialized as a compact JSON string.
    pub params_json: String,
}

/// A single interactive button.
///
/// The `kind` tag decides which optional payload is present:
/// - `QuickReply`: none of `url`, `phone_number`, `native_flow_info`
/// - `Url`: `url`
/// - `Call`: `phone_number`
/// - `List`: `native_flow_info`
///
/// Records built by this crate always honor that pairing. Fields this model does
/// not know about are collected in `extra` when deserializing.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub button_id: String,
    pub button_text: ButtonText,
    #[serde(rename = "type")]
    pub kind: ButtonType,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub native_flow_info: Option<NativeFlowInfo>,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Button {
    pub(crate) fn new(kind: ButtonType, button_id: String, display_text: String) -> Self {
        Self {
            button_id,
            button_text: ButtonText { display_text },
            kind,
            url: None,
            phone_number: None,
            native_flow_info: None,
            extra: Map::new(),
        }
    }

    /// Label shown on the button.
    pub fn display_text(&self) -> &str {
        &self.button_text.display_text
    }
}

/// Button as it goes out to the client: either built by this crate, or a record
/// that already carried a valid `type` and is forwarded exactly as supplied.
///
/// Serializes without a wrapper, so both variants look like plain button objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ButtonRecord {
    Built(Button),
    Raw(Map<String, Value>),
}

impl ButtonRecord {
    /// Type tag of the record. `None` only for raw records without a 1..=4 `type`.
    pub fn kind(&self) -> Option<ButtonType> {
        match self {
            ButtonRecord::Built(button) => Some(button.kind),
            ButtonRecord::Raw(map) => map.get("type").and_then(type_tag),
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            ButtonRecord::Built(button) => Some(button),
            ButtonRecord::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Map<String, Value>> {
        match self {
            ButtonRecord::Built(_) => None,
            ButtonRecord::Raw(map) => Some(map),
        }
    }
}

impl From<Button> for ButtonRecord {
    fn from(button: Button) -> Self {
        ButtonRecord::Built(button)
    }
}

/// Read a `type` value as a button tag. Whole-number floats (`1.0`) count.
pub fn type_tag(value: &Value) -> Option<ButtonType> {
    let tag = value.as_f64()?;
    if tag.fract() != 0.0 || !(1.0..=4.0).contains(&tag) {
        return None;
    }
    ButtonType::try_from(tag as u8).ok()
}

/// Input element for `ButtonBuilder::quick_replies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReplyInput {
    pub text: String,
    /// Falls back to `btn_<position>` (1-based) when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl QuickReplyInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
        }
    }

    pub fn with_id(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: Some(id.into()),
        }
    }
}

/// Input element for `ButtonBuilder::url_buttons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInput {
    pub text: String,
    pub url: String,
}

impl UrlInput {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}
