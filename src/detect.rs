//! Auto-detection of button kinds from loosely-typed JSON records.
//!
//! Each record is classified into a `ButtonInput` by checking, in this order:
//! 1. `type` already one of 1..=4  -> `AlreadyTyped` (passed through as is)
//! 2. non-empty `url`              -> `UrlLike`
//! 3. non-empty `phone`/`phoneNumber` -> `PhoneLike`
//! 4. truthy `rows`                -> `ListLike`
//! 5. anything else                -> `PlainText`
//!
//! The first match wins, so a record with both `url` and `phone` is a URL button.
//! Empty strings, `null`, `false` and `0` count as absent.
//! Already-typed records are forwarded untouched, even when incomplete; the
//! client that consumes them owns their validity.

use serde_json::{Map, Value};

use crate::builder::{create_list_data, ButtonBuilder};
use crate::error::{ButtonError, Result};
use crate::models::button::type_tag;
use crate::models::{ButtonRecord, ListRow, ListSection};
use crate::util::timestamp_id;

/// List title used when a list-like record has no `title`.
pub const DEFAULT_DETECTED_LIST_TITLE: &str = "Options";

/// Button label used when a list-like record has no `buttonText`.
pub const DEFAULT_SELECT_LABEL: &str = "Select";

/// Classified view of a single raw button record.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonInput<'a> {
    AlreadyTyped(&'a Map<String, Value>),
    UrlLike {
        label: Option<&'a str>,
        url: &'a str,
    },
    PhoneLike {
        label: Option<&'a str>,
        phone: &'a str,
    },
    ListLike {
        title: Option<&'a str>,
        button_text: Option<&'a str>,
        rows: &'a Value,
    },
    PlainText {
        label: Option<&'a str>,
        id: Option<&'a str>,
    },
}

impl<'a> ButtonInput<'a> {
    pub fn classify(record: &'a Map<String, Value>) -> Self {
        if has_known_type(record) {
            return ButtonInput::AlreadyTyped(record);
        }

        let label = text_field(record, "text").or_else(|| text_field(record, "displayText"));

        if let Some(url) = text_field(record, "url") {
            ButtonInput::UrlLike { label, url }
        } else if let Some(phone) =
            text_field(record, "phone").or_else(|| text_field(record, "phoneNumber"))
        {
            ButtonInput::PhoneLike { label, phone }
        } else if let Some(rows) = record.get("rows").filter(|r| is_truthy(r)) {
            ButtonInput::ListLike {
                title: text_field(record, "title"),
                button_text: text_field(record, "buttonText"),
                rows,
            }
        } else {
            ButtonInput::PlainText {
                label,
                id: text_field(record, "id"),
            }
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ButtonInput::AlreadyTyped(_) => "already_typed",
            ButtonInput::UrlLike { .. } => "url",
            ButtonInput::PhoneLike { .. } => "phone",
            ButtonInput::ListLike { .. } => "list",
            ButtonInput::PlainText { .. } => "plain_text",
        }
    }
}

fn has_known_type(record: &Map<String, Value>) -> bool {
    record.get("type").and_then(type_tag).is_some()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_field<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

impl ButtonBuilder {
    /// Normalize one record or an array of records into buttons, preserving order.
    ///
    /// A lone object is treated as a one-element array. Elements that are not JSON
    /// objects are rejected, and builder errors (such as a missing label) propagate.
    pub fn auto_detect(&self, input: &Value) -> Result<Vec<ButtonRecord>> {
        match input {
            Value::Array(items) => items.iter().map(|item| self.detect_one(item)).collect(),
            single => Ok(vec![self.detect_one(single)?]),
        }
    }

    fn detect_one(&self, item: &Value) -> Result<ButtonRecord> {
        let record = item
            .as_object()
            .ok_or_else(|| ButtonError::invalid("button record must be a JSON object"))?;
        let input = ButtonInput::classify(record);
        tracing::debug!(kind = input.kind_name(), "classified button record");
        self.build_detected(input)
    }

    /// Build the button for an already classified record. Already-typed records
    /// come back as `ButtonRecord::Raw`, byte-for-byte what was supplied.
    pub fn build_detected(&self, input: ButtonInput<'_>) -> Result<ButtonRecord> {
        let button = match input {
            ButtonInput::AlreadyTyped(record) => return Ok(ButtonRecord::Raw(record.clone())),
            ButtonInput::UrlLike { label, url } => {
                self.url_button(label.unwrap_or_default(), url)?
            }
            ButtonInput::PhoneLike { label, phone } => {
                self.call_button(label.unwrap_or_default(), phone)?
            }
            ButtonInput::ListLike {
                title,
                button_text,
                rows,
            } => {
                let rows: Vec<ListRow> = serde_json::from_value(rows.clone()).map_err(|e| {
                    ButtonError::invalid(format!("rows must be an array of row objects: {e}"))
                })?;
                let section = ListSection {
                    title: title.unwrap_or_default().to_string(),
                    rows,
                };
                let list_data = create_list_data(
                    title.unwrap_or(DEFAULT_DETECTED_LIST_TITLE),
                    vec![section],
                );
                self.list_button(
                    button_text.unwrap_or(DEFAULT_SELECT_LABEL),
                    &list_data,
                    None,
                )?
            }
            ButtonInput::PlainText { label, id } => {
                let id = match id {
                    Some(id) => id.to_string(),
                    None => timestamp_id("btn"),
                };
                self.quick_reply(label.unwrap_or_default(), &id)?
            }
        };
        Ok(ButtonRecord::Built(button))
    }
}

/// `ButtonBuilder::auto_detect` with the default configuration.
pub fn auto_detect(input: &Value) -> Result<Vec<ButtonRecord>> {
    ButtonBuilder::default().auto_detect(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ButtonType;
    use serde_json::json;

    fn classify_kind(v: Value) -> &'static str {
        let map = v.as_object().unwrap().clone();
        ButtonInput::classify(&map).kind_name()
    }

    #[test]
    fn classification_follows_priority_order() {
        assert_eq!(classify_kind(json!({"type": 2, "url": "u"})), "already_typed");
        assert_eq!(classify_kind(json!({"url": "u", "phone": "p", "rows": []})), "url");
        assert_eq!(classify_kind(json!({"phoneNumber": "p", "rows": []})), "phone");
        assert_eq!(classify_kind(json!({"rows": []})), "list");
        assert_eq!(classify_kind(json!({"text": "t"})), "plain_text");
    }

    #[test]
    fn out_of_range_or_non_numeric_type_is_ignored() {
        assert_eq!(classify_kind(json!({"type": 7, "url": "u"})), "url");
        assert_eq!(classify_kind(json!({"type": "2", "text": "t"})), "plain_text");
        assert_eq!(classify_kind(json!({"type": 0, "phone": "p"})), "phone");
        assert_eq!(classify_kind(json!({"type": 2.5, "phone": "p"})), "phone");
    }

    #[test]
    fn whole_number_float_type_is_already_typed() {
        assert_eq!(classify_kind(json!({"type": 1.0, "text": "t"})), "already_typed");
        assert_eq!(classify_kind(json!({"type": 4.0})), "already_typed");
    }

    #[test]
    fn falsy_rows_fall_through_to_plain_text() {
        for rows in [json!(false), json!(0), json!(""), Value::Null] {
            let mut record = json!({"text": "Hi", "id": "x"});
            record["rows"] = rows;
            assert_eq!(classify_kind(record), "plain_text");
        }
        assert_eq!(classify_kind(json!({"rows": {}})), "list");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        assert_eq!(classify_kind(json!({"url": "", "phone": "+1"})), "phone");
        assert_eq!(classify_kind(json!({"phone": "", "text": "x"})), "plain_text");
    }

    #[test]
    fn plain_text_without_id_gets_timestamp_id() {
        let out = auto_detect(&json!({"displayText": "Hello"})).unwrap();
        let b = out[0].as_button().unwrap();
        assert_eq!(b.kind, ButtonType::QuickReply);
        assert!(b.button_id.starts_with("btn_"));
        assert_eq!(b.display_text(), "Hello");
    }

    #[test]
    fn plain_text_without_label_is_rejected() {
        let err = auto_detect(&json!({"id": "x"})).unwrap_err();
        assert!(matches!(err, ButtonError::InvalidArgument(_)));
    }

    #[test]
    fn non_object_records_are_rejected() {
        assert!(auto_detect(&json!(["just a string"])).is_err());
        assert!(auto_detect(&Value::Null).is_err());
    }

    #[test]
    fn empty_array_yields_no_buttons() {
        assert!(auto_detect(&json!([])).unwrap().is_empty());
    }
}
