use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// One selectable row of a list.
///
/// Missing or `null` fields deserialize to empty strings.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub id: String,
}

/// Titled group of rows. Row order is kept exactly as supplied.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rows: Vec<ListRow>,
}

/// Payload embedded (as a JSON string) in a list button's `nativeFlowInfo.paramsJson`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub sections: Vec<ListSection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_default_missing_and_null_fields() {
        let row: ListRow = serde_json::from_value(json!({"title": "R", "description": null})).unwrap();
        assert_eq!(
            row,
            ListRow {
                title: "R".into(),
                description: String::new(),
                id: String::new(),
            }
        );
    }

    #[test]
    fn sections_ignore_unknown_fields() {
        let section: ListSection = serde_json::from_value(json!({
            "title": "S",
            "buttonText": "Pick",
            "rows": [{"id": "a"}, {"id": "b"}]
        }))
        .unwrap();
        assert_eq!(section.title, "S");
        assert_eq!(section.rows.len(), 2);
        assert_eq!(section.rows[1].id, "b");
    }
}
