//! List fields arrive either as a JSON array or as the delimited text an
//! edit form produces. Both shapes normalize to trimmed, non-empty entries.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum ListInput {
    Items(Vec<String>),
    Text(String),
}

impl ListInput {
    fn into_items(self, delimiter: char) -> Vec<String> {
        match self {
            ListInput::Items(items) => normalize(items),
            ListInput::Text(text) => split_list(&text, delimiter),
        }
    }
}

/// Split `text` on `delimiter`, trimming entries and dropping empty ones.
pub fn split_list(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    ListInput::deserialize(deserializer).map(|input| input.into_items(','))
}

pub fn line_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    ListInput::deserialize(deserializer).map(|input| input.into_items('\n'))
}
