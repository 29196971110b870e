use std::fs;
use std::ops::Index;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Number, Value};

use crate::error::DropselError;

/// A single labeled entry in a dropdown
///
/// The value is opaque to the widget and only handed back through change notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(deserialize_with = "label_text")]
    pub label: String,
    pub value: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Number(Number),
}

/// Accepts a string label, or a number rendered with its JSON text
fn label_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Label::deserialize(deserializer) {
        Ok(Label::Text(text)) => Ok(text),
        Ok(Label::Number(number)) => Ok(number.to_string()),
        Err(_) => Err(de::Error::custom("label must be a string or number")),
    }
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered, immutable, shared list of options
///
/// Cloning shares the same list. Identity is by allocation, not content: two lists
/// built separately from equal options are different lists, and a dropdown that is
/// handed a different list drops its selection.
#[derive(Debug, Clone)]
pub struct OptionList {
    items: Rc<[SelectOption]>,
}

impl OptionList {
    pub fn new(items: Vec<SelectOption>) -> Self {
        Self {
            items: Rc::from(items),
        }
    }

    /// Options labeled `0..count` whose values are the same numbers
    pub fn numbered(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| SelectOption::new(i.to_string(), i))
                .collect(),
        )
    }

    /// Parse a JSON array of `{"label": ..., "value": ...}` objects
    ///
    /// Labels may be strings or numbers; numbers are rendered with their JSON text.
    pub fn from_json(text: &str) -> Result<Self, DropselError> {
        let entries: Vec<Value> = serde_json::from_str(text)?;

        // Entries are decoded one by one so errors can name the bad entry
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<SelectOption>(entry).map_err(|e| {
                    DropselError::InvalidOption {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(debug_assertions)]
        log::debug!("Parsed {} options", items.len());

        Ok(Self::new(items))
    }

    /// Read and parse an options file
    pub fn load(path: &Path) -> Result<Self, DropselError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.items.iter()
    }

    /// True when both handles point at the same list
    pub fn same_list(&self, other: &OptionList) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl Index<usize> for OptionList {
    type Output = SelectOption;

    fn index(&self, index: usize) -> &SelectOption {
        &self.items[index]
    }
}

impl From<Vec<SelectOption>> for OptionList {
    fn from(items: Vec<SelectOption>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
#[path = "option_list_tests.rs"]
mod option_list_tests;
