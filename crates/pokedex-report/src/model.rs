use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// Separator between labels in the joined `categories` and `traits` strings.
pub const LIST_SEPARATOR: &str = ", ";

/// A flattened Pokémon record, e.g. `{ id: 6, name: "charizard", categories: "fire, flying" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRecord {
    pub id: i64,
    pub name: String,
    /// Type names joined with `", "`.
    pub categories: String,
    /// Ability names joined with `", "`.
    pub traits: String,
}

impl ProjectedRecord {
    /// Individual type labels of this record, in payload order.
    pub fn category_labels(&self) -> impl Iterator<Item = &str> {
        self.categories
            .split(LIST_SEPARATOR)
            .filter(|label| !label.is_empty())
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.category_labels().any(|c| c == label)
    }
}

/// Distinct category labels seen across all projected records.
pub type CategorySet = BTreeSet<String>;

/// Category label to the records carrying it, keyed in ascending label order.
pub type GroupedReport = BTreeMap<String, Vec<ProjectedRecord>>;

/// The subset of a detail payload the projector reads.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailView {
    pub id: i64,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}
