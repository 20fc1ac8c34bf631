//! Variable catalog extracted from the UDS reference document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One variable row from the reference document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Form or section label (e.g. "C1", "C2 Neuropsych Battery").
    pub form_field: String,
    /// Unique variable identifier, matched verbatim against dataset columns.
    pub variable_name: String,
    /// Free-text description, empty when the document has none.
    pub label: String,
    /// Zero-based page index the row was read from.
    pub source_page: usize,
}

impl CatalogEntry {
    pub fn new(
        form_field: impl Into<String>,
        variable_name: impl Into<String>,
        label: impl Into<String>,
        source_page: usize,
    ) -> Self {
        Self {
            form_field: form_field.into(),
            variable_name: variable_name.into(),
            label: label.into(),
            source_page,
        }
    }
}

/// Ordered collection of catalog entries keyed by `variable_name`.
///
/// Names are unique: the first entry inserted for a name is kept and later
/// duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless its variable name is already present.
    ///
    /// Returns `true` when the entry was added.
    pub fn insert(&mut self, entry: CatalogEntry) -> bool {
        if self.index.contains_key(&entry.variable_name) {
            return false;
        }
        self.index
            .insert(entry.variable_name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, variable_name: &str) -> Option<&CatalogEntry> {
        self.index
            .get(variable_name)
            .and_then(|idx| self.entries.get(*idx))
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.index.contains_key(variable_name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.variable_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_occurrence_wins() {
        let catalog: Catalog = vec![
            CatalogEntry::new("C1", "C1SCORE", "MMSE Total Score", 23),
            CatalogEntry::new("C2", "C2MOCA", "MoCA Total", 24),
            CatalogEntry::new("C2", "C1SCORE", "Duplicate", 26),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        let entry = catalog.get("C1SCORE").expect("C1SCORE present");
        assert_eq!(entry.label, "MMSE Total Score");
        assert_eq!(entry.source_page, 23);
        let names: Vec<&str> = catalog.variable_names().collect();
        assert_eq!(names, vec!["C1SCORE", "C2MOCA"]);
    }

    #[test]
    fn lookup_is_exact() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(CatalogEntry::new("C1", "C1SCORE", "", 0)));
        assert!(catalog.contains("C1SCORE"));
        assert!(!catalog.contains("c1score"));
        assert!(!catalog.insert(CatalogEntry::new("C1", "C1SCORE", "again", 1)));
    }

    proptest! {
        #[test]
        fn variable_names_are_unique(names in proptest::collection::vec("[A-C][0-3]", 0..40)) {
            let catalog: Catalog = names
                .iter()
                .enumerate()
                .map(|(page, name)| CatalogEntry::new("C1", name.clone(), "", page))
                .collect();
            let mut seen = std::collections::HashSet::new();
            for name in catalog.variable_names() {
                prop_assert!(seen.insert(name.to_string()));
            }
            let distinct: std::collections::HashSet<&String> = names.iter().collect();
            prop_assert_eq!(catalog.len(), distinct.len());
        }
    }
}
