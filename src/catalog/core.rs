use thiserror::Error;

use super::builtin;

/// One hands-on lab: identity, catalog metadata, and content blocks.
///
/// `cli` and `terraform` hold the raw sample text exactly as authored,
/// placeholders and all. Escaping for display happens at projection time;
/// the clipboard receives these bytes untouched.
#[derive(Debug, Clone, Copy)]
pub struct LabEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub time: &'static str,
    pub cost: &'static str,
    pub overview: &'static str,
    pub steps: &'static [&'static str],
    pub cli: Option<&'static str>,
    pub terraform: Option<&'static str>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate lab id `{0}`")]
    DuplicateLab(String),
    #[error("lab `{0}` has no steps")]
    EmptySteps(String),
}

/// Ordered lab collection. Iteration order is authoring order, which also
/// drives the navigation list and the progress rail.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<LabEntry>,
}

impl Catalog {
    /// The seeded OCI Experience Lab set.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries().to_vec(),
        }
    }

    /// Build a catalog from arbitrary entries, rejecting duplicate ids and
    /// entries without steps.
    pub fn new(entries: Vec<LabEntry>) -> Result<Self, CatalogError> {
        for (idx, entry) in entries.iter().enumerate() {
            if entry.steps.is_empty() {
                return Err(CatalogError::EmptySteps(entry.id.to_string()));
            }
            if entries[..idx].iter().any(|seen| seen.id == entry.id) {
                return Err(CatalogError::DuplicateLab(entry.id.to_string()));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&LabEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[LabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
