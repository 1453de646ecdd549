use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Catalog, LinkCategory};
use crate::error::GrindError;
use crate::GrindResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Completion state for the board: the set of completed link ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    completed: BTreeSet<String>,
}

/// Board-wide completion summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// Percent complete, rounded to the nearest integer. 0 for an empty board.
    pub percent: u32,
    /// One level per ten completed links, starting at 1.
    pub level: u32,
    pub by_category: Vec<CategoryProgress>,
}

/// Per-category slice of the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category: LinkCategory,
    pub label: String,
    pub completed: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl Progress {
    pub fn new() -> Progress {
        Progress::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Progress {
        Progress {
            completed: ids.into_iter().collect(),
        }
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Completed ids in sorted order.
    pub fn completed_ids(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    /// Flip completion for a board link. Returns the new state
    /// (`true` = now complete). Unknown ids are an error.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> GrindResult<bool> {
        if catalog.get(id).is_none() {
            return Err(GrindError::UnknownLink(id.to_string()));
        }
        if self.completed.remove(id) {
            Ok(false)
        } else {
            self.completed.insert(id.to_string());
            Ok(true)
        }
    }

    /// Clear all completions.
    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// Summarise completion against the board. Stored ids that no longer
    /// exist on the board are ignored here but left untouched in the set.
    pub fn summary(&self, catalog: &Catalog) -> ProgressSummary {
        let total = catalog.len();
        let completed = catalog
            .links
            .iter()
            .filter(|l| self.completed.contains(&l.id))
            .count();

        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        let level = (completed / 10) as u32 + 1;

        let by_category = LinkCategory::ALL
            .iter()
            .map(|cat| {
                let in_cat: Vec<_> =
                    catalog.links.iter().filter(|l| l.category == *cat).collect();
                CategoryProgress {
                    category: *cat,
                    label: cat.label().to_string(),
                    completed: in_cat
                        .iter()
                        .filter(|l| self.completed.contains(&l.id))
                        .count(),
                    total: in_cat.len(),
                }
            })
            .collect();

        ProgressSummary {
            completed,
            total,
            percent,
            level,
            by_category,
        }
    }
}
