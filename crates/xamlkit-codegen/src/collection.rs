//! Sorting, filtering and duplicate exclusion of styleguide entries.

use regex::Regex;
use xamlkit_core::{Color, TextStyle};

use crate::keys::has_duplicate_suffix;

/// Something listed in a styleguide under a name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Color {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl Named for TextStyle {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Pipeline stages. Each is optional; they always run in the order
/// sort, filter, exclude.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionPipeline<'a> {
    pub sort: bool,
    pub filter: Option<&'a Regex>,
    pub exclude_suffix: Option<&'a str>,
}

impl<'a> CollectionPipeline<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn filtered(mut self, filter: Option<&'a Regex>) -> Self {
        self.filter = filter;
        self
    }

    /// Exclude names marked as duplicates by `suffix`, ignoring whitespace
    /// as key normalization does. An empty suffix excludes nothing.
    pub fn excluding(mut self, suffix: Option<&'a str>) -> Self {
        self.exclude_suffix = suffix.filter(|s| !s.is_empty());
        self
    }

    pub fn apply<'t, T: Named>(&self, items: &'t [T]) -> Vec<&'t T> {
        let mut items: Vec<&T> = items.iter().collect();

        if self.sort {
            // stable: equal names keep their input order
            items.sort_by(|a, b| a.name().cmp(b.name()));
        }

        if let Some(filter) = self.filter {
            items.retain(|item| filter.is_match(item.name()));
        }

        if let Some(suffix) = self.exclude_suffix {
            items.retain(|item| !has_duplicate_suffix(item.name(), suffix));
        }

        items
    }
}
