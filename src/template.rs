//! Static library of pre-baked layouts.
//!
//! A template carries only geometry: a grid and one area per panel. Content
//! fields are merged in by [`crate::layout::Layout::apply_template`].
//!
//! Built-in names follow `<cols>x<rows>` for uniform grids, plus a few
//! asymmetric arrangements.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use std::collections::BTreeMap;

use crate::area::{Area, GridSpec};
use crate::error::ValidationError;
use crate::placement;

/// A canned grid and panel arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    grid: GridSpec,
    areas: Vec<Area>,
}

impl Template {
    /// Build a template, rejecting arrangements that would not form a valid layout.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyGrid`] for a zero-sized grid
    /// - [`ValidationError::NoPanels`] when `areas` is empty
    /// - [`ValidationError::DegenerateArea`] / [`ValidationError::AreaOutOfBounds`]
    ///   for an area that does not fit the grid
    pub fn new(grid: GridSpec, areas: Vec<Area>) -> Result<Self, ValidationError> {
        if grid.is_empty() {
            return Err(ValidationError::EmptyGrid { cols: grid.cols, rows: grid.rows });
        }
        if areas.is_empty() {
            return Err(ValidationError::NoPanels);
        }
        for (index, area) in areas.iter().enumerate() {
            if area.is_degenerate() {
                return Err(ValidationError::DegenerateArea { index });
            }
            if !area.fits(grid) {
                return Err(ValidationError::AreaOutOfBounds { index });
            }
        }
        Ok(Self { grid, areas })
    }

    /// A uniform grid with one panel per cell.
    #[must_use]
    pub fn uniform(cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let count = (cols as usize) * (rows as usize);
        let (grid, areas) = placement::sequential(cols, count);
        Self { grid, areas }
    }

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }
}

/// Named templates available to `apply_template`.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: BTreeMap<String, Template>,
}

impl TemplateLibrary {
    /// An empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The library shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for (cols, rows) in [(1, 1), (2, 1), (1, 2), (2, 2), (3, 2), (3, 3)] {
            library.templates.insert(format!("{cols}x{rows}"), Template::uniform(cols, rows));
        }
        // One tall panel on the left, two stacked on the right.
        library.templates.insert(
            "main-side".into(),
            Template {
                grid: GridSpec::new(2, 2),
                areas: vec![Area::new(1, 1, 3, 2), Area::cell(1, 2), Area::cell(2, 2)],
            },
        );
        // One wide panel on top, three below.
        library.templates.insert(
            "banner-3".into(),
            Template {
                grid: GridSpec::new(3, 2),
                areas: vec![Area::new(1, 1, 2, 4), Area::cell(2, 1), Area::cell(2, 2), Area::cell(2, 3)],
            },
        );
        library
    }

    /// Register `template` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, template: Template) {
        self.templates.insert(name.into(), template);
    }

    /// Look up a template by name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTemplate`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&Template, ValidationError> {
        self.templates
            .get(name)
            .ok_or_else(|| ValidationError::UnknownTemplate(name.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}
