//! Layout model: the grid plus its ordered panel records.
//!
//! A panel's identity is its index; removing a panel renumbers every panel
//! after it. All mutations go through [`Layout`] methods, which either succeed
//! or return a [`ValidationError`] with the layout left exactly as it was.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::area::{Area, GridSpec};
use crate::consts::{DEFAULT_COLS, DEFAULT_PANELS, DEFAULT_SCALE, SCALE_MAX, SCALE_MIN};
use crate::error::ValidationError;
use crate::placement;
use crate::template::Template;

/// One embedded-content panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Content locator; empty means the panel is unconfigured.
    pub target: String,
    /// Run the embedded content under a restrictive sandbox.
    pub isolated: bool,
    /// Where the panel sits on the grid.
    pub area: Area,
    /// Cosmetic zoom factor.
    pub scale: f64,
}

impl Panel {
    /// An unconfigured, isolated panel at `area`.
    #[must_use]
    pub fn new(area: Area) -> Self {
        Self {
            target: String::new(),
            isolated: true,
            area,
            scale: DEFAULT_SCALE,
        }
    }

    /// Whether a content locator has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.target.is_empty()
    }
}

/// A single per-panel setting, as edited from the panel header.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelField {
    Target(String),
    Isolated(bool),
    Scale(f64),
}

/// Grid dimensions plus the panels placed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    grid: GridSpec,
    panels: Vec<Panel>,
}

impl Default for Layout {
    fn default() -> Self {
        let (grid, areas) = placement::sequential(DEFAULT_COLS, DEFAULT_PANELS);
        Self { grid, panels: areas.into_iter().map(Panel::new).collect() }
    }
}

impl Layout {
    /// Build a layout, checking every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found by [`Layout::validate`].
    pub fn new(grid: GridSpec, panels: Vec<Panel>) -> Result<Self, ValidationError> {
        let layout = Self { grid, panels };
        layout.validate()?;
        Ok(layout)
    }

    /// Check the grid, panel count, every area, and every scale.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyGrid`] for a zero-sized grid
    /// - [`ValidationError::NoPanels`] when there are no panels
    /// - [`ValidationError::DegenerateArea`] / [`ValidationError::AreaOutOfBounds`]
    ///   for a misplaced panel
    /// - [`ValidationError::InvalidScale`] for a non-finite or non-positive scale
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.grid.is_empty() {
            return Err(ValidationError::EmptyGrid { cols: self.grid.cols, rows: self.grid.rows });
        }
        if self.panels.is_empty() {
            return Err(ValidationError::NoPanels);
        }
        for (index, panel) in self.panels.iter().enumerate() {
            if panel.area.is_degenerate() {
                return Err(ValidationError::DegenerateArea { index });
            }
            if !panel.area.fits(self.grid) {
                return Err(ValidationError::AreaOutOfBounds { index });
            }
            if !panel.scale.is_finite() || panel.scale <= 0.0 {
                return Err(ValidationError::InvalidScale(panel.scale));
            }
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[must_use]
    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false for a validated layout; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    // --- Mutations ---

    /// Append an unconfigured panel in the next row-major cell, growing the grid
    /// downward if needed. Returns the new panel's index.
    pub fn add_panel(&mut self) -> usize {
        let area = placement::allocate(&mut self.grid, self.panels.len());
        self.panels.push(Panel::new(area));
        self.panels.len() - 1
    }

    /// Remove the panel at `index`. Remaining panels keep their areas.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PanelOutOfRange`] if `index` is past the end
    /// - [`ValidationError::LastPanel`] if only one panel remains
    pub fn remove_panel(&mut self, index: usize) -> Result<Panel, ValidationError> {
        self.check_index(index)?;
        if self.panels.len() <= 1 {
            return Err(ValidationError::LastPanel);
        }
        Ok(self.panels.remove(index))
    }

    /// Replace the grid and areas with `template`'s, carrying over content.
    ///
    /// Template panel `i` keeps the `target` and `isolated` of current panel `i`
    /// when one exists. Current panels past the template's count are dropped.
    pub fn apply_template(&mut self, template: &Template) {
        let panels = template
            .areas()
            .iter()
            .enumerate()
            .map(|(i, &area)| {
                let mut panel = Panel::new(area);
                if let Some(previous) = self.panels.get(i) {
                    panel.target.clone_from(&previous.target);
                    panel.isolated = previous.isolated;
                }
                panel
            })
            .collect();
        self.grid = template.grid();
        self.panels = panels;
    }

    /// Update one setting on the panel at `index`.
    ///
    /// Scales are clamped to the supported zoom range.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PanelOutOfRange`] if `index` is past the end
    /// - [`ValidationError::InvalidScale`] for a non-finite or non-positive scale
    pub fn update_panel_field(&mut self, index: usize, field: PanelField) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let panel = &mut self.panels[index];
        match field {
            PanelField::Target(target) => panel.target = target,
            PanelField::Isolated(isolated) => panel.isolated = isolated,
            PanelField::Scale(scale) => {
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(ValidationError::InvalidScale(scale));
                }
                panel.scale = scale.clamp(SCALE_MIN, SCALE_MAX);
            }
        }
        Ok(())
    }

    /// Move the panel at `index` to `area`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PanelOutOfRange`] if `index` is past the end
    /// - [`ValidationError::DegenerateArea`] / [`ValidationError::AreaOutOfBounds`]
    ///   if `area` does not fit the grid
    pub fn set_area(&mut self, index: usize, area: Area) -> Result<(), ValidationError> {
        self.check_index(index)?;
        if area.is_degenerate() {
            return Err(ValidationError::DegenerateArea { index });
        }
        if !area.fits(self.grid) {
            return Err(ValidationError::AreaOutOfBounds { index });
        }
        self.panels[index].area = area;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.panels.len() {
            return Err(ValidationError::PanelOutOfRange { index, len: self.panels.len() });
        }
        Ok(())
    }
}

/// Normalize a user-entered content locator.
///
/// Trims surrounding whitespace and prefixes `https://` unless the input
/// already carries an `http://` or `https://` scheme (any case).
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTarget`] for blank input.
pub fn normalize_target(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTarget);
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{trimmed}"))
    }
}
