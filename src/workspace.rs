//! Workspace: the single owner of the layout and the entry point for every
//! user action.
//!
//! DESIGN
//! ======
//! The presentation layer calls one method per user action and gets back a
//! list of [`Action`]s: re-render, pin a panel's pixel geometry, show a
//! notice, or hand out a share link. The layout itself is read through
//! [`Workspace::layout`] when re-rendering.
//!
//! Every successful layout change is persisted immediately through the
//! [`LayoutStore`]. A failed write is reported as a notice; the in-memory
//! layout stays authoritative.
//!
//! While a resize drag is active, operations that restructure the panel list
//! are refused with [`ValidationError::ResizeInProgress`] so the dragged index
//! stays valid until pointer-up.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};

use crate::area::Area;
use crate::carrier::{FragmentCarrier, LayoutStore};
use crate::codec;
use crate::config::{EngineConfig, ResizeCommit};
use crate::error::{ErrorCode, ValidationError};
use crate::geometry::{Point, Rect, Size};
use crate::layout::{Layout, PanelField, normalize_target};
use crate::resize::{self, Effect, Handle, ResizeEvent, ResizeState};
use crate::template::TemplateLibrary;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    /// Stable error code, for error notices.
    pub code: Option<&'static str>,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, code: None, message: message.into() }
    }

    /// An error notice whose text is the error's own message.
    #[must_use]
    pub fn from_error(err: &impl ErrorCode) -> Self {
        Self::error(err, err.to_string())
    }

    /// An error notice with custom text, still carrying the error's code.
    #[must_use]
    pub fn error(err: &impl ErrorCode, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, code: Some(err.error_code()), message: message.into() }
    }
}

/// What the presentation layer should do after a workspace call.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Rebuild the view from [`Workspace::layout`]. Drops pixel overlays.
    RenderNeeded,
    /// Show a transient notice.
    Notify(Notice),
    /// Position panel `index` absolutely at `rect`.
    SetGeometry { index: usize, rect: Rect },
    /// A share link is ready for the clipboard.
    ShareLink(String),
}

/// Owns the layout, the resize gesture, and the carriers.
pub struct Workspace<S, F> {
    layout: Layout,
    resize: ResizeState,
    overlays: BTreeMap<usize, Rect>,
    config: EngineConfig,
    templates: TemplateLibrary,
    store: S,
    fragment: F,
}

impl<S: LayoutStore, F: FragmentCarrier> Workspace<S, F> {
    /// A workspace holding the default layout and the built-in templates.
    ///
    /// Call [`Workspace::boot`] to restore persisted or shared state.
    #[must_use]
    pub fn new(config: EngineConfig, store: S, fragment: F) -> Self {
        Self {
            layout: Layout::default(),
            resize: ResizeState::Idle,
            overlays: BTreeMap::new(),
            config,
            templates: TemplateLibrary::builtin(),
            store,
            fragment,
        }
    }

    /// Replace the template library.
    #[must_use]
    pub fn with_templates(mut self, templates: TemplateLibrary) -> Self {
        self.templates = templates;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    #[must_use]
    pub fn resize_state(&self) -> &ResizeState {
        &self.resize
    }

    /// Pixel geometry pinned on panel `index` by a resize, if any.
    #[must_use]
    pub fn overlay(&self, index: usize) -> Option<Rect> {
        self.overlays.get(&index).copied()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn fragment(&self) -> &F {
        &self.fragment
    }

    // --- Lifecycle ---

    /// Restore the layout: persisted slot first, then a shared layout in the
    /// fragment, which wins when present and valid.
    ///
    /// Undecodable text never replaces a good layout; it is reported instead.
    pub fn boot(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.resize = ResizeState::Idle;
        self.overlays.clear();

        self.layout = match self.store.load() {
            None => {
                info!("no saved layout; using default");
                Layout::default()
            }
            Some(text) => match codec::decode(&text) {
                Ok(layout) => {
                    info!(panels = layout.len(), "layout restored from storage");
                    layout
                }
                Err(e) => {
                    warn!(error = %e, "saved layout unreadable; using default");
                    actions.push(Action::Notify(Notice::error(&e, format!("Failed to load saved layout: {e}"))));
                    Layout::default()
                }
            },
        };

        if let Some(fragment) = self.fragment.read_fragment() {
            match codec::decode_fragment(&fragment, &self.config.share_param) {
                Ok(Some(layout)) => {
                    info!(panels = layout.len(), "layout loaded from share link");
                    self.layout = layout;
                    actions.push(Action::Notify(Notice::info("Layout loaded from URL")));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "share link unreadable; keeping current layout");
                    actions.push(Action::Notify(Notice::error(&e, "Failed to load layout from URL")));
                }
            }
        }

        actions.push(Action::RenderNeeded);
        actions
    }

    /// Replace the layout with a fresh default and clear the share fragment.
    pub fn reset(&mut self) -> Vec<Action> {
        if let Err(e) = self.ensure_idle() {
            return reject(&e);
        }
        self.layout = Layout::default();
        self.fragment.write_fragment("");
        info!("layout reset to default");
        self.commit_change()
    }

    // --- Panel list ---

    /// Append an unconfigured panel in the next free grid cell.
    pub fn add_panel(&mut self) -> Vec<Action> {
        if let Err(e) = self.ensure_idle() {
            return reject(&e);
        }
        let index = self.layout.add_panel();
        let grid = self.layout.grid();
        info!(index, cols = grid.cols, rows = grid.rows, "panel added");
        self.commit_change()
    }

    /// Remove panel `index`; refused when it is the last one.
    pub fn remove_panel(&mut self, index: usize) -> Vec<Action> {
        if let Err(e) = self.ensure_idle() {
            return reject(&e);
        }
        match self.layout.remove_panel(index) {
            Ok(_) => {
                info!(index, remaining = self.layout.len(), "panel removed");
                self.commit_change()
            }
            Err(e) => reject(&e),
        }
    }

    /// Swap in the grid and areas of template `name`, keeping panel content.
    pub fn apply_template(&mut self, name: &str) -> Vec<Action> {
        if let Err(e) = self.ensure_idle() {
            return reject(&e);
        }
        let template = match self.templates.get(name) {
            Ok(template) => template,
            Err(e) => return reject(&e),
        };
        self.layout.apply_template(template);
        info!(template = name, panels = self.layout.len(), "template applied");
        self.commit_change()
    }

    // --- Panel settings ---

    /// Set one field on panel `index`.
    pub fn update_panel_field(&mut self, index: usize, field: PanelField) -> Vec<Action> {
        match self.layout.update_panel_field(index, field) {
            Ok(()) => {
                debug!(index, "panel field updated");
                self.commit_change()
            }
            Err(e) => reject(&e),
        }
    }

    /// Point panel `index` at user-entered `url`, adding `https://` when no
    /// scheme is given.
    pub fn load_panel(&mut self, index: usize, url: &str) -> Vec<Action> {
        let target = match normalize_target(url) {
            Ok(target) => target,
            Err(e) => return reject(&e),
        };
        info!(index, target = %target, "panel target set");
        self.update_panel_field(index, PanelField::Target(target))
    }

    // --- Resize gesture ---

    /// Start dragging `handle` on panel `index`.
    ///
    /// `rects` holds every panel's current rectangle in panel order; the
    /// dragged panel's entry is its starting geometry and the rest become the
    /// snap targets. Ignored while another drag is active.
    pub fn begin_resize(&mut self, index: usize, handle: Handle, pointer: Point, rects: &[Rect], canvas: Size) -> Vec<Action> {
        if let Some(active) = self.resize.active_index() {
            debug!(index, active, "pointer-down ignored; resize already active");
            return Vec::new();
        }
        if index >= self.layout.len() {
            return reject(&ValidationError::PanelOutOfRange { index, len: self.layout.len() });
        }
        let Some(&rect) = rects.get(index) else {
            return reject(&ValidationError::PanelOutOfRange { index, len: rects.len() });
        };
        let siblings = rects
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, r)| *r)
            .collect();

        debug!(index, handle = handle.as_str(), "resize started");
        self.drive(ResizeEvent::PointerDown { index, handle, pointer, rect, siblings, canvas })
    }

    /// Feed a pointer-move from anywhere on the page.
    pub fn pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        self.drive(ResizeEvent::PointerMove { pointer })
    }

    /// Feed a pointer-up from anywhere on the page.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        self.drive(ResizeEvent::PointerUp)
    }

    // --- Carriers ---

    /// Persist the layout and report the outcome.
    pub fn save(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.persist(true, &mut actions);
        actions
    }

    /// Publish the layout in the fragment and build a share URL on `base_url`.
    pub fn share(&mut self, base_url: &str) -> Vec<Action> {
        let param = self.config.share_param.as_str();
        let fragment = codec::encode_fragment(&self.layout, param);
        let url = codec::share_url(base_url, &self.layout, param);
        self.fragment.write_fragment(&fragment);
        info!(len = url.len(), "share link created");
        vec![Action::ShareLink(url), Action::Notify(Notice::info("Share link created"))]
    }

    // --- Internals ---

    fn ensure_idle(&self) -> Result<(), ValidationError> {
        if self.resize.is_dragging() {
            return Err(ValidationError::ResizeInProgress);
        }
        Ok(())
    }

    /// Run one event through the gesture machine and translate its effects.
    fn drive(&mut self, event: ResizeEvent) -> Vec<Action> {
        let params = self.config.resize_params();
        let state = std::mem::take(&mut self.resize);
        let (state, effects) = resize::step(state, event, &params);
        self.resize = state;

        let mut actions = Vec::new();
        for effect in effects {
            match effect {
                Effect::Geometry { index, rect } => {
                    self.overlays.insert(index, rect);
                    actions.push(Action::SetGeometry { index, rect });
                }
                Effect::Released { index, rect, canvas } => {
                    debug!(index, width = rect.width, height = rect.height, "resize released");
                    actions.extend(self.finish_resize(index, rect, canvas));
                }
            }
        }
        actions
    }

    fn finish_resize(&mut self, index: usize, rect: Rect, canvas: Size) -> Vec<Action> {
        match self.config.commit {
            ResizeCommit::Ephemeral => Vec::new(),
            ResizeCommit::Grid => {
                let Some(area) = Area::from_rect(rect, canvas, self.layout.grid()) else {
                    warn!(index, "canvas size unusable; resize kept as overlay");
                    return Vec::new();
                };
                match self.layout.set_area(index, area) {
                    Ok(()) => {
                        info!(
                            index,
                            row_start = area.row_start,
                            col_start = area.col_start,
                            row_end = area.row_end,
                            col_end = area.col_end,
                            "resize committed to grid"
                        );
                        self.commit_change()
                    }
                    Err(e) => reject(&e),
                }
            }
        }
    }

    /// Persist after a successful change and request a re-render.
    fn commit_change(&mut self) -> Vec<Action> {
        self.drop_overlays();
        let mut actions = Vec::new();
        self.persist(self.config.autosave_notice, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Re-rendering discards pixel overlays, except the one an active drag owns.
    fn drop_overlays(&mut self) {
        match self.resize.active_index() {
            Some(active) => self.overlays.retain(|&i, _| i == active),
            None => self.overlays.clear(),
        }
    }

    fn persist(&mut self, announce: bool, actions: &mut Vec<Action>) {
        let text = codec::encode(&self.layout);
        match self.store.save(&text) {
            Ok(()) => {
                debug!(bytes = text.len(), "layout persisted");
                if announce {
                    actions.push(Action::Notify(Notice::info("Layout saved")));
                }
            }
            Err(e) => {
                error!(error = %e, "failed to persist layout");
                actions.push(Action::Notify(Notice::error(&e, format!("Failed to save layout: {e}"))));
            }
        }
    }
}

/// Log a refused operation and turn it into a notice.
fn reject(err: &ValidationError) -> Vec<Action> {
    warn!(code = err.error_code(), error = %err, "operation rejected");
    vec![Action::Notify(Notice::from_error(err))]
}
