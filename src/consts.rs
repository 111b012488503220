//! Shared constants for the layout engine.

// ── Resize ──────────────────────────────────────────────────────

/// Smallest width or height, in pixels, a panel may be dragged down to.
pub const MIN_PANEL_SIZE_PX: f64 = 200.0;

/// Edge distance, in pixels, under which a dragged edge snaps to a sibling edge.
pub const SNAP_THRESHOLD_PX: f64 = 10.0;

// ── Panel defaults ──────────────────────────────────────────────

/// Lower bound for a panel's cosmetic zoom factor.
pub const SCALE_MIN: f64 = 0.1;

/// Upper bound for a panel's cosmetic zoom factor.
pub const SCALE_MAX: f64 = 3.0;

/// Zoom factor for freshly created panels.
pub const DEFAULT_SCALE: f64 = 1.0;

// ── Carriers ────────────────────────────────────────────────────

/// Name of the persistence slot holding the encoded layout.
pub const STORAGE_KEY: &str = "screenstack_layout";

/// Query-style key carrying the layout inside a share-link fragment.
pub const SHARE_PARAM: &str = "data";

// ── Default layout ──────────────────────────────────────────────

/// Column count of the built-in default layout.
pub const DEFAULT_COLS: u32 = 2;

/// Panel count of the built-in default layout.
pub const DEFAULT_PANELS: usize = 4;
