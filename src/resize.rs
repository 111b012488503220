//! Resize gesture: handles, drag session state, and the pure state machine.
//!
//! [`step`] takes the current [`ResizeState`] and one [`ResizeEvent`] and
//! returns the next state plus the [`Effect`]s the host should apply. Nothing
//! here touches the layout; the workspace decides what a finished drag means.
//!
//! Every pointer-move recomputes the rectangle from the drag *origin* and the
//! total pointer delta, so intermediate snaps never accumulate.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_PANEL_SIZE_PX, SNAP_THRESHOLD_PX};
use crate::geometry::{Point, Rect, Size};
use crate::snap::{clamp_min_size, snap_to_siblings};

/// The eight drag handles on a panel's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl Handle {
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Parse a handle from its compass name (`"n"`, `"se"`, ...), ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// Moves the top edge.
    #[must_use]
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Moves the bottom edge.
    #[must_use]
    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Moves the right edge.
    #[must_use]
    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Moves the left edge.
    #[must_use]
    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }
}

/// Tunables for a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeParams {
    /// Smallest allowed width and height.
    pub min_size: f64,
    /// Edge distance under which snapping applies.
    pub snap_threshold: f64,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self { min_size: MIN_PANEL_SIZE_PX, snap_threshold: SNAP_THRESHOLD_PX }
    }
}

/// Everything captured at pointer-down, plus the latest computed rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Index of the panel being resized.
    pub index: usize,
    /// Which handle is being dragged.
    pub handle: Handle,
    /// Pointer position at pointer-down.
    pub start: Point,
    /// Panel rectangle at pointer-down.
    pub origin: Rect,
    /// Every other panel's rectangle at pointer-down, in panel order.
    pub siblings: Vec<Rect>,
    /// Canvas size at pointer-down.
    pub canvas: Size,
    /// Rectangle after the most recent pointer-move.
    pub current: Rect,
}

/// Gesture state between pointer events.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResizeState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A handle is held down.
    Dragging(DragSession),
}

impl ResizeState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Index of the panel being dragged, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.index),
        }
    }
}

/// Pointer input, already translated into canvas coordinates by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeEvent {
    /// A handle was pressed.
    PointerDown {
        index: usize,
        handle: Handle,
        pointer: Point,
        rect: Rect,
        siblings: Vec<Rect>,
        canvas: Size,
    },
    /// The pointer moved anywhere on the page.
    PointerMove { pointer: Point },
    /// The pointer was released anywhere on the page.
    PointerUp,
}

/// What the host should do in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Position the panel absolutely at `rect`.
    Geometry { index: usize, rect: Rect },
    /// The drag finished with the panel at `rect`.
    Released { index: usize, rect: Rect, canvas: Size },
}

/// Advance the gesture by one event.
///
/// A pointer-down while already dragging is ignored, as are moves and
/// releases while idle.
#[must_use]
pub fn step(state: ResizeState, event: ResizeEvent, params: &ResizeParams) -> (ResizeState, Vec<Effect>) {
    match (state, event) {
        (ResizeState::Idle, ResizeEvent::PointerDown { index, handle, pointer, rect, siblings, canvas }) => {
            let session = DragSession {
                index,
                handle,
                start: pointer,
                origin: rect,
                siblings,
                canvas,
                current: rect,
            };
            (ResizeState::Dragging(session), vec![Effect::Geometry { index, rect }])
        }
        (ResizeState::Dragging(mut session), ResizeEvent::PointerMove { pointer }) => {
            let delta = Point::new(pointer.x - session.start.x, pointer.y - session.start.y);
            let rect = resize_rect(session.origin, session.handle, delta, &session.siblings, params);
            session.current = rect;
            let index = session.index;
            (ResizeState::Dragging(session), vec![Effect::Geometry { index, rect }])
        }
        (ResizeState::Dragging(session), ResizeEvent::PointerUp) => {
            let effect = Effect::Released { index: session.index, rect: session.current, canvas: session.canvas };
            (ResizeState::Idle, vec![effect])
        }
        (state, _) => (state, Vec::new()),
    }
}

/// Compute the dragged rectangle for a total pointer `delta` from the origin.
///
/// Applies the handle's edge moves, clamps to the minimum size, snaps against
/// `siblings`, then clamps again so snapping can never collapse the panel.
#[must_use]
pub fn resize_rect(origin: Rect, handle: Handle, delta: Point, siblings: &[Rect], params: &ResizeParams) -> Rect {
    let mut r = origin;
    if handle.north() {
        r.top += delta.y;
        r.height -= delta.y;
    }
    if handle.south() {
        r.height += delta.y;
    }
    if handle.west() {
        r.left += delta.x;
        r.width -= delta.x;
    }
    if handle.east() {
        r.width += delta.x;
    }

    let r = clamp_min_size(r, params.min_size);
    let r = snap_to_siblings(r, siblings, params.snap_threshold);
    clamp_min_size(r, params.min_size)
}
