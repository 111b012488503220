//! Grid layout engine for a workspace of embedded-content panels.
//!
//! The engine owns a layout (a grid of rows and columns plus an ordered list
//! of panels, each placed on a rectangular area of the grid) and every user
//! operation on it: adding and removing panels, applying templates, editing
//! per-panel settings, and resizing panels by dragging their edges and
//! corners with edge snapping. Layouts are persisted to a storage slot and
//! can be shared through a base64 URL fragment. The host presentation layer
//! only wires pointer and form events into a [`workspace::Workspace`] and
//! applies the [`workspace::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`workspace`] | Controller owning the layout, gesture, and carriers |
//! | [`layout`] | Layout and panel model with validated mutations |
//! | [`area`] | Grid dimensions and grid-line areas |
//! | [`placement`] | Row-major auto-placement of new panels |
//! | [`template`] | Named layout presets |
//! | [`resize`] | Drag handles and the resize state machine |
//! | [`snap`] | Edge snapping and minimum-size clamping |
//! | [`geometry`] | Pixel points, sizes, and rectangles |
//! | [`codec`] | Structural text encoding and share-link transport |
//! | [`carrier`] | Persistence slot and fragment traits, with implementations |
//! | [`config`] | Engine configuration from env or JSON |
//! | [`error`] | Error types and stable error codes |
//! | [`consts`] | Shared constants (snap threshold, minimum size, keys) |

pub mod area;
pub mod carrier;
pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod resize;
pub mod snap;
pub mod template;
pub mod workspace;
