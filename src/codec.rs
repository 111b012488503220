//! Layout codec: structural JSON plus the share-link transport stage.
//!
//! DESIGN
//! ======
//! Two stages with explicit boundaries:
//!
//! 1. **Structural**: [`encode`] / [`decode`] convert a [`Layout`] to and
//!    from compact JSON. Key names and order are fixed by the serde derives on
//!    the model types, so encoding is deterministic. This is the form kept in
//!    the persistence slot.
//! 2. **Transport**: [`encode_transport`] / [`decode_transport`] wrap that
//!    text in URL-safe base64 so it survives being pasted around inside a
//!    URL fragment. [`encode_fragment`] / [`decode_fragment`] place it under a
//!    query-style key (`data=...`).
//!
//! Decoding also accepts the older `frames` / `url` / `sandbox` spelling and
//! panels without an `area`, which are slotted in row-major order.
//!
//! ERROR HANDLING
//! ==============
//! Every decode path returns [`DecodeError`]; nothing here panics on bad
//! input. Callers keep their previous layout when decoding fails.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::area::{Area, GridSpec};
use crate::consts::DEFAULT_SCALE;
use crate::error::DecodeError;
use crate::layout::{Layout, Panel};
use crate::placement;

/// Serialize a layout to its persisted text form.
#[must_use]
pub fn encode(layout: &Layout) -> String {
    // Every map key is a string and every field a plain scalar; serde_json
    // has no failing path for this shape.
    serde_json::to_string(layout).unwrap_or_default()
}

/// Parse and validate persisted layout text.
///
/// # Errors
///
/// - [`DecodeError::Syntax`] if `text` is not JSON of the expected shape
/// - [`DecodeError::MissingStructure`] if the grid or the panel list is absent
/// - [`DecodeError::Invalid`] if the result breaks a layout invariant
pub fn decode(text: &str) -> Result<Layout, DecodeError> {
    let raw: RawLayout = serde_json::from_str(text)?;
    let (Some(mut grid), Some(raw_panels)) = (raw.grid, raw.panels) else {
        return Err(DecodeError::MissingStructure);
    };

    let mut panels = Vec::with_capacity(raw_panels.len());
    for (n, raw) in raw_panels.into_iter().enumerate() {
        let area = match raw.area {
            Some(area) => area,
            None => placement::allocate(&mut grid, n),
        };
        panels.push(Panel { target: raw.target, isolated: raw.isolated, area, scale: raw.scale });
    }
    Ok(Layout::new(grid, panels)?)
}

/// Re-encode structural text into the URL-safe transport alphabet.
#[must_use]
pub fn encode_transport(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Undo [`encode_transport`].
///
/// Standard-alphabet input (`+`, `/`, `=` padding) is accepted too, as is a
/// `+` that a form decoder has already turned into a space.
///
/// # Errors
///
/// - [`DecodeError::Transport`] for characters outside either base64 alphabet
/// - [`DecodeError::Utf8`] if the bytes are not UTF-8
pub fn decode_transport(payload: &str) -> Result<String, DecodeError> {
    let normalized: String = payload
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    Ok(String::from_utf8(bytes)?)
}

/// Build the fragment body (without `#`) carrying `layout` under `param`.
#[must_use]
pub fn encode_fragment(layout: &Layout, param: &str) -> String {
    format!("{param}={}", encode_transport(&encode(layout)))
}

/// Extract and decode a layout from a fragment, if it carries `param`.
///
/// A leading `#` is ignored. Returns `Ok(None)` when the key is absent or
/// has an empty value.
///
/// # Errors
///
/// Any [`DecodeError`] from the transport or structural stage.
pub fn decode_fragment(fragment: &str, param: &str) -> Result<Option<Layout>, DecodeError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let Some(payload) = fragment_value(fragment, param) else {
        return Ok(None);
    };
    let text = decode_transport(payload)?;
    decode(&text).map(Some)
}

/// Full share URL: `base` with any existing fragment replaced by one carrying
/// `layout`.
#[must_use]
pub fn share_url(base: &str, layout: &Layout, param: &str) -> String {
    let base = base.split_once('#').map_or(base, |(head, _)| head);
    format!("{base}#{}", encode_fragment(layout, param))
}

/// Value of `key` in an `a=1&b=2` style fragment. Empty values count as absent.
fn fragment_value<'a>(fragment: &'a str, key: &str) -> Option<&'a str> {
    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

// =============================================================================
// WIRE SHAPES
// =============================================================================

/// Lenient input shape: both halves optional so a missing one is reported as
/// [`DecodeError::MissingStructure`] rather than a syntax error.
#[derive(Deserialize)]
struct RawLayout {
    grid: Option<GridSpec>,
    #[serde(alias = "frames")]
    panels: Option<Vec<RawPanel>>,
}

#[derive(Deserialize)]
struct RawPanel {
    #[serde(default, alias = "url")]
    target: String,
    #[serde(default = "default_isolated", alias = "sandbox")]
    isolated: bool,
    #[serde(default)]
    area: Option<Area>,
    #[serde(default = "default_scale")]
    scale: f64,
}

fn default_isolated() -> bool {
    true
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}
