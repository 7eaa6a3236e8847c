//! The recentering offset calculator.
//!
//! A pure function over caller-supplied rectangles, easy to unit-test
//! without any rendering environment. The stage's usable area is the
//! stage minus two fixed obstruction bands: a horizontal bar below and,
//! when open, a vertical panel on the right.

use serde::{Deserialize, Serialize};

use crate::{Offset, Rect};

/// Dimensions of the fixed UI chrome that obstructs the stage.
///
/// Doubles as the `[chrome]` section of `config.toml`; missing fields
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Height in pixels of the bar band at the bottom of the stage.
    pub bar_height: f64,
    /// Width in pixels of the side panel band when the panel is open.
    pub panel_width: f64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            bar_height: 100.0,
            panel_width: 350.0,
        }
    }
}

/// Computes the translation that recenters `target` within the visible
/// part of `stage`.
///
/// The visible area is the stage minus the bar band and, when
/// `panel_open` is true, the panel band. Since the panel sits on the
/// right and the bar below, the visible area keeps the stage's
/// top-left corner.
///
/// Returns [`Offset::ZERO`] when either rectangle is absent, so callers
/// may invoke this before layout is ready. Visible dimensions are not
/// clamped: chrome larger than the stage produces an offset that
/// overshoots, and non-finite coordinates flow through the arithmetic
/// unchecked.
pub fn compute_offset(
    stage: Option<&Rect>,
    target: Option<&Rect>,
    panel_open: bool,
    chrome: &ChromeConfig,
) -> Offset {
    let (Some(stage), Some(target)) = (stage, target) else {
        return Offset::ZERO;
    };

    let panel_width = if panel_open { chrome.panel_width } else { 0.0 };
    let visible_width = stage.width - panel_width;
    let visible_height = stage.height - chrome.bar_height;

    let visible_center_x = stage.left + visible_width / 2.0;
    let visible_center_y = stage.top + visible_height / 2.0;

    Offset::new(
        visible_center_x - target.center_x(),
        visible_center_y - target.center_y(),
    )
}
