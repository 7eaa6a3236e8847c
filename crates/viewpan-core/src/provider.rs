use crate::{ChromeConfig, Offset, Rect, pan};

/// Resolves live geometry for the offset calculator.
///
/// Implementations own the lookup of the stage container and of
/// candidate targets (e.g. a DOM bridge or a UI-tree query). Returning
/// `None` means the element does not exist or has not been laid out
/// yet; the calculator treats that as a no-op.
pub trait GeometryProvider {
    /// Returns the stage bounding rectangle, if available.
    fn resolve_stage(&self) -> Option<Rect>;

    /// Returns the bounding rectangle of the target with the given id.
    fn resolve_target(&self, id: &str) -> Option<Rect>;
}

/// Resolves the stage and a target through `provider`, then computes
/// the recentering offset.
///
/// Unresolved geometry yields [`Offset::ZERO`], matching
/// [`pan::compute_offset`]'s missing-input behavior.
pub fn recenter_offset(
    provider: &impl GeometryProvider,
    target_id: &str,
    panel_open: bool,
    chrome: &ChromeConfig,
) -> Offset {
    let stage = provider.resolve_stage();
    let target = provider.resolve_target(target_id);
    pan::compute_offset(stage.as_ref(), target.as_ref(), panel_open, chrome)
}
