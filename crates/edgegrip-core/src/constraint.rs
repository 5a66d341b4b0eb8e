//! Size constraint resolution for resize operations.

use kurbo::Size;

/// Relative tolerance for ratio comparisons.
pub const RATIO_EPSILON: f64 = 1e-6;

/// Clamp a proposed target size against an optional minimum size and an
/// optional fixed width/height ratio.
///
/// Resolution order:
/// 1. Each axis is floored independently against `minimum`.
/// 2. With ratio preservation on, height is derived from the floored width
///    (`height = width / ratio`). If the derived height falls below the
///    height floor, width is recomputed from the minimum height instead
///    and floored again. The floor wins over exact ratio fidelity when the
///    configured minimum is incompatible with the ratio.
///
/// A non-positive `ratio` disables preservation for this call; the
/// misconfiguration is logged, not escalated.
///
/// The result is a fixed point: clamping it again returns it unchanged.
pub fn clamp_size(proposed: Size, minimum: Option<Size>, preserve_ratio: bool, ratio: f64) -> Size {
    let mut width = proposed.width;
    let mut height = proposed.height;

    if let Some(min) = minimum {
        width = width.max(min.width);
        height = height.max(min.height);
    }

    if preserve_ratio {
        if ratio <= 0.0 {
            log::warn!("ratio preservation requested with non-positive ratio {ratio}; ignoring");
            return Size::new(width, height);
        }
        height = width / ratio;
        if let Some(min) = minimum {
            if height < min.height {
                height = min.height;
                width = (min.height * ratio).max(min.width);
            }
        }
    }

    Size::new(width, height)
}
