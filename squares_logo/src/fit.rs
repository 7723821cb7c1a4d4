// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};

/// How a fixed logical canvas is mapped into an arbitrary target rectangle.
///
/// Every policy centers the result inside the target; they differ only in
/// how the horizontal and vertical scale factors are reconciled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FitPolicy {
    /// Scale uniformly so the source fits inside the target.
    #[default]
    AspectFit,
    /// Scale uniformly so the source covers the target; it may overflow.
    AspectFill,
    /// Scale each axis independently so the source fills the target exactly.
    Stretch,
    /// Keep the source size and only center it.
    Center,
}

impl FitPolicy {
    /// Returns the per-axis scale factors this policy applies to `source`.
    ///
    /// Raw factors are the absolute ratios of target to source extents.
    /// A source without area yields unit scale.
    #[must_use]
    pub fn scales(self, source: Rect, target: Rect) -> Vec2 {
        let source = source.abs();
        let target = target.abs();
        if source.width() == 0.0 || source.height() == 0.0 {
            return Vec2::new(1.0, 1.0);
        }
        let sx = (target.width() / source.width()).abs();
        let sy = (target.height() / source.height()).abs();
        match self {
            Self::AspectFit => {
                let s = sx.min(sy);
                Vec2::new(s, s)
            }
            Self::AspectFill => {
                let s = sx.max(sy);
                Vec2::new(s, s)
            }
            Self::Stretch => Vec2::new(sx, sy),
            Self::Center => Vec2::new(1.0, 1.0),
        }
    }

    /// Maps `source` into `target`; see [`fit_rect`].
    #[must_use]
    pub fn apply(self, source: Rect, target: Rect) -> Rect {
        fit_rect(source, target, self)
    }
}

/// Maps `source` into `target` under `policy`.
///
/// The result has the source size scaled by [`FitPolicy::scales`] and is
/// centered within the target. When the two rectangles are equal, when the
/// target is [`Rect::ZERO`], or when the source has no area, `source` is
/// returned unchanged.
///
/// Both rectangles are standardized before fitting, but the equality check
/// runs on them as given. A flipped copy of the target is therefore fitted
/// like any other source and comes back standardized.
#[must_use]
pub fn fit_rect(source: Rect, target: Rect, policy: FitPolicy) -> Rect {
    if is_degenerate(source, target) {
        return source;
    }
    let scales = policy.scales(source, target);
    let source = source.abs();
    let target = target.abs();
    let size = Size::new(source.width() * scales.x, source.height() * scales.y);
    let x0 = target.min_x() + (target.width() - size.width) / 2.0;
    let y0 = target.min_y() + (target.height() - size.height) / 2.0;
    Rect::from_origin_size((x0, y0), size)
}

/// Returns the affine that draws content authored in `source` into the fitted rectangle.
///
/// This is the transform pushed before drawing: translate to the fitted
/// origin, then scale by the fitted-to-source size ratio. Degenerate inputs
/// give the identity.
#[must_use]
pub fn fit_transform(source: Rect, target: Rect, policy: FitPolicy) -> Affine {
    if is_degenerate(source, target) {
        return Affine::IDENTITY;
    }
    let source = source.abs();
    let fitted = fit_rect(source, target, policy);
    Affine::translate(fitted.origin().to_vec2())
        * Affine::scale_non_uniform(
            fitted.width() / source.width(),
            fitted.height() / source.height(),
        )
        * Affine::translate(-source.origin().to_vec2())
}

fn is_degenerate(source: Rect, target: Rect) -> bool {
    source == target
        || target == Rect::ZERO
        || source.width() == 0.0
        || source.height() == 0.0
}
