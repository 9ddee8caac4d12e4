use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::accessors::bisect_time_left;
use crate::core::{DataPoint, Margin, TimeScale, ValueScale};

/// Tooltip anchor resolved from a pointer position.
///
/// `x_px` is the raw pointer x (including the left margin); `y_px` is the
/// anchor value mapped through the value scale, relative to the plot top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub anchor: DataPoint,
    pub x_px: f64,
    pub y_px: f64,
}

/// Finds the sample nearest in time to a pointer x position.
///
/// `data` must be sorted ascending by time. The pointer must lie inside
/// `[margin.left, margin.left + plot_width]`, otherwise `None` is returned.
/// Between the two samples bracketing the inverted time, the closer one
/// wins; an exact tie resolves to the later sample.
#[must_use]
pub fn locate(
    data: &[DataPoint],
    pointer_x: f64,
    x_scale: TimeScale,
    margin: Margin,
) -> Option<DataPoint> {
    if !pointer_x.is_finite() {
        return None;
    }
    let plot_right = margin.left + x_scale.width_px();
    if pointer_x < margin.left || pointer_x > plot_right {
        return None;
    }

    let target = x_scale.pixel_to_time(pointer_x - margin.left).ok()?;
    let index = bisect_time_left(data, target);

    let mut bracket: SmallVec<[DataPoint; 2]> = SmallVec::new();
    if let Some(prev) = index.checked_sub(1).and_then(|i| data.get(i)) {
        bracket.push(*prev);
    }
    if let Some(next) = data.get(index) {
        bracket.push(*next);
    }

    match bracket.as_slice() {
        [] => None,
        [only] => Some(*only),
        [prev, next, ..] => {
            let to_prev = target - prev.time;
            let to_next = next.time - target;
            Some(if to_prev >= to_next { *next } else { *prev })
        }
    }
}

/// Resolves the tooltip for a pointer position, mapping the anchor value
/// through `y_scale`.
#[must_use]
pub fn locate_tooltip(
    data: &[DataPoint],
    pointer_x: f64,
    x_scale: TimeScale,
    y_scale: ValueScale,
    margin: Margin,
) -> Option<TooltipState> {
    let anchor = locate(data, pointer_x, x_scale, margin)?;
    let y_px = y_scale.value_to_pixel(anchor.value).ok()?;
    Some(TooltipState {
        anchor,
        x_px: pointer_x,
        y_px,
    })
}
