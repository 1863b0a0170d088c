use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{DataPoint, TrendField};
use crate::interaction::PointerSnap;

use super::ChartLayout;

/// Resolves the point nearest to `pointer_x` by horizontal pixel distance.
///
/// Brute force over the series; on equal distance the earlier point wins.
/// Returns `None` for an empty series or a non-finite pointer.
pub(crate) fn resolve_snap(
    data: &[DataPoint],
    layout: &ChartLayout,
    pointer_x: f64,
) -> Option<PointerSnap> {
    if !pointer_x.is_finite() {
        return None;
    }

    let (distance, index, x_px) = (0..data.len())
        .filter_map(|index| {
            let x_px = layout.x.position(index)?;
            Some((OrderedFloat((x_px - pointer_x).abs()), index, x_px))
        })
        .min_by_key(|(distance, index, _)| (*distance, *index))?;

    let y_px = TrendField::Raw
        .value(&data[index])
        .and_then(|value| layout.y.domain_to_pixel(value).ok());

    trace!(pointer_x, index, x_px, distance = distance.0, "resolved nearest point");
    Some(PointerSnap {
        index,
        x: x_px,
        y: y_px,
        distance: distance.0,
    })
}
