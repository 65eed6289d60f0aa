//! Hover probing: nearest sample and event hit-testing

use crate::model::{Datum, Event};

use super::viewport::{ChartGeometry, ZoomTransform};

/// Sample closest in x to `x`. The series must be sorted by x; on a tie the
/// earlier sample wins.
pub fn nearest_datum(data: &[Datum], x: f64) -> Option<Datum> {
    let index = data.partition_point(|d| (d.x as f64) < x);
    let before = index.checked_sub(1).and_then(|i| data.get(i));
    let after = data.get(index);

    match (before, after) {
        (Some(b), Some(a)) => {
            if (a.x as f64 - x).abs() < (b.x as f64 - x).abs() {
                Some(*a)
            } else {
                Some(*b)
            }
        }
        (Some(only), None) | (None, Some(only)) => Some(*only),
        (None, None) => None,
    }
}

/// First event (in the given order) whose marker lies within `tolerance`
/// device units of `device_x`
pub fn hit_event<'a>(
    events: &[&'a Event],
    geometry: &ChartGeometry,
    transform: &ZoomTransform,
    device_x: f64,
    tolerance: f64,
) -> Option<&'a Event> {
    events
        .iter()
        .find(|event| (geometry.device_x(transform, event.time()) - device_x).abs() < tolerance)
        .copied()
}
