//! Where the badge goes on a monitor.

use crate::render::geometry::{PointI, RectI};

/// Top-left corner for a badge `width` pixels wide on a monitor whose work
/// area is `work_area`: centered horizontally, top edge `bottom_offset`
/// pixels above the work-area bottom.
pub fn badge_origin(work_area: RectI, width: i32, bottom_offset: i32) -> PointI {
    PointI {
        x: work_area.left + (work_area.width() - width) / 2,
        y: work_area.bottom - bottom_offset,
    }
}
