//! Plain geometry types and the badge background outline.

/// A point in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

/// A screen rectangle, right/bottom exclusive (Win32 `RECT` layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectI {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A quarter-circle corner, swept clockwise from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerArc {
    pub from: PointF,
    pub to: PointF,
    pub radius: f32,
}

/// Closed outline of a rounded rectangle anchored at the origin.
///
/// The figure starts at `start`, and for each corner in clockwise order
/// (top-left, top-right, bottom-right, bottom-left) draws a line to the arc
/// start followed by the arc. Closing the figure draws the final left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectPath {
    pub start: PointF,
    pub corners: [CornerArc; 4],
}

impl RoundedRectPath {
    /// Outline for a `width` x `height` rectangle. The radius is clamped so
    /// opposite corners never overlap.
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        let r = radius.max(0.0).min(width / 2.0).min(height / 2.0);
        let (w, h) = (width, height);
        let corner = |fx, fy, tx, ty| CornerArc {
            from: PointF::new(fx, fy),
            to: PointF::new(tx, ty),
            radius: r,
        };
        Self {
            start: PointF::new(0.0, r),
            corners: [
                corner(0.0, r, r, 0.0),
                corner(w - r, 0.0, w, r),
                corner(w, h - r, w - r, h),
                corner(r, h, 0.0, h - r),
            ],
        }
    }

    pub fn radius(&self) -> f32 {
        self.corners[0].radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_connect_clockwise() {
        let path = RoundedRectPath::new(175.0, 60.0, 20.0);
        assert_eq!(path.start, PointF::new(0.0, 20.0));
        assert_eq!(path.corners[0].from, path.start);
        assert_eq!(path.corners[0].to, PointF::new(20.0, 0.0));
        assert_eq!(path.corners[1].from, PointF::new(155.0, 0.0));
        assert_eq!(path.corners[1].to, PointF::new(175.0, 20.0));
        assert_eq!(path.corners[2].from, PointF::new(175.0, 40.0));
        assert_eq!(path.corners[2].to, PointF::new(155.0, 60.0));
        assert_eq!(path.corners[3].from, PointF::new(20.0, 60.0));
        assert_eq!(path.corners[3].to, PointF::new(0.0, 40.0));
    }

    #[test]
    fn radius_clamped_to_half_the_short_side() {
        let path = RoundedRectPath::new(175.0, 60.0, 50.0);
        assert_eq!(path.radius(), 30.0);
        let path = RoundedRectPath::new(175.0, 60.0, -4.0);
        assert_eq!(path.radius(), 0.0);
    }

    #[test]
    fn rect_size() {
        let rect = RectI::new(-1280, 100, 0, 1124);
        assert_eq!(rect.width(), 1280);
        assert_eq!(rect.height(), 1024);
    }
}
