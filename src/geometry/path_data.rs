use crate::foundation::core::{BezPath, PathEl, Point};
use crate::foundation::math::fmt_fixed2;

/// Serialize a path as SVG `d` data with two-decimal coordinates.
///
/// Output shape: `M x,y C x,y x,y x,y ... Z`, one space between commands.
pub fn path_data(path: &BezPath) -> String {
    fn pt(p: Point) -> String {
        format!("{},{}", fmt_fixed2(p.x), fmt_fixed2(p.y))
    }

    let mut parts = Vec::with_capacity(path.elements().len());
    for el in path.elements() {
        parts.push(match *el {
            PathEl::MoveTo(p) => format!("M{}", pt(p)),
            PathEl::LineTo(p) => format!("L{}", pt(p)),
            PathEl::QuadTo(p1, p2) => format!("Q{} {}", pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => format!("C{} {} {}", pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => "Z".to_owned(),
        });
    }
    parts.join(" ")
}
