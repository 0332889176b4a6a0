//! Planar point helpers shared by the solver and the chain evaluator.

/// Euclidean distance between two points.
pub fn distance([x1, y1]: [f64; 2], [x2, y2]: [f64; 2]) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Place a point on the circle `(center, r)` at angle `a`.
pub fn on_circle([cx, cy]: [f64; 2], r: f64, a: f64) -> [f64; 2] {
    [cx + r * a.cos(), cy + r * a.sin()]
}

/// Extend the rod `from -> through` past `through` by `ratio` of its length.
pub fn extend(from: [f64; 2], through: [f64; 2], ratio: f64) -> [f64; 2] {
    let [x1, y1] = from;
    let [x2, y2] = through;
    [x2 + ratio * (x2 - x1), y2 + ratio * (y2 - y1)]
}

/// Rotate `p` about `center` by `angle` radians.
pub fn rotate_about([x, y]: [f64; 2], [cx, cy]: [f64; 2], angle: f64) -> [f64; 2] {
    let (s, c) = angle.sin_cos();
    let (dx, dy) = (x - cx, y - cy);
    [cx + dx * c - dy * s, cy + dx * s + dy * c]
}
