// src/utils.rs
use crate::geometry::{Arc, RoundedRect, Segment};
use ndarray::{Array1, Array2, Zip};

/// Create a meshgrid from x and y arrays, similar to numpy's meshgrid
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let nx = x.len();
    let ny = y.len();

    let mut x_grid = Array2::zeros((ny, nx));
    for i in 0..ny {
        x_grid.row_mut(i).assign(x);
    }

    let mut y_grid = Array2::zeros((ny, nx));
    for j in 0..nx {
        y_grid.column_mut(j).assign(y);
    }

    (x_grid, y_grid)
}

/// Pixel coordinate grids of a square canvas, indexed `[[row, col]]`
pub fn pixel_grid(size: u32) -> (Array2<f64>, Array2<f64>) {
    let coords: Array1<f64> = Array1::range(0.0, size as f64, 1.0);
    meshgrid(&coords, &coords)
}

/// Truncating linear interpolation of one colour channel
#[inline(always)]
pub fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    (start as f64 + (end as f64 - start as f64) * ratio) as u8
}

/// Row colours of a vertical gradient; row `y` sits at ratio `y / size`
pub fn gradient_rows(size: u32, start: [u8; 3], end: [u8; 3]) -> Vec<[u8; 3]> {
    (0..size)
        .map(|y| {
            let ratio = y as f64 / size as f64;
            [
                lerp_channel(start[0], end[0], ratio),
                lerp_channel(start[1], end[1], ratio),
                lerp_channel(start[2], end[2], ratio),
            ]
        })
        .collect()
}

/// Filled rounded rectangle
pub fn rounded_rect_mask(x: &Array2<f64>, y: &Array2<f64>, rect: &RoundedRect) -> Array2<bool> {
    let left = rect.left as f64;
    let top = rect.top as f64;
    let right = rect.right as f64;
    let bottom = rect.bottom as f64;
    let radius = rect.radius as f64;

    // corner circle centres; they may meet when the radius spans the whole side
    let inner_left = left + radius;
    let inner_right = (right - radius).max(inner_left);
    let inner_top = top + radius;
    let inner_bottom = (bottom - radius).max(inner_top);

    let mut mask = Array2::from_elem(x.dim(), false);
    Zip::from(&mut mask)
        .and(x)
        .and(y)
        .par_for_each(|out, &x_val, &y_val| {
            if x_val < left || x_val > right || y_val < top || y_val > bottom {
                return;
            }
            let dx = x_val - x_val.clamp(inner_left, inner_right);
            let dy = y_val - y_val.clamp(inner_top, inner_bottom);
            *out = dx * dx + dy * dy <= radius * radius;
        });

    mask
}

/// Straight stroke of the given width with flat ends at both endpoints
pub fn segment_mask(x: &Array2<f64>, y: &Array2<f64>, seg: &Segment, width: f64) -> Array2<bool> {
    let (ax, ay) = (seg.from.0 as f64, seg.from.1 as f64);
    let (dx, dy) = (seg.to.0 as f64 - ax, seg.to.1 as f64 - ay);
    let length = dx.hypot(dy);
    let half = width / 2.0;

    let mut mask = Array2::from_elem(x.dim(), false);
    Zip::from(&mut mask)
        .and(x)
        .and(y)
        .par_for_each(|out, &x_val, &y_val| {
            let rx = x_val - ax;
            let ry = y_val - ay;
            *out = if length == 0.0 {
                (-half..half).contains(&rx) && (-half..half).contains(&ry)
            } else {
                let along = (rx * dx + ry * dy) / length;
                let across = (dx * ry - dy * rx) / length;
                (0.0..=length).contains(&along) && (-half..half).contains(&across)
            };
        });

    mask
}

/// Ring segment of the arc's circle, `width` pixels thick growing inward
pub fn arc_mask(x: &Array2<f64>, y: &Array2<f64>, arc: &Arc, width: f64) -> Array2<bool> {
    let (cx, cy) = (arc.center.0 as f64, arc.center.1 as f64);
    let outer = arc.radius as f64;
    let inner = outer - width;

    let mut mask = Array2::from_elem(x.dim(), false);
    Zip::from(&mut mask)
        .and(x)
        .and(y)
        .par_for_each(|out, &x_val, &y_val| {
            let dx = x_val - cx;
            let dy = y_val - cy;
            let dist = dx.hypot(dy);
            if dist > outer || dist <= inner {
                return;
            }
            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            *out = (arc.start_deg..=arc.end_deg).contains(&angle);
        });

    mask
}

/// OR `other` into `mask`
pub fn merge_mask(mask: &mut Array2<bool>, other: &Array2<bool>) {
    Zip::from(mask).and(other).for_each(|out, &hit| *out |= hit);
}
