// src/geometry.rs
use crate::config::{ARC_END_DEG, ARC_START_DEG};

// Proportions of the icon edge length
const MIC_HEIGHT: f64 = 0.25;
const MIC_WIDTH: f64 = 0.15;
const MIC_LIFT: f64 = 0.1;
const STROKE: f64 = 0.02;
const MIN_STROKE: i64 = 2;
const STAND_DROP: f64 = 0.15;
const ARC_SCALE: f64 = 1.5;
const ARROW_DROP: f64 = 0.25;
const ARROW_LENGTH: f64 = 0.1;
const ARROW_HEAD: f64 = 0.03;
const LEFT_ARROW_OFFSET: f64 = 0.25;
const RIGHT_ARROW_OFFSET: f64 = 0.15;

/// Truncating scale, `int(size * k)`
#[inline(always)]
fn scaled(size: u32, k: f64) -> i64 {
    (size as f64 * k) as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: (i64, i64),
    pub to: (i64, i64),
}

impl Segment {
    pub fn new(from: (i64, i64), to: (i64, i64)) -> Self {
        Segment { from, to }
    }
}

/// Filled rectangle with circular corners, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub radius: i64,
}

/// Circular arc; angles in degrees, clockwise from 3 o'clock (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: (i64, i64),
    pub radius: i64,
    pub start_deg: f64,
    pub end_deg: f64,
}

/// Shape parameters of the microphone icon for one edge length
#[derive(Debug, Clone, PartialEq)]
pub struct IconGeometry {
    pub size: u32,
    pub stroke: i64,
    pub capsule: RoundedRect,
    pub stand: Segment,
    pub base: Segment,
    pub arc: Arc,
    pub arrows: [Segment; 6],
}

impl IconGeometry {
    pub fn new(size: u32) -> Self {
        let center = (size / 2) as i64;
        let mic_height = scaled(size, MIC_HEIGHT);
        let mic_width = scaled(size, MIC_WIDTH);
        let lift = scaled(size, MIC_LIFT);
        let stroke = MIN_STROKE.max(scaled(size, STROKE));

        let capsule = RoundedRect {
            left: center - mic_width / 2,
            top: center - mic_height - lift,
            right: center + mic_width / 2,
            bottom: center - lift,
            radius: mic_width / 2,
        };

        let stand_bottom = center + scaled(size, STAND_DROP);
        let stand = Segment::new((center, capsule.bottom), (center, stand_bottom));
        let base = Segment::new(
            (center - mic_width, stand_bottom),
            (center + mic_width, stand_bottom),
        );

        let arc = Arc {
            center: (center, capsule.bottom),
            radius: scaled(mic_width as u32, ARC_SCALE),
            start_deg: ARC_START_DEG,
            end_deg: ARC_END_DEG,
        };

        let arrow_y = center + scaled(size, ARROW_DROP);
        let length = scaled(size, ARROW_LENGTH);
        let head = scaled(size, ARROW_HEAD);

        let left_tip = center - scaled(size, LEFT_ARROW_OFFSET);
        let right_tail = center + scaled(size, RIGHT_ARROW_OFFSET);
        let [l0, l1, l2] = arrow(left_tip + length, left_tip, arrow_y, head);
        let [r0, r1, r2] = arrow(right_tail, right_tail + length, arrow_y, head);

        IconGeometry {
            size,
            stroke,
            capsule,
            stand,
            base,
            arc,
            arrows: [l0, l1, l2, r0, r1, r2],
        }
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of everything drawn,
    /// strokes widened by half the stroke width. The arc counts as its full circle.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half = self.stroke as f64 / 2.0;
        let c = &self.capsule;
        let mut min_x = c.left as f64;
        let mut min_y = c.top as f64;
        let mut max_x = c.right as f64;
        let mut max_y = c.bottom as f64;

        let (ax, ay) = self.arc.center;
        let r = self.arc.radius;
        min_x = min_x.min((ax - r) as f64);
        min_y = min_y.min((ay - r) as f64);
        max_x = max_x.max((ax + r) as f64);
        max_y = max_y.max((ay + r) as f64);

        let strokes = [self.stand, self.base].into_iter().chain(self.arrows);
        for seg in strokes {
            for (x, y) in [seg.from, seg.to] {
                min_x = min_x.min(x as f64 - half);
                min_y = min_y.min(y as f64 - half);
                max_x = max_x.max(x as f64 + half);
                max_y = max_y.max(y as f64 + half);
            }
        }

        (min_x, min_y, max_x, max_y)
    }
}

/// Shaft from `tail` to `tip` plus two 45° barbs folding back from the tip
fn arrow(tail: i64, tip: i64, y: i64, head: i64) -> [Segment; 3] {
    let back = tip + (tail - tip).signum() * head;
    [
        Segment::new((tail, y), (tip, y)),
        Segment::new((tip, y), (back, y - head)),
        Segment::new((tip, y), (back, y + head)),
    ]
}
