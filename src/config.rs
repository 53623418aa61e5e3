// src/config.rs

/// Top of the background gradient (#667eea)
pub const GRADIENT_START: [u8; 3] = [102, 126, 234];

/// Bottom of the background gradient (#764ba2)
pub const GRADIENT_END: [u8; 3] = [118, 75, 162];

pub const FOREGROUND: [u8; 3] = [255, 255, 255];

/// Grille arc span in degrees, clockwise from 3 o'clock
pub const ARC_START_DEG: f64 = 200.0;
pub const ARC_END_DEG: f64 = 340.0;

/// One icon to produce: edge length in pixels and output file name
#[derive(Debug, Clone, Copy)]
pub struct IconTarget {
    pub size: u32,
    pub filename: &'static str,
}

pub const ICON_TARGETS: [IconTarget; 2] = [
    IconTarget {
        size: 192,
        filename: "icon-192.png",
    },
    IconTarget {
        size: 512,
        filename: "icon-512.png",
    },
];
