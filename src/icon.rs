// src/icon.rs
use crate::config::{FOREGROUND, GRADIENT_END, GRADIENT_START};
use crate::error::IconError;
use crate::geometry::IconGeometry;
use crate::utils::*;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageBuffer, ImageEncoder, Rgb, RgbImage};
use log::{debug, info};
use ndarray::Array2;
use std::fs;
use std::path::Path;

/// Union of every white shape: capsule, stand, base, grille arc and both arrows
pub fn foreground_mask(geometry: &IconGeometry) -> Array2<bool> {
    let (x_grid, y_grid) = pixel_grid(geometry.size);
    let width = geometry.stroke as f64;

    let mut mask = rounded_rect_mask(&x_grid, &y_grid, &geometry.capsule);
    merge_mask(&mut mask, &segment_mask(&x_grid, &y_grid, &geometry.stand, width));
    merge_mask(&mut mask, &segment_mask(&x_grid, &y_grid, &geometry.base, width));
    merge_mask(&mut mask, &arc_mask(&x_grid, &y_grid, &geometry.arc, width));
    for seg in &geometry.arrows {
        merge_mask(&mut mask, &segment_mask(&x_grid, &y_grid, seg, width));
    }

    mask
}

/// Paint the icon onto a fresh `size`×`size` canvas
pub fn render_icon(size: u32) -> Result<RgbImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let geometry = IconGeometry::new(size);
    debug!(
        "{}px geometry: {:?}, bounds {:?}",
        size,
        geometry,
        geometry.bounds()
    );

    let rows = gradient_rows(size, GRADIENT_START, GRADIENT_END);
    let foreground = foreground_mask(&geometry);

    let mut img = ImageBuffer::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if foreground[[y as usize, x as usize]] {
            Rgb(FOREGROUND)
        } else {
            Rgb(rows[y as usize])
        };
    }
    Ok(img)
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .map_err(IconError::Encode)?;
    Ok(bytes)
}

/// Render the icon at `size` and write it to `path` as PNG
pub fn create_icon(size: u32, path: impl AsRef<Path>) -> Result<(), IconError> {
    let path = path.as_ref();
    let img = render_icon(size)?;
    let bytes = encode_png(&img)?;

    fs::write(path, &bytes).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} bytes to {}", bytes.len(), path.display());

    println!("✓ Created {} ({}x{})", path.display(), size, size);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::ImageFormat;
    use std::path::PathBuf;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("voice_icons_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_dimensions() {
        for size in [1, 2, 15, 16, 33, 192] {
            let img = render_icon(size).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(render_icon(0), Err(IconError::InvalidSize(0))));
    }

    #[test]
    fn test_size_one_does_not_panic() {
        let img = render_icon(1).unwrap();
        let bytes = encode_png(&img).unwrap();
        assert_eq!(bytes[..8], PNG_MAGIC);
    }

    #[test]
    fn test_gradient_endpoints() {
        let size = 192;
        let img = render_icon(size).unwrap();

        for x in 0..size {
            assert_eq!(img.get_pixel(x, 0).0, GRADIENT_START);
        }

        for x in 0..size {
            let pixel = img.get_pixel(x, size - 1).0;
            for c in 0..3 {
                assert_relative_eq!(pixel[c] as f64, GRADIENT_END[c] as f64, epsilon = 1.0);
            }
        }
    }

    #[test]
    fn test_gradient_monotonic_down_left_edge() {
        let size = 512;
        let img = render_icon(size).unwrap();

        for y in 1..size {
            let above = img.get_pixel(0, y - 1).0;
            let here = img.get_pixel(0, y).0;
            assert!(here[0] >= above[0], "red drops at row {}", y);
            assert!(here[1] <= above[1], "green rises at row {}", y);
            assert!(here[2] <= above[2], "blue rises at row {}", y);
        }
    }

    #[test]
    fn test_foreground_is_pure_white() {
        for size in [16, 64, 192] {
            let img = render_icon(size).unwrap();
            let rows = gradient_rows(size, GRADIENT_START, GRADIENT_END);

            let mut white = 0;
            for (_, y, pixel) in img.enumerate_pixels() {
                if pixel.0 == FOREGROUND {
                    white += 1;
                } else {
                    assert_eq!(pixel.0, rows[y as usize], "stray colour in row {}", y);
                }
            }
            assert!(white > 0, "size {} drew nothing", size);
        }
    }

    #[test]
    fn test_shapes_are_drawn() {
        let size = 192;
        let g = IconGeometry::new(size);
        let img = render_icon(size).unwrap();
        let white = |x: i64, y: i64| img.get_pixel(x as u32, y as u32).0 == FOREGROUND;

        let c = g.capsule;
        assert!(white((c.left + c.right) / 2, (c.top + c.bottom) / 2));
        assert!(white(g.stand.from.0, 100));
        assert!(white(g.base.from.0, g.base.from.1));
        // apex of the grille arc, just inside its radius
        assert!(white(g.arc.center.0, g.arc.center.1 - g.arc.radius + 1));
        assert!(white(g.arrows[0].to.0, g.arrows[0].to.1));
        assert!(white(g.arrows[3].to.0, g.arrows[3].to.1));

        // corners stay background
        assert!(!white(0, 0));
        assert!(!white(size as i64 - 1, size as i64 - 1));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = encode_png(&render_icon(192).unwrap()).unwrap();
        let second = encode_png(&render_icon(192).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_create_icon_192() {
        let path = temp_path("icon-192.png");
        create_icon(192, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes[..8], PNG_MAGIC);
        assert_eq!(image::image_dimensions(&path).unwrap(), (192, 192));

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded, render_icon(192).unwrap());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_create_icon_512() {
        let path = temp_path("icon-512.png");
        create_icon(512, &path).unwrap();

        assert!(path.exists());
        assert_eq!(image::image_dimensions(&path).unwrap(), (512, 512));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_create_icon_unwritable_path() {
        let path = temp_path("missing-dir").join("icon.png");

        let err = create_icon(32, &path).unwrap_err();
        match err {
            IconError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {}", other),
        }
    }
}
