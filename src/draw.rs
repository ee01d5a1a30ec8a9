//! Drawing primitives over a packed RGB8 frame buffer. Everything here
//! clips to the buffer bounds, so callers can draw with unclamped
//! coordinates.

use image::{ImageBuffer, Rgb};

pub type Color = (u8, u8, u8);

pub fn put_pixel(buffer: &mut [u8], width: usize, height: usize, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = (y as usize * width + x as usize) * 3;
    if idx + 2 < buffer.len() {
        buffer[idx] = color.0;
        buffer[idx + 1] = color.1;
        buffer[idx + 2] = color.2;
    }
}

/// Square dot of `size` pixels centered on (x, y).
pub fn draw_dot(buffer: &mut [u8], width: usize, height: usize, x: i32, y: i32, size: i32, color: Color) {
    let half = size / 2;
    for dy in -half..=half {
        for dx in -half..=half {
            put_pixel(buffer, width, height, x + dx, y + dy, color);
        }
    }
}

/// Parametric line, fine-grained enough for full-frame spans.
pub fn draw_line(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Color,
) {
    let mut t = 0.0;
    while t <= 1.0 {
        let px = x0 + (x1 - x0) * t;
        let py = y0 + (y1 - y0) * t;
        put_pixel(buffer, width, height, px as i32, py as i32, color);
        t += 0.002;
    }
}

pub fn fill_rect(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
) {
    for dy in 0..h {
        for dx in 0..w {
            put_pixel(buffer, width, height, x + dx, y + dy, color);
        }
    }
}

pub fn fill(buffer: &mut [u8], color: Color) {
    for chunk in buffer.chunks_exact_mut(3) {
        chunk[0] = color.0;
        chunk[1] = color.1;
        chunk[2] = color.2;
    }
}

/// Copy an RGB image into the buffer with its top-left corner at (x, y).
pub fn blit_image(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    img: &ImageBuffer<Rgb<u8>, Vec<u8>>,
) {
    for (px, py, pixel) in img.enumerate_pixels() {
        put_pixel(
            buffer,
            width,
            height,
            x + px as i32,
            y + py as i32,
            (pixel[0], pixel[1], pixel[2]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_drawing_is_safe() {
        let mut buffer = vec![0u8; 10 * 10 * 3];
        put_pixel(&mut buffer, 10, 10, -5, 3, (255, 0, 0));
        put_pixel(&mut buffer, 10, 10, 3, 50, (255, 0, 0));
        draw_line(&mut buffer, 10, 10, -20.0, -20.0, 40.0, 40.0, (255, 0, 0));
        fill_rect(&mut buffer, 10, 10, 8, 8, 10, 10, (255, 0, 0));
        // Nothing to assert beyond "did not panic"; spot-check one pixel
        // that the diagonal line must have hit.
        assert_eq!(buffer[(5 * 10 + 5) * 3], 255);
    }

    #[test]
    fn fill_rect_paints_the_region() {
        let mut buffer = vec![0u8; 10 * 10 * 3];
        fill_rect(&mut buffer, 10, 10, 2, 2, 3, 3, (1, 2, 3));
        let idx = (3 * 10 + 3) * 3;
        assert_eq!(&buffer[idx..idx + 3], &[1, 2, 3]);
        // Outside the rect stays black.
        assert_eq!(buffer[0], 0);
    }
}
