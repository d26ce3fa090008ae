use crate::color::Color;
use crate::data::{Image, ImageSize, BYTES_PER_PIXEL};
use crate::pixels::{PixelRect, CANVAS_SIZE};


/// Unfilled cells and the canvas outside every rect are opaque white.
pub const BACKGROUND: [u8; BYTES_PER_PIXEL] = [0xff, 0xff, 0xff, 0xff];

/// Fills each rect's half-open pixel range with the given color on a
/// fresh 250x250 canvas. Rects come from the index mapping and never
/// overlap, so fill order does not matter.
pub fn draw(color: Color, rects: &[PixelRect]) -> Image {
    let size = ImageSize::square(CANVAS_SIZE);
    let mut pixels = BACKGROUND.repeat(size.area());

    let fill = color.rgba();
    for rect in rects {
        fill_rect(&mut pixels, size, rect, &fill);
    }

    Image::builder()
        .with_size(size)
        .with_pixels_row_major(pixels)
        .build()
}

fn fill_rect(pixels: &mut [u8], size: ImageSize, rect: &PixelRect, fill: &[u8; BYTES_PER_PIXEL]) {
    for y in rect.top_left.y..rect.bottom_right.y {
        for x in rect.top_left.x..rect.bottom_right.x {
            let offset = ((y * size.width + x) as usize) * BYTES_PER_PIXEL;
            pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(fill);
        }
    }
}
