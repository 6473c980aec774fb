//! Owned ARGB32 pixel buffers used for zoom captures.
//!
//! The layout matches cairo's `Format::ARgb32`: one native-endian `u32` per
//! pixel holding premultiplied alpha, red, green and blue.

use super::Color;
use crate::util::PixelRect;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl Image {
    /// Zero-sized image, used when a capture fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fully transparent image of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let stride = width * BYTES_PER_PIXEL as i32;
        Self {
            width,
            height,
            stride,
            data: vec![0; (stride * height) as usize],
        }
    }

    /// Wraps raw ARGB32 rows. Returns `None` when the buffer is too small.
    pub fn from_argb32(width: i32, height: i32, stride: i32, data: Vec<u8>) -> Option<Self> {
        if width < 0 || height < 0 || stride < width * BYTES_PER_PIXEL as i32 {
            return None;
        }
        if data.len() < (stride as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Image where every pixel has the given color.
    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let mut image = Self::new(width, height);
        let pixel = pack_argb(color).to_ne_bytes();
        for chunk in image.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel);
        }
        image
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Packed premultiplied ARGB value at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride as usize + x as usize * BYTES_PER_PIXEL;
        let bytes: [u8; 4] = self.data[offset..offset + BYTES_PER_PIXEL].try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    /// Copies `rect` out of this image.
    ///
    /// The result always has the rect's size; parts outside the source stay
    /// transparent so a capture near the screen edge keeps the cursor centred.
    pub fn crop(&self, rect: PixelRect) -> Image {
        let mut out = Image::new(rect.width, rect.height);

        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = (rect.x + rect.width).min(self.width);
        let y1 = (rect.y + rect.height).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return out;
        }

        let row_bytes = (x1 - x0) as usize * BYTES_PER_PIXEL;
        for y in y0..y1 {
            let src = y as usize * self.stride as usize + x0 as usize * BYTES_PER_PIXEL;
            let dst = (y - rect.y) as usize * out.stride as usize
                + (x0 - rect.x) as usize * BYTES_PER_PIXEL;
            out.data[dst..dst + row_bytes].copy_from_slice(&self.data[src..src + row_bytes]);
        }
        out
    }
}

/// Packs a color into cairo's premultiplied ARGB32 pixel value.
pub fn pack_argb(color: Color) -> u32 {
    let a = color.a.clamp(0.0, 1.0);
    let channel = |v: f64| ((v.clamp(0.0, 1.0) * a * 255.0).round() as u32) & 0xFF;
    let alpha = (a * 255.0).round() as u32;
    (alpha << 24) | (channel(color.r) << 16) | (channel(color.g) << 8) | channel(color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn filled_image_reports_packed_pixels() {
        let image = Image::filled(3, 2, RED);
        assert_eq!(image.pixel(0, 0), Some(0xFFFF0000));
        assert_eq!(image.pixel(2, 1), Some(0xFFFF0000));
        assert_eq!(image.pixel(3, 0), None);
    }

    #[test]
    fn crop_inside_copies_pixels() {
        let mut image = Image::filled(4, 4, RED);
        let blue = Image::filled(1, 1, BLUE);
        let offset = 2 * image.stride as usize + 2 * BYTES_PER_PIXEL;
        image.data[offset..offset + 4].copy_from_slice(blue.data());

        let cropped = image.crop(PixelRect::new(1, 1, 2, 2).unwrap());
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.pixel(0, 0), Some(0xFFFF0000));
        assert_eq!(cropped.pixel(1, 1), Some(0xFF0000FF));
    }

    #[test]
    fn crop_past_edge_pads_with_transparency() {
        let image = Image::filled(4, 4, RED);
        let cropped = image.crop(PixelRect::new(-2, -2, 4, 4).unwrap());
        assert_eq!(cropped.width(), 4);
        assert_eq!(cropped.height(), 4);
        assert_eq!(cropped.pixel(0, 0), Some(0));
        assert_eq!(cropped.pixel(3, 3), Some(0xFFFF0000));

        let outside = image.crop(PixelRect::new(10, 10, 2, 2).unwrap());
        assert_eq!(outside.pixel(1, 1), Some(0));
    }

    #[test]
    fn from_argb32_rejects_short_buffers() {
        assert!(Image::from_argb32(2, 2, 8, vec![0; 15]).is_none());
        assert!(Image::from_argb32(2, 2, 4, vec![0; 16]).is_none());
        assert!(Image::from_argb32(2, 2, 8, vec![0; 16]).is_some());
        assert!(Image::empty().is_empty());
    }
}
