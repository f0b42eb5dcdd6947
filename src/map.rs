//! The decoded environment map and its row orientation policy.


/// Which scanline the first row of the pixel buffer represents.
///
/// OpenEXR stores scanlines top to bottom. Graphics APIs in the OpenGL
/// family treat row zero of a texture upload as the bottom of the image,
/// so uploading the stored order directly would display the map upside
/// down. Pick the origin matching your presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {

    /// Row zero of the buffer is the bottom scanline of the image
    /// (the OpenGL texture upload convention). The image is flipped
    /// vertically while decoding.
    BottomLeft,

    /// Row zero of the buffer is the top scanline,
    /// exactly as stored in the file.
    TopLeft,
}


/// An HDR environment map, decoded into a single contiguous buffer of
/// 32-bit floats, three per pixel, interleaved as `R, G, B, R, G, B, ...`
/// in row-major order.
///
/// The buffer always contains exactly `width * height * 3` values and is
/// immutable after construction. Values are unmodified HDR intensities
/// and may exceed `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentMap {
    width: usize,
    height: usize,
    pixels: Vec<f32>,
}

impl EnvironmentMap {

    pub(crate) fn new(width: usize, height: usize, pixels: Vec<f32>) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 3);
        EnvironmentMap { width, height, pixels }
    }

    /// Horizontal resolution in pixels. Always at least one.
    pub fn width(&self) -> usize { self.width }

    /// Vertical resolution in pixels. Always at least one.
    pub fn height(&self) -> usize { self.height }

    /// The interleaved RGB samples, `width * height * 3` floats,
    /// ready for direct upload as an RGB f32 texture.
    pub fn pixels(&self) -> &[f32] { &self.pixels }

    /// Consume the map, keeping only the pixel buffer.
    pub fn into_pixels(self) -> Vec<f32> { self.pixels }

    /// The `width * 3` samples of one row.
    ///
    /// # Panics
    /// If `y` is not less than the height.
    pub fn row(&self, y: usize) -> &[f32] {
        let samples_per_row = self.width * 3;
        &self.pixels[y * samples_per_row .. (y + 1) * samples_per_row]
    }

    /// The three samples of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// If the position is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        assert!(x < self.width, "x position out of bounds");
        let index = (y * self.width + x) * 3;
        [self.pixels[index], self.pixels[index + 1], self.pixels[index + 2]]
    }
}
