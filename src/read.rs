//! Read an environment map from an OpenEXR file.
//!
//! The file is opened exactly once. The handle is moved into the decoder's
//! buffered reader and closed by drop on every path out of the load,
//! successful or not. Loading is synchronous and blocking, has no side
//! effects beyond the read, and keeps no global state: the same file
//! contents always decode to the same buffer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exr::prelude::*;

use crate::error::{Error, Result};
use crate::map::{EnvironmentMap, RowOrigin};


/// The channels an environment map must carry, in output order.
const REQUIRED_CHANNELS: [&str; 3] = ["R", "G", "B"];


/// Read an environment map, flipped vertically for the OpenGL texture
/// upload convention (row zero of the buffer is the bottom scanline).
///
/// Shorthand for [`read_environment_map_with_origin`]
/// with [`RowOrigin::BottomLeft`].
pub fn read_environment_map(path: impl AsRef<Path>) -> Result<EnvironmentMap> {
    read_environment_map_with_origin(path, RowOrigin::BottomLeft)
}

/// Read an environment map with an explicit row orientation.
///
/// The first non-deep layer of the file must carry scalar 32-bit float
/// channels named exactly `R`, `G` and `B`; each failure mode surfaces
/// as its own [`Error`] kind. Either the complete image is returned,
/// or nothing: there are no partial results.
pub fn read_environment_map_with_origin(path: impl AsRef<Path>, origin: RowOrigin)
    -> Result<EnvironmentMap>
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| Error::from_io(error, path))?;

    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .all_channels()
        .first_valid_layer()
        .all_attributes()
        .from_buffered(BufReader::new(file))?;

    let layer = &image.layer_data;
    let (width, height) = (layer.size.width(), layer.size.height());

    if width == 0 || height == 0 {
        return Err(Error::DecodeOpenFailed(exr::error::Error::Invalid(
            "data window contains no pixels".into()
        )));
    }

    let red = channel_values(layer, REQUIRED_CHANNELS[0])?;
    let green = channel_values(layer, REQUIRED_CHANNELS[1])?;
    let blue = channel_values(layer, REQUIRED_CHANNELS[2])?;

    let pixels = interleave_rows(width, height, origin, [red, green, blue]);
    Ok(EnvironmentMap::new(width, height, pixels))
}

/// Find the channel with exactly this name and return its samples,
/// which must be stored as dense 32-bit floats.
fn channel_values<'l>(layer: &'l Layer<AnyChannels<FlatSamples>>, name: &'static str)
    -> Result<&'l [f32]>
{
    let channel = layer.channel_data.list.iter()
        .find(|channel| channel.name == Text::from(name))
        .ok_or(Error::MissingChannel(name))?;

    match &channel.sample_data {
        FlatSamples::F32(values) => Ok(values),
        _ => Err(Error::MissingChannel(name)),
    }
}

/// Interleave the three scanline-ordered channel planes into one
/// `R, G, B, R, G, B, ...` buffer, placing each finished row at its
/// target row in a single bulk copy. With [`RowOrigin::BottomLeft`]
/// the target is the mirrored row, so the vertical flip costs no
/// second pass over the image.
fn interleave_rows(width: usize, height: usize, origin: RowOrigin, planes: [&[f32]; 3])
    -> Vec<f32>
{
    let [red, green, blue] = planes;
    debug_assert_eq!(red.len(), width * height);
    debug_assert_eq!(green.len(), width * height);
    debug_assert_eq!(blue.len(), width * height);

    let samples_per_row = width * 3;
    let mut pixels = vec![0.0_f32; width * height * 3];
    let mut row = vec![0.0_f32; samples_per_row];

    for y in 0 .. height {
        let plane_row = y * width;

        for x in 0 .. width {
            row[x * 3] = red[plane_row + x];
            row[x * 3 + 1] = green[plane_row + x];
            row[x * 3 + 2] = blue[plane_row + x];
        }

        let target_y = match origin {
            RowOrigin::TopLeft => y,
            RowOrigin::BottomLeft => height - 1 - y,
        };

        let target = target_y * samples_per_row;
        pixels[target .. target + samples_per_row].copy_from_slice(&row);
    }

    pixels
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interleave_single_pixel(){
        let pixels = interleave_rows(1, 1, RowOrigin::BottomLeft, [&[1.0], &[2.0], &[3.0]]);
        assert_eq!(pixels, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn flip_is_no_op_for_single_scanline(){
        let red = [1.0, 0.0];
        let green = [0.0, 1.0];
        let blue = [0.0, 0.0];

        let flipped = interleave_rows(2, 1, RowOrigin::BottomLeft, [&red, &green, &blue]);
        let stored = interleave_rows(2, 1, RowOrigin::TopLeft, [&red, &green, &blue]);

        assert_eq!(flipped, vec![1.0, 0.0, 0.0,  0.0, 1.0, 0.0]);
        assert_eq!(flipped, stored);
    }

    #[test]
    fn flip_swaps_scanlines(){
        // planes for a 2x2 image, stored top to bottom
        let red = [1.0, 2.0,  3.0, 4.0];
        let green = [5.0, 6.0,  7.0, 8.0];
        let blue = [9.0, 10.0,  11.0, 12.0];

        let top_row = [1.0, 5.0, 9.0,  2.0, 6.0, 10.0];
        let bottom_row = [3.0, 7.0, 11.0,  4.0, 8.0, 12.0];

        let stored = interleave_rows(2, 2, RowOrigin::TopLeft, [&red, &green, &blue]);
        assert_eq!(stored[.. 6], top_row);
        assert_eq!(stored[6 ..], bottom_row);

        let flipped = interleave_rows(2, 2, RowOrigin::BottomLeft, [&red, &green, &blue]);
        assert_eq!(flipped[.. 6], bottom_row);
        assert_eq!(flipped[6 ..], top_row);
    }

    #[test]
    fn flip_preserves_intra_row_layout(){
        let values: Vec<f32> = (0 .. 12).map(|value| value as f32).collect();
        let flipped = interleave_rows(4, 3, RowOrigin::BottomLeft, [&values, &values, &values]);

        for y in 0 .. 3 {
            for x in 0 .. 4 {
                let expected = ((2 - y) * 4 + x) as f32;
                let index = (y * 4 + x) * 3;
                assert_eq!(&flipped[index .. index + 3], &[expected; 3]);
            }
        }
    }
}
