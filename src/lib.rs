
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Decode an HDR environment map from an OpenEXR file into a contiguous,
//! channel-interleaved `f32` pixel buffer, ready for upload as a
//! floating-point RGB texture.
//!
//! The file must carry three scalar 32-bit float channels named exactly
//! `R`, `G` and `B`. Pixel values are passed through untouched: no clamping,
//! no sRGB conversion, no tone-mapping. Values above `1.0` are expected,
//! as this is HDR data.
//!
//! Graphics APIs in the OpenGL family treat row zero of a texture upload as
//! the bottom of the image, while OpenEXR stores scanlines top to bottom.
//! The default entry point therefore flips the image vertically; see
//! [`map::RowOrigin`] if your presentation layer wants the stored order.
//!
//! ```no_run
//! use envmap::prelude::*;
//!
//! let map = read_environment_map("lilienstein_1k.exr")?;
//! assert_eq!(map.pixels().len(), map.width() * map.height() * 3);
//! # Ok::<(), envmap::error::Error>(())
//! ```

pub mod error;
pub mod map;
pub mod read;


pub mod prelude {

    //! Import this module to load environment maps with minimal imports.

    pub use crate::error::{Error, Result};
    pub use crate::map::{EnvironmentMap, RowOrigin};
    pub use crate::read::{read_environment_map, read_environment_map_with_origin};
}
