extern crate envmap;

use envmap::prelude::*;

/// Load the environment map given on the command line and print its
/// dimensions and value range, without opening a window.
fn main() {
    let path = std::env::args().nth(1)
        .unwrap_or_else(|| "lilienstein_1k.exr".to_string());

    println!("loading environment map from `{}`", path);

    let map = match read_environment_map(&path) {
        Ok(map) => map,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let samples = map.pixels();
    let minimum = samples.iter().cloned().fold(f32::INFINITY, f32::min);
    let maximum = samples.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let average = samples.iter().sum::<f32>() / samples.len() as f32;

    println!("loaded {}x{} pixels ({} samples)", map.width(), map.height(), samples.len());
    println!("sample range [{}, {}], average {}", minimum, maximum, average);
    println!("bottom left pixel: {:?}", map.pixel(0, 0));
}
