#![no_main]

use libfuzzer_sys::fuzz_target;
use synthfit::fitter::least_squares;

fuzz_target!(|data: &[u8]| {
    // Read the bytes as (x, y) pairs of little-endian f64
    let values: Vec<f64> = data
        .chunks_exact(8)
        .filter_map(|chunk| chunk.try_into().ok().map(f64::from_le_bytes))
        .collect();
    let (xs, ys): (Vec<f64>, Vec<f64>) = values
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .unzip();

    // Either an error or finite coefficients, never a panic
    if let Ok(fit) = least_squares(&xs, &ys) {
        assert!(fit.slope.is_finite() && fit.intercept.is_finite());
    }
});
