#![no_main]

use libfuzzer_sys::fuzz_target;

use mathlab_core::{generate, Point, Triangle};

fn coord(bytes: &[u8]) -> f64 {
    f64::from_le_bytes(bytes.try_into().unwrap_or([0; 8]))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 49 {
        return;
    }
    let c: Vec<f64> = data[..48].chunks_exact(8).map(coord).collect();
    let triangle = Triangle::new(
        Point::new(c[0], c[1]),
        Point::new(c[2], c[3]),
        Point::new(c[4], c[5]),
    );
    // Depth capped at 7 for speed
    let depth = u32::from(data[48] % 8);

    match generate(&triangle, depth) {
        Ok(leaves) => assert_eq!(leaves.len(), 3usize.pow(depth)),
        Err(_) => assert!(!triangle.is_finite()),
    }
});
