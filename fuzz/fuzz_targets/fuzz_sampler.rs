#![no_main]

use libfuzzer_sys::fuzz_target;

use mathlab_core::{sample, SampleRange, INVERSE_GUARD_BAND};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // Small integer-derived ranges keep every pass short
    let min = f64::from(i16::from_le_bytes([data[0], data[1]])) / 100.0;
    let max = f64::from(i16::from_le_bytes([data[2], data[3]])) / 100.0;
    let step = f64::from(u16::from_le_bytes([data[4], data[5]])) / 1000.0;

    let Ok(graphs) = sample(&SampleRange::new(min, max, step)) else {
        assert!(step <= 0.0);
        return;
    };
    assert_eq!(graphs.linear.len(), graphs.quadratic.len());
    assert!(graphs.inverse_left.iter().all(|p| p.x < -INVERSE_GUARD_BAND));
    assert!(graphs.inverse_right.iter().all(|p| p.x > INVERSE_GUARD_BAND));
    assert!(graphs.sqrt.iter().all(|p| p.x >= 0.0 && p.x <= max));
});
