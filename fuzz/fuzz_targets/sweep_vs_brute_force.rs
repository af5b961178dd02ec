#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(segs) = orthosweeper::arbitrary::orthogonal_segments(&mut u) else {
        return;
    };

    let swept = orthosweeper::intersections(&segs);
    assert_eq!(swept, orthosweeper::brute_force(&segs));
});
