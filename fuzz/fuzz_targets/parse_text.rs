#![no_main]

use libfuzzer_sys::fuzz_target;
use orthosweeper::{io, Segments, DEFAULT_EPS};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let lenient: Vec<_> = io::records(text).collect();
    match io::parse_segments(text) {
        Ok(records) => {
            assert!(lenient.iter().all(|r| r.is_ok()));
            assert_eq!(records.len(), lenient.len());
        }
        Err(partial) => {
            // Everything before the first bad line is kept.
            assert_eq!(lenient[partial.parsed.len()], Err(partial.error.clone()));
        }
    }

    // Whatever parses must be safe to sweep, even if it gets rejected.
    let mut segs = Segments::new(DEFAULT_EPS);
    for r in lenient.into_iter().flatten() {
        let _ = segs.add_record(&r);
    }
    orthosweeper::sweep(&segs, |_| {});
});
