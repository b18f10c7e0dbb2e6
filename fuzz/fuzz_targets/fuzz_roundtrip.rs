#![no_main]

use libfuzzer_sys::fuzz_target;
use variant_resolver::{normalize, parse, serialize};

// Snapshots are written canonically, so the raw catalog goes straight in.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(raw) = parse(text) else {
        return;
    };
    let Ok(snapshot) = serialize(&raw) else {
        return;
    };

    let written = match parse(&snapshot) {
        Ok(c) => c,
        Err(e) => panic!("snapshot of '{}' does not re-read: {}\n{}", raw.product.slug, e, snapshot),
    };
    assert_eq!(written, normalize(raw), "snapshot drifted:\n{}", snapshot);
});
