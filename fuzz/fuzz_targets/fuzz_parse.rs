#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(catalog) = variant_resolver::parse(&s) {
        let _ = variant_resolver::validate(&catalog);
    }
});
