#![no_main]

use libfuzzer_sys::fuzz_target;
use nvembed::{FlavorConfig, normalize_fragment};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let config = FlavorConfig::generic_iframe();
        if let Ok(once) = normalize_fragment(s, &config) {
            // A second pass over already-canonical output must be a
            // fixed point.
            if let Ok(twice) = normalize_fragment(&once, &config) {
                assert_eq!(once, twice, "normalization is not idempotent");
            }
        }
    }
});
