#![no_main]

use libfuzzer_sys::fuzz_target;
use nvembed::FlavorConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary markup must never panic the upcast path.
        let _ = nvembed::read::parse(s, &FlavorConfig::generic_iframe());
        let _ = nvembed::read::parse(s, &FlavorConfig::document_viewer());
    }
});
