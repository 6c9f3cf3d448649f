#![no_main]
use auth_header::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(auth) = parse(s) {
            auth.values();
            auth.basic();
        }
    }
});
