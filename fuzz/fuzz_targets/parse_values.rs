#![no_main]
use auth_header::parse_values;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        parse_values(s).ok();
    }
});
