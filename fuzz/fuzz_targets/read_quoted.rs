#![no_main]
use auth_header::scanner::read_quoted;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        read_quoted(s, 0).ok();
    }
});
