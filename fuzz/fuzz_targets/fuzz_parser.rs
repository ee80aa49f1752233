#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // the parser must never panic, whatever the input
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = monkey_lang::parse_test_input(s);
    }
});
