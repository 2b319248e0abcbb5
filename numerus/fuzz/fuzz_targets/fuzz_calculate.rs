#![no_main]

use libfuzzer_sys::fuzz_target;
use numerus::Engine;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = Engine::new();
        let calculation = engine.calculate(s);

        if let Some(integer) = calculation.integer() {
            assert!(integer >= numerus::MIN_VALUE);
        }
    }
});
