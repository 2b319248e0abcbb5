#![no_main]

use libfuzzer_sys::fuzz_target;
use numerus::Engine;

fuzz_target!(|depth: u8| {
    let engine = Engine::new();

    let depth = (depth as usize % 100) + 1;

    let mut expr = String::from("I");
    for _ in 0..depth {
        expr = format!("({} + I)", expr);
    }

    let _ = engine.calculate(&expr);
});
