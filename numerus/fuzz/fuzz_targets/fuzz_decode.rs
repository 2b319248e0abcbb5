#![no_main]

use libfuzzer_sys::fuzz_target;
use numerus::{decode, encode, MAX_VALUE, MIN_VALUE};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = decode(s) {
            if (MIN_VALUE..=MAX_VALUE).contains(&value) {
                let numeral = encode(value).unwrap();
                assert_eq!(decode(&numeral).unwrap(), value);
            }
        }
    }
});
