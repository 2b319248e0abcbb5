use numerus::{calculate, decode, encode, try_calculate};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_encode_decode_round_trip(n in 1i64..=3999) {
        let numeral = encode(n).unwrap();
        prop_assert_eq!(decode(&numeral).unwrap(), n);
    }

    #[test]
    fn prop_encoded_numerals_are_canonical(n in 1i64..=3999) {
        let numeral = encode(n).unwrap();
        // No symbol repeats more than three times in a row
        for symbol in ["IIII", "XXXX", "CCCC", "MMMM", "VV", "LL", "DD"] {
            prop_assert!(!numeral.contains(symbol), "{} in {}", symbol, numeral);
        }
    }

    #[test]
    fn prop_addition_matches_integers(a in 1i64..=1999, b in 1i64..=1999) {
        let expression = format!("{} + {}", encode(a).unwrap(), encode(b).unwrap());
        let calculation = calculate(&expression);
        prop_assert_eq!(calculation.integer(), Some(a + b));
        prop_assert_eq!(calculation.numeral_slot(), encode(a + b).unwrap());
    }

    #[test]
    fn prop_division_matches_integer_division(a in 1i64..=3999, b in 1i64..=3999) {
        let expression = format!("{} / {}", encode(a).unwrap(), encode(b).unwrap());
        prop_assert_eq!(try_calculate(&expression).unwrap(), a / b);
    }

    #[test]
    fn prop_multiplication_binds_tighter(a in 1i64..=50, b in 1i64..=50, c in 1i64..=50) {
        let (na, nb, nc) = (encode(a).unwrap(), encode(b).unwrap(), encode(c).unwrap());
        let plain = try_calculate(&format!("{} + {} * {}", na, nb, nc)).unwrap();
        let grouped = try_calculate(&format!("({} + {}) * {}", na, nb, nc)).unwrap();
        prop_assert_eq!(plain, a + b * c);
        prop_assert_eq!(grouped, (a + b) * c);
    }

    #[test]
    fn prop_calculate_never_panics(input in "[IVXLCDM()+*/ -]{0,40}") {
        let calculation = calculate(&input);
        if let Some(integer) = calculation.integer() {
            prop_assert!(integer >= 1);
        }
    }
}
