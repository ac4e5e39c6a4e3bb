#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f64, u8, i8, bool)| {
    let (float, fmt, prec, single) = input;
    let bit_size = if single { 32 } else { 64 };
    let s = fast_strconv::format_float(float, fmt as char, prec as i32, bit_size);
    assert!(!s.is_empty());
    if prec < 0 && matches!(fmt, b'e' | b'E' | b'f' | b'g' | b'G') && float.is_finite() {
        let expected = if single { float as f32 as f64 } else { float };
        let parsed = fast_strconv::parse_float(&s, bit_size).unwrap_or(f64::NAN);
        assert!(parsed == expected || expected.is_infinite(), "{}", s);
    }
});
