#![no_main]
use libfuzzer_sys::fuzz_target;

// We only test the roundtrip of f64 with a fuzzer because f32 search space
// is small enough that we can test it exhaustively

fuzz_target!(|float: f64| {
    for &fmt in &['e', 'f', 'g', 'x'] {
        let s = fast_strconv::format_float(float, fmt, -1, 64);
        let roundtripped_float = fast_strconv::parse_float(&s, 64).unwrap();
        if float.is_nan() {
            assert!(roundtripped_float.is_nan());
        } else {
            assert_eq!(float.to_bits(), roundtripped_float.to_bits(), "{}", s);
        }
    }
    let std = fast_strconv::parse_float(&float.to_string(), 64).unwrap();
    assert!(std == float || (std.is_nan() && float.is_nan()));
});
