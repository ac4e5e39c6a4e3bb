#![no_main]

use fast_strconv::{FastFloat, FloatFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let full = f64::parse_float(data);
    let partial = f64::parse_float_partial(data);
    if let Ok(v) = full {
        // a full parse is a partial parse of the whole input
        let (w, n) = partial.unwrap();
        assert_eq!(n, data.len());
        assert!(v.to_bits() == w.to_bits() || (v.is_nan() && w.is_nan()));
    }
    if let Ok((_, n)) = partial {
        assert!(n > 0 && n <= data.len());
    }
    let _ = f32::parse_float(data);
    let _ = fast_strconv::parse_fmt::<f64, _>(data, FloatFormat::DECIMAL);
});
