use fast_strconv::{format_float, parse_float, ErrorKind};

// (input, value formatted with 'g' -1, error)
type Case = (&'static str, &'static str, Option<ErrorKind>);

const SYNTAX: Option<ErrorKind> = Some(ErrorKind::Syntax);
const RANGE: Option<ErrorKind> = Some(ErrorKind::Range);

const CASES_F64: &[Case] = &[
    ("", "0", SYNTAX),
    ("1", "1", None),
    ("+1", "1", None),
    ("1x", "0", SYNTAX),
    ("1.1.", "0", SYNTAX),
    ("1e23", "1e+23", None),
    ("1E23", "1e+23", None),
    ("100000000000000000000000", "1e+23", None),
    ("1e-100", "1e-100", None),
    ("123456700", "1.234567e+08", None),
    ("99999999999999974834176", "9.999999999999997e+22", None),
    ("100000000000000000000001", "1.0000000000000001e+23", None),
    ("100000000000000008388608", "1.0000000000000001e+23", None),
    ("100000000000000016777215", "1.0000000000000001e+23", None),
    ("100000000000000016777216", "1.0000000000000003e+23", None),
    ("-1", "-1", None),
    ("-0.1", "-0.1", None),
    ("-0", "-0", None),
    ("1e-20", "1e-20", None),
    ("625e-3", "0.625", None),
    // hexadecimal
    ("0x1p0", "1", None),
    ("0x1p1", "2", None),
    ("0x1p-1", "0.5", None),
    ("0x1ep-1", "15", None),
    ("-0x1ep-1", "-15", None),
    ("-0x1_ep-1", "-15", None),
    ("0x1p-200", "6.223015277861142e-61", None),
    ("0x1p200", "1.6069380442589903e+60", None),
    ("0x1fFe2.p0", "131042", None),
    ("0x1fFe2.P0", "131042", None),
    ("-0x2p3", "-16", None),
    ("0x0.fp4", "15", None),
    ("0x0.fp0", "0.9375", None),
    ("0x1e2", "0", SYNTAX),
    ("1p2", "0", SYNTAX),
    // zeros
    ("0", "0", None),
    ("0e0", "0", None),
    ("-0e0", "-0", None),
    ("+0e0", "0", None),
    ("0e-0", "0", None),
    ("-0e-0", "-0", None),
    ("0e+01234567890123456789", "0", None),
    ("0.00e-01234567890123456789", "0", None),
    ("-0e+01234567890123456789", "-0", None),
    ("-0.00e-01234567890123456789", "-0", None),
    ("0x0p+01234567890123456789", "0", None),
    ("-0x0p+01234567890123456789", "-0", None),
    // specials
    ("nan", "NaN", None),
    ("NaN", "NaN", None),
    ("NAN", "NaN", None),
    ("+nan", "0", SYNTAX),
    ("-NaN", "0", SYNTAX),
    ("inf", "+Inf", None),
    ("-Inf", "-Inf", None),
    ("+INF", "+Inf", None),
    ("-Infinity", "-Inf", None),
    ("+INFINITY", "+Inf", None),
    ("Infinity", "+Inf", None),
    ("infinit", "0", SYNTAX),
    // largest float64
    ("1.7976931348623157e308", "1.7976931348623157e+308", None),
    ("-1.7976931348623157e308", "-1.7976931348623157e+308", None),
    ("0x1.fffffffffffffp1023", "1.7976931348623157e+308", None),
    ("-0x1.fffffffffffffp1023", "-1.7976931348623157e+308", None),
    ("0x1fffffffffffffp971", "1.7976931348623157e+308", None),
    ("0x.1fffffffffffffp1027", "1.7976931348623157e+308", None),
    // next float64, too large
    ("1.7976931348623159e308", "+Inf", RANGE),
    ("-1.7976931348623159e308", "-Inf", RANGE),
    ("0x1p1024", "+Inf", RANGE),
    ("0x2p1023", "+Inf", RANGE),
    ("0x.1p1028", "+Inf", RANGE),
    ("0x.2p1027", "+Inf", RANGE),
    // the border is ...158079, just below is fine
    ("1.7976931348623158e308", "1.7976931348623157e+308", None),
    ("-1.7976931348623158e308", "-1.7976931348623157e+308", None),
    ("0x1.fffffffffffff7fffp1023", "1.7976931348623157e+308", None),
    ("-0x1.fffffffffffff7fffp1023", "-1.7976931348623157e+308", None),
    ("1.797693134862315808e308", "+Inf", RANGE),
    ("-1.797693134862315808e308", "-Inf", RANGE),
    ("0x1.fffffffffffff8p1023", "+Inf", RANGE),
    ("-0x1fffffffffffff.8p+971", "-Inf", RANGE),
    // a little too large
    ("1e308", "1e+308", None),
    ("2e308", "+Inf", RANGE),
    ("1e309", "+Inf", RANGE),
    ("0x1p1025", "+Inf", RANGE),
    // way too large
    ("1e310", "+Inf", RANGE),
    ("-1e310", "-Inf", RANGE),
    ("1e400", "+Inf", RANGE),
    ("-1e400", "-Inf", RANGE),
    ("1e400000", "+Inf", RANGE),
    ("-1e400000", "-Inf", RANGE),
    ("0x1p1030", "+Inf", RANGE),
    ("0x1p2000", "+Inf", RANGE),
    ("0x1p2000000000", "+Inf", RANGE),
    ("-0x1p2000000000", "-Inf", RANGE),
    // denormalized
    ("1e-305", "1e-305", None),
    ("1e-306", "1e-306", None),
    ("1e-307", "1e-307", None),
    ("1e-308", "1e-308", None),
    ("1e-309", "1e-309", None),
    ("1e-310", "1e-310", None),
    ("1e-322", "1e-322", None),
    // smallest denormal
    ("5e-324", "5e-324", None),
    ("4e-324", "5e-324", None),
    ("3e-324", "5e-324", None),
    // too small
    ("2e-324", "0", None),
    ("1e-350", "0", None),
    ("1e-400000", "0", None),
    // near denormals and denormals
    ("0x2.00000000000000p-1010", "1.8227805048890994e-304", None),
    ("0x1p-1074", "5e-324", None),
    ("0x1.8p-1074", "1e-323", None),
    ("0x1p-1075", "0", None),
    ("0x1.00000000000000000001p-1075", "5e-324", None),
    ("0x1p-1076", "0", None),
    ("0x1.fffffffffffffp-1075", "5e-324", None),
    ("0x1.00000000000008p-1022", "2.2250738585072014e-308", None),
    ("0x0.fffffffffffff8p-1022", "2.2250738585072014e-308", None),
    // try to overflow the exponent
    ("1e-4294967296", "0", None),
    ("1e+4294967296", "+Inf", RANGE),
    ("1e-18446744073709551616", "0", None),
    ("1e+18446744073709551616", "+Inf", RANGE),
    ("0x1p-4294967296", "0", None),
    ("0x1p+4294967296", "+Inf", RANGE),
    ("0x1p-18446744073709551616", "0", None),
    ("0x1p+18446744073709551616", "+Inf", RANGE),
    // parse errors
    ("1e", "0", SYNTAX),
    ("1e-", "0", SYNTAX),
    (".e-1", "0", SYNTAX),
    ("1\x00.2", "0", SYNTAX),
    ("0x", "0", SYNTAX),
    ("0x.", "0", SYNTAX),
    ("0x1", "0", SYNTAX),
    ("0x.1", "0", SYNTAX),
    ("0x1p", "0", SYNTAX),
    ("0x.1p", "0", SYNTAX),
    ("0x1p+", "0", SYNTAX),
    ("0x.1p+", "0", SYNTAX),
    ("0x1p-", "0", SYNTAX),
    ("0x.1p-", "0", SYNTAX),
    ("0x1p+2", "4", None),
    ("0x.1p+2", "0.25", None),
    ("0x1p-2", "0.25", None),
    ("0x.1p-2", "0.015625", None),
    // slow-path classics
    ("2.2250738585072012e-308", "2.2250738585072014e-308", None),
    ("2.2250738585072011e-308", "2.225073858507201e-308", None),
    ("4.630813248087435e+307", "4.630813248087435e+307", None),
    ("22.222222222222222", "22.22222222222222", None),
    ("0x1.1111111111111p222", "7.18931911124017e+66", None),
    ("0x2.2222222222222p221", "7.18931911124017e+66", None),
    // exactly halfway between 1 and the next float, round to even
    ("1.00000000000000011102230246251565404236316680908203125", "1", None),
    ("0x1.00000000000008p0", "1", None),
    ("1.00000000000000011102230246251565404236316680908203124", "1", None),
    ("0x1.00000000000007Fp0", "1", None),
    ("1.00000000000000011102230246251565404236316680908203126", "1.0000000000000002", None),
    ("0x1.000000000000081p0", "1.0000000000000002", None),
    ("0x1.00000000000009p0", "1.0000000000000002", None),
    // halfway above the next float, round to even (up)
    ("1.00000000000000033306690738754696212708950042724609375", "1.0000000000000004", None),
    ("0x1.00000000000018p0", "1.0000000000000004", None),
    ("1090544144181609348671888949248", "1.0905441441816093e+30", None),
    ("1090544144181609348835077142190", "1.0905441441816094e+30", None),
    // underscores
    ("1_23.50_0_0e+1_2", "1.235e+14", None),
    ("-_123.5e+12", "0", SYNTAX),
    ("+_123.5e+12", "0", SYNTAX),
    ("_123.5e+12", "0", SYNTAX),
    ("1__23.5e+12", "0", SYNTAX),
    ("123_.5e+12", "0", SYNTAX),
    ("123._5e+12", "0", SYNTAX),
    ("123.5_e+12", "0", SYNTAX),
    ("123.5__0e+12", "0", SYNTAX),
    ("123.5e_+12", "0", SYNTAX),
    ("123.5e+_12", "0", SYNTAX),
    ("123.5e_-12", "0", SYNTAX),
    ("123.5e-_12", "0", SYNTAX),
    ("123.5e+1__2", "0", SYNTAX),
    ("123.5e+12_", "0", SYNTAX),
    ("0x_1_2.3_4_5p+1_2", "74565", None),
    ("-_0x12.345p+12", "0", SYNTAX),
    ("+_0x12.345p+12", "0", SYNTAX),
    ("_0x12.345p+12", "0", SYNTAX),
    ("0x__12.345p+12", "0", SYNTAX),
    ("0x1__2.345p+12", "0", SYNTAX),
    ("0x12_.345p+12", "0", SYNTAX),
    ("0x12._345p+12", "0", SYNTAX),
    ("0x12.3__45p+12", "0", SYNTAX),
    ("0x12.345_p+12", "0", SYNTAX),
    ("0x12.345p_+12", "0", SYNTAX),
    ("0x12.345p+_12", "0", SYNTAX),
    ("0x12.345p_-12", "0", SYNTAX),
    ("0x12.345p-_12", "0", SYNTAX),
    ("0x12.345p+1__2", "0", SYNTAX),
    ("0x12.345p+12_", "0", SYNTAX),
    // trailing garbage after an overflowing prefix
    ("1e1000x", "0", SYNTAX),
];

const CASES_F32: &[Case] = &[
    ("1", "1", None),
    ("+1", "1", None),
    ("1e23", "1e+23", None),
    ("1E23", "1e+23", None),
    ("1.000000059604644775390625", "1", None),
    ("1.000000059604644775390624", "1", None),
    ("1.000000059604644775390626", "1.0000001", None),
    ("340282346638528859811704183484516925440", "3.4028235e+38", None),
    ("-340282346638528859811704183484516925440", "-3.4028235e+38", None),
    ("0x.ffffffp128", "3.4028235e+38", None),
    ("-0x.ffffffp128", "-3.4028235e+38", None),
    ("0x1.fffffep127", "3.4028235e+38", None),
    // next float32, too large
    ("3.4028236e38", "+Inf", RANGE),
    ("-3.4028236e38", "-Inf", RANGE),
    ("0x1.0p128", "+Inf", RANGE),
    ("-0x1.0p128", "-Inf", RANGE),
    // the border is 3.40282356779...e+38
    ("3.402823567e38", "3.4028235e+38", None),
    ("-3.402823567e38", "-3.4028235e+38", None),
    ("0x.ffffff7fp128", "3.4028235e+38", None),
    ("3.4028235678e38", "+Inf", RANGE),
    ("-3.4028235678e38", "-Inf", RANGE),
    ("0x.ffffff8p128", "+Inf", RANGE),
    // denormals
    ("1e-38", "1e-38", None),
    ("1e-39", "1e-39", None),
    ("1e-40", "1e-40", None),
    ("1e-41", "1e-41", None),
    ("1e-42", "1e-42", None),
    ("1e-43", "1e-43", None),
    ("1e-44", "1e-44", None),
    ("6e-45", "6e-45", None),
    ("5e-45", "6e-45", None),
    ("1e-45", "1e-45", None),
    ("2e-45", "1e-45", None),
    ("3e-45", "3e-45", None),
    ("0x0.89aBcDp-125", "1.2643093e-38", None),
    ("0x0.8000000p-125", "1.1754944e-38", None),
    ("0x0.1234567p-125", "1.671814e-39", None),
    ("0x0.1234568p-125", "1.671814e-39", None),
    ("0x0.1234569p-125", "1.671815e-39", None),
    ("0x0.1p-149", "0", None),
    ("0x0.8p-149", "0", None),
    ("0x0.9p-149", "1e-45", None),
    ("0x1.0p-149", "1e-45", None),
    ("0x1.7p-149", "1e-45", None),
    ("0x1.8p-149", "3e-45", None),
    // underflow to zero
    ("1e-46", "0", None),
    ("-1e-46", "-0", None),
    ("nan", "NaN", None),
    ("-inf", "-Inf", None),
    ("0x", "0", SYNTAX),
];

fn check(cases: &[Case], bit_size: u32) {
    for &(input, output, err) in cases {
        let (value, kind) = match parse_float(input, bit_size) {
            Ok(v) => (v, None),
            Err(e) => (e.value(), Some(e.kind())),
        };
        assert_eq!(kind, err, "{:?}", input);
        assert_eq!(
            format_float(value, 'g', -1, bit_size),
            output,
            "ParseFloat({:?}, {})",
            input,
            bit_size
        );
        if bit_size == 32 && !value.is_nan() {
            assert_eq!(value, value as f32 as f64, "{:?}", input);
        }
    }
}

#[test]
fn test_parse_f64() {
    check(CASES_F64, 64);
}

#[test]
fn test_parse_f32() {
    check(CASES_F32, 32);
}

#[test]
fn test_f32_representable_cases_agree() {
    // every f64 case whose result is exactly an f32 parses the same at 32 bits
    for &(input, output, err) in CASES_F64 {
        let v = match parse_float(input, 64) {
            Ok(v) => v,
            Err(_) => continue,
        };
        if err.is_some() || v.is_nan() || v as f32 as f64 != v {
            continue;
        }
        let v32 = parse_float(input, 32).unwrap();
        assert_eq!(v32.to_bits(), v.to_bits(), "{:?} -> {}", input, output);
    }
}

#[test]
fn test_long_inputs() {
    let long_tie = format!(
        "1.00000000000000011102230246251565404236316680908203125{}1",
        "0".repeat(10000)
    );
    assert_eq!(parse_float(&long_tie, 64).unwrap(), 1.0000000000000002);
    let long_hex_tie = format!("0x1.00000000000008{}1p0", "0".repeat(10000));
    assert_eq!(parse_float(&long_hex_tie, 64).unwrap(), 1.0000000000000002);
    let twos = format!("2.{}e+1", "2".repeat(4000));
    assert_eq!(format_float(parse_float(&twos, 64).unwrap(), 'g', -1, 64), "22.22222222222222");
    let hex_twos = format!("0x2.{}p221", "2".repeat(4000));
    assert_eq!(
        format_float(parse_float(&hex_twos, 64).unwrap(), 'g', -1, 64),
        "7.18931911124017e+66"
    );
    let f32_tie = format!("1.000000059604644775390625{}1", "0".repeat(80));
    assert_eq!(parse_float(&f32_tie, 32).unwrap(), 1.0000001192092896);
}

#[test]
fn test_bit_size_fallback() {
    // sizes other than 32 parse at 64 bits
    for &bits in &[0, 16, 64, 128] {
        assert_eq!(parse_float("0.1", bits).unwrap(), 0.1);
    }
    assert_eq!(parse_float("0.1", 32).unwrap(), 0.1_f32 as f64);
}

#[test]
fn test_error_messages() {
    let cases = [
        ("1x", r#"strconv.ParseFloat: parsing "1x": invalid syntax"#),
        ("", r#"strconv.ParseFloat: parsing "": invalid syntax"#),
        ("1\x00.2", r#"strconv.ParseFloat: parsing "1\x00.2": invalid syntax"#),
        ("\"1\"", r#"strconv.ParseFloat: parsing "\"1\"": invalid syntax"#),
        ("1e400", r#"strconv.ParseFloat: parsing "1e400": value out of range"#),
        ("-0x1p2000", r#"strconv.ParseFloat: parsing "-0x1p2000": value out of range"#),
    ];
    for &(input, message) in &cases {
        let err = parse_float(input, 64).unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(err.input(), input);
        assert_eq!(err.func(), "ParseFloat");
    }
    assert_eq!(parse_float("-1e400", 64).unwrap_err().value(), f64::NEG_INFINITY);
    assert_eq!(parse_float("1x", 64).unwrap_err().value(), 0.0);
}
