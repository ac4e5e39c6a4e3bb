use fast_strconv::{parse, parse_fmt, parse_partial, ErrorKind, FastFloat, FloatFormat};

macro_rules! check_ok {
    ($s:expr, $x:expr) => {
        let s = $s;
        check_ok!(s, $x, f32);
        check_ok!(s.as_bytes(), $x, f32);
        check_ok!(s, $x, f64);
        check_ok!(s.as_bytes(), $x, f64);
    };
    ($s:expr, $x:expr, $ty:ty) => {
        assert_eq!(<$ty>::parse_float($s).unwrap(), $x);
        assert_eq!(<$ty>::parse_float_partial($s).unwrap(), ($x, $s.len()));
        assert_eq!(parse::<$ty, _>($s).unwrap(), $x);
        assert_eq!(parse_partial::<$ty, _>($s).unwrap(), ($x, $s.len()));
    };
}

macro_rules! check_ok_partial {
    ($s:expr, $x:expr, $n:expr) => {
        let s = $s;
        check_ok_partial!(s, $x, $n, f32);
        check_ok_partial!(s.as_bytes(), $x, $n, f32);
        check_ok_partial!(s, $x, $n, f64);
        check_ok_partial!(s.as_bytes(), $x, $n, f64);
    };
    ($s:expr, $x:expr, $n:expr, $ty:ty) => {
        assert_eq!(<$ty>::parse_float($s).unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(<$ty>::parse_float_partial($s).unwrap(), ($x, $n));
        assert!(parse::<$ty, _>($s).is_err());
        assert_eq!(parse_partial::<$ty, _>($s).unwrap(), ($x, $n));
    };
}

macro_rules! check_err {
    ($s:expr) => {
        let s = $s;
        check_err!(s, f32);
        check_err!(s.as_bytes(), f32);
        check_err!(s, f64);
        check_err!(s.as_bytes(), f64);
    };
    ($s:expr, $ty:ty) => {
        assert_eq!(<$ty>::parse_float($s).unwrap_err().kind(), ErrorKind::Syntax);
        assert!(<$ty>::parse_float_partial($s).is_err());
        assert!(parse::<$ty, _>($s).is_err());
        assert!(parse_partial::<$ty, _>($s).is_err());
    };
}

#[test]
fn test_api() {
    check_ok!("1.23", 1.23);
    check_ok!("0.", 0.);
    check_ok!("-0", 0.);
    check_ok!("+00", 0.);
    check_ok!("-0001e-02", -0.01);
    check_ok!("345", 345.);
    check_ok!("1_000.5", 1000.5);
    check_ok!("0x1.8p1", 3.);

    check_ok_partial!("1a", 1., 1);
    check_ok_partial!("-2e-1x", -0.2, 5);
    check_ok_partial!("2e2.", 200., 3);
    check_ok_partial!("0x", 0., 1);
    check_ok_partial!("1p5", 1., 1);
    check_ok_partial!("1.5 ", 1.5, 3);

    check_err!("");
    check_err!(" ");
    check_err!(".");
    check_err!(".e1");
    check_err!("+");
    check_err!("-");
    check_err!("x");
    check_err!("a123");
    check_err!("2ea");
    check_err!("1e");
    check_err!("0x1");
    check_err!("+nan");
    check_err!("1__0");
}

#[test]
fn test_partial_specials() {
    assert_eq!(f32::parse_float("Infinity").unwrap(), f32::INFINITY);
    assert_eq!(f64::parse_float("-INF").unwrap(), f64::NEG_INFINITY);
    let (v, n) = f64::parse_float_partial("infinite").unwrap();
    assert_eq!((v, n), (f64::INFINITY, 3));
    let (v, n) = f64::parse_float_partial("-infinity!").unwrap();
    assert_eq!((v, n), (f64::NEG_INFINITY, 9));
    let (v, n) = f64::parse_float_partial("nan1").unwrap();
    assert!(v.is_nan());
    assert_eq!(n, 3);
}

#[test]
fn test_range_errors() {
    let err = f64::parse_float("1e309").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.value(), f64::INFINITY);
    let err = f32::parse_float("-1e39").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.value(), f64::NEG_INFINITY);
    let err = f64::parse_float_partial("1e999x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    // a trailing byte makes a full parse a syntax error even after overflow
    let err = f64::parse_float("1e999x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(f64::parse_float("1e-999").unwrap(), 0.0);
}

#[test]
fn test_formats() {
    let dec = FloatFormat::DECIMAL;
    assert!(parse_fmt::<f64, _>("1_000", dec).is_err());
    assert!(parse_fmt::<f64, _>("0x10p0", dec).is_err());
    assert!(parse_fmt::<f64, _>("inf", dec).is_err());
    assert_eq!(parse_fmt::<f64, _>("1000", dec).unwrap(), 1000.0);
    let fmt = FloatFormat::DECIMAL | FloatFormat::UNDERSCORES;
    assert_eq!(parse_fmt::<f64, _>("1_000", fmt).unwrap(), 1000.0);
    assert!(parse_fmt::<f64, _>("0x10p0", fmt).is_err());
}

#[test]
fn test_format_methods() {
    assert_eq!(1.5_f64.format_float('e', 3), "1.500e+00");
    assert_eq!(1.5_f32.format_float('g', -1), "1.5");
    let mut buf = b"x=".to_vec();
    (-0.25_f64).append_float(&mut buf, 'f', -1);
    assert_eq!(buf, b"x=-0.25");
}
