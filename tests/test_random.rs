use fast_strconv::FastFloat;

fn check_f64(rng: &fastrand::Rng, buf: &mut ryu::Buffer) {
    let a = f64::from_bits(rng.u64(..));
    let s = buf.format(a);
    let b: f64 = fast_strconv::parse(s).unwrap();
    assert!(a == b || (a.is_nan() && b.is_nan()), "{}", s);
    if a.is_finite() {
        let ours = a.format_float('e', -1);
        let c: f64 = fast_strconv::parse(&ours).unwrap();
        assert_eq!(a.to_bits(), c.to_bits(), "{}", ours);
        // same shortest digits as ryu
        assert_eq!(ours.parse::<f64>().unwrap(), s.parse::<f64>().unwrap());
    }
}

#[test]
fn test_f64_random_sample() {
    let rng = fastrand::Rng::with_seed(0);
    let mut buf = ryu::Buffer::new();
    for _ in 0..100_000 {
        check_f64(&rng, &mut buf);
    }
}

#[test]
#[ignore]
fn test_f64_random_from_u64() {
    const N_ITER: u64 = 1 << 32;

    let rng = fastrand::Rng::with_seed(0);
    let mut buf = ryu::Buffer::new();
    for _ in 0..N_ITER {
        check_f64(&rng, &mut buf);
    }
}

#[test]
fn test_random_digit_strings() {
    // long mantissas and wide exponents agree with the standard library
    let rng = fastrand::Rng::with_seed(42);
    let mut s = String::new();
    for _ in 0..20_000 {
        s.clear();
        let n = rng.usize(1..60);
        let dot = rng.usize(0..n + 5);
        for i in 0..n {
            if i == dot {
                s.push('.');
            }
            s.push(char::from(b'0' + rng.u8(0..10)));
        }
        s.push('e');
        s.push_str(&rng.i32(-340..320).to_string());
        let expected = s.parse::<f64>().unwrap();
        match f64::parse_float(&s) {
            Ok(v) => assert_eq!(v.to_bits(), expected.to_bits(), "{}", s),
            Err(e) => {
                assert!(expected.is_infinite(), "{}", s);
                assert_eq!(e.value(), expected);
            }
        }
        let expected = s.parse::<f32>().unwrap();
        match f32::parse_float(&s) {
            Ok(v) => assert_eq!(v.to_bits(), expected.to_bits(), "{}", s),
            Err(e) => assert!(expected.is_infinite() && e.value().is_infinite(), "{}", s),
        }
    }
}
