use timekeeper::models::elapsed::Elapsed;

fn at(s: &str) -> Elapsed {
    Elapsed::parse(s).expect("valid elapsed")
}

#[test]
fn parse_and_render_zero_padded() {
    assert_eq!(at("0:0:0").to_string(), "00:00:00");
    assert_eq!(at("1:2:3").to_string(), "01:02:03");
    assert_eq!(at("99:59:59").to_string(), "99:59:59");
}

#[test]
fn tick_simple_increment() {
    let mut e = at("00:00:00");
    e.tick();
    assert_eq!(e.to_string(), "00:00:01");
}

#[test]
fn tick_carries_seconds_into_minutes() {
    let mut e = at("00:00:59");
    e.tick();
    assert_eq!(e.to_string(), "00:01:00");
}

#[test]
fn tick_carries_minutes_into_hours() {
    let mut e = at("00:59:59");
    e.tick();
    assert_eq!(e.to_string(), "01:00:00");
}

#[test]
fn tick_hours_are_unbounded() {
    let mut e = at("23:59:59");
    e.tick();
    assert_eq!(e.to_string(), "24:00:00");

    let mut e = at("99:59:59");
    e.tick();
    assert_eq!(e.to_string(), "100:00:00");
}

#[test]
fn parse_rejects_garbage() {
    assert!(Elapsed::parse("").is_err());
    assert!(Elapsed::parse("12:34").is_err());
    assert!(Elapsed::parse("aa:bb:cc").is_err());
    assert!(Elapsed::parse("00:60:00").is_err());
    assert!(Elapsed::parse("00:00:60").is_err());
    assert!(Elapsed::parse("-1:00:00").is_err());
}

#[test]
fn parse_or_zero_fails_closed() {
    assert_eq!(Elapsed::parse_or_zero("bogus"), Elapsed::zero());
    assert_eq!(Elapsed::parse_or_zero("01:02:03"), at("01:02:03"));
}
