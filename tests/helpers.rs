use lockosd::clamp;
use lockosd::render::Rgba;

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1, 0, 1), 0);
    assert_eq!(clamp(2, 0, 1), 1);
}

#[test]
fn to_hex_without_alpha_when_opaque() {
    assert_eq!(Rgba::opaque(255, 0, 128).to_hex(), "#FF0080");
}

#[test]
fn to_hex_with_alpha_when_not_opaque() {
    assert_eq!(Rgba::new(0x33, 0x66, 0x99, 0x80).to_hex(), "#33669980");
}

#[test]
fn parse_hex_rgb() {
    let c = Rgba::from_hex("#FF0080").expect("valid rgb hex");
    assert_eq!(c, Rgba::opaque(255, 0, 128));
}

#[test]
fn parse_hex_rgba() {
    let c = Rgba::from_hex("#33669980").expect("valid rgba hex");
    assert_eq!(c, Rgba::new(51, 102, 153, 128));
}

#[test]
fn parse_hex_trims_and_ignores_whitespace() {
    let c = Rgba::from_hex("  ff00FF80  ").expect("valid with whitespace and mixed case");
    assert_eq!(c, Rgba::new(255, 0, 255, 128));
}

#[test]
fn parse_hex_rejects_bad_input() {
    assert!(Rgba::from_hex("#FFF").is_none());
    assert!(Rgba::from_hex("#GG0000").is_none());
    assert!(Rgba::from_hex("").is_none());
    assert!(Rgba::from_hex("#ÄÄÄÄÄÄ").is_none());
}
