use super::*;

#[test]
fn amounts_use_two_decimals() {
    assert_eq!(format_amount(12.5), "12.50 EUR");
    assert_eq!(format_amount(0.0), "0.00 EUR");
}

#[test]
fn signed_amounts_carry_explicit_sign() {
    assert_eq!(format_signed(40.0, true), "+40.00 EUR");
    assert_eq!(format_signed(-15.25, false), "-15.25 EUR");
}

#[test]
fn tone_switches_at_eighty_and_hundred() {
    assert_eq!(progress_tone(79.9), ProgressTone::Ok);
    assert_eq!(progress_tone(80.0), ProgressTone::Warn);
    assert_eq!(progress_tone(99.99), ProgressTone::Warn);
    assert_eq!(progress_tone(100.0), ProgressTone::Over);
    assert_eq!(progress_tone(250.0).class(), "progress__bar--over");
}

#[test]
fn width_is_clamped() {
    assert_eq!(progress_width(42.4), "42%");
    assert_eq!(progress_width(180.0), "100%");
    assert_eq!(progress_width(-5.0), "0%");
    assert_eq!(progress_width(f64::NAN), "0%");
}

#[test]
fn pages_are_one_based_for_display() {
    assert_eq!(page_label(0, 3), "Page 1 of 3");
    assert_eq!(page_label(0, 0), "Page 1 of 1");
    assert!(has_next_page(0, 3));
    assert!(!has_next_page(2, 3));
    assert!(!has_next_page(0, 0));
}
