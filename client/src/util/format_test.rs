use super::*;

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(12_500_000.0), "$ 12.500.000");
    assert_eq!(format_price(999.0), "$ 999");
    assert_eq!(format_price(1000.4), "$ 1.000");
}

#[test]
fn format_price_zero_asks_to_enquire() {
    assert_eq!(format_price(0.0), "Consultar");
}

#[test]
fn format_km_groups_thousands() {
    assert_eq!(format_km(45_000.0), "45.000 km");
    assert_eq!(format_km(0.0), "0 km");
    assert_eq!(format_km(-5.0), "0 km");
}
