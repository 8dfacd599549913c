use super::*;

#[test]
fn default_variant_is_info() {
    assert_eq!(AlertVariant::default(), AlertVariant::Info);
}

#[test]
fn variant_classes_share_block_name() {
    for variant in [AlertVariant::Info, AlertVariant::Success, AlertVariant::Warning, AlertVariant::Error] {
        assert!(variant.class().starts_with("alert alert--"));
    }
    assert_eq!(AlertVariant::Warning.class(), "alert alert--warning");
}

#[test]
fn only_errors_use_alert_role() {
    assert_eq!(AlertVariant::Error.role(), "alert");
    assert_eq!(AlertVariant::Info.role(), "status");
    assert_eq!(AlertVariant::Success.role(), "status");
}
