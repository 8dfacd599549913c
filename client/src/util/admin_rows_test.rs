use super::*;
use serde_json::json;

// =============================================================
// Field resolution
// =============================================================

#[test]
fn missing_year_aliases_yield_empty_anio() {
    let row = to_admin_row(&json!({ "marca": "Ford" }));
    assert_eq!(row.anio, "");
}

#[test]
fn missing_distance_aliases_yield_zero() {
    let row = to_admin_row(&json!({ "marca": "Ford" }));
    assert!((row.kilometraje - 0.0).abs() < f64::EPSILON);
    assert!(!row.kilometraje.is_nan());
}

#[test]
fn year_alias_precedence() {
    let row = to_admin_row(&json!({ "anio": "2020", "año": "2019" }));
    assert_eq!(row.anio, "2020");

    let row = to_admin_row(&json!({ "año": "2019", "year": 2018 }));
    assert_eq!(row.anio, "2019");

    let row = to_admin_row(&json!({ "year": 2018 }));
    assert_eq!(row.anio, "2018");
}

#[test]
fn null_candidate_falls_through_to_next_alias() {
    let row = to_admin_row(&json!({ "anio": null, "year": "2017" }));
    assert_eq!(row.anio, "2017");
}

#[test]
fn id_precedence() {
    assert_eq!(to_admin_row(&json!({ "_id": "a", "id": "b" })).id.as_deref(), Some("a"));
    assert_eq!(to_admin_row(&json!({ "id": "b" })).id.as_deref(), Some("b"));
    assert_eq!(to_admin_row(&json!({})).id, None);
}

#[test]
fn numeric_id_is_stringified() {
    assert_eq!(to_admin_row(&json!({ "id": 42 })).id.as_deref(), Some("42"));
}

#[test]
fn distance_and_price_aliases() {
    let row = to_admin_row(&json!({ "kms": "45000", "kilometers": 1, "price": 12_500_000 }));
    assert!((row.kilometraje - 45_000.0).abs() < f64::EPSILON);
    assert!((row.precio - 12_500_000.0).abs() < f64::EPSILON);
}

// =============================================================
// Coercion
// =============================================================

#[test]
fn unparseable_numbers_default_to_zero() {
    let row = to_admin_row(&json!({ "kilometraje": "muchos", "precio": {} }));
    assert!((row.kilometraje - 0.0).abs() < f64::EPSILON);
    assert!((row.precio - 0.0).abs() < f64::EPSILON);
}

#[test]
fn non_finite_strings_default_to_zero() {
    assert!((coerce_number(&json!("NaN")) - 0.0).abs() < f64::EPSILON);
    assert!((coerce_number(&json!("inf")) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn numeric_strings_are_trimmed() {
    assert!((coerce_number(&json!(" 1500.5 ")) - 1500.5).abs() < f64::EPSILON);
}

#[test]
fn strings_are_trimmed_and_default_empty() {
    let row = to_admin_row(&json!({ "marca": "  Toyota ", "modelo": "Hilux", "version": null }));
    assert_eq!(row.marca, "Toyota");
    assert_eq!(row.modelo, "Hilux");
    assert_eq!(row.version, "");
}

#[test]
fn non_object_record_maps_to_defaults() {
    let row = to_admin_row(&json!("not a vehicle"));
    assert_eq!(row.id, None);
    assert_eq!(row.marca, "");
    assert_eq!(row.first_image_url, "");
    assert_eq!(row.original, json!("not a vehicle"));
}

// =============================================================
// Output shape
// =============================================================

#[test]
fn original_is_kept_unmodified() {
    let record = json!({ "_id": "x1", "marca": " Fiat ", "extra": [1, 2] });
    let row = to_admin_row(&record);
    assert_eq!(row.original, record);
}

#[test]
fn serialized_shape_is_the_fixed_field_set() {
    let row = to_admin_row(&json!({ "_id": "x1", "marca": "Fiat", "color": "rojo" }));
    let value = serde_json::to_value(&row).unwrap();
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["_original", "anio", "firstImageUrl", "id", "kilometraje", "marca", "modelo", "precio", "version"]
    );
}

#[test]
fn title_skips_empty_parts() {
    let row = to_admin_row(&json!({ "marca": "Fiat", "version": "1.4" }));
    assert_eq!(row.title(), "Fiat 1.4");
}

// =============================================================
// List extraction
// =============================================================

#[test]
fn extract_vehicle_list_accepts_bare_and_wrapped_arrays() {
    assert_eq!(extract_vehicle_list(json!([{ "id": 1 }])).len(), 1);
    assert_eq!(extract_vehicle_list(json!({ "autos": [{}, {}] })).len(), 2);
    assert_eq!(extract_vehicle_list(json!({ "data": [{}] })).len(), 1);
    assert!(extract_vehicle_list(json!({ "autos": "nope" })).is_empty());
    assert!(extract_vehicle_list(json!(null)).is_empty());
}

#[test]
fn to_admin_rows_preserves_order() {
    let rows = to_admin_rows(&[json!({ "id": "1" }), json!({ "id": "2" })]);
    let ids: Vec<_> = rows.iter().map(|r| r.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}
