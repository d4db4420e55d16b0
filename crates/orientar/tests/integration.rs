//! Integration tests for the Orientar bridge crate.
//!
//! These run natively: option normalization, key mapping, and ARIA
//! projection are exercised together with the widgets and the test
//! harness, covering the host-to-widget path short of the DOM itself.

use orientar::widgets::{Column, Dropdown, DropdownChanged, Typography};
use orientar::{
    key_from_code, normalize_options, ChangeDetail, DropdownAria, Key, OptionsError, Point,
};
use orientar_test::{A11yChecker, Harness};

#[test]
fn test_options_json_to_selection_change() {
    // The same mixed payload a host would pass to setOptions.
    let payload: serde_json::Value = serde_json::from_str(
        r#"["Derecho", {"value": "med", "label": "Medicina"}, {"value": "ing"}]"#,
    )
    .unwrap();
    let options = normalize_options(&payload).unwrap();

    let mut harness = Harness::new(
        Dropdown::new()
            .options(options)
            .placeholder("Selecciona una carrera")
            .with_test_id("career"),
    );

    harness.click("#career");
    assert!(harness.root().is_open());

    // Rows start below the 36px trigger; row 1 is "Medicina".
    harness.click_at(Point::new(90.0, 90.0));
    let change = harness.last_message::<DropdownChanged>().unwrap();
    assert_eq!(change.value, "med");
    assert_eq!(change.label, "Medicina");
    assert!(!harness.root().is_open());
}

#[test]
fn test_change_detail_matches_wire_format() {
    let change = DropdownChanged {
        value: "med".to_string(),
        label: "Medicina".to_string(),
    };
    let detail = ChangeDetail::from(&change);
    let json = serde_json::to_string(&detail).unwrap();
    assert_eq!(json, r#"{"value":"med","label":"Medicina"}"#);
}

#[test]
fn test_keyboard_flow_via_key_codes() {
    let mut harness = Harness::new(
        Dropdown::new()
            .options_from_strings(["Bogota", "Medellin", "Cali"])
            .with_test_id("campus"),
    );
    harness.click("#campus");

    // Browser key codes, as the keydown listener receives them.
    for code in ["ArrowDown", "ArrowDown", "Enter"] {
        let key = key_from_code(code).unwrap();
        harness.press_key(key);
    }

    let change = harness.last_message::<DropdownChanged>().unwrap();
    assert_eq!(change.value, "Medellin");
    assert!(!harness.root().is_open());
}

#[test]
fn test_escape_code_closes_without_change() {
    let mut harness = Harness::new(
        Dropdown::new()
            .options_from_strings(["Bogota", "Medellin"])
            .value("Bogota")
            .with_test_id("campus"),
    );
    harness.click("#campus");
    harness.press_key(key_from_code("Escape").unwrap());

    assert!(!harness.root().is_open());
    assert!(harness.last_message::<DropdownChanged>().is_none());
    assert_eq!(harness.root().selected_value(), Some("Bogota"));
}

#[test]
fn test_unknown_key_codes_have_no_binding() {
    assert_eq!(key_from_code("KeyA"), None);
    assert_eq!(key_from_code("F5"), None);
    assert_eq!(key_from_code("ArrowUp"), Some(Key::Up));
}

#[test]
fn test_aria_projection_tracks_widget_state() {
    let mut harness = Harness::new(
        Dropdown::new()
            .options_from_strings(["A", "B"])
            .with_test_id("dd"),
    );

    let aria = DropdownAria::of(harness.root());
    assert!(!aria.expanded);
    assert_eq!(aria.active_descendant, None);

    harness.click("#dd");
    harness.press_key(Key::Down);

    let aria = DropdownAria::of(harness.root());
    assert!(aria.expanded);
    assert_eq!(aria.active_descendant.as_deref(), Some("option-0"));

    harness.press_key(Key::Escape);
    let aria = DropdownAria::of(harness.root());
    assert!(!aria.expanded);
    assert_eq!(aria.active_descendant, None);
}

#[test]
fn test_malformed_options_are_rejected_whole() {
    let err = normalize_options(&serde_json::json!([{"value": 1}])).unwrap_err();
    assert!(matches!(err, OptionsError::InvalidEntry { index: 0 }));

    let err = normalize_options(&serde_json::json!("not an array")).unwrap_err();
    assert!(matches!(err, OptionsError::NotAnArray));
}

#[test]
fn test_set_options_replaces_rows_live() {
    let mut harness = Harness::new(
        Dropdown::new()
            .options_from_strings(["Old"])
            .with_test_id("dd"),
    );

    let payload = serde_json::json!(["Quimica", "Fisica"]);
    harness
        .root_mut()
        .set_options(normalize_options(&payload).unwrap());
    harness.relayout();

    harness.click("#dd");
    harness.click_at(Point::new(90.0, 90.0));
    let change = harness.last_message::<DropdownChanged>().unwrap();
    assert_eq!(change.value, "Fisica");
}

#[test]
fn test_outside_press_dismisses_open_panel() {
    let mut harness = Harness::new(
        Dropdown::new()
            .options_from_strings(["A"])
            .with_test_id("dd"),
    );
    harness.click("#dd");
    assert!(harness.root().is_open());

    // The element bridge reports document-level presses outside the
    // host as a press at (-1, -1).
    harness.click_at(Point::new(-1.0, -1.0));
    assert!(!harness.root().is_open());
    assert!(harness.last_message::<DropdownChanged>().is_none());
}

#[test]
fn test_page_composition_passes_a11y() {
    let page = Column::new()
        .gap(24.0)
        .child(Typography::heading(1, "Explora carreras"))
        .child(
            Dropdown::new()
                .options_from_strings(["Medicina", "Derecho"])
                .with_accessible_name("Carrera"),
        );

    let report = A11yChecker::check(&page);
    assert!(report.is_passing(), "violations: {:?}", report.violations);
}
