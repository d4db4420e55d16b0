//! Host-boundary adapter shared by every custom element the library backs.
//!
//! Everything crossing the DOM boundary is normalized here, on the Rust
//! side, so the element code stays a thin shell: option payloads become
//! [`DropdownOption`] records, key codes become [`Key`]s, change messages
//! become [`ChangeDetail`] payloads, and ARIA state is computed as a
//! [`DropdownAria`] snapshot. All of it is plain data, testable without a
//! browser.

use orientar_core::Key;
use orientar_widgets::{Dropdown, DropdownChanged, DropdownOption};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Static description of a custom element: its tag name and the attributes
/// the host document may drive.
///
/// One spec per element type replaces per-widget glue; the element shell
/// reads its tag and observed attribute list from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    /// Tag the element registers under
    pub tag_name: &'static str,
    /// Attributes whose changes re-render the widget
    pub observed_attributes: &'static [&'static str],
}

impl ElementSpec {
    /// The dropdown selector element.
    pub const DROPDOWN: Self = Self {
        tag_name: "orientar-dropdown",
        observed_attributes: &["placeholder", "value"],
    };

    /// Whether this element reacts to changes of `attribute`.
    #[must_use]
    pub fn observes(&self, attribute: &str) -> bool {
        self.observed_attributes.contains(&attribute)
    }
}

/// Map a DOM `KeyboardEvent.code` to a core key.
///
/// Returns `None` for codes the widgets have no use for; printable
/// characters arrive through text input instead.
#[must_use]
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "Enter" => Some(Key::Enter),
        "Escape" => Some(Key::Escape),
        "Backspace" => Some(Key::Backspace),
        "Tab" => Some(Key::Tab),
        "Space" => Some(Key::Space),
        "Delete" => Some(Key::Delete),
        "Home" => Some(Key::Home),
        "End" => Some(Key::End),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        _ => None,
    }
}

/// Error from rejecting an `options` property payload.
///
/// The element setter treats any of these as warn-and-retain: the previous
/// options stay in place and nothing throws into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The payload was not a JSON array
    NotAnArray,
    /// An array entry was neither a string nor a value/label object
    InvalidEntry {
        /// Index of the offending entry
        index: usize,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "options must be an array"),
            Self::InvalidEntry { index } => write!(
                f,
                "option at index {index} is neither a string nor an object with value/label"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Normalize an `options` payload into dropdown option records.
///
/// Accepts an array of strings (value doubles as label) and of objects
/// carrying `value` and/or `label` string fields, in any mix. Anything
/// else is rejected so the caller can keep its prior state.
pub fn normalize_options(value: &Value) -> Result<Vec<DropdownOption>, OptionsError> {
    let entries = value.as_array().ok_or(OptionsError::NotAnArray)?;
    let mut options = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let option = normalize_entry(entry).ok_or(OptionsError::InvalidEntry { index })?;
        options.push(option);
    }
    Ok(options)
}

fn normalize_entry(entry: &Value) -> Option<DropdownOption> {
    match entry {
        Value::String(text) => Some(DropdownOption::simple(text.clone())),
        Value::Object(fields) => {
            let value = fields.get("value").and_then(Value::as_str);
            let label = fields.get("label").and_then(Value::as_str);
            match (value, label) {
                (Some(value), Some(label)) => Some(DropdownOption::new(value, label)),
                // One field present: it stands in for both.
                (Some(only), None) | (None, Some(only)) => Some(DropdownOption::simple(only)),
                (None, None) => None,
            }
        }
        _ => None,
    }
}

/// Payload of the `change` event the dropdown element dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDetail {
    /// Committed option value
    pub value: String,
    /// Display label of the committed option
    pub label: String,
}

impl From<&DropdownChanged> for ChangeDetail {
    fn from(message: &DropdownChanged) -> Self {
        Self {
            value: message.value.clone(),
            label: message.label.clone(),
        }
    }
}

/// ARIA state snapshot for the dropdown's combobox trigger.
///
/// Recomputed after every delivered event; the element shell diffs it
/// onto the host's `aria-*` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownAria {
    /// Whether the option list is showing
    pub expanded: bool,
    /// Element id of the highlighted option row, while navigating
    pub active_descendant: Option<String>,
    /// Index of the committed option, when the value resolves to one
    pub selected_index: Option<usize>,
}

impl DropdownAria {
    /// Snapshot the ARIA-relevant state of a dropdown.
    #[must_use]
    pub fn of(dropdown: &Dropdown) -> Self {
        let active_descendant = if dropdown.is_open() {
            dropdown.highlighted().map(Dropdown::option_id)
        } else {
            None
        };
        Self {
            expanded: dropdown.is_open(),
            active_descendant,
            selected_index: dropdown.selected_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orientar_core::{Event, MouseButton, Point, Rect, Widget};
    use serde_json::json;

    fn open_dropdown() -> Dropdown {
        let mut dropdown = Dropdown::new().options(vec![
            DropdownOption::new("med", "Medicina"),
            DropdownOption::new("ing", "Ingeniería"),
            DropdownOption::new("der", "Derecho"),
        ]);
        dropdown.layout(Rect::new(0.0, 0.0, 240.0, 40.0));
        dropdown.event(&Event::MouseDown {
            position: Point::new(120.0, 20.0),
            button: MouseButton::Left,
        });
        dropdown
    }

    // =========================================================================
    // ElementSpec Tests
    // =========================================================================

    #[test]
    fn test_dropdown_spec_tag_and_attributes() {
        let spec = ElementSpec::DROPDOWN;
        assert_eq!(spec.tag_name, "orientar-dropdown");
        assert!(spec.observes("placeholder"));
        assert!(spec.observes("value"));
        assert!(!spec.observes("options"));
    }

    // =========================================================================
    // Key Mapping Tests
    // =========================================================================

    #[test]
    fn test_key_from_code_navigation() {
        assert_eq!(key_from_code("ArrowUp"), Some(Key::Up));
        assert_eq!(key_from_code("ArrowDown"), Some(Key::Down));
        assert_eq!(key_from_code("Enter"), Some(Key::Enter));
        assert_eq!(key_from_code("Escape"), Some(Key::Escape));
    }

    #[test]
    fn test_key_from_code_editing() {
        assert_eq!(key_from_code("Backspace"), Some(Key::Backspace));
        assert_eq!(key_from_code("Delete"), Some(Key::Delete));
        assert_eq!(key_from_code("Home"), Some(Key::Home));
        assert_eq!(key_from_code("End"), Some(Key::End));
    }

    #[test]
    fn test_key_from_code_unmapped() {
        assert_eq!(key_from_code("KeyA"), None);
        assert_eq!(key_from_code("Digit5"), None);
        assert_eq!(key_from_code("ShiftLeft"), None);
        assert_eq!(key_from_code(""), None);
    }

    // =========================================================================
    // normalize_options Tests
    // =========================================================================

    #[test]
    fn test_normalize_string_entries() {
        let payload = json!(["Medicina", "Ingeniería"]);
        let options = normalize_options(&payload).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "Medicina");
        assert_eq!(options[0].label, "Medicina");
    }

    #[test]
    fn test_normalize_object_entries() {
        let payload = json!([
            { "value": "med", "label": "Medicina" },
            { "value": "ing", "label": "Ingeniería" },
        ]);
        let options = normalize_options(&payload).unwrap();
        assert_eq!(options[0].value, "med");
        assert_eq!(options[0].label, "Medicina");
        assert_eq!(options[1].value, "ing");
    }

    #[test]
    fn test_normalize_mixed_entries() {
        let payload = json!(["Derecho", { "value": "med", "label": "Medicina" }]);
        let options = normalize_options(&payload).unwrap();
        assert_eq!(options[0].value, "Derecho");
        assert_eq!(options[1].value, "med");
    }

    #[test]
    fn test_normalize_single_field_objects() {
        let payload = json!([{ "value": "med" }, { "label": "Derecho" }]);
        let options = normalize_options(&payload).unwrap();
        assert_eq!(options[0].value, "med");
        assert_eq!(options[0].label, "med");
        assert_eq!(options[1].value, "Derecho");
        assert_eq!(options[1].label, "Derecho");
    }

    #[test]
    fn test_normalize_empty_array() {
        let options = normalize_options(&json!([])).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_normalize_rejects_non_array() {
        assert_eq!(
            normalize_options(&json!({ "value": "med" })),
            Err(OptionsError::NotAnArray)
        );
        assert_eq!(normalize_options(&json!("med")), Err(OptionsError::NotAnArray));
        assert_eq!(normalize_options(&json!(null)), Err(OptionsError::NotAnArray));
        assert_eq!(normalize_options(&json!(3)), Err(OptionsError::NotAnArray));
    }

    #[test]
    fn test_normalize_rejects_bad_entry_with_index() {
        let payload = json!(["Medicina", 7, "Derecho"]);
        assert_eq!(
            normalize_options(&payload),
            Err(OptionsError::InvalidEntry { index: 1 })
        );
    }

    #[test]
    fn test_normalize_rejects_empty_object_entry() {
        let payload = json!([{ "weight": 3 }]);
        assert_eq!(
            normalize_options(&payload),
            Err(OptionsError::InvalidEntry { index: 0 })
        );
    }

    #[test]
    fn test_options_error_display() {
        assert_eq!(OptionsError::NotAnArray.to_string(), "options must be an array");
        let entry = OptionsError::InvalidEntry { index: 2 };
        assert!(entry.to_string().contains("index 2"));
    }

    // =========================================================================
    // ChangeDetail Tests
    // =========================================================================

    #[test]
    fn test_change_detail_from_message() {
        let message = DropdownChanged {
            value: "med".to_string(),
            label: "Medicina".to_string(),
        };
        let detail = ChangeDetail::from(&message);
        assert_eq!(detail.value, "med");
        assert_eq!(detail.label, "Medicina");
    }

    #[test]
    fn test_change_detail_serializes_to_event_payload() {
        let detail = ChangeDetail {
            value: "ing".to_string(),
            label: "Ingeniería".to_string(),
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert_eq!(json, r#"{"value":"ing","label":"Ingeniería"}"#);
    }

    // =========================================================================
    // DropdownAria Tests
    // =========================================================================

    #[test]
    fn test_aria_snapshot_closed() {
        let dropdown = Dropdown::new();
        let aria = DropdownAria::of(&dropdown);
        assert!(!aria.expanded);
        assert_eq!(aria.active_descendant, None);
        assert_eq!(aria.selected_index, None);
    }

    #[test]
    fn test_aria_snapshot_open_without_highlight() {
        let dropdown = open_dropdown();
        let aria = DropdownAria::of(&dropdown);
        assert!(aria.expanded);
        assert_eq!(aria.active_descendant, None);
    }

    #[test]
    fn test_aria_snapshot_tracks_highlight() {
        let mut dropdown = open_dropdown();
        dropdown.event(&Event::KeyDown {
            key: orientar_core::Key::Down,
        });
        let aria = DropdownAria::of(&dropdown);
        assert_eq!(aria.active_descendant, Some("option-0".to_string()));
    }

    #[test]
    fn test_aria_snapshot_selected_index() {
        let mut dropdown = open_dropdown();
        dropdown.set_value(Some("ing".to_string()));
        let aria = DropdownAria::of(&dropdown);
        assert_eq!(aria.selected_index, Some(1));
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_string_arrays_normalize_losslessly(
                entries in proptest::collection::vec("[a-zA-Z áéíó]{1,20}", 0..12)
            ) {
                let payload = serde_json::to_value(&entries).unwrap();
                let options = normalize_options(&payload).unwrap();
                prop_assert_eq!(options.len(), entries.len());
                for (option, entry) in options.iter().zip(&entries) {
                    prop_assert_eq!(&option.value, entry);
                    prop_assert_eq!(&option.label, entry);
                }
            }

            #[test]
            fn prop_non_array_scalars_always_rejected(flag in any::<bool>(), n in any::<i64>()) {
                prop_assert_eq!(
                    normalize_options(&serde_json::json!(flag)),
                    Err(OptionsError::NotAnArray)
                );
                prop_assert_eq!(
                    normalize_options(&serde_json::json!(n)),
                    Err(OptionsError::NotAnArray)
                );
            }
        }
    }
}
