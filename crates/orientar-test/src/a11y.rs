//! Accessibility checking for WCAG 2.1 compliance.
//!
//! Covers the criteria the component set can violate:
//! - Color contrast (1.4.3, 1.4.6)
//! - Keyboard accessibility (2.1.1)
//! - Touch target size (2.5.5)
//! - Name/role/value (4.1.2)
//! - Image alternatives (1.1.1)
//!
//! Also generates ARIA attribute sets from widget state, including the
//! combobox/listbox trigger pattern the dropdown follows.

use orientar_core::widget::AccessibleRole;
use orientar_core::{Color, Widget};
use orientar_widgets::Dropdown;

/// Minimum touch target size in pixels (WCAG 2.5.5)
pub const MIN_TOUCH_TARGET_SIZE: f32 = 44.0;

/// ARIA role string for an accessible role. `None` for generic elements,
/// which take no role attribute.
#[must_use]
pub const fn role_name(role: AccessibleRole) -> Option<&'static str> {
    match role {
        AccessibleRole::Generic => None,
        AccessibleRole::Button => Some("button"),
        AccessibleRole::TextInput => Some("textbox"),
        AccessibleRole::Link => Some("link"),
        AccessibleRole::Heading => Some("heading"),
        AccessibleRole::Image => Some("img"),
        AccessibleRole::List => Some("list"),
        AccessibleRole::ListItem => Some("listitem"),
        AccessibleRole::ComboBox => Some("combobox"),
        AccessibleRole::Navigation => Some("navigation"),
        AccessibleRole::Banner => Some("banner"),
        AccessibleRole::ContentInfo => Some("contentinfo"),
        AccessibleRole::Group => Some("group"),
    }
}

/// Accessibility checker.
pub struct A11yChecker;

impl A11yChecker {
    /// Check a widget tree for accessibility violations.
    ///
    /// Covers name, keyboard, and image-alternative rules; these hold
    /// whether or not the tree has been laid out.
    #[must_use]
    pub fn check(widget: &dyn Widget) -> A11yReport {
        let mut violations = Vec::new();
        Self::check_widget(widget, &mut violations);
        A11yReport { violations }
    }

    /// Check a laid-out widget tree for undersized touch targets
    /// (WCAG 2.5.5).
    #[must_use]
    pub fn check_touch_targets(widget: &dyn Widget) -> A11yReport {
        let mut violations = Vec::new();
        Self::check_widget_touch(widget, &mut violations);
        A11yReport { violations }
    }

    fn check_widget(widget: &dyn Widget, violations: &mut Vec<A11yViolation>) {
        // Missing accessible name on interactive elements (WCAG 4.1.2)
        if widget.is_interactive() && widget.accessible_name().is_none() {
            violations.push(A11yViolation {
                rule: "aria-label",
                message: "Interactive element missing accessible name".to_string(),
                wcag: "4.1.2",
                impact: Impact::Critical,
            });
        }

        // Keyboard reachability (WCAG 2.1.1)
        if widget.is_interactive() && !widget.is_focusable() {
            violations.push(A11yViolation {
                rule: "keyboard",
                message: "Interactive element is not keyboard focusable".to_string(),
                wcag: "2.1.1",
                impact: Impact::Critical,
            });
        }

        // Images without alternative text (WCAG 1.1.1)
        if widget.accessible_role() == AccessibleRole::Image && widget.accessible_name().is_none() {
            violations.push(A11yViolation {
                rule: "image-alt",
                message: "Image missing alternative text".to_string(),
                wcag: "1.1.1",
                impact: Impact::Critical,
            });
        }

        for child in widget.children() {
            Self::check_widget(child.as_ref(), violations);
        }
    }

    fn check_widget_touch(widget: &dyn Widget, violations: &mut Vec<A11yViolation>) {
        if widget.is_interactive() {
            let bounds = widget.bounds();
            if bounds.width < MIN_TOUCH_TARGET_SIZE || bounds.height < MIN_TOUCH_TARGET_SIZE {
                violations.push(A11yViolation {
                    rule: "touch-target",
                    message: format!(
                        "Touch target too small: {}x{} (minimum {}x{})",
                        bounds.width, bounds.height, MIN_TOUCH_TARGET_SIZE, MIN_TOUCH_TARGET_SIZE
                    ),
                    wcag: "2.5.5",
                    impact: Impact::Moderate,
                });
            }
        }

        for child in widget.children() {
            Self::check_widget_touch(child.as_ref(), violations);
        }
    }

    /// Check contrast ratio between foreground and background colors.
    #[must_use]
    pub fn check_contrast(
        foreground: &Color,
        background: &Color,
        large_text: bool,
    ) -> ContrastResult {
        let ratio = foreground.contrast_ratio(background);

        // WCAG 2.1 thresholds
        let (aa_threshold, aaa_threshold) = if large_text {
            (3.0, 4.5) // Large text (14pt bold or 18pt regular)
        } else {
            (4.5, 7.0) // Normal text
        };

        ContrastResult {
            ratio,
            passes_aa: ratio >= aa_threshold,
            passes_aaa: ratio >= aaa_threshold,
        }
    }
}

/// Accessibility report.
#[derive(Debug)]
pub struct A11yReport {
    /// List of violations found
    pub violations: Vec<A11yViolation>,
}

impl A11yReport {
    /// Check if all accessibility tests passed.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get critical violations only.
    #[must_use]
    pub fn critical(&self) -> Vec<&A11yViolation> {
        self.violations
            .iter()
            .filter(|v| v.impact == Impact::Critical)
            .collect()
    }

    /// Assert that all accessibility tests pass.
    ///
    /// # Panics
    ///
    /// Panics if there are any violations.
    pub fn assert_pass(&self) {
        if !self.is_passing() {
            let messages: Vec<String> = self
                .violations
                .iter()
                .map(|v| {
                    format!(
                        "  [{:?}] {}: {} (WCAG {})",
                        v.impact, v.rule, v.message, v.wcag
                    )
                })
                .collect();

            panic!(
                "Accessibility check failed with {} violation(s):\n{}",
                self.violations.len(),
                messages.join("\n")
            );
        }
    }
}

/// A single accessibility violation.
#[derive(Debug, Clone)]
pub struct A11yViolation {
    /// Rule that was violated
    pub rule: &'static str,
    /// Human-readable message
    pub message: String,
    /// WCAG success criterion
    pub wcag: &'static str,
    /// Impact level
    pub impact: Impact,
}

/// Impact level of an accessibility violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Minor issue
    Minor,
    /// Moderate issue
    Moderate,
    /// Serious issue
    Serious,
    /// Critical issue - must fix
    Critical,
}

/// Result of a contrast check.
#[derive(Debug, Clone)]
pub struct ContrastResult {
    /// Calculated contrast ratio
    pub ratio: f32,
    /// Passes WCAG AA
    pub passes_aa: bool,
    /// Passes WCAG AAA
    pub passes_aaa: bool,
}

// =============================================================================
// ARIA Attribute Generation
// =============================================================================

/// ARIA attributes for a widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AriaAttributes {
    /// The ARIA role
    pub role: Option<String>,
    /// Accessible label
    pub label: Option<String>,
    /// Whether element is expanded (for expandable elements)
    pub expanded: Option<bool>,
    /// Whether element is selected
    pub selected: Option<bool>,
    /// Has popup indicator (e.g. `listbox`)
    pub has_popup: Option<String>,
    /// Id of the active descendant while navigating a popup
    pub active_descendant: Option<String>,
    /// Controls another element (id reference)
    pub controls: Option<String>,
    /// Whether element is disabled
    pub disabled: bool,
    /// Whether element is hidden from the accessibility tree
    pub hidden: bool,
}

impl AriaAttributes {
    /// Create new empty ARIA attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set expanded state.
    #[must_use]
    pub const fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    /// Set selected state.
    #[must_use]
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Set has popup.
    #[must_use]
    pub fn with_has_popup(mut self, has_popup: impl Into<String>) -> Self {
        self.has_popup = Some(has_popup.into());
        self
    }

    /// Set the active descendant id.
    #[must_use]
    pub fn with_active_descendant(mut self, id: impl Into<String>) -> Self {
        self.active_descendant = Some(id.into());
        self
    }

    /// Set controls reference.
    #[must_use]
    pub fn with_controls(mut self, controls: impl Into<String>) -> Self {
        self.controls = Some(controls.into());
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set hidden.
    #[must_use]
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Generate HTML ARIA attributes.
    #[must_use]
    pub fn to_html_attrs(&self) -> Vec<(String, String)> {
        let mut attrs = Vec::new();

        if let Some(ref role) = self.role {
            attrs.push(("role".to_string(), role.clone()));
        }
        if let Some(ref label) = self.label {
            attrs.push(("aria-label".to_string(), label.clone()));
        }
        if let Some(expanded) = self.expanded {
            attrs.push(("aria-expanded".to_string(), expanded.to_string()));
        }
        if let Some(selected) = self.selected {
            attrs.push(("aria-selected".to_string(), selected.to_string()));
        }
        if let Some(ref popup) = self.has_popup {
            attrs.push(("aria-haspopup".to_string(), popup.clone()));
        }
        if let Some(ref id) = self.active_descendant {
            attrs.push(("aria-activedescendant".to_string(), id.clone()));
        }
        if let Some(ref controls) = self.controls {
            attrs.push(("aria-controls".to_string(), controls.clone()));
        }
        if self.disabled {
            attrs.push(("aria-disabled".to_string(), "true".to_string()));
        }
        if self.hidden {
            attrs.push(("aria-hidden".to_string(), "true".to_string()));
        }

        attrs
    }

    /// Generate HTML attribute string.
    #[must_use]
    pub fn to_html_string(&self) -> String {
        self.to_html_attrs()
            .into_iter()
            .map(|(k, v)| {
                // Escape HTML special characters in values
                let escaped = v
                    .replace('&', "&amp;")
                    .replace('"', "&quot;")
                    .replace('<', "&lt;")
                    .replace('>', "&gt;");
                format!("{k}=\"{escaped}\"")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Generate ARIA attributes from a widget.
#[must_use]
pub fn aria_from_widget(widget: &dyn Widget) -> AriaAttributes {
    let role = widget.accessible_role();
    let mut attrs = AriaAttributes::new();

    if let Some(name) = role_name(role) {
        attrs.role = Some(name.to_string());
    }

    if let Some(name) = widget.accessible_name() {
        attrs.label = Some(name.to_string());
    }

    if role == AccessibleRole::ComboBox {
        attrs.has_popup = Some("listbox".to_string());
    }

    // Control roles that cannot be interacted with surface as disabled.
    let is_control = matches!(
        role,
        AccessibleRole::Button
            | AccessibleRole::TextInput
            | AccessibleRole::ComboBox
            | AccessibleRole::Link
    );
    if is_control && !widget.is_interactive() {
        attrs.disabled = true;
    }

    attrs
}

/// Generate the full combobox-trigger attribute set for a dropdown.
///
/// Follows the WAI-ARIA listbox pattern: `aria-expanded` mirrors the open
/// panel, and `aria-activedescendant` points at the highlighted option row
/// while keyboard navigation is underway.
#[must_use]
pub fn aria_for_dropdown(dropdown: &Dropdown) -> AriaAttributes {
    let mut attrs = aria_from_widget(dropdown);
    attrs.expanded = Some(dropdown.is_open());

    if dropdown.is_open() {
        if let Some(index) = dropdown.highlighted() {
            attrs.active_descendant = Some(Dropdown::option_id(index));
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use orientar_core::{Event, Key, MouseButton, Point, Rect};
    use orientar_widgets::{Button, ButtonPriority, Card, DropdownOption, Image, Typography};

    fn open_dropdown() -> Dropdown {
        let mut dropdown = Dropdown::new()
            .options(vec![
                DropdownOption::new("med", "Medicina"),
                DropdownOption::new("ing", "Ingeniería"),
            ])
            .with_accessible_name("Carrera");
        dropdown.layout(Rect::new(0.0, 0.0, 240.0, 40.0));
        dropdown.event(&Event::MouseDown {
            position: Point::new(120.0, 20.0),
            button: MouseButton::Left,
        });
        dropdown
    }

    // =========================================================================
    // Checker Tests
    // =========================================================================

    #[test]
    fn test_check_passing() {
        let widget = Dropdown::new().with_accessible_name("Carrera");
        let report = A11yChecker::check(&widget);
        assert!(report.is_passing());
    }

    #[test]
    fn test_check_missing_name() {
        let widget = Dropdown::new();
        let report = A11yChecker::check(&widget);
        assert!(!report.is_passing());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, "aria-label");
        assert_eq!(report.violations[0].wcag, "4.1.2");
    }

    #[test]
    fn test_check_card_action_not_keyboard_reachable() {
        let card = Card::new("Medicina", "Seis años").action("Ver más", ButtonPriority::Primary);
        let report = A11yChecker::check(&card);
        assert!(report.violations.iter().any(|v| v.rule == "keyboard"));
        assert!(!report.critical().is_empty());
    }

    #[test]
    fn test_check_image_without_alt() {
        let image = Image::new("campus.jpg");
        let report = A11yChecker::check(&image);
        assert!(report.violations.iter().any(|v| v.rule == "image-alt"));
    }

    #[test]
    fn test_check_image_with_alt_passes() {
        let image = Image::new("campus.jpg").alt("Estudiantes en el campus");
        let report = A11yChecker::check(&image);
        assert!(report.is_passing());
    }

    #[test]
    fn test_touch_target_too_small() {
        let mut button = Button::new("Entrar");
        button.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
        let report = A11yChecker::check_touch_targets(&button);
        assert!(report.violations.iter().any(|v| v.rule == "touch-target"));
        assert_eq!(report.violations[0].impact, Impact::Moderate);
    }

    #[test]
    fn test_touch_target_large_enough() {
        let mut button = Button::new("Entrar");
        button.layout(Rect::new(0.0, 0.0, 120.0, 48.0));
        let report = A11yChecker::check_touch_targets(&button);
        assert!(report.is_passing());
    }

    #[test]
    #[should_panic(expected = "Accessibility check failed")]
    fn test_assert_pass_fails() {
        let widget = Dropdown::new();
        A11yChecker::check(&widget).assert_pass();
    }

    // =========================================================================
    // Contrast Tests
    // =========================================================================

    #[test]
    fn test_contrast_black_white() {
        let result = A11yChecker::check_contrast(&Color::BLACK, &Color::WHITE, false);
        assert!(result.passes_aa);
        assert!(result.passes_aaa);
        assert!((result.ratio - 21.0).abs() < 0.5);
    }

    #[test]
    fn test_contrast_brand_navy_on_white() {
        let result = A11yChecker::check_contrast(&Color::NAVY, &Color::WHITE, false);
        assert!(result.passes_aa);
        assert!(result.passes_aaa);
    }

    #[test]
    fn test_contrast_secondary_text_aa_only() {
        let result = A11yChecker::check_contrast(&Color::TEXT_GRAY, &Color::WHITE, false);
        assert!(result.passes_aa);
        assert!(!result.passes_aaa);
    }

    #[test]
    fn test_contrast_border_gray_fails_for_text() {
        let result = A11yChecker::check_contrast(&Color::BORDER_GRAY, &Color::WHITE, false);
        assert!(!result.passes_aa);
    }

    #[test]
    fn test_contrast_large_text_threshold() {
        let normal = A11yChecker::check_contrast(&Color::TEXT_GRAY, &Color::WHITE, false);
        let large = A11yChecker::check_contrast(&Color::TEXT_GRAY, &Color::WHITE, true);
        assert_eq!(normal.ratio, large.ratio);
        assert!(large.passes_aaa);
    }

    // =========================================================================
    // Role Name Tests
    // =========================================================================

    #[test]
    fn test_role_name_mapping() {
        assert_eq!(role_name(AccessibleRole::Generic), None);
        assert_eq!(role_name(AccessibleRole::ComboBox), Some("combobox"));
        assert_eq!(role_name(AccessibleRole::Banner), Some("banner"));
        assert_eq!(role_name(AccessibleRole::ContentInfo), Some("contentinfo"));
    }

    // =========================================================================
    // AriaAttributes Tests
    // =========================================================================

    #[test]
    fn test_aria_attributes_builder() {
        let attrs = AriaAttributes::new()
            .with_role("combobox")
            .with_label("Carrera")
            .with_expanded(true)
            .with_has_popup("listbox")
            .with_active_descendant("option-1");

        assert_eq!(attrs.role, Some("combobox".to_string()));
        assert_eq!(attrs.label, Some("Carrera".to_string()));
        assert_eq!(attrs.expanded, Some(true));
        assert_eq!(attrs.has_popup, Some("listbox".to_string()));
        assert_eq!(attrs.active_descendant, Some("option-1".to_string()));
    }

    #[test]
    fn test_to_html_attrs_empty() {
        assert!(AriaAttributes::new().to_html_attrs().is_empty());
    }

    #[test]
    fn test_to_html_attrs_combobox_trigger() {
        let attrs = AriaAttributes::new()
            .with_role("combobox")
            .with_expanded(false)
            .with_has_popup("listbox");
        let html_attrs = attrs.to_html_attrs();
        assert_eq!(html_attrs.len(), 3);
        assert!(html_attrs.contains(&("role".to_string(), "combobox".to_string())));
        assert!(html_attrs.contains(&("aria-expanded".to_string(), "false".to_string())));
        assert!(html_attrs.contains(&("aria-haspopup".to_string(), "listbox".to_string())));
    }

    #[test]
    fn test_to_html_attrs_active_descendant() {
        let attrs = AriaAttributes::new().with_active_descendant("option-2");
        assert_eq!(
            attrs.to_html_attrs(),
            vec![("aria-activedescendant".to_string(), "option-2".to_string())]
        );
    }

    #[test]
    fn test_to_html_attrs_disabled_and_hidden() {
        let attrs = AriaAttributes::new().with_disabled(true).with_hidden(true);
        let html_attrs = attrs.to_html_attrs();
        assert!(html_attrs.contains(&("aria-disabled".to_string(), "true".to_string())));
        assert!(html_attrs.contains(&("aria-hidden".to_string(), "true".to_string())));
    }

    #[test]
    fn test_to_html_string_escapes_quotes() {
        let attrs = AriaAttributes::new().with_label("Elige \"carrera\"");
        let html = attrs.to_html_string();
        assert!(html.contains("aria-label=\"Elige &quot;carrera&quot;\""));
    }

    #[test]
    fn test_to_html_string_multiple() {
        let attrs = AriaAttributes::new()
            .with_role("combobox")
            .with_expanded(true);
        let html = attrs.to_html_string();
        assert!(html.contains("role=\"combobox\""));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    // =========================================================================
    // aria_from_widget Tests
    // =========================================================================

    #[test]
    fn test_aria_from_button() {
        let button = Button::new("Entrar");
        let attrs = aria_from_widget(&button);
        assert_eq!(attrs.role, Some("button".to_string()));
        assert_eq!(attrs.label, Some("Entrar".to_string()));
        assert!(!attrs.disabled);
    }

    #[test]
    fn test_aria_from_disabled_dropdown() {
        let dropdown = Dropdown::new()
            .with_accessible_name("Carrera")
            .disabled(true);
        let attrs = aria_from_widget(&dropdown);
        assert_eq!(attrs.role, Some("combobox".to_string()));
        assert_eq!(attrs.has_popup, Some("listbox".to_string()));
        assert!(attrs.disabled);
    }

    #[test]
    fn test_aria_from_heading_not_disabled() {
        let heading = Typography::heading(2, "Explora carreras");
        let attrs = aria_from_widget(&heading);
        assert_eq!(attrs.role, Some("heading".to_string()));
        assert!(!attrs.disabled);
    }

    #[test]
    fn test_aria_from_generic_widget_has_no_role() {
        let body = Typography::new("Un texto cualquiera");
        let attrs = aria_from_widget(&body);
        assert_eq!(attrs.role, None);
    }

    // =========================================================================
    // aria_for_dropdown Tests
    // =========================================================================

    #[test]
    fn test_aria_for_closed_dropdown() {
        let dropdown = Dropdown::new().with_accessible_name("Carrera");
        let attrs = aria_for_dropdown(&dropdown);
        assert_eq!(attrs.role, Some("combobox".to_string()));
        assert_eq!(attrs.label, Some("Carrera".to_string()));
        assert_eq!(attrs.expanded, Some(false));
        assert_eq!(attrs.active_descendant, None);
    }

    #[test]
    fn test_aria_for_open_dropdown_without_highlight() {
        let dropdown = open_dropdown();
        let attrs = aria_for_dropdown(&dropdown);
        assert_eq!(attrs.expanded, Some(true));
        assert_eq!(attrs.active_descendant, None);
    }

    #[test]
    fn test_aria_for_open_dropdown_tracks_highlight() {
        let mut dropdown = open_dropdown();
        dropdown.event(&Event::KeyDown { key: Key::Down });
        dropdown.event(&Event::KeyDown { key: Key::Down });

        let attrs = aria_for_dropdown(&dropdown);
        assert_eq!(attrs.active_descendant, Some("option-1".to_string()));
        assert_eq!(attrs.active_descendant.as_deref(), Some(Dropdown::option_id(1).as_str()));
    }
}
