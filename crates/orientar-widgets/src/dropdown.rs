//! Dropdown widget: a single-select listbox trigger with keyboard
//! navigation and outside-click dismissal.
//!
//! The selected value is controlled by the host. The widget mirrors it
//! for display, and reports every committed selection back through a
//! [`DropdownChanged`] message. Keyboard navigation is active only while
//! the panel is open: ArrowDown and ArrowUp cycle the highlight, Enter
//! commits the highlighted option, Escape closes without a commit.

use orientar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A selectable entry: an opaque value plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Opaque identifier reported on selection
    pub value: String,
    /// Display text
    pub label: String,
}

impl DropdownOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Create an option where one string is both value and label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

/// Message emitted when the user commits a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownChanged {
    /// Value of the chosen option
    pub value: String,
    /// Label of the chosen option
    pub label: String,
}

/// Single-select dropdown widget.
#[derive(Serialize, Deserialize)]
pub struct Dropdown {
    /// Available options, in display order
    options: Vec<DropdownOption>,
    /// Host-controlled selected value (None or empty means no selection)
    selected_value: Option<String>,
    /// Text shown when nothing is selected
    placeholder: String,
    /// Whether the option panel is currently open
    #[serde(skip)]
    open: bool,
    /// Highlighted option index, scoped to one open session
    #[serde(skip)]
    highlighted: Option<usize>,
    /// Whether the trigger has keyboard focus
    #[serde(skip)]
    focused: bool,
    /// Whether the widget is disabled
    disabled: bool,
    /// Minimum width
    min_width: f32,
    /// Height of the trigger and of each option row
    item_height: f32,
    /// Background color
    background_color: Color,
    /// Border color
    border_color: Color,
    /// Highlighted row background
    highlight_bg_color: Color,
    /// Selected row background
    selected_bg_color: Color,
    /// Text color
    text_color: Color,
    /// Placeholder text color
    placeholder_color: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds from layout
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown {
    /// Create a new dropdown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            selected_value: None,
            placeholder: "Selecciona una opcion".to_string(),
            open: false,
            highlighted: None,
            focused: false,
            disabled: false,
            min_width: 180.0,
            item_height: 36.0,
            background_color: Color::WHITE,
            border_color: Color::BORDER_GRAY,
            highlight_bg_color: Color::SURFACE,
            selected_bg_color: Color::new(0.9, 0.93, 1.0, 1.0),
            text_color: Color::BLACK,
            placeholder_color: Color::TEXT_GRAY,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, opt: DropdownOption) -> Self {
        self.options.push(opt);
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, opts: impl IntoIterator<Item = DropdownOption>) -> Self {
        self.options.extend(opts);
        self
    }

    /// Set options from bare strings (each string is both value and label).
    #[must_use]
    pub fn options_from_strings(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.options = values.into_iter().map(DropdownOption::simple).collect();
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the controlled value. An empty string means no selection.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.set_value(Some(value.into()));
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(50.0);
        self
    }

    /// Set trigger/row height.
    #[must_use]
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height.max(20.0);
        self
    }

    /// Set background color.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Re-synchronize the controlled value from the host.
    ///
    /// `None` and the empty string both mean no selection.
    pub fn set_value(&mut self, value: Option<String>) {
        self.selected_value = value.filter(|v| !v.is_empty());
    }

    /// Replace the option list.
    ///
    /// A highlight past the end of the new list is cleared so it can
    /// never address a row that no longer exists.
    pub fn set_options(&mut self, options: Vec<DropdownOption>) {
        self.options = options;
        if let Some(i) = self.highlighted {
            if i >= self.options.len() {
                self.highlighted = None;
            }
        }
    }

    /// Replace the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Get the controlled value.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    /// Index of the first option matching the controlled value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.selected_value.as_deref()?;
        self.options.iter().position(|o| o.value == value)
    }

    /// Text shown on the collapsed trigger.
    ///
    /// With a value set, this is the label of the first matching option,
    /// or the raw value when no option matches. Without a value it is
    /// the placeholder.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match &self.selected_value {
            Some(value) => self
                .options
                .iter()
                .find(|o| &o.value == value)
                .map_or(value.as_str(), |o| o.label.as_str()),
            None => &self.placeholder,
        }
    }

    /// Get all options.
    #[must_use]
    pub fn get_options(&self) -> &[DropdownOption] {
        &self.options
    }

    /// Check if the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Currently highlighted option index, if any.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the trigger has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Check if empty (no options).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get option count.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Element id for the option row at `index`.
    ///
    /// Hosts use this both for option list markup and as the
    /// `aria-activedescendant` value while navigating.
    #[must_use]
    pub fn option_id(index: usize) -> String {
        format!("option-{index}")
    }

    /// Whether a key press would be consumed right now.
    ///
    /// The host uses this to suppress default browser behavior (page
    /// scroll, form submit) for keys the widget handles. Only the four
    /// navigation keys are consumed, and only while the panel is open.
    #[must_use]
    pub const fn handles_key(&self, key: Key) -> bool {
        self.open
            && !self.disabled
            && matches!(key, Key::Up | Key::Down | Key::Enter | Key::Escape)
    }

    /// Rect of the collapsed trigger area.
    fn trigger_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.item_height,
        )
    }

    /// Rect of the open option panel.
    fn panel_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.item_height,
            self.bounds.width,
            self.options.len() as f32 * self.item_height,
        )
    }

    /// Rect of the option row at `index`.
    fn item_rect(&self, index: usize) -> Rect {
        let y = (index as f32).mul_add(self.item_height, self.bounds.y + self.item_height);
        Rect::new(self.bounds.x, y, self.bounds.width, self.item_height)
    }

    /// Find the option row at a pointer position (only while open).
    fn item_at_position(&self, position: &Point) -> Option<usize> {
        if !self.open || !self.panel_rect().contains_point(position) {
            return None;
        }

        let relative_y = position.y - (self.bounds.y + self.item_height);
        let index = (relative_y / self.item_height) as usize;
        (index < self.options.len()).then_some(index)
    }

    /// Whether a position lies inside the trigger or the open panel.
    fn contains(&self, position: &Point) -> bool {
        self.trigger_rect().contains_point(position)
            || (self.open && self.panel_rect().contains_point(position))
    }

    /// Move the highlight one step down, wrapping past the end.
    fn highlight_next(&mut self) {
        let n = self.options.len();
        if n == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % n,
            None => 0,
        });
    }

    /// Move the highlight one step up, wrapping past the start.
    fn highlight_prev(&mut self) {
        let n = self.options.len();
        if n == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + n - 1) % n,
            None => n - 1,
        });
    }

    /// Close the panel without committing a selection.
    fn dismiss(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Commit the option at `index`: update the value mirror, close,
    /// and report the change.
    fn commit(&mut self, index: usize) -> Option<Box<dyn Any + Send>> {
        let opt = self.options.get(index)?;
        let value = opt.value.clone();
        let label = opt.label.clone();
        self.selected_value = Some(value.clone());
        self.open = false;
        self.highlighted = None;
        Some(Box::new(DropdownChanged { value, label }))
    }

    fn handle_key(&mut self, key: Key) -> Option<Box<dyn Any + Send>> {
        match key {
            Key::Down => {
                self.highlight_next();
                None
            }
            Key::Up => {
                self.highlight_prev();
                None
            }
            Key::Enter => match self.highlighted {
                Some(index) => self.commit(index),
                None => None,
            },
            Key::Escape => {
                self.dismiss();
                None
            }
            _ => None,
        }
    }
}

impl Widget for Dropdown {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Dropdown"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.min_width, self.item_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let trigger = self.trigger_rect();
        canvas.fill_rect(trigger, self.background_color);
        let border_width = if self.focused { 2.0 } else { 1.0 };
        canvas.stroke_rect(trigger, self.border_color, border_width);

        let text_color = if self.selected_value.is_some() {
            self.text_color
        } else {
            self.placeholder_color
        };
        let text_style = TextStyle {
            color: text_color,
            ..Default::default()
        };
        let text_pos = Point::new(
            trigger.x + 12.0,
            trigger.y + (self.item_height - 16.0) / 2.0,
        );
        canvas.draw_text(self.display_label(), text_pos, &text_style);

        // Caret triangle on the right, pointing down when closed and up
        // when open.
        let caret_x = trigger.x + trigger.width - 22.0;
        let caret_y = trigger.y + self.item_height / 2.0;
        let caret = if self.open {
            [
                Point::new(caret_x, caret_y + 2.5),
                Point::new(caret_x + 10.0, caret_y + 2.5),
                Point::new(caret_x + 5.0, caret_y - 2.5),
            ]
        } else {
            [
                Point::new(caret_x, caret_y - 2.5),
                Point::new(caret_x + 10.0, caret_y - 2.5),
                Point::new(caret_x + 5.0, caret_y + 2.5),
            ]
        };
        canvas.fill_polygon(&caret, self.text_color);

        if self.open && !self.options.is_empty() {
            let panel = self.panel_rect();
            canvas.fill_rect(panel, self.background_color);
            canvas.stroke_rect(panel, self.border_color, 1.0);

            let selected = self.selected_index();
            for (i, opt) in self.options.iter().enumerate() {
                let row = self.item_rect(i);

                let row_bg = if Some(i) == self.highlighted {
                    self.highlight_bg_color
                } else if Some(i) == selected {
                    self.selected_bg_color
                } else {
                    self.background_color
                };
                canvas.fill_rect(row, row_bg);

                let row_style = TextStyle {
                    color: self.text_color,
                    ..Default::default()
                };
                let row_pos = Point::new(row.x + 12.0, row.y + (self.item_height - 16.0) / 2.0);
                canvas.draw_text(&opt.label, row_pos, &row_style);
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseMove { position } => {
                if let Some(index) = self.item_at_position(position) {
                    self.highlighted = Some(index);
                }
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.trigger_rect().contains_point(position) {
                    self.open = !self.open;
                    self.highlighted = None;
                    None
                } else if let Some(index) = self.item_at_position(position) {
                    self.commit(index)
                } else if !self.contains(position) {
                    // Outside pointer-down dismisses regardless of open
                    // state and never fires a change.
                    self.dismiss();
                    None
                } else {
                    None
                }
            }
            Event::KeyDown { key } if self.open => self.handle_key(*key),
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
