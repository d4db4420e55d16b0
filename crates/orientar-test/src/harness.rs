//! Test harness driving widget trees through the real event path.
//!
//! The harness lays the root out against a viewport, so clicks land at the
//! widget's actual painted bounds and messages surface exactly as a host
//! application would see them.

use orientar_core::{Constraints, Event, Key, MouseButton, Point, Rect, Size, Widget};
use std::any::Any;
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness for interacting with Orientar widgets.
///
/// The root widget keeps its concrete type, so tests can assert on its
/// state accessors after simulated interaction:
///
/// ```
/// use orientar_test::Harness;
/// use orientar_widgets::{Dropdown, DropdownOption};
///
/// let dropdown = Dropdown::new()
///     .option(DropdownOption::new("med", "Medicina"))
///     .with_test_id("career");
/// let mut harness = Harness::new(dropdown);
/// harness.click("[data-testid='career']");
/// assert!(harness.root().is_open());
/// ```
pub struct Harness<W: Widget> {
    /// Root widget being tested
    root: W,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages the root emitted while processing events
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Size,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness with a root widget, laid out against a
    /// 1280x720 viewport.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Size::new(1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the tree out again.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self.relayout();
        self
    }

    /// Borrow the root widget.
    pub const fn root(&self) -> &W {
        &self.root
    }

    /// Borrow the root widget mutably. Callers that change layout-relevant
    /// state should follow up with [`Harness::relayout`].
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Measure and lay out the root against the current viewport.
    pub fn relayout(&mut self) {
        let size = self.root.measure(Constraints::loose(self.viewport));
        self.root.layout(Rect::new(0.0, 0.0, size.width, size.height));
    }

    // === Event Simulation ===

    /// Simulate a click on the widget matching the selector.
    ///
    /// The pointer moves to the widget's laid-out center, presses, and
    /// releases. Does nothing when no widget matches.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            self.click_at(bounds.center());
        }
        self
    }

    /// Simulate a click at an exact position.
    ///
    /// Useful for regions that are not widgets of their own, like the
    /// option rows of an open dropdown.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Move the pointer to a position without pressing.
    pub fn move_mouse(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.process_events();
        self
    }

    /// Simulate typing text into the widget matching the selector.
    ///
    /// Clicks the widget first, so focus arrives the way a user's pointer
    /// would deliver it, then feeds one `TextInput` per character.
    pub fn type_text(&mut self, selector: &str, text: &str) -> &mut Self {
        if self.query_bounds(selector).is_some() {
            self.click(selector);
            for c in text.chars() {
                self.event_queue.push_back(Event::TextInput {
                    text: c.to_string(),
                });
            }
            self.process_events();
        }
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Simulate scrolling over the widget matching the selector.
    pub fn scroll(&mut self, selector: &str, delta: f32) -> &mut Self {
        if self.query(selector).is_some() {
            self.event_queue.push_back(Event::Scroll {
                delta_x: 0.0,
                delta_y: delta,
            });
            self.process_events();
        }
        self
    }

    // === Messages ===

    /// Most recent message of type `T`, if the root emitted one.
    #[must_use]
    pub fn last_message<T: 'static>(&self) -> Option<&T> {
        self.messages.iter().rev().find_map(|m| m.downcast_ref::<T>())
    }

    /// All messages of type `T`, oldest first.
    #[must_use]
    pub fn messages_of<T: 'static>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .collect()
    }

    /// Take all collected messages, clearing the buffer.
    pub fn take_messages(&mut self) -> Vec<Box<dyn Any + Send>> {
        std::mem::take(&mut self.messages)
    }

    // === Queries ===

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(&self.root, &sel)
    }

    /// Query for all widgets matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all_widgets(&self.root, &sel, &mut results);
        results
    }

    /// Laid-out bounds of the widget matching the selector.
    #[must_use]
    pub fn query_bounds(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(Widget::bounds)
    }

    /// Get the accessible text of the widget matching the selector.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        if let Some(widget) = self.query(selector) {
            if let Some(name) = widget.accessible_name() {
                return name.to_string();
            }
        }
        String::new()
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that accessible text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert that accessible text contains a substring.
    ///
    /// # Panics
    ///
    /// Panics if the text does not contain the substring.
    pub fn assert_text_contains(&self, selector: &str, substring: &str) -> &Self {
        let actual = self.text(selector);
        assert!(
            actual.contains(substring),
            "Expected text for '{selector}' to contain '{substring}' but got '{actual}'"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }

    for child in widget.children() {
        if let Some(found) = find_widget(child.as_ref(), selector) {
            return Some(found);
        }
    }

    None
}

fn find_all_widgets<'a>(
    widget: &'a dyn Widget,
    selector: &Selector,
    results: &mut Vec<&'a dyn Widget>,
) {
    if selector.matches(widget) {
        results.push(widget);
    }

    for child in widget.children() {
        find_all_widgets(child.as_ref(), selector, results);
    }
}
