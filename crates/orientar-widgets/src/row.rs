//! Row widget for horizontal layout.

use orientar_core::{
    widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Main axis distribution options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MainAxisAlignment {
    /// Pack children at the start
    #[default]
    Start,
    /// Pack children at the end
    End,
    /// Center children
    Center,
    /// Distribute remaining space between children
    SpaceBetween,
    /// Distribute remaining space around children
    SpaceAround,
    /// Distribute remaining space evenly, including edges
    SpaceEvenly,
}

/// Cross axis alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrossAxisAlignment {
    /// Align to the start
    Start,
    /// Align to the end
    End,
    /// Center on the cross axis
    #[default]
    Center,
    /// Stretch to fill the cross axis
    Stretch,
}

/// Computes the starting offset and per-child extra gap for a main axis
/// distribution. `remaining` is the free space after content and gaps.
pub(crate) fn distribute(
    alignment: MainAxisAlignment,
    origin: f32,
    remaining: f32,
    count: usize,
) -> (f32, f32) {
    match alignment {
        MainAxisAlignment::Start => (origin, 0.0),
        MainAxisAlignment::End => (origin + remaining, 0.0),
        MainAxisAlignment::Center => (origin + remaining / 2.0, 0.0),
        MainAxisAlignment::SpaceBetween => {
            if count > 1 {
                (origin, remaining / (count - 1) as f32)
            } else {
                (origin, 0.0)
            }
        }
        MainAxisAlignment::SpaceAround => {
            let share = remaining / count.max(1) as f32;
            (origin + share / 2.0, share)
        }
        MainAxisAlignment::SpaceEvenly => {
            let share = remaining / (count + 1) as f32;
            (origin + share, share)
        }
    }
}

/// Row widget for horizontal layout of children.
#[derive(Serialize, Deserialize)]
pub struct Row {
    /// Main axis (horizontal) alignment
    main_axis_alignment: MainAxisAlignment,
    /// Cross axis (vertical) alignment
    cross_axis_alignment: CrossAxisAlignment,
    /// Gap between children
    gap: f32,
    /// Children widgets
    #[serde(skip)]
    children: Vec<Box<dyn Widget>>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Cached child positions
    #[serde(skip)]
    child_bounds: Vec<Rect>,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            main_axis_alignment: MainAxisAlignment::Start,
            cross_axis_alignment: CrossAxisAlignment::Center,
            gap: 0.0,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::default(),
            child_bounds: Vec::new(),
        }
    }

    /// Set main axis alignment.
    #[must_use]
    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.main_axis_alignment = alignment;
        self
    }

    /// Set cross axis alignment.
    #[must_use]
    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    /// Set gap between children.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Bounds assigned to each child by the last layout.
    #[must_use]
    pub fn child_bounds(&self) -> &[Rect] {
        &self.child_bounds
    }
}

impl Widget for Row {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Row"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }

        let mut total_width = 0.0f32;
        let mut max_height = 0.0f32;

        for (i, child) in self.children.iter().enumerate() {
            let child_constraints = Constraints::new(
                0.0,
                (constraints.max_width - total_width).max(0.0),
                0.0,
                constraints.max_height,
            );
            let child_size = child.measure(child_constraints);
            total_width += child_size.width;
            max_height = max_height.max(child_size.height);

            if i < self.children.len() - 1 {
                total_width += self.gap;
            }
        }

        constraints.constrain(Size::new(total_width, max_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.child_bounds.clear();

        if self.children.is_empty() {
            return LayoutResult { size: Size::ZERO };
        }

        let mut child_sizes: Vec<Size> = Vec::with_capacity(self.children.len());
        let mut total_width = 0.0f32;
        for child in &self.children {
            let size = child.measure(Constraints::loose(bounds.size()));
            total_width += size.width;
            child_sizes.push(size);
        }

        let gaps = self.gap * self.children.len().saturating_sub(1) as f32;
        let remaining = (bounds.width - total_width - gaps).max(0.0);
        let (mut x, extra_gap) = distribute(
            self.main_axis_alignment,
            bounds.x,
            remaining,
            self.children.len(),
        );

        for (child, size) in self.children.iter_mut().zip(child_sizes.iter()) {
            let y = match self.cross_axis_alignment {
                CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => bounds.y,
                CrossAxisAlignment::End => bounds.y + bounds.height - size.height,
                CrossAxisAlignment::Center => bounds.y + (bounds.height - size.height) / 2.0,
            };
            let height = if self.cross_axis_alignment == CrossAxisAlignment::Stretch {
                bounds.height
            } else {
                size.height
            };

            let child_bounds = Rect::new(x, y, size.width, height);
            child.layout(child_bounds);
            self.child_bounds.push(child_bounds);

            x += size.width + self.gap + extra_gap;
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use orientar_core::Widget;

    /// Fixed-size widget used to observe layout decisions.
    pub(crate) struct Probe {
        pub size: Size,
        pub bounds: Rect,
    }

    impl Probe {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                size: Size::new(width, height),
                bounds: Rect::default(),
            }
        }
    }

    impl Widget for Probe {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }

        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(self.size)
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.bounds = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn paint(&self, _canvas: &mut dyn Canvas) {}

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }

        fn children(&self) -> &[Box<dyn Widget>] {
            &[]
        }

        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut []
        }

        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    // ===== Measure Tests =====

    #[test]
    fn test_row_empty() {
        let row = Row::new();
        let size = row.measure(Constraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_row_measure_sums_widths() {
        let row = Row::new()
            .gap(10.0)
            .child(Probe::new(30.0, 20.0))
            .child(Probe::new(50.0, 40.0));
        let size = row.measure(Constraints::loose(Size::new(500.0, 500.0)));
        assert_eq!(size, Size::new(90.0, 40.0));
    }

    // ===== Layout Tests =====

    #[test]
    fn test_row_layout_positions_sequentially() {
        let mut row = Row::new()
            .gap(10.0)
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .child(Probe::new(30.0, 20.0))
            .child(Probe::new(50.0, 20.0));
        row.layout(Rect::new(0.0, 0.0, 500.0, 100.0));

        let bounds = row.child_bounds();
        assert_eq!(bounds[0], Rect::new(0.0, 0.0, 30.0, 20.0));
        assert_eq!(bounds[1], Rect::new(40.0, 0.0, 50.0, 20.0));
    }

    #[test]
    fn test_row_space_between() {
        let mut row = Row::new()
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .child(Probe::new(20.0, 10.0))
            .child(Probe::new(20.0, 10.0))
            .child(Probe::new(20.0, 10.0));
        row.layout(Rect::new(0.0, 0.0, 120.0, 20.0));

        let bounds = row.child_bounds();
        assert!((bounds[0].x - 0.0).abs() < 0.01);
        assert!((bounds[1].x - 50.0).abs() < 0.01);
        assert!((bounds[2].x - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_row_center_alignment() {
        let mut row = Row::new()
            .main_axis_alignment(MainAxisAlignment::Center)
            .child(Probe::new(40.0, 10.0));
        row.layout(Rect::new(0.0, 0.0, 100.0, 20.0));

        assert!((row.child_bounds()[0].x - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_row_cross_axis_stretch() {
        let mut row = Row::new()
            .cross_axis_alignment(CrossAxisAlignment::Stretch)
            .child(Probe::new(40.0, 10.0));
        row.layout(Rect::new(0.0, 0.0, 100.0, 60.0));

        assert!((row.child_bounds()[0].height - 60.0).abs() < 0.01);
    }

    // ===== Builder Tests =====

    #[test]
    fn test_row_builder() {
        let row = Row::new()
            .gap(10.0)
            .main_axis_alignment(MainAxisAlignment::Center)
            .with_test_id("toolbar");
        assert_eq!(row.gap, 10.0);
        assert_eq!(row.main_axis_alignment, MainAxisAlignment::Center);
        assert_eq!(Widget::test_id(&row), Some("toolbar"));
    }

    #[test]
    fn test_row_children_accessors() {
        let mut row = Row::new().child(Probe::new(10.0, 10.0));
        assert_eq!(row.children().len(), 1);
        assert_eq!(row.children_mut().len(), 1);
    }
}
