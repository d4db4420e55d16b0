//! Column widget for vertical layout.

use orientar_core::{
    widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::row::{distribute, CrossAxisAlignment, MainAxisAlignment};

/// Column widget for vertical layout of children.
#[derive(Serialize, Deserialize)]
pub struct Column {
    /// Main axis (vertical) alignment
    main_axis_alignment: MainAxisAlignment,
    /// Cross axis (horizontal) alignment
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

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Column {
    /// Create a new empty column.
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

impl Widget for Column {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Column"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }

        let mut max_width = 0.0f32;
        let mut total_height = 0.0f32;

        for (i, child) in self.children.iter().enumerate() {
            let child_constraints = Constraints::new(
                0.0,
                constraints.max_width,
                0.0,
                (constraints.max_height - total_height).max(0.0),
            );
            let child_size = child.measure(child_constraints);
            max_width = max_width.max(child_size.width);
            total_height += child_size.height;

            if i < self.children.len() - 1 {
                total_height += self.gap;
            }
        }

        constraints.constrain(Size::new(max_width, total_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.child_bounds.clear();

        if self.children.is_empty() {
            return LayoutResult { size: Size::ZERO };
        }

        let mut child_sizes: Vec<Size> = Vec::with_capacity(self.children.len());
        let mut total_height = 0.0f32;
        for child in &self.children {
            let size = child.measure(Constraints::loose(bounds.size()));
            total_height += size.height;
            child_sizes.push(size);
        }

        let gaps = self.gap * self.children.len().saturating_sub(1) as f32;
        let remaining = (bounds.height - total_height - gaps).max(0.0);
        let (mut y, extra_gap) = distribute(
            self.main_axis_alignment,
            bounds.y,
            remaining,
            self.children.len(),
        );

        for (child, size) in self.children.iter_mut().zip(child_sizes.iter()) {
            let x = match self.cross_axis_alignment {
                CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => bounds.x,
                CrossAxisAlignment::End => bounds.x + bounds.width - size.width,
                CrossAxisAlignment::Center => bounds.x + (bounds.width - size.width) / 2.0,
            };
            let width = if self.cross_axis_alignment == CrossAxisAlignment::Stretch {
                bounds.width
            } else {
                size.width
            };

            let child_bounds = Rect::new(x, y, width, size.height);
            child.layout(child_bounds);
            self.child_bounds.push(child_bounds);

            y += size.height + self.gap + extra_gap;
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
mod tests {
    use super::*;
    use crate::row::tests::Probe;
    use orientar_core::Widget;

    #[test]
    fn test_column_empty() {
        let col = Column::new();
        let size = col.measure(Constraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_column_measure_sums_heights() {
        let col = Column::new()
            .gap(8.0)
            .child(Probe::new(30.0, 20.0))
            .child(Probe::new(50.0, 40.0));
        let size = col.measure(Constraints::loose(Size::new(500.0, 500.0)));
        assert_eq!(size, Size::new(50.0, 68.0));
    }

    #[test]
    fn test_column_layout_stacks_vertically() {
        let mut col = Column::new()
            .gap(8.0)
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .child(Probe::new(30.0, 20.0))
            .child(Probe::new(30.0, 40.0));
        col.layout(Rect::new(0.0, 0.0, 100.0, 200.0));

        let bounds = col.child_bounds();
        assert_eq!(bounds[0], Rect::new(0.0, 0.0, 30.0, 20.0));
        assert_eq!(bounds[1], Rect::new(0.0, 28.0, 30.0, 40.0));
    }

    #[test]
    fn test_column_space_evenly() {
        let mut col = Column::new()
            .main_axis_alignment(MainAxisAlignment::SpaceEvenly)
            .child(Probe::new(10.0, 20.0))
            .child(Probe::new(10.0, 20.0));
        col.layout(Rect::new(0.0, 0.0, 50.0, 100.0));

        // 60 free, three shares of 20.
        let bounds = col.child_bounds();
        assert!((bounds[0].y - 20.0).abs() < 0.01);
        assert!((bounds[1].y - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_column_cross_axis_center() {
        let mut col = Column::new().child(Probe::new(40.0, 10.0));
        col.layout(Rect::new(0.0, 0.0, 100.0, 50.0));

        assert!((col.child_bounds()[0].x - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_column_builder() {
        let col = Column::new()
            .gap(10.0)
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .with_test_id("sidebar");
        assert_eq!(col.gap, 10.0);
        assert_eq!(col.main_axis_alignment, MainAxisAlignment::Center);
        assert_eq!(col.cross_axis_alignment, CrossAxisAlignment::Start);
        assert_eq!(Widget::test_id(&col), Some("sidebar"));
    }
}
