//! Core types and traits for Orientar UI components.
//!
//! This crate provides foundational types used throughout Orientar:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] trait and the [`RecordingCanvas`] paint recorder

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod draw;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{
    BoxStyle, DrawCommand, FillRule, LineCap, LineJoin, Sampling, Shadow, StrokeStyle, Transform2D,
};
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontFamily, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId,
    Widget, WidgetId,
};
