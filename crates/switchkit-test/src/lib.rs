#![allow(clippy::manual_assert)]
//! Testing support for switchkit widgets.
//!
//! [`Harness`] owns a widget tree, lays it out in a viewport, and replays
//! touch and mouse gestures against it. Emitted messages and paint output
//! can then be inspected or asserted on.
//!
//! ```
//! use switchkit_test::Harness;
//! # use switchkit_core::{Canvas, Constraints, Event, EventContext, LayoutResult, Rect, Size, TypeId, Widget};
//! # use std::any::Any;
//! # struct Blank;
//! # impl Widget for Blank {
//! #     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//! #     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(10.0, 10.0)) }
//! #     fn layout(&mut self, b: Rect) -> LayoutResult { LayoutResult { size: b.size() } }
//! #     fn paint(&self, _: &mut dyn Canvas) {}
//! #     fn event(&mut self, _: &Event, _: &mut EventContext) -> Option<Box<dyn Any + Send>> { None }
//! #     fn children(&self) -> &[Box<dyn Widget>] { &[] }
//! #     fn children_mut(&mut self) -> &mut [Box<dyn Widget>] { &mut [] }
//! #     fn as_any(&self) -> &dyn Any { self }
//! #     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! # }
//! let mut harness = Harness::new(Blank);
//! harness.touch_down(5.0, 5.0).assert_not_handled();
//! assert_eq!(harness.paint().command_count(), 0);
//! ```

mod harness;

pub use harness::Harness;
