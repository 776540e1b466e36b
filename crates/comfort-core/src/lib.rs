//! Widget controller for the Comfort temperature widget.
//!
//! This crate owns the application state and keeps the view and the durable
//! store in sync with it.
//!
//! # Overview
//!
//! - [`Widget`]: the controller. All state changes go through its operations.
//! - [`Input`]: view events, dispatched with [`Widget::handle`].
//! - [`render`] / [`View`]: one-way state to view rendering.
//! - [`Clock`]: timestamp source for saved readings.
//!
//! # Example
//!
//! ```
//! use comfort_core::{Input, Widget};
//! use comfort_store::MemoryStore;
//! use comfort_types::Unit;
//!
//! let mut widget = Widget::new(MemoryStore::new());
//! widget.handle(Input::SliderMoved(28));
//! assert_eq!(widget.view().status_label, "Too hot");
//!
//! widget.handle(Input::UnitSelected(Unit::Fahrenheit));
//! assert_eq!(widget.view().temperature, 82);
//!
//! widget.handle(Input::Save);
//! assert_eq!(widget.state().history().len(), 1);
//! ```

pub mod clock;
pub mod input;
pub mod state;
pub mod view;
pub mod widget;

pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use input::{Input, parse_bound};
pub use state::WidgetState;
pub use view::{InputValues, View, render};
pub use widget::Widget;

// Re-export for convenience
pub use comfort_store;
pub use comfort_types;
