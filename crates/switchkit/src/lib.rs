//! switchkit: an image-skinned drag-to-toggle switch and its demo screen.
//!
//! The widget itself lives in [`widgets`]; this crate adds the host side:
//! [`ToggleDemo`] builds a screen from a YAML layout, and every state change
//! of its toggle shows a short [`Toast`].
//!
//! ```
//! use switchkit::{ToggleDemo, DEFAULT_LAYOUT};
//! use switchkit::{Bitmap, Color, Event, MemoryAssets, Point};
//!
//! let assets = MemoryAssets::new()
//!     .with_bitmap(Bitmap::solid("switch_background", 100, 40, Color::BLACK))
//!     .with_bitmap(Bitmap::solid("slide_button", 40, 40, Color::WHITE));
//! let mut demo = ToggleDemo::from_yaml(DEFAULT_LAYOUT, &assets).unwrap();
//!
//! // The toggle is centered in a 360px wide screen, 16px from the top.
//! demo.dispatch(&Event::touch_start(Point::new(140.0, 36.0)));
//! demo.dispatch(&Event::touch_end(Point::new(220.0, 36.0)));
//! assert_eq!(demo.toasts().texts(), vec!["State >>> true"]);
//! ```

mod error;
mod screen;
mod toast;

pub use error::DemoError;
pub use screen::{state_message, ToggleDemo, DEFAULT_LAYOUT, TOGGLE_ID};
pub use toast::{Toast, ToastDuration, ToastQueue};

pub use switchkit_core::*;
pub use switchkit_widgets as widgets;
pub use switchkit_yaml as yaml;
