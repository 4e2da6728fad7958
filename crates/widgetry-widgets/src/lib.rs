//! Platform widget families and the widget dispatcher.
//!
//! Each supported platform has a [`WidgetFamily`] that knows how to build the
//! shared div and span elements and its own outer wrapper. [`create_widget`]
//! picks the family from a platform name and assembles the full widget.

pub mod dispatcher;
pub mod families;
pub mod platform;
pub mod traits;

pub use dispatcher::{assemble, create_widget};
pub use families::{AndroidFamily, IosFamily};
pub use platform::{DispatchError, Platform};
pub use traits::{WidgetFamily, GREETING};
