//! Trait definitions for widget families.

use widgetry_markup::{Attribute, Element, ElementBuilder};

/// Greeting rendered by every span, whatever content is passed in.
pub const GREETING: &str = "Hello World!";

/// A family of related element constructors for one platform.
///
/// `create_div` and `create_span` are shared by every family; each platform
/// supplies its own outer wrapper through [`WidgetFamily::get_widget`].
pub trait WidgetFamily: Send + Sync {
    /// Platform token this family serves (e.g., "ios", "android")
    fn name(&self) -> &'static str;

    /// Wrap `content` in the platform's outer element.
    fn get_widget(&self, content: &str) -> Element;

    /// Build the `main` container div around `content`.
    fn create_div(&self, content: &str) -> Element {
        ElementBuilder::new("div")
            .set_id(Attribute::pair("id", "main"))
            .set_classes(Attribute::pair("class", "container-fluid"))
            .set_content(content)
            .build()
    }

    /// Build the greeting span.
    ///
    /// `content` is accepted but not rendered: the span always carries
    /// [`GREETING`].
    fn create_span(&self, _content: &str) -> Element {
        ElementBuilder::new("span")
            .set_classes(Attribute::pair("class", "col-sm-12 text-right"))
            .set_content(GREETING)
            .build()
    }
}
