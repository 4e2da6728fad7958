//! iOS and Android widget families.
//!
//! Neither family carries state. Each is still reachable through a shared
//! instance that is created on first access.

use std::sync::LazyLock;

use widgetry_markup::{Attribute, Element, ElementBuilder};

use crate::traits::WidgetFamily;

/// Widgets wrapped in an iOS-ready body.
#[derive(Debug, Default)]
pub struct IosFamily;

impl IosFamily {
    /// The process-wide iOS family.
    pub fn instance() -> &'static IosFamily {
        static INSTANCE: LazyLock<IosFamily> = LazyLock::new(|| {
            tracing::debug!("Initializing ios widget family");
            IosFamily
        });

        &INSTANCE
    }
}

impl WidgetFamily for IosFamily {
    fn name(&self) -> &'static str {
        "ios"
    }

    fn get_widget(&self, content: &str) -> Element {
        ready_body("ios-ready", content)
    }
}

/// Widgets wrapped in an Android-ready body.
#[derive(Debug, Default)]
pub struct AndroidFamily;

impl AndroidFamily {
    /// The process-wide Android family.
    pub fn instance() -> &'static AndroidFamily {
        static INSTANCE: LazyLock<AndroidFamily> = LazyLock::new(|| {
            tracing::debug!("Initializing android widget family");
            AndroidFamily
        });

        &INSTANCE
    }
}

impl WidgetFamily for AndroidFamily {
    fn name(&self) -> &'static str {
        "android"
    }

    fn get_widget(&self, content: &str) -> Element {
        ready_body("android-ready", content)
    }
}

fn ready_body(class: &str, content: &str) -> Element {
    ElementBuilder::new("body")
        .set_classes(Attribute::pair("class", class))
        .set_content(content)
        .build()
}
