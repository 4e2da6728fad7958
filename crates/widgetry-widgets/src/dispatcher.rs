//! Widget dispatcher.
//!
//! Resolves a platform name to its family and assembles the widget:
//! a span, embedded in a div, embedded in the family's wrapper.

use widgetry_markup::Element;

use crate::platform::Platform;
use crate::traits::WidgetFamily;

/// Build the widget for `platform`, or `None` if the platform is not recognized.
///
/// Matching ignores case. Nothing is constructed for an unknown platform.
pub fn create_widget(platform: &str) -> Option<Element> {
    let Some(platform) = Platform::lookup(platform) else {
        tracing::debug!("No widget family for platform {:?}", platform);
        return None;
    };

    Some(assemble(platform.family()))
}

/// Run the span, div, wrapper pipeline against an already selected family.
pub fn assemble(family: &dyn WidgetFamily) -> Element {
    tracing::debug!("Assembling {} widget", family.name());

    // The span renders its fixed greeting regardless of this argument.
    let span = family.create_span(family.name());
    let div = family.create_div(span.as_str());

    family.get_widget(div.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{AndroidFamily, IosFamily};
    use pretty_assertions::assert_eq;

    const ANDROID_WIDGET: &str = "<body class=\"android-ready\"><div id=\"main\" class=\"container-fluid\"><span class=\"col-sm-12 text-right\">Hello World!</span></div></body>";

    #[test]
    fn builds_android_widget() {
        let widget = create_widget("android").unwrap();

        assert_eq!(widget.as_str(), ANDROID_WIDGET);
    }

    #[test]
    fn builds_ios_widget_in_any_casing() {
        for name in ["ios", "Ios", "IOS"] {
            let widget = create_widget(name).unwrap();
            let markup = widget.as_str();

            let body = markup.find("<body class=\"ios-ready\">").unwrap();
            let div = markup.find("<div ").unwrap();
            let span = markup.find("<span ").unwrap();
            let span_end = markup.find("</span>").unwrap();
            let div_end = markup.find("</div>").unwrap();
            let body_end = markup.find("</body>").unwrap();

            assert!(body < div && div < span);
            assert!(span_end < div_end && div_end < body_end);
        }
    }

    #[test]
    fn unknown_platform_yields_nothing() {
        for name in ["web", "", "Android2", "windows"] {
            assert_eq!(create_widget(name), None);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = create_widget("ios").unwrap();
        let second = create_widget("ios").unwrap();
        let third = create_widget("IOS").unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn assembles_with_fresh_families_too() {
        assert_eq!(assemble(&AndroidFamily).as_str(), ANDROID_WIDGET);
        assert_eq!(
            assemble(&IosFamily).into_string(),
            ANDROID_WIDGET.replace("android-ready", "ios-ready")
        );
    }
}
