//! Staged element builder.
//!
//! The builder appends to a single linear buffer, so attributes have to be
//! written before the tag is opened for content. That ordering is carried in
//! the type: an [`ElementBuilder<Opening>`] accepts attributes, and
//! [`ElementBuilder::set_content`] turns it into an [`ElementBuilder<Opened>`]
//! which only accepts [`build`](ElementBuilder::build). Building consumes the
//! builder.

use std::marker::PhantomData;

use crate::attribute::Attribute;
use crate::element::Element;

/// Builder state: the opening tag is still accepting attributes.
#[derive(Debug)]
pub struct Opening;

/// Builder state: the tag has been opened and content written.
#[derive(Debug)]
pub struct Opened;

/// Stages one element at a time.
#[derive(Debug)]
pub struct ElementBuilder<S = Opening> {
    /// Tag name captured at construction, used for the closing tag
    tag: String,

    /// Markup written so far
    buffer: String,

    state: PhantomData<S>,
}

impl ElementBuilder<Opening> {
    /// Start a new element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            buffer: format!("<{}", tag),
            state: PhantomData,
        }
    }

    /// Append the element's id attribute.
    pub fn set_id(self, id: Attribute) -> Self {
        self.push_attribute(&id)
    }

    /// Append the element's class attribute.
    pub fn set_classes(self, classes: Attribute) -> Self {
        self.push_attribute(&classes)
    }

    /// Close the opening tag and write the element's content.
    pub fn set_content(mut self, content: &str) -> ElementBuilder<Opened> {
        self.buffer.push('>');
        self.buffer.push_str(content);

        ElementBuilder {
            tag: self.tag,
            buffer: self.buffer,
            state: PhantomData,
        }
    }

    /// Finish an element that never received content, e.g. `<div></div>`.
    pub fn build(self) -> Element {
        Element::from_markup(format!("{}></{}>", self.buffer, self.tag))
    }

    fn push_attribute(mut self, attr: &Attribute) -> Self {
        self.buffer.push(' ');
        self.buffer.push_str(&attr.serialize());
        self
    }
}

impl ElementBuilder<Opened> {
    /// Finish the element by appending its closing tag.
    pub fn build(self) -> Element {
        Element::from_markup(format!("{}</{}>", self.buffer, self.tag))
    }
}
