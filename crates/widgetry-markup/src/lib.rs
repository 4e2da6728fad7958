//! Attribute templates and staged element builders.
//!
//! This crate provides the leaf pieces of widget assembly: a single
//! [`Attribute`] key/value template, an [`ElementBuilder`] that stages a tag,
//! its attributes and its content, and the immutable [`Element`] it produces.

pub mod attribute;
pub mod builder;
pub mod element;

pub use attribute::{Attribute, MISSING_KEY};
pub use builder::{ElementBuilder, Opened, Opening};
pub use element::Element;
