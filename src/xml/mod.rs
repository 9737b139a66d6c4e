pub mod document;
pub mod parser;
pub mod writer;

pub use document::{Attribute, Declaration, Element, Node, XmlDocument, XmlError};
