//! Android string resource documents
//!
//! A `strings.xml` file is parsed into a tree of [`Node`]s. Entries are the
//! `<string>` elements directly under the `<resources>` root; everything else
//! (comments, plurals, arrays, whitespace) is carried through untouched.

pub mod document;
pub mod node;

pub use document::{Document, STRING_TAG};
pub use node::{Content, Element, Node, is_translatable_run};
