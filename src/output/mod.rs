//! Directive output formatting

pub mod reporter;

pub use reporter::{DirectiveReporter, DirectiveRow};
