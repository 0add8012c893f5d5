mod builtin;
mod registry;

pub use registry::{BlockComment, CommentSyntax, Language, LanguageRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
