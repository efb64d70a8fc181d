//! Source loading.
//!
//! Turns files and strings into parsed programs. Source text is first
//! normalized so that leading indentation written with spaces reads the same
//! as indentation written with tabs, then tokenized and parsed.

pub mod loader;

#[cfg(test)]
mod tests;
