//! Bounded traversal of error cause chains
//!
//! An error "is" another if it equals it or if its cause (recursively)
//! does. Causes are followed through `Error::source`, and through
//! `io::Error::get_ref` so that an I/O error wrapping a custom error
//! exposes that error itself rather than skipping to its source.

use std::error::Error;
use std::io;

/// Maximum number of links visited in a single chain
pub const MAX_CHAIN_DEPTH: usize = 32;

/// Iterator over an error and its causes, outermost first
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.remaining -= 1;
        self.next = cause_of(current);
        Some(current)
    }
}

fn cause_of<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    if let Some(inner) = err.downcast_ref::<io::Error>().and_then(|e| e.get_ref()) {
        return Some(inner as &(dyn Error + 'static));
    }
    err.source()
}

/// Walk `err` and its causes, at most `MAX_CHAIN_DEPTH` links
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain {
        next: Some(err),
        remaining: MAX_CHAIN_DEPTH,
    }
}

/// Whether any link of the chain satisfies `pred`
pub fn chain_is<F>(err: &(dyn Error + 'static), pred: F) -> bool
where
    F: Fn(&(dyn Error + 'static)) -> bool,
{
    chain(err).any(pred)
}

/// Render an error with its causes, joined by ": "
///
/// A cause whose text the rendering already ends with is skipped, so
/// errors that embed their source in their own message are not repeated.
pub fn render_chain(err: &(dyn Error + 'static)) -> String {
    let mut rendered = String::new();
    for link in chain(err) {
        let text = link.to_string();
        if rendered.is_empty() {
            rendered = text;
        } else if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
    }
    rendered
}
