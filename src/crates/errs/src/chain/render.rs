//! Trace rendering
//!
//! A chain renders source first, one layer after another:
//!
//! ```text
//! <file>:<line>: <function> | <message>
//! <file>:<line>: <function> | <message>
//! 	[<metadata>...]
//!
//! ```
//!
//! Every layer above the source ends its primary line with a tab, and every
//! metadata line is followed by one, so later lines nest under it.

use super::Error;
use std::fmt;

/// Render `err` as a trace; an absent error renders as the empty string
pub fn render(err: Option<&Error>) -> String {
    err.map(ToString::to_string).unwrap_or_default()
}

impl Error {
    fn write_layer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", self.frame(), self.message())?;
        if !self.is_source() {
            f.write_str("\t")?;
        }
        if !self.metadata().is_empty() {
            write!(f, "{:?}\n\t", self.metadata())?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<&Error> = self.layers().collect();
        for layer in layers.into_iter().rev() {
            layer.write_layer(f)?;
        }
        Ok(())
    }
}
