//! Function-name resolution from debug info

use super::{CaptureCallSite, Frame};
use std::panic::Location;
use std::path::Path;

/// Stack depth walked before giving up on a function name
pub const DEFAULT_MAX_FRAMES: usize = 64;

/// Capture that resolves the caller's function name by walking the stack
///
/// The walk looks for the first symbol (inlined symbols included) whose file
/// and line match the caller location. When none matches within
/// `max_frames`, the frame keeps its file and line with an empty function.
#[derive(Debug, Clone, Copy)]
pub struct Symbolized {
    max_frames: usize,
}

impl Symbolized {
    /// Create a capture that walks at most `max_frames` frames
    pub const fn new(max_frames: usize) -> Self {
        Self { max_frames }
    }

    /// Walk limit
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }
}

impl Default for Symbolized {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAMES)
    }
}

impl CaptureCallSite for Symbolized {
    fn capture(&self, site: &'static Location<'static>) -> Frame {
        let function = resolve_function(site, self.max_frames).unwrap_or_default();
        Frame::new(site.file(), site.line(), function)
    }
}

fn resolve_function(site: &Location<'_>, max_frames: usize) -> Option<String> {
    let target = Path::new(site.file());
    let mut found = None;
    let mut walked = 0;

    backtrace::trace(|raw| {
        walked += 1;
        backtrace::resolve_frame(raw, |symbol| {
            if found.is_some() || symbol.lineno() != Some(site.line()) {
                return;
            }
            let same_file = symbol
                .filename()
                .is_some_and(|file| file.ends_with(target));
            if same_file {
                // `{:#}` drops the trailing hash from demangled names
                found = symbol.name().map(|name| format!("{:#}", name));
            }
        });
        found.is_none() && walked < max_frames
    });

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_file_and_line() {
        let line = line!() + 1;
        let frame = Symbolized::default().capture(Location::caller());
        assert!(frame.file.ends_with("symbolize.rs"));
        assert_eq!(frame.line, line);
    }

    #[test]
    fn test_function_name_when_resolved() {
        let frame = Symbolized::default().capture(Location::caller());
        assert!(frame.function.ends_with("test_function_name_when_resolved"));
        assert!(!frame.function.contains("::h"));
    }

    #[test]
    fn test_zero_walk_limit_still_returns_location() {
        let frame = Symbolized::new(0).capture(Location::caller());
        assert!(frame.file.ends_with("symbolize.rs"));
        assert!(frame.line > 0);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(Symbolized::default().max_frames(), DEFAULT_MAX_FRAMES);
    }
}
