//! Process-wide capture installation
//!
//! Kept in a single test so installs don't race with each other.

use errs::config::{CaptureMode, ErrsConfig};
use errs::frame::{self, Frame};
use errs::Metadata;
use std::io;
use std::panic::Location;
use std::sync::Arc;

fn boom() -> Option<io::Error> {
    Some(io::Error::new(io::ErrorKind::Other, "boom"))
}

#[test]
fn test_installed_capture_drives_new_and_wrap() {
    // Default: symbolized, file and line always present
    let line = line!() + 1;
    let err = errs::new(boom(), 1, Metadata::new()).unwrap();
    assert!(err.frame().file.ends_with("capture_tests.rs"));
    assert_eq!(err.frame().line, line);

    errs::init_with(&ErrsConfig::new().with_capture(CaptureMode::Off)).unwrap();
    let err = errs::new(boom(), 1, Metadata::new()).unwrap();
    assert!(err.frame().is_sentinel());
    assert_eq!(err.to_string(), ":0:  | boom\n");

    errs::init_with(&ErrsConfig::new().with_capture(CaptureMode::Location)).unwrap();
    let err = errs::wrap(Some(err), "outer", Metadata::new()).unwrap();
    assert!(err.frame().file.ends_with("capture_tests.rs"));
    assert!(err.frame().function.is_empty());

    frame::install(Arc::new(|site: &'static Location<'static>| {
        Frame::new("custom.rs", site.line(), "custom::capture")
    }));
    let line = line!() + 1;
    let err = errs::wrap(Some(err), "outermost", Metadata::new()).unwrap();
    assert_eq!(err.frame(), &Frame::new("custom.rs", line, "custom::capture"));
    assert_eq!(err.depth(), 3);

    std::env::set_var("ERRS_CAPTURE", "off");
    errs::init().unwrap();
    let err = errs::new(boom(), 2, Metadata::new()).unwrap();
    assert!(err.frame().is_sentinel());
    std::env::remove_var("ERRS_CAPTURE");

    std::env::set_var("ERRS_MAX_FRAMES", "0");
    assert!(errs::init().is_err());
    std::env::remove_var("ERRS_MAX_FRAMES");

    frame::reset();
    let err = errs::new(boom(), 1, Metadata::new()).unwrap();
    assert!(err.frame().file.ends_with("capture_tests.rs"));
}
