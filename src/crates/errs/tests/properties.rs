//! Property tests over randomly built chains

use errs::frame::{Disabled, LocationOnly};
use errs::{Error, Frame, Metadata};
use proptest::prelude::*;
use std::io;
use std::panic::Location;

fn numbered(site: &'static Location<'static>) -> Frame {
    Frame::new("prop/chain.rs", site.line(), "prop::chain::build")
}

fn build(root_msg: &str, code: i32, wraps: &[(String, usize)]) -> Error {
    let cause = io::Error::new(io::ErrorKind::Other, root_msg.to_string());
    let mut err = errs::new_in(&numbered, Some(cause), code, Metadata::new()).unwrap();
    for (message, meta_len) in wraps {
        let mut meta = Metadata::new();
        for i in 0..*meta_len {
            meta.push(i);
        }
        err = errs::wrap_in(&numbered, Some(err), message.clone(), meta).unwrap();
    }
    err
}

fn message() -> impl Strategy<Value = String> {
    "[a-z][a-z ]{0,20}"
}

proptest! {
    #[test]
    fn prop_absent_cause_never_builds(code in any::<i32>(), msg in message(), n in 0usize..4) {
        let mut meta = Metadata::new();
        for i in 0..n {
            meta.push(i);
        }
        prop_assert!(errs::new_in(&LocationOnly, None::<io::Error>, code, meta.clone()).is_none());
        prop_assert!(errs::wrap_in(&LocationOnly, None::<Error>, msg, meta).is_none());
    }

    #[test]
    fn prop_root_is_own_source(code in 0i32..1000, msg in message()) {
        let err = build(&msg, code, &[]);
        prop_assert!(err.source_node().same_node(&err));
        prop_assert!(err.wrapper().is_none());
        prop_assert_eq!(err.code().get(), code);
    }

    #[test]
    fn prop_wrap_propagates_source(
        code in 0i32..1000,
        wraps in prop::collection::vec((message(), 0usize..3), 0..6),
        msg in message(),
    ) {
        let inner = build("root", code, &wraps);
        let outer = errs::wrap_in(&Disabled, Some(inner.clone()), msg, Metadata::new()).unwrap();

        prop_assert!(outer.source_node().same_node(inner.source_node()));
        prop_assert!(outer.wrapper().unwrap().same_node(&inner));
        prop_assert!(outer.code().is_unclassified());
    }

    #[test]
    fn prop_render_is_idempotent(wraps in prop::collection::vec((message(), 0usize..3), 0..8)) {
        let err = build("root cause", 3, &wraps);
        prop_assert_eq!(err.to_string(), err.to_string());
    }

    #[test]
    fn prop_one_primary_line_per_layer(wraps in prop::collection::vec((message(), 0usize..3), 0..10)) {
        let err = build("root cause", 3, &wraps);
        let trace = err.to_string();

        let primary: Vec<&str> = trace
            .lines()
            .map(|l| l.trim_start_matches('\t'))
            .filter(|l| l.starts_with("prop/chain.rs:"))
            .collect();

        prop_assert_eq!(primary.len(), wraps.len() + 1);
        prop_assert!(primary[0].ends_with("| root cause"));
        for (line, (message, _)) in primary[1..].iter().zip(&wraps) {
            let expected = format!("| {}", message);
            prop_assert!(line.ends_with(&expected));
        }
        prop_assert_eq!(err.depth(), wraps.len() + 1);
    }

    #[test]
    fn prop_only_source_line_lacks_marker(
        root_meta in 0usize..3,
        wraps in prop::collection::vec((message(), 0usize..3), 0..6),
    ) {
        let cause = io::Error::new(io::ErrorKind::Other, "root cause");
        let mut meta = Metadata::new();
        for i in 0..root_meta {
            meta.push(i);
        }
        let mut err = errs::new_in(&numbered, Some(cause), 1, meta).unwrap();
        for (message, meta_len) in &wraps {
            let meta = Metadata::new().with(*meta_len);
            err = errs::wrap_in(&numbered, Some(err), message.clone(), meta).unwrap();
        }

        let trace = err.to_string();
        let mut rest = trace.as_str();
        for layer in 0..=wraps.len() {
            let start = rest.find("prop/chain.rs:").unwrap();
            let line_end = start + rest[start..].find('\n').unwrap();
            let marked = rest[line_end + 1..].starts_with('\t');
            prop_assert_eq!(marked, layer > 0);
            rest = &rest[line_end + 1..];
        }
        if root_meta > 0 {
            prop_assert!(trace.lines().nth(1).unwrap().starts_with('['));
        }
    }
}
