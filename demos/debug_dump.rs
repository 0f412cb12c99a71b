//! Debug dump and error wrapping example
//!
//! Run with: cargo run --example debug_dump

use rust_simple_logger::core::BoxError;
use rust_simple_logger::{console, deferred_wrap_in_place, dump, json_dump, wrap_error_with_context};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Upstream {
    name: &'static str,
    weight: u8,
    healthy: bool,
    region: Option<&'static str>,
}

fn save(upstream: &Upstream) -> Option<BoxError> {
    let mut outcome: Option<BoxError> = None;
    {
        let mut slot = deferred_wrap_in_place!(&mut outcome);
        if !upstream.healthy {
            *slot = Some(format!("{} is unhealthy", upstream.name).into());
        }
    }
    outcome
}

fn main() {
    let upstream = Upstream {
        name: "edge-1",
        weight: 10,
        healthy: false,
        region: None,
    };

    dump!(upstream, "hello");
    json_dump!(upstream, vec![1, 2, 3]);

    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "probe timed out");
    let wrapped = wrap_error_with_context!(err, upstream.weight);
    console().error(&wrapped, "health probe");

    if let Some(err) = save(&upstream) {
        console().errorf(err);
    }
}
