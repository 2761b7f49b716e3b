//! Encode a small keyed stream and print the wire bytes.
//!
//! Run with: cargo run --example keyed-stream

use tagstream::collect::{AdaptiveCollector, BufferSink, Sink};
use tagstream::wire::Value;

fn main() {
    let mut collector =
        AdaptiveCollector::new(BufferSink::new()).with_key(Value::from("sensor-7"));

    for reading in [3i64, 5, 8] {
        collector
            .collect(Value::from(reading))
            .expect("in-memory sink never fails");
    }

    let mut sink = collector.into_sink();
    sink.signal_end().expect("in-memory sink never fails");

    let hex: Vec<String> = sink.bytes().iter().map(|b| format!("{b:02x}")).collect();
    println!("{}", hex.join(" "));
}
