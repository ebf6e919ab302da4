//! Stream Replay Example
//!
//! Replays recorded frames through a `FilteredStream`, the same adapter a
//! live transport would use, and prints every filtered pair.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_stream_replay
//! ```

use sonarguard_core::{
    stream::{FilteredStream, MemoryStream, Stream, StreamError},
    SamplePair, WindowedOutlierFilter,
};

fn main() {
    println!("SonarGuard Stream Replay Example");
    println!("================================\n");

    let frames: Vec<SamplePair> = (0..20)
        .map(|i| {
            let front = 20.0 - 0.1 * i as f32;
            let bottom = if i == 12 { f32::NAN } else { 9.0 + 0.05 * i as f32 };
            SamplePair::new(front, bottom)
        })
        .collect();

    let mut stream = FilteredStream::new(MemoryStream::new(&frames), WindowedOutlierFilter::new()).strict();

    loop {
        match stream.poll_next() {
            Ok(pair) => println!("distance: front {:.3} m, bottom {:.3} m", pair.front, pair.bottom),
            Err(nb::Error::WouldBlock) => continue,
            Err(nb::Error::Other(StreamError::EndOfStream)) => break,
            Err(nb::Error::Other(e)) => println!("skipped frame: {:?}", e),
        }
    }

    println!("\nConsumed {} frames", stream.frames_consumed());
}
