//! Basic Sonar Filtering Example
//!
//! Feeds a short recorded dive through the outlier filter and shows how
//! spikes and timeouts are handled.
//!
//! ## What You'll Learn
//!
//! - Creating a filter and watching it warm up
//! - How the outlier band clamps spikes
//! - Observing sensor timeouts through a diagnostic sink
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_filtering
//! ```

use sonarguard_core::{
    diagnostics::TimeoutLog,
    Channel, WindowedOutlierFilter,
};

fn main() {
    println!("SonarGuard Basic Filtering Example");
    println!("==================================\n");

    // Raw round-trip readings (front, bottom) as the driver reports them.
    // Frame 6 has a multipath spike on the front channel, frame 9 a timeout.
    let recording: [(f32, f32); 12] = [
        (16.29, 8.89),
        (16.21, 8.85),
        (16.15, 8.90),
        (16.07, 8.81),
        (16.02, 8.79),
        (15.95, 8.77),
        (41.80, 8.74),
        (15.82, 8.70),
        (15.77, 8.69),
        (-1.00, 8.66),
        (15.66, 8.64),
        (15.60, 8.60),
    ];

    let mut filter = WindowedOutlierFilter::<_, 5>::with_sink(TimeoutLog::<8>::new());
    println!("Window size: {} pings per channel\n", filter.window_size());

    println!("{:>5} {:>10} {:>10} {:>12} {:>12}", "ping", "raw front", "raw bottom", "front [m]", "bottom [m]");
    for (i, (front, bottom)) in recording.iter().enumerate() {
        match filter.ingest(*front, *bottom) {
            Some(pair) => println!(
                "{:>5} {:>10.2} {:>10.2} {:>12.3} {:>12.3}",
                i, front, bottom, pair.front, pair.bottom
            ),
            None => println!("{:>5} {:>10.2} {:>10.2} {:>12} {:>12}", i, front, bottom, "warming", "warming"),
        }
    }

    println!("\nCurrent bands:");
    for channel in Channel::ALL {
        if let Ok(band) = filter.band(channel) {
            println!(
                "  {:<6} mean {:.3} m, sd {:.3} m, band [{:.3}, {:.3}]",
                channel.name(),
                band.mean(),
                band.std_dev(),
                band.lower(),
                band.upper()
            );
        }
    }

    println!("\nSensor timeouts:");
    for event in filter.sink().iter() {
        println!("  ping {} on {} channel", event.sample_index, event.channel);
    }
}
