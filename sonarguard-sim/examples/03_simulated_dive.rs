//! Simulated Dive Example
//!
//! Runs a seeded simulated descent through the windowed outlier filter and
//! compares raw and filtered distances against the ground truth.
//!
//! Usage: cargo run --example 03_simulated_dive [-- <seed> [--json]]

use sonarguard_core::{Channel, FilterConfig, TimeoutCounter, WindowedOutlierFilter};
use sonarguard_sim::{SimConfig, SonarSimulator};

const FRAMES: u64 = 600;

#[derive(Default)]
struct ErrorTally {
    raw: f64,
    filtered: f64,
    samples: u32,
}

impl ErrorTally {
    fn add(&mut self, truth: f32, raw: f32, filtered: f32) {
        self.raw += f64::from(raw - truth).powi(2);
        self.filtered += f64::from(filtered - truth).powi(2);
        self.samples += 1;
    }

    fn rms(&self) -> (f64, f64) {
        let n = f64::from(self.samples.max(1));
        ((self.raw / n).sqrt(), (self.filtered / n).sqrt())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let seed = args.next().map(|s| s.parse()).transpose()?.unwrap_or(7);
    let json = args.any(|a| a == "--json");

    let config = SimConfig::default();
    // Simulated times are true round trips; undo them exactly
    let filter_config = FilterConfig::new_with_divisor(config.round_trip_ms_per_meter());
    let divisor = filter_config.divisor;

    let sim = SonarSimulator::seeded(config, seed)?.with_limit(FRAMES);
    let mut filter = WindowedOutlierFilter::<_, 5>::with_config_and_sink(
        filter_config,
        TimeoutCounter::default(),
    );

    let mut tallies = [ErrorTally::default(), ErrorTally::default()];

    for frame in sim {
        let Some(out) = filter.ingest_pair(frame.noisy) else {
            continue;
        };

        if json {
            println!(
                "{}",
                serde_json::json!({ "frame": frame, "filtered": out })
            );
        }

        for channel in Channel::ALL {
            let raw = frame.noisy.get(channel);
            if raw == filter.config().timeout_sentinel {
                continue;
            }
            tallies[channel as usize].add(
                frame.distance.get(channel),
                raw / divisor,
                out.get(channel),
            );
        }
    }

    if !json {
        println!("SonarGuard - Simulated Dive (seed {})", seed);
        println!("=====================================\n");
        println!("{} pings, {} filtered\n", FRAMES, FRAMES.saturating_sub(4));

        for channel in Channel::ALL {
            let (raw, filtered) = tallies[channel as usize].rms();
            println!(
                "{:>6}: RMS error raw {:.3} m, filtered {:.3} m",
                channel.name(),
                raw,
                filtered
            );
        }

        let timeouts = filter.sink();
        println!(
            "\nTimeouts: front {}, bottom {}",
            timeouts.front(),
            timeouts.bottom()
        );
    }

    Ok(())
}
