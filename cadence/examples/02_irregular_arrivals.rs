use cadence::{Cadence, FallbackPolicy, is_valid_frequency_label};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sensor readings every ~5 minutes with jitter and one dropped sample.
    let readings = [
        0.0, 299.6, 600.3, 899.8, 1500.2, 1800.0, 2099.7, 2400.4, 2700.1,
    ];
    // Event-driven arrivals with no period at all.
    let events = [0.0, 7.0, 23.0, 101.0, 9999.0];

    let strict = Cadence::builder().build()?;
    let eager = Cadence::builder()
        .fallback_policy(FallbackPolicy::Always)
        .build()?;

    for (name, series) in [("readings", &readings[..]), ("events", &events[..])] {
        let est = strict.estimate_interval(series);
        println!(
            "{name}: typical gap {:.1}s ({:?})",
            est.gap, est.source
        );
        println!("  observed-gap policy: {:?}", strict.resolve(series)?);
        println!("  always policy:       {:?}", eager.resolve(series)?);
    }

    for label in ["5min", "300s", "not-a-freq", "0D"] {
        println!("{label:>10} valid: {}", is_valid_frequency_label(label));
    }

    Ok(())
}
