use cadence::Cadence;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Spans and events are emitted when built with `--features tracing`.
    // Suggested: RUST_LOG=debug,cadence=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let cadence = Cadence::builder().build()?;

    // Minute bars with a few milliseconds of clock skew on every arrival.
    let arrivals: Vec<f64> = (0..30)
        .map(|i| 1_609_459_200.0 + f64::from(i) * 60.0 + f64::from(i % 3) * 0.004)
        .collect();
    let res = cadence.resolve(&arrivals)?;
    tracing::info!(label = ?res.label, path = ?res.path, "resolved");

    Ok(())
}
