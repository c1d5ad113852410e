use cadence::{Cadence, RECENT, date_range_for_label, epoch_seconds_from_dates};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cadence = Cadence::builder().build()?;

    for label in ["h", "15min", "D", "B", "W-MON", "ME", "QS-OCT", "YE-DEC"] {
        let dates = date_range_for_label(RECENT, 12, label)?;
        let seconds = epoch_seconds_from_dates(&dates);
        let res = cadence.resolve(&seconds)?;
        println!(
            "{label:>7} -> {:<7} via {:?}",
            res.label.as_ref().map_or("?", |l| l.as_str()),
            res.path
        );
    }

    Ok(())
}
