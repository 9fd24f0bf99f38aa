// src/output.rs
use crate::payoff::curve::{CurveSummary, PayoffSample};
use crate::products::ProductConfig;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write every sample of a curve priced under `config`
///
/// `relative_spot` is `spot / strike` to four decimals, left empty when the
/// strike is zero or not finite.
pub fn write_payoff_curve_to_csv(
    filename: &str,
    config: &ProductConfig,
    samples: &[PayoffSample],
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "sample_id,relative_spot,spot,payoff")?;
    let strike = config.strike;
    for (i, sample) in samples.iter().enumerate() {
        let relative_spot = if strike != 0.0 && strike.is_finite() {
            format!("{:.4}", sample.spot / strike)
        } else {
            String::new()
        };
        writeln!(
            file,
            "{},{},{},{}",
            i, relative_spot, sample.spot, sample.payoff
        )?;
    }
    file.flush()
}

pub fn write_summary_to_csv(filename: &str, summary: &CurveSummary) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "samples,{}", summary.samples)?;
    writeln!(file, "paying_samples,{}", summary.paying_samples)?;
    writeln!(file, "max_payoff,{}", summary.max_payoff)?;
    match summary.first_paying_spot {
        Some(spot) => writeln!(file, "first_paying_spot,{}", spot)?,
        None => writeln!(file, "first_paying_spot,")?,
    }
    Ok(())
}
