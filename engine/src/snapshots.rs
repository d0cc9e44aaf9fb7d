//! Snapshot writers for exporting sweep results.

use std::io::Write;

use crate::sweep::FloodSweep;

/// Write a CSV file containing the current sweep.
///
/// Format:
/// - First line: `# threshold_m=<v> std_dev_m=<v> mean_min_m=<v> mean_max_m=<v>`
/// - Header: `mean_m,inundation_frequency`
/// - One row per sweep sample
///
/// Errors are bubbled up from the filesystem.
pub fn write_csv_sweep(path: &std::path::Path, sweep: &FloodSweep) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(
        file,
        "# threshold_m={:.6} std_dev_m={:.6} mean_min_m={:.6} mean_max_m={:.6}",
        sweep.params.threshold_m,
        sweep.params.std_dev_m,
        sweep.params.mean_min_m,
        sweep.params.mean_max_m
    )?;
    writeln!(file, "mean_m,inundation_frequency")?;
    for (&m, &f) in sweep.mean_m.iter().zip(sweep.frequency.iter()) {
        // Clamp to finite numbers to avoid CSV pollution
        let m = if m.is_finite() { m } else { 0.0 };
        let f = if f.is_finite() { f } else { 0.0 };
        writeln!(file, "{},{}", m, f)?;
    }
    Ok(())
}
