use engine as crate_engine;

use crate_engine::inundation::FloodParams;
use crate_engine::snapshots::write_csv_sweep;
use crate_engine::sweep::{sweep_flood_frequency, SWEEP_SAMPLES};

#[test]
fn csv_sweep_round_trips() {
    let sweep = sweep_flood_frequency(&FloodParams::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.csv");
    write_csv_sweep(&path, &sweep).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("# threshold_m=2.500000 std_dev_m=1.000000"));
    assert_eq!(lines.next().unwrap(), "mean_m,inundation_frequency");

    let rows: Vec<&str> = lines.filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(rows.len(), SWEEP_SAMPLES);
    for (i, row) in rows.iter().enumerate() {
        let cols: Vec<&str> = row.split(',').collect();
        assert_eq!(cols.len(), 2);
        let m: f64 = cols[0].parse().unwrap();
        let f: f64 = cols[1].parse().unwrap();
        assert_eq!(m, sweep.mean_m[i]);
        assert_eq!(f, sweep.frequency[i]);
    }
}

#[test]
fn csv_scrubs_non_finite_values() {
    let mut sweep = sweep_flood_frequency(&FloodParams::default()).unwrap();
    sweep.frequency[3] = f64::NAN;
    sweep.mean_m[7] = f64::INFINITY;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.csv");
    write_csv_sweep(&path, &sweep).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    for line in contents.lines().skip(2) {
        for col in line.split(',') {
            let v: f64 = col.parse().unwrap();
            assert!(v.is_finite());
        }
    }
}
