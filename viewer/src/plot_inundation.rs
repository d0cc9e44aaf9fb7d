use egui::Ui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use engine::inundation::FloodParams;
use engine::sweep::FloodSweep;

pub struct InundationUIState {
    pub show_controls: bool,
    pub params: FloodParams,
    // cache
    last_hash: u64,
    curve_pts: Option<Vec<[f64; 2]>>,
    sweep: Option<FloodSweep>,
    status: String,
}

impl Default for InundationUIState {
    fn default() -> Self {
        Self {
            show_controls: true,
            params: FloodParams::default(),
            last_hash: 0,
            curve_pts: None,
            sweep: None,
            status: String::new(),
        }
    }
}

fn compute_hash(st: &InundationUIState) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut h = std::collections::hash_map::DefaultHasher::new();
    st.hash(&mut h);
    h.finish()
}

impl std::hash::Hash for InundationUIState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Quantize floats for stability
        ((self.params.threshold_m * 1000.0).round() as i64).hash(state);
        ((self.params.std_dev_m * 1000.0).round() as i64).hash(state);
        ((self.params.mean_min_m * 1000.0).round() as i64).hash(state);
        ((self.params.mean_max_m * 1000.0).round() as i64).hash(state);
    }
}

impl InundationUIState {
    pub fn reset(&mut self) {
        self.params = FloodParams::default();
        self.last_hash = 0;
        self.curve_pts = None;
        self.sweep = None;
        self.status.clear();
    }

    fn recompute(&mut self) {
        match engine::sweep::sweep_flood_frequency(&self.params) {
            Ok(sweep) => {
                let pts: Vec<[f64; 2]> = sweep
                    .mean_m
                    .iter()
                    .zip(sweep.frequency.iter())
                    .map(|(&m, &f)| [m, f])
                    .collect();
                self.curve_pts = Some(pts);
                self.sweep = Some(sweep);
            }
            Err(e) => {
                self.status = format!("invalid parameters: {e}");
                self.curve_pts = None;
                self.sweep = None;
            }
        }
    }

    /// Recompute the sweep when the (quantized) parameters changed.
    pub fn ensure_series(&mut self, changed: bool) {
        let hash = compute_hash(self);
        if changed || hash != self.last_hash || self.curve_pts.is_none() {
            self.last_hash = hash;
            self.recompute();
        }
    }

    pub fn controls_ui(&mut self, ui: &mut Ui, fps: f32) {
        ui.heading("Parameters");
        let mut changed = false;
        changed |= ui
            .add(
                egui::Slider::new(&mut self.params.threshold_m, 0.0..=5.0)
                    .step_by(0.1)
                    .text("Flood threshold (m)"),
            )
            .changed();
        // Slider floor keeps sigma > 0; the engine still validates
        changed |= ui
            .add(
                egui::Slider::new(&mut self.params.std_dev_m, 0.1..=5.0)
                    .step_by(0.1)
                    .text("High-tide std dev (m)"),
            )
            .changed();
        ui.separator();
        ui.heading("Mean Sea Level Increase");
        ui.horizontal(|ui| {
            ui.label("min");
            changed |=
                ui.add(egui::DragValue::new(&mut self.params.mean_min_m).speed(0.1)).changed();
            ui.label("max");
            changed |=
                ui.add(egui::DragValue::new(&mut self.params.mean_max_m).speed(0.1)).changed();
        });
        if self.params.mean_max_m <= self.params.mean_min_m {
            ui.colored_label(
                egui::Color32::YELLOW,
                "Maximum Sea Level Cannot Be Less Than Current/Minimum.",
            );
        }

        self.ensure_series(changed);

        if let Some(sweep) = &self.sweep {
            let (fmin, fmax) = sweep.min_max_frequency;
            ui.separator();
            ui.label(format!(
                "sweep: n={}  mean=[{:.2}, {:.2}] m  freq[min/max]={:.4}/{:.4}",
                sweep.mean_m.len(),
                sweep.params.mean_min_m,
                sweep.params.mean_max_m,
                fmin,
                fmax
            ));
        }
        ui.separator();
        if ui.button("Export CSV").clicked() {
            self.export_csv();
        }
        if !self.status.is_empty() {
            ui.label(&self.status);
        }
        ui.separator();
        ui.label(format!("H: controls  R: reset  FPS: {:.0}", fps));
    }

    fn export_csv(&mut self) {
        let Some(sweep) = &self.sweep else {
            return;
        };
        let dir = std::path::Path::new("out");
        let path = dir.join("inundation_sweep.csv");
        let res = std::fs::create_dir_all(dir)
            .and_then(|()| engine::snapshots::write_csv_sweep(&path, sweep));
        self.status = match res {
            Ok(()) => format!("wrote {}", path.display()),
            Err(e) => format!("export failed: {e}"),
        };
    }

    pub fn plot_ui(&mut self, ui: &mut Ui) {
        self.ensure_series(false);
        let Some(sweep) = &self.sweep else {
            ui.label(&self.status);
            return;
        };
        ui.heading(format!(
            "Inundation Frequency vs. Change In Mean High Tide (HTF={:.1}, σ={:.1})",
            sweep.params.threshold_m, sweep.params.std_dev_m
        ));
        let (x_lo, x_hi) = (sweep.params.mean_min_m, sweep.params.mean_max_m);
        let curve = self.curve_pts.clone().unwrap_or_default();
        Plot::new("inundation_sweep")
            .x_axis_label("Change In Mean High Sea Level")
            .y_axis_label("Inundation Frequency")
            .show(ui, |plot_ui| {
                // Pin the vertical axis to [0, 1] regardless of data extent
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_lo, 0.0], [x_hi, 1.0]));
                plot_ui
                    .line(Line::new(PlotPoints::from_iter(curve.iter().copied())).name("frequency"));
            });
    }
}
