use crate::io::output::OutputWriter;
use crate::metrics::Dashboard;
use std::io::Write;

/// Chart-ready JSON for an external rendering layer
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(dashboard)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reference_scenarios, Baseline};
    use crate::metrics::{compute_dashboard, ProjectionSettings};
    use serde_json::Value;

    #[test]
    fn json_exposes_chart_series() {
        let dashboard = compute_dashboard(
            &Baseline::default(),
            &reference_scenarios(),
            &ProjectionSettings::default(),
        )
        .unwrap();
        let mut writer = JsonWriter::new(Vec::new());
        writer.write_dashboard(&dashboard).unwrap();

        let json: Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(json["summary"][0]["name"], "Conservative");
        assert_eq!(json["summary"][0]["rough_cut_contribution_pct"], 57);
        assert_eq!(json["stacked_comparison"][0]["name"], "Baseline");
        assert_eq!(json["rough_cut_projection"][3]["projects"], 4);
        assert_eq!(json["baseline_distribution"]["slices"][2]["stage"], "qc_rendering");
        assert_eq!(json["baseline"]["deliverables"], 12);
    }
}
