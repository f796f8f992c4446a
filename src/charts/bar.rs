use crate::charts::figure::{Axis, BarMarker, BarTrace, Figure, Layout, Trace};
use crate::charts::palette::coolwarm_reversed;
use crate::models::CountryMeanEntry;

const TITLE: &str = "Average land temperature in countries";
const X_AXIS_TITLE: &str = "Average temperature";
const NO_DATA_LABEL: &str = "no data";
const ROW_HEIGHT: u32 = 18;

/// Horizontal bar per country, in the order the entries arrive.
///
/// Bars are not re-sorted by value; category order matches the aggregator so
/// the axis is stable between runs.
pub struct RankingBarBuilder {
    title: String,
}

impl RankingBarBuilder {
    pub fn new() -> Self {
        Self {
            title: TITLE.to_string(),
        }
    }

    pub fn build(&self, entries: &[CountryMeanEntry]) -> Figure {
        let trace = BarTrace {
            x: entries.iter().map(|e| e.mean_temperature).collect(),
            y: entries.iter().map(|e| e.country.clone()).collect(),
            orientation: "h".to_string(),
            text: entries.iter().map(|e| bar_label(e.mean_temperature)).collect(),
            textposition: "outside".to_string(),
            cliponaxis: false,
            marker: BarMarker {
                color: coolwarm_reversed(entries.len()),
            },
        };

        // First entry at the top, like a table
        let yaxis = Axis {
            autorange: Some("reversed".to_string()),
            automargin: Some(true),
            ..Axis::default()
        };

        let layout = Layout {
            xaxis: Some(Axis::titled(X_AXIS_TITLE)),
            yaxis: Some(yaxis),
            height: Some(self.height_for(entries.len())),
            ..Layout::titled(&self.title)
        };

        Figure::new(vec![Trace::Bar(trace)], layout)
    }

    fn height_for(&self, bars: usize) -> u32 {
        let bars = u32::try_from(bars).unwrap_or(u32::MAX);
        bars.saturating_mul(ROW_HEIGHT)
            .saturating_add(120)
            .max(400)
    }
}

impl Default for RankingBarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn bar_label(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{:.1}", v),
        None => NO_DATA_LABEL.to_string(),
    }
}
