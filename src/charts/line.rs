use crate::charts::figure::{Axis, Figure, Layout, LineStyle, ScatterTrace, Trace};
use crate::charts::palette::series_color;
use crate::models::{GlobalSeries, SelectedSeries};
use crate::utils::constants::{GLOBAL_MEAN_COLOR, UNCERTAINTY_COLOR};

const GLOBAL_TITLE: &str = "Average land temperature in the world";
const COUNTRY_TITLE: &str = "Average land temperature on the continents";
const X_AXIS_TITLE: &str = "Year";
const Y_AXIS_TITLE: &str = "Average Temperature, °C";

fn line_trace(
    x: Vec<String>,
    y: Vec<Option<f64>>,
    name: &str,
    color: &str,
    fill: Option<&str>,
) -> ScatterTrace {
    ScatterTrace {
        x,
        y,
        name: name.to_string(),
        mode: Some("lines".to_string()),
        fill: fill.map(str::to_string),
        connectgaps: false,
        line: LineStyle::color(color),
    }
}

fn year_layout(title: &str) -> Layout {
    Layout {
        xaxis: Some(Axis::titled(X_AXIS_TITLE)),
        yaxis: Some(Axis::titled(Y_AXIS_TITLE)),
        ..Layout::titled(title)
    }
}

/// Worldwide mean with a filled uncertainty band.
///
/// Trace order matters: the lower bound fills `tonexty`, i.e. up to the
/// upper bound drawn just before it.
pub struct GlobalTrendBuilder {
    title: String,
}

impl GlobalTrendBuilder {
    pub fn new() -> Self {
        Self {
            title: GLOBAL_TITLE.to_string(),
        }
    }

    pub fn build(&self, series: &GlobalSeries) -> Figure {
        let years = series.years();
        let upper = series.entries.iter().map(|e| e.upper_bound()).collect();
        let lower = series.entries.iter().map(|e| e.lower_bound()).collect();

        let data = vec![
            Trace::Scatter(line_trace(
                years.clone(),
                upper,
                "Uncertainty top",
                UNCERTAINTY_COLOR,
                None,
            )),
            Trace::Scatter(line_trace(
                years.clone(),
                lower,
                "Uncertainty bot",
                UNCERTAINTY_COLOR,
                Some("tonexty"),
            )),
            Trace::Scatter(line_trace(
                years,
                series.mean_temperatures(),
                "Average Temperature",
                GLOBAL_MEAN_COLOR,
                None,
            )),
        ];

        let layout = Layout {
            showlegend: Some(false),
            ..year_layout(&self.title)
        };

        Figure::new(data, layout)
    }
}

impl Default for GlobalTrendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per selected country, colored by its position in the list.
pub struct CountryTrendBuilder {
    title: String,
}

impl CountryTrendBuilder {
    pub fn new() -> Self {
        Self {
            title: COUNTRY_TITLE.to_string(),
        }
    }

    pub fn build(&self, selected: &SelectedSeries) -> Figure {
        let data = selected
            .series
            .iter()
            .enumerate()
            .map(|(position, s)| {
                Trace::Scatter(line_trace(
                    selected.years.clone(),
                    s.mean_temperatures.clone(),
                    &s.country,
                    series_color(position),
                    None,
                ))
            })
            .collect();

        Figure::new(data, year_layout(&self.title))
    }
}

impl Default for CountryTrendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountrySeries, YearlyGlobalEntry};
    use pretty_assertions::assert_eq;

    fn scatter(trace: &Trace) -> &ScatterTrace {
        match trace {
            Trace::Scatter(s) => s,
            other => panic!("expected a scatter trace, got {:?}", other),
        }
    }

    fn global_series() -> GlobalSeries {
        GlobalSeries {
            entries: vec![
                YearlyGlobalEntry {
                    year: "1900".to_string(),
                    mean_temperature: Some(8.5),
                    mean_uncertainty: Some(0.5),
                },
                YearlyGlobalEntry {
                    year: "1901".to_string(),
                    mean_temperature: None,
                    mean_uncertainty: None,
                },
                YearlyGlobalEntry {
                    year: "1902".to_string(),
                    mean_temperature: Some(8.75),
                    mean_uncertainty: None,
                },
            ],
        }
    }

    #[test]
    fn test_global_band_traces() {
        let figure = GlobalTrendBuilder::new().build(&global_series());

        assert_eq!(figure.data.len(), 3);
        let upper = scatter(&figure.data[0]);
        let lower = scatter(&figure.data[1]);
        let mean = scatter(&figure.data[2]);

        assert_eq!(upper.y, vec![Some(9.0), None, None]);
        assert_eq!(upper.fill, None);
        assert_eq!(lower.y, vec![Some(8.0), None, None]);
        assert_eq!(lower.fill.as_deref(), Some("tonexty"));
        assert_eq!(mean.y, vec![Some(8.5), None, Some(8.75)]);
        assert_eq!(mean.line.color, GLOBAL_MEAN_COLOR);

        for trace in [upper, lower, mean] {
            assert_eq!(trace.x, vec!["1900", "1901", "1902"]);
        }
        assert_eq!(figure.layout.showlegend, Some(false));
    }

    #[test]
    fn test_country_lines_colored_by_position() {
        let selected = SelectedSeries {
            years: vec!["1920".to_string()],
            series: vec![
                CountrySeries {
                    country: "Russia".to_string(),
                    mean_temperatures: vec![Some(-5.0)],
                },
                CountrySeries {
                    country: "Niger".to_string(),
                    mean_temperatures: vec![None],
                },
            ],
        };

        let figure = CountryTrendBuilder::new().build(&selected);

        assert_eq!(figure.data.len(), 2);
        let first = scatter(&figure.data[0]);
        let second = scatter(&figure.data[1]);
        assert_eq!(first.name, "Russia");
        assert_eq!(first.line.color, "rgb(0, 255, 255)");
        assert_eq!(second.name, "Niger");
        assert_eq!(second.line.color, "rgb(255, 0, 255)");
        assert_eq!(second.y, vec![None]);
    }

    #[test]
    fn test_colors_do_not_depend_on_names() {
        let make = |names: [&str; 2]| SelectedSeries {
            years: vec![],
            series: names
                .iter()
                .map(|n| CountrySeries {
                    country: n.to_string(),
                    mean_temperatures: vec![],
                })
                .collect(),
        };

        let a = CountryTrendBuilder::new().build(&make(["Chad", "Peru"]));
        let b = CountryTrendBuilder::new().build(&make(["Peru", "Chad"]));

        assert_eq!(scatter(&a.data[0]).line, scatter(&b.data[0]).line);
        assert_eq!(scatter(&a.data[1]).line, scatter(&b.data[1]).line);
    }
}
