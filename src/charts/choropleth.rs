use crate::charts::figure::{
    ChoroplethTrace, ColorBar, Figure, Geo, GridAxis, Layout, LineStyle, Marker, Projection,
    Rotation, Trace,
};
use crate::models::CountryMeanEntry;
use crate::utils::constants::{BORDER_COLOR, GRID_COLOR, NO_DATA_COLOR, OCEAN_COLOR};

const TITLE: &str = "Average land temperature in countries";
const COLORBAR_TITLE: &str = "# Average<br>Temperature,<br>°C";

/// World map colored by each country's mean temperature.
///
/// Countries with no value get a `null` z and show in the plain land color,
/// outside the color scale.
pub struct ChoroplethBuilder {
    title: String,
    rotation: Rotation,
}

impl ChoroplethBuilder {
    pub fn new() -> Self {
        Self {
            title: TITLE.to_string(),
            rotation: Rotation { lon: 60.0, lat: 10.0 },
        }
    }

    pub fn build(&self, entries: &[CountryMeanEntry]) -> Figure {
        let countries: Vec<String> = entries.iter().map(|e| e.country.clone()).collect();
        let z: Vec<Option<f64>> = entries.iter().map(|e| e.mean_temperature).collect();
        let (zmin, zmax) = value_range(&z).unzip();

        let trace = ChoroplethTrace {
            locations: countries.clone(),
            z,
            text: countries,
            locationmode: "country names".to_string(),
            zmin,
            zmax,
            colorscale: "RdBu".to_string(),
            reversescale: true,
            marker: Marker {
                line: LineStyle::color(BORDER_COLOR).with_width(1.0),
            },
            colorbar: ColorBar {
                title: COLORBAR_TITLE.into(),
                tickprefix: String::new(),
            },
        };

        let layout = Layout {
            geo: Some(Geo {
                showframe: false,
                showocean: true,
                oceancolor: OCEAN_COLOR.to_string(),
                showland: true,
                landcolor: NO_DATA_COLOR.to_string(),
                projection: Projection {
                    kind: "orthographic".to_string(),
                    rotation: self.rotation.clone(),
                },
                lonaxis: grid(),
                lataxis: grid(),
            }),
            ..Layout::titled(&self.title)
        };

        Figure::new(vec![Trace::Choropleth(trace)], layout)
    }
}

impl Default for ChoroplethBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn grid() -> GridAxis {
    GridAxis {
        showgrid: true,
        gridcolor: GRID_COLOR.to_string(),
    }
}

/// Smallest and largest defined value
pub fn value_range(values: &[Option<f64>]) -> Option<(f64, f64)> {
    values.iter().flatten().fold(None, |range, &v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
