//! Declarative chart descriptions in the shape Plotly.js consumes.
//!
//! A [`Figure`] serialises to `{"data": [...], "layout": {...}}` and can be
//! handed to `Plotly.newPlot` unchanged. Missing values are `None` and
//! serialise as `null`, which Plotly draws as a gap or an uncolored region.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choropleth(ChoroplethTrace),
    Bar(BarTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub z: Vec<Option<f64>>,
    pub text: Vec<String>,
    pub locationmode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmax: Option<f64>,
    pub colorscale: String,
    pub reversescale: bool,
    pub marker: Marker,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<String>,
    pub orientation: String,
    pub text: Vec<String>,
    pub textposition: String,
    pub cliponaxis: bool,
    pub marker: BarMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    pub connectgaps: bool,
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl LineStyle {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            width: None,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
    pub tickprefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Layout {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automargin: Option<bool>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub showframe: bool,
    pub showocean: bool,
    pub oceancolor: String,
    pub showland: bool,
    pub landcolor: String,
    pub projection: Projection,
    pub lonaxis: GridAxis,
    pub lataxis: GridAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rotation {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridAxis {
    pub showgrid: bool,
    pub gridcolor: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_is_tagged_with_plotly_type() {
        let trace = Trace::Scatter(ScatterTrace {
            x: vec!["1900".to_string(), "1901".to_string()],
            y: vec![Some(8.5), None],
            name: "mean".to_string(),
            mode: Some("lines".to_string()),
            fill: None,
            connectgaps: false,
            line: LineStyle::color("rgb(0, 0, 0)"),
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "scatter",
                "x": ["1900", "1901"],
                "y": [8.5, null],
                "name": "mean",
                "mode": "lines",
                "connectgaps": false,
                "line": {"color": "rgb(0, 0, 0)"}
            })
        );
    }

    #[test]
    fn test_layout_skips_unset_fields() {
        let layout = Layout::titled("Average land temperature in the world");
        let value = serde_json::to_value(&layout).unwrap();

        assert_eq!(
            value,
            json!({"title": {"text": "Average land temperature in the world"}})
        );
    }

    #[test]
    fn test_projection_type_key() {
        let projection = Projection {
            kind: "orthographic".to_string(),
            rotation: Rotation { lon: 60.0, lat: 10.0 },
        };
        let value = serde_json::to_value(&projection).unwrap();
        assert_eq!(value["type"], "orthographic");
    }
}
