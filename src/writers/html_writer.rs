use crate::error::Result;
use crate::pipeline::Dashboard;
use crate::utils::constants::PLOTLY_CDN_URL;
use std::fs;
use std::path::Path;
use tracing::info;

const PAGE_TITLE: &str = "Global land temperatures";

/// Renders a dashboard into one self-contained HTML page driven by Plotly.js
pub struct HtmlWriter {
    title: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
        }
    }

    pub fn render(&self, dashboard: &Dashboard) -> Result<String> {
        let mut containers = String::new();
        let mut scripts = String::new();

        for (id, figure) in dashboard.figures() {
            let json = escape_script(&figure.to_json()?);
            containers.push_str(&format!(
                "    <div id=\"{}\" class=\"chart\"></div>\n",
                id
            ));
            scripts.push_str(&format!("      plot(\"{}\", {});\n", id, json));
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>
      body {{ font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }}
      .chart {{ margin-bottom: 2rem; }}
    </style>
  </head>
  <body>
    <h1>{title}</h1>
{containers}    <script>
      function plot(id, figure) {{
        Plotly.newPlot(id, figure.data, figure.layout, {{responsive: true}});
      }}
{scripts}    </script>
  </body>
</html>
"#,
            title = escape_html(&self.title),
            plotly = PLOTLY_CDN_URL,
            containers = containers,
            scripts = scripts,
        ))
    }

    /// Render and write the page, creating parent directories as needed
    pub fn write(&self, dashboard: &Dashboard, path: &Path) -> Result<()> {
        let html = self.render(dashboard)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, html)?;

        info!("Wrote dashboard to {}", path.display());
        Ok(())
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the figures as pretty JSON keyed by element id
pub fn write_figures_json(dashboard: &Dashboard, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(dashboard)?)?;

    info!("Wrote figure descriptions to {}", path.display());
    Ok(())
}

// JSON inside <script> must not close the tag early.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
