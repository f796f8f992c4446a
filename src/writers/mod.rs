pub mod html_writer;

pub use html_writer::{write_figures_json, HtmlWriter};
