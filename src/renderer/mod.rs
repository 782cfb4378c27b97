use crate::config::DisplayConfig;
use crate::models::StatusTables;
use log::{info, warn};

pub(crate) mod colours;
pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// A display surface for the status tables.
pub trait StatusRenderer {
    fn name(&self) -> &'static str;

    /// Whether the surface could be set up in this environment.
    fn active(&self) -> bool;

    /// Draws the present sections. Absent sections are never an error.
    fn render(&mut self, tables: &StatusTables);
}

/// Picks the configured renderer, falling back to text when the html page is unusable.
pub fn select_renderer(config: &DisplayConfig) -> Box<dyn StatusRenderer> {
    match config.renderer.to_lowercase().as_str() {
        "html" => {
            let html = HtmlRenderer::open(&config.html_file);
            if html.active() {
                return Box::new(html);
            }
            warn!("HTML status page unavailable, falling back to text output");
        }
        "text" => {}
        other => warn!("Unknown renderer '{}', using text output", other),
    }
    info!("Rendering status as text");
    Box::new(TextRenderer::stdout())
}
