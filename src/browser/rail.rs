use std::sync::Arc;

use crate::Result;
use crate::catalog::Catalog;
use crate::fragment::{escape_text, project};
use crate::progress::{ProgressStore, glyph_for, strip_glyph};
use crate::runtime::{DeckPlugin, RuntimeContext};
use crate::width::truncate_display;

use super::RAIL_ZONE;

/// Right-hand checklist mirroring the catalog with completion glyphs.
///
/// The store is re-read on every paint, so completions land here without
/// any coupling to the plugin that writes them.
pub struct ProgressRailPlugin {
    catalog: Catalog,
    progress: Arc<ProgressStore>,
}

impl ProgressRailPlugin {
    pub fn new(catalog: Catalog, progress: Arc<ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    fn rail_fragment(&self, width: usize) -> String {
        let record = self.progress.load();
        let mut done_count = 0usize;
        let mut lines: Vec<String> = Vec::with_capacity(self.catalog.len() + 4);
        lines.push("<b>Lab Progress</b>".to_string());
        lines.push(String::new());

        for entry in self.catalog.entries() {
            let done = record.get(entry.id).copied().unwrap_or(false);
            if done {
                done_count += 1;
            }
            let label = format!("{} {}", glyph_for(done), strip_glyph(entry.title));
            let label = escape_text(&truncate_display(&label, width));
            lines.push(if done {
                format!("<b>{}</b>", label)
            } else {
                label
            });
        }

        lines.push(String::new());
        lines.push(format!(
            "<dim>{} / {} completed</dim>",
            done_count,
            self.catalog.len()
        ));
        lines.join("\n")
    }
}

impl DeckPlugin for ProgressRailPlugin {
    fn name(&self) -> &str {
        "labs.progress_rail"
    }

    fn before_render(&mut self, ctx: &mut RuntimeContext<'_>) -> Result<()> {
        let width = ctx.rect(RAIL_ZONE).map(|rect| rect.width).unwrap_or(30);
        let fragment = self.rail_fragment(width as usize);
        ctx.set_zone(RAIL_ZONE, project(&fragment, width).join("\n"));
        Ok(())
    }
}
