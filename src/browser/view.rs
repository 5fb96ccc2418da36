use std::time::Duration;

use crate::catalog::LabEntry;
use crate::fragment::{escape_text, project};
use crate::sim::InterconnectSim;

/// How long a copy confirmation stays on the code block header.
pub const COPY_FLASH: Duration = Duration::from_millis(1200);

/// Which code sample a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Cli,
    Terraform,
}

impl CodeKind {
    pub fn heading(self) -> &'static str {
        match self {
            CodeKind::Cli => "OCI CLI example",
            CodeKind::Terraform => "Terraform example",
        }
    }

    pub fn key_hint(self) -> char {
        match self {
            CodeKind::Cli => 'c',
            CodeKind::Terraform => 't',
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            CodeKind::Cli => "cli",
            CodeKind::Terraform => "tf",
        }
    }

    fn index(self) -> usize {
        match self {
            CodeKind::Cli => 0,
            CodeKind::Terraform => 1,
        }
    }
}

/// Projection state for the lab currently shown in the content zone.
///
/// A view is built fresh every time a lab is opened, so opening the
/// interconnect lab always restarts its simulation at the planning phase.
pub struct LabView {
    lab: LabEntry,
    sim: Option<InterconnectSim>,
    flashes: [Option<Duration>; 2],
    scroll: usize,
}

impl LabView {
    pub fn new(lab: LabEntry) -> Self {
        let sim = (lab.id == "interconnect").then(InterconnectSim::new);
        Self {
            lab,
            sim,
            flashes: [None, None],
            scroll: 0,
        }
    }

    pub fn lab(&self) -> &LabEntry {
        &self.lab
    }

    pub fn sim(&self) -> Option<&InterconnectSim> {
        self.sim.as_ref()
    }

    pub fn sim_mut(&mut self) -> Option<&mut InterconnectSim> {
        self.sim.as_mut()
    }

    /// Raw sample text for a copy action. This is the byte-exact catalog
    /// content, not the escaped display form.
    pub fn sample(&self, kind: CodeKind) -> Option<&'static str> {
        match kind {
            CodeKind::Cli => self.lab.cli,
            CodeKind::Terraform => self.lab.terraform,
        }
    }

    /// Composite id for a code block's copy control, e.g. `compute-cli`.
    pub fn block_id(&self, kind: CodeKind) -> String {
        format!("{}-{}", self.lab.id, kind.suffix())
    }

    /// Starts (or restarts) the copy confirmation on one block. Each block
    /// runs its own clock, so copying both samples shows both confirmations.
    pub fn start_flash(&mut self, target: CodeKind) {
        self.flashes[target.index()] = Some(Duration::ZERO);
    }

    /// Advances every running copy confirmation. Returns true when one just
    /// expired and the content zone needs repainting.
    pub fn tick_flash(&mut self, elapsed: Duration) -> bool {
        let mut expired = false;
        for slot in self.flashes.iter_mut() {
            if let Some(run) = slot.as_mut() {
                *run += elapsed;
                if *run >= COPY_FLASH {
                    *slot = None;
                    expired = true;
                }
            }
        }
        expired
    }

    fn flash_active(&self, kind: CodeKind) -> bool {
        self.flashes[kind.index()].is_some()
    }

    pub fn page_up(&mut self, page: usize) {
        self.scroll = self.scroll.saturating_sub(page.max(1));
    }

    pub fn page_down(&mut self, page: usize) {
        self.scroll += page.max(1);
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    /// Projects the lab into `width`-wide styled lines and drops everything
    /// above the scroll offset. The offset is clamped so the last page stays
    /// reachable after a resize shrinks the zone.
    pub fn visible_content(&mut self, width: u16, height: u16) -> String {
        let lines = project(&self.fragment(), width);
        let rows = height.max(1) as usize;
        let max_scroll = lines.len().saturating_sub(rows);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }
        lines[self.scroll..].join("\n")
    }

    /// Assembles the markup fragment for this lab: title, badges, overview,
    /// numbered steps, code samples, the optional simulation card, and the
    /// completion action.
    pub fn fragment(&self) -> String {
        let lab = &self.lab;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("<b>{}</b>", escape_text(lab.title)));
        lines.push(format!(
            "<rev> {} </rev> <rev> Estimated: {} </rev> <rev> Cost: {} </rev>",
            escape_text(lab.level),
            escape_text(lab.time),
            escape_text(lab.cost)
        ));
        lines.push(String::new());
        lines.push(escape_text(lab.overview));
        lines.push(String::new());

        for (idx, step) in lab.steps.iter().enumerate() {
            lines.push(format!("<b>Step {}.</b> {}", idx + 1, escape_text(step)));
        }

        if let Some(code) = lab.cli {
            lines.push(String::new());
            self.push_code_block(&mut lines, CodeKind::Cli, code);
        }
        if let Some(code) = lab.terraform {
            lines.push(String::new());
            self.push_code_block(&mut lines, CodeKind::Terraform, code);
        }
        if let Some(sim) = self.sim.as_ref() {
            lines.push(String::new());
            lines.push(sim.fragment().trim_end().to_string());
        }

        lines.push(String::new());
        lines.push("<rev> [m] Mark lab as complete ✔ </rev>".to_string());
        lines.join("\n")
    }

    fn push_code_block(&self, lines: &mut Vec<String>, kind: CodeKind, code: &str) {
        let action = if self.flash_active(kind) {
            "Copied!"
        } else {
            "Copy"
        };
        lines.push(format!(
            "<dim>{}</dim>  [{}] {}",
            kind.heading(),
            kind.key_hint(),
            action
        ));
        lines.push(escape_text(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::sim::SimPhase;

    fn entry(id: &str) -> LabEntry {
        *Catalog::builtin().get(id).unwrap()
    }

    #[test]
    fn opening_a_lab_restarts_its_simulation() {
        let mut view = LabView::new(entry("interconnect"));
        view.sim_mut().unwrap().set_phase(SimPhase::Test);
        assert_eq!(view.sim().unwrap().phase(), SimPhase::Test);

        let reopened = LabView::new(entry("interconnect"));
        assert_eq!(reopened.sim().unwrap().phase(), SimPhase::Plan);
    }

    #[test]
    fn only_the_interconnect_lab_carries_a_simulation() {
        assert!(LabView::new(entry("compute")).sim().is_none());
        assert!(LabView::new(entry("interconnect")).sim().is_some());
    }

    #[test]
    fn fragment_keeps_the_catalog_section_order() {
        let view = LabView::new(entry("compute"));
        let fragment = view.fragment();

        let title = fragment.find("Compute: Launch Your First Instance").unwrap();
        let badge = fragment.find("Estimated:").unwrap();
        let step = fragment.find("<b>Step 1.</b>").unwrap();
        let cli = fragment.find("OCI CLI example").unwrap();
        let terraform = fragment.find("Terraform example").unwrap();
        let complete = fragment.find("[m] Mark lab as complete ✔").unwrap();

        assert!(title < badge);
        assert!(badge < step);
        assert!(step < cli);
        assert!(cli < terraform);
        assert!(terraform < complete);
    }

    #[test]
    fn copy_controls_carry_composite_block_ids() {
        let view = LabView::new(entry("compute"));
        assert_eq!(view.block_id(CodeKind::Cli), "compute-cli");
        assert_eq!(view.block_id(CodeKind::Terraform), "compute-tf");
    }

    #[test]
    fn every_lab_numbers_its_full_step_list() {
        for lab in Catalog::builtin().entries() {
            let fragment = LabView::new(*lab).fragment();
            let mut last = 0;
            for (idx, step) in lab.steps.iter().enumerate() {
                let marker = format!("<b>Step {}.</b> {}", idx + 1, escape_text(step));
                let at = fragment
                    .find(&marker)
                    .unwrap_or_else(|| panic!("{}: step {} missing", lab.id, idx + 1));
                assert!(idx == 0 || at > last, "{}: step {} out of order", lab.id, idx + 1);
                last = at;
            }
            let beyond = format!("Step {}.", lab.steps.len() + 1);
            assert!(!fragment.contains(&beyond));
        }
    }

    #[test]
    fn projected_code_shows_literal_placeholders() {
        let mut view = LabView::new(entry("compute"));
        let content = view.visible_content(200, 60);
        assert!(content.contains("<compartment_ocid>"));
        assert!(!content.contains("&lt;"));
    }

    #[test]
    fn copy_flash_swaps_the_action_label_until_it_expires() {
        let mut view = LabView::new(entry("compute"));
        assert!(view.fragment().contains("[c] Copy"));

        view.start_flash(CodeKind::Cli);
        let flashed = view.fragment();
        assert!(flashed.contains("[c] Copied!"));
        assert!(flashed.contains("[t] Copy"));

        assert!(!view.tick_flash(Duration::from_millis(600)));
        assert!(view.fragment().contains("[c] Copied!"));

        assert!(view.tick_flash(Duration::from_millis(600)));
        assert!(!view.fragment().contains("Copied!"));
    }

    #[test]
    fn each_code_block_flashes_on_its_own_clock() {
        let mut view = LabView::new(entry("compute"));
        view.start_flash(CodeKind::Cli);
        assert!(!view.tick_flash(Duration::from_millis(600)));
        view.start_flash(CodeKind::Terraform);

        let fragment = view.fragment();
        assert!(fragment.contains("[c] Copied!"));
        assert!(fragment.contains("[t] Copied!"));

        assert!(view.tick_flash(Duration::from_millis(700)));
        let fragment = view.fragment();
        assert!(!fragment.contains("[c] Copied!"));
        assert!(fragment.contains("[t] Copied!"));

        assert!(view.tick_flash(Duration::from_millis(600)));
        assert!(!view.fragment().contains("Copied!"));
    }

    #[test]
    fn recopy_restarts_the_flash_window() {
        let mut view = LabView::new(entry("compute"));
        view.start_flash(CodeKind::Cli);
        assert!(!view.tick_flash(Duration::from_millis(900)));

        view.start_flash(CodeKind::Cli);
        assert!(!view.tick_flash(Duration::from_millis(900)));
        assert!(view.fragment().contains("[c] Copied!"));

        assert!(view.tick_flash(Duration::from_millis(400)));
    }

    #[test]
    fn scroll_clamps_to_the_last_page() {
        let mut view = LabView::new(entry("compute"));
        view.page_down(10_000);
        let content = view.visible_content(60, 8);
        assert!(content.contains("[m] Mark lab as complete ✔"));

        view.scroll_home();
        let content = view.visible_content(60, 8);
        assert!(content.contains("Compute: Launch Your First Instance"));
    }
}
