//! Three-phase interconnect walkthrough rendered inside the lab content.
//!
//! The simulation is conceptual: it owns a single phase value and projects
//! it as a link diagram between an OCI VCN and a peer network. No state is
//! persisted; every render of the interconnect lab starts a fresh instance
//! back at the planning phase.

/// Design/bring-up/verification phases of a private interconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimPhase {
    #[default]
    Plan,
    Provision,
    Test,
}

impl SimPhase {
    /// How much of the link bar is filled, in percent.
    pub fn fill_percent(self) -> u8 {
        match self {
            SimPhase::Plan => 0,
            SimPhase::Provision => 70,
            SimPhase::Test => 100,
        }
    }

    /// Whether the link is considered up in this phase.
    pub fn link_active(self) -> bool {
        !matches!(self, SimPhase::Plan)
    }

    pub fn label(self) -> &'static str {
        match self {
            SimPhase::Plan => "1. Plan",
            SimPhase::Provision => "2. Provision",
            SimPhase::Test => "3. Test",
        }
    }

    pub fn link_status(self) -> &'static str {
        match self {
            SimPhase::Plan => "Phase: Plan (no link yet)",
            SimPhase::Provision => "Phase: Provisioning (link coming up)",
            SimPhase::Test => "Phase: Test (link up, traffic flowing)",
        }
    }

    pub fn status_text(self) -> &'static str {
        match self {
            SimPhase::Plan => {
                "Current phase: Plan — verify no overlapping CIDRs, decide which subnets should communicate, and decide on FastConnect vs VPN."
            }
            SimPhase::Provision => {
                "Current phase: Provision — DRG attached, FastConnect or VPN being established, BGP sessions negotiated, routes exchanged."
            }
            SimPhase::Test => {
                "Current phase: Test — you can ping between private hosts, run traceroute, and test application connectivity across clouds."
            }
        }
    }
}

/// Display width of the link bar in cells.
const LINK_BAR_CELLS: u16 = 20;

#[derive(Debug, Clone, Default)]
pub struct InterconnectSim {
    phase: SimPhase,
}

impl InterconnectSim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: SimPhase) {
        self.phase = phase;
    }

    /// Markup fragment for the simulation card.
    pub fn fragment(&self) -> String {
        let phase = self.phase;
        let filled = (LINK_BAR_CELLS as u32 * phase.fill_percent() as u32 / 100) as u16;
        let empty = LINK_BAR_CELLS - filled;
        let bar: String = "█".repeat(filled as usize) + &"░".repeat(empty as usize);
        let bar_style = if phase.link_active() { "b" } else { "dim" };

        let phase_row = [SimPhase::Plan, SimPhase::Provision, SimPhase::Test]
            .iter()
            .map(|candidate| {
                if *candidate == phase {
                    format!("<rev> {} </rev>", candidate.label())
                } else {
                    format!(" {} ", candidate.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = String::new();
        out.push_str("<b>Interconnect Simulation</b>\n");
        out.push_str(
            "Step through the phases (keys 1-3) to visualize how traffic flows between OCI and another environment over a private link. No real connectivity is created – this is a mental model you can reuse in real designs.\n",
        );
        out.push('\n');
        out.push_str("  [ OCI VCN 10.0.0.0/16 ]\n");
        out.push_str(&format!(
            "    <{style}>{bar}</{style}> {status}\n",
            style = bar_style,
            bar = bar,
            status = phase.link_status()
        ));
        out.push_str("  [ Peer Network 172.31.0.0/16 (AWS / On-Prem) ]\n");
        out.push('\n');
        out.push_str(&phase_row);
        out.push('\n');
        out.push_str("<dim>Plan: CIDR, routing, security, BGP design</dim>\n");
        out.push_str("<dim>Provision: DRG, FastConnect / VPN, peer gateway</dim>\n");
        out.push_str("<dim>Test: ping, traceroute, app reachability</dim>\n");
        out.push('\n');
        out.push_str(phase.status_text());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_plan() {
        let sim = InterconnectSim::new();
        assert_eq!(sim.phase(), SimPhase::Plan);
        assert_eq!(sim.phase().fill_percent(), 0);
        assert!(!sim.phase().link_active());
    }

    #[test]
    fn fill_is_monotonic_across_phases() {
        let order = [SimPhase::Plan, SimPhase::Provision, SimPhase::Test];
        let fills: Vec<u8> = order.iter().map(|p| p.fill_percent()).collect();
        assert_eq!(fills, vec![0, 70, 100]);
        assert!(fills.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn set_phase_swaps_status_strings() {
        let mut sim = InterconnectSim::new();
        sim.set_phase(SimPhase::Provision);
        let fragment = sim.fragment();
        assert!(fragment.contains("Phase: Provisioning (link coming up)"));
        assert!(fragment.contains("Current phase: Provision — DRG attached"));
        assert!(!fragment.contains("Phase: Plan (no link yet)"));
    }

    #[test]
    fn bar_fill_matches_percent() {
        let mut sim = InterconnectSim::new();
        assert_eq!(sim.fragment().matches('█').count(), 0);

        sim.set_phase(SimPhase::Provision);
        assert_eq!(sim.fragment().matches('█').count(), 14);

        sim.set_phase(SimPhase::Test);
        assert_eq!(sim.fragment().matches('█').count(), 20);
    }

    #[test]
    fn active_phase_is_highlighted() {
        let mut sim = InterconnectSim::new();
        for (phase, marker) in [
            (SimPhase::Test, "<rev> 3. Test </rev>"),
            (SimPhase::Plan, "<rev> 1. Plan </rev>"),
            (SimPhase::Provision, "<rev> 2. Provision </rev>"),
        ] {
            sim.set_phase(phase);
            let fragment = sim.fragment();
            assert!(fragment.contains(marker));
            assert_eq!(fragment.matches("<rev>").count(), 1);
        }
    }

    #[test]
    fn diagram_names_both_endpoints() {
        let fragment = InterconnectSim::new().fragment();
        assert!(fragment.contains("OCI VCN 10.0.0.0/16"));
        assert!(fragment.contains("Peer Network 172.31.0.0/16 (AWS / On-Prem)"));
    }
}
