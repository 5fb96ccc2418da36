//! Custom Catalog Demo
//!
//! Runs the browser shell against a private two-lab catalog instead of the
//! seeded OCI set, with session-only progress. Shows the seams a team would
//! use to ship their own deck: `Catalog::new`, a swapped `ProgressBackend`,
//! and `default_browser_bundle`.
//!
//! ```bash
//! cargo run --example custom_catalog
//! ```

use std::sync::Arc;
use std::time::Duration;

use labdeck::progress::MemoryBackend;
use labdeck::{
    AnsiRenderer, Catalog, CliDriver, CliDriverError, DeckError, DeckRuntime, LabBrowserPlugin,
    LabEntry, Osc52Clipboard, ProgressStore, Result, RuntimeConfig, Size, build_layout,
    default_browser_bundle,
};

const TICK_INTERVAL: Duration = Duration::from_millis(200);

fn main() -> Result<()> {
    let catalog = Catalog::new(vec![
        LabEntry {
            id: "landing-zone",
            title: "Landing Zone: Bootstrap a Sandbox Compartment",
            level: "Intermediate",
            time: "30 min",
            cost: "Free Tier",
            overview: "Carve out an isolated compartment with its own budget \
                       and policy set, so experiments never touch production.",
            steps: &[
                "Create the sandbox compartment under the tenancy root.",
                "Attach a budget with a monthly alert threshold.",
                "Add a policy granting the lab group manage access inside it.",
            ],
            cli: Some(
                "oci iam compartment create \\\n  --name sandbox \\\n  --description \"Lab sandbox\" \\\n  --compartment-id <tenancy_ocid>",
            ),
            terraform: Some(
                "resource \"oci_identity_compartment\" \"sandbox\" {\n  name           = \"sandbox\"\n  description    = \"Lab sandbox\"\n  compartment_id = var.tenancy_ocid\n}",
            ),
        },
        LabEntry {
            id: "tagging",
            title: "Tagging: Label Resources Before They Ship",
            level: "Beginner",
            time: "15 min",
            cost: "Free Tier",
            overview: "Define a tag namespace and a default tag so every new \
                       resource lands with an owner and a cost center.",
            steps: &[
                "Create a tag namespace for the platform team.",
                "Add owner and cost-center tag definitions.",
                "Set a compartment tag default that applies them on create.",
            ],
            cli: Some(
                "oci iam tag-namespace create \\\n  --compartment-id <compartment_ocid> \\\n  --name platform \\\n  --description \"Platform tags\"",
            ),
            terraform: None,
        },
    ])
    .map_err(|err| DeckError::Backend(err.to_string()))?;

    let progress = Arc::new(ProgressStore::new(MemoryBackend::new()));
    let browser = LabBrowserPlugin::new(
        catalog.clone(),
        Box::new(Osc52Clipboard::new()),
        Arc::clone(&progress),
    );

    let mut config = RuntimeConfig::default();
    config.tick_interval = TICK_INTERVAL;

    let mut runtime = DeckRuntime::with_config(
        build_layout(),
        AnsiRenderer::with_default(),
        Size::new(120, 32),
        config,
    )?;
    runtime.register_bundle(default_browser_bundle(browser, catalog, progress));

    CliDriver::new(runtime).run().map_err(|err| match err {
        CliDriverError::Runtime(deck_err) => deck_err,
        other => DeckError::Backend(other.to_string()),
    })
}
