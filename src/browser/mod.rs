//! Terminal browser for the lab catalog.
//!
//! Three cooperating plugins share one deck runtime: the browser proper
//! (navigation, lab projection, copy and completion actions), the progress
//! rail, and the status bar with its notice board. [`build_layout`] produces
//! the shell they all render into; [`default_browser_bundle`] wires them up
//! in dismissal-before-commands order.

mod core;
mod rail;
mod status;
mod view;

pub use self::core::LabBrowserPlugin;
pub use self::rail::ProgressRailPlugin;
pub use self::status::{KEY_HINTS, NoticeBoard, StatusBarPlugin};
pub use self::view::{CodeKind, COPY_FLASH, LabView};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::layout::{Constraint, Direction, LayoutNode, LayoutTree};
use crate::progress::ProgressStore;
use crate::runtime::PluginBundle;

pub const HEADER_ZONE: &str = "app:labs.header";
pub const NAV_ZONE: &str = "app:labs.nav";
pub const CONTENT_ZONE: &str = "app:labs.content";
pub const RAIL_ZONE: &str = "app:labs.rail";
pub const STATUS_ZONE: &str = "app:labs.status";

/// Header / body / status shell with the nav, content, and rail split.
pub fn build_layout() -> LayoutTree {
    LayoutTree::new(LayoutNode {
        id: "app:labs.root".into(),
        direction: Direction::Column,
        constraints: vec![
            Constraint::Fixed(1),
            Constraint::Flex(1),
            Constraint::Fixed(1),
        ],
        children: vec![
            LayoutNode::leaf(HEADER_ZONE),
            LayoutNode {
                id: "app:labs.body".into(),
                direction: Direction::Row,
                constraints: vec![
                    Constraint::Percent(20),
                    Constraint::Flex(1),
                    Constraint::Percent(25),
                ],
                children: vec![
                    LayoutNode::leaf(NAV_ZONE),
                    LayoutNode::leaf(CONTENT_ZONE),
                    LayoutNode::leaf(RAIL_ZONE),
                ],
                gap: 1,
                padding: 0,
            },
            LayoutNode::leaf(STATUS_ZONE),
        ],
        gap: 0,
        padding: 0,
    })
}

/// Standard plugin set for the browser shell.
///
/// The status bar runs first so an active notice swallows its dismissing
/// key press; the rail runs last and only paints.
pub fn default_browser_bundle(
    browser: LabBrowserPlugin,
    catalog: Catalog,
    progress: Arc<ProgressStore>,
) -> PluginBundle {
    PluginBundle::new()
        .with_plugin(StatusBarPlugin::new(), -20)
        .with_plugin(browser, 0)
        .with_plugin(ProgressRailPlugin::new(catalog, progress), 80)
}
