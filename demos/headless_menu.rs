//! Headless walkthrough of the tab menu.
//!
//! Demonstrates:
//! - Wiring a controller to a page renderer
//! - Opening the menu near the viewport corner (both flips)
//! - Clicking a row to switch tabs
//!
//! Usage:
//!   cargo run --example headless_menu
//!   cargo run --example headless_menu -- --debug
//!   cargo run --example headless_menu -- --dark

// ============================================================================
// Imports
// ============================================================================

use tab_list_menu::{
    ClickTarget, Controller, ControllerPort, HeadlessPage, InMemoryTabs, MenuOptions, PageEvent,
    Point, RendererHandle, TabDescriptor, TabId, channel,
};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug = args.iter().any(|a| a == "--debug");
    let dark = args.iter().any(|a| a == "--dark");

    let filter = if debug {
        "tab_list_menu=debug"
    } else {
        "tab_list_menu=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // ------------------------------------------------------------------------
    // Platform with two windows
    // ------------------------------------------------------------------------

    let platform = InMemoryTabs::new();
    platform.open(
        1,
        TabDescriptor::new(TabId::new(1), "Inbox (3) - Mail")
            .with_icon("https://mail.example/favicon.ico")
            .with_active(true),
    );
    platform.open(1, TabDescriptor::new(TabId::new(2), "Quarterly report draft"));
    platform.open(
        2,
        TabDescriptor::new(TabId::new(3), "Rust Standard Library")
            .with_icon("https://doc.rust-lang.org/favicon.ico")
            .with_active(true),
    );

    // ------------------------------------------------------------------------
    // Controller and one renderer
    // ------------------------------------------------------------------------

    let controller = Controller::new(platform.clone());
    let (port, inbox) = channel();
    let server = tokio::spawn({
        let controller = controller.clone();
        async move { controller.serve(inbox).await }
    });

    let page = HeadlessPage::new(1280.0, 720.0).with_dark_scheme(dark);
    let renderer = RendererHandle::spawn(page.clone(), MenuOptions::new(), ControllerPort::new(port));
    controller.attach_renderer(TabId::new(1), renderer.port());

    // ------------------------------------------------------------------------
    // Open the menu near the bottom-right corner
    // ------------------------------------------------------------------------

    renderer
        .dispatch_and_wait(PageEvent::PointerMove(Point::new(1250.0, 700.0)))
        .await?;

    let Some(pending) = controller.on_trigger(TabId::new(1)).await else {
        anyhow::bail!("renderer did not receive showMenu");
    };
    println!("[1] showMenu -> {:?}", pending.await?.status);

    let Some(attached) = page.overlay() else {
        anyhow::bail!("no overlay on page");
    };
    println!(
        "    {} rows at {:?} (size {:?})",
        attached.overlay.row_count(),
        attached.origin,
        attached.size
    );
    for row in &attached.overlay.rows {
        let leading = if row.leading.is_icon() { "icon" } else { "    " };
        println!("    [{leading}] {} ({})", row.title, row.tab_id);
    }

    // ------------------------------------------------------------------------
    // Pick the second row
    // ------------------------------------------------------------------------

    let outcome = renderer
        .dispatch_and_wait(PageEvent::Click(ClickTarget::Row {
            overlay: attached.handle,
            index: 1,
        }))
        .await?;
    println!("[2] row click -> {outcome:?}, overlays left: {}", page.overlay_count());

    // Closing every renderer-side port ends the controller loop.
    renderer.shutdown().await;
    server.await?;

    println!("[3] active tab in window 1: {:?}", platform.active_tab(1));
    Ok(())
}
