//! Demo host page.
//!
//! Plays the role the surrounding page normally does: supplies the catalog,
//! the mount point and the data signal, then prints what the renderer put
//! on screen at each stage.

mod fixtures;

use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use storefront_core::ProductId;
use storefront_render::{DataSignal, InMemoryMount, ListRenderer, RenderOptions};
use storefront_view::{carousel_nav, to_html};
use tracing_subscriber::EnvFilter;

const VIEWPORT_WIDTH: f64 = 1200.0;
const CARD_WIDTH: f64 = 320.0;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let catalog = fixtures::security_lineup()?;
    let mut mount = InMemoryMount::scrolling(VIEWPORT_WIDTH, CARD_WIDTH);
    let signal = DataSignal::new();

    // The backend answers a moment after the page is up.
    let resolver = signal.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        resolver.resolve(json!({
            "productIds": [
                "antivirus-plus",
                "internet-security",
                "total-security",
                "premium-security-individual"
            ],
            "recommendedProductId": "total-security"
        }));
    });

    let mut renderer = ListRenderer::new(
        catalog,
        RenderOptions {
            initial_product_ids: vec![ProductId::new("premium-security-individual")?],
            carousel: true,
            ..RenderOptions::default()
        },
    );

    renderer.mount(&mut mount);
    if let Some(content) = mount.content() {
        println!("--- provisional ---");
        println!("{}", to_html(&content));
    }

    let payload = signal.wait().await;
    renderer.resolve(&mut mount, &payload);

    if let Some(content) = mount.content() {
        println!("--- resolved ---");
        println!("{}", to_html(&content));
    }

    if let Some(carousel) = renderer.carousel() {
        let nav = carousel.nav();
        println!("--- carousel controls ---");
        println!("{}", to_html(&carousel_nav(nav.prev_enabled, nav.next_enabled)));
    }

    Ok(())
}
