//! # checkout-demo
//!
//! Runs a checkout: builds an order, prints its total and pays it with each
//! configured processor in turn.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in demo (Keyboard, Mouse, Monitor; debit card then PayPal)
//! checkout-demo
//!
//! # Custom items and processors
//! export CHECKOUT_CONFIG=config/checkout.toml
//! checkout-demo
//! ```

use anyhow::Context;
use checkout_core::CheckoutConfig;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file if present

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = load_config()?;
    let mut order = config.build_order();
    debug!(order_id = %order.id, items = order.len(), "order built");

    println!("Total amount: {}", order.total_price());

    for mut processor in config.build_processors() {
        order
            .process_payment(processor.as_mut())
            .with_context(|| format!("{} payment failed", processor.method()))?;
    }

    info!(order_id = %order.id, status = %order.status(), "checkout finished");
    Ok(())
}

/// Load the checkout from `CHECKOUT_CONFIG` if set, otherwise the built-in demo
fn load_config() -> anyhow::Result<CheckoutConfig> {
    match std::env::var("CHECKOUT_CONFIG") {
        Ok(path) => {
            info!("Loading checkout from {}", path);
            CheckoutConfig::from_file(&path)
                .with_context(|| format!("invalid checkout config {}", path))
        }
        Err(_) => Ok(CheckoutConfig::default()),
    }
}
