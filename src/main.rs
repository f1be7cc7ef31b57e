//! Portfolio - single-page personal portfolio
//!
//! Biography, work experience, projects and skills on one scrolling page,
//! with navigation that follows the scroll position and a light/dark toggle.

mod app;
mod core;
mod ui;

use anyhow::Context;
use app::PortfolioApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;
use crate::core::content::Portfolio;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Portfolio...");

    let portfolio = Portfolio::embedded().context("Embedded portfolio content is invalid")?;
    tracing::info!(
        "Loaded {} projects, {} experience entries, {} skill groups",
        portfolio.projects.len(),
        portfolio.experience.len(),
        portfolio.skills.len()
    );

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {:#}", e);
        AppConfig::default()
    });

    let window = &config.window;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(format!("{} | Portfolio", portfolio.profile.name)),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        native_options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, &portfolio, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the window: {e}"))
}
