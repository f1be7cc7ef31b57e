//! Main application state and UI coordination

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::core::config::{download_dir, AppConfig};
use crate::core::content::Portfolio;
use crate::core::page::{build_page, PageView};
use crate::core::scroll::{ScrollEmitter, Subscription};
use crate::core::theme::ThemeToggle;
use crate::core::tracker::{Section, SectionLayout, SectionTracker};
use crate::ui::block_renderer::{BlockAction, RenderContext};
use crate::ui::header::{HeaderAction, HeaderPanel};
use crate::ui::page::PagePanel;
use crate::ui::theme::{ContextSurface, Palette};

/// Main application state
pub struct PortfolioApp {
    /// Page model built once from the content
    pub page: PageView,
    /// Application configuration
    pub config: AppConfig,
    /// Active section, updated by scroll events
    pub tracker: Rc<RefCell<SectionTracker>>,
    /// Display theme
    pub theme: ThemeToggle,
    /// Turns scroll offsets into scroll events
    scroll_events: ScrollEmitter,
    /// Keeps the tracker attached while the page is mounted
    scroll_subscription: Option<Subscription>,
    /// Section geometry from the last frame
    layout: SectionLayout,
    /// Offset to jump to on the next frame
    pending_jump: Option<f32>,
}

impl PortfolioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, portfolio: &Portfolio, config: AppConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = ThemeToggle::new();
        theme.apply(&mut ContextSurface::new(&cc.egui_ctx));

        let mut app = Self::with_content(portfolio, config, theme);
        app.mount();
        app
    }

    fn with_content(portfolio: &Portfolio, config: AppConfig, theme: ThemeToggle) -> Self {
        let tracker = SectionTracker::new(config.scroll.lookahead);
        Self {
            page: build_page(portfolio),
            config,
            tracker: Rc::new(RefCell::new(tracker)),
            theme,
            scroll_events: ScrollEmitter::new(),
            scroll_subscription: None,
            layout: SectionLayout::new(),
            pending_jump: None,
        }
    }

    /// Attach the tracker to scroll events
    pub fn mount(&mut self) {
        if self.scroll_subscription.is_none() {
            let tracker = Rc::clone(&self.tracker);
            self.scroll_subscription = Some(self.scroll_events.subscribe(tracker));
        }
    }

    /// Detach the tracker from scroll events
    pub fn unmount(&mut self) {
        self.scroll_subscription = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll_subscription.is_some()
    }

    /// Currently highlighted section
    pub fn active_section(&self) -> Section {
        self.tracker.borrow().active()
    }

    /// Feed the scroll state measured this frame
    pub fn on_frame_scrolled(&mut self, offset: f32, layout: SectionLayout) {
        self.scroll_events.observe(offset, &layout);
        self.layout = layout;
    }

    /// Flip the display theme
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme.toggle(&mut ContextSurface::new(ctx));
    }

    /// Carry out a user action
    fn handle_action(&mut self, action: BlockAction) {
        match action {
            BlockAction::ScrollTo(section) => match self.layout.get(section) {
                Some(region) => self.pending_jump = Some(region.top.max(0.0)),
                None => tracing::debug!("Section {} not laid out yet", section.id()),
            },
            BlockAction::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::error!("Failed to open {}: {}", url, e);
                }
            }
            BlockAction::DownloadAsset { path, download_name } => {
                let Some(dest) = download_dir() else {
                    tracing::error!("No download directory for {}", download_name);
                    return;
                };
                match self.config.assets.save_copy(&path, &download_name, &dest) {
                    Ok(saved) => {
                        if let Err(e) = open::that(&saved) {
                            tracing::error!("Failed to open {}: {}", saved.display(), e);
                        }
                    }
                    Err(e) => tracing::error!("Download failed: {:#}", e),
                }
            }
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::D)) {
            self.toggle_theme(ctx);
        }

        let palette = Palette::for_mode(self.theme.mode());
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            match HeaderPanel::show(
                ui,
                &self.page.brand,
                self.active_section(),
                self.theme.mode(),
                &palette,
            ) {
                Some(HeaderAction::ToggleTheme) => self.toggle_theme(ctx),
                Some(HeaderAction::Navigate(action)) => actions.push(action),
                None => {}
            }
            ui.add_space(6.0);
        });

        // Palette may have changed from the header
        let palette = Palette::for_mode(self.theme.mode());
        let jump_to = self.pending_jump.take();

        let frame = egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::ZERO))
            .show(ctx, |ui| {
                let cx = RenderContext {
                    palette: &palette,
                    assets: &self.config.assets,
                };
                PagePanel::show(ui, &self.page, &cx, self.config.layout.content_max_width, jump_to)
            })
            .inner;

        self.on_frame_scrolled(frame.offset, frame.layout);
        actions.extend(frame.action);

        for action in actions {
            self.handle_action(action);
        }
        if self.pending_jump.is_some() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;
    use crate::core::tracker::Region;

    fn app() -> PortfolioApp {
        let portfolio = Portfolio::embedded().unwrap();
        let mut app = PortfolioApp::with_content(&portfolio, AppConfig::default(), ThemeToggle::new());
        app.mount();
        app
    }

    fn layout() -> SectionLayout {
        let mut layout = SectionLayout::new();
        let mut top = 0.0;
        for section in Section::ALL {
            layout.record(section, Region::new(top, 400.0));
            top += 400.0;
        }
        layout
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let mut app = app();
        assert_eq!(app.active_section(), Section::Hero);

        app.on_frame_scrolled(1150.0, layout());
        assert_eq!(app.active_section(), Section::Projects);
    }

    #[test]
    fn test_unmount_stops_tracking() {
        let mut app = app();
        assert!(app.is_mounted());
        app.unmount();
        assert!(!app.is_mounted());

        app.on_frame_scrolled(1150.0, layout());
        assert_eq!(app.active_section(), Section::Hero);

        app.mount();
        app.on_frame_scrolled(1600.0, layout());
        assert_eq!(app.active_section(), Section::Skills);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut app = app();
        app.mount();
        app.mount();
        app.on_frame_scrolled(500.0, layout());
        assert_eq!(app.active_section(), Section::About);
        assert_eq!(app.scroll_events.listener_count(), 1);
    }

    #[test]
    fn test_scroll_to_uses_last_layout() {
        let mut app = app();
        app.handle_action(BlockAction::ScrollTo(Section::Skills));
        assert_eq!(app.pending_jump, None);

        app.on_frame_scrolled(0.0, layout());
        app.handle_action(BlockAction::ScrollTo(Section::Skills));
        assert_eq!(app.pending_jump, Some(1600.0));
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.toggle_theme(&ctx);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        app.toggle_theme(&ctx);
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert_eq!(ctx.theme(), egui::Theme::Light);
    }
}
