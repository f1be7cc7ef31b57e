//! Block rendering for the page
//!
//! Paints the display blocks of `core::page` with egui and reports the
//! action the user triggered, if any.

use eframe::egui::{self, Color32, FontId, RichText, Ui};

use super::theme::Palette;
use crate::core::config::AssetConfig;
use crate::core::markup::Markup;
use crate::core::page::{Block, HeadingLevel, LinkRef, LinkTarget, TagKind, Tone};
use crate::core::tracker::Section;

/// Action that can be triggered by block interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockAction {
    /// Open external URL
    OpenUrl(String),
    /// Save a bundled asset under its download name
    DownloadAsset { path: String, download_name: String },
    /// Scroll the page to a section
    ScrollTo(Section),
}

impl From<&LinkTarget> for BlockAction {
    fn from(target: &LinkTarget) -> Self {
        match target {
            LinkTarget::Url(url) => BlockAction::OpenUrl(url.clone()),
            LinkTarget::Asset { path, download_name } => BlockAction::DownloadAsset {
                path: path.clone(),
                download_name: download_name.clone(),
            },
            LinkTarget::Section(section) => BlockAction::ScrollTo(*section),
        }
    }
}

/// Shared rendering inputs
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub assets: &'a AssetConfig,
}

/// Render a block to the UI
pub fn render_block(ui: &mut Ui, block: &Block, cx: &RenderContext<'_>) -> Option<BlockAction> {
    match block {
        Block::Heading { text, level } => {
            render_heading(ui, text, *level, cx);
            None
        }
        Block::TitleRow { title, note } => {
            render_title_row(ui, title, note, cx);
            None
        }
        Block::Text { text, tone } => {
            render_text(ui, text, *tone, cx);
            None
        }
        Block::Bullets(items) => {
            render_bullets(ui, items, cx);
            None
        }
        Block::Tags { items, kind } => {
            render_tags(ui, items, *kind, cx);
            None
        }
        Block::Links(links) => render_links(ui, links, cx),
        Block::Actions(links) => render_actions(ui, links),
        Block::Image { path, alt } => {
            render_image(ui, path, alt, cx);
            None
        }
        Block::Card(blocks) => render_card(ui, blocks, cx),
        Block::Grid(cells) => render_grid(ui, cells, cx),
    }
}

/// Render several blocks, keeping the last action
pub fn render_blocks(ui: &mut Ui, blocks: &[Block], cx: &RenderContext<'_>) -> Option<BlockAction> {
    let mut action = None;
    for block in blocks {
        if let Some(a) = render_block(ui, block, cx) {
            action = Some(a);
        }
    }
    action
}

fn render_heading(ui: &mut Ui, text: &str, level: HeadingLevel, cx: &RenderContext<'_>) {
    let (size, color, space) = match level {
        HeadingLevel::Display => (40.0, None, 12.0),
        HeadingLevel::Section => (28.0, None, 20.0),
        HeadingLevel::Card => (18.0, None, 6.0),
        HeadingLevel::Group => (18.0, Some(cx.palette.accent), 6.0),
    };

    let mut rich = RichText::new(text).font(FontId::proportional(size)).strong();
    if let Some(color) = color {
        rich = rich.color(color);
    }

    if matches!(level, HeadingLevel::Display | HeadingLevel::Section) {
        ui.vertical_centered(|ui| ui.label(rich));
    } else {
        ui.label(rich);
    }
    ui.add_space(space);
}

fn render_title_row(ui: &mut Ui, title: &str, note: &str, cx: &RenderContext<'_>) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(title).font(FontId::proportional(18.0)).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(note).color(cx.palette.accent));
        });
    });
}

fn render_text(ui: &mut Ui, text: &Markup, tone: Tone, cx: &RenderContext<'_>) {
    let (size, color) = match tone {
        Tone::Body => (14.0, None),
        Tone::Lead => (18.0, None),
        Tone::Accent => (14.0, Some(cx.palette.accent)),
        Tone::Muted => (14.0, Some(cx.palette.muted)),
    };

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in text.spans() {
            let mut rich = RichText::new(&span.text).font(FontId::proportional(size));
            if span.highlight {
                rich = rich.strong().color(cx.palette.highlight);
            } else if let Some(color) = color {
                rich = rich.color(color);
            }
            ui.label(rich);
        }
    });
    ui.add_space(6.0);
}

fn render_bullets(ui: &mut Ui, items: &[Markup], cx: &RenderContext<'_>) {
    for item in items {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(RichText::new("•").color(cx.palette.accent));
            ui.vertical(|ui| render_text(ui, item, Tone::Body, cx));
        });
    }
}

fn render_tags(ui: &mut Ui, items: &[String], kind: TagKind, cx: &RenderContext<'_>) {
    let (fill, text) = match kind {
        TagKind::Focus => cx.palette.tag_focus,
        TagKind::Experience => cx.palette.tag_experience,
        TagKind::Project => cx.palette.tag_project,
        TagKind::Skill => cx.palette.tag_skill,
    };

    ui.horizontal_wrapped(|ui| {
        for item in items {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(RichText::new(item).size(12.0).color(text));
                });
        }
    });
    ui.add_space(8.0);
}

fn render_links(ui: &mut Ui, links: &[LinkRef], cx: &RenderContext<'_>) -> Option<BlockAction> {
    let mut action = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        for link in links {
            let response = ui.link(RichText::new(format!("{} \u{2197}", link.label)).color(cx.palette.accent));
            if response.clicked() {
                action = Some(BlockAction::from(&link.target));
            }
            if let LinkTarget::Url(url) = &link.target {
                response.on_hover_text(url.as_str());
            }
        }
    });

    ui.add_space(4.0);
    action
}

fn render_actions(ui: &mut Ui, links: &[LinkRef]) -> Option<BlockAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            for link in links {
                let button = egui::Button::new(RichText::new(&link.label).size(16.0)).corner_radius(6.0);
                let mut response = ui.add(button);
                if let LinkTarget::Asset { download_name, .. } = &link.target {
                    response = response.on_hover_text(format!("Save as {}", download_name));
                }
                if response.clicked() {
                    action = Some(BlockAction::from(&link.target));
                }
            }
        });
    });

    ui.add_space(8.0);
    action
}

fn render_image(ui: &mut Ui, path: &str, alt: &str, cx: &RenderContext<'_>) {
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Image::new(cx.assets.uri(path))
                .max_size(egui::vec2(180.0, 180.0))
                .corner_radius(90.0),
        )
        .on_hover_text(alt);
    });
    ui.add_space(12.0);
}

fn render_card(ui: &mut Ui, blocks: &[Block], cx: &RenderContext<'_>) -> Option<BlockAction> {
    let inner = egui::Frame::new()
        .fill(cx.palette.card)
        .stroke(egui::Stroke::new(1.0, cx.palette.card_stroke))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .outer_margin(egui::Margin::symmetric(0, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_blocks(ui, blocks, cx)
        });

    inner.inner
}

fn render_grid(ui: &mut Ui, cells: &[Vec<Block>], cx: &RenderContext<'_>) -> Option<BlockAction> {
    let mut action = None;

    for pair in cells.chunks(2) {
        ui.columns(2, |columns| {
            for (column, cell) in columns.iter_mut().zip(pair) {
                if let Some(a) = render_blocks(column, cell, cx) {
                    action = Some(a);
                }
            }
        });
    }

    action
}

/// Style a header navigation label
pub fn nav_label(label: &str, active: bool, palette: &Palette) -> RichText {
    let rich = RichText::new(label).size(15.0);
    if active {
        rich.color(palette.accent).strong()
    } else {
        rich
    }
}

/// Background used for a section band
pub fn band_fill(banded: bool, palette: &Palette) -> Color32 {
    if banded {
        palette.band
    } else {
        Color32::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_map_to_actions() {
        assert_eq!(
            BlockAction::from(&LinkTarget::Url("https://x.dev".into())),
            BlockAction::OpenUrl("https://x.dev".into())
        );
        assert_eq!(
            BlockAction::from(&LinkTarget::Asset {
                path: "/cv.pdf".into(),
                download_name: "cv.pdf".into()
            }),
            BlockAction::DownloadAsset {
                path: "/cv.pdf".into(),
                download_name: "cv.pdf".into()
            }
        );
        assert_eq!(
            BlockAction::from(&LinkTarget::Section(Section::Contact)),
            BlockAction::ScrollTo(Section::Contact)
        );
    }

    #[test]
    fn test_render_page_headless() {
        use crate::core::content::Portfolio;
        use crate::core::page::build_page;
        use crate::core::theme::ThemeMode;

        let page = build_page(&Portfolio::embedded().unwrap());
        let palette = Palette::for_mode(ThemeMode::Light);
        let assets = AssetConfig::default();
        let cx = RenderContext {
            palette: &palette,
            assets: &assets,
        };

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for view in &page.sections {
                    assert_eq!(render_blocks(ui, &view.blocks, &cx), None);
                }
            });
        });
    }
}
