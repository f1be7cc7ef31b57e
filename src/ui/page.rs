//! Scrollable page panel
//!
//! Paints every section inside one vertical scroll area and measures where
//! each section landed so the tracker can map scroll offsets onto them.

use eframe::egui::{self, Ui};

use super::block_renderer::{band_fill, render_blocks, BlockAction, RenderContext};
use crate::core::page::PageView;
use crate::core::tracker::{Region, SectionLayout};

/// Result of painting the page for one frame
pub struct PageFrame {
    /// Current scroll offset from the top of the page
    pub offset: f32,
    /// Geometry of every painted section, in page coordinates
    pub layout: SectionLayout,
    pub action: Option<BlockAction>,
}

/// Main page panel
pub struct PagePanel;

impl PagePanel {
    /// Show the page. `jump_to` forces the scroll offset for this frame.
    pub fn show(
        ui: &mut Ui,
        page: &PageView,
        cx: &RenderContext<'_>,
        max_width: f32,
        jump_to: Option<f32>,
    ) -> PageFrame {
        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false]);
        if let Some(offset) = jump_to {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let output = scroll.show(ui, |ui| {
            let origin = ui.cursor().top();
            let spacing = ui.spacing().item_spacing;
            // Sections sit flush so their regions tile the page
            ui.spacing_mut().item_spacing.y = 0.0;

            let mut layout = SectionLayout::new();
            let mut action = None;

            for view in &page.sections {
                let response = egui::Frame::new()
                    .fill(band_fill(view.banded, cx.palette))
                    .inner_margin(egui::Margin::symmetric(16, 48))
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = spacing;
                        ui.set_width(ui.available_width());
                        Self::centered_column(ui, max_width, |ui| render_blocks(ui, &view.blocks, cx))
                    });

                if let Some(a) = response.inner {
                    action = Some(a);
                }

                let rect = response.response.rect;
                layout.record(view.section, Region::new(rect.top() - origin, rect.height()));
            }

            egui::Frame::new()
                .fill(cx.palette.band)
                .inner_margin(egui::Margin::symmetric(16, 24))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = spacing;
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| render_blocks(ui, &page.footer, cx));
                });

            (layout, action)
        });

        let (layout, action) = output.inner;
        PageFrame {
            offset: output.state.offset.y,
            layout,
            action,
        }
    }

    /// Run `add_contents` in a column no wider than `max_width`, centered
    fn centered_column<R>(ui: &mut Ui, max_width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
        let width = ui.available_width().min(max_width);
        let pad = ((ui.available_width() - width) / 2.0).max(0.0);

        ui.horizontal_top(|ui| {
            ui.add_space(pad);
            ui.vertical(|ui| {
                ui.set_width(width);
                add_contents(ui)
            })
            .inner
        })
        .inner
    }
}
