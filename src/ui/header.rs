//! Sticky header with navigation and the theme toggle

use eframe::egui::{self, RichText, Ui};

use super::block_renderer::{nav_label, BlockAction};
use super::theme::Palette;
use crate::core::theme::ThemeMode;
use crate::core::tracker::Section;

/// What the user did in the header this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    Navigate(BlockAction),
    ToggleTheme,
}

/// Header bar
pub struct HeaderPanel;

impl HeaderPanel {
    /// Show the header
    pub fn show(
        ui: &mut Ui,
        brand: &str,
        active: Section,
        mode: ThemeMode,
        palette: &Palette,
    ) -> Option<HeaderAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(brand).size(20.0).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                let (icon, hint) = if mode.is_dark() {
                    ("\u{2600}", "Switch to light mode")
                } else {
                    ("\u{1F319}", "Switch to dark mode")
                };
                if ui
                    .button(RichText::new(icon).size(18.0))
                    .on_hover_text(hint)
                    .clicked()
                {
                    action = Some(HeaderAction::ToggleTheme);
                }

                ui.add_space(16.0);

                // Right-to-left layout: add in reverse so the nav reads left to right
                for section in Section::NAV.iter().rev() {
                    let label = nav_label(&section.nav_label(), *section == active, palette);
                    if ui.selectable_label(*section == active, label).clicked() {
                        action = Some(HeaderAction::Navigate(BlockAction::ScrollTo(*section)));
                    }
                }
            });
        });

        action
    }
}
