//! egui binding for the display theme

use eframe::egui::{self, Color32};

use crate::core::theme::{ThemeMode, ThemeSurface, THEME_ATTRIBUTE};

/// The egui context acting as the document root
pub struct ContextSurface<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ContextSurface<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }

    /// Last marker written to `name`, if any
    #[cfg(test)]
    pub fn attribute(ctx: &egui::Context, name: &str) -> Option<String> {
        ctx.data(|data| data.get_temp::<String>(egui::Id::new(name)))
    }
}

impl ThemeSurface for ContextSurface<'_> {
    fn set_attribute(&mut self, name: &str, value: &str) {
        if name == THEME_ATTRIBUTE {
            let theme = if value == ThemeMode::Dark.marker() {
                egui::Theme::Dark
            } else {
                egui::Theme::Light
            };
            self.ctx.set_theme(theme);
        }
        self.ctx
            .data_mut(|data| data.insert_temp(egui::Id::new(name), value.to_string()));
    }
}

/// Colors used by the page for a given mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color32,
    pub muted: Color32,
    pub highlight: Color32,
    pub band: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub tag_focus: (Color32, Color32),
    pub tag_experience: (Color32, Color32),
    pub tag_project: (Color32, Color32),
    pub tag_skill: (Color32, Color32),
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                accent: Color32::from_rgb(13, 110, 253),
                muted: Color32::from_rgb(108, 117, 125),
                highlight: Color32::from_rgb(214, 51, 132),
                band: Color32::from_rgb(233, 236, 239),
                card: Color32::WHITE,
                card_stroke: Color32::from_rgb(222, 226, 230),
                tag_focus: (Color32::from_rgb(207, 226, 255), Color32::from_rgb(5, 44, 101)),
                tag_experience: (Color32::from_rgb(226, 227, 229), Color32::from_rgb(43, 47, 50)),
                tag_project: (Color32::from_rgb(209, 231, 221), Color32::from_rgb(10, 54, 34)),
                tag_skill: (Color32::from_rgb(248, 249, 250), Color32::from_rgb(33, 37, 41)),
            },
            ThemeMode::Dark => Self {
                accent: Color32::from_rgb(110, 168, 254),
                muted: Color32::from_rgb(173, 181, 189),
                highlight: Color32::from_rgb(230, 133, 181),
                band: Color32::from_rgb(43, 48, 53),
                card: Color32::from_rgb(33, 37, 41),
                card_stroke: Color32::from_rgb(73, 80, 87),
                tag_focus: (Color32::from_rgb(3, 31, 72), Color32::from_rgb(110, 168, 254)),
                tag_experience: (Color32::from_rgb(22, 25, 27), Color32::from_rgb(167, 172, 177)),
                tag_project: (Color32::from_rgb(5, 27, 17), Color32::from_rgb(117, 183, 152)),
                tag_skill: (Color32::from_rgb(52, 58, 64), Color32::from_rgb(248, 249, 250)),
            },
        }
    }
}
