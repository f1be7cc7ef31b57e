//! Active-section tracking for the navigation header
//!
//! Maps the vertical scroll offset of the page onto one of the named page
//! sections so the header can highlight where the reader currently is.

use super::scroll::{ScrollEvent, ScrollListener};

/// Pixels added to the raw scroll offset to account for the sticky header
pub const DEFAULT_LOOKAHEAD: f32 = 100.0;

/// A named region of the page, in declared (top to bottom) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Every section in declared order
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Sections linked from the navigation header
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Stable identifier of the section
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Navigation label: the identifier with its first letter capitalized
    pub fn nav_label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Heading shown at the top of the section body
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "",
            Section::About => "About Me",
            Section::Experience => "Experience",
            Section::Projects => "Featured Projects",
            Section::Skills => "Skills & Technologies",
            Section::Contact => "Get In Touch",
        }
    }
}

/// Vertical extent of a section, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment test: `top <= y < top + height`
    pub fn contains(&self, y: f32) -> bool {
        y.is_finite() && self.top.is_finite() && self.height > 0.0 && y >= self.top && y < self.bottom()
    }
}

/// Measured regions of the sections painted in the last frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    regions: Vec<(Section, Region)>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the region of a section
    pub fn record(&mut self, section: Section, region: Region) {
        if let Some(slot) = self.regions.iter_mut().find(|(s, _)| *s == section) {
            slot.1 = region;
        } else {
            self.regions.push((section, region));
        }
    }

    pub fn get(&self, section: Section) -> Option<Region> {
        self.regions
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, region)| *region)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

/// Find the section under the adjusted scroll position.
///
/// Sections are tested in [`Section::ALL`] order and the first match wins.
/// Sections missing from `layout` are skipped.
pub fn detect(offset: f32, layout: &SectionLayout, lookahead: f32) -> Option<Section> {
    let position = offset + lookahead;
    Section::ALL.into_iter().find(|section| {
        layout
            .get(*section)
            .is_some_and(|region| region.contains(position))
    })
}

/// Holds the active section and updates it from scroll events
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
    lookahead: f32,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD)
    }
}

impl SectionTracker {
    pub fn new(lookahead: f32) -> Self {
        Self {
            active: Section::default(),
            lookahead,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    #[cfg(test)]
    pub fn lookahead(&self) -> f32 {
        self.lookahead
    }

    /// Re-evaluate the active section. Returns true if it changed.
    ///
    /// When no section matches, the previous selection is kept.
    pub fn on_scroll(&mut self, offset: f32, layout: &SectionLayout) -> bool {
        match detect(offset, layout, self.lookahead) {
            Some(section) if section != self.active => {
                tracing::debug!("Active section: {} -> {}", self.active.id(), section.id());
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

impl ScrollListener for SectionTracker {
    fn handle_scroll(&mut self, event: &ScrollEvent<'_>) {
        self.on_scroll(event.offset, event.layout);
    }
}
