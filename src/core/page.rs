//! Page model built from the portfolio content
//!
//! Projects the content into an ordered list of section views, each made of
//! display blocks. Painting these blocks is the job of `ui::block_renderer`;
//! nothing here depends on egui.

use super::content::{Experience, Portfolio, Project, ProjectLink, SkillGroup};
use super::markup::Markup;
use super::tracker::Section;

/// Where activating a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// External URL opened in the system browser
    Url(String),
    /// Static asset shipped next to the app
    Asset { path: String, download_name: String },
    /// Another section of the page
    Section(Section),
}

/// A navigable reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub label: String,
    pub target: LinkTarget,
}

impl LinkRef {
    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::Url(url.into()),
        }
    }
}

impl From<&ProjectLink> for LinkRef {
    fn from(link: &ProjectLink) -> Self {
        LinkRef::url(&link.label, &link.url)
    }
}

/// Visual weight of a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Body,
    Lead,
    Accent,
    Muted,
}

/// Color family of a tag row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Focus,
    Experience,
    Project,
    Skill,
}

/// Heading size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Display,
    Section,
    Card,
    Group,
}

/// A single display element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { text: String, level: HeadingLevel },
    /// Title on the left, a short accent note on the right
    TitleRow { title: String, note: String },
    Text { text: Markup, tone: Tone },
    Bullets(Vec<Markup>),
    Tags { items: Vec<String>, kind: TagKind },
    /// Inline references, one per link, in declared order
    Links(Vec<LinkRef>),
    /// Prominent buttons
    Actions(Vec<LinkRef>),
    Image { path: String, alt: String },
    Card(Vec<Block>),
    /// Two-column grid of nested blocks
    Grid(Vec<Vec<Block>>),
}

/// One section of the page
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub section: Section,
    /// Painted with the alternate background band
    pub banded: bool,
    pub blocks: Vec<Block>,
}

/// The whole page in display order
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub brand: String,
    pub sections: Vec<SectionView>,
    pub footer: Vec<Block>,
}

impl PageView {
    #[cfg(test)]
    pub fn section(&self, section: Section) -> Option<&SectionView> {
        self.sections.iter().find(|view| view.section == section)
    }
}

/// Build the page from the content
pub fn build_page(portfolio: &Portfolio) -> PageView {
    let sections = Section::ALL
        .into_iter()
        .map(|section| SectionView {
            section,
            banded: matches!(section, Section::Experience | Section::Skills),
            blocks: section_blocks(section, portfolio),
        })
        .collect();

    let footer = portfolio
        .profile
        .footer
        .iter()
        .map(|line| Block::Text {
            text: Markup::plain(line),
            tone: Tone::Muted,
        })
        .collect();

    PageView {
        brand: portfolio.profile.name.clone(),
        sections,
        footer,
    }
}

fn section_blocks(section: Section, portfolio: &Portfolio) -> Vec<Block> {
    let mut blocks = Vec::new();
    if !section.title().is_empty() {
        blocks.push(Block::Heading {
            text: section.title().to_string(),
            level: HeadingLevel::Section,
        });
    }

    match section {
        Section::Hero => hero_blocks(portfolio, &mut blocks),
        Section::About => about_blocks(portfolio, &mut blocks),
        Section::Experience => blocks.extend(portfolio.experience.iter().map(experience_card)),
        Section::Projects => blocks.push(Block::Grid(
            portfolio.projects.iter().map(|p| vec![project_card(p)]).collect(),
        )),
        Section::Skills => blocks.push(Block::Grid(
            portfolio.skills.iter().map(skill_group_blocks).collect(),
        )),
        Section::Contact => contact_blocks(portfolio, &mut blocks),
    }

    blocks
}

fn hero_blocks(portfolio: &Portfolio, blocks: &mut Vec<Block>) {
    let profile = &portfolio.profile;
    blocks.push(Block::Heading {
        text: profile.headline.clone(),
        level: HeadingLevel::Display,
    });
    blocks.push(Block::Text {
        text: Markup::plain(&profile.tagline),
        tone: Tone::Lead,
    });
    blocks.push(Block::Actions(vec![
        LinkRef {
            label: "View My Work".to_string(),
            target: LinkTarget::Section(Section::Projects),
        },
        LinkRef {
            label: "Get In Touch".to_string(),
            target: LinkTarget::Section(Section::Contact),
        },
    ]));
}

fn about_blocks(portfolio: &Portfolio, blocks: &mut Vec<Block>) {
    let profile = &portfolio.profile;
    blocks.push(Block::Image {
        path: profile.profile_image.clone(),
        alt: profile.name.clone(),
    });
    blocks.push(Block::Text {
        text: Markup::plain(&profile.greeting),
        tone: Tone::Lead,
    });
    blocks.extend(profile.bio.iter().map(|paragraph| Block::Text {
        text: Markup::plain(paragraph),
        tone: Tone::Body,
    }));
    if !profile.focus_tags.is_empty() {
        blocks.push(Block::Tags {
            items: profile.focus_tags.clone(),
            kind: TagKind::Focus,
        });
    }
    blocks.push(Block::Text {
        text: Markup::plain(format!("\u{1F4CD} {}", profile.location)),
        tone: Tone::Muted,
    });
    blocks.push(Block::Actions(vec![LinkRef {
        label: "Download Resume".to_string(),
        target: LinkTarget::Asset {
            path: profile.resume.path.clone(),
            download_name: profile.resume.download_name.clone(),
        },
    }]));
}

fn experience_card(entry: &Experience) -> Block {
    let mut card = vec![
        Block::TitleRow {
            title: entry.role.clone(),
            note: entry.period.clone(),
        },
        Block::Text {
            text: Markup::plain(&entry.company),
            tone: Tone::Accent,
        },
    ];
    if !entry.location.is_empty() {
        card.push(Block::Text {
            text: Markup::plain(&entry.location),
            tone: Tone::Muted,
        });
    }
    if !entry.achievements.is_empty() {
        card.push(Block::Bullets(entry.achievements.clone()));
    }
    if !entry.tech.is_empty() {
        card.push(Block::Tags {
            items: entry.tech.clone(),
            kind: TagKind::Experience,
        });
    }
    Block::Card(card)
}

fn project_card(project: &Project) -> Block {
    let mut card = vec![Block::Heading {
        text: project.title.clone(),
        level: HeadingLevel::Card,
    }];
    if let Some(tagline) = project.tagline.as_deref().filter(|t| !t.is_empty()) {
        card.push(Block::Text {
            text: Markup::plain(tagline),
            tone: Tone::Accent,
        });
    }
    card.push(Block::Text {
        text: project.description.clone(),
        tone: Tone::Muted,
    });
    if !project.tech.is_empty() {
        card.push(Block::Tags {
            items: project.tech.clone(),
            kind: TagKind::Project,
        });
    }
    if !project.links.is_empty() {
        card.push(Block::Links(project.links.iter().map(LinkRef::from).collect()));
    }
    Block::Card(card)
}

fn skill_group_blocks(group: &SkillGroup) -> Vec<Block> {
    vec![
        Block::Heading {
            text: group.category.clone(),
            level: HeadingLevel::Group,
        },
        Block::Tags {
            items: group.skills.clone(),
            kind: TagKind::Skill,
        },
    ]
}

fn contact_blocks(portfolio: &Portfolio, blocks: &mut Vec<Block>) {
    let contact = &portfolio.profile.contact;
    blocks.push(Block::Text {
        text: Markup::plain(&contact.blurb),
        tone: Tone::Lead,
    });

    let mut links = vec![LinkRef::url(format!("\u{2709} {}", contact.email), contact.mailto())];
    links.extend(contact.links.iter().map(LinkRef::from));
    blocks.push(Block::Links(links));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::tests::minimal_json;

    fn embedded_page() -> (Portfolio, PageView) {
        let portfolio = Portfolio::embedded().unwrap();
        let page = build_page(&portfolio);
        (portfolio, page)
    }

    fn cards(view: &SectionView) -> Vec<&Vec<Block>> {
        let mut out = Vec::new();
        for block in &view.blocks {
            match block {
                Block::Card(card) => out.push(card),
                Block::Grid(cells) => {
                    for cell in cells {
                        for block in cell {
                            if let Block::Card(card) = block {
                                out.push(card);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn links_of(card: &[Block]) -> Vec<&LinkRef> {
        card.iter()
            .filter_map(|block| match block {
                Block::Links(links) => Some(links),
                _ => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn test_sections_follow_declared_order() {
        let (_, page) = embedded_page();
        let order: Vec<Section> = page.sections.iter().map(|s| s.section).collect();
        assert_eq!(order, Section::ALL.to_vec());
        assert_eq!(page.brand, "Naman Mishra");
    }

    #[test]
    fn test_one_reference_per_project_link() {
        let (portfolio, page) = embedded_page();
        let view = page.section(Section::Projects).unwrap();
        let cards = cards(view);
        assert_eq!(cards.len(), portfolio.projects.len());

        for (project, card) in portfolio.projects.iter().zip(cards) {
            let rendered: Vec<LinkRef> = links_of(card).into_iter().cloned().collect();
            let expected: Vec<LinkRef> = project.links.iter().map(LinkRef::from).collect();
            assert_eq!(rendered, expected, "links of '{}'", project.title);
        }
    }

    #[test]
    fn test_project_without_links_has_no_links_block() {
        let json = minimal_json(r#"[{"title": "Solo", "description": "No links here"}]"#, "[]");
        let portfolio = Portfolio::from_json(&json).unwrap();
        let page = build_page(&portfolio);
        let view = page.section(Section::Projects).unwrap();
        let cards = cards(view);
        assert_eq!(cards.len(), 1);
        assert!(!cards[0].iter().any(|b| matches!(b, Block::Links(_))));
        // No tagline either
        assert_eq!(cards[0].len(), 2);
    }

    #[test]
    fn test_skill_tags_keep_declared_order() {
        let (portfolio, page) = embedded_page();
        let view = page.section(Section::Skills).unwrap();
        let Some(Block::Grid(cells)) = view.blocks.last() else {
            panic!("skills section should end with a grid");
        };
        assert_eq!(cells.len(), portfolio.skills.len());

        for (group, cell) in portfolio.skills.iter().zip(cells) {
            assert_eq!(
                cell[0],
                Block::Heading {
                    text: group.category.clone(),
                    level: HeadingLevel::Group
                }
            );
            assert_eq!(
                cell[1],
                Block::Tags {
                    items: group.skills.clone(),
                    kind: TagKind::Skill
                }
            );
        }
    }

    #[test]
    fn test_experience_cards_in_order() {
        let (portfolio, page) = embedded_page();
        let view = page.section(Section::Experience).unwrap();
        assert!(view.banded);
        let cards = cards(view);
        assert_eq!(cards.len(), portfolio.experience.len());
        for (entry, card) in portfolio.experience.iter().zip(cards) {
            assert_eq!(
                card[0],
                Block::TitleRow {
                    title: entry.role.clone(),
                    note: entry.period.clone()
                }
            );
        }
    }

    #[test]
    fn test_hero_actions_target_sections() {
        let (_, page) = embedded_page();
        let hero = page.section(Section::Hero).unwrap();
        let actions: Vec<&LinkTarget> = hero
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Actions(links) => Some(links),
                _ => None,
            })
            .flatten()
            .map(|link| &link.target)
            .collect();
        assert_eq!(
            actions,
            vec![
                &LinkTarget::Section(Section::Projects),
                &LinkTarget::Section(Section::Contact)
            ]
        );
    }

    #[test]
    fn test_contact_links_start_with_mailto() {
        let (portfolio, page) = embedded_page();
        let contact = page.section(Section::Contact).unwrap();
        let links = links_of(&contact.blocks);
        assert_eq!(links.len(), 1 + portfolio.profile.contact.links.len());
        assert_eq!(links[0].target, LinkTarget::Url(portfolio.profile.contact.mailto()));
    }
}
