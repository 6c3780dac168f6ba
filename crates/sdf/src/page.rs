//! Page structure: sections, elements and their layout.
//!
//! The page is one tall document laid out in document coordinates (row 0 is
//! the top of the hero). The nav bar is a fixed overlay in screen
//! coordinates covering the first [`NAV_HEIGHT`] rows of the terminal.

use ratatui::layout::Rect;
use sdf_core::center;

use crate::content::{ABOUT_LINK, FOOTER_LINK, FOOTER_REBOOT, PROJECTS, SKILLS};

/// Rows covered by the fixed nav bar.
pub const NAV_HEIGHT: u16 = 3;

/// Rows covered by the status line at the bottom of the screen.
pub const STATUS_HEIGHT: u16 = 1;

/// Widest the content column gets.
const MAX_CONTENT_WIDTH: u16 = 116;

/// Hero height floor, for very short terminals.
const HERO_MIN_HEIGHT: u16 = 30;

/// Size of the ring framing the logo.
pub const LOGO_WIDTH: u16 = 34;
pub const LOGO_HEIGHT: u16 = 13;

const BUTTON_HEIGHT: u16 = 3;
const ABOUT_HEIGHT: u16 = 18;
const SKILL_HEIGHT: u16 = 10;
const PROJECT_HEIGHT: u16 = 10;
const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 7;
const GRID_GAP_X: u16 = 2;
const GRID_GAP_Y: u16 = 1;

/// Left column width of the about plate when it is wide enough for two.
pub const ABOUT_SIDEBAR_WIDTH: u16 = 30;

/// Footer separator between links.
pub const FOOTER_SEPARATOR: &str = "   |   ";

/// Width of `© YYYY ALL RIGHTS RESERVED`.
const COPYRIGHT_WIDTH: u16 = 26;

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Footer,
}

/// Every element the effects attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    NavAbout,
    NavSkills,
    NavProjects,
    HeroProjects,
    HeroProfile,
    AboutPlate,
    AboutLink,
    SkillsHeader,
    Skill(u8),
    ProjectsHeader,
    Project(u8),
    FooterLink,
    FooterReboot,
}

/// What clicking an element does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollTo(Section),
    OpenLink(&'static str),
}

impl Element {
    /// Nav buttons, left to right.
    pub const NAV: [Element; 3] = [Element::NavAbout, Element::NavSkills, Element::NavProjects];

    pub fn action(self) -> Option<Action> {
        match self {
            Element::NavAbout | Element::HeroProfile => Some(Action::ScrollTo(Section::About)),
            Element::NavSkills => Some(Action::ScrollTo(Section::Skills)),
            Element::NavProjects | Element::HeroProjects => {
                Some(Action::ScrollTo(Section::Projects))
            }
            Element::FooterReboot => Some(Action::ScrollTo(Section::Hero)),
            Element::AboutLink | Element::FooterLink => {
                Some(Action::OpenLink(crate::content::YOUTUBE_URL))
            }
            Element::AboutPlate
            | Element::SkillsHeader
            | Element::Skill(_)
            | Element::ProjectsHeader
            | Element::Project(_) => None,
        }
    }

    /// Buttons and links: registered with the pointer follower.
    pub fn is_interactive(self) -> bool {
        self.action().is_some()
    }

    /// Cards that tilt under the pointer.
    pub fn is_plate(self) -> bool {
        matches!(
            self,
            Element::AboutPlate | Element::Skill(_) | Element::Project(_)
        )
    }

    /// Elements hidden until scrolled into view.
    pub fn reveals(self) -> bool {
        self.is_plate() || matches!(self, Element::SkillsHeader | Element::ProjectsHeader)
    }

    /// Button label, for elements drawn as buttons.
    pub fn label(self) -> &'static str {
        match self {
            Element::NavAbout => "ABOUT",
            Element::NavSkills => "SKILLS",
            Element::NavProjects => "PROJECTS",
            Element::HeroProjects => "EXECUTE_PROJECTS ›",
            Element::HeroProfile => "READ_PROFILE.md",
            Element::AboutLink => ABOUT_LINK,
            Element::FooterLink => FOOTER_LINK,
            Element::FooterReboot => FOOTER_REBOOT,
            _ => "",
        }
    }
}

/// Layout of the whole page for one terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    /// Total document height.
    pub height: u16,
    pub viewport_height: u16,
    pub logo: Rect,
    pub status_row: u16,
    pub headline_row: u16,
    pub marquee: Rect,
    pub footer: Rect,
    sections: Vec<(Section, u16)>,
    /// Document areas in paint order.
    elements: Vec<(Element, Rect)>,
    /// Screen areas of the nav buttons.
    nav: Vec<(Element, Rect)>,
}

impl PageLayout {
    pub fn compute(width: u16, viewport_height: u16) -> Self {
        let content_width = width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
        let content = Rect::new((width - content_width) / 2, 0, content_width, 0);
        let mut elements = Vec::new();
        let mut sections = Vec::new();

        // Hero
        sections.push((Section::Hero, 0));
        let hero_height = viewport_height.max(HERO_MIN_HEIGHT);
        let block_height = LOGO_HEIGHT + 7 + BUTTON_HEIGHT;
        let top = NAV_HEIGHT + (hero_height - NAV_HEIGHT).saturating_sub(block_height) / 2;
        let logo_width = LOGO_WIDTH.min(width);
        let logo = Rect::new((width - logo_width) / 2, top, logo_width, LOGO_HEIGHT);
        let status_row = top + LOGO_HEIGHT + 1;
        let headline_row = status_row + 2;
        let marquee = Rect::new(content.x, headline_row + 2, content.width, 1);
        let buttons = [Element::HeroProjects, Element::HeroProfile];
        elements.extend(centered_row(&buttons, content, marquee.y + 2, 3));
        let mut y = hero_height;

        // About
        sections.push((Section::About, y));
        let plate = Rect::new(content.x, y + NAV_HEIGHT + 1, content.width, ABOUT_HEIGHT);
        elements.push((Element::AboutPlate, plate));
        let sidebar = if plate.width >= 70 { ABOUT_SIDEBAR_WIDTH } else { 0 };
        let link_width = text_width(ABOUT_LINK) + 2;
        elements.push((
            Element::AboutLink,
            Rect::new(
                (plate.x + sidebar + 3).min(width.saturating_sub(link_width)),
                plate.y + plate.height - 3,
                link_width,
                1,
            ),
        ));
        y = plate.bottom() + 2;

        // Skills
        sections.push((Section::Skills, y));
        let header = Rect::new(content.x, y + NAV_HEIGHT + 1, content.width, HEADER_HEIGHT);
        elements.push((Element::SkillsHeader, header));
        let columns = if content.width >= 100 {
            4
        } else if content.width >= 50 {
            2
        } else {
            1
        };
        let skills = (0..SKILLS.len() as u8).map(Element::Skill);
        y = grid(&mut elements, skills, content, header.bottom() + 1, columns, SKILL_HEIGHT) + 2;

        // Projects
        sections.push((Section::Projects, y));
        let header = Rect::new(content.x, y + NAV_HEIGHT + 1, content.width, HEADER_HEIGHT);
        elements.push((Element::ProjectsHeader, header));
        let columns = if content.width >= 70 { 2 } else { 1 };
        let projects = (0..PROJECTS.len() as u8).map(Element::Project);
        y = grid(&mut elements, projects, content, header.bottom() + 1, columns, PROJECT_HEIGHT)
            + 2;

        // Footer
        sections.push((Section::Footer, y));
        let footer = Rect::new(0, y, width, FOOTER_HEIGHT);
        let links_row = footer.y + 4;
        let separator = text_width(FOOTER_SEPARATOR);
        let total = text_width(FOOTER_LINK) + text_width(FOOTER_REBOOT) + COPYRIGHT_WIDTH
            + 2 * separator;
        let mut x = width.saturating_sub(total) / 2;
        for element in [Element::FooterLink, Element::FooterReboot] {
            let w = text_width(element.label());
            elements.push((element, Rect::new(x, links_row, w, 1)));
            x += w + separator;
        }
        let height = footer.bottom();

        let mut nav = Vec::new();
        let mut right = width.saturating_sub(2);
        for element in Element::NAV.iter().rev() {
            let w = text_width(element.label()) + 4;
            right = right.saturating_sub(w);
            nav.push((*element, Rect::new(right, 0, w, NAV_HEIGHT)));
            right = right.saturating_sub(1);
        }
        nav.reverse();

        Self {
            width,
            height,
            viewport_height,
            logo,
            status_row,
            headline_row,
            marquee,
            footer,
            sections,
            elements,
            nav,
        }
    }

    /// Document elements in paint order.
    pub fn elements(&self) -> &[(Element, Rect)] {
        &self.elements
    }

    /// Nav buttons with their screen areas.
    pub fn nav(&self) -> &[(Element, Rect)] {
        &self.nav
    }

    /// Document area of an element; `None` for nav buttons.
    pub fn area(&self, element: Element) -> Option<Rect> {
        self.elements
            .iter()
            .find(|(candidate, _)| *candidate == element)
            .map(|(_, area)| *area)
    }

    /// Visible screen area of an element at `scroll`, clipped to the rows
    /// between the nav bar and the status line.
    pub fn screen_area(&self, element: Element, scroll: u16) -> Option<Rect> {
        if let Some((_, area)) = self.nav.iter().find(|(candidate, _)| *candidate == element) {
            return Some(*area);
        }
        self.area(element)
            .and_then(|area| clip_to_screen(area, scroll, self.viewport_height))
    }

    pub fn section_top(&self, section: Section) -> u16 {
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map_or(0, |(_, top)| *top)
    }

    /// Section the top of the viewport is in.
    pub fn section_at(&self, scroll: u16) -> Section {
        self.sections
            .iter()
            .rev()
            .find(|(_, top)| *top <= scroll + NAV_HEIGHT)
            .map_or(Section::Hero, |(section, _)| *section)
    }

    pub fn max_scroll(&self) -> u16 {
        self.height.saturating_sub(self.viewport_height)
    }

    /// Scroll offset that brings a section to the top of the viewport.
    pub fn scroll_target(&self, section: Section) -> u16 {
        self.section_top(section).min(self.max_scroll())
    }

    /// Center of an element's whole area on screen at `scroll`, even when
    /// part of it is scrolled off; `None` for unknown elements.
    pub fn screen_center(&self, element: Element, scroll: u16) -> Option<(f32, f32)> {
        if let Some((_, area)) = self.nav.iter().find(|(candidate, _)| *candidate == element) {
            return Some(center(*area));
        }
        let (x, y) = center(self.area(element)?);
        Some((x, y - f32::from(scroll)))
    }

    /// Document rows visible between the nav bar and the status line.
    pub fn viewport(&self, scroll: u16) -> Rect {
        let height = self
            .viewport_height
            .saturating_sub(NAV_HEIGHT + STATUS_HEIGHT);
        Rect::new(0, scroll + NAV_HEIGHT, self.width, height)
    }
}

/// Character count of a single-line label.
pub fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}

/// Lay out bordered buttons side by side, centered in `content`. Buttons
/// that do not fit on one row are stacked instead.
fn centered_row(buttons: &[Element], content: Rect, y: u16, gap: u16) -> Vec<(Element, Rect)> {
    let widths: Vec<u16> = buttons
        .iter()
        .map(|b| (text_width(b.label()) + 4).min(content.width))
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + gap * (buttons.len() as u16).saturating_sub(1);

    if total > content.width {
        return buttons
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (button, w))| {
                let x = content.x + (content.width - w) / 2;
                (*button, Rect::new(x, y + i as u16 * BUTTON_HEIGHT, w, BUTTON_HEIGHT))
            })
            .collect();
    }

    let mut x = content.x + (content.width - total) / 2;
    buttons
        .iter()
        .zip(widths)
        .map(|(button, w)| {
            let area = Rect::new(x, y, w, BUTTON_HEIGHT);
            x += w + gap;
            (*button, area)
        })
        .collect()
}

/// Lay out plates in a grid; returns the row below the last plate.
fn grid(
    elements: &mut Vec<(Element, Rect)>,
    plates: impl Iterator<Item = Element>,
    content: Rect,
    top: u16,
    columns: u16,
    plate_height: u16,
) -> u16 {
    let plate_width = content.width.saturating_sub(GRID_GAP_X * (columns - 1)) / columns;
    let mut bottom = top;

    for (i, plate) in plates.enumerate() {
        let (row, column) = (i as u16 / columns, i as u16 % columns);
        let area = Rect::new(
            content.x + column * (plate_width + GRID_GAP_X),
            top + row * (plate_height + GRID_GAP_Y),
            plate_width,
            plate_height,
        );
        bottom = bottom.max(area.bottom());
        elements.push((plate, area));
    }

    bottom
}

/// Map a document area to the screen at `scroll`, keeping the rows between
/// the nav bar and the status line.
fn clip_to_screen(area: Rect, scroll: u16, viewport_height: u16) -> Option<Rect> {
    let top = i32::from(area.y) - i32::from(scroll);
    let bottom = top + i32::from(area.height);
    let visible_top = top.max(i32::from(NAV_HEIGHT));
    let visible_bottom = bottom.min(i32::from(viewport_height.saturating_sub(STATUS_HEIGHT)));

    if area.width == 0 || visible_bottom <= visible_top {
        return None;
    }
    Some(Rect::new(
        area.x,
        visible_top as u16,
        area.width,
        (visible_bottom - visible_top) as u16,
    ))
}
