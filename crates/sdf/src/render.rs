//! Page rendering.
//!
//! The whole document is drawn into an offscreen buffer in document
//! coordinates, the rows under the viewport are copied to the screen, and
//! the fixed overlays (nav bar, status line, pointer markers) go on top.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};
use sdf_core::Accent;
use sdf_effects::{
    Effects, NEUTRAL_BORDER, TypewriterLoop,
    chars::{CARET, CURSOR_MARK, TRAIL_HOVER, TRAIL_IDLE},
    color::{PAGE_BACKGROUND, fade_in},
    logo::ring_cell,
};
use sdf_fonts::{GLYPH_HEIGHT, banner_width, build_banner_art};

use crate::content::{
    ABOUT_BODY, ABOUT_FACTS, ABOUT_IDENTITY, ABOUT_LEAD, ABOUT_TITLE, BRAND, EDITION, LOGO_TEXT,
    PROJECT_TAGS, PROJECTS, PROJECTS_SUBTITLE, PROJECTS_TITLE, SKILLS, SKILLS_TITLE, STATUS_LABEL,
    STATUS_VALUE,
};
use crate::page::{
    ABOUT_SIDEBAR_WIDTH, Action, Element, FOOTER_SEPARATOR, NAV_HEIGHT, PageLayout, text_width,
};

const CARD_BACKGROUND: Color = Color::Rgb(17, 17, 24);
const NAV_BACKGROUND: Color = Color::Rgb(14, 14, 20);
const SHADOW: Color = Color::Rgb(4, 4, 6);
const TEXT: Color = Color::Rgb(228, 228, 231);
const MUTED: Color = Color::Rgb(113, 113, 122);
const DOTS: [Color; 3] = [
    Color::Rgb(239, 68, 68),
    Color::Rgb(234, 179, 8),
    Color::Rgb(34, 197, 94),
];

/// Rows a revealed element slides up while it fades in.
const REVEAL_SLIDE: f32 = 3.0;

/// Period of the idle pulse along the bottom of a skill plate.
const PULSE_MS: u64 = 2400;

/// Everything one frame needs.
pub struct View<'a> {
    pub layout: &'a PageLayout,
    pub effects: &'a Effects<Element>,
    pub scroll: u16,
    /// Page time in milliseconds.
    pub now_ms: u64,
    pub accent: Accent,
    pub cursor: bool,
    pub status: Option<&'a str>,
    pub year: i32,
}

/// Draw the page into `buf` over `area`.
pub fn render(view: &View, area: Rect, buf: &mut Buffer) {
    let document = render_document(view);
    buf.set_style(area, Style::new().bg(background()));
    blit(&document, buf, area, view.scroll);

    render_nav(view, area, buf);
    render_status(view, area, buf);
    if view.cursor {
        render_pointer(view, area, buf);
    }
}

/// Draw the full document, top to bottom.
pub fn render_document(view: &View) -> Buffer {
    let layout = view.layout;
    let mut doc = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));
    doc.set_style(doc.area, Style::new().bg(background()));

    render_hero(view, &mut doc);
    render_about(view, &mut doc);
    render_skills(view, &mut doc);
    render_projects(view, &mut doc);
    render_footer(view, &mut doc);

    doc
}

fn background() -> Color {
    let (r, g, b) = PAGE_BACKGROUND;
    Color::Rgb(r, g, b)
}

fn faded(color: Color, progress: f32) -> Style {
    Style::new().fg(fade_in(color, progress))
}

/// Write `text` at `(x, y)` if that cell exists, clipped to the buffer.
/// Returns the column after the last written cell.
fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) -> u16 {
    let area = buf.area;
    if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
        return x;
    }
    let (end, _) = buf.set_stringn(x, y, text, usize::from(area.right() - x), style);
    end
}

/// Shift `area` by `(dx, dy)`, kept inside `bounds`.
fn offset_rect(area: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let shift = |origin: u16, delta: i16, low: u16, high: u16, size: u16| {
        let low = i32::from(low);
        let high = i32::from(high.saturating_sub(size)).max(low);
        (i32::from(origin) + i32::from(delta)).clamp(low, high) as u16
    };
    let x = shift(area.x, dx, bounds.left(), bounds.right(), area.width);
    let y = shift(area.y, dy, bounds.top(), bounds.bottom(), area.height);
    Rect::new(x, y, area.width, area.height).intersection(bounds)
}

fn blit(doc: &Buffer, buf: &mut Buffer, area: Rect, scroll: u16) {
    for row in 0..area.height {
        for col in 0..area.width {
            let source = Position::new(col, scroll.saturating_add(row));
            let target = Position::new(area.x + col, area.y + row);
            if let (Some(src), Some(dst)) = (doc.cell(source), buf.cell_mut(target)) {
                *dst = src.clone();
            }
        }
    }
}

fn draw_button(buf: &mut Buffer, area: Rect, label: &str, hovered: bool, primary: bool, accent: Accent) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }

    let (border, text, fill) = match (primary, hovered) {
        (true, _) => (accent.color(), Style::new().fg(Color::Black).bold(), accent.color()),
        (false, true) => (accent.color(), Style::new().fg(accent.color()).bold(), CARD_BACKGROUND),
        (false, false) => (NEUTRAL_BORDER, Style::new().fg(TEXT), background()),
    };
    let text = if hovered && primary {
        text.add_modifier(Modifier::UNDERLINED)
    } else {
        text
    };

    Paragraph::new(Line::styled(label, text))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(border))
                .style(Style::new().bg(fill)),
        )
        .render(area, buf);
}

fn is_hovered(view: &View, element: Element) -> bool {
    view.effects.pointer.hovered() == Some(element)
}

fn render_hero(view: &View, doc: &mut Buffer) {
    let layout = view.layout;
    let accent = view.accent;
    let logo = layout.logo;

    for y in 0..logo.height {
        for x in 0..logo.width {
            let cell = ring_cell(x, y, logo.width, logo.height, view.now_ms, accent.hue());
            if let (Some((ch, color)), Some(target)) =
                (cell, doc.cell_mut((logo.x + x, logo.y + y)))
            {
                target.set_char(ch).set_fg(color);
            }
        }
    }

    let art_width = banner_width(LOGO_TEXT) as u16;
    let art_x = logo.x + logo.width.saturating_sub(art_width) / 2;
    let art_y = logo.y + logo.height.saturating_sub(GLYPH_HEIGHT as u16) / 2;
    for (row, line) in build_banner_art(LOGO_TEXT).iter().enumerate() {
        put(doc, art_x, art_y + row as u16, line, Style::new().fg(TEXT).bold());
    }

    let status = format!("● {STATUS_LABEL} {STATUS_VALUE}");
    let x = layout.width.saturating_sub(text_width(&status)) / 2;
    let x = put(doc, x, layout.status_row, "● ", Style::new().fg(DOTS[2]));
    let x = put(doc, x, layout.status_row, STATUS_LABEL, Style::new().fg(MUTED));
    let x = put(doc, x, layout.status_row, " ", Style::new());
    put(doc, x, layout.status_row, STATUS_VALUE, Style::new().fg(accent.color()).bold());

    let typewriter = &view.effects.typewriter;
    let x = layout.width.saturating_sub(text_width(typewriter.target()) + 1) / 2;
    let style = Style::new().fg(accent.color()).bold();
    let end = put(doc, x, layout.headline_row, typewriter.text(), style);
    if TypewriterLoop::caret_visible(view.now_ms) {
        put(doc, end, layout.headline_row, &CARET.to_string(), Style::new().fg(TEXT));
    }

    let marquee = layout.marquee;
    let strip = view.effects.marquee.frame(view.now_ms, usize::from(marquee.width));
    put(doc, marquee.x, marquee.y, &strip, Style::new().fg(MUTED));

    for element in [Element::HeroProjects, Element::HeroProfile] {
        if let Some(area) = layout.area(element) {
            let primary = element == Element::HeroProjects;
            draw_button(doc, area, element.label(), is_hovered(view, element), primary, accent);
        }
    }
}

/// A card drawn at its current tilt and reveal state.
struct Card {
    inner: Rect,
    dx: i16,
    dy: i16,
    progress: f32,
    /// Tilted under the pointer.
    active: bool,
}

/// Draw the chrome of a plate; `None` while it is still hidden.
fn draw_card(view: &View, doc: &mut Buffer, element: Element, title: &str) -> Option<Card> {
    let area = view.layout.area(element)?;
    let progress = view.effects.reveal.progress(element, view.now_ms);
    if progress <= 0.0 {
        return None;
    }

    let tilt = view.effects.tilt.style(element);
    let (tx, ty) = tilt.translation();
    let slide = ((1.0 - progress) * REVEAL_SLIDE).round() as i16;
    let (dx, dy) = (tx, ty + slide);
    let bounds = doc.area;
    let moved = offset_rect(area, dx, dy, bounds);

    if tilt.shadow > 0 {
        let depth = tilt.shadow as i16;
        let shadow = offset_rect(moved, depth, depth, bounds);
        doc.set_style(shadow, Style::new().bg(SHADOW));
    }
    Clear.render(moved, doc);

    let mut header: Vec<Span> = vec![Span::raw(" ")];
    header.extend(DOTS.iter().map(|dot| Span::styled("●", faded(*dot, progress))));
    header.push(Span::styled(format!(" {title} "), faded(MUTED, progress)));

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(faded(tilt.border, progress))
        .style(Style::new().bg(fade_in(CARD_BACKGROUND, progress)))
        .title(Line::from(header));
    let inner = block.inner(moved);
    block.render(moved, doc);

    Some(Card {
        inner,
        dx,
        dy,
        progress,
        active: tilt.active,
    })
}

fn paragraph(doc: &mut Buffer, area: Rect, text: &str, style: Style) {
    let area = area.intersection(doc.area);
    if !area.is_empty() {
        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .render(area, doc);
    }
}

fn render_about(view: &View, doc: &mut Buffer) {
    let Some(card) = draw_card(view, doc, Element::AboutPlate, ABOUT_TITLE) else {
        return;
    };
    let p = card.progress;
    let inner = card.inner;
    let accent = view.accent.color();

    let sidebar = if inner.width + 2 >= 70 { ABOUT_SIDEBAR_WIDTH } else { 0 };
    let body_x = if sidebar > 0 {
        let x = inner.x + 1;
        put(doc, x, inner.y + 1, BRAND, faded(accent, p).bold());
        put(doc, x, inner.y + 2, ABOUT_IDENTITY, faded(MUTED, p));
        for (i, (label, value)) in ABOUT_FACTS.iter().enumerate() {
            let y = inner.y + 4 + i as u16 * 3;
            put(doc, x, y, label, faded(MUTED, p));
            put(doc, x, y + 1, value, faded(TEXT, p).bold());
        }
        for y in inner.top()..inner.bottom() {
            put(doc, inner.x + sidebar - 1, y, "│", faded(NEUTRAL_BORDER, p));
        }
        inner.x + sidebar + 2
    } else {
        let end = put(doc, inner.x + 1, inner.y + 1, BRAND, faded(accent, p).bold());
        put(doc, end + 1, inner.y + 1, ABOUT_IDENTITY, faded(MUTED, p));
        inner.x + 2
    };

    let body_y = inner.y + if sidebar > 0 { 1 } else { 3 };
    let body_width = inner.right().saturating_sub(body_x + 1);
    let body_bottom = inner.bottom().saturating_sub(3);
    let lead_height = (body_bottom.saturating_sub(body_y) / 2).max(1);
    paragraph(
        doc,
        Rect::new(body_x, body_y, body_width, lead_height),
        ABOUT_LEAD,
        faded(TEXT, p).bold(),
    );
    paragraph(
        doc,
        Rect::new(
            body_x,
            body_y + lead_height + 1,
            body_width,
            body_bottom.saturating_sub(body_y + lead_height + 1),
        ),
        ABOUT_BODY,
        faded(MUTED, p),
    );

    if let Some(link) = view.layout.area(Element::AboutLink) {
        let link = offset_rect(link, card.dx, card.dy, doc.area);
        let mut style = faded(accent, p).bold();
        if is_hovered(view, Element::AboutLink) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        put(doc, link.x + 1, link.y, Element::AboutLink.label(), style);
    }
}

fn render_header(view: &View, doc: &mut Buffer, element: Element, number: &str, title: &str, subtitle: &str) {
    let Some(area) = view.layout.area(element) else {
        return;
    };
    let p = view.effects.reveal.progress(element, view.now_ms);
    if p <= 0.0 {
        return;
    }
    let slide = ((1.0 - p) * REVEAL_SLIDE).round() as i16;
    let area = offset_rect(area, 0, slide, doc.area);
    let accent = view.accent.color();

    let end = put(doc, area.x, area.y, number, faded(accent, p).bold());
    put(doc, end + 2, area.y, title, faded(TEXT, p).bold());
    let rule = "━".repeat(usize::from(text_width(number) + 2 + text_width(title)));
    put(doc, area.x, area.y + 1, &rule, faded(view.accent.soft(), p));
    put(doc, area.x, area.y + 2, subtitle, faded(MUTED, p));
}

fn render_skills(view: &View, doc: &mut Buffer) {
    render_header(view, doc, Element::SkillsHeader, "02", SKILLS_TITLE, "");
    let accent = view.accent.color();

    for (i, skill) in SKILLS.iter().enumerate() {
        let element = Element::Skill(i as u8);
        let title = format!("module_{:02}", i + 1);
        let Some(card) = draw_card(view, doc, element, &title) else {
            continue;
        };
        let (inner, p) = (card.inner, card.progress);
        let x = inner.x + 1;
        put(doc, x, inner.y + 1, skill.icon, faded(accent, p).bold());
        put(doc, x, inner.y + 3, skill.name, faded(TEXT, p).bold());
        paragraph(
            doc,
            Rect::new(x, inner.y + 4, inner.width.saturating_sub(2), inner.height.saturating_sub(5)),
            skill.desc,
            faded(MUTED, p),
        );

        let width = inner.width.saturating_sub(2);
        let y = inner.bottom().saturating_sub(1);
        put(doc, x, y, &"─".repeat(usize::from(width)), faded(NEUTRAL_BORDER, p));
        let (filled, color) = if card.active {
            (width, accent)
        } else {
            (pulse_width(width, view.now_ms, i), view.accent.soft())
        };
        put(doc, x, y, &"━".repeat(usize::from(filled)), faded(color, p));
    }
}

/// Filled part of an idle skill bar: rises from a third of `width` to all of
/// it and back once per [`PULSE_MS`], each skill a quarter period later.
fn pulse_width(width: u16, now_ms: u64, index: usize) -> u16 {
    let phase = (now_ms + index as u64 * PULSE_MS / 4) % PULSE_MS;
    let t = phase as f32 / PULSE_MS as f32;
    let level = 1.0 - (2.0 * t - 1.0).abs();
    let floor = width / 3;
    floor + (f32::from(width - floor) * level).round() as u16
}

fn render_projects(view: &View, doc: &mut Buffer) {
    render_header(
        view,
        doc,
        Element::ProjectsHeader,
        "03",
        PROJECTS_TITLE,
        PROJECTS_SUBTITLE,
    );
    let accent = view.accent.color();

    for (i, project) in PROJECTS.iter().enumerate() {
        let element = Element::Project(i as u8);
        let title = format!("project_{:02}.bin", i + 1);
        let Some(card) = draw_card(view, doc, element, &title) else {
            continue;
        };
        let (inner, p) = (card.inner, card.progress);
        let x = inner.x + 1;
        let title_color = if card.active { accent } else { TEXT };
        put(doc, x, inner.y + 1, project.title, faded(title_color, p).bold());
        put(doc, x, inner.y + 2, project.tech, faded(MUTED, p).italic());
        paragraph(
            doc,
            Rect::new(x, inner.y + 4, inner.width.saturating_sub(2), inner.height.saturating_sub(6)),
            project.desc,
            faded(TEXT, p),
        );

        let mut x = x;
        for tag in PROJECT_TAGS {
            x = put(doc, x, inner.bottom().saturating_sub(1), &format!("[{tag}]"), faded(MUTED, p));
            x += 1;
        }
    }
}

fn render_footer(view: &View, doc: &mut Buffer) {
    let footer = view.layout.footer;
    let rule = "─".repeat(usize::from(footer.width));
    put(doc, footer.x, footer.y, &rule, Style::new().fg(NEUTRAL_BORDER));

    let x = footer.width.saturating_sub(text_width(BRAND)) / 2;
    put(doc, x, footer.y + 1, BRAND, Style::new().fg(view.accent.color()).bold());
    let x = footer.width.saturating_sub(text_width(EDITION)) / 2;
    put(doc, x, footer.y + 2, EDITION, Style::new().fg(MUTED));

    let separator = Style::new().fg(NEUTRAL_BORDER);
    let mut end = footer.x;
    for element in [Element::FooterLink, Element::FooterReboot] {
        let Some(area) = view.layout.area(element) else {
            continue;
        };
        let style = if is_hovered(view, element) {
            Style::new().fg(view.accent.color()).bold().underlined()
        } else {
            Style::new().fg(TEXT)
        };
        end = put(doc, area.x, area.y, element.label(), style);
        end = put(doc, end, area.y, FOOTER_SEPARATOR, separator);
    }
    let copyright = format!("© {} ALL RIGHTS RESERVED", view.year);
    put(doc, end, footer.y + 4, &copyright, Style::new().fg(MUTED));
}

fn render_nav(view: &View, area: Rect, buf: &mut Buffer) {
    let bar = Rect::new(area.x, area.y, area.width, NAV_HEIGHT.min(area.height));
    Clear.render(bar, buf);
    buf.set_style(bar, Style::new().bg(NAV_BACKGROUND));
    put(buf, area.x + 2, area.y + 1, BRAND, Style::new().fg(view.accent.color()).bold());

    let current = view.layout.section_at(view.scroll);
    for (element, button) in view.layout.nav() {
        let active = element.action() == Some(Action::ScrollTo(current));
        let hovered = is_hovered(view, *element) || active;
        draw_button(buf, *button, element.label(), hovered, false, view.accent);
    }
}

fn render_status(view: &View, area: Rect, buf: &mut Buffer) {
    if area.height <= NAV_HEIGHT {
        return;
    }
    let y = area.bottom() - 1;
    let line = Rect::new(area.x, y, area.width, 1);
    let color = view.accent.color();

    let text = match view.status {
        Some(message) => Line::from(vec![
            " ⇢ ".fg(color).bold(),
            Span::styled(message.to_string(), Style::new().fg(TEXT)),
        ]),
        None => Line::from(vec![
            " q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            " cycle accent  ".dark_gray(),
            "1-3".bold().fg(color),
            " jump  ".dark_gray(),
            "j/k".bold().fg(color),
            " scroll".dark_gray(),
        ]),
    };
    Clear.render(line, buf);
    buf.set_style(line, Style::new().bg(NAV_BACKGROUND));
    text.render(line, buf);
}

fn render_pointer(view: &View, area: Rect, buf: &mut Buffer) {
    let pointer = &view.effects.pointer;
    let color = view.accent.color();

    if let Some(trail) = pointer.trail() {
        let (open, close) = if pointer.is_hovering() {
            TRAIL_HOVER
        } else {
            TRAIL_IDLE
        };
        let style = Style::new().fg(view.accent.soft());
        if trail.x > area.left() {
            if let Some(cell) = buf.cell_mut((trail.x - 1, trail.y)) {
                cell.set_char(open).set_style(style);
            }
        }
        if let Some(cell) = buf.cell_mut((trail.x + 1, trail.y)) {
            cell.set_char(close).set_style(style);
        }
    }
    if let Some(cursor) = pointer.cursor() {
        if let Some(cell) = buf.cell_mut(cursor) {
            cell.set_char(CURSOR_MARK).set_fg(color);
        }
    }
}
