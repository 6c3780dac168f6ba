use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{DefaultTerminal, Frame, layout::Position};
use sdf_config::Config;
use sdf_core::Accent;
use sdf_effects::{EffectSettings, Effects, HoverChange, TypewriterTiming};
use tracing::{debug, info, trace};

use crate::content::COMMAND_STRIP;
use crate::page::{Action, Element, PageLayout, Section};
use crate::render::{self, View};
use crate::scroll::{LINE_SCROLL, PAGE_SCROLL_FACTOR, Scroller, WHEEL_SCROLL};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    accent: Accent,
    effects: Effects<Element>,
    layout: PageLayout,
    scroller: Scroller,
    started: Instant,
    /// Page time of the last tick.
    now_ms: u64,
    /// Message shown in the status line, e.g. an activated link.
    status: Option<String>,
    year: i32,
}

fn effect_settings(config: &Config) -> EffectSettings {
    EffectSettings {
        headline: config.typewriter.text.clone(),
        timing: TypewriterTiming {
            type_delay_ms: config.typewriter.type_delay_ms,
            delete_delay_ms: config.typewriter.delete_delay_ms,
            pause_ms: config.typewriter.pause_ms,
        },
        tilt_coefficient: config.tilt.coefficient,
        highlight: config.accent.color(),
        reveal_threshold: config.reveal.threshold,
        marquee_text: COMMAND_STRIP.to_string(),
        marquee_step_ms: config.marquee.step_ms,
    }
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            accent: config.accent,
            effects: Effects::new(effect_settings(&config)),
            layout: PageLayout::compute(0, 0),
            scroller: Scroller::new(),
            started: Instant::now(),
            now_ms: 0,
            status: None,
            year: Local::now().year(),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let size = terminal.size()?;
        self.start(size.width, size.height, self.elapsed_ms());

        while self.running {
            self.tick(self.elapsed_ms());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.effects.detach();
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Attach the effects and register every page element with them.
    fn start(&mut self, width: u16, height: u16, now_ms: u64) {
        self.running = true;
        self.now_ms = now_ms;
        self.effects.attach(now_ms);

        self.relayout(width, height);
        let elements: Vec<Element> = self
            .layout
            .elements()
            .iter()
            .chain(self.layout.nav())
            .map(|(element, _)| *element)
            .collect();
        for element in elements {
            if element.is_interactive() {
                self.effects.pointer.register(element);
            }
            if element.is_plate() {
                self.effects.tilt.register(element);
            }
            if element.reveals() {
                self.effects.reveal.observe(element);
            }
        }

        self.sync(now_ms);
    }

    fn relayout(&mut self, width: u16, height: u16) {
        self.layout = PageLayout::compute(width, height);
        self.scroller.set_max(self.layout.max_scroll());
    }

    /// Advance timed effects and scrolling to `now_ms`.
    fn tick(&mut self, now_ms: u64) {
        while let Some(step) = self.effects.update(now_ms) {
            trace!(?step, text = self.effects.typewriter.text(), "typewriter step");
        }

        let dt = now_ms.saturating_sub(self.now_ms);
        self.now_ms = now_ms;
        if self.scroller.tick(dt) {
            // Content moved under a resting pointer.
            if let Some(pos) = self.effects.pointer.cursor() {
                self.effects.tilt.on_pointer_move(pos);
            }
        }
        self.sync(now_ms);
    }

    /// Push the current screen areas to the effects and reveal what is visible.
    fn sync(&mut self, now_ms: u64) {
        let scroll = self.scroller.offset();
        for (element, _) in self.layout.elements().iter().chain(self.layout.nav()) {
            let area = self.layout.screen_area(*element, scroll);
            if element.is_interactive() {
                self.effects.pointer.set_area(*element, area);
            }
            if element.is_plate() {
                let center = self.layout.screen_center(*element, scroll).unwrap_or_default();
                self.effects.tilt.set_slot(*element, area, center);
            }
        }

        let entries = self
            .layout
            .elements()
            .iter()
            .filter(|(element, _)| element.reveals())
            .copied();
        let viewport = self.layout.viewport(scroll);
        for element in self.effects.reveal.notify(now_ms, viewport, entries) {
            debug!(?element, "revealed");
        }

        if let Some(change) = self.effects.pointer.resync() {
            log_hover(change);
        }
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let view = View {
            layout: &self.layout,
            effects: &self.effects,
            scroll: self.scroller.offset(),
            now_ms: self.now_ms,
            accent: self.accent,
            cursor: self.config.cursor,
            status: self.status.as_deref(),
            year: self.year,
        };
        render::render(&view, frame.area(), frame.buffer_mut());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame, then drains whatever else is queued.
    fn handle_crossterm_events(&mut self) -> Result<()> {
        let mut timeout = Duration::from_millis(self.config.tick_rate_ms);
        while event::poll(timeout)? {
            self.on_event(event::read()?);
            timeout = Duration::ZERO;
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::FocusLost => {
                if let Some(change) = self.effects.on_pointer_leave() {
                    log_hover(change);
                }
            }
            Event::Resize(width, height) => {
                self.relayout(width, height);
                self.sync(self.now_ms);
                if let Some(pos) = self.effects.pointer.cursor() {
                    self.effects.tilt.on_pointer_move(pos);
                }
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        self.status = None;
        let page = (f32::from(self.layout.viewport_height) * PAGE_SCROLL_FACTOR) as i32;

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_accent(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroller.scroll_by(LINE_SCROLL),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroller.scroll_by(-LINE_SCROLL),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroller.scroll_by(page),
            (_, KeyCode::PageUp) => self.scroller.scroll_by(-page),
            (_, KeyCode::Char('g') | KeyCode::Home) => self.scroll_to(Section::Hero),
            (_, KeyCode::Char('G') | KeyCode::End) => self.scroll_to(Section::Footer),
            (_, KeyCode::Char('1')) => self.scroll_to(Section::About),
            (_, KeyCode::Char('2')) => self.scroll_to(Section::Skills),
            (_, KeyCode::Char('3')) => self.scroll_to(Section::Projects),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(change) = self.effects.on_pointer_move(pos) {
                    log_hover(change);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(change) = self.effects.on_pointer_move(pos) {
                    log_hover(change);
                }
                if let Some(element) = self.effects.pointer.hit(pos) {
                    self.activate(element);
                }
            }
            MouseEventKind::ScrollDown => self.scroller.scroll_by(WHEEL_SCROLL),
            MouseEventKind::ScrollUp => self.scroller.scroll_by(-WHEEL_SCROLL),
            _ => {}
        }
    }

    /// Follow a clicked button or link.
    fn activate(&mut self, element: Element) {
        match element.action() {
            Some(Action::ScrollTo(section)) => {
                self.status = None;
                self.scroll_to(section);
            }
            Some(Action::OpenLink(url)) => {
                info!(url, "link activated");
                self.status = Some(format!("open {url}"));
            }
            None => {}
        }
    }

    fn scroll_to(&mut self, section: Section) {
        debug!(?section, "scrolling to section");
        self.scroller.scroll_to(self.layout.scroll_target(section));
    }

    /// Cycle through available accent colors.
    fn cycle_accent(&mut self) {
        self.accent = self.accent.next();
        self.effects.tilt.set_highlight(self.accent.color());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn log_hover(change: HoverChange<Element>) {
    debug!(?change, "hover changed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::YOUTUBE_URL;
    use crate::page::NAV_HEIGHT;
    use pretty_assertions::assert_eq;

    const WIDTH: u16 = 120;
    const HEIGHT: u16 = 40;

    fn app() -> App {
        let mut app = App::new(Config::default());
        app.start(WIDTH, HEIGHT, 0);
        app
    }

    fn mouse(kind: MouseEventKind, pos: Position) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn inside(app: &App, element: Element) -> Position {
        let area = app
            .layout
            .screen_area(element, app.scroller.offset())
            .unwrap();
        Position::new(area.x + area.width / 2, area.y + area.height / 2)
    }

    /// Tick until scrolling settles.
    fn settle(app: &mut App) {
        for _ in 0..100 {
            let now = app.now_ms + 33;
            app.tick(now);
        }
    }

    #[test]
    fn test_nav_click_scrolls_to_section() {
        let mut app = app();
        let pos = inside(&app, Element::NavSkills);
        app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), pos));

        assert_eq!(
            app.scroller.target(),
            app.layout.scroll_target(Section::Skills)
        );
        settle(&mut app);
        assert_eq!(app.layout.section_at(app.scroller.offset()), Section::Skills);
    }

    #[test]
    fn test_link_click_shows_url() {
        let mut app = app();
        app.scroller.jump_to(app.layout.max_scroll());
        app.tick(33);
        let pos = inside(&app, Element::FooterLink);
        app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), pos));

        assert_eq!(app.status, Some(format!("open {YOUTUBE_URL}")));
        app.on_event(key(KeyCode::Char('j')));
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_hover_follows_pointer() {
        let mut app = app();
        let pos = inside(&app, Element::HeroProjects);
        app.on_event(mouse(MouseEventKind::Moved, pos));
        assert_eq!(app.effects.pointer.hovered(), Some(Element::HeroProjects));

        app.on_event(mouse(MouseEventKind::Moved, Position::new(0, HEIGHT - 2)));
        assert_eq!(app.effects.pointer.hovered(), None);
    }

    #[test]
    fn test_scrolling_under_resting_pointer_updates_hover() {
        let mut app = app();
        let pos = inside(&app, Element::HeroProjects);
        app.on_event(mouse(MouseEventKind::Moved, pos));
        assert!(app.effects.pointer.is_hovering());

        app.scroller.jump_to(20);
        app.tick(33);
        assert!(!app.effects.pointer.is_hovering());
        assert_eq!(app.effects.pointer.cursor(), Some(pos));
    }

    #[test]
    fn test_plates_reveal_when_scrolled_into_view() {
        let mut app = app();
        assert!(!app.effects.reveal.is_revealed(Element::AboutPlate));
        assert!(!app.effects.reveal.is_revealed(Element::Project(3)));

        app.on_event(key(KeyCode::Char('1')));
        settle(&mut app);
        assert!(app.effects.reveal.is_revealed(Element::AboutPlate));
        assert!(!app.effects.reveal.is_revealed(Element::Project(3)));

        app.on_event(key(KeyCode::Char('g')));
        settle(&mut app);
        assert!(app.effects.reveal.is_revealed(Element::AboutPlate));
    }

    #[test]
    fn test_tilt_follows_pointer_and_resets_on_focus_lost() {
        let mut app = app();
        app.scroller.jump_to(app.layout.scroll_target(Section::About));
        app.tick(33);

        let area = app
            .layout
            .screen_area(Element::AboutPlate, app.scroller.offset())
            .unwrap();
        app.on_event(mouse(MouseEventKind::Moved, Position::new(area.x + 1, area.y + 1)));
        assert!(app.effects.tilt.style(Element::AboutPlate).active);

        app.on_event(Event::FocusLost);
        assert!(!app.effects.tilt.style(Element::AboutPlate).active);
        assert_eq!(app.effects.tilt.style(Element::AboutPlate).translation(), (0, 0));
    }

    #[test]
    fn test_tilt_of_partly_visible_plate_uses_whole_plate() {
        let mut app = app();
        let plate = app.layout.area(Element::AboutPlate).unwrap();
        // Only the bottom six rows show under the nav bar.
        app.scroller.jump_to(plate.y + plate.height - NAV_HEIGHT - 6);
        app.tick(33);

        let x = plate.x + plate.width / 2;
        app.on_event(mouse(MouseEventKind::Moved, Position::new(x, NAV_HEIGHT)));
        let style = app.effects.tilt.style(Element::AboutPlate);
        assert!(style.active);

        // The whole plate is centered on screen row 0.
        let coefficient = Config::default().tilt.coefficient;
        let (dx, dy) = style.offset;
        assert!((dx - 0.5 * coefficient).abs() < 1e-4);
        assert!((dy - (f32::from(NAV_HEIGHT) + 0.5) * coefficient).abs() < 1e-4);
    }

    #[test]
    fn test_status_line_row_does_not_reveal() {
        let mut app = app();
        let plate = app.layout.area(Element::AboutPlate).unwrap();
        // Two plate rows on screen, the lower one behind the status line.
        app.scroller.jump_to(plate.y - (HEIGHT - 2));
        app.tick(33);
        assert!(!app.effects.reveal.is_revealed(Element::AboutPlate));

        app.scroller.jump_to(plate.y - (HEIGHT - 3));
        app.tick(66);
        assert!(app.effects.reveal.is_revealed(Element::AboutPlate));
    }

    #[test]
    fn test_resize_retilts_under_resting_pointer() {
        let mut app = app();
        app.scroller.jump_to(app.layout.scroll_target(Section::About));
        app.tick(33);

        let area = app
            .layout
            .screen_area(Element::AboutPlate, app.scroller.offset())
            .unwrap();
        let pos = Position::new(area.right() - 2, area.y + 1);
        app.on_event(mouse(MouseEventKind::Moved, pos));
        assert!(app.effects.tilt.style(Element::AboutPlate).active);

        // The narrower plate no longer reaches the pointer.
        app.on_event(Event::Resize(60, HEIGHT));
        let area = app
            .layout
            .screen_area(Element::AboutPlate, app.scroller.offset())
            .unwrap();
        assert!(!area.contains(pos));
        assert!(!app.effects.tilt.style(Element::AboutPlate).active);
    }

    #[test]
    fn test_wheel_and_keys_scroll() {
        let mut app = app();
        app.on_event(mouse(MouseEventKind::ScrollDown, Position::new(5, 5)));
        assert_eq!(app.scroller.target(), 3);
        app.on_event(key(KeyCode::Up));
        assert_eq!(app.scroller.target(), 2);
        app.on_event(key(KeyCode::End));
        assert_eq!(app.scroller.target(), app.layout.max_scroll());
        app.on_event(key(KeyCode::Home));
        assert_eq!(app.scroller.target(), 0);
    }

    #[test]
    fn test_typewriter_runs_on_tick() {
        let mut app = app();
        app.tick(150);
        assert_eq!(app.effects.typewriter.text(), "%");
        // A long stall catches up step by step.
        app.tick(150 * 4);
        assert_eq!(app.effects.typewriter.text(), "% SD");
    }

    #[test]
    fn test_accent_and_quit_keys() {
        let mut app = app();
        app.on_event(key(KeyCode::Char('c')));
        assert_eq!(app.accent, Accent::Purple.next());

        app.on_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_resize_keeps_registrations() {
        let mut app = app();
        app.on_event(Event::Resize(60, 30));
        assert_eq!(app.layout.width, 60);
        let pos = inside(&app, Element::HeroProfile);
        app.on_event(mouse(MouseEventKind::Moved, pos));
        assert_eq!(app.effects.pointer.hovered(), Some(Element::HeroProfile));
    }
}
