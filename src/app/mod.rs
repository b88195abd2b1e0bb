use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::{
    booking::{confirmation_code, BookingStore, Fees},
    config::AppConfig,
    picker::{DateRange, DateRangePicker},
    rooms::{Room, Testimonial},
    theme::ThemeConfig,
    ui::{draw, step_fields, BookingStep, InputMode, UiState},
};

// ─── Page model ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    Rooms,
    RoomDetail,
    Booking,
    Account,
}

// ─── App state ────────────────────────────────────────────────────────────────

pub struct App {
    pub theme:          ThemeConfig,
    pub theme_idx:      usize,
    pub fees:           Fees,
    pub default_nights: i64,
    pub rooms:          Vec<Room>,
    pub testimonials:   Vec<Testimonial>,
    pub store:          BookingStore,
    pub page:           Page,
    pub room_cursor:    usize,
    /// Index into `rooms` for the detail page; set on Enter from the list.
    pub detail_room:    Option<usize>,
    pub picker:         DateRangePicker,
    pub show_picker:    bool,
    pub show_help:      bool,
    /// Keyboard cursor inside the picker grid — doubles as the hover date.
    pub cal_cursor:     NaiveDate,
    pub ui:             UiState,
    pub status:         String,
    pub running:        bool,
}

impl App {
    pub fn new(
        cfg: &AppConfig,
        theme: ThemeConfig,
        rooms: Vec<Room>,
        testimonials: Vec<Testimonial>,
    ) -> Self {
        let today = Local::now().date_naive();
        let all   = ThemeConfig::all_themes();
        let idx   = all.iter().position(|t| t.name == theme.name).unwrap_or(0);

        Self {
            theme_idx:      idx,
            theme,
            fees:           cfg.fees(),
            default_nights: cfg.default_nights(),
            rooms,
            testimonials,
            store:          BookingStore::default(),
            page:           Page::Home,
            room_cursor:    0,
            detail_room:    None,
            picker:         DateRangePicker::new(today, None),
            show_picker:    false,
            show_help:      false,
            cal_cursor:     today,
            ui:             UiState::default(),
            status:         String::new(),
            running:        true,
        }
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn default_range(&self) -> DateRange {
        let today = self.today();
        DateRange { start: today, end: today + Duration::days(self.default_nights) }
    }

    // ── TUI loop ──────────────────────────────────────────────────────────────

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend  = CrosstermBackend::new(stdout);
        let mut term = Terminal::new(backend)?;

        let result = self.event_loop(&mut term);

        disable_raw_mode()?;
        execute!(term.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        term.show_cursor()?;
        result
    }

    fn event_loop(&mut self, term: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick = std::time::Duration::from_millis(50);
        while self.running {
            term.draw(|f| draw(f, self))?;
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    self.on_key(key)?;
                }
            }
        }
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    fn on_key(&mut self, key: crossterm::event::KeyEvent) -> Result<()> {
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }
        if self.show_picker {
            self.key_picker(key);
            return Ok(());
        }

        // Global keys only outside text entry, so names may contain them
        if self.ui.input_mode == InputMode::Normal {
            match key.code {
                KeyCode::Char('q') => { self.running = false; return Ok(()); }
                KeyCode::Char('?') => { self.show_help = true; return Ok(()); }
                KeyCode::Char('1') => { self.page = Page::Home;    return Ok(()); }
                KeyCode::Char('2') => { self.page = Page::Rooms;   return Ok(()); }
                KeyCode::Char('3') => { self.page = Page::Account; return Ok(()); }
                // T (Shift+T) — cycle through themes
                KeyCode::Char('T') => {
                    let themes = ThemeConfig::all_themes();
                    self.theme_idx = (self.theme_idx + 1) % themes.len();
                    self.theme     = themes[self.theme_idx].clone();
                    let _ = self.theme.save();
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.page {
            Page::Home        => self.key_home(key),
            Page::Rooms       => self.key_rooms(key),
            Page::RoomDetail  => self.key_room_detail(key),
            Page::Booking     => self.key_booking(key),
            Page::Account     => {
                if key.code == KeyCode::Esc { self.page = Page::Home; }
            }
        }
        Ok(())
    }

    fn key_home(&mut self, key: crossterm::event::KeyEvent) {
        if let KeyCode::Enter | KeyCode::Char('r') = key.code {
            self.page = Page::Rooms;
        }
    }

    fn key_rooms(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.room_cursor + 1 < self.rooms.len() { self.room_cursor += 1; }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.room_cursor = self.room_cursor.saturating_sub(1);
            }
            KeyCode::Enter => self.open_room_detail(self.room_cursor),
            KeyCode::Char('c') => self.open_picker(),
            KeyCode::Char('b') => {
                self.open_room_detail(self.room_cursor);
                self.start_booking();
            }
            KeyCode::Esc => self.page = Page::Home,
            _ => {}
        }
    }

    fn key_room_detail(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_guests(1),
            KeyCode::Char('-') => self.adjust_guests(-1),
            KeyCode::Char('c') => self.open_picker(),
            KeyCode::Char('b') | KeyCode::Enter => self.start_booking(),
            KeyCode::Esc => self.page = Page::Rooms,
            _ => {}
        }
    }

    // ── Booking form (3 steps, mirrors the storefront checkout) ───────────────

    fn key_booking(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Step back through the flow; out of it from the first step
                self.ui.errors.clear();
                match self.ui.booking_step {
                    BookingStep::GuestInfo => {
                        self.ui.input_mode = InputMode::Normal;
                        self.page          = Page::RoomDetail;
                    }
                    BookingStep::Payment      => self.set_step(BookingStep::GuestInfo),
                    BookingStep::Confirmation => self.set_step(BookingStep::Payment),
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus_field(1),
            KeyCode::BackTab | KeyCode::Up => self.focus_field(-1),
            KeyCode::Enter => self.advance_booking(),
            KeyCode::Backspace => {
                if self.ui.booking_step != BookingStep::Confirmation {
                    self.ui.form.value_mut(self.ui.focus).pop();
                }
            }
            KeyCode::Char(c) => {
                if self.ui.booking_step != BookingStep::Confirmation {
                    self.ui.form.value_mut(self.ui.focus).push(c);
                    // editing a field clears its stale errors
                    let focus = self.ui.focus;
                    self.ui.errors.retain(|e| e.field() != focus);
                }
            }
            _ => {}
        }
    }

    fn set_step(&mut self, step: BookingStep) {
        self.ui.booking_step = step;
        if let Some(first) = step_fields(step).first() {
            self.ui.focus = *first;
        }
    }

    fn focus_field(&mut self, dir: i32) {
        let fields = step_fields(self.ui.booking_step);
        if fields.is_empty() {
            return;
        }
        let cur  = fields.iter().position(|f| *f == self.ui.focus).unwrap_or(0);
        let next = (cur as i32 + dir).rem_euclid(fields.len() as i32) as usize;
        self.ui.focus = fields[next];
    }

    fn advance_booking(&mut self) {
        let errors = match self.ui.booking_step {
            BookingStep::GuestInfo => self.ui.form.validate_guest_info(),
            BookingStep::Payment   => self.ui.form.validate_payment(),
            BookingStep::Confirmation => {
                self.complete_booking();
                return;
            }
        };
        if errors.is_empty() {
            let next = match self.ui.booking_step {
                BookingStep::GuestInfo => BookingStep::Payment,
                _                      => BookingStep::Confirmation,
            };
            self.ui.errors.clear();
            self.set_step(next);
        } else {
            self.ui.errors = errors;
        }
    }

    /// Simulated checkout: no payment is processed, no booking is stored.
    fn complete_booking(&mut self) {
        let code = confirmation_code();
        tracing::info!(%code, "booking completed");
        self.status = format!("✓ Booking confirmed — ref {code}");
        self.store.clear();
        self.ui = UiState::default();
        self.detail_room = None;
        self.page = Page::Home;
    }

    // ── Date picker popup ─────────────────────────────────────────────────────

    fn open_picker(&mut self) {
        // Make sure the store tracks the room under the cursor, then mount
        // the picker on whatever dates the store already holds
        if self.store.details().is_none() {
            if let Some(room) = self.rooms.get(self.room_cursor) {
                self.store.select_room(room, self.default_range());
            }
        }
        let today        = self.today();
        self.picker      = DateRangePicker::new(today, self.store.dates());
        self.cal_cursor  = self.picker.range().map(|r| r.start).unwrap_or(today);
        self.show_picker = true;
    }

    fn key_picker(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.shift_cal_cursor(1),
            KeyCode::Left  | KeyCode::Char('h') => self.shift_cal_cursor(-1),
            KeyCode::Down  | KeyCode::Char('j') => self.shift_cal_cursor(7),
            KeyCode::Up    | KeyCode::Char('k') => self.shift_cal_cursor(-7),
            KeyCode::Char(']') => {
                self.picker.next_month();
                self.snap_cursor_to_view();
            }
            KeyCode::Char('[') => {
                self.picker.prev_month();
                self.snap_cursor_to_view();
            }
            KeyCode::Char('t') => {
                let t = self.today();
                self.cal_cursor = t;
                while self.picker.view() != crate::calendar::ViewMonth::containing(t) {
                    if self.picker.view().first_day() > t {
                        self.picker.prev_month();
                    } else {
                        self.picker.next_month();
                    }
                }
                self.picker.set_hover(t, t);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let today = self.today();
                if let Some(range) = self.picker.click(self.cal_cursor, today) {
                    // committed change flows straight into the shared store
                    self.store.set_dates(range);
                    self.status = format!(
                        "Stay: {} → {} ({} nights)",
                        range.start.format("%b %-d"),
                        range.end.format("%b %-d, %Y"),
                        range.nights().max(1),
                    );
                }
            }
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
                self.picker.clear_hover();
                self.show_picker = false;
            }
            _ => {}
        }
    }

    fn shift_cal_cursor(&mut self, days: i64) {
        let cursor = self.cal_cursor + Duration::days(days);
        self.cal_cursor = cursor;
        // follow the cursor across month boundaries
        while !self.picker.view().contains(cursor) {
            if cursor < self.picker.view().first_day() {
                self.picker.prev_month();
            } else {
                self.picker.next_month();
            }
        }
        self.picker.set_hover(cursor, self.today());
    }

    fn snap_cursor_to_view(&mut self) {
        if !self.picker.view().contains(self.cal_cursor) {
            self.cal_cursor = self.picker.view().first_day();
        }
        self.picker.clear_hover();
        self.picker.set_hover(self.cal_cursor, self.today());
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn open_room_detail(&mut self, idx: usize) {
        if let Some(room) = self.rooms.get(idx) {
            self.store.select_room(room, self.default_range());
            self.detail_room = Some(idx);
            self.page        = Page::RoomDetail;
        }
    }

    fn start_booking(&mut self) {
        if self.store.details().is_none() {
            return;
        }
        self.ui            = UiState::default();
        self.ui.input_mode = InputMode::Insert;
        self.page          = Page::Booking;
    }

    fn adjust_guests(&mut self, delta: i32) {
        let Some(idx) = self.detail_room else { return };
        let capacity  = self.rooms[idx].capacity;
        if let Some(det) = self.store.details() {
            let guests = (det.guests as i32 + delta).clamp(1, capacity as i32) as u32;
            self.store.set_guests(guests);
        }
    }
}
