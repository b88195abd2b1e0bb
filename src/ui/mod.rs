use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Page};
use crate::booking::{quote, Field, FieldError, GuestForm};
use crate::picker::CellState;

// ─── UI enums / state ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub enum InputMode { #[default] Normal, Insert }

/// Which step of the checkout flow we're on.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum BookingStep {
    #[default]
    GuestInfo,
    Payment,
    Confirmation,
}

/// Focus order of the form fields on each checkout step.
pub fn step_fields(step: BookingStep) -> &'static [Field] {
    match step {
        BookingStep::GuestInfo => &[
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Phone,
            Field::SpecialRequests,
        ],
        BookingStep::Payment => &[
            Field::CardName,
            Field::CardNumber,
            Field::CardExpiry,
            Field::CardCvc,
        ],
        BookingStep::Confirmation => &[],
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub input_mode:   InputMode,
    pub booking_step: BookingStep,
    pub form:         GuestForm,
    pub focus:        Field,
    pub errors:       Vec<FieldError>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input_mode:   InputMode::Normal,
            booking_step: BookingStep::GuestInfo,
            form:         GuestForm::default(),
            focus:        Field::FirstName,
            errors:       Vec::new(),
        }
    }
}

// ─── Root draw ────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Fill background
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg()).fg(app.theme.fg())),
        area,
    );

    // Layout: [ content | status_bar(1) ]
    let root = Layout::default().direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)]).split(area);

    match app.page {
        Page::Home       => draw_home(f, app, root[0]),
        Page::Rooms      => draw_rooms(f, app, root[0]),
        Page::RoomDetail => draw_room_detail(f, app, root[0]),
        Page::Booking    => draw_booking(f, app, root[0]),
        Page::Account    => draw_account(f, app, root[0]),
    }
    draw_statusbar(f, app, root[1]);

    // Overlays
    if app.show_picker {
        draw_picker(f, area, app);
    }
    if app.show_help {
        draw_help(f, area, app);
    }
}

// ─── Home ─────────────────────────────────────────────────────────────────────

const AMENITIES: &[&str] = &[
    "24/7 Reception", "Free WiFi Everywhere", "Communal Kitchen",
    "Rooftop Terrace", "Laundry Service", "Luggage Storage",
    "Daily Social Events", "City-Center Location",
];

fn draw_home(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;

    let rows = Layout::default().direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(8),
            Constraint::Length(9),
        ]).split(area);

    // Hero
    let hero = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  W A N D E R R E S T",
            Style::default().fg(t.accent()).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Your home away from home — beds from $35/night in the heart of the city.",
            Style::default().fg(t.fg()),
        )),
        Line::from(Span::styled(
            "  Press Enter to browse rooms, c to pick your dates, ? for all keys.",
            Style::default().fg(t.fg_dim()),
        )),
    ])
    .block(outer_block(" Welcome ", t, true));
    f.render_widget(hero, rows[0]);

    // Amenities | popular rooms
    let cols = Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let amenity_lines: Vec<Line> = AMENITIES.iter()
        .map(|a| Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(t.success())),
            Span::styled(*a, Style::default().fg(t.fg())),
        ]))
        .collect();
    f.render_widget(
        Paragraph::new(amenity_lines).block(outer_block(" Hostel Amenities ", t, false)),
        cols[0],
    );

    let popular: Vec<Line> = app.rooms.iter()
        .filter(|r| r.popular)
        .flat_map(|r| vec![
            Line::from(vec![
                Span::styled(format!("  {} ", r.name), Style::default().fg(t.fg()).add_modifier(Modifier::BOLD)),
                Span::styled(format!("${}/night", r.price), Style::default().fg(t.price())),
            ]),
            Line::from(Span::styled(
                format!("    {} {:.1} ({} reviews)", stars(r.rating), r.rating, r.reviews),
                Style::default().fg(t.star()),
            )),
        ])
        .collect();
    f.render_widget(
        Paragraph::new(popular).block(outer_block(" Popular Rooms ", t, false)),
        cols[1],
    );

    // Testimonials
    let quotes: Vec<Line> = app.testimonials.iter()
        .flat_map(|ts| vec![
            Line::from(vec![
                Span::styled(format!("  {} ", stars(ts.rating as f32)), Style::default().fg(t.star())),
                Span::styled(format!("{} — {}", ts.name, ts.location), Style::default().fg(t.accent())),
            ]),
            Line::from(Span::styled(format!("    “{}”", truncate(&ts.text, 110)), Style::default().fg(t.fg_dim()))),
        ])
        .collect();
    f.render_widget(
        Paragraph::new(quotes)
            .block(outer_block(" What Our Guests Say ", t, false))
            .wrap(Wrap { trim: false }),
        rows[2],
    );
}

// ─── Rooms list ───────────────────────────────────────────────────────────────

fn draw_rooms(f: &mut Frame, app: &App, area: Rect) {
    let t     = &app.theme;
    let block = outer_block(" Our Rooms — Enter: details  c: dates  b: book ", t, true);

    let items: Vec<ListItem> = app.rooms.iter().enumerate().map(|(i, r)| {
        let sel      = i == app.room_cursor;
        let (bg, fg) = t.cursor_highlight();
        let name_s   = if sel {
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.fg()).add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![
            Span::styled(format!(" {:<26}", r.name), name_s),
            Span::styled(format!(" {:<12}", r.room_type), Style::default().fg(t.fg_dim())),
            Span::styled(format!(" ${:>3}/night ", r.price), Style::default().fg(t.price())),
            Span::styled(
                format!(" {} {:.1} ({:>3}) ", stars(r.rating), r.rating, r.reviews),
                Style::default().fg(t.star()),
            ),
        ];
        if r.popular {
            spans.push(Span::styled(
                " POPULAR ",
                Style::default().fg(t.bg()).bg(t.warning()).add_modifier(Modifier::BOLD),
            ));
        }
        ListItem::new(Line::from(spans))
    }).collect();

    let mut state = ListState::default();
    state.select(Some(app.room_cursor));
    f.render_stateful_widget(List::new(items).block(block).highlight_symbol("▶ "), area, &mut state);
}

// ─── Room detail ──────────────────────────────────────────────────────────────

fn draw_room_detail(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let Some(room) = app.detail_room.and_then(|i| app.rooms.get(i)) else {
        f.render_widget(
            Paragraph::new("  No room selected — Esc to go back")
                .block(outer_block(" Room ", t, true))
                .style(Style::default().fg(t.fg_dim())),
            area,
        );
        return;
    };

    let cols = Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)]).split(area);

    // Left: description + amenities
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", room.name), Style::default().fg(t.accent()).add_modifier(Modifier::BOLD)),
            Span::styled(format!("· {}", room.room_type), Style::default().fg(t.fg_dim())),
        ]),
        Line::from(Span::styled(
            format!("  {} {:.1} · {} reviews · sleeps {}",
                stars(room.rating), room.rating, room.reviews, room.capacity),
            Style::default().fg(t.star()),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", room.description), Style::default().fg(t.fg()))),
        Line::from(""),
        Line::from(Span::styled("  Amenities", Style::default().fg(t.accent()).add_modifier(Modifier::BOLD))),
    ];
    for a in &room.amenities {
        lines.push(Line::from(vec![
            Span::styled("   ✓ ", Style::default().fg(t.success())),
            Span::styled(a.as_str(), Style::default().fg(t.fg())),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines)
            .block(outer_block(" Room Details ", t, true))
            .wrap(Wrap { trim: false }),
        cols[0],
    );

    // Right: booking summary
    f.render_widget(
        Paragraph::new(summary_lines(app, true))
            .block(outer_block(" Your Stay ", t, false)),
        cols[1],
    );
}

/// Shared price-summary panel (room detail + checkout sidebar).
fn summary_lines(app: &App, with_hints: bool) -> Vec<Line<'static>> {
    let t   = &app.theme;
    let dim = Style::default().fg(t.fg_dim());
    let fg  = Style::default().fg(t.fg());

    let Some(det) = app.store.details() else {
        return vec![Line::from(Span::styled("  No booking in progress", dim))];
    };
    let q = quote(det.nightly_price, det.dates, app.fees);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Room      ", dim),
            Span::styled(det.room_name.clone(), fg),
        ]),
        Line::from(vec![
            Span::styled("  Guests    ", dim),
            Span::styled(
                format!("{} {}", det.guests, if det.guests == 1 { "Guest" } else { "Guests" }),
                fg,
            ),
        ]),
        Line::from(vec![
            Span::styled("  Check-in  ", dim),
            Span::styled(det.dates.start.format("%a, %b %-d %Y").to_string(), fg),
        ]),
        Line::from(vec![
            Span::styled("  Check-out ", dim),
            Span::styled(det.dates.end.format("%a, %b %-d %Y").to_string(), fg),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  ${} × {} nights", det.nightly_price, q.nights), dim),
            Span::styled(format!("   ${}", q.subtotal), fg),
        ]),
        Line::from(vec![
            Span::styled("  Cleaning fee", dim),
            Span::styled(format!("      ${}", q.cleaning), fg),
        ]),
        Line::from(vec![
            Span::styled("  Service fee", dim),
            Span::styled(format!("       ${}", q.service), fg),
        ]),
        Line::from(vec![
            Span::styled("  Total", Style::default().fg(t.fg()).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("             ${}", q.total),
                Style::default().fg(t.price()).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if with_hints {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  c: change dates   +/-: guests", dim)));
        lines.push(Line::from(Span::styled("  b: book this room", dim)));
    }
    lines
}

// ─── Checkout (3-step form) ───────────────────────────────────────────────────

fn draw_booking(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;

    let cols = Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)]).split(area);

    let step     = app.ui.booking_step;
    let step_num = match step {
        BookingStep::GuestInfo    => "Step 1 / 3 — Guest Info",
        BookingStep::Payment      => "Step 2 / 3 — Payment",
        BookingStep::Confirmation => "Step 3 / 3 — Confirmation",
    };

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {step_num}"), Style::default().fg(t.accent()).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    match step {
        BookingStep::Confirmation => lines.extend(confirmation_lines(app)),
        _ => {
            for field in step_fields(step) {
                lines.extend(field_lines(app, *field));
            }
        }
    }

    lines.push(Line::from(""));
    let hint = match step {
        BookingStep::Confirmation =>
            "  Enter: complete booking   Esc: back",
        _ => "  Tab/↑↓: fields   Enter: continue   Esc: back",
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(t.fg_dim()))));

    f.render_widget(
        Paragraph::new(lines)
            .block(outer_block(" Complete Your Booking ", t, true))
            .wrap(Wrap { trim: false }),
        cols[0],
    );

    f.render_widget(
        Paragraph::new(summary_lines(app, false)).block(outer_block(" Your Booking ", t, false)),
        cols[1],
    );
}

fn field_lines(app: &App, field: Field) -> Vec<Line<'static>> {
    let t       = &app.theme;
    let focused = app.ui.focus == field;
    let err     = app.ui.errors.iter().find(|e| e.field() == field);

    let label_style = if focused {
        Style::default().fg(t.accent()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(t.fg_dim())
    };
    let value_style = if focused {
        Style::default().fg(t.fg())
    } else {
        Style::default().fg(t.fg_dim())
    };

    let marker = if focused { "▶ " } else { "  " };
    let value  = masked_value(&app.ui.form, field);
    let caret  = if focused { "█" } else { "" };

    let mut out = vec![Line::from(vec![
        Span::styled(format!(" {marker}{:<16}", field.label()), label_style),
        Span::styled(format!("{value}{caret}"), value_style),
    ])];
    if let Some(e) = err {
        out.push(Line::from(Span::styled(
            format!("     {e}"),
            Style::default().fg(t.error()),
        )));
    }
    out.push(Line::from(""));
    out
}

/// Card number and CVC are echoed masked; everything else verbatim.
fn masked_value(form: &GuestForm, field: Field) -> String {
    let v = form.value(field);
    match field {
        Field::CardNumber => v.chars().map(|c| if c.is_ascii_digit() { '•' } else { c }).collect(),
        Field::CardCvc    => "•".repeat(v.len()),
        _                 => v.to_owned(),
    }
}

fn confirmation_lines(app: &App) -> Vec<Line<'static>> {
    let t    = &app.theme;
    let dim  = Style::default().fg(t.fg_dim());
    let fg   = Style::default().fg(t.fg());
    let form = &app.ui.form;

    let mut lines = vec![
        Line::from(Span::styled("  Guest", Style::default().fg(t.accent()).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("    Name     ", dim),
            Span::styled(format!("{} {}", form.first_name.trim(), form.last_name.trim()), fg),
        ]),
        Line::from(vec![
            Span::styled("    Email    ", dim),
            Span::styled(form.email.trim().to_owned(), fg),
        ]),
        Line::from(vec![
            Span::styled("    Phone    ", dim),
            Span::styled(form.phone.trim().to_owned(), fg),
        ]),
        Line::from(vec![
            Span::styled("    Payment  ", dim),
            Span::styled(format!("•••• •••• •••• {}", form.card_last_four()), fg),
        ]),
    ];
    if !form.special_requests.trim().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Special Requests", Style::default().fg(t.accent()).add_modifier(Modifier::BOLD))));
        lines.push(Line::from(Span::styled(format!("    {}", form.special_requests.trim()), fg)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  ⚠ By completing this booking you agree to our terms, including the",
        Style::default().fg(t.warning()),
    )));
    lines.push(Line::from(Span::styled(
        "    cancellation policy. This demo charges nothing.",
        Style::default().fg(t.warning()),
    )));
    lines
}

// ─── Account dashboard (mock) ─────────────────────────────────────────────────

fn draw_account(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let profile  = crate::booking::mock_profile();
    let bookings = crate::booking::mock_bookings();

    let rows = Layout::default().direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)]).split(area);

    let dim = Style::default().fg(t.fg_dim());
    let fg  = Style::default().fg(t.fg());
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", fg),
                Span::styled(profile.name, Style::default().fg(t.accent()).add_modifier(Modifier::BOLD)),
                Span::styled(format!("   member since {}", profile.join_date), dim),
            ]),
            Line::from(vec![Span::styled("  ✉ ", dim), Span::styled(profile.email, fg)]),
            Line::from(vec![Span::styled("  ☏ ", dim), Span::styled(profile.phone, fg)]),
        ])
        .block(outer_block(" Profile ", t, true)),
        rows[0],
    );

    let items: Vec<ListItem> = bookings.iter().map(|b| {
        let status_style = match b.status {
            crate::booking::BookingStatus::Upcoming  => Style::default().fg(t.success()),
            crate::booking::BookingStatus::Completed => Style::default().fg(t.fg_dim()),
        };
        ListItem::new(Line::from(vec![
            Span::styled(format!(" [{}] ", b.status.label()), status_style),
            Span::styled(b.room_name, Style::default().fg(t.fg()).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} → {}  ·  {} guest{}  ·  ",
                    b.check_in.format("%b %-d %Y"),
                    b.check_out.format("%b %-d %Y"),
                    b.guests,
                    if b.guests == 1 { "" } else { "s" }),
                Style::default().fg(t.fg_dim()),
            ),
            Span::styled(format!("${}", b.total_price), Style::default().fg(t.price())),
        ]))
    }).collect();
    f.render_widget(
        List::new(items).block(outer_block(" My Bookings ", t, false)),
        rows[1],
    );
}

// ─── Date-range picker popup ──────────────────────────────────────────────────

fn draw_picker(f: &mut Frame, area: Rect, app: &App) {
    let t     = &app.theme;
    let today = Local::now().date_naive();
    let rect  = centered_exact(38, 15, area);
    f.render_widget(Clear, rect);

    let view  = app.picker.view();
    let title = Line::from(Span::styled(
        format!(" {} {} ", view.name(), view.year),
        Style::default().fg(t.accent()).add_modifier(Modifier::BOLD),
    ));
    let block = Block::default()
        .title(Title::from(title))
        .borders(Borders::ALL)
        .border_type(t.border_type())
        .border_style(Style::default().fg(t.border_active()))
        .style(Style::default().bg(t.popup_bg()));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let mut lines: Vec<Line> = vec![];

    // Header row: Su Mo Tu We Th Fr Sa (Sunday-start, like the storefront)
    let hdrs: Vec<Span> = ["Su","Mo","Tu","We","Th","Fr","Sa"].iter().map(|d| {
        Span::styled(format!(" {d} "), Style::default().fg(t.fg_dim()).add_modifier(Modifier::BOLD))
    }).collect();
    lines.push(Line::from(hdrs));

    let grid = app.picker.grid();
    for row in grid.chunks(7) {
        let spans: Vec<Span> = row.iter().map(|date| {
            let cs = app.picker.cell_state(*date, today);
            Span::styled(format!(" {:>2} ", date.day()), cell_style(t, &cs, *date == app.cal_cursor))
        }).collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let range_line = match app.picker.range() {
        Some(r) => format!(
            "  {} – {}  ({} nights)",
            r.start.format("%b %-d"),
            r.end.format("%b %-d"),
            r.nights().max(1),
        ),
        None => "  Pick a check-in date".to_owned(),
    };
    lines.push(Line::from(Span::styled(range_line, Style::default().fg(t.fg()))));
    lines.push(Line::from(Span::styled(
        "  hjkl: move  Enter: select  [ ]: month  Esc: done",
        Style::default().fg(t.fg_dim()),
    )));

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(t.popup_bg())).alignment(Alignment::Left),
        inner,
    );
}

/// Map the derived cell flags onto the theme. Precedence: cursor, endpoints,
/// open interval, today, then the disabled/plain styles.
fn cell_style(t: &crate::theme::ThemeConfig, cs: &CellState, is_cursor: bool) -> Style {
    if is_cursor && !cs.disabled() {
        let (bg, fg) = t.cursor_highlight();
        return Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
    }
    if cs.range_start || cs.range_end {
        let (bg, fg) = t.endpoint_highlight();
        return Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
    }
    if cs.in_range && !cs.disabled() {
        let (bg, fg) = t.in_range_highlight();
        return Style::default().bg(bg).fg(fg);
    }
    if cs.is_today {
        let (bg, fg) = t.today_highlight();
        return Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
    }
    if cs.disabled() {
        return Style::default().fg(t.fg_dim()).add_modifier(Modifier::DIM);
    }
    Style::default().fg(t.fg())
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let (mode_str, mode_style) = match app.ui.input_mode {
        InputMode::Normal => (" BROWSE ", Style::default().bg(t.accent()).fg(t.bg()).add_modifier(Modifier::BOLD)),
        InputMode::Insert => (" FORM ",   Style::default().bg(t.warning()).fg(t.bg()).add_modifier(Modifier::BOLD)),
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_str, mode_style),
        Span::styled(
            "  1:home  2:rooms  3:account  jk:move  Enter:open  c:dates  b:book  T:theme  ?:help  q:quit",
            Style::default().fg(t.fg_dim()),
        ),
        Span::styled(
            format!("  {}", app.status),
            Style::default().fg(t.success()).add_modifier(Modifier::ITALIC),
        ),
    ])).style(Style::default().bg(t.bg2()));
    f.render_widget(bar, area);
}

// ─── Help overlay ────────────────────────────────────────────────────────────

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let t    = &app.theme;
    let rect = centered(68, 80, area);
    f.render_widget(Clear, rect);

    let title = Line::from(Span::styled(
        " Keyboard Shortcuts ",
        Style::default().fg(t.accent()).add_modifier(Modifier::BOLD),
    ));
    let block = Block::default()
        .title(Title::from(title))
        .borders(Borders::ALL)
        .border_type(t.border_type())
        .border_style(Style::default().fg(t.border_active()))
        .style(Style::default().bg(t.popup_bg()));

    let accent = Style::default().fg(t.accent()).add_modifier(Modifier::BOLD);
    let dim    = Style::default().fg(t.fg_dim());
    let lines  = vec![
        Line::from(""),
        Line::from(Span::styled("  Pages", accent)),
        Line::from(Span::styled("  1 / 2 / 3          Home / Rooms / Account", dim)),
        Line::from(Span::styled("  Enter              Open room details", dim)),
        Line::from(Span::styled("  Esc                Back", dim)),
        Line::from(""),
        Line::from(Span::styled("  Stay dates (c opens the calendar)", accent)),
        Line::from(Span::styled("  h/j/k/l  ←↓↑→     Move by day / week", dim)),
        Line::from(Span::styled("  [ / ]              Prev / Next month", dim)),
        Line::from(Span::styled("  t                  Jump to today", dim)),
        Line::from(Span::styled("  Enter              Set check-in, then check-out", dim)),
        Line::from(Span::styled("                     (first pick proposes a 2-night stay;", dim)),
        Line::from(Span::styled("                      picking an earlier day swaps the ends)", dim)),
        Line::from(""),
        Line::from(Span::styled("  Booking", accent)),
        Line::from(Span::styled("  + / -              Adjust guests", dim)),
        Line::from(Span::styled("  b                  Start checkout (3 steps)", dim)),
        Line::from(Span::styled("    Tab / ↑↓           Move between fields", dim)),
        Line::from(Span::styled("    Enter              Validate and continue", dim)),
        Line::from(""),
        Line::from(Span::styled("  General", accent)),
        Line::from(Span::styled("  T                  Cycle color theme", dim)),
        Line::from(Span::styled("  ?                  Toggle help", dim)),
        Line::from(Span::styled("  q                  Quit", dim)),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().fg(t.fg()))
            .wrap(Wrap { trim: false }),
        rect,
    );
}

// ─── Utilities ────────────────────────────────────────────────────────────────

fn outer_block<'a>(title: &'a str, t: &crate::theme::ThemeConfig, focused: bool) -> Block<'a> {
    let bs = Style::default().fg(if focused { t.border_active() } else { t.border() });
    Block::default()
        .title(Title::from(Line::from(Span::styled(
            title,
            Style::default().fg(t.accent()).add_modifier(Modifier::BOLD),
        ))))
        .borders(Borders::ALL)
        .border_type(t.border_type())
        .border_style(bs)
        .style(Style::default().bg(t.bg()))
}

fn centered(pct_x: u16, pct_y: u16, r: Rect) -> Rect {
    let vert = Layout::default().direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - pct_y) / 2),
            Constraint::Percentage(pct_y),
            Constraint::Percentage((100 - pct_y) / 2),
        ]).split(r);
    Layout::default().direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - pct_x) / 2),
            Constraint::Percentage(pct_x),
            Constraint::Percentage((100 - pct_x) / 2),
        ]).split(vert[1])[1]
}

/// Fixed-size centered rect — the calendar grid needs exact cell widths.
fn centered_exact(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    Rect {
        x: r.x + (r.width - w) / 2,
        y: r.y + (r.height - h) / 2,
        width: w,
        height: h,
    }
}

fn stars(rating: f32) -> String {
    let full = rating.round() as usize;
    "★".repeat(full.min(5)) + &"☆".repeat(5usize.saturating_sub(full))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_fields_cover_every_editable_field_once() {
        let mut all: Vec<Field> = step_fields(BookingStep::GuestInfo)
            .iter()
            .chain(step_fields(BookingStep::Payment))
            .copied()
            .collect();
        let len = all.len();
        all.dedup();
        assert_eq!(len, 9);
        assert_eq!(all.len(), len);
        assert!(step_fields(BookingStep::Confirmation).is_empty());
    }

    #[test]
    fn card_fields_are_masked() {
        let form = GuestForm {
            card_number: "4242 4242".into(),
            card_cvc:    "123".into(),
            email:       "a@b.co".into(),
            ..GuestForm::default()
        };
        assert_eq!(masked_value(&form, Field::CardNumber), "•••• ••••");
        assert_eq!(masked_value(&form, Field::CardCvc), "•••");
        assert_eq!(masked_value(&form, Field::Email), "a@b.co");
    }

    #[test]
    fn stars_round_to_five_at_most() {
        assert_eq!(stars(4.8), "★★★★★");
        assert_eq!(stars(4.4), "★★★★☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }
}
