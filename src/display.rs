//! Terminal host — all crossterm I/O lives here.
//!
//! [`TerminalHost`] implements every collaborator trait the game needs. Draw
//! commands land in a cell buffer (one cell covers `cell_width`×`cell_height`
//! viewport pixels) which `present` writes out in one go. Input is drained
//! without blocking once per frame.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    style::{self, Attribute, Print},
    QueueableCommand,
};

use alien_invasion::entities::Rect;
use alien_invasion::host::{
    CursorControl, Image, InputEvent, InputSource, Key, RenderSurface, TextImage,
    TextRasterizer,
};
use alien_invasion::settings::{Color, Settings};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color(40, 40, 160);
const C_ALIEN: Color = Color(20, 140, 20);

/// Frames a movement key stays held after its first press with no repeat
/// yet. Must outlast the OS auto-repeat delay (typically 250-500 ms).
/// Only used on terminals that never report key releases.
const FIRST_HOLD_WINDOW: u64 = 36;

/// Frames a movement key stays held after a repeat once repeats are flowing.
const HOLD_WINDOW: u64 = 8;

/// Bookkeeping for one held movement key.
#[derive(Clone, Copy, Debug)]
struct Hold {
    /// Frame of the last press or repeat.
    last: u64,
    /// At least one auto-repeat has arrived since the key went down.
    repeating: bool,
}

impl Hold {
    fn expired(&self, frame: u64) -> bool {
        let window = if self.repeating {
            HOLD_WINDOW
        } else {
            FIRST_HOLD_WINDOW
        };
        frame.saturating_sub(self.last) > window
    }
}

/// Left/Right are held; everything else is a one-shot action.
fn is_movement(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right)
}

fn to_term(c: Color) -> style::Color {
    style::Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Q),
        _ => None,
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

pub struct TerminalHost<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cell_width: u32,
    cell_height: u32,
    cells: Vec<Cell>,
    cursor_visible: bool,
    /// Terminal reports key releases (keyboard enhancement active).
    reports_release: bool,
    frame: u64,
    /// Held movement keys.
    held: HashMap<Key, Hold>,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W, cols: u16, rows: u16, settings: &Settings, reports_release: bool) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: settings.text_color,
            bg: settings.bg_color,
            bold: false,
        };
        Self {
            out,
            cols,
            rows,
            cell_width: settings.cell_width,
            cell_height: settings.cell_height,
            cells: vec![blank; cols as usize * rows as usize],
            cursor_visible: true,
            reports_release,
            frame: 0,
            held: HashMap::new(),
        }
    }

    /// Cell range `[start, end)` covered by a pixel span; never empty, never
    /// past `limit`.
    fn span(start: f32, len: f32, cell: u32, limit: u16) -> (usize, usize) {
        let cell = cell as f32;
        let first = (start / cell).floor().max(0.0) as usize;
        let last = ((start + len) / cell).ceil().max(0.0) as usize;
        let last = last.max(first + 1);
        (first.min(limit as usize), last.min(limit as usize))
    }

    fn cell_rect(&self, rect: Rect) -> ((usize, usize), (usize, usize)) {
        (
            Self::span(rect.x, rect.width, self.cell_width, self.cols),
            Self::span(rect.y, rect.height, self.cell_height, self.rows),
        )
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        let index = row * self.cols as usize + col;
        &mut self.cells[index]
    }

    /// Paint a sprite: `top` pattern on the first row, `body` on the rest.
    /// Each pattern is (left, middle, right).
    fn sprite(
        &mut self,
        rect: Rect,
        color: Color,
        top: (char, char, char),
        body: (char, char, char),
    ) {
        let ((c0, c1), (r0, r1)) = self.cell_rect(rect);
        for row in r0..r1 {
            let (left, middle, right) = if row == r0 { top } else { body };
            for col in c0..c1 {
                let ch = if c1 - c0 < 3 {
                    middle
                } else if col == c0 {
                    left
                } else if col + 1 == c1 {
                    right
                } else {
                    middle
                };
                let cell = self.cell_mut(col, row);
                cell.ch = ch;
                cell.fg = color;
                cell.bold = false;
            }
        }
    }

    fn key_event(
        &mut self,
        code: KeyCode,
        kind: KeyEventKind,
        modifiers: KeyModifiers,
        events: &mut Vec<InputEvent>,
    ) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            events.push(InputEvent::Quit);
            return;
        }
        let Some(key) = map_key(code) else {
            return;
        };
        if !is_movement(key) {
            // Fire, start and quit act on every press, auto-repeat included
            if kind == KeyEventKind::Press {
                events.push(InputEvent::KeyDown(key));
            }
            return;
        }
        match kind {
            // Classic terminals resend Press on auto-repeat; a press of a key
            // already held only refreshes the hold.
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let frame = self.frame;
                match self.held.get_mut(&key) {
                    Some(hold) => {
                        hold.last = frame;
                        hold.repeating = true;
                    }
                    None => {
                        self.held.insert(
                            key,
                            Hold {
                                last: frame,
                                repeating: false,
                            },
                        );
                        events.push(InputEvent::KeyDown(key));
                    }
                }
            }
            KeyEventKind::Release => {
                if self.held.remove(&key).is_some() {
                    events.push(InputEvent::KeyUp(key));
                }
            }
        }
    }

    /// Release movement keys whose repeats have stopped arriving.
    fn expire_held_keys(&mut self, events: &mut Vec<InputEvent>) {
        let frame = self.frame;
        let mut expired: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, hold)| hold.expired(frame))
            .map(|(&key, _)| key)
            .collect();
        expired.sort_by_key(|k| *k as u8);
        for key in expired {
            self.held.remove(&key);
            events.push(InputEvent::KeyUp(key));
        }
    }
}

// ── Collaborator impls ────────────────────────────────────────────────────────

impl<W: Write> RenderSurface for TerminalHost<W> {
    fn dimensions(&self) -> (u32, u32) {
        (
            self.cols as u32 * self.cell_width,
            self.rows as u32 * self.cell_height,
        )
    }

    fn clear(&mut self, color: Color) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                fg: color,
                bg: color,
                bold: false,
            };
        }
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) {
        match image {
            // Enhanced sprites, as wide as the box allows:
            //   ▲▲▲     ← nose
            //  /███\    ← hull
            Image::Ship => self.sprite(rect, C_PLAYER, ('▲', '▲', '▲'), ('/', '█', '\\')),
            //  «▼▼»     ← swept-back wings
            //  ╚══╝     ← engine block
            Image::Alien => self.sprite(rect, C_ALIEN, ('«', '▼', '»'), ('╚', '═', '╝')),
            Image::Fill(color) => {
                let ((c0, c1), (r0, r1)) = self.cell_rect(rect);
                for row in r0..r1 {
                    for col in c0..c1 {
                        let cell = self.cell_mut(col, row);
                        cell.ch = ' ';
                        cell.bg = *color;
                    }
                }
            }
            Image::Text(text) => {
                let ((c0, _), (r0, r1)) = self.cell_rect(rect);
                if r0 >= r1 {
                    return;
                }
                let cols = self.cols as usize;
                for (i, ch) in text.text.chars().enumerate() {
                    let col = c0 + i;
                    if col >= cols {
                        break;
                    }
                    *self.cell_mut(col, r0) = Cell {
                        ch,
                        fg: text.fg,
                        bg: text.bg,
                        bold: text.bold,
                    };
                }
            }
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut current: Option<Cell> = None;
        for row in 0..self.rows as usize {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols as usize {
                let cell = self.cells[row * self.cols as usize + col];
                let restyle = current.map_or(true, |c| {
                    c.fg != cell.fg || c.bg != cell.bg || c.bold != cell.bold
                });
                if restyle {
                    self.out.queue(style::SetAttribute(if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    }))?;
                    self.out.queue(style::SetForegroundColor(to_term(cell.fg)))?;
                    self.out.queue(style::SetBackgroundColor(to_term(cell.bg)))?;
                    current = Some(cell);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }

        // Park the cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        if self.cursor_visible {
            self.out.queue(cursor::Show)?;
        } else {
            self.out.queue(cursor::Hide)?;
        }
        self.out.flush()
    }
}

impl<W: Write> InputSource for TerminalHost<W> {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        let mut events = Vec::new();

        // Drain all pending input events (non-blocking)
        while let Ok(true) = event::poll(Duration::ZERO) {
            let Ok(ev) = event::read() else {
                break;
            };
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => self.key_event(code, kind, modifiers, &mut events),
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => events.push(InputEvent::PointerDown {
                    x: (column as f32 + 0.5) * self.cell_width as f32,
                    y: (row as f32 + 0.5) * self.cell_height as f32,
                }),
                _ => {}
            }
        }

        if !self.reports_release {
            self.expire_held_keys(&mut events);
        }
        events
    }
}

impl<W: Write> TextRasterizer for TerminalHost<W> {
    /// One cell per character, one row high.
    fn render(&self, text: &str, bold: bool, fg: Color, bg: Color) -> (Image, f32, f32) {
        let width = text.chars().count() as f32 * self.cell_width as f32;
        let height = self.cell_height as f32;
        let image = Image::Text(TextImage {
            text: text.to_string(),
            bold,
            fg,
            bg,
        });
        (image, width, height)
    }
}

impl<W: Write> CursorControl for TerminalHost<W> {
    fn set_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}
