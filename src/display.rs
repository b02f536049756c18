//! Terminal presenter. All terminal I/O lives here.
//!
//! World-space draw calls are rasterised into a cell buffer sized to the
//! play area; [`TerminalPresenter::present`] turns the buffer into crossterm
//! commands. Audio is shown rather than heard: the status line carries the
//! current track and flashes the last sound effect.

use std::collections::HashMap;
use std::io::Write;
use std::ops::Range;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use glam::Vec2;
use log::{debug, trace, warn};

use crate::assets::{MusicAsset, SoundAsset, TextureAsset};
use crate::camera::Camera;
use crate::input::Input;
use crate::presenter::{MusicId, Presenter, SoundId, Texture, TextureId, TextureRegion};

// ── Terminal session ──────────────────────────────────────────────────────────

/// Alternate screen, hidden cursor and mouse capture for the lifetime of the
/// value. Dropping it undoes every step, including after a failed start.
pub struct TerminalSession<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Enable raw mode, then take over the screen.
    pub fn start(out: W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter(out, true)
    }

    /// Take over the screen without touching raw mode.
    pub fn screen_only(out: W) -> std::io::Result<Self> {
        Self::enter(out, false)
    }

    fn enter(out: W, raw_mode: bool) -> std::io::Result<Self> {
        // Built before the first command so an early `?` still restores.
        let mut session = Self { out, raw_mode };
        session.out.execute(terminal::EnterAlternateScreen)?;
        session.out.execute(cursor::Hide)?;
        session.out.execute(EnableMouseCapture)?;
        Ok(session)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let steps = [
            self.out.execute(DisableMouseCapture).map(drop),
            self.out.execute(cursor::Show).map(drop),
            self.out.execute(terminal::LeaveAlternateScreen).map(drop),
        ];
        for err in steps.into_iter().filter_map(Result::err) {
            warn!("restoring terminal: {err}");
        }
        if self.raw_mode {
            if let Err(err) = terminal::disable_raw_mode() {
                warn!("leaving raw mode: {err}");
            }
        }
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::DarkCyan;
const C_TUBE: Color = Color::Green;
const C_GROUND: Color = Color::DarkYellow;
const C_GROUND_EDGE: Color = Color::Yellow;
const C_BIRD: Color = Color::Yellow;
const C_BUTTON: Color = Color::DarkGreen;
const C_TITLE: Color = Color::Yellow;
const C_GAME_OVER: Color = Color::Red;
const C_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_MUSIC: Color = Color::Magenta;
const C_SFX: Color = Color::Cyan;

/// Player wing position per animation frame.
const BIRD_FRAMES: [char; 3] = ['▀', '■', '▄'];

/// Presents left on the status line after a sound effect.
const SFX_FLASH_FRAMES: u8 = 6;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::Reset,
        bg: Color::Reset,
    };
}

/// Where the play area sits inside the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Layout {
    cols: u16,
    left: u16,
    width: u16,
    height: u16,
    rows: u16,
}

impl Layout {
    fn fit(cols: u16, rows: u16, viewport: Vec2) -> Self {
        // Last row is the status line.
        let height = rows.saturating_sub(1);
        let ideal = (height as f32 * viewport.x / viewport.y * CELL_ASPECT).round() as u16;
        let width = ideal.min(cols);
        Self {
            cols,
            left: (cols - width) / 2,
            width,
            height,
            rows,
        }
    }
}

pub struct TerminalPresenter<W: Write> {
    out: W,
    layout: Layout,
    cells: Vec<Cell>,
    camera: Camera,
    clear_pending: bool,

    next_id: u32,
    textures: HashMap<TextureId, TextureAsset>,
    sounds: HashMap<SoundId, SoundAsset>,
    music: HashMap<MusicId, MusicAsset>,
    now_playing: Option<MusicId>,
    last_sfx: Option<(SoundAsset, u8)>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        let mut presenter = Self {
            out,
            layout: Layout::default(),
            cells: Vec::new(),
            camera: Camera::with_viewport(240.0, 400.0),
            clear_pending: true,
            next_id: 1,
            textures: HashMap::new(),
            sounds: HashMap::new(),
            music: HashMap::new(),
            now_playing: None,
            last_sfx: None,
        };
        presenter.resize(cols, rows);
        presenter
    }

    /// Re-fit the play area after the terminal changed size.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.layout = Layout::fit(cols, rows, self.camera.viewport);
        self.cells = vec![Cell::BLANK; self.layout.width as usize * self.layout.height as usize];
        self.clear_pending = true;
    }

    /// Map a terminal cell (e.g. a mouse click) to viewport coordinates.
    /// `None` when the cell is outside the play area.
    pub fn cell_to_viewport(&self, column: u16, row: u16) -> Option<Vec2> {
        let l = self.layout;
        if column < l.left || column >= l.left + l.width || row >= l.height {
            return None;
        }
        Some(self.cell_centre(column, row))
    }

    /// Tap for a mouse click anywhere in the terminal. Clicks in the margins
    /// or on the status line map outside the viewport: they still count as a
    /// tap but miss every button.
    pub fn tap_at_cell(&self, column: u16, row: u16) -> Input {
        let point = self.cell_centre(column, row);
        Input::tap_at(point.x, point.y)
    }

    /// Glyph at a play-area cell from the last drawn frame.
    pub fn glyph_at(&self, column: u16, row: u16) -> Option<char> {
        self.cell_index(column, row).map(|i| self.cells[i].ch)
    }

    /// Play-area size in cells.
    pub fn play_area(&self) -> (u16, u16) {
        (self.layout.width, self.layout.height)
    }

    pub fn now_playing(&self) -> Option<MusicAsset> {
        self.now_playing.and_then(|id| self.music.get(&id).copied())
    }

    /// Number of textures, sounds and tracks still loaded.
    pub fn loaded_handles(&self) -> usize {
        self.textures.len() + self.sounds.len() + self.music.len()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Write the last drawn frame and the status line to the terminal.
    pub fn present(&mut self) -> std::io::Result<()> {
        if self.clear_pending {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.clear_pending = false;
        }

        let l = self.layout;
        for row in 0..l.height {
            self.out.queue(cursor::MoveTo(l.left, row))?;
            let start = row as usize * l.width as usize;
            let line = &self.cells[start..start + l.width as usize];
            queue_cells(&mut self.out, line)?;
        }

        self.draw_status_line()?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, l.rows.saturating_sub(1)))?;
        self.out.flush()?;

        if let Some((sound, frames)) = self.last_sfx {
            self.last_sfx = (frames > 1).then(|| (sound, frames - 1));
        }
        Ok(())
    }

    // ── Status line ───────────────────────────────────────────────────────────

    fn draw_status_line(&mut self) -> std::io::Result<()> {
        let row = self.layout.rows.saturating_sub(1);
        self.out.queue(cursor::MoveTo(0, row))?;
        self.out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("SPACE / click : flap   Q : quit"))?;

        if let Some(track) = self.now_playing() {
            self.out.queue(style::SetForegroundColor(C_MUSIC))?;
            self.out.queue(Print(format!("   ♪ {}", track.title())))?;
        }
        if let Some((sound, _)) = self.last_sfx {
            let label = match sound {
                SoundAsset::Flap => "flap!",
                SoundAsset::Point => "+1",
            };
            self.out.queue(style::SetForegroundColor(C_SFX))?;
            self.out.queue(Print(format!("   {label}")))?;
        }
        Ok(())
    }

    // ── Rasterising ───────────────────────────────────────────────────────────

    fn cell_index(&self, column: u16, row: u16) -> Option<usize> {
        let l = self.layout;
        (column < l.width && row < l.height)
            .then(|| row as usize * l.width as usize + column as usize)
    }

    /// Viewport coordinates of a cell centre, unclipped.
    fn cell_centre(&self, column: u16, row: u16) -> Vec2 {
        let l = self.layout;
        let x = column as f32 - l.left as f32 + 0.5;
        let y = l.height as f32 - row as f32 - 0.5;
        Vec2::new(
            x / l.width.max(1) as f32 * self.camera.viewport.x,
            y / l.height.max(1) as f32 * self.camera.viewport.y,
        )
    }

    fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.camera.viewport.x / self.layout.width.max(1) as f32,
            self.camera.viewport.y / self.layout.height.max(1) as f32,
        )
    }

    /// Columns and rows (top = 0) covered by a world-space rectangle.
    fn cover(&self, position: Vec2, size: Vec2) -> (Range<u16>, Range<u16>) {
        let cell = self.cell_size();
        let low = self.camera.to_viewport(position) / cell;
        let high = low + size / cell;

        let columns = span(low.x, high.x, self.layout.width);
        let from_bottom = span(low.y, high.y, self.layout.height);
        let rows = (self.layout.height - from_bottom.end)..(self.layout.height - from_bottom.start);
        (columns, rows)
    }

    fn fill(&mut self, columns: Range<u16>, rows: Range<u16>, paint: impl Fn(Cell) -> Cell) {
        for row in rows {
            for column in columns.clone() {
                if let Some(i) = self.cell_index(column, row) {
                    self.cells[i] = paint(self.cells[i]);
                }
            }
        }
    }

    fn write_label(&mut self, columns: Range<u16>, rows: Range<u16>, label: &str, fg: Color) {
        if rows.is_empty() || columns.is_empty() {
            return;
        }
        let row = rows.start + (rows.end - rows.start) / 2;
        let width = columns.end - columns.start;
        let len = label.chars().count() as u16;
        let start = columns.start + width.saturating_sub(len) / 2;
        for (offset, ch) in label.chars().enumerate() {
            let column = start + offset as u16;
            if column >= columns.end {
                break;
            }
            if let Some(i) = self.cell_index(column, row) {
                self.cells[i] = Cell { ch, fg, ..self.cells[i] };
            }
        }
    }
}

/// Cells `[floor(low), ceil(high))` clipped to `[0, limit)`.
fn span(low: f32, high: f32, limit: u16) -> Range<u16> {
    let start = low.floor().clamp(0.0, limit as f32) as u16;
    let end = high.ceil().clamp(0.0, limit as f32) as u16;
    start..end.max(start)
}

/// Emit one row, switching colours only where they change.
fn queue_cells<W: Write>(out: &mut W, cells: &[Cell]) -> std::io::Result<()> {
    let mut run = String::new();
    let mut colours: Option<(Color, Color)> = None;
    for cell in cells {
        if colours != Some((cell.fg, cell.bg)) {
            if !run.is_empty() {
                out.queue(Print(&run))?;
                run.clear();
            }
            out.queue(style::SetForegroundColor(cell.fg))?;
            out.queue(style::SetBackgroundColor(cell.bg))?;
            colours = Some((cell.fg, cell.bg));
        }
        run.push(cell.ch);
    }
    if !run.is_empty() {
        out.queue(Print(&run))?;
    }
    Ok(())
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    // ── Resources ─────────────────────────────────────────────────────────────

    fn load_texture(&mut self, asset: TextureAsset) -> Texture {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(id, asset);
        debug!("loaded texture {}", asset.file_name());
        let (width, height) = asset.size();
        Texture { id, width, height }
    }

    fn unload_texture(&mut self, texture: Texture) {
        match self.textures.remove(&texture.id) {
            Some(asset) => debug!("unloaded texture {}", asset.file_name()),
            None => warn!("unload of unknown texture {:?}", texture.id),
        }
    }

    fn load_sound(&mut self, asset: SoundAsset) -> SoundId {
        let id = SoundId(self.next_id);
        self.next_id += 1;
        self.sounds.insert(id, asset);
        debug!("loaded sound {}", asset.file_name());
        id
    }

    fn unload_sound(&mut self, sound: SoundId) {
        match self.sounds.remove(&sound) {
            Some(asset) => debug!("unloaded sound {}", asset.file_name()),
            None => warn!("unload of unknown sound {sound:?}"),
        }
    }

    fn load_music(&mut self, asset: MusicAsset) -> MusicId {
        let id = MusicId(self.next_id);
        self.next_id += 1;
        self.music.insert(id, asset);
        debug!("loaded music {}", asset.file_name());
        id
    }

    fn unload_music(&mut self, music: MusicId) {
        if self.now_playing == Some(music) {
            self.now_playing = None;
        }
        match self.music.remove(&music) {
            Some(asset) => debug!("unloaded music {}", asset.file_name()),
            None => warn!("unload of unknown music {music:?}"),
        }
    }

    // ── Audio ─────────────────────────────────────────────────────────────────

    fn play_sound(&mut self, sound: SoundId, volume: f32) {
        match self.sounds.get(&sound) {
            Some(&asset) => {
                trace!("sfx {} at volume {volume}", asset.file_name());
                self.last_sfx = Some((asset, SFX_FLASH_FRAMES));
            }
            None => warn!("play of unknown sound {sound:?}"),
        }
    }

    fn play_music(&mut self, music: MusicId) {
        if self.music.contains_key(&music) {
            self.now_playing = Some(music);
        } else {
            warn!("play of unknown music {music:?}");
        }
    }

    fn stop_music(&mut self, music: MusicId) {
        if self.now_playing == Some(music) {
            self.now_playing = None;
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn begin(&mut self, camera: &Camera) {
        if camera.viewport != self.camera.viewport {
            self.camera = *camera;
            self.resize(self.layout.cols, self.layout.rows);
        }
        self.camera = *camera;
        self.cells.fill(Cell::BLANK);
    }

    fn draw(&mut self, region: TextureRegion, position: Vec2) {
        let Some(&asset) = self.textures.get(&region.texture) else {
            warn!("draw of unknown texture {:?}", region.texture);
            return;
        };
        let size = Vec2::new(region.width as f32, region.height as f32);
        let (columns, rows) = self.cover(position, size);

        match asset {
            TextureAsset::Background => {
                self.fill(columns, rows, |_| Cell { ch: ' ', fg: Color::Reset, bg: C_SKY });
            }
            TextureAsset::TopTube | TextureAsset::BottomTube => {
                self.fill(columns, rows, |c| Cell { ch: '█', fg: C_TUBE, ..c });
            }
            TextureAsset::Ground => {
                let edge = rows.start..(rows.start + 1).min(rows.end);
                self.fill(columns.clone(), rows, |c| Cell { ch: '▒', fg: C_GROUND, ..c });
                // Grass along the top row
                self.fill(columns, edge, |c| Cell { ch: '▀', fg: C_GROUND_EDGE, ..c });
            }
            TextureAsset::BirdStrip => {
                let frame = (region.x / region.width.max(1)) as usize % BIRD_FRAMES.len();
                let ch = BIRD_FRAMES[frame];
                self.fill(columns, rows, |c| Cell { ch, fg: C_BIRD, ..c });
            }
            TextureAsset::PlayButton => {
                self.fill(columns.clone(), rows.clone(), |_| Cell {
                    ch: ' ',
                    fg: Color::White,
                    bg: C_BUTTON,
                });
                self.write_label(columns, rows, "PLAY", Color::White);
            }
            TextureAsset::Title => self.write_label(columns, rows, "FLAPPY BIRD", C_TITLE),
            TextureAsset::GameOver => self.write_label(columns, rows, "GAME OVER", C_GAME_OVER),
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _scale: f32) {
        let cell = self.cell_size();
        let (_, rows) = self.cover(position, cell);
        let Some(row) = rows.clone().next() else {
            return;
        };
        let start = (self.camera.to_viewport(position).x / cell.x).floor() as i32;
        for (offset, ch) in text.chars().enumerate() {
            let column = start + offset as i32;
            if column < 0 {
                continue;
            }
            if let Some(i) = self.cell_index(column as u16, row) {
                self.cells[i] = Cell { ch, fg: C_SCORE, ..self.cells[i] };
            }
        }
    }

    /// One cell per character; terminal glyphs cannot grow, so `scale` is ignored.
    fn text_width(&self, text: &str, _scale: f32) -> f32 {
        self.cell_size().x * text.chars().count() as f32
    }

    fn end(&mut self) {}
}
