use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::Print,
    terminal,
};
use lifegrid::{Cell, CellLayout, Event, GridDisplay, Pos2, Snapshot};
use std::io::{self, Write};

const ALIVE: &str = "██";
const DEAD: &str = "··";

pub enum ConsoleCommand {
    Exit,
    Redraw,
    Forward(Event),
}

/// Raw-mode terminal frontend; each cell is two columns wide and one row tall
pub struct ConsoleDisplay {
    layout: CellLayout,
    // last frame drawn, diffed against to only redraw changed cells
    last: Option<Snapshot>,
}
impl ConsoleDisplay {
    pub fn new(width: i32, height: i32) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self {
            layout: CellLayout::new(Pos2::zero(), ALIVE.chars().count() as i32, 1, width, height),
            last: None,
        })
    }

    fn queue_cell(&self, out: &mut impl Write, cell: Pos2, state: Cell) -> io::Result<()> {
        let at = self.layout.cell_origin(cell);
        queue!(
            out,
            cursor::MoveTo(at.x as u16, at.y as u16),
            Print(if state.is_alive() { ALIVE } else { DEAD })
        )
    }

    fn queue_footer(&self, out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
        let at = self.layout.below();
        queue!(
            out,
            cursor::MoveTo(at.x as u16, at.y as u16 + 1),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            Print(format!(
                "generation: {}  alive: {}",
                snapshot.generation(),
                snapshot.alive_count()
            )),
            cursor::MoveTo(at.x as u16, at.y as u16 + 2),
            Print("[click] toggle  [n] next  [r] reset  [q] quit")
        )
    }

    /// Blocks until the next terminal event and translates it
    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        let cmd = match event::read()? {
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => Some(ConsoleCommand::Exit),
            event::Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Some(ConsoleCommand::Exit),
                KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
                    Some(ConsoleCommand::Forward(Event::AdvanceClick))
                }
                KeyCode::Char('r') => Some(ConsoleCommand::Forward(Event::ResetClick)),
                _ => None,
            },
            event::Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self
                .layout
                .cell_at(Pos2::new(column as i32, row as i32))
                .map(|cell| ConsoleCommand::Forward(Event::CellClick { x: cell.x, y: cell.y })),
            event::Event::Resize(..) => {
                // the terminal may have dropped what we drew
                self.last = None;
                Some(ConsoleCommand::Redraw)
            }
            _ => None,
        };
        Ok(cmd)
    }
}

impl GridDisplay for ConsoleDisplay {
    fn update(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let mut stdout = io::stdout();
        match self.last.as_ref().and_then(|last| snapshot.diff(last)) {
            Some(changed) => {
                for (cell, state) in changed {
                    self.queue_cell(&mut stdout, cell, state)?;
                }
            }
            None => {
                queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                for y in 0..snapshot.height() {
                    for x in 0..snapshot.width() {
                        self.queue_cell(&mut stdout, Pos2::new(x, y), snapshot.get(x, y))?;
                    }
                }
            }
        }
        self.queue_footer(&mut stdout, snapshot)?;
        stdout.flush()?;

        self.last = Some(snapshot.clone());
        Ok(())
    }
}

impl Drop for ConsoleDisplay {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
