//! Semantic input events and the controller that applies them to a
//! [`GridEngine`] before refreshing a [`GridDisplay`].

use crate::{Error, GridEngine, Result, Snapshot};
use std::io;
use tracing::warn;

/// A user interaction, already translated from raw input by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CellClick { x: i32, y: i32 },
    AdvanceClick,
    ResetClick,
}

/// Anything that accepts [`Event`]s from a display
pub trait EventSink {
    fn handle(&mut self, event: Event) -> Result<()>;
}

/// A renderer for grid snapshots
///
/// Implementors are free to diff against the previous snapshot they were
/// given; the engine only ever hands out the current state.
pub trait GridDisplay {
    fn update(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Owns the engine and its display and keeps the two in sync
pub struct Controller<D> {
    engine: GridEngine,
    display: D,
    parallel: bool,
}

impl<D: GridDisplay> Controller<D> {
    pub fn new(engine: GridEngine, display: D) -> Self {
        Self {
            engine,
            display,
            parallel: false,
        }
    }

    /// Use [`GridEngine::advance_parallel`] for [`Event::AdvanceClick`]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resets the engine and draws the first frame
    pub fn start(&mut self) -> Result<()> {
        self.engine.reset();
        self.refresh()
    }

    /// Redraws the display from the current engine state
    pub fn refresh(&mut self) -> Result<()> {
        self.display.update(&self.engine.snapshot())?;
        Ok(())
    }

    #[inline]
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }
    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }
    #[inline]
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<D: GridDisplay> EventSink for Controller<D> {
    fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::CellClick { x, y } => match self.engine.toggle(x, y) {
                Ok(_) => {}
                Err(err @ Error::OutOfBounds { .. }) => {
                    warn!("ignoring click: {}", err);
                    return Ok(());
                }
                Err(err) => return Err(err),
            },
            Event::AdvanceClick if self.parallel => self.engine.advance_parallel(),
            Event::AdvanceClick => self.engine.advance(),
            Event::ResetClick => self.engine.reset(),
        }
        self.refresh()
    }
}
