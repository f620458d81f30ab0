//! Terminal rendering module.
//!
//! Renders the published game snapshot into a simple framebuffer of styled
//! character cells and flushes it to a raw-mode terminal. The view layer is
//! pure (no I/O) and unit-testable; only `TerminalRenderer` touches stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
