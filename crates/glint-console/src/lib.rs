// SPDX-License-Identifier: MIT
//
// glint-console — Console layer for glint.
//
// Everything platform-shaped sits behind one seam: the `ConsoleBuffer`
// bridge trait in `bridge`. Two backends ship with the crate — an
// in-memory grid for tests and virtual rendering (`headless`), and a
// real ANSI terminal over stdout (`vt`). On top of the bridge,
// `console::Console` carries the explicit style cursor and drives
// styled output, replacing any notion of process-global "current
// color" with a value the caller owns and passes around.

pub mod bridge;
pub mod console;
pub mod error;
pub mod headless;
pub mod vt;

pub use bridge::{ConsoleBuffer, Coords, Font, Size, WindowControls};
pub use console::Console;
pub use error::{Error, Result};
pub use headless::HeadlessConsole;
pub use vt::VtConsole;
