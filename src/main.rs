// SPDX-License-Identifier: MIT
//
// glint — a showcase of the styling and console crates.
//
// This is the demo binary that wires the crates together:
//
//   glint-style   → colors, palette, gradients, formatted strings
//   glint-console → bridge backends and the style-cursor console
//
// Each section writes through a `Console<VtConsole>`:
//
//   palette   → the 16 legacy colors with truecolor swatches
//   gradient  → per-character gradient bars
//   effects   → every graphics mode, host-support flagged
//
// Run with no arguments for everything, or name the sections to show.

use std::env;
use std::process;

use glint_console::console::Console;
use glint_console::vt::VtConsole;
use glint_style::color::{Color, LegacyColor, gradient};
use glint_style::effect::{GraphicEffect, GraphicsMode};
use glint_style::fmtstr::FormatString;

/// Width of the demo bars in cells.
const BAR_WIDTH: usize = 48;

fn main() {
    env_logger::init();

    let sections: Vec<String> = env::args().skip(1).collect();
    for name in &sections {
        if !matches!(name.as_str(), "palette" | "gradient" | "effects") {
            eprintln!("unknown section {name:?}");
            eprintln!("usage: glint [palette] [gradient] [effects]");
            process::exit(2);
        }
    }
    let wants = |name: &str| sections.is_empty() || sections.iter().any(|s| s == name);

    let mut con = Console::new(VtConsole::new());
    let size = con.size();
    log::debug!("writing to a {}x{} terminal", size.cols, size.rows);

    let result = (|| -> glint_console::Result<()> {
        if wants("palette") {
            show_palette(&mut con)?;
        }
        if wants("gradient") {
            show_gradients(&mut con)?;
        }
        if wants("effects") {
            show_effects(&mut con)?;
        }
        con.reset_graphics()
    })();

    if let Err(err) = result {
        eprintln!("glint: {err}");
        process::exit(1);
    }
}

// ─── Sections ───────────────────────────────────────────────────────────────

fn show_palette(con: &mut Console<VtConsole>) -> glint_console::Result<()> {
    con.write_line(&FormatString::with_effect(
        "legacy palette",
        GraphicsMode::Bold,
    ))?;

    for legacy in LegacyColor::ALL {
        let rgb = legacy.rgb();
        let line = FormatString::styled("  ", GraphicEffect::bg(rgb))
            + &format!(" {:<12} ", legacy.name())[..]
            + FormatString::with_color(rgb.to_string(), rgb);
        con.write_line(&line)?;
    }
    con.write_plain("\n")
}

fn show_gradients(con: &mut Console<VtConsole>) -> glint_console::Result<()> {
    con.write_line(&FormatString::with_effect("gradients", GraphicsMode::Bold))?;

    let pairs = [
        (LegacyColor::DarkBlue, LegacyColor::Cyan),
        (LegacyColor::Red, LegacyColor::Yellow),
        (LegacyColor::Black, LegacyColor::White),
    ];
    for (from, to) in pairs {
        let bar = gradient_bar(from.rgb(), to.rgb(), BAR_WIDTH)?;
        con.write_line(&bar)?;
    }
    con.write_plain("\n")
}

fn show_effects(con: &mut Console<VtConsole>) -> glint_console::Result<()> {
    con.write_line(&FormatString::with_effect("effects", GraphicsMode::Bold))?;

    for mode in GraphicsMode::ALL {
        let label = FormatString::plain("  ")
            + FormatString::with_effect(format!("{mode:?}"), mode)
            + if mode.widely_supported() {
                ""
            } else {
                "  (not rendered by every host)"
            };
        con.write_line(&label)?;
    }
    con.write_plain("\n")
}

// ─── Helpers ────────────────────────────────────────────────────────────────

/// A row of block characters, each colored by its gradient step.
fn gradient_bar(from: Color, to: Color, width: usize) -> glint_style::Result<FormatString> {
    let steps: Vec<Option<Color>> = gradient(from, to, width)?.into_iter().map(Some).collect();
    Ok(FormatString::from_colors("█".repeat(width), &steps, true))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
