//! Startup report written to standard output.
//!
//! Each function receives a mutable writer so the report can be captured
//! in tests; colour comes from queued crossterm commands.

use std::io::Write;
use std::path::Path;

use crossterm::{
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::assets::{AssetError, AssetPaths};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HEADING: Color = Color::Cyan;
const C_LABEL: Color = Color::DarkGrey;
const C_OK: Color = Color::Green;
const C_ERROR: Color = Color::Red;
const C_HINT: Color = Color::Yellow;

const REMEDIATION: [&str; 3] = [
    "1. The 'assets' folder exists in the same directory as the executable",
    "2. All required image files (player.png, enemy.png, bullet.png) are in the assets folder",
    "3. The image files have correct permissions",
];

fn line<W: Write>(out: &mut W, color: Color, text: &str) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    out.queue(style::ResetColor)?;
    out.queue(Print("\n"))?;
    Ok(())
}

fn labelled<W: Write>(out: &mut W, label: &str, value: &Path) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_LABEL))?;
    out.queue(Print(format!("{label}: ")))?;
    out.queue(style::ResetColor)?;
    out.queue(Print(format!("{}\n", value.display())))?;
    Ok(())
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Where we are and which files we are about to open.
pub fn report_probe<W: Write>(
    out: &mut W,
    cwd: &Path,
    paths: &AssetPaths,
) -> std::io::Result<()> {
    labelled(out, "Current working directory", cwd)?;
    out.queue(Print("\n"))?;
    line(out, C_HEADING, "Debug Info:")?;
    labelled(out, "Asset root", &paths.root)?;
    out.queue(Print("\n"))?;
    line(out, C_HEADING, "Trying to load images from:")?;
    for (label, path) in paths.labelled() {
        labelled(out, label, path)?;
    }
    out.flush()
}

pub fn report_loaded<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(Print("\n"))?;
    line(out, C_OK, "All images loaded successfully!")?;
    out.flush()
}

/// Error category, message, and what to check before trying again.
pub fn report_failure<W: Write>(out: &mut W, err: &AssetError) -> std::io::Result<()> {
    out.queue(Print("\n"))?;
    line(out, C_ERROR, "Error loading images:")?;
    out.queue(Print(format!("Error type: {}\n", err.kind())))?;
    out.queue(Print(format!("Error message: {err}\n")))?;
    labelled(out, "Path attempted", err.path())?;
    out.queue(Print("\n"))?;
    line(out, C_HINT, "Please ensure that:")?;
    for hint in REMEDIATION {
        out.queue(Print(format!("{hint}\n")))?;
    }
    out.flush()
}
