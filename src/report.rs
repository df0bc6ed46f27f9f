//! Console text: banner, file sizes, and the `--debug` report.

use std::fmt;

use image::Rgb;

use crate::app::Summary;
use crate::settings::Settings;

const TITLE: &str = "HEX Grid Tessellator";
const BUILD_DATE: &str = "2026-02-09";
const AUTHOR: &str = "Rohin Gosling";
const BANNER_WIDTH: usize = 60;

/// Boxed program banner, `BANNER_WIDTH` columns wide.
pub fn banner_text() -> String {
    let inner = BANNER_WIDTH - 2;
    let row = |label: &str, value: &str| {
        let text = format!("  {label:<12}{value}");
        format!("│{text:<inner$}│")
    };
    [
        format!("┌{}┐", "─".repeat(inner)),
        row("Program:", TITLE),
        row("Version:", env!("CARGO_PKG_VERSION")),
        row("Build Date:", BUILD_DATE),
        row("Author:", AUTHOR),
        format!("└{}┘", "─".repeat(inner)),
    ]
    .join("\n")
}

/// Human-readable byte count: `B` under 1 KiB, then `KB` and `MB` to 2 places.
///
/// # Examples
/// ```
/// # use hex_tessellator::report::format_file_size;
/// assert_eq!(format_file_size(512), "512 B");
/// assert_eq!(format_file_size(1536), "1.50 KB");
/// assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    match bytes {
        b if b < KIB => format!("{b} B"),
        b if b < MIB => format!("{:.2} KB", b as f64 / KIB as f64),
        b => format!("{:.2} MB", b as f64 / MIB as f64),
    }
}

/// `  Saved: <path> (<size>)` lines for every file a run wrote.
pub fn saved_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![format!(
        "  Saved: {} ({})",
        summary.output.display(),
        format_file_size(summary.output_size)
    )];
    if let Some((path, size)) = &summary.exported {
        lines.push(format!(
            "  Saved: {} ({})",
            path.display(),
            format_file_size(*size)
        ));
    }
    lines
}

/// Parameter dump printed with `--debug`.
pub struct DebugReport<'a> {
    /// Settings the run was made with.
    pub settings: &'a Settings,
    /// What the run produced.
    pub summary: &'a Summary,
}

fn rgb(c: Rgb<u8>) -> String {
    let [r, g, b] = c.0;
    format!("({r}, {g}, {b})")
}

impl fmt::Display for DebugReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.settings;
        let p = &self.summary.params;
        writeln!(f)?;
        writeln!(f, "  Image size:       {} x {}", s.width, s.height)?;
        writeln!(f, "  Circumradius:     {:?}", s.circumradius)?;
        writeln!(f, "  Margin:           {:?}", s.margin)?;
        writeln!(f, "  Line width:       {}", s.line_width)?;
        write!(f, "  Layers:           {}", self.summary.layers)?;
        if s.layers == 0 {
            write!(f, " (auto-computed from requested 0)")?;
        }
        writeln!(f)?;
        writeln!(f, "  Anti-alias:       {}", s.antialias)?;
        writeln!(f, "  Cull:             {}", if s.cull { "True" } else { "False" })?;
        writeln!(f, "  Fill colour:      {} -> {}", s.color_fill, rgb(p.fill))?;
        writeln!(f, "  Line colour:      {} -> {}", s.color_line, rgb(p.line))?;
        writeln!(f, "  Background:       {} -> {}", s.color_background, rgb(p.background))?;
        writeln!(f, "  Centre pixel:     ({}, {})", s.width / 2, s.height / 2)?;
        write!(f, "  Polygons drawn:   {}", self.summary.polygon_count)?;
        for line in saved_lines(self.summary) {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
