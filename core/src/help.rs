//! Help rendering.
//!
//! Both renderers are read-only projections of the declarations into a
//! text sink. Neither one exits the process.

use std::io::{self, Write};

use crate::command::Command;
use crate::registry::{HELP_OPTION, Registry};

/// Writes the program-level listing: usage, the help flag, and one usage
/// line per registered command.
pub fn render_global_help<W: Write + ?Sized>(registry: &Registry, out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: {} [options] [command]", registry.program())?;
    writeln!(out)?;

    writeln!(out, "Options:")?;
    write_table(
        out,
        &["Option", "Description", "Default Value"],
        &[help_row()],
    )?;
    writeln!(out)?;

    writeln!(out, "Commands:")?;
    let rows: Vec<Vec<String>> = registry
        .list_all()
        .iter()
        .map(|command| vec![command.usage(), command.description.clone()])
        .collect();
    write_table(out, &["Command", "Description"], &rows)
}

/// Writes the help page of one command: usage, description, and options.
pub fn render_command_help<W: Write + ?Sized>(
    program: &str,
    command: &Command,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Usage: {program} {}", command.usage())?;
    writeln!(out)?;

    if !command.description.is_empty() {
        writeln!(out, "{}", command.description)?;
        writeln!(out)?;
    }

    writeln!(out, "Options:")?;
    let mut rows: Vec<Vec<String>> = command
        .options
        .iter()
        .map(|option| {
            vec![
                option.display_name(),
                option.description.clone(),
                option.default.to_string(),
            ]
        })
        .collect();
    rows.push(help_row());
    write_table(out, &["Option", "Description", "Default Value"], &rows)
}

fn help_row() -> Vec<String> {
    vec![
        format!("-{}, --{}", HELP_OPTION.short, HELP_OPTION.long),
        HELP_OPTION.description.to_string(),
        false.to_string(),
    ]
}

/// Left-aligned columns padded to the widest cell, two spaces apart.
fn write_table<W: Write + ?Sized>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &widths, &header_cells)?;
    for row in rows {
        write_row(out, &widths, row)?;
    }
    Ok(())
}

fn write_row<W: Write + ?Sized>(out: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()> {
    let mut line = String::from(" ");
    for (i, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        line.push(' ');
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{cell:<width$}  "));
        }
    }
    writeln!(out, "{}", line.trim_end())
}
