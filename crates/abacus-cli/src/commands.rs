use crate::session::{Frame, Session};
use abacus_calculator::EngineConfig;
use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// How frames are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Display text, one line per frame; notices on stderr
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Feed `keys` to a fresh engine and print the outcome.
///
/// With `trace` every frame is printed, otherwise only the final display.
#[instrument(skip(config, out, err))]
pub fn run_eval(
    keys: &str,
    trace: bool,
    format: OutputFormat,
    config: EngineConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let mut session = Session::new(config);
    let frames = session.feed_line(keys);
    info!(frames = frames.len(), ignored = session.ignored_keys(), "Key sequence evaluated");

    if trace {
        for frame in &frames {
            write_frame(frame, format, out, err)?;
        }
        return Ok(());
    }

    for notice in frames.iter().filter_map(|f| f.notice.as_deref()) {
        if format == OutputFormat::Text {
            writeln!(err, "{notice}")?;
        }
    }

    let display = session.engine().display();
    match format {
        OutputFormat::Text => writeln!(out, "{display}")?,
        OutputFormat::Json => {
            let notices: Vec<&str> = frames.iter().filter_map(|f| f.notice.as_deref()).collect();
            let summary = json!({
                "display": display,
                "notices": notices,
                "state": session.engine().state(),
            });
            writeln!(out, "{summary}")?;
        }
    }
    Ok(())
}

/// Read key lines from `input` until EOF or `quit`/`exit`, printing after every line.
#[instrument(skip_all)]
pub fn run_repl(
    input: impl BufRead,
    format: OutputFormat,
    config: EngineConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let mut session = Session::new(config);
    let mut lines_read = 0usize;

    if format == OutputFormat::Text {
        writeln!(out, "{}", session.engine().display())?;
    }

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "exit") {
            break;
        }
        lines_read += 1;

        let frames = session.feed_line(trimmed);
        match format {
            OutputFormat::Text => {
                for notice in frames.iter().filter_map(|f| f.notice.as_deref()) {
                    writeln!(err, "{notice}")?;
                }
                writeln!(out, "{}", session.engine().display())?;
            }
            OutputFormat::Json => {
                for frame in &frames {
                    write_frame(frame, format, out, err)?;
                }
            }
        }
        out.flush()?;
    }

    info!(lines_read, "Session ended");
    Ok(())
}

fn write_frame(
    frame: &Frame,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(notice) = &frame.notice {
                writeln!(err, "{notice}")?;
            }
            writeln!(out, "{:>8}  {}", frame.key, frame.display)?;
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(frame)?)?,
    }
    Ok(())
}
