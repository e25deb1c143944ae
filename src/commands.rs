use crate::cli::{Cli, Command, DecodeArgs, SortArgs, SplitArgs};
use anyhow::Context;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tatap_core::monitor::mask;
use tatap_core::{decode_and_enqueue, sort_filenames, EventRecord, FilenameKey};
use tracing::{debug, info};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Sort(args) => sort(args),
        Command::Split(args) => split(args),
        Command::Decode(args) => decode(args),
    }
}

fn sort(args: SortArgs) -> anyhow::Result<()> {
    let mut names = if args.names.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("failed to read names from stdin")?
    } else {
        args.names
    };
    debug!("Sorting {} names", names.len());

    sort_filenames(&mut names);
    if args.reverse {
        names.reverse();
    }

    let mut out = io::stdout().lock();
    for name in &names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn split(args: SplitArgs) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for name in &args.names {
        let key = FilenameKey::parse(name);
        match key.extension {
            Some(ext) => writeln!(out, "{name}\tstem={}\text={ext}", key.stem)?,
            None => writeln!(out, "{name}\tstem={}\t(no extension)", key.stem)?,
        }
    }
    Ok(())
}

/// One decoded record as printed by `decode --json`.
#[derive(Serialize)]
struct RecordView<'a> {
    wd: i32,
    mask: u32,
    events: Vec<&'static str>,
    cookie: u32,
    name: Option<std::borrow::Cow<'a, str>>,
}

impl<'a> From<&'a EventRecord> for RecordView<'a> {
    fn from(record: &'a EventRecord) -> Self {
        Self {
            wd: record.wd(),
            mask: record.mask(),
            events: mask::names(record.mask()),
            cookie: record.cookie(),
            name: record.name_lossy(),
        }
    }
}

fn decode(args: DecodeArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    info!("Decoding {} bytes from {}", bytes.len(), args.path.display());

    let mut records: Vec<EventRecord> = Vec::new();
    // Print whatever decoded cleanly before reporting a framing error.
    let outcome = decode_and_enqueue(&bytes, &mut records);

    let mut out = io::stdout().lock();
    for record in &records {
        if args.json {
            serde_json::to_writer(&mut out, &RecordView::from(record))?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "wd={} mask={:#010x} [{}] cookie={} name={}",
                record.wd(),
                record.mask(),
                mask::names(record.mask()).join("|"),
                record.cookie(),
                record.name_lossy().as_deref().unwrap_or("-"),
            )?;
        }
    }

    outcome.with_context(|| format!("failed to decode {}", args.path.display()))?;
    Ok(())
}
