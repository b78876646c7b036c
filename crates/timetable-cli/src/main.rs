//! `timetable` CLI — enumerate conflict-free timetables from a catalog file.
//!
//! ## Usage
//!
//! ```sh
//! # Enumerate every timetable (stdin → stdout, JSON)
//! cat catalog.json | timetable enumerate
//!
//! # Keep the first 20, print a readable listing
//! timetable enumerate -i catalog.json --cap 20 --format text
//!
//! # Guard against huge searches
//! timetable enumerate -i catalog.json --max-nodes 100000 --time-budget-ms 500
//!
//! # Which meetings of CS101-B collide with my current picks?
//! timetable check -i catalog.json --section CS101-B --against MATH200-A,PHYS150-C
//!
//! # Debug logging
//! RUST_LOG=timetable_engine=debug timetable enumerate -i catalog.json
//! ```

mod logging;

use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use timetable_engine::{
    enumerate_with, find_meeting_conflicts, Catalog, EnumerateOptions, Enumeration,
    MeetingConflict, SearchOutcome, SearchStats, DEFAULT_CAP,
};

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Conflict-free course timetable enumerator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every conflict-free timetable for the courses in a catalog
    Enumerate {
        /// Catalog JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum number of timetables to produce
        #[arg(long, default_value_t = DEFAULT_CAP)]
        cap: NonZeroUsize,
        /// Stop after visiting this many search nodes
        #[arg(long)]
        max_nodes: Option<u64>,
        /// Stop after this many milliseconds
        #[arg(long)]
        time_budget_ms: Option<u64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Report meeting conflicts between one section and a set of selected sections
    Check {
        /// Catalog JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// The section to test
        #[arg(long)]
        section: String,
        /// Comma-separated ids of the sections already selected
        #[arg(long, value_delimiter = ',')]
        against: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// JSON shape of `timetable enumerate` output.
#[derive(Serialize)]
struct EnumerateReport<'a> {
    count: usize,
    outcome: SearchOutcome,
    stats: SearchStats,
    timetables: Vec<Vec<&'a str>>,
}

impl<'a> From<&'a Enumeration> for EnumerateReport<'a> {
    fn from(e: &'a Enumeration) -> Self {
        Self {
            count: e.timetables.len(),
            outcome: e.outcome,
            stats: e.stats,
            timetables: e.timetables.iter().map(|t| t.section_ids()).collect(),
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Enumerate {
            input,
            output,
            cap,
            max_nodes,
            time_budget_ms,
            format,
        } => {
            let catalog = read_catalog(input.as_deref())?;
            let groups = catalog
                .choice_groups()
                .context("Failed to build choice groups from catalog")?;

            let mut options = EnumerateOptions::new(cap);
            if let Some(n) = max_nodes {
                options = options.with_max_nodes(n);
            }
            if let Some(ms) = time_budget_ms {
                options = options.with_time_budget(Duration::from_millis(ms));
            }

            let enumeration = enumerate_with(&groups, &options);
            tracing::info!(
                courses = groups.len(),
                found = enumeration.timetables.len(),
                outcome = ?enumeration.outcome,
                "enumeration done"
            );

            let rendered = match format {
                Format::Json => {
                    serde_json::to_string_pretty(&EnumerateReport::from(&enumeration))? + "\n"
                }
                Format::Text => render_timetables(&enumeration),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check {
            input,
            section,
            against,
            format,
        } => {
            let catalog = read_catalog(input.as_deref())?;
            let candidate = catalog
                .section(&section)
                .with_context(|| format!("Failed to load section {}", section))?;
            // A section never conflicts with itself.
            let selected = against
                .iter()
                .filter(|id| **id != section)
                .map(|id| {
                    catalog
                        .section(id)
                        .with_context(|| format!("Failed to load section {}", id))
                })
                .collect::<Result<Vec<_>>>()?;

            let found = find_meeting_conflicts(&candidate, &selected);

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&found)? + "\n",
                Format::Text => render_conflicts(&section, &found),
            };
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn render_timetables(enumeration: &Enumeration) -> String {
    let total = enumeration.timetables.len();
    let mut out = String::new();

    for (i, timetable) in enumeration.timetables.iter().enumerate() {
        out.push_str(&format!("Timetable {} of {}\n", i + 1, total));
        for section in &timetable.sections {
            out.push_str(&format!("  {} {}\n", section.course, section.id));
            for meeting in &section.meetings {
                out.push_str(&format!(
                    "      {:<5} {} {}\n",
                    meeting.kind, meeting.days, meeting.time
                ));
            }
        }
    }

    match enumeration.outcome {
        SearchOutcome::Exhausted if total == 0 => {
            out.push_str("No conflict-free timetable exists.\n")
        }
        SearchOutcome::Exhausted => {}
        SearchOutcome::CapReached => out.push_str(&format!(
            "Stopped after {} timetables (cap reached); more may exist.\n",
            total
        )),
        SearchOutcome::Truncated(reason) => out.push_str(&format!(
            "Search truncated ({:?}) after {} nodes; more timetables may exist.\n",
            reason, enumeration.stats.nodes_visited
        )),
    }

    out
}

fn render_conflicts(section: &str, found: &[MeetingConflict]) -> String {
    if found.is_empty() {
        return format!("{}: no conflicts\n", section);
    }

    let mut out = format!("{}: {} conflict(s)\n", section, found.len());
    for c in found {
        out.push_str(&format!(
            "  {} {} {} overlaps {} {} {} ({} min)\n",
            c.meeting.kind,
            c.meeting.days,
            c.meeting.time,
            c.other_section,
            c.other_meeting.days,
            c.other_meeting.time,
            c.overlap_minutes
        ));
    }
    out
}

fn read_catalog(path: Option<&str>) -> Result<Catalog> {
    let json = read_input(path)?;
    Catalog::from_json(&json).context("Failed to parse catalog JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
