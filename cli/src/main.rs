mod render;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use doctrack_core::{
    coerce_number, definition_of, expand_field, parse_entry_args, parse_entry_date, ActivityType,
    CreditRule, EntryDraft, FileLedgerRepository, LedgerService,
};

#[derive(Parser)]
#[command(name = "doctrack")]
#[command(about = "Doctoral training-credit tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log an activity (usage: add courses "Deep Learning" from:2026-01-12 classroom:10 autonomous:20)
    Add {
        /// Activity type (see `doctrack types`)
        activity: String,
        /// Entry title plus key:value fields (from, to, classroom, autonomous, days)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List logged entries, optionally for a single activity type
    List {
        activity: Option<String>,
    },
    /// Delete an entry by id (a unique prefix from `list` is enough)
    Delete {
        id: String,
    },
    /// Show per-type credit totals and programme progress
    Report,
    /// Write the CSV export
    Export {
        /// Output path (default: doctoral_credits.csv)
        path: Option<PathBuf>,
    },
    /// Show the activity catalog and its credit rules
    Types,
    /// Open the dashboard
    Tui,
}

fn resolve_activity(input: &str) -> Option<ActivityType> {
    let parsed = ActivityType::parse(input);
    if parsed.is_none() {
        println!("Unknown activity type: '{}'. Known types:", input);
        for kind in ActivityType::ALL {
            println!("  {:<16} {}", kind.key(), definition_of(kind).name);
        }
    }
    parsed
}

fn build_draft(args: &[String]) -> EntryDraft {
    let parsed = parse_entry_args(args);
    let mut draft = EntryDraft {
        title: parsed.title,
        ..Default::default()
    };

    for (key, value) in parsed.fields {
        match expand_field(&key) {
            Ok("from") => match parse_entry_date(&value) {
                Ok(date) => draft.date_from = Some(date),
                Err(e) => println!("Warning: invalid from date '{}': {}", value, e),
            },
            Ok("to") => match parse_entry_date(&value) {
                Ok(date) => draft.date_to = Some(date),
                Err(e) => println!("Warning: invalid to date '{}': {}", value, e),
            },
            Ok("classroom") => draft.classroom_hours = coerce_number(&value),
            Ok("autonomous") => draft.autonomous_hours = coerce_number(&value),
            Ok("days") => draft.days = coerce_number(&value),
            Ok(_) => {}
            Err(e) => println!("Warning: {}", e),
        }
    }

    draft
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileLedgerRepository::new(None)?;
    let mut service = LedgerService::new(repo)?;

    match cli.command {
        Some(Commands::Add { activity, args }) => {
            let Some(kind) = resolve_activity(&activity) else {
                return Ok(());
            };
            let draft = build_draft(&args);
            let title = draft.title.clone();
            match service.add_entry(kind, draft)? {
                Some(id) => {
                    println!("Entry added to {}: {} (ID: {})", definition_of(kind).name, title, id);
                    println!(
                        "  {} now at {:.1} CD",
                        definition_of(kind).name,
                        service.credits_for(kind)
                    );
                }
                None => {
                    println!("Entry skipped: a title and a from: date are required.");
                }
            }
        }
        Some(Commands::List { activity }) => {
            let views = match activity {
                Some(input) => {
                    let Some(kind) = resolve_activity(&input) else {
                        return Ok(());
                    };
                    service.entries(kind)
                }
                None => service.all_entries(),
            };
            render::print_entries(&views);
        }
        Some(Commands::Delete { id }) => match service.find_entry(&id) {
            Some((kind, entry_id)) => {
                service.remove_entry(kind, &entry_id)?;
                println!("Entry {} deleted from {}.", entry_id, definition_of(kind).name);
            }
            None => {
                println!("No entry uniquely matches id '{}'.", id);
            }
        },
        Some(Commands::Report) => {
            render::print_report(&service.summaries(), &service.report());
        }
        Some(Commands::Export { path }) => {
            let path = path.unwrap_or_else(|| PathBuf::from("doctoral_credits.csv"));
            let csv = service.export_csv();
            let rows = csv.lines().count().saturating_sub(1);
            fs::write(&path, csv)?;
            println!("Exported {} entries to {}", rows, path.display());
        }
        Some(Commands::Types) => {
            for kind in ActivityType::ALL {
                let def = definition_of(kind);
                match def.rule {
                    CreditRule::HourBased {
                        classroom_hours_per_unit,
                        autonomous_hours_per_unit,
                        credit_per_unit,
                    } => {
                        println!(
                            "{:<16} {}: {}h classroom + {}h autonomous = {:.1} CD",
                            kind.key(),
                            def.name,
                            classroom_hours_per_unit,
                            autonomous_hours_per_unit,
                            credit_per_unit
                        );
                    }
                    CreditRule::DayBased { credit_per_day } => {
                        println!(
                            "{:<16} {}: {:.1} CD per day attended",
                            kind.key(),
                            def.name,
                            credit_per_day
                        );
                    }
                }
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}
