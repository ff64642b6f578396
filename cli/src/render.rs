use doctrack_core::{
    CreditRule, EntryView, ProgressReport, TypeSummary, definition_of,
    report::{TOTAL_CREDIT_CAP, TRAINING_CREDIT_CAP},
};
use tabled::{Table, Tabled};
use tabled::settings::Style;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Class (h)")]
    classroom: String,
    #[tabled(rename = "Auto (h)")]
    autonomous: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "CD")]
    credits: String,
}

pub fn print_entries(views: &[EntryView]) {
    if views.is_empty() {
        println!("No entries logged.");
        return;
    }

    let rows: Vec<EntryRow> = views
        .iter()
        .map(|view| {
            let day_based = matches!(
                definition_of(view.kind).rule,
                CreditRule::DayBased { .. }
            );
            EntryRow {
                id: view.short_id(),
                kind: view.kind.key().to_string(),
                title: view.title.clone(),
                from: view.date_from.format("%Y-%m-%d").to_string(),
                to: view
                    .date_to
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
                classroom: if day_based {
                    "-".to_string()
                } else {
                    format!("{}", view.classroom_hours)
                },
                autonomous: if day_based {
                    "-".to_string()
                } else {
                    format!("{}", view.autonomous_hours)
                },
                days: if day_based {
                    format!("{}", view.days)
                } else {
                    "-".to_string()
                },
                credits: format!("{:.1}", view.credits),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Activity")]
    name: String,
    #[tabled(rename = "Class (h)")]
    classroom: String,
    #[tabled(rename = "Auto (h)")]
    autonomous: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "CD")]
    credits: String,
}

pub fn print_report(summaries: &[TypeSummary], report: &ProgressReport) {
    let rows: Vec<SummaryRow> = summaries
        .iter()
        .map(|s| {
            let day_based = matches!(definition_of(s.kind).rule, CreditRule::DayBased { .. });
            SummaryRow {
                name: s.name.to_string(),
                classroom: if day_based {
                    "-".to_string()
                } else {
                    format!("{}", s.classroom_total)
                },
                autonomous: if day_based {
                    "-".to_string()
                } else {
                    format!("{}", s.autonomous_total)
                },
                days: if day_based {
                    format!("{}", s.days_total)
                } else {
                    "-".to_string()
                },
                entries: s.entry_count,
                credits: format!("{:.1}", s.credits),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n\x1b[1;36mTraining Credits\x1b[0m {:.1}/{:.0} ({:.1}%)",
        report.training_credits, TRAINING_CREDIT_CAP, report.training_progress
    );
    println!(
        "\x1b[1;32mTotal Credits\x1b[0m    {:.1}/{:.0} ({:.1}%)",
        report.total_credits, TOTAL_CREDIT_CAP, report.total_progress
    );

    if report.over_training_cap {
        println!(
            "\n\x1b[1;31mWarning: training credits exceed the maximum of {:.0} CD\x1b[0m",
            TRAINING_CREDIT_CAP
        );
    }
}
