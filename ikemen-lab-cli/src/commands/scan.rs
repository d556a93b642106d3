use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use ikemen_lab_lib::{
    AnalysisOptions, ContentContext, ContentIdentification, ContentKind, scan_content_entries,
    settings,
};

use crate::CliError;

/// One classified entry in the scan report.
#[derive(Serialize)]
struct ScanRow {
    folder: String,
    name: String,
    expected_kind: ContentKind,
    #[serde(flatten)]
    identification: ContentIdentification,
}

/// Run the scan command.
pub(crate) fn run_scan(
    ctx: &ContentContext,
    root: Option<PathBuf>,
    quick: bool,
    kinds: Option<Vec<ContentKind>>,
    limit: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let root_path = settings::resolve_library_path(root);
    log::info!("Scanning content in: {}", root_path.display());
    if quick {
        log::info!("Quick mode enabled");
    }

    let scan = ctx.scan_content_folders(&root_path, kinds.as_deref())?;
    if scan.matches.is_empty() {
        log::info!(
            "No content folders found in {} (expected chars/, stages/, ...)",
            root_path.display()
        );
        return Ok(());
    }

    let mut rows: Vec<ScanRow> = Vec::new();
    for folder in &scan.matches {
        let entries = scan_content_entries(&folder.path)?;
        let take = limit.unwrap_or(usize::MAX);

        let pb = progress_bar(entries.len().min(take) as u64, json);
        for entry in entries.iter().take(take) {
            pb.set_message(entry.display_name().to_string());
            let options = AnalysisOptions::new()
                .quick(quick)
                .file_path(entry.def_path());
            match ctx.identify_path(entry.def_path(), &options) {
                Ok(identification) => rows.push(ScanRow {
                    folder: folder.folder_name.clone(),
                    name: entry.display_name().to_string(),
                    expected_kind: folder.kind,
                    identification,
                }),
                Err(e) => log::warn!("{}: {}", entry.def_path().display(), e),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_table(&rows);

    for name in &scan.unrecognized {
        log::info!("Skipped unrecognized folder: {}", name);
    }

    Ok(())
}

fn progress_bar(len: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("  {bar:30.cyan} {pos}/{len} {msg}")
            .expect("static pattern"),
    );
    pb
}

fn print_table(rows: &[ScanRow]) {
    for row in rows {
        let id = &row.identification;
        let kind = id.kind.unwrap_or(ContentKind::Unknown);
        let kind_label = format!("{:<10}", kind.display_name());
        println!(
            "{} {:<24} {:<24} {}",
            kind_label.if_supports_color(Stdout, |t| t.cyan()),
            row.name,
            id.display_name.as_deref().unwrap_or("-"),
            id.author.as_deref().unwrap_or("-"),
        );

        // The classifier looks at structure, never folder placement;
        // flag entries that landed in the wrong directory.
        if kind != ContentKind::Unknown && kind != row.expected_kind {
            println!(
                "  {} classified as {} but found in the {} folder",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                kind.display_name(),
                row.folder,
            );
        }
    }
    println!();
    println!("{} entries", rows.len());
}
