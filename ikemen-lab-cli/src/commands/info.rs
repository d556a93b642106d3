use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ikemen_lab_core::util::format_bytes_approx;
use ikemen_lab_lib::{AnalysisOptions, ContentContext, ContentKind};

use crate::CliError;

/// Run the info command: identify one file and print everything known.
pub(crate) fn run_info(ctx: &ContentContext, path: &Path, quick: bool) -> Result<(), CliError> {
    let options = AnalysisOptions::new().quick(quick).file_path(path);
    let id = ctx.identify_path(path, &options)?;

    println!(
        "{} {}",
        "File:".if_supports_color(Stdout, |t| t.bold()),
        path.display()
    );
    if let Some(kind) = id.kind {
        println!(
            "{} {}",
            "Kind:".if_supports_color(Stdout, |t| t.bold()),
            kind.display_name().if_supports_color(Stdout, |t| t.cyan())
        );
        if kind == ContentKind::Unknown {
            println!("  (no character, stage, storyboard, or font structure found)");
        }
    }
    print_field("Name", id.display_name.as_deref());
    print_field("Author", id.author.as_deref());
    print_field("Version date", id.version_date.as_deref());
    print_field("Engine version", id.engine_version.as_deref());
    print_field("Sprite file", id.sprite_file.as_deref());
    if let Some(size) = id.file_size {
        println!("{:<15} {}", "Size:", format_bytes_approx(size));
    }

    if !id.extra.is_empty() {
        println!();
        let mut keys: Vec<&String> = id.extra.keys().collect();
        keys.sort();
        for key in keys {
            println!("  {:<18} {}", format!("{key}:"), id.extra[key]);
        }
    }

    Ok(())
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("{:<15} {}", format!("{label}:"), value);
    }
}
