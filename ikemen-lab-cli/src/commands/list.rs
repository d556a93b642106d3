use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ikemen_lab_lib::{ContentContext, ContentKind};

use crate::CliError;

/// Run the list command: registered analyzers and content kinds.
pub(crate) fn run_list(ctx: &ContentContext) -> Result<(), CliError> {
    println!("{}", "Formats:".if_supports_color(Stdout, |t| t.bold()));
    for analyzer in ctx.analyzers() {
        println!(
            "  {:<24} .{}",
            analyzer.format_name(),
            analyzer.file_extensions().join(", .")
        );
    }

    println!();
    println!(
        "{}",
        "Content kinds (folder aliases):".if_supports_color(Stdout, |t| t.bold())
    );
    for &kind in ContentKind::all() {
        if kind == ContentKind::Unknown {
            continue;
        }
        println!(
            "  {:<12} {}",
            kind.display_name().if_supports_color(Stdout, |t| t.cyan()),
            kind.aliases().join(", ")
        );
    }

    Ok(())
}
