use ikemen_lab_lib::settings;

use crate::{CliError, ConfigAction};

/// Run a config subcommand against the settings file.
pub(crate) fn run_config(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            match settings::load_settings_string() {
                Some(contents) => print!("{contents}"),
                None => println!("No settings saved yet."),
            }
            Ok(())
        }
        ConfigAction::SetRoot { path } => {
            let absolute = std::fs::canonicalize(&path)?;
            settings::save_library_path(Some(&absolute))?;
            log::info!("Library root saved: {}", absolute.display());
            Ok(())
        }
        ConfigAction::ClearRoot => {
            settings::save_library_path(None)?;
            log::info!("Library root cleared");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", settings::settings_path().display());
            Ok(())
        }
    }
}
