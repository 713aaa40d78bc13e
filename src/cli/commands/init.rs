use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SheetFormat;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Writes the default configuration file (skipped with `--test`) and shows
/// which spreadsheet records will be appended to.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.test)?;

    println!("⚙️  Initializing convtrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let sheet = match &cli.file {
        Some(f) => expand_tilde(f),
        None => cfg.sheet_path(),
    };
    println!(
        "📊 Spreadsheet : {} ({})",
        sheet.display(),
        SheetFormat::from_path(&sheet).as_str()
    );

    success("convtrack initialization completed!");
    Ok(())
}
