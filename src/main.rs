use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fundsheet_cli::cli::{
    handle_advice_command, handle_export_command, handle_item_command, handle_record_command,
    handle_summary_command, ExportCommands, ItemCommands, RecordCommands,
};
use fundsheet_cli::config::{paths::FundsheetPaths, settings::Settings};
use fundsheet_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fundsheet",
    version,
    about = "Monthly expense sheet with saved snapshots and spreadsheet export",
    long_about = "Fundsheet keeps a sheet of monthly expense items in fixed categories, \
                  rolls them up into a monthly total, saves point-in-time snapshots and \
                  exports them as CSV, tab-separated text or .xlsx workbooks."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and starter sheet
    Init,

    /// Show current configuration and paths
    Config,

    /// Edit the live expense sheet
    #[command(subcommand)]
    Item(ItemCommands),

    /// Show category totals and the monthly total
    Summary,

    /// Save, list and delete snapshots
    #[command(subcommand)]
    Record(RecordCommands),

    /// Export saved records
    #[command(subcommand)]
    Export(ExportCommands),

    /// Print a spending-advice request for a text-generation tool
    Advice,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FundsheetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    // Initialize storage
    let mut storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Fundsheet at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            if storage.has_sheet() {
                println!("Existing sheet kept.");
            } else {
                let sheet = storage.load_sheet();
                storage.save_sheet(&sheet)?;
                println!("Starter sheet created with {} items.", sheet.len());
            }
            println!();
            println!("Run 'fundsheet item list' to see the sheet.");
        }
        Some(Commands::Config) => {
            println!("Fundsheet Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Record date format: {}", settings.record_date_format);
            println!("  File date format:   {}", settings.file_date_format);
            println!("  CSV prefix:         {}", settings.csv_prefix);
            println!("  Workbook prefix:    {}", settings.workbook_prefix);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!(
                "  Clipboard command:  {}",
                settings.clipboard_command.as_deref().unwrap_or("(stdout)")
            );
            println!("  Log level:          {}", settings.log_level);
        }
        Some(Commands::Item(cmd)) => {
            handle_item_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Record(cmd)) => {
            handle_record_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Advice) => {
            handle_advice_command(&storage, &settings)?;
        }
        None => {
            println!("Fundsheet - monthly expense sheet");
            println!();
            println!("Run 'fundsheet --help' for usage information.");
        }
    }

    Ok(())
}
