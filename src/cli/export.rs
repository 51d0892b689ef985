//! CLI commands for data export
//!
//! CSV covers every saved record; workbook and clipboard exports take one.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::thread;

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FundsheetError, FundsheetResult};
use crate::export::{
    copy_record, export_records_csv, save_workbook, workbook_file_name, ClipboardSink,
    CommandClipboard, CopyNotice, WriterClipboard,
};
use crate::models::SavedRecord;
use crate::services::capture::format_timestamp;
use crate::storage::{write_atomic, Storage};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all saved records to a CSV file
    Csv {
        /// Directory to write into (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export one record to an .xlsx workbook
    Workbook {
        /// Record ID or list position (1 = newest)
        record: String,

        /// Output file or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy one record as tab-separated text
    Clipboard {
        /// Record ID or list position (1 = newest)
        record: String,

        /// Print to stdout instead of the configured clipboard command
        #[arg(long)]
        stdout: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> FundsheetResult<()> {
    match cmd {
        ExportCommands::Csv { output } => handle_export_csv(storage, settings, output),
        ExportCommands::Workbook { record, output } => {
            let record = lookup(storage, &record)?;
            handle_export_workbook(record, settings, output)
        }
        ExportCommands::Clipboard { record, stdout } => {
            let record = lookup(storage, &record)?;
            handle_export_clipboard(record, settings, stdout)
        }
    }
}

fn lookup<'a>(storage: &'a Storage, identifier: &str) -> FundsheetResult<&'a SavedRecord> {
    storage
        .records
        .find(identifier)
        .ok_or_else(|| FundsheetError::record_not_found(identifier))
}

/// Handle CSV export of the record list
fn handle_export_csv(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
) -> FundsheetResult<()> {
    let date_label = format_timestamp(&Local::now(), &settings.file_date_format);

    let Some(artifact) =
        export_records_csv(storage.records.list(), &settings.csv_prefix, &date_label)
    else {
        println!("Nothing to export: there are no saved records.");
        return Ok(());
    };

    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(&artifact.file_name);
    write_atomic(&path, artifact.contents.as_bytes())
        .map_err(|e| FundsheetError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    println!(
        "Exported {} records to: {}",
        storage.records.len(),
        path.display()
    );
    Ok(())
}

/// Handle workbook export of one record
fn handle_export_workbook(
    record: &SavedRecord,
    settings: &Settings,
    output: Option<PathBuf>,
) -> FundsheetResult<()> {
    let file_name = workbook_file_name(&settings.workbook_prefix, record.date());
    let path = match output {
        Some(p) if p.is_dir() => p.join(file_name),
        Some(p) => p,
        None => Path::new(".").join(file_name),
    };

    save_workbook(record, &path)?;
    println!("Workbook exported to: {}", path.display());
    Ok(())
}

/// Handle clipboard export of one record
fn handle_export_clipboard(
    record: &SavedRecord,
    settings: &Settings,
    stdout: bool,
) -> FundsheetResult<()> {
    let command = settings.clipboard_command.as_deref().filter(|_| !stdout);

    match command {
        Some(command) => {
            let mut sink = CommandClipboard::from_command_line(command)?;
            let notice = copy(record, &mut sink, settings)?;
            show_notice(&notice);
        }
        None => {
            let mut sink = WriterClipboard::new(io::stdout().lock());
            let notice = copy(record, &mut sink, settings)?;
            eprintln!("{}", notice.message);
        }
    }
    Ok(())
}

fn copy<C: ClipboardSink>(
    record: &SavedRecord,
    sink: &mut C,
    settings: &Settings,
) -> FundsheetResult<CopyNotice> {
    copy_record(record, sink, settings.copy_notice_secs)
}

/// Show the acknowledgment, clearing it once it expires on a terminal
fn show_notice(notice: &CopyNotice) {
    let mut out = io::stdout();
    if !out.is_terminal() {
        println!("{}", notice.message);
        return;
    }

    let _ = write!(out, "{}", notice.message);
    let _ = out.flush();
    thread::sleep(notice.remaining());
    let _ = write!(out, "\r\x1b[2K");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FundsheetPaths;
    use crate::services::{summarize, RecordFactory};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FundsheetPaths::with_base_dir(temp_dir.path().join("home"));
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage, Settings::default())
    }

    fn save_one(storage: &mut Storage) {
        let sheet = storage.load_sheet();
        let record = RecordFactory::default().capture(sheet.items(), &summarize(sheet.items()));
        storage.records.add(record).unwrap();
    }

    #[test]
    fn test_csv_with_no_records_writes_nothing() {
        let (tmp, storage, settings) = setup();
        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();

        handle_export_command(
            &storage,
            &settings,
            ExportCommands::Csv {
                output: Some(out.clone()),
            },
        )
        .unwrap();

        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_csv_and_workbook_files() {
        let (tmp, mut storage, settings) = setup();
        save_one(&mut storage);
        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();

        handle_export_command(
            &storage,
            &settings,
            ExportCommands::Csv {
                output: Some(out.clone()),
            },
        )
        .unwrap();
        handle_export_command(
            &storage,
            &settings,
            ExportCommands::Workbook {
                record: "1".into(),
                output: Some(out.clone()),
            },
        )
        .unwrap();

        let names: Vec<String> = std::fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|n| n.starts_with("personal_funds_") && n.ends_with(".csv")));
        assert!(names.iter().any(|n| n.starts_with("personal_funds_") && n.ends_with(".xlsx")));
    }

    #[test]
    fn test_unknown_record_is_not_found() {
        let (_tmp, storage, settings) = setup();
        let err = handle_export_command(
            &storage,
            &settings,
            ExportCommands::Clipboard {
                record: "1".into(),
                stdout: true,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
