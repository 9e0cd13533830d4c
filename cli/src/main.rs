use chrono::{DateTime, SecondsFormat, Utc};
use clap::Parser;
use common::windows::{ExtraDataBlock, LnkFile, StringData};
use core::shortcuts::parser::{grab_lnk_directory, grab_lnk_file};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::fs::Metadata;
use std::process::ExitCode;
use std::time::SystemTime;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a shortcut (lnk) file or a directory containing lnk files
    #[clap(short, long, value_parser)]
    path: String,

    /// Output JSON instead of the field report
    #[clap(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());

    let meta = match std::fs::metadata(&args.path) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("[lnkdump] Could not access {}: {err:?}", args.path);
            return ExitCode::FAILURE;
        }
    };

    if meta.is_dir() {
        return dump_directory(&args.path);
    }
    dump_file(&args.path, &meta, args.json)
}

/// Emit one JSON line per parsed shortcut. Bad files are logged and skipped
fn dump_directory(path: &str) -> ExitCode {
    let shortcuts = match grab_lnk_directory(path) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("[lnkdump] Could not read directory {path}: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    for shortcut in shortcuts {
        match serde_json::to_string(&shortcut) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("[lnkdump] Could not serialize {}: {err:?}", shortcut.source_path);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn dump_file(path: &str, meta: &Metadata, json: bool) -> ExitCode {
    let shortcut = match grab_lnk_file(path) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("[lnkdump] Could not parse {path}: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string(&shortcut) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("[lnkdump] Could not serialize {path}: {err:?}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print_report(&shortcut, meta);
    ExitCode::SUCCESS
}

fn print_report(lnk: &LnkFile, meta: &Metadata) {
    println!("Link path: {}", lnk.source_path);
    println!("Link name: {}", string_text(&lnk.string_data.name));
    println!("Link created: {}", fs_timestamp(meta.created()));
    println!("Link accessed: {}", fs_timestamp(meta.accessed()));
    println!("Link modified: {}", fs_timestamp(meta.modified()));
    println!("Target created: {}", lnk.header.created);
    println!("Target accessed: {}", lnk.header.accessed);
    println!("Target modified: {}", lnk.header.modified);
    println!("Target size: {}", lnk.header.file_size);
    println!(
        "Relative path: {}",
        string_text(&lnk.string_data.relative_path)
    );
    println!(
        "Working directory: {}",
        string_text(&lnk.string_data.working_dir)
    );
    println!(
        "Icon location: {}",
        string_text(&lnk.string_data.icon_location)
    );
    println!("Arguments: {}", string_text(&lnk.string_data.arguments));

    let mut local_base_path = "";
    let mut common_path_suffix = "";
    let mut net_name = "";
    let mut device_name = "";
    if let Some(info) = &lnk.link_info {
        if let Some(base) = &info.local_base_path {
            local_base_path = base;
        }
        common_path_suffix = &info.common_path_suffix;
        if let Some(network) = &info.network_link {
            if let Some(name) = &network.net_name {
                net_name = name;
            }
            if let Some(name) = &network.device_name {
                device_name = name;
            }
        }
    }
    println!("Local base path: {local_base_path}");
    println!("Common path suffix: {common_path_suffix}");
    println!("Full path: {local_base_path}{common_path_suffix}");
    println!("Network name: {net_name}");
    println!("Device name: {device_name}");

    let mut machine_id = "";
    for block in &lnk.extra_data {
        if let ExtraDataBlock::TrackerProps(tracker) = block {
            machine_id = &tracker.machine_id;
        }
    }
    println!("Machine ID: {machine_id}");
}

fn string_text(value: &Option<StringData>) -> &str {
    match value {
        Some(record) => &record.text,
        None => "",
    }
}

/// Filesystem timestamps are best effort, not every platform exposes all three
fn fs_timestamp(time: std::io::Result<SystemTime>) -> String {
    match time {
        Ok(value) => {
            DateTime::<Utc>::from(value).to_rfc3339_opts(SecondsFormat::Millis, true)
        }
        Err(_) => String::new(),
    }
}
