use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use clap::{ArgAction, ColorChoice, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use is_terminal::IsTerminal;

mod discover;
mod error;
mod html;
mod loader;
mod sections;
mod summary;

use error::{Error, Result};

static ENABLE_COLOR: OnceLock<bool> = OnceLock::new();

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel { Error, Warn, Info, Debug, Trace }

#[derive(Parser, Debug)]
#[command(
    name = "sysreport",
    about = "Renders a JSON system-inventory record as a self-contained HTML report",
    long_about = "Renders a JSON system-inventory record (categories of properties such as System, CPU, Memory, Services) as a single self-contained HTML report with collapsible sections and a summary of key metrics.",
    after_long_help = "Examples:\n  sysreport convert inventory.json\n  sysreport convert inventory.json report.html\n  sysreport            (interactive: discovers *.json in common locations)\n  sysreport --completions bash",
    color = ColorChoice::Auto
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
    #[arg(short = 'q', long, default_value_t = false)]
    quiet: bool,
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
    #[arg(long)]
    log_level: Option<LogLevel>,
    #[arg(long, short = 'C', default_value_t = false)]
    no_color: bool,
    #[arg(long, default_value_t = false)]
    force_color: bool,
    /// Skip the open-in-viewer prompt after an interactive conversion
    #[arg(long, default_value_t = false)]
    no_open: bool,
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a record to HTML (destination defaults to <stem>_report.html)
    Convert {
        source: PathBuf,
        destination: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    if let Some(sh) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(sh, &mut cmd, "sysreport", &mut std::io::stdout());
        return;
    }
    {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if args.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if let Some(lvl) = args.log_level {
            let f = match lvl { LogLevel::Error => log::LevelFilter::Error, LogLevel::Warn => log::LevelFilter::Warn, LogLevel::Info => log::LevelFilter::Info, LogLevel::Debug => log::LevelFilter::Debug, LogLevel::Trace => log::LevelFilter::Trace };
            builder.filter_level(f);
        } else if args.verbose > 0 {
            let f = if args.verbose >= 3 { log::LevelFilter::Trace } else if args.verbose == 2 { log::LevelFilter::Debug } else { log::LevelFilter::Info };
            builder.filter_level(f);
        }
        builder.init();
    }
    let term = std::env::var("TERM").unwrap_or_default();
    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    let color_default = std::io::stdout().is_terminal() && !no_color_env && term != "dumb";
    let enable_color = if args.force_color { true } else if args.no_color { false } else { color_default };
    let _ = ENABLE_COLOR.set(enable_color);

    let code = match &args.command {
        Some(Command::Convert { source, destination }) => run_convert(&args, source, destination.clone()),
        None => run_interactive(&args),
    };
    std::process::exit(code);
}

fn run_convert(args: &Args, source: &Path, destination: Option<PathBuf>) -> i32 {
    match convert(source, destination).with_context(|| format!("converting {}", source.display())) {
        Ok((dest, sections)) => {
            if !args.quiet {
                println!("{}", paint("✅ Successfully converted JSON to HTML!", "1;32"));
                println!("📁 Input:  {}", source.display());
                println!("🌐 Output: {}", dest.display());
                println!("📊 Data sections: {}", sections);
            }
            0
        }
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    }
}

fn run_interactive(args: &Args) -> i32 {
    println!("🎨 System Report HTML Converter");
    println!("{}", "=".repeat(40));
    let Some(source) = discover::prompt_input_file() else {
        println!("\n👋 Conversion cancelled. Goodbye!");
        return 0;
    };
    let Some(dest) = discover::prompt_output_file(&source) else {
        println!("\n👋 Conversion cancelled. Goodbye!");
        return 0;
    };
    println!("\n🔄 Converting...");
    println!("📥 Input:  {}", source.display());
    println!("📤 Output: {}", dest.display());
    match convert(&source, Some(dest)) {
        Ok((written, sections)) => {
            println!("{}", paint("\n🎉 Conversion completed successfully!", "1;32"));
            if !args.quiet {
                println!("📊 Data sections: {}", sections);
            }
            if !args.no_open {
                match discover::prompt_open_report() {
                    Some(true) => open_file_default(written),
                    Some(false) => {}
                    None => println!("\n👋 Done!"),
                }
            }
            0
        }
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}

/// Load, render, write. Returns the destination and the section count.
fn convert(source: &Path, destination: Option<PathBuf>) -> Result<(PathBuf, usize)> {
    let rec = loader::load_record(source)?;
    let display_name = rec
        .get("System")
        .and_then(|s| s.get("ComputerName"))
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown Computer")
        .to_string();
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let doc = html::render_html(&rec, &display_name, &timestamp);
    let dest = destination.unwrap_or_else(|| discover::default_output_path(source));
    write_report(&dest, &doc)?;
    Ok((dest, rec.len()))
}

/// Overwrites any existing file at the destination without confirmation.
fn write_report(path: &Path, doc: &str) -> Result<()> {
    std::fs::write(path, doc).map_err(|e| Error::Write { path: path.to_path_buf(), source: e })
}

fn paint(s: &str, code: &str) -> String {
    if *ENABLE_COLOR.get().unwrap_or(&true) { format!("\x1b[{}m{}\x1b[0m", code, s) } else { s.to_string() }
}

#[cfg(target_os = "windows")]
fn open_file_default(p: PathBuf) {
    let mut s = p.to_string_lossy().into_owned();
    if s.starts_with("\\\\?\\") { s = s.trim_start_matches("\\\\?\\").to_string(); }
    if s.ends_with('\\') || s.ends_with('/') { s = s.trim_end_matches(['\\', '/']).to_string(); }
    if std::process::Command::new("explorer").arg(&s).spawn()
        .or_else(|_| std::process::Command::new("cmd").args(["/C", "start", "", &s]).spawn())
        .is_err()
    {
        println!("💡 Please open this file manually: {}", s);
    } else {
        println!("🚀 Opening {} in your default browser...", s);
    }
}

#[cfg(not(target_os = "windows"))]
fn open_file_default(p: PathBuf) {
    let s = p.to_string_lossy().into_owned();
    if std::process::Command::new("xdg-open").arg(&s).spawn().is_err() {
        println!("💡 Please open this file manually: {}", s);
    } else {
        println!("🚀 Opening {} in your default browser...", s);
    }
}
