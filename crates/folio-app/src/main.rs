//! folio entry point.
//!
//! Reads command lines from stdin and renders each result to stdout
//! (errors to stderr). Usage: `folio [config.toml] [tree.json]`; the paths
//! may also come from `FOLIO_CONFIG` and `FOLIO_TREE`. Type `exit` to quit.

mod vfs_setup;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_platform::Capabilities;
use folio_terminal::{OutputLine, Terminal};
use folio_types::config::TerminalConfig;
use folio_vfs::VirtualFs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    let tree_path = args
        .next()
        .or_else(|| std::env::var("FOLIO_TREE").ok())
        .map(PathBuf::from);

    let config = match &config_path {
        Some(path) => TerminalConfig::load_or_default(path),
        None => TerminalConfig::default(),
    };

    let vfs = match &tree_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading base tree {}", path.display()))?;
            VirtualFs::from_json(&json)
                .with_context(|| format!("loading base tree {}", path.display()))?
        },
        None => VirtualFs::new(vfs_setup::demo_tree()).context("building demo tree")?,
    };

    let mut terminal = Terminal::new(vfs, Capabilities::headless(), config);
    log::info!(
        "Starting folio session with {} commands",
        terminal.registry().len()
    );

    if let Some(motd) = terminal.config().motd.clone() {
        println!("{motd}");
    }
    run(&mut terminal)
}

fn run(terminal: &mut Terminal) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            write!(stdout, "{}", terminal.prompt())?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        if matches!(line.trim(), "exit" | "quit" | "logout") {
            break;
        }

        for out in terminal.execute_command(&line) {
            match out {
                // The prompt is already on screen when interactive.
                OutputLine::Prompt { .. } if interactive => {},
                OutputLine::Prompt { .. } | OutputLine::Text(_) => writeln!(stdout, "{out}")?,
                OutputLine::Error(msg) => eprintln!("{msg}"),
            }
        }
    }
    log::info!("Session ended");
    Ok(())
}
