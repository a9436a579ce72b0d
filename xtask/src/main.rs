//! Development tasks for tlctl.
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for tlctl and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = tlctl::cli::Cli::command();

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let main_page = out_dir.join("tlctl.1");
    fs::write(&main_page, buffer)?;
    println!("wrote {}", main_page.display());

    for sub in cmd.get_subcommands() {
        let name = format!("tlctl-{}", sub.get_name());
        let mut buffer = Vec::new();
        clap_mangen::Man::new(sub.clone())
            .title(name.clone())
            .render(&mut buffer)?;
        let page = out_dir.join(format!("{}.1", name));
        fs::write(&page, buffer)?;
        println!("wrote {}", page.display());
    }
    Ok(())
}
