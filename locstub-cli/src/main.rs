use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use locstub::{PreprocessOptions, preprocess_loc_json_files};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a .d.ts stub for every .loc.json file under a source folder.
    Generate {
        /// The folder to scan for .loc.json files
        #[arg(short, long)]
        src: PathBuf,

        /// The folder to write generated .d.ts files to (emptied on every run)
        #[arg(short, long)]
        out: PathBuf,

        /// A file to skip, relative to the source folder or absolute (repeatable)
        #[arg(short, long)]
        ignore: Vec<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();

    match args.commands {
        Commands::Generate { src, out, ignore } => {
            let mut options = PreprocessOptions::new(src, out);
            options.files_to_ignore = ignore;

            if let Err(e) = preprocess_loc_json_files(&options) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
