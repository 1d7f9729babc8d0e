mod chord;
mod pitch;
mod scale;
mod session;
mod tui;
mod view;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chords", about = "Major scales and chords in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session: pick a tonic, pick a chord kind, read the result
    Tui,

    /// Print the major scale and one chord to stdout
    Show {
        /// Tonic pitch class, e.g. C, F#, Bb
        tonic: String,

        /// Chord kind by name, e.g. Minor, "Dominant Seventh", All
        #[arg(long, default_value = "Major")]
        chord: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui => {
            if let Err(e) = tui::run() {
                eprintln!("Session error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Show { tonic, chord } => {
            let tonic = lookup_tonic(&tonic);
            let kind = lookup_kind(&chord);
            print!("{}", view::detail_view(tonic, kind));
        }
    }
}

fn lookup_tonic(name: &str) -> &'static pitch::PitchClass {
    pitch::by_name(name).unwrap_or_else(|e| {
        eprintln!("Unknown tonic: {}", e);
        std::process::exit(1);
    })
}

fn lookup_kind(name: &str) -> chord::ChordKind {
    chord::ChordKind::from_name(name).unwrap_or_else(|e| {
        eprintln!("Unknown chord kind: {}", e);
        std::process::exit(1);
    })
}
