//! Terminal driver: play Dots and Boxes by typing dot coordinates.
//!
//! Each line is either `x1 y1 x2 y2` (draw the edge between two adjacent
//! dots), `reset`, `help`, or `quit`. Set `RUST_LOG=debug` to trace moves.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use dots_boxes::{render_board, Dot, GameSettings, GridPreset, Player, Session};

#[derive(Parser, Debug)]
#[command(name = "dots-boxes", version, about = "Play Dots and Boxes in the terminal")]
struct Args {
    /// Dots per side (3 to 7 are the standard boards)
    #[arg(long, short, default_value_t = 5, env = "DOTS_BOXES_SIZE")]
    size: usize,

    /// Display name for the first player
    #[arg(long, default_value = "Player 1")]
    player1: String,

    /// Display name for the second player
    #[arg(long, default_value = "Player 2")]
    player2: String,

    /// Print the game state as JSON after every move
    #[arg(long)]
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(Dot, Dot),
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "r" | "reset" => return Some(Command::Reset),
        "h" | "help" | "?" => return Some(Command::Help),
        _ => {}
    }

    let coords: Vec<u8> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match coords.as_slice() {
        &[x1, y1, x2, y2] => Some(Command::Move(Dot::new(x1, y1), Dot::new(x2, y2))),
        _ => None,
    }
}

fn print_status(out: &mut impl Write, session: &Session, json: bool) -> io::Result<()> {
    let state = session.state();
    writeln!(out)?;
    write!(out, "{}", render_board(state, session.engine().config()))?;
    for line in session.scoreboard() {
        let marker = if line.active { ">" } else { " " };
        writeln!(out, "{} {}: {}", marker, line.name, line.score)?;
    }
    if json {
        let encoded = serde_json::to_string(state).map_err(io::Error::other)?;
        writeln!(out, "{}", encoded)?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  x1 y1 x2 y2   draw the line between two adjacent dots")?;
    writeln!(out, "  reset         start a new game")?;
    writeln!(out, "  quit          leave")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = GameSettings::default()
        .with_size(args.size)
        .context("invalid --size")?
        .with_name(Player::One, &args.player1)
        .context("invalid --player1")?
        .with_name(Player::Two, &args.player2)
        .context("invalid --player2")?;

    match GridPreset::from_size(settings.grid.size()) {
        Some(preset) => info!("Starting {} game", preset.label()),
        None => warn!("Grid size {} is not one of the standard boards", settings.grid.size()),
    }

    let mut session = Session::new(settings);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    print_help(&mut out)?;
    print_status(&mut out, &session, args.json)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => print_help(&mut out)?,
            Some(Command::Reset) => {
                let notice = session.reset();
                writeln!(out, "{}", notice)?;
                print_status(&mut out, &session, args.json)?;
            }
            Some(Command::Move(a, b)) => match session.play(a, b) {
                Ok((placement, notice)) => {
                    debug!(
                        "{} drew {} ({:?})",
                        placement.player, placement.edge, placement.outcome
                    );
                    if let Some(notice) = notice {
                        writeln!(out, "{}", notice)?;
                    }
                    print_status(&mut out, &session, args.json)?;
                    if session.state().is_over() {
                        writeln!(out, "Type `reset` to play again or `quit` to leave.")?;
                    }
                }
                Err(err) => {
                    warn!("Rejected move {} -> {}: {}", a, b, err);
                    writeln!(out, "Can't draw that line: {}", err)?;
                }
            },
            None => writeln!(out, "Unrecognised input {:?}; type `help`", line.trim())?,
        }
        out.flush()?;
    }

    info!("Goodbye");
    Ok(())
}
