use docopt::Docopt;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use eller_mazes::{
    cancellation::{CancelFlag, RowLimit, TerminalInterrupt},
    config::{LineEnding, StreamConfig, StreamConfigBuilder},
    streaming::MazeStream,
    terminal::{self, RawModeGuard},
    units::ColumnsCount,
};
use std::{
    io,
    time::Duration,
};

const USAGE: &str = "Eller mazes

Grows a maze across the terminal until interrupted with Ctrl-C, Esc or q.

Usage:
    eller_mazes_driver [-v] [--columns=<n>] [--delay-ms=<ms>] [--seed=<n>] [--rows=<n>]
    eller_mazes_driver -h | --help

Options:
    -h --help          Show this screen.
    -v --verbose       Display each cell's set number.
    --columns=<n>      Number of maze columns. Fills the terminal width if not given.
    --delay-ms=<ms>    Pause between rows in milliseconds [default: 30].
    --seed=<n>         Seed the random choices to repeat a maze.
    --rows=<n>         Stop once the maze has n rows, n at least 1.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_verbose: bool,
    flag_columns: Option<usize>,
    flag_delay_ms: u64,
    flag_seed: Option<u64>,
    flag_rows: Option<usize>,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::eller_mazes::errors::Error, ::eller_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    // Raw mode turns Ctrl-C into a key press we can wait for between rows, so the maze always gets
    // its last row and bottom border.
    let interactive = terminal::stdout_is_tty();
    let _raw_mode = if interactive {
        Some(RawModeGuard::enable()?)
    } else {
        None
    };

    let config = stream_config(&args, interactive)?;
    let row_limit = config.row_limit().map(RowLimit::new).transpose()?;

    // Without raw mode Ctrl-C is a signal. Catching it (and an external `kill`) as a flag lets the
    // stream finish the maze instead of dying mid row.
    let mut signalled = CancelFlag::on_interrupt()?;
    let seed = config.seed().unwrap_or_else(|| rand::thread_rng().gen());
    let rng = XorShiftRng::seed_from_u64(seed);

    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    let mut stream = MazeStream::new(out, rng, &config)?;
    let delay = config.row_delay();

    match (interactive, row_limit) {
        (true, Some(limit)) => stream.run(&mut ((TerminalInterrupt, signalled), limit), delay)?,
        (true, None) => stream.run(&mut (TerminalInterrupt, signalled), delay)?,
        (false, Some(limit)) => stream.run(&mut (signalled, limit), delay)?,
        (false, None) => stream.run(&mut signalled, delay)?,
    }

    Ok(())
}

fn stream_config(args: &MazeArgs, interactive: bool) -> Result<StreamConfig> {

    let columns = match args.flag_columns {
        Some(columns) => ColumnsCount(columns),
        None => terminal::columns_for_terminal_width(terminal::terminal_width_or_default())
            .chain_err(|| "Cannot fit a maze in the terminal")?,
    };

    let line_ending = if interactive { LineEnding::CrLf } else { LineEnding::Lf };

    Ok(StreamConfigBuilder::new(columns)
        .show_set_ids(args.flag_verbose)
        .row_delay(Duration::from_millis(args.flag_delay_ms))
        .seed(args.flag_seed)
        .row_limit(args.flag_rows)
        .line_ending(line_ending)
        .build())
}
