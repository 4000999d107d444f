//! Drives Eller's algorithm one row at a time, writing each row as soon as its walls are decided.
//!
//! A stream moves through `Init` (top border), `Streaming` (one row per `step`) and `Terminating`
//! (the last row is joined into one set, drawn and closed off with the bottom border). Only the active
//! row is ever kept.

use std::io::Write;
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::cancellation::Cancellation;
use crate::config::{LineEnding, StreamConfig};
use crate::errors::*;
use crate::generators;
use crate::renderers::{self, BlankDisplay, RowDisplay, SetIdDisplay};
use crate::row::Row;


#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StreamState {
    Init,
    Streaming,
    Terminating,
    Finished,
}

impl StreamState {
    fn describe(self) -> &'static str {
        match self {
            StreamState::Init => "not started",
            StreamState::Streaming => "streaming",
            StreamState::Terminating => "terminating",
            StreamState::Finished => "finished",
        }
    }
}

pub struct MazeStream<W: Write, R: Rng> {
    out: W,
    rng: R,
    row: Row,
    display: Box<dyn RowDisplay>,
    line_ending: LineEnding,
    state: StreamState,
    rows_generated: usize,
}

impl<W: Write, R: Rng> MazeStream<W, R> {
    pub fn new(out: W, rng: R, config: &StreamConfig) -> Result<MazeStream<W, R>> {
        let display: Box<dyn RowDisplay> = if config.show_set_ids() {
            Box::new(SetIdDisplay)
        } else {
            Box::new(BlankDisplay)
        };

        Ok(MazeStream {
            out,
            rng,
            row: Row::new(config.columns())?,
            display,
            line_ending: config.line_ending(),
            state: StreamState::Init,
            rows_generated: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// The row the next `step` (or `finish`) will work on.
    #[inline]
    pub fn active_row(&self) -> &Row {
        &self.row
    }

    /// Rows fully drawn so far, not counting the final row.
    #[inline]
    pub fn rows_generated(&self) -> usize {
        self.rows_generated
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw the top border.
    pub fn start(&mut self) -> Result<()> {
        self.expect_state(StreamState::Init, "start")?;

        let border = renderers::top_border(self.row.columns());
        self.write_line(&border)?;
        self.out.flush()?;

        self.state = StreamState::Streaming;
        Ok(())
    }

    /// Decide the walls of the active row, draw it and move on to the next row.
    pub fn step(&mut self) -> Result<()> {
        self.expect_state(StreamState::Streaming, "step")?;

        generators::process_right_walls(&mut self.row, &mut self.rng);
        generators::process_down_walls(&mut self.row, &mut self.rng);

        let middle = renderers::middle_band(&self.row, self.display.as_ref());
        let junction = renderers::junction_band(&self.row);
        self.write_line(&middle)?;
        self.write_line(&junction)?;
        self.out.flush()?;

        self.row = Row::from_prev_row(&self.row);
        self.rows_generated += 1;
        Ok(())
    }

    /// Join the active row into one set, draw it and close the maze.
    pub fn finish(&mut self) -> Result<()> {
        self.expect_state(StreamState::Streaming, "finish")?;
        self.state = StreamState::Terminating;

        generators::process_last_row(&mut self.row);

        let middle = renderers::middle_band(&self.row, self.display.as_ref());
        let border = renderers::bottom_border(self.row.columns());
        self.write_line(&middle)?;
        self.write_line(&border)?;
        self.out.flush()?;

        self.state = StreamState::Finished;
        Ok(())
    }

    /// Stream rows until `cancellation` says stop, pausing `row_delay` after each row, then finish the
    /// maze.
    pub fn run<C: Cancellation>(&mut self, cancellation: &mut C, row_delay: Duration) -> Result<()> {
        self.start()?;

        while !cancellation.is_cancelled()? {
            self.step()?;
            if row_delay > Duration::from_millis(0) {
                thread::sleep(row_delay);
            }
        }

        self.finish()
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(self.line_ending.as_str().as_bytes())?;
        Ok(())
    }

    fn expect_state(&self, expected: StreamState, operation: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ErrorKind::InvalidStreamState(operation, self.state.describe()).into())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::cancellation::{CancelFlag, RowLimit};
    use crate::config::StreamConfigBuilder;
    use crate::units::ColumnsCount;

    fn never_open() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn stream_text<R: Rng>(config: &StreamConfig, rng: R, rows: usize) -> String {
        let mut stream = MazeStream::new(Vec::new(), rng, config).unwrap();
        stream.run(&mut RowLimit::new(rows).unwrap(), Duration::from_millis(0)).unwrap();
        assert_eq!(stream.state(), StreamState::Finished);
        String::from_utf8(stream.into_inner()).unwrap()
    }

    #[test]
    fn never_open_maze_text() {
        let config = StreamConfigBuilder::new(ColumnsCount(3)).build();
        let text = stream_text(&config, never_open(), 2);

        // Each set opens its only down wall, then the last row is joined into one corridor.
        let expected = ["┌───┬───┬───┐",
                        "│   │   │   │",
                        "├   ┼   ┼   ┤",
                        "│           │",
                        "└───┴───┴───┘",
                        ""]
            .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn single_row_maze() {
        let config = StreamConfigBuilder::new(ColumnsCount(2)).build();
        let text = stream_text(&config, never_open(), 1);
        assert_eq!(text, "┌───┬───┐\n│       │\n└───┴───┘\n");
    }

    #[test]
    fn verbose_shows_set_ids() {
        let config = StreamConfigBuilder::new(ColumnsCount(2))
            .show_set_ids(true)
            .build();
        let text = stream_text(&config, never_open(), 2);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "│ 0 │ 1 │");
        // both cells carried their sets down
        assert_eq!(lines[3], "│ 0   0 │");
    }

    #[test]
    fn raw_mode_line_endings() {
        let config = StreamConfigBuilder::new(ColumnsCount(1))
            .line_ending(LineEnding::CrLf)
            .build();
        let text = stream_text(&config, never_open(), 1);
        assert_eq!(text, "┌───┐\r\n│   │\r\n└───┘\r\n");
    }

    #[test]
    fn seeded_streams_repeat() {
        let config = StreamConfigBuilder::new(ColumnsCount(12)).build();
        let a = stream_text(&config, XorShiftRng::seed_from_u64(5), 30);
        let b = stream_text(&config, XorShiftRng::seed_from_u64(5), 30);
        assert_eq!(a, b);

        // top border, two lines per streamed row, final middle band and bottom border
        assert_eq!(a.lines().count(), 1 + 2 * 29 + 2);
        let width = a.lines().next().unwrap().chars().count();
        assert!(a.lines().all(|line| line.chars().count() == width));
    }

    #[test]
    fn step_by_step() {
        let config = StreamConfigBuilder::new(ColumnsCount(6)).build();
        let mut stream = MazeStream::new(Vec::new(), XorShiftRng::seed_from_u64(1), &config).unwrap();
        assert_eq!(stream.state(), StreamState::Init);
        assert!(stream.step().is_err());
        assert!(stream.finish().is_err());

        stream.start().unwrap();
        assert_eq!(stream.state(), StreamState::Streaming);
        assert!(stream.start().is_err());

        for n in 1..=10 {
            stream.step().unwrap();
            assert_eq!(stream.rows_generated(), n);
            assert_eq!(stream.active_row().len(), 6);
            assert!(stream.active_row().check_partition());
        }

        stream.finish().unwrap();
        assert_eq!(stream.state(), StreamState::Finished);
        assert_eq!(stream.active_row().class_count(), 1);
        assert!(stream.step().is_err());
    }

    #[test]
    fn cancelled_before_any_row() {
        let config = StreamConfigBuilder::new(ColumnsCount(2)).build();
        let mut stream = MazeStream::new(Vec::new(), never_open(), &config).unwrap();
        let mut flag = CancelFlag::new();
        flag.cancel();
        stream.run(&mut flag, Duration::from_millis(0)).unwrap();
        assert_eq!(stream.rows_generated(), 0);
        assert_eq!(String::from_utf8(stream.into_inner()).unwrap(),
                   "┌───┬───┐\n│       │\n└───┴───┘\n");
    }

    /// Raises a shared flag once `after` rows have been allowed, as an interrupt handler would.
    struct RaiseAfter {
        flag: CancelFlag,
        after: usize,
    }

    impl Cancellation for RaiseAfter {
        fn is_cancelled(&mut self) -> Result<bool> {
            if self.after == 0 {
                self.flag.cancel();
            } else {
                self.after -= 1;
            }
            Ok(false)
        }
    }

    #[test]
    fn interrupted_mid_stream_still_closes_maze() {
        let config = StreamConfigBuilder::new(ColumnsCount(4)).build();
        let mut stream = MazeStream::new(Vec::new(), XorShiftRng::seed_from_u64(9), &config).unwrap();
        let flag = CancelFlag::new();
        let mut interrupt = (RaiseAfter { flag: flag.clone(), after: 3 }, flag);
        stream.run(&mut interrupt, Duration::from_millis(0)).unwrap();

        assert_eq!(stream.state(), StreamState::Finished);
        assert_eq!(stream.rows_generated(), 3);
        assert_eq!(stream.active_row().class_count(), 1);

        let text = String::from_utf8(stream.into_inner()).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 2 * 3 + 2);
        assert_eq!(lines[lines.len() - 1], "└───┴───┴───┴───┘");
        // the final row is one open corridor
        assert_eq!(lines[lines.len() - 2], "│               │");
    }

    #[test]
    fn zero_columns_rejected() {
        let config = StreamConfigBuilder::new(ColumnsCount(0)).build();
        assert!(MazeStream::new(Vec::new(), never_open(), &config).is_err());
    }
}
