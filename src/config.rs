use std::time::Duration;

use crate::units::ColumnsCount;

/// Pause between rows, for the animation.
pub const DEFAULT_ROW_DELAY: Duration = Duration::from_millis(30);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum LineEnding {
    Lf,
    /// Needed when the terminal is in raw mode and no longer returns the cursor on a line feed.
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StreamConfig {
    columns: ColumnsCount,
    show_set_ids: bool,
    row_delay: Duration,
    seed: Option<u64>,
    row_limit: Option<usize>,
    line_ending: LineEnding,
}

impl StreamConfig {
    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }
    #[inline]
    pub fn show_set_ids(&self) -> bool {
        self.show_set_ids
    }
    #[inline]
    pub fn row_delay(&self) -> Duration {
        self.row_delay
    }
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Stop once this many rows are drawn, instead of waiting for an interrupt.
    #[inline]
    pub fn row_limit(&self) -> Option<usize> {
        self.row_limit
    }
    #[inline]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

#[derive(Debug)]
pub struct StreamConfigBuilder {
    config: StreamConfig,
}

impl StreamConfigBuilder {
    pub fn new(columns: ColumnsCount) -> StreamConfigBuilder {
        StreamConfigBuilder {
            config: StreamConfig {
                columns,
                show_set_ids: false,
                row_delay: DEFAULT_ROW_DELAY,
                seed: None,
                row_limit: None,
                line_ending: LineEnding::Lf,
            },
        }
    }
    pub fn show_set_ids(mut self, show: bool) -> StreamConfigBuilder {
        self.config.show_set_ids = show;
        self
    }
    pub fn row_delay(mut self, delay: Duration) -> StreamConfigBuilder {
        self.config.row_delay = delay;
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> StreamConfigBuilder {
        self.config.seed = seed;
        self
    }
    pub fn row_limit(mut self, rows: Option<usize>) -> StreamConfigBuilder {
        self.config.row_limit = rows;
        self
    }
    pub fn line_ending(mut self, line_ending: LineEnding) -> StreamConfigBuilder {
        self.config.line_ending = line_ending;
        self
    }
    pub fn build(self) -> StreamConfig {
        self.config
    }
}
