/// Progress rows for a running suite
///
/// One marker per finished case, wrapped into fixed-width rows that end in
/// a `[ NN%]` completion suffix, the same layout test runners use in quiet
/// mode. The last row always ends in `[100%]`.
use std::io::{self, Write};

pub const ROW_WIDTH: usize = 72;

pub struct ProgressReporter {
    total: usize,
    completed: usize,
    row: String,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            row: String::with_capacity(ROW_WIDTH),
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Record one finished case, flushing the row when it is full or the
    /// suite is complete
    pub fn record<W: Write>(&mut self, marker: char, out: &mut W) -> io::Result<()> {
        self.completed += 1;
        self.row.push(marker);

        if self.row.chars().count() >= ROW_WIDTH || self.completed >= self.total {
            let pct = if self.total > 0 {
                (self.completed * 100 / self.total).min(100)
            } else {
                100
            };
            writeln!(out, "{:<width$} [{:>3}%]", self.row, pct, width = ROW_WIDTH)?;
            out.flush()?;
            self.row.clear();
        }
        Ok(())
    }
}
