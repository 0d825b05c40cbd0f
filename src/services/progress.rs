use region_growth::{GrowthObserver, RegionStats};
use std::io::{self, Write};

/// Writes one `Body/Frontier/Unexplored` line per iteration
///
/// Write failures do not interrupt the run; the first one is kept and
/// returned by [`finish`](Self::finish).
pub struct ProgressPrinter<'a> {
    out: &'a mut dyn Write,
    lines: usize,
    error: Option<io::Error>,
}

impl<'a> ProgressPrinter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            lines: 0,
            error: None,
        }
    }

    /// Flush and report the number of lines written
    pub fn finish(self) -> io::Result<usize> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.lines)
    }
}

impl GrowthObserver for ProgressPrinter<'_> {
    fn before_step(&mut self, stats: &RegionStats) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.out, "{stats}") {
            Ok(()) => self.lines += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let mut out = Vec::new();
        let mut printer = ProgressPrinter::new(&mut out);
        printer.before_step(&RegionStats {
            body: 0,
            frontier: 1,
            unexplored: 5,
        });
        printer.before_step(&RegionStats {
            body: 1,
            frontier: 3,
            unexplored: 2,
        });
        assert_eq!(printer.finish().unwrap(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Body: 0\tFrontier: 1\tUnexplored: 5\nBody: 1\tFrontier: 3\tUnexplored: 2\n"
        );
    }

    #[test]
    fn test_write_error_is_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Broken;
        let mut printer = ProgressPrinter::new(&mut sink);
        printer.before_step(&RegionStats::default());
        printer.before_step(&RegionStats::default());
        assert_eq!(
            printer.finish().unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
    }
}
