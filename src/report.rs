//! Per-phase timing for one signing operation and its text report.

use std::io::{self, Write};

use crate::timing::IntervalTimer;

/// Algorithm named in the report title by default.
pub const DEFAULT_ALGORITHM: &str = "SPHINCS+-SHAKE-256s-simple";

/// Timers for the three signing phases plus the whole operation.
///
/// One instance per signing operation. The caller brackets each phase with
/// begin/end inside the `total` span; nothing here checks that it did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SigningTiming {
    pub preprocessing: IntervalTimer,
    pub fors_signing: IntervalTimer,
    pub merkle_signing: IntervalTimer,
    pub total: IntervalTimer,
}

/// Each phase's share of the total, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseShares {
    pub preprocessing: f64,
    pub fors_signing: f64,
    pub merkle_signing: f64,
}

impl SigningTiming {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sub-phases in report order, with their report labels.
    pub fn phases(&self) -> [(&'static str, &IntervalTimer); 3] {
        [
            ("Preprocessing", &self.preprocessing),
            ("FORS Signing", &self.fors_signing),
            ("Merkle Signing", &self.merkle_signing),
        ]
    }

    /// Phase shares of the total, or `None` when the total is not positive.
    pub fn percentages(&self) -> Option<PhaseShares> {
        let total_ms = self.total.milliseconds();
        if total_ms <= 0.0 {
            return None;
        }
        let share = |t: &IntervalTimer| (t.milliseconds() / total_ms) * 100.0;
        Some(PhaseShares {
            preprocessing: share(&self.preprocessing),
            fors_signing: share(&self.fors_signing),
            merkle_signing: share(&self.merkle_signing),
        })
    }

    /// Write the report under the default algorithm name.
    pub fn report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.report_as(DEFAULT_ALGORITHM, out)
    }

    /// Write the report titled with `algorithm`.
    pub fn report_as<W: Write + ?Sized>(&self, algorithm: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{algorithm} Signing Timing Results:")?;
        for (label, timer) in self.phases() {
            write_duration_line(out, label, timer)?;
        }
        write_duration_line(out, "Total Signing", &self.total)?;

        if let Some(shares) = self.percentages() {
            writeln!(out, "  Percentage breakdown:")?;
            let [pre, fors, merkle] = self.phases();
            writeln!(out, "    {:<17}{:.1}%", format!("{}:", pre.0), shares.preprocessing)?;
            writeln!(out, "    {:<17}{:.1}%", format!("{}:", fors.0), shares.fors_signing)?;
            writeln!(out, "    {:<17}{:.1}%", format!("{}:", merkle.0), shares.merkle_signing)?;
        }
        out.flush()
    }

    /// Write the report to standard output.
    pub fn print(&self) -> io::Result<()> {
        self.print_as(DEFAULT_ALGORITHM)
    }

    /// Write the report titled with `algorithm` to standard output.
    pub fn print_as(&self, algorithm: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.report_as(algorithm, &mut lock)
    }
}

fn write_duration_line<W: Write + ?Sized>(
    out: &mut W,
    label: &str,
    timer: &IntervalTimer,
) -> io::Result<()> {
    writeln!(
        out,
        "  {:<17}{:.6} ms ({:.3} us)",
        format!("{label}:"),
        timer.milliseconds(),
        timer.microseconds()
    )
}
