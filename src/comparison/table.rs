//! Fixed-width text table for one parameter value.
//!
//! ```text
//! Results for C = 0.5
//! Iteration Method              Computed Value Error          Time (s)
//! ----------------------------------------------------------------------
//! 1         Fixed Point         0.50000000     7.88e-02       0.00000030
//! ```
//!
//! Column widths: 10 / 20 / 15 / 15 / 10, left aligned. Absent errors and
//! times (secant seeds) print as `0.0`.

use std::fmt::{self, Write};
use crate::root_finding::report::{IterateRecord, RootFindingReport};


pub const ITERATION_WIDTH : usize = 10;
pub const METHOD_WIDTH    : usize = 20;
pub const VALUE_WIDTH     : usize = 15;
pub const ERROR_WIDTH     : usize = 15;
pub const TIME_WIDTH      : usize = 10;
pub const SEPARATOR_WIDTH : usize = 70;


/// Formats `v` in scientific notation with `precision` mantissa digits and a
/// signed exponent of at least two digits (`1.23e-05`, `0.00e+00`).
///
/// Non-finite values fall through unchanged (`NaN`, `inf`).
pub fn format_scientific(v: f64, precision: usize) -> String {
    let raw = format!("{v:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None    => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}


fn write_header(out: &mut impl Write) -> fmt::Result {
    writeln!(
        out,
        "{:<iw$}{:<mw$}{:<vw$}{:<ew$}{:<tw$}",
        "Iteration", "Method", "Computed Value", "Error", "Time (s)",
        iw = ITERATION_WIDTH,
        mw = METHOD_WIDTH,
        vw = VALUE_WIDTH,
        ew = ERROR_WIDTH,
        tw = TIME_WIDTH,
    )
}

fn write_separator(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn write_row(
    out: &mut impl Write,
    idx: usize,
    method: &str,
    record: &IterateRecord,
) -> fmt::Result {
    let error = format_scientific(record.error.unwrap_or(0.0), 2);
    writeln!(
        out,
        "{idx:<iw$}{method:<mw$}{value:<vw$.8}{error:<ew$}{time:<tw$.8}",
        value = record.value,
        time  = record.elapsed.unwrap_or(0.0),
        iw = ITERATION_WIDTH,
        mw = METHOD_WIDTH,
        vw = VALUE_WIDTH,
        ew = ERROR_WIDTH,
        tw = TIME_WIDTH,
    )
}


/// Writes the comparison table for one `C`.
///
/// Reports are listed in the order given; each section restarts the
/// iteration index at 1 and is preceded by a separator row.
pub fn write_table(
    out: &mut impl Write,
    c: f64,
    reports: &[&RootFindingReport],
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Results for C = {c}")?;
    write_header(out)?;
    for report in reports {
        write_separator(out)?;
        let method = report.algorithm.display_name();
        for (idx, record) in report.trace.iter().enumerate() {
            write_row(out, idx + 1, method, record)?;
        }
    }

    Ok(())
}
