//! Plain-text output of formatted lines
//!
//! Every line is terminated with `\n`, including the blank separator lines
//! produced by the formatter.

use crate::types::FeedError;
use std::io::Write;

/// Write lines to `output`, one per line, then flush
///
/// Writing an empty slice writes nothing at all.
pub fn write_lines(lines: &[String], output: &mut dyn Write) -> Result<(), FeedError> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }

    output.flush()?;

    Ok(())
}
