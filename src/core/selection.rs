//! Selection and ordering of operations for display
//!
//! Keeps executed operations only, orders them most recent first, keeps the
//! first `limit` and formats each of them. Absent records are skipped.
//! Sorting is stable, so operations sharing a date keep their input order.

use crate::core::formatter::format_operation;
use crate::io::text_output::write_lines;
use crate::types::{FeedError, Operation};
use std::io::Write;
use tracing::debug;

/// Number of operations shown when no limit is configured
pub const DEFAULT_LIMIT: usize = 5;

/// Keep only present operations in the executed state, in input order
pub fn filter_executed<'a, I>(operations: I) -> Vec<&'a Operation>
where
    I: IntoIterator<Item = &'a Option<Operation>>,
{
    operations
        .into_iter()
        .flatten()
        .filter(|operation| operation.is_executed())
        .collect()
}

/// Select up to `limit` executed operations, most recent first
pub fn latest_executed(operations: &[Option<Operation>], limit: usize) -> Vec<&Operation> {
    let mut executed = filter_executed(operations);
    executed.sort_by(|a, b| b.date.cmp(&a.date));
    executed.truncate(limit);

    debug!(
        total = operations.len(),
        selected = executed.len(),
        limit,
        "selected executed operations"
    );

    executed
}

/// Format operations as one flat list of lines, in the given order
///
/// Every block ends with its blank separator line; no operations means no lines.
pub fn render_blocks(operations: &[&Operation]) -> Result<Vec<String>, FeedError> {
    let mut lines = Vec::new();
    for operation in operations {
        lines.extend(format_operation(operation)?);
    }
    Ok(lines)
}

/// Format the selected operations and write them to `output`
///
/// All blocks are formatted before anything is written, so a formatting
/// failure leaves the output untouched.
///
/// # Returns
///
/// The number of blocks written.
pub fn select_and_format(
    operations: &[Option<Operation>],
    limit: usize,
    output: &mut dyn Write,
) -> Result<usize, FeedError> {
    let selected = latest_executed(operations, limit);
    let lines = render_blocks(&selected)?;

    write_lines(&lines, output)?;
    Ok(selected.len())
}
