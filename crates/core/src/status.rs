use indexmap::IndexSet;
use log::warn;

use crate::execution::GitRunner;

/// Width of the `XY ` prefix on every porcelain status line.
const STATUS_PREFIX_WIDTH: usize = 3;

/// Extracts file paths from `git status --porcelain` output.
///
/// Every line longer than the two status columns plus separator has those
/// three characters stripped; shorter lines are skipped. Paths keep the order
/// git printed them in, and repeats are dropped.
///
/// ```
/// use gitify_core::status::parse_changed_files;
///
/// let files = parse_changed_files(" M src/lib.rs\n?? notes.txt\n");
/// assert_eq!(files.into_iter().collect::<Vec<_>>(), vec!["src/lib.rs", "notes.txt"]);
/// ```
#[must_use]
pub fn parse_changed_files(status_output: &str) -> IndexSet<String> {
    status_output
        .split('\n')
        .filter(|line| line.len() > STATUS_PREFIX_WIDTH)
        .filter_map(|line| line.get(STATUS_PREFIX_WIDTH..))
        .map(ToString::to_string)
        .collect()
}

/// Asks git for changed files.
///
/// Returns `None` when the status invocation itself failed. The failure is
/// kept apart from the path set so that no file name can be mistaken for it.
pub fn fetch_changed_files<R: GitRunner + ?Sized>(runner: &mut R) -> Option<IndexSet<String>> {
    let result = runner.run(&["status".to_string(), "--porcelain".to_string()]);

    if result.invocation_failed() {
        warn!("Unable to fetch status: {}", result.display_text());
        return None;
    }

    Some(parse_changed_files(&result.output))
}
