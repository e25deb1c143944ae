/// Natural-order filename sorting.
///
/// Digit runs inside a name compare by numeric value, so `file2.txt` sorts
/// before `file10.txt`. Names are split at their effective dot into a stem
/// and an extension; stems are compared token by token and extensions only
/// break ties.
pub mod key;
pub mod natural;
mod tokens;

pub use key::FilenameKey;
pub use natural::{compare_filenames, sort_filenames, MAX_TOKEN_COMPARE};
