//! Command-key derivation: flatten an ordered command-name chain into the
//! single string used as a document-tree key.
//!
//! `["local", "start", "api"]` becomes `"api_start_local"`: each segment has
//! `-` and spaces normalized to `_`, then the list is reversed and joined with
//! `_`. The reversal is part of the on-disk format — files written under the
//! old layout must keep resolving — so it is load-bearing, not cosmetic.

/// Derive the flat document key for a command-name chain.
///
/// Every caller that reads or writes the same logical command must go through
/// this function; any divergence breaks round-tripping of existing files.
pub fn to_key<S: AsRef<str>>(cmd_names: &[S]) -> String {
    let mut segments: Vec<String> = cmd_names
        .iter()
        .map(|s| s.as_ref().replace(['-', ' '], "_"))
        .collect();
    segments.reverse();
    segments.join("_")
}
