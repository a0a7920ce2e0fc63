// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Canonicalization of raw network payloads.
//!
//! Trainers submit the per-neuron flag vector and the neuron-activity
//! matrix as free-form text: tokens separated by runs of spaces, carriage
//! returns, or newlines, possibly short, possibly malformed. Before those
//! payloads can key an exact-match store lookup they must have one exact
//! shape: `n` integers for the flag vector, `n * n` real numbers for the
//! activity matrix.
//!
//! The functions here enforce that shape under a best-effort coercion
//! contract: a token that does not parse becomes zero, a missing token
//! becomes zero, excess tokens are discarded, and neither function ever
//! returns an error. Downstream code can rely on never seeing a short or
//! jagged payload, no matter how corrupt the input was.

/// Token separators accepted in raw payloads: space, CR, LF.
const SEPARATORS: [char; 3] = [' ', '\r', '\n'];

/// Canonicalize a flag vector to exactly `n` space-separated integers.
///
/// Output shape depends only on `n`, never on how many tokens `raw`
/// actually supplied. `n == 0` yields the empty string. The result
/// carries no leading or trailing whitespace and is stable under
/// re-normalization with the same `n`.
pub fn normalize_flags(raw: &str, n: usize) -> String {
    let mut tokens = raw.split(SEPARATORS).filter(|tok| !tok.is_empty());

    let mut cells = Vec::with_capacity(n);
    for _ in 0..n {
        let value: i64 = tokens.next().map_or(0, |tok| tok.parse().unwrap_or(0));
        cells.push(value.to_string());
    }
    cells.join(" ")
}

/// Canonicalize an activity matrix to exactly `n` rows of `n`
/// space-separated real numbers, rows joined by `\n`.
///
/// Tokens are consumed in row-major order under the same coercion
/// contract as [`normalize_flags`]. The result carries no trailing
/// separator and `n == 0` yields the empty string.
pub fn normalize_activities(raw: &str, n: usize) -> String {
    let mut tokens = raw.split(SEPARATORS).filter(|tok| !tok.is_empty());

    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row = Vec::with_capacity(n);
        for _ in 0..n {
            let value: f64 = tokens.next().map_or(0.0, |tok| tok.parse().unwrap_or(0.0));
            row.push(value.to_string());
        }
        rows.push(row.join(" "));
    }
    rows.join("\n")
}
