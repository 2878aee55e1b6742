//! Helpers for controlling backtracking in `nom` parsers.
//!
//! `nom` distinguishes a recoverable `nom::Err::Error`, which lets combinators such as `alt` or
//! `many0` try something else, from an unrecoverable `nom::Err::Failure`. Once the parser has
//! committed to a construct (say, it has seen the opening `(` of a parameter list), a failure
//! further in should surface as a specific error rather than being swallowed by backtracking.

use nom::{IResult, Parser};

/// `p_cut(relabel, parser)` prevents backtracking out of `parser`. A recoverable error is
/// replaced by `relabel(input)`, where `input` is what `parser` was applied to, and promoted to
/// `nom::Err::Failure`. Failures raised inside `parser` are passed through untouched so the
/// innermost label wins.
pub fn p_cut<I, O, E, F, G>(mut relabel: G, mut parser: F) -> impl FnMut(I) -> IResult<I, O, E>
    where I: Clone,
          F: Parser<I, O, E>,
          G: FnMut(I) -> E
{
    move |input: I| match parser.parse(input.clone()) {
        Err(nom::Err::Error(_)) => Err(nom::Err::Failure(relabel(input))),
        other => other,
    }
}

/// Returns a non-backtracking failure carrying `err`.
pub fn p_fail<I, O, E>(err: E) -> IResult<I, O, E> {
    Err(nom::Err::Failure(err))
}
