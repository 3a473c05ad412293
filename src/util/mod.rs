mod code;
mod logger;
mod position;
use once_cell::unsync::OnceCell;

use crate::error::Error;

/// Push onto `vec`, routing an allocation failure through [Error::alloc] instead of the
/// abort `Vec::push` would otherwise trigger on real OOM. Only the growth step can fail, so
/// this only calls `try_reserve` when `vec` is actually at capacity.
pub(crate) fn try_push<T>(vec: &mut Vec<T>, value: T) -> Result<(), Error> {
    if vec.len() == vec.capacity() {
        let additional = vec.capacity().max(1);
        vec.try_reserve(additional).map_err(|_| Error::alloc())?;
    }
    vec.push(value);
    Ok(())
}

/// Line/column location of a byte offset, for diagnostics only.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A wrapper around the source bytes that lazily computes line-break offsets the first time
/// a position is requested, so callers that never hit an error never pay for it.
pub struct Code<'c> {
    pub value: &'c [u8],
    line_breaks: OnceCell<Vec<usize>>,
}

/// Debug-trace verbosity for the scanner and parser. Mirrors the engine's own [Kind]-style
/// tagged enum rather than pulling in an external logging crate: there is no process-wide
/// log sink here, just an optional level attached to a single scan/parse call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}
