use std::fmt::{Debug, Display, Formatter};

use super::{Code, Log};
use crate::value::Kind;

impl<T: Display> Display for Log<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Log::None => Ok(()),
            Log::Default(s) | Log::Success(s) | Log::Result(s) | Log::Verbose(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl<T> Log<T> {
    /// Order of the log level, used to compare a configured level against a threshold.
    pub fn order(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Default(_) => 1,
            Log::Success(_) => 2,
            Log::Result(_) => 3,
            Log::Verbose(_) => 4,
        }
    }
}

impl<TL: Display + Copy> Log<TL> {
    /// Trace a token the scanner classified, at `Success` level or above.
    pub fn log_token(&self, label: TL, kind: Kind, offset: usize, code: &Code) {
        #[cfg(debug_assertions)]
        if self.order() >= Log::Success(()).order() {
            println!(
                "[{}; token]: {:?} at {}",
                Log::Default(label),
                kind,
                code.obtain_position(offset)
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (label, kind, offset, code);
    }

    /// Trace an operator node as its arity is resolved, at `Result` level or above.
    pub fn log_arity(&self, label: TL, op: Kind, children: usize) {
        #[cfg(debug_assertions)]
        if self.order() >= Log::Result(()).order() {
            println!(
                "[{}; arity]: {:?} with {} child/children",
                Log::Default(label),
                op,
                children
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (label, op, children);
    }

    /// Trace a raised error, at `Default` level or above.
    pub fn log_error<E: Debug>(&self, label: TL, error: &E, offset: usize, code: &Code) {
        #[cfg(debug_assertions)]
        if self.order() >= Log::Default(()).order() {
            println!(
                "[{}; error]: {:?} at {}",
                Log::Default(label),
                error,
                code.obtain_position(offset)
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (label, error, offset, code);
    }
}
