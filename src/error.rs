use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// An error that occurred during the construction of an Aho-Corasick
/// automaton.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of error that occurred.
#[derive(Clone, Debug)]
pub enum ErrorKind {
    /// An error that occurred because an automaton requires more states than
    /// the chosen state identifier representation can address. The data in
    /// this variant is the maximum identifier that could have been used.
    ///
    /// This cannot occur when `usize` is used as the state identifier
    /// representation, since a state table with more than `usize::MAX`
    /// entries cannot be allocated in the first place.
    StateIDOverflow {
        /// The maximum possible state ID.
        max: usize,
    },
    /// An error that occurred when premultiplication of state identifiers was
    /// requested, but the premultiplied form of the largest identifier does
    /// not fit in the chosen representation.
    PremultiplyOverflow {
        /// The maximum possible state ID.
        max: usize,
        /// The maximum ID required by premultiplication.
        requested_max: usize,
    },
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn state_id_overflow(max: usize) -> Error {
        Error { kind: ErrorKind::StateIDOverflow { max } }
    }

    pub(crate) fn premultiply_overflow(
        max: usize,
        requested_max: usize,
    ) -> Error {
        Error { kind: ErrorKind::PremultiplyOverflow { max, requested_max } }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::StateIDOverflow { max } => write!(
                f,
                "building the automaton failed because it required \
                 building more states that can be identified, where the \
                 maximum ID for the chosen representation is {}",
                max,
            ),
            ErrorKind::PremultiplyOverflow { max, requested_max } => {
                if max == 0 && requested_max == 0 {
                    write!(
                        f,
                        "premultiplication of state IDs failed because \
                         it overflowed the representation of a usize",
                    )
                } else {
                    write!(
                        f,
                        "premultiplication of state IDs failed because \
                         the maximum premultiplied ID ({}) exceeds the \
                         maximum ID for the chosen representation ({})",
                        requested_max, max,
                    )
                }
            }
        }
    }
}
