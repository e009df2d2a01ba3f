// Wrappers around the 'log' crate's macros. When the 'logging' feature is
// disabled, these compile to nothing, which keeps 'log' out of the dependency
// tree entirely. Logging is only ever used on construction paths, never in
// the search routines.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    };
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) };
}
