// finframe-cli/src/error.rs
//
// The CLI propagates core errors unchanged; this alias keeps command
// signatures consistent with the core library.

pub type CliResult<T> = finframe_core::CoreResult<T>;
