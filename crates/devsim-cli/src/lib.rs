//! Library side of the devsim command-line tool: logging set-up and the
//! generation run with its file outputs.

#![deny(unsafe_code)]

pub mod logging;
pub mod pipeline;
