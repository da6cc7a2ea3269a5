//! Terminal front end: rendering, the interactive session and log setup.
//! Not part of the library API.

pub mod logging;
pub mod render;
pub mod shell;
