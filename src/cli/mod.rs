mod args;
mod run;

pub use args::{Args, OutputFormat};
pub use run::{run, run_with_writer};
