pub mod destinations;
pub mod input;
pub mod output;

pub use destinations::{destination_for, FileDestination, OutputDestination, StdoutDestination};
pub use input::{read_stage_document, read_stage_documents};
pub use output::{create_writer, render, OutputFormat, OutputWriter, Standings};
