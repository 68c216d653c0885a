// Presentation layer: rendering query outcomes for the command line callers.

pub mod report;
