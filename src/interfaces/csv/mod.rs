pub mod shape_reader;
pub mod shape_writer;
