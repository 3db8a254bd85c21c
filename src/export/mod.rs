pub mod csv_writer;
pub mod filename;

pub use csv_writer::{CsvRecord, save_records, union_headers, write_records};
pub use filename::{output_file, sanitize_filename};
