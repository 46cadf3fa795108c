pub mod csv_writer;
pub mod host_list;
pub mod output_path;

pub use csv_writer::{escape_field, render_row, CsvReportWriter};
pub use host_list::{parse_host_list, read_host_list};
pub use output_path::{prepare_output_dir, report_file_name};
