pub mod remote_file;
pub mod remote_file_data;
