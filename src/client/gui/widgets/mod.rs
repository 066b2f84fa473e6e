pub mod alert;
pub mod file_list;
