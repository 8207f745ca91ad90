mod file_import;
mod line_parser;

pub(crate) use file_import::{import, import_path};
