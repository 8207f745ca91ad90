mod cli;

pub(crate) use cli::execute;
