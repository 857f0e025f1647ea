pub(crate) mod date_line;
