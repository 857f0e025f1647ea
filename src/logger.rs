use log::LevelFilter;

/// Default verbosity of the stderr logger.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Builds the stderr dispatcher used by the binary.
///
/// Records are written as `[LEVEL target] message`. Nothing is ever sent to
/// stdout, which only carries the converted timestamp.
pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
}

/// Installs the stderr logger as the global `log` backend.
pub fn init() -> Result<(), log::SetLoggerError> {
    dispatch(DEFAULT_LEVEL).apply()
}
