pub const APP_NAME: &str = "cbuild";

/// Parallel job count used when `--jobs` is not given
pub const DEFAULT_JOBS: u32 = 8;

pub const CMAKE: &str = "cmake";
pub const EMCMAKE: &str = "emcmake";
