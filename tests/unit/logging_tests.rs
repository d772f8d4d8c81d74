/*!
 * Tests for the stderr logger
 */

use log::{Level, Log, Metadata};
use mdtrans::logging::CliLogger;

/// Only the global max level decides what the logger accepts
#[test]
fn test_cliLogger_enabled_shouldFollowGlobalMaxLevel() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
        let metadata = Metadata::builder().level(level).target("mdtrans").build();
        assert_eq!(CliLogger.enabled(&metadata), level <= log::max_level());
    }
}
