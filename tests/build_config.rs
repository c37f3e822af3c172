// SPDX-License-Identifier: MIT OR Apache-2.0

//! The global logger falls back to the build configuration when nothing is installed.

use scopelog::{Config, Level};

#[test]
fn lazy_global_uses_the_build_config() {
    // flushing before first use must not initialise anything
    scopelog::flush();
    assert!(!scopelog::is_initialized());

    let logger = scopelog::global();
    assert!(scopelog::is_initialized());
    assert_eq!(*logger.config(), Config::BUILD);
    assert_eq!(
        logger.config().log_file_name(),
        format!("{}.log", Config::BUILD.threshold())
    );

    let no_threshold_feature = !cfg!(feature = "threshold-debug")
        && !cfg!(feature = "threshold-info")
        && !cfg!(feature = "threshold-warning")
        && !cfg!(feature = "threshold-error");
    if no_threshold_feature {
        let expected = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
        assert_eq!(Config::BUILD.threshold(), expected);
    }
    assert!(scopelog::log_enabled!(Level::Error));
}
