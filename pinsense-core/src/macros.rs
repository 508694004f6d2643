//! Optional logging
//!
//! Events go to `log` when that feature is on, otherwise to `defmt`, and
//! compile to nothing when neither backend is enabled.

macro_rules! sensor_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
        #[cfg(all(feature = "defmt", not(feature = "log")))]
        defmt::trace!($($arg)*);
    }};
}

macro_rules! sensor_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(all(feature = "defmt", not(feature = "log")))]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! sensor_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
        #[cfg(all(feature = "defmt", not(feature = "log")))]
        defmt::warn!($($arg)*);
    }};
}
