use std::io::Write;

use crate::color::{ColorCategory, ThemeColor};

#[cfg(windows)]
mod winrt;
#[cfg(windows)]
pub use winrt::WinRtPlatform;

/// Reads the theme color from the running system and prints the report line.
pub fn report_native<W: Write>(category: ColorCategory, out: &mut W) -> anyhow::Result<ThemeColor> {
    #[cfg(windows)]
    {
        let (major, minor, build) = nt_version::get();
        tracing::debug!("Windows {}.{}.{}", major, minor, build & 0xffff);
        crate::probe::report(&WinRtPlatform, category, out)
    }
    #[cfg(not(windows))]
    {
        let _ = (category, out);
        Err(crate::probe::ProbeError::UnsupportedPlatform.into())
    }
}
