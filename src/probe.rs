//! Theme color probe.
//!
//! Runs the fixed activation sequence against a [`ThemePlatform`]:
//! runtime init, `UISettings` activation, `IUISettings3` narrowing and the
//! color lookup. Every step must succeed before the next one is attempted.

use std::io::Write;

use anyhow::Context;

use crate::color::{ColorCategory, ThemeColor};

/// Activatable class name of the system UI settings object.
pub const UI_SETTINGS_CLASS: &str = "Windows.UI.ViewManagement.UISettings";

/// IID of `IUISettings3` {03021BE4-5254-4781-8194-5168F7D06D7B}.
pub const UI_SETTINGS3_IID: u128 = 0x03021be4_5254_4781_8194_5168f7d06d7b;

/// A failed foreign call: HRESULT-style status plus platform message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} (0x{code:08X})", describe(.message))]
pub struct PlatformError {
    pub code: i32,
    pub message: String,
}

impl PlatformError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

fn describe(message: &str) -> &str {
    match message.trim() {
        "" => "unspecified platform error",
        text => text,
    }
}

/// Registry form of an IID, e.g. `03021be4-5254-4781-8194-5168f7d06d7b`.
pub fn format_iid(iid: &u128) -> String {
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        iid >> 96,
        (iid >> 80) & 0xffff,
        (iid >> 64) & 0xffff,
        (iid >> 48) & 0xffff,
        iid & 0xffff_ffff_ffff
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to initialize the WinRT runtime")]
    RuntimeInitFailed(#[source] PlatformError),
    #[error("failed to activate {class}")]
    ActivationFailed {
        class: &'static str,
        #[source]
        source: PlatformError,
    },
    #[error("interface {{{}}} is not supported by this system", format_iid(.iid))]
    InterfaceNotSupported {
        iid: u128,
        #[source]
        source: PlatformError,
    },
    #[error("failed to query the {category} color")]
    ColorQueryFailed {
        category: ColorCategory,
        #[source]
        source: PlatformError,
    },
    #[error("theme colors can only be read on Windows")]
    UnsupportedPlatform,
}

impl ProbeError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ProbeError::RuntimeInitFailed(_) => 3,
            ProbeError::ActivationFailed { .. } => 4,
            ProbeError::InterfaceNotSupported { .. } => 5,
            ProbeError::ColorQueryFailed { .. } => 6,
            ProbeError::UnsupportedPlatform => 7,
        }
    }
}

/// The four foreign calls the probe depends on.
pub trait ThemePlatform {
    /// Opaque base handle returned by activation.
    type Object;
    /// Handle narrowed to the color lookup capability.
    type Settings;

    fn init_runtime(&self) -> Result<(), PlatformError>;
    fn activate(&self, class_name: &str) -> Result<Self::Object, PlatformError>;
    fn narrow(&self, object: &Self::Object, iid: u128) -> Result<Self::Settings, PlatformError>;
    fn color_value(
        &self,
        settings: &Self::Settings,
        category: ColorCategory,
    ) -> Result<ThemeColor, PlatformError>;
}

/// Runs the whole sequence and returns the sampled color.
pub fn sample_color<P: ThemePlatform>(
    platform: &P,
    category: ColorCategory,
) -> Result<ThemeColor, ProbeError> {
    platform
        .init_runtime()
        .map_err(ProbeError::RuntimeInitFailed)?;
    tracing::debug!("runtime ready");

    let object = platform
        .activate(UI_SETTINGS_CLASS)
        .map_err(|source| ProbeError::ActivationFailed {
            class: UI_SETTINGS_CLASS,
            source,
        })?;
    tracing::debug!(class = UI_SETTINGS_CLASS, "object activated");

    let settings = platform
        .narrow(&object, UI_SETTINGS3_IID)
        .map_err(|source| ProbeError::InterfaceNotSupported {
            iid: UI_SETTINGS3_IID,
            source,
        })?;
    tracing::debug!("interface narrowed");

    let color = platform
        .color_value(&settings, category)
        .map_err(|source| ProbeError::ColorQueryFailed { category, source })?;
    tracing::debug!(%category, a = color.a, r = color.r, g = color.g, b = color.b, "color retrieved");

    Ok(color)
}

/// Samples the color and writes the report line to `out`.
pub fn report<P: ThemePlatform, W: Write>(
    platform: &P,
    category: ColorCategory,
    out: &mut W,
) -> anyhow::Result<ThemeColor> {
    let color = sample_color(platform, category)?;
    writeln!(out, "{}", color.report_line()).context("failed to write to stdout")?;
    Ok(color)
}

/// Exit status for an error surfaced by [`report`].
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ProbeError>()
        .map(ProbeError::exit_code)
        .unwrap_or(1)
}
