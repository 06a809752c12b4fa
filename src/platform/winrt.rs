use std::ffi::c_void;
use std::ptr::null_mut;

use windows::core::{IInspectable, Interface, GUID, HSTRING};
use windows::Win32::System::WinRT::{RoActivateInstance, RoInitialize, RO_INIT_SINGLETHREADED};
use windows::UI::Color;
use windows::UI::ViewManagement::{IUISettings3, UIColorType};

use crate::color::{ColorCategory, ThemeColor};
use crate::probe::{format_iid, PlatformError, ThemePlatform};

const E_NOINTERFACE: i32 = 0x80004002u32 as i32;

impl From<windows::core::Error> for PlatformError {
    fn from(e: windows::core::Error) -> Self {
        PlatformError::new(e.code().0, e.message())
    }
}

/// `UISettings` access through WinRT activation.
pub struct WinRtPlatform;

impl ThemePlatform for WinRtPlatform {
    type Object = IInspectable;
    type Settings = IUISettings3;

    fn init_runtime(&self) -> Result<(), PlatformError> {
        unsafe { RoInitialize(RO_INIT_SINGLETHREADED) }?;
        Ok(())
    }

    fn activate(&self, class_name: &str) -> Result<IInspectable, PlatformError> {
        let class_name = HSTRING::from(class_name);
        let object = unsafe { RoActivateInstance(&class_name) }?;
        Ok(object)
    }

    fn narrow(&self, object: &IInspectable, iid: u128) -> Result<IUISettings3, PlatformError> {
        let iid = GUID::from_u128(iid);
        // the returned pointer is wrapped as IUISettings3, anything else is unsound
        if iid != IUISettings3::IID {
            return Err(PlatformError::new(
                E_NOINTERFACE,
                format!("{} is not IUISettings3", format_iid(&iid.to_u128())),
            ));
        }
        let mut raw: *mut c_void = null_mut();
        unsafe { object.query(&iid, &mut raw) }.ok()?;
        Ok(unsafe { IUISettings3::from_raw(raw) })
    }

    /// Calls `IUISettings3::GetColorValue` straight through its vtable slot:
    /// `(this, UIColorType as i32, *mut Color) -> HRESULT`.
    fn color_value(
        &self,
        settings: &IUISettings3,
        category: ColorCategory,
    ) -> Result<ThemeColor, PlatformError> {
        let mut color = Color::default();
        unsafe {
            (Interface::vtable(settings).GetColorValue)(
                Interface::as_raw(settings),
                UIColorType(category.as_raw()),
                &mut color,
            )
        }
        .ok()?;
        Ok(ThemeColor::new(color.A, color.R, color.G, color.B))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{UI_SETTINGS3_IID, UI_SETTINGS_CLASS};

    #[test]
    fn test_iid_matches_bindings() {
        assert_eq!(IUISettings3::IID, GUID::from_u128(UI_SETTINGS3_IID));
    }

    #[test]
    fn test_narrow_rejects_other_iid() {
        let platform = WinRtPlatform;
        platform.init_runtime().unwrap();
        let object = platform.activate(UI_SETTINGS_CLASS).unwrap();
        // IUnknown is implemented by every object but is not IUISettings3
        let err = platform
            .narrow(&object, 0x00000000_0000_0000_c000_000000000046)
            .unwrap_err();
        assert_eq!(err.code, E_NOINTERFACE);
        assert!(platform.narrow(&object, UI_SETTINGS3_IID).is_ok());
    }
}
