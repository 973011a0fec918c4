use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{
            FindWindowW, GetSystemMetrics, GetWindowLongW, SetWindowLongW, GWL_EXSTYLE,
            SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
            WS_EX_LAYERED, WS_EX_TRANSPARENT,
        },
    },
};

use crate::platform::{Platform, WindowHandle};
use crate::{Error, Rect, Result};

// Layered + transparent extended styles make the window invisible to hit testing:
// https://learn.microsoft.com/en-us/windows/win32/winmsg/extended-window-styles

pub struct Win32;

fn to_wide(text: &str) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    std::ffi::OsStr::new(text)
        .encode_wide()
        .chain([0u16].iter().copied())
        .collect()
}

impl Platform for Win32 {
    fn desktop_bounds(&self) -> Result<Option<Rect>> {
        unsafe {
            let left = GetSystemMetrics(SM_XVIRTUALSCREEN);
            let top = GetSystemMetrics(SM_YVIRTUALSCREEN);
            let width = GetSystemMetrics(SM_CXVIRTUALSCREEN);
            let height = GetSystemMetrics(SM_CYVIRTUALSCREEN);
            if width == 0 || height == 0 {
                return Err("GetSystemMetrics returned an empty virtual screen".into());
            }
            Ok(Some(
                Rect::from(left as f32, top as f32).sized(width as f32, height as f32),
            ))
        }
    }

    fn find_window(&self, title: &str) -> Result<Option<WindowHandle>> {
        let windows_string = to_wide(title);
        let name = PCWSTR::from_raw(windows_string.as_ptr());
        // Not finding the window is reported as an error too, treat both as absent.
        let found = unsafe { FindWindowW(PCWSTR::null(), name) };
        Ok(match found {
            Ok(hwnd) if !hwnd.is_invalid() => Some(WindowHandle::Win32(hwnd.0 as isize)),
            _ => None,
        })
    }

    fn make_click_through(&self, handle: WindowHandle) -> Result<()> {
        let WindowHandle::Win32(raw) = handle else {
            return Err(Error::Platform(format!("not a Win32 window: {handle:?}")));
        };
        let hwnd = HWND(raw as *mut _);
        unsafe {
            let extended_style = GetWindowLongW(hwnd, GWL_EXSTYLE);
            SetWindowLongW(
                hwnd,
                GWL_EXSTYLE,
                extended_style | WS_EX_LAYERED.0 as i32 | WS_EX_TRANSPARENT.0 as i32,
            );
        }
        Ok(())
    }
}
