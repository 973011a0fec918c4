//! Native window interop.
//!
//! eframe owns the overlay window, so the platform layer only needs to find it
//! again by title and flip the bits that let pointer input fall through to the
//! windows below.

use crate::{Rect, Result};

/// Native window identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowHandle {
    Win32(isize),
    Xlib(u64),
}

pub trait Platform {
    /// Bounding rectangle of all monitors, if the platform can tell.
    fn desktop_bounds(&self) -> Result<Option<Rect>>;

    /// Look up a top level window by its title.
    fn find_window(&self, title: &str) -> Result<Option<WindowHandle>>;

    /// Make the window ignore all pointer input.
    fn make_click_through(&self, handle: WindowHandle) -> Result<()>;
}

/// Relies solely on the toolkit's mouse passthrough hint.
///
/// Used on targets without a native implementation, and on Linux in Wayland
/// sessions or when no X server is reachable.
#[derive(Debug, Default)]
pub struct Passthrough;

impl Platform for Passthrough {
    fn desktop_bounds(&self) -> Result<Option<Rect>> {
        Ok(None)
    }

    fn find_window(&self, _title: &str) -> Result<Option<WindowHandle>> {
        Err("window lookup not supported on this platform".into())
    }

    fn make_click_through(&self, _handle: WindowHandle) -> Result<()> {
        Err("click-through not supported on this platform".into())
    }
}

/// True when `WAYLAND_DISPLAY` names a compositor socket.
pub fn is_wayland_session(wayland_display: Option<&std::ffi::OsStr>) -> bool {
    wayland_display.is_some_and(|d| !d.is_empty())
}

/// The implementation for the current target.
pub fn native() -> Box<dyn Platform> {
    #[cfg(windows)]
    {
        Box::new(crate::windows::Win32)
    }

    #[cfg(target_os = "linux")]
    {
        // eframe picks Wayland when it can, so the overlay window never shows
        // up in the XWayland tree.
        if is_wayland_session(std::env::var_os("WAYLAND_DISPLAY").as_deref()) {
            tracing::info!("Wayland session, using toolkit passthrough only");
            return Box::new(Passthrough);
        }
        match crate::linux::X11::new() {
            Ok(x11) => Box::new(x11),
            Err(e) => {
                tracing::info!("no X11 display ({e}), using toolkit passthrough only");
                Box::new(Passthrough)
            }
        }
    }

    #[cfg(not(any(windows, target_os = "linux")))]
    {
        Box::new(Passthrough)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn passthrough_reports_nothing() {
        let p = Passthrough;
        assert_eq!(p.desktop_bounds().unwrap(), None);
        assert!(p.find_window("Crosshair Overlay").is_err());
        assert!(p.make_click_through(WindowHandle::Xlib(1)).is_err());
    }

    #[test]
    fn wayland_display_selects_wayland() {
        use std::ffi::OsStr;
        assert!(is_wayland_session(Some(OsStr::new("wayland-0"))));
        assert!(!is_wayland_session(Some(OsStr::new(""))));
        assert!(!is_wayland_session(None));
    }
}
