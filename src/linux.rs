use crate::platform::{Platform, WindowHandle};
use crate::{Error, Rect, Result};

/*
    The root window on X11 spans the whole virtual desktop, so its attributes
    give the overlay bounds directly. Click-through is done by giving the
    window an empty input shape through XFixes.
*/

use x11_dl::xfixes;
use x11_dl::xlib::{self, Xlib, _XDisplay};

use std::ffi::CStr;

pub struct X11 {
    instance: Xlib,
    fixes: xfixes::Xlib,
    display: *mut _XDisplay,
}

impl X11 {
    pub fn new() -> Result<Self> {
        let instance = Xlib::open().map_err(|e| Error::Platform(e.to_string()))?;
        let fixes = xfixes::Xlib::open().map_err(|e| Error::Platform(e.to_string()))?;
        let display = unsafe { (instance.XOpenDisplay)(std::ptr::null()) };
        if display.is_null() {
            return Err("failed to retrieve display ptr".into());
        }
        // Windows can vanish while the tree is walked; the default handler
        // exits the process on the resulting BadWindow.
        unsafe {
            (instance.XSetErrorHandler)(Some(log_x_error));
        }
        Ok(Self {
            instance,
            fixes,
            display,
        })
    }

    fn window_name(&self, window: xlib::Window) -> Option<String> {
        unsafe {
            let mut name: *mut std::os::raw::c_char = std::ptr::null_mut();
            let status = (self.instance.XFetchName)(self.display, window, &mut name);
            if status == 0 || name.is_null() {
                return None;
            }
            let value = CStr::from_ptr(name).to_string_lossy().into_owned();
            (self.instance.XFree)(name as *mut _);
            Some(value)
        }
    }

    fn children(&self, window: xlib::Window) -> Vec<xlib::Window> {
        unsafe {
            let mut root = 0;
            let mut parent = 0;
            let mut children: *mut xlib::Window = std::ptr::null_mut();
            let mut count = 0;
            let status = (self.instance.XQueryTree)(
                self.display,
                window,
                &mut root,
                &mut parent,
                &mut children,
                &mut count,
            );
            if status == 0 || children.is_null() {
                return vec![];
            }
            let found = std::slice::from_raw_parts(children, count as usize).to_vec();
            (self.instance.XFree)(children as *mut _);
            found
        }
    }

    fn search(&self, window: xlib::Window, title: &str) -> Option<xlib::Window> {
        if self.window_name(window).as_deref() == Some(title) {
            return Some(window);
        }
        // Newest windows are last in stacking order, look there first.
        self.children(window)
            .into_iter()
            .rev()
            .find_map(|child| self.search(child, title))
    }
}

unsafe extern "C" fn log_x_error(
    _display: *mut xlib::Display,
    event: *mut xlib::XErrorEvent,
) -> std::os::raw::c_int {
    if let Some(event) = event.as_ref() {
        tracing::debug!(
            "ignoring X error {} (request {}) on {}",
            event.error_code,
            event.request_code,
            event.resourceid
        );
    }
    0
}

impl Drop for X11 {
    fn drop(&mut self) {
        unsafe {
            (self.instance.XCloseDisplay)(self.display);
        }
    }
}

impl Platform for X11 {
    fn desktop_bounds(&self) -> Result<Option<Rect>> {
        unsafe {
            let root_window = (self.instance.XDefaultRootWindow)(self.display);
            let mut attributes: xlib::XWindowAttributes =
                std::mem::MaybeUninit::zeroed().assume_init();
            let status =
                (self.instance.XGetWindowAttributes)(self.display, root_window, &mut attributes);
            if status != 1 {
                return Err("failed to retrieve root window attributes".into());
            }
            Ok(Some(
                Rect::from(attributes.x as f32, attributes.y as f32)
                    .sized(attributes.width as f32, attributes.height as f32),
            ))
        }
    }

    fn find_window(&self, title: &str) -> Result<Option<WindowHandle>> {
        let root_window = unsafe { (self.instance.XDefaultRootWindow)(self.display) };
        Ok(self
            .search(root_window, title)
            .map(|w| WindowHandle::Xlib(w as u64)))
    }

    fn make_click_through(&self, handle: WindowHandle) -> Result<()> {
        let WindowHandle::Xlib(window) = handle else {
            return Err(Error::Platform(format!("not an X11 window: {handle:?}")));
        };
        unsafe {
            let region = (self.fixes.XFixesCreateRegion)(self.display, std::ptr::null_mut(), 0);
            #[allow(non_upper_case_globals)]
            const ShapeInput: i32 = 2;
            (self.fixes.XFixesSetWindowShapeRegion)(
                self.display,
                window as xlib::Window,
                ShapeInput,
                0,
                0,
                region,
            );
            (self.fixes.XFixesDestroyRegion)(self.display, region);
            (self.instance.XFlush)(self.display);
        }
        Ok(())
    }
}
