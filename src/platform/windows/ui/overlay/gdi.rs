//! Scoped GDI handles for one frame.
//!
//! Each present creates a screen DC, a memory DC and a 32-bit DIB section and
//! must release all of them on every path, including render failures.

use std::ffi::c_void;

use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS, HBITMAP, HDC, HGDIOBJ,
};

use crate::error::{OsdError, Result};

/// DC for the whole screen, released on drop.
pub struct ScreenDc(pub HDC);

impl ScreenDc {
    pub fn acquire() -> Result<Self> {
        let dc = unsafe { GetDC(None) };
        if dc.is_invalid() {
            return Err(OsdError::Present("GetDC failed".into()));
        }
        Ok(Self(dc))
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe { ReleaseDC(None, self.0) };
    }
}

/// Memory DC compatible with the screen, deleted on drop.
pub struct MemoryDc(pub HDC);

impl MemoryDc {
    pub fn compatible_with(screen: &ScreenDc) -> Result<Self> {
        let dc = unsafe { CreateCompatibleDC(Some(screen.0)) };
        if dc.is_invalid() {
            return Err(OsdError::Present("CreateCompatibleDC failed".into()));
        }
        Ok(Self(dc))
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        let _ = unsafe { DeleteDC(self.0) };
    }
}

/// Top-down 32-bit BGRA bitmap, deleted on drop.
pub struct DibSection(pub HBITMAP);

impl DibSection {
    pub fn new(dc: &MemoryDc, width: i32, height: i32) -> Result<Self> {
        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits: *mut c_void = std::ptr::null_mut();
        let bitmap =
            unsafe { CreateDIBSection(Some(dc.0), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)? };
        if bits.is_null() {
            let _ = unsafe { DeleteObject(bitmap.into()) };
            return Err(OsdError::Present("DIB section has no pixels".into()));
        }
        Ok(Self(bitmap))
    }
}

impl Drop for DibSection {
    fn drop(&mut self) {
        let _ = unsafe { DeleteObject(self.0.into()) };
    }
}

/// Selection of an object into a DC, restored on drop.
///
/// Must be dropped before the selected object and the DC.
pub struct SelectedObject {
    dc: HDC,
    previous: HGDIOBJ,
}

impl SelectedObject {
    pub fn select(dc: &MemoryDc, bitmap: &DibSection) -> Self {
        let previous = unsafe { SelectObject(dc.0, bitmap.0.into()) };
        Self {
            dc: dc.0,
            previous,
        }
    }
}

impl Drop for SelectedObject {
    fn drop(&mut self) {
        unsafe { SelectObject(self.dc, self.previous) };
    }
}
