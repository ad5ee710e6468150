//! Monitor lookup for badge placement.

use windows::Win32::Foundation::POINT;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromPoint, MONITORINFO, MONITOR_DEFAULTTONEAREST,
};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

use crate::error::{OsdError, Result};
use crate::render::RectI;

/// Work area (taskbar excluded) of the monitor under the pointer.
pub fn pointer_work_area() -> Result<RectI> {
    unsafe {
        let mut cursor = POINT::default();
        GetCursorPos(&mut cursor).map_err(|_| OsdError::Positioning)?;

        let monitor = MonitorFromPoint(cursor, MONITOR_DEFAULTTONEAREST);
        if monitor.is_invalid() {
            return Err(OsdError::Positioning);
        }

        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if !GetMonitorInfoW(monitor, &mut info).as_bool() {
            return Err(OsdError::Positioning);
        }

        let work = info.rcWork;
        Ok(RectI::new(work.left, work.top, work.right, work.bottom))
    }
}
