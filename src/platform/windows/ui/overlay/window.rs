//! The layered, click-through badge window.

use tracing::trace;
use windows::Win32::Foundation::{COLORREF, HWND, POINT, SIZE};
use windows::Win32::Graphics::Gdi::{AC_SRC_ALPHA, AC_SRC_OVER, BLENDFUNCTION};
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowPos, ShowWindow, UpdateLayeredWindow, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOSIZE,
    SW_HIDE, SW_SHOWNOACTIVATE, ULW_ALPHA,
};

use super::gdi::{DibSection, MemoryDc, ScreenDc, SelectedObject};
use super::renderer::D2dRenderer;
use crate::error::{OsdError, Result};
use crate::platform::windows::ui::monitor::pointer_work_area;
use crate::render::PointI;
use crate::ui::{badge_origin, Frame, Overlay};

/// `Overlay` over a `WS_EX_LAYERED` popup.
pub struct OverlayWindow {
    hwnd: HWND,
    renderer: D2dRenderer,
    bottom_offset: i32,
    /// Top-left corner in virtual-screen coordinates.
    origin: PointI,
}

impl OverlayWindow {
    pub fn new(hwnd: HWND, renderer: D2dRenderer, bottom_offset: i32) -> Self {
        Self {
            hwnd,
            renderer,
            bottom_offset,
            origin: PointI::default(),
        }
    }
}

impl Overlay for OverlayWindow {
    fn reposition(&mut self) -> Result<()> {
        let area = pointer_work_area()?;
        let width = self.renderer.style().width;
        let origin = badge_origin(area, width, self.bottom_offset);

        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                origin.x,
                origin.y,
                0,
                0,
                SWP_NOSIZE | SWP_NOACTIVATE,
            )
            .map_err(|_| OsdError::Positioning)?;
        }
        self.origin = origin;
        trace!(x = origin.x, y = origin.y, "badge moved");
        Ok(())
    }

    fn show(&mut self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOWNOACTIVATE);
        }
    }

    fn present(&mut self, frame: Frame<'_>) -> Result<()> {
        let (width, height) = {
            let style = self.renderer.style();
            (style.width, style.height)
        };

        let screen = ScreenDc::acquire()?;
        let memory = MemoryDc::compatible_with(&screen)?;
        let bitmap = DibSection::new(&memory, width, height)?;
        let _selected = SelectedObject::select(&memory, &bitmap);

        self.renderer.draw(memory.0, frame.content)?;

        let pt_src = POINT { x: 0, y: 0 };
        let pt_dst = POINT {
            x: self.origin.x,
            y: self.origin.y,
        };
        let size = SIZE {
            cx: width,
            cy: height,
        };
        let blend = BLENDFUNCTION {
            BlendOp: AC_SRC_OVER as u8,
            BlendFlags: 0,
            SourceConstantAlpha: frame.opacity,
            AlphaFormat: AC_SRC_ALPHA as u8,
        };

        let result = unsafe {
            UpdateLayeredWindow(
                self.hwnd,
                Some(screen.0),
                Some(&pt_dst),
                Some(&size),
                Some(memory.0),
                Some(&pt_src),
                COLORREF(0),
                Some(&blend),
                ULW_ALPHA,
            )
        };

        result.map_err(|e| OsdError::Present(e.to_string()))
    }

    fn hide(&mut self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }
}
