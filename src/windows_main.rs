//! Windows-specific entry point and application logic.
//!
//! One UI thread owns everything: the layered badge window, its timers, the
//! keyboard hook and the engine. Other threads (console control handler)
//! only post to it.

use tracing::{debug, error, info, warn};
use windows::core::{w, BOOL};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::Console::SetConsoleCtrlHandler;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    PostQuitMessage, RegisterClassW, TranslateMessage, MSG, WM_DESTROY, WM_TIMER, WNDCLASSW,
    WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT,
    WS_POPUP,
};

use lockosd::animation::OsdEngine;
use lockosd::events::{EventBus, OsdEvent};
use lockosd::platform::windows::app::{
    dispatch_events, dispatch_timer, install_runtime, install_waker, teardown, wake, Dispatch,
    WindowTimers, WindowsRuntimeState, WM_OSD_WAKE,
};
use lockosd::platform::windows::input::KeyboardHook;
use lockosd::platform::windows::ui::overlay::{D2dRenderer, OverlayWindow};
use lockosd::render::BadgeStyle;
use lockosd::storage;
use lockosd::{OsdError, Result};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

/// COM apartment for the UI thread, uninitialized on drop.
struct ComApartment;

impl ComApartment {
    fn init() -> Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()? };
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

fn run_app() -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "lockosd starting");

    unsafe {
        if let Err(e) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
            debug!(error = %e, "DPI awareness already set");
        }
    }

    // Must outlive every Direct2D object, so it is declared first.
    let _com = ComApartment::init()?;

    let settings = storage::load_or_init(&storage::config_path());
    let renderer = D2dRenderer::new(BadgeStyle::from_settings(&settings))?;

    let hwnd = unsafe { create_badge_window(settings.width, settings.height)? };

    let bus = EventBus::new();
    install_waker(bus.publisher(), hwnd);
    install_runtime(WindowsRuntimeState {
        engine: OsdEngine::new(settings.timing()),
        timers: WindowTimers::new(hwnd),
        overlay: OverlayWindow::new(hwnd, renderer, settings.bottom_offset),
        bus,
    });

    let filter = settings.key_filter();
    if filter.is_empty() {
        warn!("no keys enabled in config, the badge will never show");
    }
    let hook = match KeyboardHook::install(filter) {
        Ok(hook) => hook,
        Err(e) => {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(e);
        }
    };

    unsafe {
        if let Err(e) = SetConsoleCtrlHandler(Some(console_handler), true) {
            debug!(error = %e, "no console control handler");
        }
    }

    info!("watching lock keys");

    // Message loop
    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    // Cleanup
    drop(hook);
    teardown();
    info!("lockosd stopped");
    Ok(())
}

unsafe fn create_badge_window(width: i32, height: i32) -> Result<HWND> {
    let instance = GetModuleHandleW(None)?;
    let class_name = w!("LockOsdBadge");

    let wc = WNDCLASSW {
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        lpszClassName: class_name,
        ..Default::default()
    };
    if RegisterClassW(&wc) == 0 {
        return Err(OsdError::Platform("RegisterClassW failed".into()));
    }

    // Layered, click-through, never activated, kept out of the taskbar
    let ex_style =
        WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW;

    let hwnd = CreateWindowExW(
        ex_style,
        class_name,
        w!("LockOsd"),
        WS_POPUP,
        0,
        0,
        width,
        height,
        None,
        None,
        Some(instance.into()),
        None,
    )?;
    Ok(hwnd)
}

unsafe extern "system" fn console_handler(ctrl_type: u32) -> BOOL {
    debug!(ctrl_type, "console control event");
    wake::send(OsdEvent::Shutdown);
    BOOL::from(true)
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_TIMER => {
                dispatch_timer(wparam.0);
                LRESULT(0)
            }

            WM_OSD_WAKE => {
                if dispatch_events() == Dispatch::Shutdown {
                    let _ = DestroyWindow(hwnd);
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                teardown();
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
