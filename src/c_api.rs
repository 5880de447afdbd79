// C entry points. Every call is wrapped in catch_unwind so a panic never
// crosses the FFI boundary; strings handed out must go back through
// `arabic_free_string`.
use crate::config::EngineConfig;
use crate::core::engine::ArabicEngine;
use crate::core::{normalizer, script};
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;
use std::sync::{Mutex, MutexGuard};

static ENGINE: Mutex<Option<ArabicEngine>> = Mutex::new(None);

fn engine_slot() -> MutexGuard<'static, Option<ArabicEngine>> {
    ENGINE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives the call.
unsafe fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// Creates the shared engine. `state_path` may be null for an engine that
/// is never saved; otherwise state is restored from and later saved to it.
/// Returns false if the engine could not be built.
#[no_mangle]
pub extern "C" fn arabic_engine_init(state_path: *const c_char) -> bool {
    let path = unsafe { read_str(state_path) }.map(str::to_owned);
    let result = catch_unwind(|| {
        let mut slot = engine_slot();
        if slot.is_some() {
            return true;
        }
        let engine = match &path {
            Some(path) => ArabicEngine::from_file_or_new(Path::new(path)),
            None => ArabicEngine::new(EngineConfig::default()),
        };
        match engine {
            Ok(engine) => {
                *slot = Some(engine);
                tracing::info!("arabic engine initialized");
                true
            }
            Err(err) => {
                tracing::error!("arabic engine initialization failed: {}", err);
                false
            }
        }
    });
    result.unwrap_or_else(|_| {
        tracing::error!("panic during arabic engine initialization");
        false
    })
}

/// Saves state (when a path was given at init) and drops the engine.
#[no_mangle]
pub extern "C" fn arabic_engine_destroy() {
    let _ = catch_unwind(|| {
        if let Some(engine) = engine_slot().take() {
            if let Err(err) = engine.save_state() {
                tracing::error!("failed to save engine state: {}", err);
            }
        }
    });
}

/// JSON `TextAnalysis` of `text`, or null if the engine is not initialized
/// or `text` is not valid UTF-8.
#[no_mangle]
pub extern "C" fn arabic_analyze(text: *const c_char) -> *mut c_char {
    let Some(text) = (unsafe { read_str(text) }) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let slot = engine_slot();
        let engine = slot.as_ref()?;
        serde_json::to_string(&engine.analyze(text)).ok()
    }));
    match result {
        Ok(Some(json)) => into_c_string(json),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            tracing::error!("panic in arabic_analyze");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn arabic_normalize(text: *const c_char) -> *mut c_char {
    match unsafe { read_str(text) } {
        Some(text) => catch_unwind(|| normalizer::normalize(text))
            .map(into_c_string)
            .unwrap_or(ptr::null_mut()),
        None => ptr::null_mut(),
    }
}

/// `"rtl"`, `"ltr"`, or `""` when the text has neither Arabic nor Latin letters.
#[no_mangle]
pub extern "C" fn arabic_text_direction(text: *const c_char) -> *mut c_char {
    match unsafe { read_str(text) } {
        Some(text) => {
            let direction = script::input_direction(text)
                .map(|d| d.as_str())
                .unwrap_or("");
            into_c_string(direction.to_string())
        }
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn arabic_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
