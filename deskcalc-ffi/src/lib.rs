extern crate deskcalc_core;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use deskcalc_core::calculator::CalculatorState;
use deskcalc_core::keymap::parse_key;

/// The calculator owned by the host, behind an opaque pointer.
pub struct Calculator {
    state: CalculatorState,
}

#[repr(C)]
pub struct FloatResult {
    val: f64,
    success: bool,
}

unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

/// The returned string must be released with `deskcalc_string_free`.
fn alloc_str(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(val) => val.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn deskcalc_new() -> *mut Calculator {
    Box::into_raw(Box::new(Calculator {
        state: CalculatorState::new(),
    }))
}

#[no_mangle]
pub unsafe extern "C" fn deskcalc_free(calc: *mut Calculator) {
    if !calc.is_null() {
        // let the compiler drop the box
        let _ = Box::from_raw(calc);
    }
}

/// Presses the key with the given label, such as `7`, `×`, `Enter` or `M+`.
///
/// Returns false if the label is unknown, in which case nothing happens.
#[no_mangle]
pub unsafe extern "C" fn deskcalc_press(calc: *mut Calculator, key: *const c_char) -> bool {
    let calc = match calc.as_mut() {
        Some(val) => val,
        None => return false,
    };
    let input = match read_str(key).and_then(parse_key) {
        Some(val) => val,
        None => return false,
    };
    calc.state = calc.state.apply(input);
    true
}

#[no_mangle]
pub unsafe extern "C" fn deskcalc_display(calc: *const Calculator) -> *mut c_char {
    match calc.as_ref() {
        Some(calc) => alloc_str(calc.state.display()),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn deskcalc_expression(calc: *const Calculator) -> *mut c_char {
    match calc.as_ref() {
        Some(calc) => alloc_str(calc.state.expression()),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn deskcalc_memory(calc: *const Calculator) -> f64 {
    calc.as_ref().map_or(0.0, |calc| calc.state.memory())
}

#[no_mangle]
pub unsafe extern "C" fn deskcalc_history_len(calc: *const Calculator) -> usize {
    calc.as_ref().map_or(0, |calc| calc.state.history().len())
}

/// Returns the history entry at `index`, 0 being the newest, formatted like
/// `2+3 = 5`, or null if there is none.
#[no_mangle]
pub unsafe extern "C" fn deskcalc_history_entry(
    calc: *const Calculator,
    index: usize,
) -> *mut c_char {
    match calc.as_ref().and_then(|calc| calc.state.history().get(index)) {
        Some(entry) => alloc_str(&entry.to_string()),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn deskcalc_string_free(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

/// Evaluates an expression without touching any calculator.
#[no_mangle]
pub unsafe extern "C" fn deskcalc_eval(expr: *const c_char) -> FloatResult {
    let expr = match read_str(expr) {
        Some(val) => val,
        None => {
            return FloatResult {
                val: 0f64,
                success: false,
            }
        }
    };

    match deskcalc_core::evaluate(expr) {
        Ok(val) if val.is_finite() => FloatResult { val, success: true },
        _ => FloatResult {
            val: 0f64,
            success: false,
        },
    }
}
