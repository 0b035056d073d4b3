//! C bindings for the IPASIR2 protocol.
//!
//! Each `ipasir2_*` function wraps the corresponding method of a [Solver], and returns an [ipasir2_errorcode] in place of a [Result].
//! Results are written through out pointers.
//!
//! A handle given to C is a pointer to a [Handle], which bundles a solver with storage for the catalog last requested through [ipasir2_options].
//! The catalog array is owned by the handle, and is valid until the next call to [ipasir2_options] or [ipasir2_release].
//!
//! A null handle, or a null out pointer, is reported as [IPASIR2_E_INVALID_ARGUMENT](ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT).
//! Setting a callback from within a callback is not permitted.
//!
//! # Compiling a library
//!
//! The crate builds a static library alongside the rust library.
//! For details on linking, see: <https://doc.rust-lang.org/reference/linkage.html>

use std::{
    ffi::{c_char, c_int, c_void, CStr, CString},
    sync::OnceLock,
};

use crate::{
    engine::cdcl::SIGNATURE,
    ipasir2::{Solver, State},
    misc::log::targets,
    types::err::ErrorCode,
};

/// Codes used to indicate the success or failure of a function call.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum ipasir2_errorcode {
    IPASIR2_E_OK = 0,
    IPASIR2_E_UNKNOWN = 1,
    IPASIR2_E_UNSUPPORTED,
    IPASIR2_E_UNSUPPORTED_ARGUMENT,
    IPASIR2_E_UNSUPPORTED_OPTION,
    IPASIR2_E_INVALID_STATE,
    IPASIR2_E_INVALID_ARGUMENT,
    IPASIR2_E_INVALID_OPTION_VALUE,
}

impl From<ErrorCode> for ipasir2_errorcode {
    fn from(e: ErrorCode) -> Self {
        match e {
            ErrorCode::Unknown => Self::IPASIR2_E_UNKNOWN,
            ErrorCode::Unsupported => Self::IPASIR2_E_UNSUPPORTED,
            ErrorCode::UnsupportedArgument => Self::IPASIR2_E_UNSUPPORTED_ARGUMENT,
            ErrorCode::UnsupportedOption => Self::IPASIR2_E_UNSUPPORTED_OPTION,
            ErrorCode::InvalidState => Self::IPASIR2_E_INVALID_STATE,
            ErrorCode::InvalidArgument => Self::IPASIR2_E_INVALID_ARGUMENT,
            ErrorCode::InvalidOptionValue => Self::IPASIR2_E_INVALID_OPTION_VALUE,
        }
    }
}

impl From<Result<(), ErrorCode>> for ipasir2_errorcode {
    fn from(result: Result<(), ErrorCode>) -> Self {
        match result {
            Ok(()) => Self::IPASIR2_E_OK,
            Err(e) => e.into(),
        }
    }
}

/// Lifecycle states.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum ipasir2_state {
    IPASIR2_S_CONFIG = 0,
    IPASIR2_S_INPUT = 1,
    IPASIR2_S_SAT,
    IPASIR2_S_UNSAT,
}

impl From<State> for ipasir2_state {
    fn from(state: State) -> Self {
        match state {
            State::Config => Self::IPASIR2_S_CONFIG,
            State::Input => Self::IPASIR2_S_INPUT,
            State::Sat => Self::IPASIR2_S_SAT,
            State::Unsat => Self::IPASIR2_S_UNSAT,
        }
    }
}

/// IPASIR2 configuration options.
///
/// A catalog given to C ends with an entry whose name is null.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct ipasir2_option {
    /// Unique option identifier.
    pub name: *const c_char,

    /// Minimum allowed value for the option.
    pub min: i64,

    /// Maximum allowed value for the option.
    pub max: i64,

    /// Maximal state in which the option may be set.
    pub max_state: ipasir2_state,

    /// Specifies if the option is eligible for use by automatic tuners.
    pub tunable: c_int,

    /// Specifies if the option may be set per variable.
    pub indexed: c_int,

    /// An opaque pointer for internal use, always null.
    pub handle: *const c_void,
}

impl ipasir2_option {
    fn sentinel() -> Self {
        ipasir2_option {
            name: std::ptr::null(),
            min: 0,
            max: 0,
            max_state: ipasir2_state::IPASIR2_S_CONFIG,
            tunable: 0,
            indexed: 0,
            handle: std::ptr::null(),
        }
    }
}

/// A solver bundled with storage for the last catalog given to C.
#[derive(Default)]
pub struct Handle {
    pub solver: Solver,

    /// Names of the options in [options](Handle::options).
    names: Vec<CString>,

    options: Vec<ipasir2_option>,
}

/// The signature of the library, written (once) when needed.
static SIGNATURE_CSTRING: OnceLock<CString> = OnceLock::new();

/// Recovers a handle from a raw pointer, if the pointer is not null.
unsafe fn recover<'a>(solver: *mut c_void) -> Option<&'a mut Handle> {
    (solver as *mut Handle).as_mut()
}

/// Writes the signature of the library to the given pointer.
/// # Safety
/// Writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_signature(signature: *mut *const c_char) -> ipasir2_errorcode {
    if signature.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    let cstring = SIGNATURE_CSTRING.get_or_init(|| CString::new(SIGNATURE).unwrap_or_default());
    std::ptr::write(signature, cstring.as_ptr());

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Initialises a solver and writes its address to the given pointer.
/// # Safety
/// Writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_init(solver: *mut *mut c_void) -> ipasir2_errorcode {
    if solver.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    let handle = Box::new(Handle::default());
    std::ptr::write(solver, Box::into_raw(handle) as *mut c_void);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Releases the solver, along with any catalog given to C.
/// # Safety
/// Takes ownership of a handle from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_release(solver: *mut c_void) -> ipasir2_errorcode {
    if solver.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    drop(Box::from_raw(solver as *mut Handle));
    log::trace!(target: targets::LIFECYCLE, "Released handle");

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Writes a pointer to the catalog of the solver, ended by an entry with a null name.
/// # Safety
/// Recovers a handle from a raw pointer, and writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_options(
    solver: *mut c_void,
    result: *mut *const ipasir2_option,
) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    let catalog = match handle.solver.options() {
        Ok(catalog) => catalog,
        Err(e) => return e.into(),
    };

    let mut names = Vec::default();
    let mut options = Vec::default();
    if names.try_reserve_exact(catalog.len()).is_err()
        || options.try_reserve_exact(catalog.len() + 1).is_err()
    {
        return ipasir2_errorcode::IPASIR2_E_UNKNOWN;
    }

    for descriptor in &catalog {
        let Ok(name) = CString::new(descriptor.name) else {
            return ipasir2_errorcode::IPASIR2_E_UNKNOWN;
        };
        options.push(ipasir2_option {
            name: name.as_ptr(),
            min: descriptor.min,
            max: descriptor.max,
            max_state: descriptor.max_state.into(),
            tunable: descriptor.tunable as c_int,
            indexed: descriptor.indexed as c_int,
            handle: std::ptr::null(),
        });
        // The heap buffer of a CString does not move with the CString.
        names.push(name);
    }
    options.push(ipasir2_option::sentinel());

    handle.names = names;
    handle.options = options;
    std::ptr::write(result, handle.options.as_ptr());

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Sets the value of the option with the given name.
/// # Safety
/// Recovers a handle and reads a C string from raw pointers.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_option(
    solver: *mut c_void,
    name: *const c_char,
    value: i64,
    index: i64,
) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if name.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    let Ok(name) = CStr::from_ptr(name).to_str() else {
        return ipasir2_errorcode::IPASIR2_E_UNSUPPORTED_OPTION;
    };

    handle.solver.set_option(name, value, index).into()
}

/// Adds a literal to the current clause, or closes the clause on `0`.
/// # Safety
/// Recovers a handle from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_add(solver: *mut c_void, lit_or_zero: i32) -> ipasir2_errorcode {
    match recover(solver) {
        Some(handle) => handle.solver.add(lit_or_zero).into(),
        None => ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT,
    }
}

/// Assumes a literal for the next solve.
/// # Safety
/// Recovers a handle from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_assume(solver: *mut c_void, lit: i32) -> ipasir2_errorcode {
    match recover(solver) {
        Some(handle) => handle.solver.assume(lit).into(),
        None => ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT,
    }
}

/// Solves, and writes `10` for satisfiable, `20` for unsatisfiable, or `0` for unknown to the given pointer.
/// # Safety
/// Recovers a handle from a raw pointer, and writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_solve(solver: *mut c_void, result: *mut c_int) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    match handle.solver.solve() {
        Ok(solve_result) => {
            std::ptr::write(result, solve_result.code());
            ipasir2_errorcode::IPASIR2_E_OK
        }
        Err(e) => e.into(),
    }
}

/// Writes `lit` if the literal is true on the satisfying valuation, `-lit` if false, and `0` if unknown.
/// # Safety
/// Recovers a handle from a raw pointer, and writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_val(solver: *mut c_void, lit: i32, result: *mut i32) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    match handle.solver.value(lit) {
        Ok(value) => {
            let value = match value {
                Some(true) => lit,
                Some(false) => -lit,
                None => 0,
            };
            std::ptr::write(result, value);
            ipasir2_errorcode::IPASIR2_E_OK
        }
        Err(e) => e.into(),
    }
}

/// Writes `1` if the assumption was used to prove unsatisfiability, and `0` otherwise.
/// # Safety
/// Recovers a handle from a raw pointer, and writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_failed(solver: *mut c_void, lit: i32, result: *mut c_int) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    match handle.solver.failed(lit) {
        Ok(failed) => {
            std::ptr::write(result, failed as c_int);
            ipasir2_errorcode::IPASIR2_E_OK
        }
        Err(e) => e.into(),
    }
}

/// Sets a callback polled during a solve, with a non-zero return requesting the solve stops.
/// # Safety
/// Recovers a handle from a raw pointer, and stores a pointer to data for use with the callback.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_terminate(
    solver: *mut c_void,
    data: *mut c_void,
    callback: Option<extern "C" fn(data: *mut c_void) -> c_int>,
) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };

    let terminate = callback.map(|callback| {
        Box::new(move || callback(data) != 0) as Box<crate::engine::TerminateFn>
    });
    handle.solver.set_terminate(terminate).into()
}

/// Sets a callback given each learnt clause of at most `max_length` literals.
///
/// The clause is given as a pointer and a length, and the literals are also followed by `0`.
/// # Safety
/// Recovers a handle from a raw pointer, and stores a pointer to data for use with the callback.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_export(
    solver: *mut c_void,
    data: *mut c_void,
    max_length: c_int,
    callback: Option<extern "C" fn(data: *mut c_void, clause: *const i32, len: i32)>,
) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };

    let export = callback.map(|callback| {
        Box::new(move |clause: &[i32]| {
            let mut buffer = Vec::with_capacity(clause.len() + 1);
            buffer.extend_from_slice(clause);
            buffer.push(0);
            callback(data, buffer.as_ptr(), clause.len() as i32);
        }) as Box<crate::engine::LearnFn>
    });
    handle.solver.set_export(max_length, export).into()
}

/// Sets a callback asked for a clause to import during a solve.
///
/// The callback returns a zero-terminated clause, or null if there is nothing to import.
/// # Safety
/// Recovers a handle from a raw pointer, and stores a pointer to data for use with the callback.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_import(
    solver: *mut c_void,
    data: *mut c_void,
    callback: Option<extern "C" fn(data: *mut c_void) -> *const i32>,
) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };

    let import = callback.map(|callback| {
        Box::new(move || {
            let clause = callback(data);
            if clause.is_null() {
                return None;
            }
            let mut literals = Vec::default();
            let mut index = 0;
            // Safety: the callback returns a zero-terminated clause.
            loop {
                let literal = unsafe { *clause.add(index) };
                if literal == 0 {
                    break;
                }
                literals.push(literal);
                index += 1;
            }
            Some(literals)
        }) as Box<crate::engine::ImportFn>
    });
    handle.solver.set_import(import).into()
}

/// Sets a callback given the literals assigned and unassigned since the last notification.
/// # Safety
/// Recovers a handle from a raw pointer, and stores a pointer to data for use with the callback.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_notify(
    solver: *mut c_void,
    data: *mut c_void,
    callback: Option<
        extern "C" fn(
            data: *mut c_void,
            assigned: *const i32,
            assigned_len: i32,
            unassigned: *const i32,
            unassigned_len: i32,
        ),
    >,
) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };

    let notify = callback.map(|callback| {
        Box::new(move |assigned: &[i32], unassigned: &[i32]| {
            callback(
                data,
                assigned.as_ptr(),
                assigned.len() as i32,
                unassigned.as_ptr(),
                unassigned.len() as i32,
            );
        }) as Box<crate::engine::NotifyFn>
    });
    handle.solver.set_notify(notify).into()
}

/// Writes the number of atoms of the satisfying valuation.
/// # Safety
/// Recovers a handle from a raw pointer, and writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_assignment_size(solver: *mut c_void, result: *mut i32) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    match handle.solver.assignment_size() {
        Ok(size) => {
            std::ptr::write(result, size);
            ipasir2_errorcode::IPASIR2_E_OK
        }
        Err(e) => e.into(),
    }
}

/// Writes the literal of atom `index + 1` which is true on the satisfying valuation.
/// # Safety
/// Recovers a handle from a raw pointer, and writes to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_assignment(solver: *mut c_void, index: i32, result: *mut i32) -> ipasir2_errorcode {
    let Some(handle) = recover(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    match handle.solver.assignment(index) {
        Ok(literal) => {
            std::ptr::write(result, literal);
            ipasir2_errorcode::IPASIR2_E_OK
        }
        Err(e) => e.into(),
    }
}
