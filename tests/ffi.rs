use std::ffi::{c_char, c_int, c_void, CStr, CString};

use ipasir2_adapter::ffi::*;

use ipasir2_adapter::ffi::ipasir2_errorcode::*;

unsafe fn init() -> *mut c_void {
    let mut solver = std::ptr::null_mut();
    assert_eq!(ipasir2_init(&mut solver), IPASIR2_E_OK);
    assert!(!solver.is_null());
    solver
}

unsafe fn add_clause(solver: *mut c_void, clause: &[i32]) {
    for &literal in clause {
        assert_eq!(ipasir2_add(solver, literal), IPASIR2_E_OK);
    }
    assert_eq!(ipasir2_add(solver, 0), IPASIR2_E_OK);
}

unsafe fn solve(solver: *mut c_void) -> c_int {
    let mut result = -1;
    assert_eq!(ipasir2_solve(solver, &mut result), IPASIR2_E_OK);
    result
}

mod handles {
    use super::*;

    #[test]
    fn signature() {
        unsafe {
            let mut signature: *const c_char = std::ptr::null();
            assert_eq!(ipasir2_signature(&mut signature), IPASIR2_E_OK);
            let signature = CStr::from_ptr(signature).to_str().unwrap();
            assert!(signature.starts_with("ipasir2_adapter"));
        }
    }

    #[test]
    fn null_pointers() {
        unsafe {
            let null = std::ptr::null_mut();
            assert_eq!(ipasir2_add(null, 1), IPASIR2_E_INVALID_ARGUMENT);
            assert_eq!(ipasir2_release(null), IPASIR2_E_INVALID_ARGUMENT);
            assert_eq!(ipasir2_init(std::ptr::null_mut()), IPASIR2_E_INVALID_ARGUMENT);

            let solver = init();
            assert_eq!(ipasir2_solve(solver, std::ptr::null_mut()), IPASIR2_E_INVALID_ARGUMENT);
            assert_eq!(ipasir2_options(solver, std::ptr::null_mut()), IPASIR2_E_INVALID_ARGUMENT);
            assert_eq!(
                ipasir2_set_option(solver, std::ptr::null(), 0, 0),
                IPASIR2_E_INVALID_ARGUMENT
            );
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);
        }
    }
}

mod options {
    use super::*;

    unsafe fn names(solver: *mut c_void) -> Vec<String> {
        let mut options: *const ipasir2_option = std::ptr::null();
        assert_eq!(ipasir2_options(solver, &mut options), IPASIR2_E_OK);

        let mut names = Vec::default();
        let mut index = 0;
        loop {
            let option = &*options.add(index);
            if option.name.is_null() {
                assert_eq!(option.min, 0);
                assert_eq!(option.max, 0);
                break;
            }
            names.push(CStr::from_ptr(option.name).to_str().unwrap().to_string());
            index += 1;
        }
        names
    }

    #[test]
    fn sentinel_terminated() {
        unsafe {
            let solver = init();
            let first = names(solver);
            let second = names(solver);
            assert_eq!(first, second);
            assert_eq!(first[0], "ipasir.limits.decisions");
            assert_eq!(first[1], "ipasir.limits.conflicts");
            assert!(first.iter().any(|name| name == "seed"));
            assert!(!first.iter().any(|name| name == "check"));
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);
        }
    }

    #[test]
    fn set_by_name() {
        unsafe {
            let solver = init();
            let limit = CString::new("ipasir.limits.decisions").unwrap();
            let unknown = CString::new("nope").unwrap();

            assert_eq!(ipasir2_set_option(solver, limit.as_ptr(), 0, 0), IPASIR2_E_OK);
            assert_eq!(
                ipasir2_set_option(solver, unknown.as_ptr(), 0, 0),
                IPASIR2_E_UNSUPPORTED_OPTION
            );
            assert_eq!(
                ipasir2_set_option(solver, limit.as_ptr(), 0, 3),
                IPASIR2_E_INVALID_ARGUMENT
            );

            add_clause(solver, &[1, 2]);
            assert_eq!(solve(solver), 0);

            assert_eq!(ipasir2_set_option(solver, limit.as_ptr(), -1, 0), IPASIR2_E_OK);
            assert_eq!(solve(solver), 10);
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);
        }
    }
}

mod solving {
    use super::*;

    #[test]
    fn values_and_failed() {
        unsafe {
            let solver = init();
            let mut value = 0;
            assert_eq!(ipasir2_val(solver, 1, &mut value), IPASIR2_E_INVALID_STATE);
            assert_eq!(ipasir2_solve(solver, &mut value), IPASIR2_E_INVALID_STATE);

            add_clause(solver, &[1, 2]);
            add_clause(solver, &[-1]);
            assert_eq!(solve(solver), 10);

            assert_eq!(ipasir2_val(solver, 1, &mut value), IPASIR2_E_OK);
            assert_eq!(value, -1);
            assert_eq!(ipasir2_val(solver, -2, &mut value), IPASIR2_E_OK);
            assert_eq!(value, 2);

            let mut size = 0;
            assert_eq!(ipasir2_assignment_size(solver, &mut size), IPASIR2_E_OK);
            assert_eq!(size, 2);
            assert_eq!(ipasir2_assignment(solver, 1, &mut value), IPASIR2_E_OK);
            assert_eq!(value, 2);

            assert_eq!(ipasir2_assume(solver, -2), IPASIR2_E_OK);
            assert_eq!(solve(solver), 20);

            let mut failed = 0;
            assert_eq!(ipasir2_failed(solver, -2, &mut failed), IPASIR2_E_OK);
            assert_eq!(failed, 1);
            assert_eq!(ipasir2_val(solver, 1, &mut value), IPASIR2_E_INVALID_STATE);

            assert_eq!(ipasir2_add(solver, i32::MIN), IPASIR2_E_INVALID_ARGUMENT);
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);
        }
    }
}

mod callbacks {
    use super::*;

    extern "C" fn always_terminate(_data: *mut c_void) -> c_int {
        1
    }

    extern "C" fn note_length(data: *mut c_void, clause: *const i32, len: i32) {
        let lengths = unsafe { &mut *(data as *mut Vec<i32>) };
        let terminator = unsafe { *clause.add(len as usize) };
        assert_eq!(terminator, 0);
        lengths.push(len);
    }

    extern "C" fn no_import(_data: *mut c_void) -> *const i32 {
        std::ptr::null()
    }

    unsafe fn pigeonhole(solver: *mut c_void) {
        let atom = |pigeon: i32, hole: i32| pigeon * 3 + hole + 1;
        for pigeon in 0..4 {
            add_clause(solver, &[atom(pigeon, 0), atom(pigeon, 1), atom(pigeon, 2)]);
        }
        for hole in 0..3 {
            for a in 0..4 {
                for b in (a + 1)..4 {
                    add_clause(solver, &[-atom(a, hole), -atom(b, hole)]);
                }
            }
        }
    }

    #[test]
    fn terminate() {
        unsafe {
            let solver = init();
            pigeonhole(solver);
            assert_eq!(
                ipasir2_set_terminate(solver, std::ptr::null_mut(), Some(always_terminate)),
                IPASIR2_E_OK
            );
            assert_eq!(solve(solver), 0);

            assert_eq!(ipasir2_set_terminate(solver, std::ptr::null_mut(), None), IPASIR2_E_OK);
            assert_eq!(solve(solver), 20);
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);
        }
    }

    #[test]
    fn export() {
        unsafe {
            let solver = init();
            let mut lengths: Vec<i32> = Vec::default();
            let data = &mut lengths as *mut Vec<i32> as *mut c_void;

            assert_eq!(
                ipasir2_set_export(solver, data, -1, Some(note_length)),
                IPASIR2_E_UNSUPPORTED_ARGUMENT
            );
            assert_eq!(ipasir2_set_export(solver, data, 3, Some(note_length)), IPASIR2_E_OK);

            pigeonhole(solver);
            assert_eq!(solve(solver), 20);
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);

            assert!(lengths.iter().all(|&length| (1..=3).contains(&length)));
        }
    }

    #[test]
    fn unsupported() {
        unsafe {
            let solver = init();
            assert_eq!(
                ipasir2_set_import(solver, std::ptr::null_mut(), Some(no_import)),
                IPASIR2_E_UNSUPPORTED
            );
            assert_eq!(
                ipasir2_set_notify(solver, std::ptr::null_mut(), None),
                IPASIR2_E_UNSUPPORTED
            );
            assert_eq!(ipasir2_release(solver), IPASIR2_E_OK);
        }
    }
}
