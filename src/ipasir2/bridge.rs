/*!
The callback bridge, registering callbacks of a handle with the engine.

Each hook holds at most one callback.
Registering a callback replaces any callback already registered, and registering `None` clears the hook.

- Terminate is always supported, and polled by the engine during a solve.
- Export is supported through the learn callback of the engine.
  The bound on the length of an exported clause is checked before anything is given to the engine, and a negative bound is refused with [ErrorCode::UnsupportedArgument].
- Import and notify are passed to the engine, and the reference engine refuses both with [ErrorCode::Unsupported].
  Refusal leaves any registration as it was.

[supports] states whether a hook is supported, without registering anything.
*/

use crate::{
    engine::{Engine, ImportFn, LearnFn, NotifyFn, TerminateFn},
    misc::log::targets,
    types::err::ErrorCode,
};

/// The callback hooks of a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    Terminate,
    Export,
    Import,
    Notify,
}

/// Whether the engine supports the given hook.
pub fn supports<E: Engine>(engine: &E, hook: Hook) -> bool {
    match hook {
        Hook::Terminate | Hook::Export => true,
        Hook::Import => engine.offers_import(),
        Hook::Notify => engine.offers_notify(),
    }
}

pub fn register_terminate<E: Engine>(engine: &mut E, callback: Option<Box<TerminateFn>>) {
    log::trace!(target: targets::BRIDGE, "Terminate callback set: {}", callback.is_some());
    engine.set_terminate(callback);
}

pub fn register_export<E: Engine>(
    engine: &mut E,
    max_length: i32,
    callback: Option<Box<LearnFn>>,
) -> Result<(), ErrorCode> {
    let Ok(max_length) = usize::try_from(max_length) else {
        log::info!(target: targets::BRIDGE, "Refused export bound {max_length}");
        return Err(ErrorCode::UnsupportedArgument);
    };
    log::trace!(target: targets::BRIDGE, "Export callback set: {}, bound {max_length}", callback.is_some());
    engine.set_learn(max_length, callback);
    Ok(())
}

pub fn register_import<E: Engine>(engine: &mut E, callback: Option<Box<ImportFn>>) -> Result<(), ErrorCode> {
    engine.set_import(callback).map_err(|e| {
        log::info!(target: targets::BRIDGE, "Import refused: {e:?}");
        ErrorCode::from(e)
    })
}

pub fn register_notify<E: Engine>(engine: &mut E, callback: Option<Box<NotifyFn>>) -> Result<(), ErrorCode> {
    engine.set_notify(callback).map_err(|e| {
        log::info!(target: targets::BRIDGE, "Notify refused: {e:?}");
        ErrorCode::from(e)
    })
}
