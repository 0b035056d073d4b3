/*!
The option gateway, through which every write to an option passes.

A name is resolved through [catalog::lookup], and so:
- A synthetic name becomes a call to [Engine::limit] with the matching kind.
- The name of an exposed native option becomes a call to [Engine::set_option].
- Any other name is unknown, and [ErrorCode::UnsupportedOption] is returned.

Before any call to the engine, the current state is checked against the highest state of the option, and the index is checked against whether the option is indexed.
No option is indexed at present, and indexed options would be reported as [ErrorCode::Unsupported].

The gateway does not check values against the bounds of an option.
Bounds are the concern of the engine, and a value the engine refuses is reported as [ErrorCode::InvalidOptionValue].
*/

use crate::{
    engine::Engine,
    ipasir2::{
        catalog::{self, Target},
        State,
    },
    misc::log::targets,
    types::err::ErrorCode,
};

/// Writes `value` to the option `name` of the engine, if permitted in the given state.
pub fn set_option<E: Engine>(
    engine: &mut E,
    state: State,
    name: &str,
    value: i64,
    index: i64,
) -> Result<(), ErrorCode> {
    let Some((descriptor, target)) = catalog::lookup(&*engine, name) else {
        log::info!(target: targets::GATEWAY, "Unknown option {name}");
        return Err(ErrorCode::UnsupportedOption);
    };

    if !state.within(descriptor.max_state) {
        log::info!(target: targets::GATEWAY, "Option {name} may not be set in state {state}");
        return Err(ErrorCode::InvalidState);
    }

    match descriptor.indexed {
        true => return Err(ErrorCode::Unsupported),
        false if index != 0 => return Err(ErrorCode::InvalidArgument),
        false => {}
    }

    let result = match target {
        Target::Limit(kind) => engine.limit(kind, value),
        Target::Native => engine.set_option(name, value),
    };

    match result {
        Ok(()) => {
            log::trace!(target: targets::GATEWAY, "Set {name} to {value}");
            Ok(())
        }
        Err(e) => {
            log::info!(target: targets::GATEWAY, "Engine refused {value} for {name}: {e:?}");
            Err(e.into())
        }
    }
}
