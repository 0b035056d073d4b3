/*!
The capability catalog, listing each option which may be set through a handle.

A catalog is built afresh on each request, from two sources:

1. Synthetic options, implemented by the adapter as resource limits of the engine.
   At present, `ipasir.limits.decisions` and `ipasir.limits.conflicts`.
2. Each option of the native registry of the engine which the engine marks as optimizable, in registry order.

Synthetic options always come first, and a native option with the name of a synthetic option is not listed.
No other native option is listed, and so no other native option may be set.

[lookup] resolves a single name with the same precedence, and is used by both [Solver::option](crate::ipasir2::Solver::option) and the [gateway](crate::ipasir2::gateway).

# Allocation

The storage of a catalog is reserved before any descriptor is written.
If the reservation fails [ErrorCode::Unknown] is returned, and no partial catalog is ever observed.
*/

use crate::{
    engine::{Engine, NativeOption},
    ipasir2::State,
    misc::log::targets,
    types::err::ErrorCode,
};

/// A description of an option which may be set through a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// The name of the option, unique within a catalog.
    pub name: &'static str,

    /// The smallest value intended for the option.
    pub min: i64,

    /// The largest value intended for the option.
    pub max: i64,

    /// The highest state in which the option may be set.
    pub max_state: State,

    /// Whether the option is eligible for use by automatic tuners.
    pub tunable: bool,

    /// Whether the option may be set per atom.
    pub indexed: bool,
}

/// Where a write to an option is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A resource limit of the engine, of the given kind.
    Limit(&'static str),

    /// An option of the native registry, with the same name.
    Native,
}

/// Synthetic options, paired with the kind of limit each sets.
pub static SYNTHETIC_OPTIONS: [(OptionDescriptor, &str); 2] = [
    (
        OptionDescriptor {
            name: "ipasir.limits.decisions",
            min: -1,
            max: i32::MAX as i64,
            max_state: State::Unsat,
            tunable: false,
            indexed: false,
        },
        "decisions",
    ),
    (
        OptionDescriptor {
            name: "ipasir.limits.conflicts",
            min: -1,
            max: i32::MAX as i64,
            max_state: State::Unsat,
            tunable: false,
            indexed: false,
        },
        "conflicts",
    ),
];

/// Whether the name is taken by a synthetic option.
pub fn is_synthetic(name: &str) -> bool {
    SYNTHETIC_OPTIONS.iter().any(|(descriptor, _)| descriptor.name == name)
}

impl OptionDescriptor {
    /// The descriptor of a native option.
    ///
    /// Options the engine restricts to configuration may only be set in [State::Config], and otherwise options may be set until a solve.
    pub fn from_native(native: &NativeOption) -> Self {
        OptionDescriptor {
            name: native.name,
            min: native.lo,
            max: native.hi,
            max_state: match native.configuration_only {
                true => State::Config,
                false => State::Input,
            },
            tunable: native.optimizable,
            indexed: false,
        }
    }
}

/// The native options of an engine which are exposed through a catalog.
fn exposed<E: Engine>(engine: &E) -> impl Iterator<Item = &NativeOption> {
    engine
        .options()
        .iter()
        .filter(|native| native.optimizable && !is_synthetic(native.name))
}

/// The descriptor for the given name, together with the target of writes to the option, if the option is in the catalog.
pub fn lookup<E: Engine>(engine: &E, name: &str) -> Option<(OptionDescriptor, Target)> {
    if let Some((descriptor, kind)) = SYNTHETIC_OPTIONS.iter().find(|(descriptor, _)| descriptor.name == name) {
        return Some((*descriptor, Target::Limit(*kind)));
    }

    exposed(engine)
        .find(|native| native.name == name)
        .map(|native| (OptionDescriptor::from_native(native), Target::Native))
}

/// An ordered list of option descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<OptionDescriptor>,
}

impl Catalog {
    /// Builds the catalog of the given engine.
    pub fn build<E: Engine>(engine: &E) -> Result<Self, ErrorCode> {
        let count = SYNTHETIC_OPTIONS.len() + exposed(engine).count();

        let mut options = Vec::default();
        if options.try_reserve_exact(count).is_err() {
            log::error!(target: targets::CATALOG, "Failed to reserve a catalog of {count} options");
            return Err(ErrorCode::Unknown);
        }

        options.extend(SYNTHETIC_OPTIONS.iter().map(|(descriptor, _)| *descriptor));
        options.extend(exposed(engine).map(OptionDescriptor::from_native));

        log::trace!(target: targets::CATALOG, "Built a catalog of {count} options");
        Ok(Catalog { options })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> {
        self.options.iter()
    }

    pub fn as_slice(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// The descriptor of the option with the given name, if listed.
    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|descriptor| descriptor.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a OptionDescriptor;
    type IntoIter = std::slice::Iter<'a, OptionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
