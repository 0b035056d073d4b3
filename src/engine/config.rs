/*!
Configuration of the reference engine.

Each option is a [ConfigOption], a value together with the bounds the engine accepts.
The static [NATIVE_OPTIONS] table is the native registry exposed through [Engine::options](crate::engine::Engine::options), and fresh configurations take their values from the table defaults.

The adapter sets options by name, through [EngineConfig::set].
Values outside the bounds of an option are rejected rather than clamped.
*/

use crate::{engine::NativeOption, types::err::EngineError};

/// An option of the reference engine.
#[derive(Clone, Debug)]
pub struct ConfigOption {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

impl ConfigOption {
    pub fn min_max(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    fn from_native(native: &NativeOption) -> Self {
        ConfigOption {
            name: native.name,
            min: native.lo,
            max: native.hi,
            value: native.default,
        }
    }
}

/// The native registry of the reference engine, in registry order.
pub static NATIVE_OPTIONS: [NativeOption; 8] = [
    NativeOption {
        name: "seed",
        lo: 0,
        hi: i32::MAX as i64,
        default: 0,
        optimizable: true,
        configuration_only: true,
    },
    NativeOption {
        name: "phase",
        lo: 0,
        hi: 1,
        default: 1,
        optimizable: true,
        configuration_only: false,
    },
    NativeOption {
        name: "phasesaving",
        lo: 0,
        hi: 1,
        default: 1,
        optimizable: true,
        configuration_only: false,
    },
    NativeOption {
        name: "randomfreq",
        lo: 0,
        hi: 1000,
        default: 0,
        optimizable: true,
        configuration_only: false,
    },
    NativeOption {
        name: "restart",
        lo: 0,
        hi: 1,
        default: 1,
        optimizable: true,
        configuration_only: false,
    },
    NativeOption {
        name: "restartint",
        lo: 1,
        hi: 1_000_000,
        default: 64,
        optimizable: true,
        configuration_only: false,
    },
    NativeOption {
        name: "decay",
        lo: 500,
        hi: 999,
        default: 950,
        optimizable: true,
        configuration_only: false,
    },
    NativeOption {
        name: "check",
        lo: 0,
        hi: 1,
        default: 0,
        optimizable: false,
        configuration_only: false,
    },
];

/// The primary configuration structure of the reference engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Seed of the source of randomness.
    pub seed: ConfigOption,

    /// The polarity of a decision on an atom without a saved phase, with `1` for true.
    pub phase: ConfigOption,

    /// Default to the last value of an atom when choosing a value for the atom.
    pub phase_saving: ConfigOption,

    /// Chance, per thousand, of deciding on a random atom rather than the most active atom.
    pub random_frequency: ConfigOption,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption,

    /// The number of conflicts to multiply the luby sequence by when scheduling restarts.
    pub restart_interval: ConfigOption,

    /// Decay of atom activity, per thousand.
    pub decay: ConfigOption,

    /// Check each satisfying valuation against the clauses added.
    pub check: ConfigOption,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let [seed, phase, phase_saving, random_frequency, restart, restart_interval, decay, check] =
            NATIVE_OPTIONS.each_ref().map(ConfigOption::from_native);
        EngineConfig {
            seed,
            phase,
            phase_saving,
            random_frequency,
            restart,
            restart_interval,
            decay,
            check,
        }
    }
}

impl EngineConfig {
    fn option(&self, name: &str) -> Option<&ConfigOption> {
        [
            &self.seed,
            &self.phase,
            &self.phase_saving,
            &self.random_frequency,
            &self.restart,
            &self.restart_interval,
            &self.decay,
            &self.check,
        ]
        .into_iter()
        .find(|option| option.name == name)
    }

    fn option_mut(&mut self, name: &str) -> Option<&mut ConfigOption> {
        [
            &mut self.seed,
            &mut self.phase,
            &mut self.phase_saving,
            &mut self.random_frequency,
            &mut self.restart,
            &mut self.restart_interval,
            &mut self.decay,
            &mut self.check,
        ]
        .into_iter()
        .find(|option| option.name == name)
    }

    /// Sets the option with the given name, if the value is within bounds.
    pub fn set(&mut self, name: &str, value: i64) -> Result<(), EngineError> {
        let option = self.option_mut(name).ok_or(EngineError::UnknownOption)?;
        let (min, max) = option.min_max();
        if value < min || max < value {
            return Err(EngineError::InvalidValue);
        }
        option.value = value;
        Ok(())
    }

    /// The value of the option with the given name.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.option(name).map(|option| option.value)
    }
}
