use thiserror::Error;

use crate::{Fact, Mask};

/// Configuration errors, rejected before the control loop ever runs.
///
/// Planning and execution anomalies (unsatisfiable goals, runtime failures)
/// are not errors; they are ordinary results absorbed by the agent loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("action `{action}` has a non-finite cost")]
    NonFiniteCost { action: &'static str },

    #[error("action `{action}` has a negative cost ({cost})")]
    NegativeCost { action: &'static str, cost: f32 },

    #[error("fact `{fact}` ordinal {ordinal} exceeds the {width}-bit state width")]
    FactOverflow {
        fact: &'static str,
        ordinal: u32,
        width: u32,
    },

    #[error("facts `{first}` and `{second}` share bit {ordinal}")]
    DuplicateFactBit {
        first: &'static str,
        second: &'static str,
        ordinal: u32,
    },

    #[error("replan interval must be a non-negative number of seconds ({seconds})")]
    InvalidReplanInterval { seconds: f32 },
}

/// Check that a fact enumeration fits the state width and that no two facts
/// share a bit.
pub fn validate_fact_space<F: Fact>() -> Result<(), ConfigError> {
    let width = Mask::BITS;
    let mut owners: [Option<&'static str>; Mask::BITS as usize] = [None; Mask::BITS as usize];

    for &fact in F::ALL {
        let ordinal = fact.ordinal();
        if ordinal >= width {
            return Err(ConfigError::FactOverflow {
                fact: fact.name(),
                ordinal,
                width,
            });
        }
        if let Some(first) = owners[ordinal as usize] {
            return Err(ConfigError::DuplicateFactBit {
                first,
                second: fact.name(),
                ordinal,
            });
        }
        owners[ordinal as usize] = Some(fact.name());
    }

    Ok(())
}
