//! CLI enum types for the ramp option.

use clap::ValueEnum;

use crate::ascii::Ramp;

/// Initial character ramp, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RampChoice {
    Standard,
    #[default]
    Alpha,
    Symbols,
    Dense,
    Block,
    Minimal,
}

impl From<RampChoice> for Ramp {
    fn from(choice: RampChoice) -> Self {
        match choice {
            RampChoice::Standard => Ramp::Standard,
            RampChoice::Alpha => Ramp::Alpha,
            RampChoice::Symbols => Ramp::Symbols,
            RampChoice::Dense => Ramp::Dense,
            RampChoice::Block => Ramp::Block,
            RampChoice::Minimal => Ramp::Minimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_choice_conversion() {
        assert_eq!(Ramp::from(RampChoice::Standard), Ramp::Standard);
        assert_eq!(Ramp::from(RampChoice::Alpha), Ramp::Alpha);
        assert_eq!(Ramp::from(RampChoice::Block), Ramp::Block);
    }

    #[test]
    fn test_ramp_choice_default() {
        assert_eq!(RampChoice::default(), RampChoice::Alpha);
    }
}
