use std::fmt;

/// The acceleration curves the engine understands.
///
/// [`AccelVariant::index`] is the engine's mode number and is what gets
/// persisted; the display name is only a label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AccelVariant {
    Linear,
    Classic,
    Natural,
    Power,
    NaturalGain,
    SigmoidGain,
    Off
}

impl AccelVariant {
    /// All variants in the order they are offered for selection.
    pub const ALL: [AccelVariant; 7] = [
        AccelVariant::Linear,
        AccelVariant::Classic,
        AccelVariant::Natural,
        AccelVariant::Power,
        AccelVariant::NaturalGain,
        AccelVariant::SigmoidGain,
        AccelVariant::Off
    ];

    pub const fn index(self) -> u32 {
        match self {
            AccelVariant::Linear => 0,
            AccelVariant::Classic => 1,
            AccelVariant::Natural => 2,
            AccelVariant::NaturalGain => 3,
            AccelVariant::SigmoidGain => 4,
            AccelVariant::Power => 5,
            AccelVariant::Off => 6
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AccelVariant::Linear => "Linear",
            AccelVariant::Classic => "Classic",
            AccelVariant::Natural => "Natural",
            AccelVariant::Power => "Power",
            AccelVariant::NaturalGain => "NaturalGain",
            AccelVariant::SigmoidGain => "SigmoidGain",
            AccelVariant::Off => "Off"
        }
    }

    pub fn from_index(index: u32) -> Option<AccelVariant> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.index() == index)
    }
}

impl fmt::Display for AccelVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
