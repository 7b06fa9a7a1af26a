use {
    serde::Deserialize,
    crate::{
        variant::AccelVariant,
        slot::{SlotRole, Slots}
    }
};

/// How one slot appears in a variant's form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    pub role: SlotRole,
    pub label: &'static str,
    pub default: &'static str
}

const fn slot(role: SlotRole, label: &'static str, default: &'static str) -> SlotLayout {
    SlotLayout { role, label, default }
}

const ACCELERATION: SlotLayout = slot(SlotRole::Acceleration, "Acceleration", "0");
const SCALE: SlotLayout = slot(SlotRole::Acceleration, "Scale", "1");
const CAP: SlotLayout = slot(SlotRole::Cap, "Cap", "0");
const WEIGHT: SlotLayout = slot(SlotRole::Weight, "Weight", "1");
const OFFSET: SlotLayout = slot(SlotRole::Offset, "Offset", "0");
const EXPONENT: SlotLayout = slot(SlotRole::LimitOrExponent, "Exponent", "2");
const LIMIT: SlotLayout = slot(SlotRole::LimitOrExponent, "Limit", "2");
const MIDPOINT: SlotLayout = slot(SlotRole::Midpoint, "Midpoint", "10");

/// Which slots each variant shows, top to bottom.
fn table(variant: AccelVariant) -> &'static [SlotLayout] {
    match variant {
        AccelVariant::Linear => &[ACCELERATION],
        AccelVariant::Classic => &[ACCELERATION, CAP, WEIGHT, OFFSET, EXPONENT],
        AccelVariant::Natural => &[ACCELERATION, OFFSET, LIMIT],
        AccelVariant::Power => &[SCALE, CAP, WEIGHT, OFFSET, EXPONENT],
        AccelVariant::NaturalGain => &[ACCELERATION, OFFSET, LIMIT, MIDPOINT],
        AccelVariant::SigmoidGain => &[ACCELERATION, OFFSET, LIMIT, MIDPOINT],
        AccelVariant::Off => &[]
    }
}

/// Vertical placement of the parameter rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// y of the first row
    pub top: i32,
    /// distance between consecutive rows
    pub spacing: i32
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            top: 0,
            spacing: 30
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VariantLayout {
    variant: AccelVariant,
    slots: &'static [SlotLayout]
}

impl VariantLayout {
    pub fn new(variant: AccelVariant) -> VariantLayout {
        VariantLayout {
            variant,
            slots: table(variant)
        }
    }

    pub fn variant(&self) -> AccelVariant {
        self.variant
    }

    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    pub fn index(&self) -> u32 {
        self.variant.index()
    }

    pub fn slots(&self) -> &'static [SlotLayout] {
        self.slots
    }

    pub fn is_active(&self, role: SlotRole) -> bool {
        self.slot(role).is_some()
    }

    pub fn slot(&self, role: SlotRole) -> Option<&'static SlotLayout> {
        self.slots.iter().find(|slot| slot.role == role)
    }

    /// Shows and stacks this variant's slots starting at `top`,
    /// hides the rest. Returns the y just below the last row.
    /// Positions saturate at the ends of the `i32` range.
    pub fn apply(&self, slots: &mut Slots, top: i32, spacing: i32) -> i32 {
        let mut y = top;

        for layout in self.slots {
            let slot = &mut slots[layout.role];
            slot.set_active(layout.label, layout.default);
            slot.set_position(y);
            y = y.saturating_add(spacing);
        }

        slots
            .iter_mut()
            .filter(|slot| !self.is_active(slot.role()))
            .for_each(|slot| slot.set_inactive());

        y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn visible(slots: &Slots) -> Vec<(SlotRole, i32)> {
        let mut visible = slots
            .iter()
            .filter(|slot| slot.is_visible())
            .map(|slot| (slot.role(), slot.position()))
            .collect::<Vec<_>>();
        visible.sort_by_key(|(_, y)| *y);
        visible
    }

    #[test]
    fn classic() {
        let mut slots = Slots::new();
        let next = VariantLayout::new(AccelVariant::Classic).apply(&mut slots, 100, 30);

        assert_eq!(next, 250);
        assert_eq!(visible(&slots), [
            (SlotRole::Acceleration, 100),
            (SlotRole::Cap, 130),
            (SlotRole::Weight, 160),
            (SlotRole::Offset, 190),
            (SlotRole::LimitOrExponent, 220)
        ]);
        assert_eq!(slots[SlotRole::LimitOrExponent].label(), "Exponent");
        assert!(!slots[SlotRole::Midpoint].is_visible())
    }

    #[test]
    fn off_hides_everything() {
        let mut slots = Slots::new();
        VariantLayout::new(AccelVariant::Classic).apply(&mut slots, 0, 30);
        let next = VariantLayout::new(AccelVariant::Off).apply(&mut slots, 40, 30);

        assert_eq!(next, 40);
        assert!(visible(&slots).is_empty())
    }

    #[test]
    fn rows_near_the_end_of_the_range() {
        let mut slots = Slots::new();
        let top = i32::MAX - 40;
        let next = VariantLayout::new(AccelVariant::Classic).apply(&mut slots, top, 30);

        assert_eq!(next, i32::MAX);
        assert_eq!(visible(&slots).len(), 5);
        assert_eq!(slots[SlotRole::Acceleration].position(), top);
        assert_eq!(slots[SlotRole::Cap].position(), top + 30);
        assert_eq!(slots[SlotRole::Weight].position(), i32::MAX);
        assert_eq!(slots[SlotRole::LimitOrExponent].position(), i32::MAX)
    }

    #[test]
    fn negative_spacing_stops_at_minimum() {
        let mut slots = Slots::new();
        let next = VariantLayout::new(AccelVariant::Natural).apply(&mut slots, i32::MIN + 10, -20);

        assert_eq!(next, i32::MIN);
        assert_eq!(slots[SlotRole::Offset].position(), i32::MIN)
    }

    #[test]
    fn labels_follow_variant() {
        let mut slots = Slots::new();

        VariantLayout::new(AccelVariant::Power).apply(&mut slots, 0, 30);
        assert_eq!(slots[SlotRole::Acceleration].label(), "Scale");
        assert_eq!(slots[SlotRole::Acceleration].value(), "1");

        VariantLayout::new(AccelVariant::Natural).apply(&mut slots, 0, 30);
        assert_eq!(slots[SlotRole::Acceleration].label(), "Acceleration");
        assert_eq!(slots[SlotRole::Acceleration].value(), "0");
        assert_eq!(slots[SlotRole::LimitOrExponent].label(), "Limit")
    }

    #[test]
    fn every_slot_once_per_variant() {
        for variant in AccelVariant::ALL {
            let layout = VariantLayout::new(variant);

            for role in SlotRole::ALL {
                let count = layout.slots().iter().filter(|s| s.role == role).count();
                assert!(count <= 1, "{} lists {} twice", variant, role)
            }
        }
    }
}
