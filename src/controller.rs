use {
    log::{debug, warn},
    crate::{
        args::AccelArgs,
        catalog::VariantCatalog,
        variant::AccelVariant,
        layout::{Geometry, VariantLayout},
        error::{Error, ParseError, UnknownVariant},
        slot::{CapMode, OffsetMode, ParameterSlot, SlotRole, Slots, SubValue}
    }
};

/// Holds the parameter slots and the selected curve, and translates
/// between them and [`AccelArgs`].
///
/// Not meant to be shared between threads; one per configuration session.
#[derive(Debug)]
pub struct Controller {
    slots: Slots,
    layout: Option<&'static VariantLayout>,
    geometry: Geometry,
    next_top: i32
}

impl Controller {
    pub fn new(geometry: Geometry) -> Controller {
        Controller {
            slots: Slots::new(),
            layout: None,
            geometry,
            next_top: geometry.top
        }
    }

    pub fn select_variant(&mut self, name: &str) -> Result<(), UnknownVariant> {
        let layout = VariantCatalog::get().lookup_by_name(name)?;
        self.apply(layout);
        Ok(())
    }

    /// Switches to the variant with `index` and fills the slots from `args`.
    ///
    /// Values the field would reject when typed (infinities, NaN) fail the
    /// whole load, and nothing changes.
    pub fn load_from_args(&mut self, index: u32, args: &AccelArgs) -> Result<(), Error> {
        let layout = VariantCatalog::get().lookup_by_index(index)?;

        let values = [
            (SlotRole::Acceleration, SubValue::Primary, args.accel),
            (SlotRole::Cap, SubValue::Primary, args.gain_cap),
            (SlotRole::Cap, SubValue::Alternate, args.scale_cap),
            (SlotRole::Weight, SubValue::Primary, args.weight),
            (SlotRole::Offset, SubValue::Primary, args.offset),
            (SlotRole::Offset, SubValue::Alternate, args.legacy_offset),
            (SlotRole::LimitOrExponent, SubValue::Primary, args.exponent),
            (SlotRole::Midpoint, SubValue::Primary, args.midpoint)
        ];

        if let Some(&(slot, _, number)) = values.iter().find(|(_, _, n)| !n.is_finite()) {
            return Err(ParseError { slot, text: number.to_string() }.into())
        }

        self.apply(layout);

        for (role, sub, number) in values {
            let slot = &mut self.slots[role];

            match sub {
                SubValue::Primary => slot.set_primary_number(number)?,
                SubValue::Alternate => slot.set_alternate_number(number)?
            }
        }

        debug!("loaded {} arguments: {:?}", layout.name(), args);

        Ok(())
    }

    /// Reads every slot, shown or not, into a new record.
    pub fn commit(&self) -> AccelArgs {
        let slots = &self.slots;
        let acceleration = slots[SlotRole::Acceleration].number();
        let cap = &slots[SlotRole::Cap];
        let offset = &slots[SlotRole::Offset];
        let limit_or_exponent = slots[SlotRole::LimitOrExponent].number();

        AccelArgs {
            accel: acceleration,
            rate: acceleration,
            power_scale: acceleration,
            gain_cap: cap.primary().number(),
            scale_cap: alternate_number(cap),
            limit: limit_or_exponent,
            exponent: limit_or_exponent,
            power_exponent: limit_or_exponent,
            offset: offset.primary().number(),
            legacy_offset: alternate_number(offset),
            midpoint: slots[SlotRole::Midpoint].number(),
            weight: slots[SlotRole::Weight].number()
        }
    }

    /// Sets the value a slot's field currently edits.
    pub fn edit(&mut self, role: SlotRole, text: &str) -> Result<(), ParseError> {
        self.slots[role]
            .set_value(text)
            .map_err(|e| {
                warn!("{}", e);
                e
            })
    }

    pub fn set_cap_mode(&mut self, mode: CapMode) {
        self.slots[SlotRole::Cap].select(mode.into())
    }

    pub fn set_offset_mode(&mut self, mode: OffsetMode) {
        self.slots[SlotRole::Offset].select(mode.into())
    }

    pub fn current_variant(&self) -> Option<AccelVariant> {
        self.layout.map(VariantLayout::variant)
    }

    pub fn current_variant_index(&self) -> Option<u32> {
        self.layout.map(VariantLayout::index)
    }

    pub fn slot(&self, role: SlotRole) -> &ParameterSlot {
        &self.slots[role]
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Shown slots, top to bottom.
    pub fn active_slots(&self) -> impl Iterator<Item = &ParameterSlot> {
        let slots = &self.slots;

        self.layout
            .map(VariantLayout::slots)
            .unwrap_or_default()
            .iter()
            .map(move |layout| &slots[layout.role])
    }

    /// The y below the last shown row, where the next control goes.
    pub fn next_top(&self) -> i32 {
        self.next_top
    }

    /// Moves the first row to `top` and lays the current variant out again.
    pub fn set_top(&mut self, top: i32) {
        self.geometry.top = top;

        match self.layout {
            Some(layout) => self.apply(layout),
            None => self.next_top = top
        }
    }

    fn apply(&mut self, layout: &'static VariantLayout) {
        self.next_top = layout.apply(&mut self.slots, self.geometry.top, self.geometry.spacing);

        if self.current_variant() != Some(layout.variant()) {
            debug!("acceleration type = {} ({})", layout.name(), layout.index());
        }

        self.layout = Some(layout)
    }
}

fn alternate_number(slot: &ParameterSlot) -> f64 {
    slot.alternate()
        .map(|field| field.number())
        .unwrap_or_default()
}
