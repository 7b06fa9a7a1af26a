use {
    std::{
        fmt,
        ops::{Index, IndexMut},
        str::FromStr
    },
    crate::error::{Error, ParseError}
};

/// The six parameter roles every variant picks its inputs from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Acceleration,
    Cap,
    Weight,
    Offset,
    LimitOrExponent,
    Midpoint
}

impl SlotRole {
    pub const ALL: [SlotRole; 6] = [
        SlotRole::Acceleration,
        SlotRole::Cap,
        SlotRole::Weight,
        SlotRole::Offset,
        SlotRole::LimitOrExponent,
        SlotRole::Midpoint
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SlotRole::Acceleration => "acceleration",
            SlotRole::Cap => "cap",
            SlotRole::Weight => "weight",
            SlotRole::Offset => "offset",
            SlotRole::LimitOrExponent => "limit-or-exponent",
            SlotRole::Midpoint => "midpoint"
        }
    }

    const fn position(self) -> usize {
        self as usize
    }

    /// Cap and offset hold a second value the engine reads
    /// in another mode.
    const fn has_alternate(self) -> bool {
        matches!(self, SlotRole::Cap | SlotRole::Offset)
    }

    /// Value held before anything is shown, typed or loaded.
    /// Matches the engine's own defaults.
    const fn initial(self) -> f64 {
        match self {
            SlotRole::Acceleration => 0.,
            SlotRole::Cap => 0.,
            SlotRole::Weight => 1.,
            SlotRole::Offset => 0.,
            SlotRole::LimitOrExponent => 2.,
            SlotRole::Midpoint => 10.
        }
    }
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlotRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotRole::ALL
            .iter()
            .copied()
            .find(|role| role.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSlot(s.into()))
    }
}

/// Which of a slot's two values the editable field refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubValue {
    Primary,
    Alternate
}

impl Default for SubValue {
    fn default() -> Self {
        SubValue::Primary
    }
}

/// Cap mode: gain cap is the primary value, sensitivity (scale) cap the alternate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CapMode {
    Gain,
    Sensitivity
}

/// Offset mode: the current offset is primary, the legacy offset alternate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffsetMode {
    Current,
    Legacy
}

impl From<CapMode> for SubValue {
    fn from(mode: CapMode) -> Self {
        match mode {
            CapMode::Gain => SubValue::Primary,
            CapMode::Sensitivity => SubValue::Alternate
        }
    }
}

impl From<OffsetMode> for SubValue {
    fn from(mode: OffsetMode) -> Self {
        match mode {
            OffsetMode::Current => SubValue::Primary,
            OffsetMode::Legacy => SubValue::Alternate
        }
    }
}

/// A value as typed, along with the number it was read as.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    text: String,
    number: f64
}

impl Field {
    fn parse(role: SlotRole, text: &str) -> Result<Field, ParseError> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|number| Field { text: text.trim().into(), number })
            .ok_or_else(|| ParseError { slot: role, text: text.into() })
    }

    fn from_number(role: SlotRole, number: f64) -> Result<Field, ParseError> {
        if number.is_finite() {
            Ok(Field::exact(number))
        } else {
            Err(ParseError { slot: role, text: number.to_string() })
        }
    }

    fn exact(number: f64) -> Field {
        Field {
            text: number.to_string(),
            number
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> f64 {
        self.number
    }
}

/// One showable parameter input.
///
/// Slots know nothing about variants; a layout turns them on and off.
/// Hiding a slot never clears what it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSlot {
    role: SlotRole,
    label: String,
    primary: Field,
    alternate: Option<Field>,
    selected: SubValue,
    // still showing a layout default, nothing typed or loaded yet
    placeholder: bool,
    visible: bool,
    position: i32
}

impl ParameterSlot {
    pub fn new(role: SlotRole) -> ParameterSlot {
        ParameterSlot {
            role,
            label: String::new(),
            primary: Field::exact(role.initial()),
            alternate: role.has_alternate().then(|| Field::exact(role.initial())),
            selected: <_>::default(),
            placeholder: true,
            visible: false,
            position: 0
        }
    }

    pub fn role(&self) -> SlotRole {
        self.role
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Shows the slot under `label`. `default` only replaces
    /// the value while nothing has been entered yet.
    pub fn set_active(&mut self, label: &str, default: &str) {
        self.visible = true;
        self.label.clear();
        self.label.push_str(label);

        if self.placeholder {
            if let Ok(field) = Field::parse(self.role, default) {
                if let Some(alternate) = &mut self.alternate {
                    *alternate = field.clone();
                }
                self.primary = field;
            }
        }
    }

    pub fn set_inactive(&mut self) {
        self.visible = false
    }

    pub fn set_position(&mut self, y: i32) {
        self.position = y
    }

    /// Text of the value the field currently edits.
    pub fn value(&self) -> &str {
        self.field().text()
    }

    pub fn number(&self) -> f64 {
        self.field().number()
    }

    /// Replaces the value the field currently edits.
    /// Rejected text leaves the slot untouched.
    pub fn set_value(&mut self, text: &str) -> Result<(), ParseError> {
        let field = Field::parse(self.role, text)?;
        *self.field_mut() = field;
        self.placeholder = false;
        Ok(())
    }

    /// Like [`set_value`](Self::set_value) for a number that is already
    /// parsed; non-finite numbers are rejected the same way.
    pub fn set_number(&mut self, number: f64) -> Result<(), ParseError> {
        let field = Field::from_number(self.role, number)?;
        *self.field_mut() = field;
        self.placeholder = false;
        Ok(())
    }

    pub fn selected(&self) -> SubValue {
        self.selected
    }

    /// Switches which value the field edits. Slots without
    /// an alternate value stay on the primary one.
    pub fn select(&mut self, sub: SubValue) {
        if self.alternate.is_some() {
            self.selected = sub
        }
    }

    pub fn primary(&self) -> &Field {
        &self.primary
    }

    pub fn alternate(&self) -> Option<&Field> {
        self.alternate.as_ref()
    }

    pub fn set_primary_number(&mut self, number: f64) -> Result<(), ParseError> {
        self.primary = Field::from_number(self.role, number)?;
        self.placeholder = false;
        Ok(())
    }

    /// Does nothing for slots without an alternate value.
    pub fn set_alternate_number(&mut self, number: f64) -> Result<(), ParseError> {
        let role = self.role;

        if let Some(alternate) = &mut self.alternate {
            *alternate = Field::from_number(role, number)?;
            self.placeholder = false
        }

        Ok(())
    }

    fn field(&self) -> &Field {
        match (self.selected, &self.alternate) {
            (SubValue::Alternate, Some(alternate)) => alternate,
            _ => &self.primary
        }
    }

    fn field_mut(&mut self) -> &mut Field {
        match (self.selected, &mut self.alternate) {
            (SubValue::Alternate, Some(alternate)) => alternate,
            _ => &mut self.primary
        }
    }
}

/// The full set of slots, one per role.
#[derive(Debug, Clone, PartialEq)]
pub struct Slots([ParameterSlot; 6]);

impl Slots {
    pub fn new() -> Slots {
        Slots(SlotRole::ALL.map(ParameterSlot::new))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSlot> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ParameterSlot> {
        self.0.iter_mut()
    }
}

impl Default for Slots {
    fn default() -> Self {
        Slots::new()
    }
}

impl Index<SlotRole> for Slots {
    type Output = ParameterSlot;

    fn index(&self, role: SlotRole) -> &ParameterSlot {
        &self.0[role.position()]
    }
}

impl IndexMut<SlotRole> for Slots {
    fn index_mut(&mut self, role: SlotRole) -> &mut ParameterSlot {
        &mut self.0[role.position()]
    }
}
