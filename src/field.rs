//! Field identifiers and the read/change sets built from them.

use bitflags::bitflags;

/// An observable field of [`AppState`](crate::AppState).
///
/// `Count` and `Name` are stored; `Message` is derived from both and is never
/// stored on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Count,
    Name,
    Message,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 3] = [Field::Count, Field::Name, Field::Message];

    /// The field's single-bit set.
    pub const fn set(self) -> FieldSet {
        match self {
            Field::Count => FieldSet::COUNT,
            Field::Name => FieldSet::NAME,
            Field::Message => FieldSet::MESSAGE,
        }
    }
}

bitflags! {
    /// A set of [`Field`]s.
    ///
    /// Used both as the read set of a dependent (the fields it looked at while
    /// rendering) and as the change set of a mutation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldSet: u8 {
        const COUNT = 1;
        const NAME = 1 << 1;
        const MESSAGE = 1 << 2;
    }
}

impl FieldSet {
    /// Expand a set of written base fields with every derived field computed
    /// from them.
    ///
    /// ```rust
    /// use oxide_state::FieldSet;
    ///
    /// let affected = FieldSet::affected_by(FieldSet::COUNT);
    /// assert_eq!(affected, FieldSet::COUNT | FieldSet::MESSAGE);
    /// ```
    pub fn affected_by(changed: FieldSet) -> FieldSet {
        if changed.intersects(FieldSet::COUNT | FieldSet::NAME) {
            changed | FieldSet::MESSAGE
        } else {
            changed
        }
    }

    /// Iterate the fields in this set, in declaration order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL
            .into_iter()
            .filter(move |field| self.contains(field.set()))
    }
}

impl From<Field> for FieldSet {
    fn from(field: Field) -> Self {
        field.set()
    }
}
