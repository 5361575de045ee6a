use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

bitflags::bitflags! {
    /// Bit set describing the array shape of a property an alias resolves into.
    ///
    /// The bit layout mirrors the wire-level property options of the metadata
    /// format, so values survive round trips through serialized option words.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PropertyFlags: u32 {
        /// The actual property is an array.
        const VALUE_IS_ARRAY = 1 << 9;
        /// The array is ordered (a `seq`).
        const ARRAY_IS_ORDERED = 1 << 10;
        /// The array holds alternates (an `alt`).
        const ARRAY_IS_ALTERNATE = 1 << 11;
        /// The alternates are language-tagged text items.
        const ARRAY_IS_ALT_TEXT = 1 << 12;
    }
}

impl Serialize for PropertyFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for PropertyFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// How an alias relates to its actual property.
///
/// A direct alias and its actual share the same shape. The two array forms
/// cover the cases where a simple alias name stands for a single item inside
/// a top-level array on the actual side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrayForm {
    /// No array involved; alias and actual have the same form.
    #[default]
    Direct,
    /// The actual is the first item of an ordered top-level array.
    ArrayFirstItem,
    /// The actual is the default-language item of an alternate-text array.
    AltTextDefaultItem,
}

impl ArrayForm {
    /// The property option bits implied by this form.
    #[must_use]
    pub const fn flags(self) -> PropertyFlags {
        match self {
            Self::Direct => PropertyFlags::empty(),
            Self::ArrayFirstItem => {
                PropertyFlags::VALUE_IS_ARRAY.union(PropertyFlags::ARRAY_IS_ORDERED)
            },
            Self::AltTextDefaultItem => PropertyFlags::VALUE_IS_ARRAY
                .union(PropertyFlags::ARRAY_IS_ORDERED)
                .union(PropertyFlags::ARRAY_IS_ALTERNATE)
                .union(PropertyFlags::ARRAY_IS_ALT_TEXT),
        }
    }

    /// Whether the alias points into an array at all.
    #[must_use]
    pub const fn is_array_item(self) -> bool {
        !matches!(self, Self::Direct)
    }
}

impl From<ArrayForm> for PropertyFlags {
    fn from(form: ArrayForm) -> Self {
        form.flags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_form_has_no_flags() {
        assert_eq!(ArrayForm::Direct.flags(), PropertyFlags::empty());
        assert!(!ArrayForm::Direct.is_array_item());
    }

    #[test]
    fn alt_text_form_implies_ordered_alternate_array() {
        let flags = ArrayForm::AltTextDefaultItem.flags();
        assert!(flags.contains(PropertyFlags::VALUE_IS_ARRAY));
        assert!(flags.contains(PropertyFlags::ARRAY_IS_ORDERED));
        assert!(flags.contains(PropertyFlags::ARRAY_IS_ALTERNATE));
        assert!(flags.contains(PropertyFlags::ARRAY_IS_ALT_TEXT));
    }

    #[test]
    fn flags_round_trip_through_bits() {
        let flags = ArrayForm::ArrayFirstItem.flags();
        assert_eq!(PropertyFlags::from_bits_retain(flags.bits()), flags);
    }
}
