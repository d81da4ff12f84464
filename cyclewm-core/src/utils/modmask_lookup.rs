use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Any = 1;
        const Shift = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

/// Modifiers that take part in key binding lookups.
const BINDABLE: ModMask = ModMask::Shift
    .union(ModMask::Control)
    .union(ModMask::Alt)
    .union(ModMask::Mod3)
    .union(ModMask::Super)
    .union(ModMask::Mod5);

const NAMES: [(&str, ModMask); 7] = [
    ("Any", ModMask::Any),
    ("Shift", ModMask::Shift),
    ("Control", ModMask::Control),
    ("Alt", ModMask::Alt),
    ("Mod3", ModMask::Mod3),
    ("Super", ModMask::Super),
    ("Mod5", ModMask::Mod5),
];

impl Default for ModMask {
    fn default() -> Self {
        ModMask::Zero
    }
}

impl ModMask {
    /// Drop lock state (NumLock) and anything that is not a real modifier.
    #[must_use]
    pub fn cleaned(self) -> Self {
        self.intersection(BINDABLE)
    }

    /// Names of the bindable modifiers contained in this mask.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .iter()
            .filter(move |(_, m)| *m != ModMask::Any && self.contains(*m))
            .map(|(name, _)| *name)
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    mask.cleaned()
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "None" => ModMask::Any,
        "Shift" => ModMask::Shift,
        "Control" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        // NOTE: we are ignoring the state of Numlock
        // "Mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

// serde impls (derive is not working with the bitflags macro)
// Masks are written as a list of modifier names so event scripts stay readable.

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let names: Vec<&str> = self.names().collect();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModmaskVisitor;

        impl<'de> Visitor<'de> for ModmaskVisitor {
            type Value = ModMask;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a modifier name, a list of modifier names or a bitfield")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let bits = u16::try_from(v).map_err(|_| E::custom("modifier bitfield too large"))?;
                Ok(ModMask::from_bits_retain(bits))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_name(v)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut mask = ModMask::Zero;
                while let Some(name) = seq.next_element::<String>()? {
                    mask |= parse_name::<A::Error>(&name)?;
                }
                Ok(mask)
            }
        }

        deserializer.deserialize_any(ModmaskVisitor)
    }
}

fn parse_name<E: de::Error>(name: &str) -> Result<ModMask, E> {
    match into_mod(name) {
        ModMask::Zero if name != "Zero" => Err(E::custom(format!("unknown modifier {name}"))),
        mask => Ok(mask),
    }
}
