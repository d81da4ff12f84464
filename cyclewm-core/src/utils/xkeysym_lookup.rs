//! Keysym names used in key bindings.
//!
//! Values follow `X11/keysymdef.h`. Single printable characters map onto
//! their Latin-1 keysym.

pub type XKeysym = u32;

const NAMED: [(&str, XKeysym); 30] = [
    ("BackSpace", 0xff08),
    ("Tab", 0xff09),
    ("ISO_Left_Tab", 0xfe20),
    ("Return", 0xff0d),
    ("Escape", 0xff1b),
    ("Delete", 0xffff),
    ("space", 0x0020),
    ("grave", 0x0060),
    ("Home", 0xff50),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Page_Up", 0xff55),
    ("Page_Down", 0xff56),
    ("End", 0xff57),
    ("F1", 0xffbe),
    ("F2", 0xffbf),
    ("F3", 0xffc0),
    ("F4", 0xffc1),
    ("F5", 0xffc2),
    ("F6", 0xffc3),
    ("F7", 0xffc4),
    ("F8", 0xffc5),
    ("F9", 0xffc6),
    ("F10", 0xffc7),
    ("F11", 0xffc8),
    ("F12", 0xffc9),
    ("comma", 0x002c),
    ("period", 0x002e),
];

#[must_use]
pub fn into_keysym(name: &str) -> Option<XKeysym> {
    if let Some((_, sym)) = NAMED.iter().find(|(n, _)| *n == name) {
        return Some(*sym);
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Some(XKeysym::from(c)),
        _ => None,
    }
}

#[must_use]
pub fn keysym_name(sym: XKeysym) -> Option<String> {
    if let Some((name, _)) = NAMED.iter().find(|(_, s)| *s == sym) {
        return Some((*name).to_owned());
    }
    char::from_u32(sym)
        .filter(char::is_ascii_graphic)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_are_found() {
        assert_eq!(into_keysym("Tab"), Some(0xff09));
        assert_eq!(into_keysym("F12"), Some(0xffc9));
    }

    #[test]
    fn single_characters_map_onto_latin1() {
        assert_eq!(into_keysym("j"), Some(0x6a));
        assert_eq!(into_keysym("J"), Some(0x4a));
        assert_eq!(into_keysym("1"), Some(0x31));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(into_keysym("Hyper_Tab"), None);
        assert_eq!(into_keysym(""), None);
    }

    #[test]
    fn names_round_back_for_display() {
        assert_eq!(keysym_name(0xff09).as_deref(), Some("Tab"));
        assert_eq!(keysym_name(0x6a).as_deref(), Some("j"));
    }
}
