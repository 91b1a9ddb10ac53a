//! HID usage code translation (US layout, boot-protocol keyboard page)

/// Usage codes with control meaning rather than a character
pub mod usage {
    /// Keyboard Return (Enter)
    pub const ENTER: u8 = 0x28;
    /// Keyboard Delete (Backspace)
    pub const BACKSPACE: u8 = 0x2A;
    /// Keyboard Tab
    pub const TAB: u8 = 0x2B;
    /// Keyboard Spacebar
    pub const SPACE: u8 = 0x2C;
    /// Keyboard Caps Lock
    pub const CAPS_LOCK: u8 = 0x39;
}

/// Modifier byte bits (byte 0 of a boot report)
pub mod modifier {
    pub const LEFT_CTRL: u8 = 0x01;
    pub const LEFT_SHIFT: u8 = 0x02;
    pub const LEFT_ALT: u8 = 0x04;
    pub const LEFT_GUI: u8 = 0x08;
    pub const RIGHT_CTRL: u8 = 0x10;
    pub const RIGHT_SHIFT: u8 = 0x20;
    pub const RIGHT_ALT: u8 = 0x40;
    pub const RIGHT_GUI: u8 = 0x80;

    /// Either shift key
    pub const SHIFT_MASK: u8 = LEFT_SHIFT | RIGHT_SHIFT;
}

/// Characters produced by one key, without and with shift held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChars {
    pub base: char,
    pub shifted: char,
}

impl KeyChars {
    const fn new(base: char, shifted: char) -> Self {
        Self { base, shifted }
    }

    /// Whether caps lock applies to this key (letters only)
    pub fn is_letter(&self) -> bool {
        self.base.is_ascii_alphabetic()
    }
}

/// Convert a HID usage code to its character pair.
/// Returns None for control codes (Backspace, Caps Lock) and unmapped keys.
pub fn hid_to_chars(code: u8) -> Option<KeyChars> {
    let chars = match code {
        // Letters a-z
        0x04..=0x1D => {
            let base = (b'a' + (code - 0x04)) as char;
            KeyChars::new(base, base.to_ascii_uppercase())
        }
        // Number row
        0x1E => KeyChars::new('1', '!'),
        0x1F => KeyChars::new('2', '@'),
        0x20 => KeyChars::new('3', '#'),
        0x21 => KeyChars::new('4', '$'),
        0x22 => KeyChars::new('5', '%'),
        0x23 => KeyChars::new('6', '^'),
        0x24 => KeyChars::new('7', '&'),
        0x25 => KeyChars::new('8', '*'),
        0x26 => KeyChars::new('9', '('),
        0x27 => KeyChars::new('0', ')'),
        // Whitespace
        usage::ENTER => KeyChars::new('\n', '\n'),
        usage::TAB => KeyChars::new('\t', '\t'),
        usage::SPACE => KeyChars::new(' ', ' '),
        // Punctuation
        0x2D => KeyChars::new('-', '_'),
        0x2E => KeyChars::new('=', '+'),
        0x2F => KeyChars::new('[', '{'),
        0x30 => KeyChars::new(']', '}'),
        0x31 => KeyChars::new('\\', '|'),
        0x32 => KeyChars::new('#', '~'), // Non-US # and ~
        0x33 => KeyChars::new(';', ':'),
        0x34 => KeyChars::new('\'', '"'),
        // 0x35 (grave accent) is not part of the decoded set
        0x36 => KeyChars::new(',', '<'),
        0x37 => KeyChars::new('.', '>'),
        0x38 => KeyChars::new('/', '?'),
        _ => return None,
    };
    Some(chars)
}
