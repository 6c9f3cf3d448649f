use super::ByteClass;

const W: ByteClass = ByteClass::Whitespace;
const C: ByteClass = ByteClass::Comma;
const S: ByteClass = ByteClass::Separator;
const X: ByteClass = ByteClass::Control;
const T: ByteClass = ByteClass::Token;

// RFC 7230 tchar set, with the separators of RFC 2616 section 2.2 split out.
pub(super) static BYTE_CLASS: [ByteClass; 256] = class_map![
    X, X, X, X, X, X, X, X, X, W, W, X, X, W, X, X, // 0x00
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0x10
    W, T, S, T, T, T, T, T, S, S, T, T, C, T, T, S, // 0x20
    T, T, T, T, T, T, T, T, T, T, S, S, S, S, S, S, // 0x30
    S, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, // 0x40
    T, T, T, T, T, T, T, T, T, T, T, S, S, S, T, T, // 0x50
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, // 0x60
    T, T, T, T, T, T, T, T, T, T, T, S, T, S, T, X, // 0x70
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0x80
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0x90
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0xA0
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0xB0
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0xC0
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0xD0
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0xE0
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, // 0xF0
];
