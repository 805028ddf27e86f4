//! vCard property value fixtures.
//!
//! Wire values modelled on vCard 2.1 exports from common address book clients
//! and on the examples in RFC 2426.

/// Printable ASCII values that need no encoding under any version.
pub const PLAIN_VALUES: &[&str] = &[
    "",
    "Hello, World!",
    "John Q. Public, Esq.",
    "+1-213-555-1234",
    "jqpublic@xyz.dom1.com",
    "Mr. John Q. Public\\, Esq.",
    "   leading and trailing spaces   ",
    "~!@#$%^&*()_+`-={}[]|:\"'<>?,./",
    "0123456789012345678901234567890123456789012345678901234567890123456789012345",
];

/// Values that exercise charsets and control characters.
pub const RICH_VALUES: &[&str] = &[
    "Grüße aus München",
    "Ærøskøbing",
    "日本語のメモ",
    "Line one\r\nLine two",
    "Tab\tseparated",
    "emoji 🎉 party",
];

/// vCard 2.1 quoted-printable NOTE with soft line breaks, as exported by
/// older desktop clients.
pub const V21_QP_NOTE_PARAMS: &str = "ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8";
pub const V21_QP_NOTE_VALUE: &str =
    "Anrufen wegen Gr=C3=BC=C3=9Fe an die Familie M=C3=BCller und die neue Adre=\r\nsse=0D=0AMontag";
pub const V21_QP_NOTE_DECODED: &str =
    "Anrufen wegen Grüße an die Familie Müller und die neue Adresse\r\nMontag";

/// vCard 2.1 Latin-1 encoded address label.
pub const V21_LATIN1_LABEL_PARAMS: &str = "HOME;ENCODING=QUOTED-PRINTABLE;CHARSET=ISO-8859-1";
pub const V21_LATIN1_LABEL_VALUE: &str = "Stra=DFe 1=0D=0A12345 K=F6ln";
pub const V21_LATIN1_LABEL_DECODED: &str = "Straße 1\r\n12345 Köln";

/// vCard 3.0 inline photo (RFC 2426 §3.1.4), truncated to a JPEG header.
pub const V30_PHOTO_PARAMS: &str = "ENCODING=b;TYPE=JPEG";
pub const V30_PHOTO_VALUE: &str = "/9j/4AAQSkZJRg==";
pub const V30_PHOTO_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
