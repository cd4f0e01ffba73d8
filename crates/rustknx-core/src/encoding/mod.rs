/// Declarative bit-field descriptors used to pack datapoint layouts.
pub mod field;
/// Zero-copy byte reader for decoding telegram payloads.
pub mod reader;
/// Byte writer for encoding payloads into a caller-owned buffer.
pub mod writer;
