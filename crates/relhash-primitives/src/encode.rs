//! Canonical byte encoding for primitive values.
//!
//! Encodings are raw: no length marker and no separator. Field framing is
//! whatever the composing hasher concatenates, so changing any encoding here
//! changes every downstream digest.

/// Byte written for `false`.
pub const FALSE_BYTE: u8 = 0x00;

/// Byte written for `true`.
pub const TRUE_BYTE: u8 = 0x01;

///
/// Canonical
///
/// Primitive values with a fixed, unambiguous byte encoding used as hashing
/// input. Encoding never digests; callers fold the bytes into a larger stream
/// that is hashed once.
///

pub trait Canonical {
    /// Append the canonical encoding of `self` to `out`.
    fn encode_into(&self, out: &mut Vec<u8>);

    /// Return the canonical encoding of `self` as an owned buffer.
    fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }
}

impl Canonical for bool {
    fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(if *self { TRUE_BYTE } else { FALSE_BYTE });
    }
}

impl Canonical for str {
    fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Canonical for String {
    fn encode_into(&self, out: &mut Vec<u8>) {
        self.as_str().encode_into(out);
    }
}

impl<T: Canonical + ?Sized> Canonical for &T {
    fn encode_into(&self, out: &mut Vec<u8>) {
        (**self).encode_into(out);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_encodes_to_one_distinct_byte() {
        assert_eq!(false.canonical_bytes(), vec![0x00]);
        assert_eq!(true.canonical_bytes(), vec![0x01]);
    }

    #[test]
    fn str_encodes_to_utf8_without_length_marker() {
        assert_eq!("asd".canonical_bytes(), b"asd".to_vec());
        assert_eq!("žluť".canonical_bytes(), "žluť".as_bytes().to_vec());
        assert_eq!(String::from("qwe").canonical_bytes(), b"qwe".to_vec());
    }

    #[test]
    fn empty_string_encodes_to_nothing() {
        assert!("".canonical_bytes().is_empty());
    }

    #[test]
    fn encode_into_appends_to_existing_stream() {
        let mut stream = vec![0xAA];
        "ab".encode_into(&mut stream);
        true.encode_into(&mut stream);

        assert_eq!(stream, vec![0xAA, b'a', b'b', 0x01]);
    }
}
