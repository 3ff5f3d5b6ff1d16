use std::io::{self, Read};

use trait_gen::trait_gen;

pub(super) trait ValueReaderExt: Read {
    fn read_value<T: Readable>(&mut self) -> io::Result<T>;
}

pub(super) trait Readable: Sized {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self>;
}

impl<R: Read + ?Sized> ValueReaderExt for R {
    fn read_value<T: Readable>(&mut self) -> io::Result<T> {
        T::read_from_reader(self)
    }
}

impl<const N: usize> Readable for [u8; N] {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut buf = [0u8; N];
        reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}

#[trait_gen(T -> u8, u16, u32, u64, i8, i16, i32, i64)]
impl Readable for T {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let buf = reader.read_value()?;
        Ok(T::from_be_bytes(buf))
    }
}

impl Readable for f32 {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        reader.read_value().map(f32::from_bits)
    }
}

impl Readable for f64 {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        reader.read_value().map(f64::from_bits)
    }
}

/// Reads exactly `len` bytes and advances the reader by `len` bytes.
///
/// The buffer grows with the data actually read, so a bogus length on a truncated input fails
/// with [`io::ErrorKind::UnexpectedEof`] instead of allocating the declared size up front.
pub(super) fn read_byte_chunk<R>(reader: &mut R, len: u64) -> io::Result<Vec<u8>>
where
    R: Read + ?Sized,
{
    let mut buf = Vec::new();
    Read::take(&mut *reader, len).read_to_end(&mut buf)?;
    if u64::try_from(buf.len()).is_ok_and(|it| it == len) {
        Ok(buf)
    } else {
        Err(io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}
