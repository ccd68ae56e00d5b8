//! Big-endian field reader over a seekable byte stream
//!
//! Every read reports how many elements were filled. A short read is not an
//! error by itself; it latches the stream into a failed state in which all
//! later reads are no-ops returning zero. Seeking clears the latch. An error
//! from the underlying reader is kept until a caller asks for it with
//! [`IccStream::read_error`].

use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

use bytemuck::Pod;

use super::error::IccError;
use super::types::{FIXED16_SCALE, u16_to_normalized};

/// Seekable stream of ICC profile bytes
#[derive(Debug)]
pub struct IccStream<R> {
    inner: R,
    failed: bool,
    error: Option<io::Error>,
}

impl<R: Read + Seek> IccStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
            error: None,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// True once a read came up short or the underlying reader errored
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Move to an absolute offset, re-arming the stream on success
    pub fn seek(&mut self, offset: u64) -> bool {
        match self.inner.seek(SeekFrom::Start(offset)) {
            Ok(_) => {
                self.failed = false;
                self.error = None;
                true
            }
            Err(e) => {
                self.failed = true;
                self.error = Some(e);
                false
            }
        }
    }

    /// Error for a failed read: the underlying I/O error if the reader
    /// reported one, `short` if the data simply ran out
    pub fn read_error(&mut self, short: IccError) -> IccError {
        self.error.take().map_or(short, IccError::from)
    }

    /// Read bytes verbatim
    pub fn read_u8(&mut self, dst: &mut [u8]) -> usize {
        self.fill(dst)
    }

    pub fn read_u16(&mut self, dst: &mut [u16]) -> usize {
        let n = self.read_pod(dst);
        dst[..n].iter_mut().for_each(|v| *v = u16::from_be(*v));
        n
    }

    pub fn read_u32(&mut self, dst: &mut [u32]) -> usize {
        let n = self.read_pod(dst);
        dst[..n].iter_mut().for_each(|v| *v = u32::from_be(*v));
        n
    }

    pub fn read_u64(&mut self, dst: &mut [u64]) -> usize {
        let n = self.read_pod(dst);
        dst[..n].iter_mut().for_each(|v| *v = u64::from_be(*v));
        n
    }

    /// Read s15Fixed16 values as `raw / 65536`
    pub fn read_s15_16_as_f32(&mut self, dst: &mut [f32]) -> usize {
        let n = self.read_pod(dst);
        for v in &mut dst[..n] {
            let raw = i32::from_be_bytes(v.to_ne_bytes());
            *v = (raw as f64 / FIXED16_SCALE) as f32;
        }
        n
    }

    /// Read u16 values as `raw / 65535`
    pub fn read_u16_as_normalized_f32(&mut self, dst: &mut [f32]) -> usize {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
        let wanted = bytes.len() / 2;
        let n = self.fill(&mut bytes[..wanted]) / 2;
        // Widen back to front so no unread sample is overwritten.
        for i in (0..n).rev() {
            let raw = u16::from_be_bytes([bytes[2 * i], bytes[2 * i + 1]]);
            let value = u16_to_normalized(raw);
            bytes[4 * i..4 * i + 4].copy_from_slice(&value.to_ne_bytes());
        }
        n
    }

    /// Read a single u32, `None` on short read
    pub fn u32(&mut self) -> Option<u32> {
        let mut v = [0u32; 1];
        (self.read_u32(&mut v) == 1).then_some(v[0])
    }

    /// Read a single u16, `None` on short read
    pub fn u16(&mut self) -> Option<u16> {
        let mut v = [0u16; 1];
        (self.read_u16(&mut v) == 1).then_some(v[0])
    }

    fn read_pod<T: Pod>(&mut self, dst: &mut [T]) -> usize {
        let width = std::mem::size_of::<T>();
        self.fill(bytemuck::cast_slice_mut(dst)) / width
    }

    fn fill(&mut self, buf: &mut [u8]) -> usize {
        if self.failed {
            return 0;
        }
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    break;
                }
            }
        }
        if filled < buf.len() {
            self.failed = true;
        }
        filled
    }
}
