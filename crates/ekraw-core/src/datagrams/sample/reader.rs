use super::error::SampleError;

pub struct SampleReader<'a> {
    body: &'a [u8],
}

impl<'a> SampleReader<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        Self { body }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), SampleError> {
        if self.body.len() < needed {
            return Err(SampleError::TooShort {
                needed,
                actual: self.body.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], SampleError> {
        self.body.get(range.clone()).ok_or(SampleError::TooShort {
            needed: range.end,
            actual: self.body.len(),
        })
    }

    pub fn read_i16_le(&self, range: std::ops::Range<usize>) -> Result<i16, SampleError> {
        Ok(i16::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_i32_le(&self, range: std::ops::Range<usize>) -> Result<i32, SampleError> {
        Ok(i32::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_u32_le(&self, range: std::ops::Range<usize>) -> Result<u32, SampleError> {
        Ok(u32::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_f32_le(&self, range: std::ops::Range<usize>) -> Result<f32, SampleError> {
        Ok(f32::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_array<const N: usize>(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<[u8; N], SampleError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| SampleError::TooShort {
            needed: N,
            actual: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SampleReader;
    use crate::datagrams::sample::error::SampleError;

    #[test]
    fn i16_reads_are_little_endian() {
        let body = (-2i16).to_le_bytes();
        let reader = SampleReader::new(&body);
        assert_eq!(reader.read_i16_le(0..2).unwrap(), -2);
    }

    #[test]
    fn short_read_reports_needed_bytes() {
        let reader = SampleReader::new(&[0u8; 3]);
        let err = reader.read_i32_le(2..6).unwrap_err();
        assert!(matches!(
            err,
            SampleError::TooShort {
                needed: 6,
                actual: 3
            }
        ));
    }
}
