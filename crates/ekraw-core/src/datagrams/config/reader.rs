use super::error::ConfigError;
use crate::datagrams::common::reader::{strip_all_nuls, trim_trailing_nuls};

pub struct ConfigReader<'a> {
    body: &'a [u8],
}

impl<'a> ConfigReader<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        Self { body }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), ConfigError> {
        if self.body.len() < needed {
            return Err(ConfigError::TooShort {
                needed,
                actual: self.body.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], ConfigError> {
        self.body.get(range.clone()).ok_or(ConfigError::TooShort {
            needed: range.end,
            actual: self.body.len(),
        })
    }

    pub fn read_i32_le(&self, range: std::ops::Range<usize>) -> Result<i32, ConfigError> {
        Ok(i32::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_u32_le(&self, range: std::ops::Range<usize>) -> Result<u32, ConfigError> {
        Ok(u32::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_f32_le(&self, range: std::ops::Range<usize>) -> Result<f32, ConfigError> {
        Ok(f32::from_le_bytes(self.read_array(range)?))
    }

    /// Read a run of consecutive little-endian `f32` values.
    pub fn read_f32_table<const N: usize>(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<[f32; N], ConfigError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != N * 4 {
            return Err(ConfigError::TooShort {
                needed: N * 4,
                actual: bytes.len(),
            });
        }
        let mut table = [0.0f32; N];
        for (value, chunk) in table.iter_mut().zip(bytes.chunks_exact(4)) {
            *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(table)
    }

    pub fn read_array<const N: usize>(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<[u8; N], ConfigError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| ConfigError::TooShort {
            needed: N,
            actual: bytes.len(),
        })
    }

    /// Fixed-width NUL-padded string; only trailing NULs are removed.
    pub fn read_fixed_string(&self, range: std::ops::Range<usize>) -> Result<String, ConfigError> {
        Ok(trim_trailing_nuls(self.read_slice(range)?))
    }

    /// Fixed-width string with every NUL removed (the spare/version quirk).
    pub fn read_string_stripping_nuls(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<String, ConfigError> {
        Ok(strip_all_nuls(self.read_slice(range)?))
    }
}
