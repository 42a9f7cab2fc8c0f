/// Bytes in each leading and trailing length field.
pub const LENGTH_FIELD_LEN: usize = 4;

/// Smallest valid datagram body: 4-byte type tag plus split FILETIME.
pub const MIN_DATAGRAM_LEN: i32 = 12;

/// Cap on a single datagram body; a corrupt length prefix fails here
/// instead of sizing a runaway read.
pub const MAX_DATAGRAM_LEN: i32 = 16 * 1024 * 1024;
