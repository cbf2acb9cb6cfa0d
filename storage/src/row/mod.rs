use std::borrow::Cow;
use std::fmt;

use bytes::{Buf, BufMut};

use crate::{Result, StorageError};

pub const ID_SIZE: usize = std::mem::size_of::<u32>();
pub const USERNAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;

/// Packed size of one row: 4 + 32 + 255 = 291 bytes
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// A single record with the fixed `(id, username, email)` schema.
///
/// Text columns are stored NUL-padded in fixed arrays, so a value may use the
/// whole capacity without a terminator.
#[derive(Clone, PartialEq, Eq)]
pub struct Row {
    id: u32,
    username: [u8; USERNAME_SIZE],
    email: [u8; EMAIL_SIZE],
}

impl Row {
    /// Build a row, rejecting text that does not fit its column or that
    /// contains a NUL byte (NUL marks the end of stored text).
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self> {
        Ok(Self {
            id,
            username: pack_text("username", username)?,
            email: pack_text("email", email)?,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn username(&self) -> Cow<'_, str> {
        unpack_text(&self.username)
    }

    pub fn email(&self) -> Cow<'_, str> {
        unpack_text(&self.email)
    }

    /// Write the row into a slot: id (little-endian), then the full username
    /// and email columns at their fixed offsets.
    pub fn serialize(&self, dest: &mut [u8; ROW_SIZE]) {
        let mut buf = &mut dest[..];
        buf.put_u32_le(self.id);
        buf.put_slice(&self.username);
        buf.put_slice(&self.email);
    }

    /// Inverse of [`Row::serialize`].
    pub fn deserialize(src: &[u8; ROW_SIZE]) -> Self {
        let mut buf = &src[..];
        let id = buf.get_u32_le();

        let mut username = [0u8; USERNAME_SIZE];
        buf.copy_to_slice(&mut username);

        let mut email = [0u8; EMAIL_SIZE];
        buf.copy_to_slice(&mut email);

        Self {
            id,
            username,
            email,
        }
    }
}

fn pack_text<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N]> {
    let bytes = value.as_bytes();
    if bytes.len() > N {
        return Err(StorageError::FieldTooLong {
            field,
            len: bytes.len(),
            max: N,
        });
    }

    if bytes.contains(&0) {
        return Err(StorageError::NulInField { field });
    }

    let mut packed = [0u8; N];
    packed[..bytes.len()].copy_from_slice(bytes);
    Ok(packed)
}

fn unpack_text(column: &[u8]) -> Cow<'_, str> {
    let end = column.iter().position(|&b| b == 0).unwrap_or(column.len());
    String::from_utf8_lossy(&column[..end])
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username(), self.email())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("username", &self.username())
            .field("email", &self.email())
            .finish()
    }
}
