//! Big-endian integer newtypes.
//!
//! PNG stores every multi-byte integer as big-endian. These types hold only
//! the bytes, so they have an alignment of 1 and a payload can be viewed as a
//! slice or array of them with `bytemuck`, no copying needed.

use bytemuck::{Pod, Zeroable};

macro_rules! be_newtype {
  ($(#[$meta:meta])* $name:ident, $int:ty, $n:literal, $to:ident, $from:ident) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct $name([u8; $n]);
    impl $name {
      /// The native value.
      #[inline]
      #[must_use]
      pub const fn $to(self) -> $int {
        <$int>::from_be_bytes(self.0)
      }
      /// Stores a native value.
      #[inline]
      #[must_use]
      pub const fn $from(value: $int) -> Self {
        Self(value.to_be_bytes())
      }
      /// Views a payload as a table of these values.
      ///
      /// Gives `None` if the length isn't a multiple of the value size.
      #[inline]
      #[must_use]
      pub fn slice_from_bytes(bytes: &[u8]) -> Option<&[Self]> {
        bytemuck::try_cast_slice(bytes).ok()
      }
      /// Decodes a payload that must be exactly `N` values.
      #[inline]
      #[must_use]
      pub fn array_from_bytes<const N: usize>(bytes: &[u8]) -> Option<[$int; N]> {
        let values: &[Self; N] = bytemuck::try_from_bytes(bytes).ok()?;
        Some((*values).map(Self::$to))
      }
    }
    impl core::fmt::Debug for $name {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(stringify!($name)).field(&self.$to()).finish()
      }
    }
    impl From<$int> for $name {
      #[inline]
      fn from(value: $int) -> Self {
        Self::$from(value)
      }
    }
    impl From<$name> for $int {
      #[inline]
      fn from(value: $name) -> Self {
        value.$to()
      }
    }
  };
}

be_newtype!(
  /// A `u16` stored as big-endian bytes (`hIST` entries).
  U16BE, u16, 2, to_u16, from_u16
);
be_newtype!(
  /// A `u32` stored as big-endian bytes (`cHRM` coordinates, `acTL` counts).
  U32BE, u32, 4, to_u32, from_u32
);

#[test]
fn test_be_newtypes() {
  assert_eq!(U16BE::from_u16(0x1234), bytemuck::cast([0x12_u8, 0x34]));
  assert_eq!(U32BE::from(0xDEAD_BEEF).to_u32(), 0xDEAD_BEEF);
  let table = U16BE::slice_from_bytes(&[0, 1, 1, 0]).unwrap();
  assert_eq!(table.iter().map(|u| u.to_u16()).sum::<u16>(), 257);
  assert!(U16BE::slice_from_bytes(&[0, 1, 1]).is_none());
  assert_eq!(U32BE::array_from_bytes::<2>(&[0, 0, 0, 2, 0, 0, 1, 0]), Some([2, 256]));
  assert_eq!(U32BE::array_from_bytes::<2>(&[0; 7]), None);
  assert_eq!(alloc::format!("{:?}", U16BE::from(7)), "U16BE(7)");
}
