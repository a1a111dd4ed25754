//! The CRC-32 used by PNG chunks.
//!
//! Reflected polynomial `0xEDB8_8320`, seeded with all ones, and complemented
//! at the end. The lookup table is built at compile time.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Runs more bytes through a CRC register.
///
/// Start with `u32::MAX` and complement the final value yourself, or just use
/// [`png_crc`].
#[inline]
#[must_use]
pub fn update_crc(mut crc: u32, bytes: &[u8]) -> u32 {
  for &byte in bytes {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// Computes the CRC of a chunk: the type bytes followed by the payload.
#[inline]
#[must_use]
pub fn png_crc(chunk_ty: &[u8], data: &[u8]) -> u32 {
  update_crc(update_crc(u32::MAX, chunk_ty), data) ^ u32::MAX
}

#[test]
fn test_png_crc() {
  // standard CRC-32 check value
  assert_eq!(png_crc(b"1234", b"56789"), 0xCBF4_3926);
  assert_eq!(png_crc(b"", b""), 0);
  // every PNG ends with these bytes
  assert_eq!(png_crc(b"IEND", b""), 0xAE42_6082);
  // splitting the input anywhere gives the same value
  assert_eq!(png_crc(b"", b"IEND"), png_crc(b"IE", b"ND"));
}
