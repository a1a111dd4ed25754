use super::*;

/// `tIME`: Image last-modification time
///
/// Spec: [tIME](https://www.w3.org/TR/png/#11tIME)
///
/// Always universal time (UTC). The second can be 60 to allow for leap
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct tIME {
  pub year: u16,
  pub month: u8,
  pub day: u8,
  pub hour: u8,
  pub minute: u8,
  pub second: u8,
}
impl TryFrom<&[u8]> for tIME {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let [y0, y1, month, day, hour, minute, second] = *data else {
      return Err(bad_length(PngChunkTy::tIME, "exactly 7 bytes", data));
    };
    if !(1..=12).contains(&month) {
      return Err(bad_field("month", month));
    }
    if !(1..=31).contains(&day) {
      return Err(bad_field("day", day));
    }
    if hour > 23 {
      return Err(bad_field("hour", hour));
    }
    if minute > 59 {
      return Err(bad_field("minute", minute));
    }
    if second > 60 {
      return Err(bad_field("second", second));
    }
    Ok(Self { year: u16::from_be_bytes([y0, y1]), month, day, hour, minute, second })
  }
}
impl core::fmt::Display for tIME {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
      self.year, self.month, self.day, self.hour, self.minute, self.second
    )
  }
}

#[test]
fn test_time() {
  use alloc::string::ToString;
  let t = tIME::try_from(&[0x07, 0xE8, 2, 29, 23, 59, 60][..]).unwrap();
  assert_eq!(t.to_string(), "2024-02-29 23:59:60 UTC");
  assert!(tIME::try_from(&[0x07, 0xE8, 13, 1, 0, 0, 0][..]).is_err());
  assert!(tIME::try_from(&[0x07, 0xE8, 1, 0, 0, 0, 0][..]).is_err());
  assert!(tIME::try_from(&[0x07, 0xE8, 1, 1, 24, 0, 0][..]).is_err());
  assert!(tIME::try_from(&[0x07, 0xE8, 1, 1, 0, 60, 0][..]).is_err());
  assert!(tIME::try_from(&[0x07, 0xE8, 1, 1, 0, 0, 61][..]).is_err());
  assert!(tIME::try_from(&[0x07, 0xE8, 1, 1, 0, 0][..]).is_err());
}
