use super::*;

/// How the frame area is disposed of before the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum DisposeOp {
  None = 0,
  Background = 1,
  Previous = 2,
}

/// How the frame is combined with the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum BlendOp {
  Source = 0,
  Over = 1,
}

/// `fcTL`: Frame control
///
/// Spec: [fcTL](https://www.w3.org/TR/png/#fcTL-chunk)
///
/// * The delay is `delay_num / delay_den` seconds. A denominator of 0 means
///   100 (the delay is in hundredths of a second).
/// * The frame region must fit within the canvas, but that needs the header
///   and isn't checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct fcTL {
  pub sequence_number: u32,
  pub width: u32,
  pub height: u32,
  pub x_offset: u32,
  pub y_offset: u32,
  pub delay_num: u16,
  pub delay_den: u16,
  pub dispose_op: DisposeOp,
  pub blend_op: BlendOp,
}
impl TryFrom<&[u8]> for fcTL {
  type Error = PayloadError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if data.len() != 26 {
      return Err(bad_length(PngChunkTy::fcTL, "exactly 26 bytes", data));
    }
    let width = read_u32_be(data, 4)?;
    let height = read_u32_be(data, 8)?;
    if width == 0 || height == 0 {
      return Err(PayloadError::ZeroDimensions);
    }
    let dispose_op = match read_u8(data, 24)? {
      0 => DisposeOp::None,
      1 => DisposeOp::Background,
      2 => DisposeOp::Previous,
      other => return Err(bad_field("dispose op", other)),
    };
    let blend_op = match read_u8(data, 25)? {
      0 => BlendOp::Source,
      1 => BlendOp::Over,
      other => return Err(bad_field("blend op", other)),
    };
    Ok(Self {
      sequence_number: read_u32_be(data, 0)?,
      width,
      height,
      x_offset: read_u32_be(data, 12)?,
      y_offset: read_u32_be(data, 16)?,
      delay_num: read_u16_be(data, 20)?,
      delay_den: read_u16_be(data, 22)?,
      dispose_op,
      blend_op,
    })
  }
}
impl fcTL {
  /// The delay denominator, with 0 treated as 100.
  #[inline]
  #[must_use]
  pub const fn effective_delay_den(&self) -> u16 {
    if self.delay_den == 0 {
      100
    } else {
      self.delay_den
    }
  }
}
impl core::fmt::Display for fcTL {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "Frame #{seq}: {w} x {h} at ({x}, {y}), delay {num}/{den} s, dispose {d:?}, blend {b:?}",
      seq = self.sequence_number,
      w = self.width,
      h = self.height,
      x = self.x_offset,
      y = self.y_offset,
      num = self.delay_num,
      den = self.effective_delay_den(),
      d = self.dispose_op,
      b = self.blend_op,
    )
  }
}

#[test]
fn test_fctl() {
  use alloc::string::ToString;
  let mut data = [0_u8; 26];
  data[4..8].copy_from_slice(&10_u32.to_be_bytes());
  data[8..12].copy_from_slice(&20_u32.to_be_bytes());
  data[20..22].copy_from_slice(&3_u16.to_be_bytes());
  data[25] = 1;
  let f = fcTL::try_from(&data[..]).unwrap();
  assert_eq!(f.effective_delay_den(), 100);
  assert_eq!(f.to_string(), "Frame #0: 10 x 20 at (0, 0), delay 3/100 s, dispose None, blend Over");
  data[24] = 3;
  assert!(fcTL::try_from(&data[..]).is_err());
  data[24] = 0;
  data[25] = 2;
  assert!(fcTL::try_from(&data[..]).is_err());
  data[25] = 0;
  data[4..8].copy_from_slice(&[0; 4]);
  assert_eq!(fcTL::try_from(&data[..]), Err(PayloadError::ZeroDimensions));
  assert!(fcTL::try_from(&data[..25]).is_err());
}
