use pngscope::{png::*, StreamWarning};
use walkdir::WalkDir;

fn push_chunk(out: &mut Vec<u8>, ty: &[u8; 4], data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  out.extend_from_slice(&png_crc(ty, data).to_be_bytes());
}

fn sample_png() -> Vec<u8> {
  let mut png = PNG_SIGNATURE.to_vec();
  push_chunk(&mut png, b"IHDR", &[0, 0, 0, 4, 0, 0, 0, 4, 8, 3, 0, 0, 0]);
  push_chunk(&mut png, b"PLTE", &[0, 0, 0, 255, 255, 255]);
  push_chunk(&mut png, b"tRNS", &[0, 255]);
  push_chunk(&mut png, b"tEXt", b"Author\0Jane Doe");
  push_chunk(&mut png, b"iTXt", "Title\0\0\0en\0Titel\0\u{e9}t\u{e9}".as_bytes());
  push_chunk(&mut png, b"IDAT", &[0x78, 0x9C, 0x03, 0x00]);
  push_chunk(&mut png, b"IEND", &[]);
  png
}

fn check_everything(bytes: &[u8]) {
  for mode in [ParseMode::Lenient, ParseMode::Strict] {
    if let Ok(inspection) = inspect(bytes, mode) {
      for report in inspection.reports.iter() {
        let _ = report.summary();
        let _ = report.text();
      }
      let _ = MetadataAudit::from_inspection(&inspection);
    }
  }
  if let Ok(scanner) = PngChunkScanner::new(bytes) {
    for _ in scanner {
      //
    }
  }
}

#[test]
fn test_PngChunkScanner_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    check_everything(&v);
  }
  // even totally random data should never panic the inspector!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    check_everything(&v);
    // random data behind a real signature gets further in
    let mut signed = PNG_SIGNATURE.to_vec();
    signed.extend_from_slice(&v);
    check_everything(&signed);
  }
}

#[test]
fn test_random_mutations_no_panics() {
  let png = sample_png();
  for _ in 0..200 {
    let r = super::rand_bytes(3);
    let mut v = png.clone();
    let i = usize::from(u16::from_le_bytes([r[0], r[1]])) % v.len();
    v[i] ^= r[2] | 1;
    check_everything(&v);
    // cutting the file anywhere is also fine
    check_everything(&v[..i]);
  }
}

#[test]
fn test_sample_png_inspection() {
  let png = sample_png();
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  assert!(inspection.parsed.warnings.is_empty());
  let header = inspection.header.unwrap();
  assert_eq!((header.width, header.height), (4, 4));
  assert_eq!(header.color_type, PngColorType::Indexed);
  assert!(inspection.reports.iter().all(|r| r.is_valid()));
  let texts: Vec<_> = inspection.reports.iter().filter_map(|r| r.text()).collect();
  assert_eq!(texts, ["Jane Doe", "\u{e9}t\u{e9}"]);
  assert_eq!(
    inspection.reports[4].summary(),
    "Keyword: Title, language en, translated keyword Titel, 5 bytes of UTF-8 text"
  );
}

#[test]
fn test_mutated_crc_is_reported() {
  let png = sample_png();
  let clean = parse_png(&png, ParseMode::Lenient).unwrap();
  let check = |v: &[u8], offset: usize| {
    let parsed = parse_png(v, ParseMode::Lenient).unwrap();
    assert_eq!(parsed.chunks.len(), clean.chunks.len());
    let bad: Vec<usize> = parsed.bad_crc_chunks().map(|c| c.offset()).collect();
    assert_eq!(bad, [offset]);
    assert_eq!(parsed.warnings.len(), 1, "{:?}", parsed.warnings);
    assert!(
      matches!(parsed.warnings[0], StreamWarning::ChecksumMismatch { offset: o, .. } if o == offset),
      "{:?}",
      parsed.warnings
    );
    assert!(parse_png(v, ParseMode::Strict).is_err());
  };
  for _ in 0..20 {
    for chunk in clean.chunks.iter() {
      let r = super::rand_bytes(3);
      let idx = usize::from(u16::from_le_bytes([r[0], r[1]]));
      // any single payload byte
      if !chunk.data().is_empty() {
        let mut v = png.clone();
        v[chunk.offset() + 8 + idx % chunk.data().len()] ^= r[2] | 1;
        check(&v[..], chunk.offset());
      }
      // any single CRC byte
      let mut v = png.clone();
      v[chunk.end() - 4 + idx % 4] ^= r[2] | 1;
      check(&v[..], chunk.offset());
    }
  }
}
