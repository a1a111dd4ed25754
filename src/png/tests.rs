use super::*;

fn push_chunk(out: &mut Vec<u8>, ty: &[u8; 4], data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  out.extend_from_slice(&png_crc(ty, data).to_be_bytes());
}

fn ihdr_data(w: u32, h: u32, depth: u8, color: u8) -> Vec<u8> {
  let mut v = Vec::new();
  v.extend_from_slice(&w.to_be_bytes());
  v.extend_from_slice(&h.to_be_bytes());
  v.extend_from_slice(&[depth, color, 0, 0, 0]);
  v
}

/// Signature, the given chunks, and nothing else.
fn build_png(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
  let mut out = PNG_SIGNATURE.to_vec();
  for (ty, data) in chunks {
    push_chunk(&mut out, ty, data);
  }
  out
}

/// A 100x50 8-bit truecolor image with the given extra chunks before `IDAT`.
fn minimal_png(extra: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
  let ihdr = ihdr_data(100, 50, 8, 2);
  let mut chunks: Vec<(&[u8; 4], &[u8])> = Vec::new();
  chunks.push((b"IHDR", &ihdr[..]));
  chunks.extend_from_slice(extra);
  chunks.push((b"IDAT", &[0x78, 0x9C, 0x03, 0x00]));
  chunks.push((b"IEND", &[]));
  build_png(&chunks)
}

#[test]
fn test_empty_buffer_is_not_a_png() {
  assert_eq!(parse_png(&[], ParseMode::Lenient), Err(PngError::NotAPngFile));
  assert_eq!(parse_png(&[], ParseMode::Strict), Err(PngError::NotAPngFile));
  assert_eq!(inspect(b"hello world", ParseMode::Lenient).unwrap_err(), PngError::NotAPngFile);
}

#[test]
fn test_minimal_png_parses_clean() {
  let png = minimal_png(&[]);
  for mode in [ParseMode::Lenient, ParseMode::Strict] {
    let parsed = parse_png(&png, mode).unwrap();
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
    let tys: Vec<_> = parsed.chunks.iter().map(|c| c.ty()).collect();
    assert_eq!(tys, [PngChunkTy::IHDR, PngChunkTy::IDAT, PngChunkTy::IEND]);
    assert_eq!(parsed.chunks[0].offset(), 8);
    assert!(parsed.chunks.iter().all(|c| c.crc_ok()));
  }
}

#[test]
fn test_parse_is_deterministic() {
  let png = minimal_png(&[(b"tEXt", b"Author\0Jane Doe"), (b"gAMA", &[0, 0, 0xB1, 0x8F])]);
  assert_eq!(parse_png(&png, ParseMode::Lenient), parse_png(&png, ParseMode::Lenient));
  assert_eq!(inspect(&png, ParseMode::Lenient), inspect(&png, ParseMode::Lenient));
}

#[test]
fn test_chunks_are_contiguous() {
  let png = minimal_png(&[(b"tEXt", b"Author\0Jane Doe"), (b"pHYs", &[0; 9])]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  for pair in parsed.chunks.windows(2) {
    assert_eq!(pair[1].offset(), pair[0].offset() + 8 + pair[0].length() as usize + 4);
  }
  assert_eq!(parsed.chunks.last().unwrap().end(), png.len());
}

#[test]
fn test_crc_matches_flag() {
  let png = minimal_png(&[(b"tEXt", b"Author\0Jane Doe")]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  for c in parsed.chunks.iter() {
    assert_eq!(c.crc_ok(), c.declared_crc() == png_crc(c.ty().as_bytes(), c.data()));
  }
}

#[test]
fn test_single_bit_crc_error() {
  let mut png = minimal_png(&[(b"tEXt", b"Author\0Jane Doe")]);
  // flip the lowest bit of the text chunk's last payload byte
  let text_offset = 8 + 25;
  let last_payload_byte = text_offset + 8 + 15 - 1;
  png[last_payload_byte] ^= 1;
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.chunks.len(), 4);
  let text = parsed.chunks[1];
  assert_eq!(text.ty(), PngChunkTy::tEXt);
  assert!(!text.crc_ok());
  assert_eq!(parsed.bad_crc_chunks().count(), 1);
  assert_eq!(parsed.warnings.len(), 1);
  assert!(matches!(
    parsed.warnings[0],
    StreamWarning::ChecksumMismatch { offset: 33, ty: PngChunkTy::tEXt, .. }
  ));
  assert!(matches!(
    parse_png(&png, ParseMode::Strict),
    Err(PngError::Structural(StreamWarning::ChecksumMismatch { .. }))
  ));

  // a flipped CRC byte is the same
  let mut png = minimal_png(&[]);
  let ihdr_crc = 8 + 8 + 13;
  png[ihdr_crc] ^= 0x80;
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert!(!parsed.chunks[0].crc_ok());
  assert_eq!(parsed.warnings.len(), 1);
}

#[test]
fn test_ihdr_summary() {
  let png = minimal_png(&[]);
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  let header = inspection.header.unwrap();
  assert_eq!((header.width, header.height, header.bit_depth), (100, 50, 8));
  assert_eq!(header.color_type, PngColorType::Truecolor);
  assert_eq!(header.interlace_method, 0);
  let summary = inspection.reports[0].summary();
  assert!(summary.contains("100 x 50"), "{summary}");
  assert!(summary.contains("Truecolor"), "{summary}");
}

#[test]
fn test_corrupted_ihdr_length_is_fatal() {
  let mut png = PNG_SIGNATURE.to_vec();
  png.extend_from_slice(&0x0100_0000_u32.to_be_bytes());
  png.extend_from_slice(b"IHDR");
  png.extend_from_slice(&ihdr_data(1, 1, 8, 2));
  assert_eq!(parse_png(&png, ParseMode::Lenient), Err(PngError::MissingHeaderChunk));
  // the truncation comes first, but there's still no header to report
  assert_eq!(parse_png(&png, ParseMode::Strict), Err(PngError::MissingHeaderChunk));
}

#[test]
fn test_short_ihdr_is_fatal() {
  let ihdr = ihdr_data(1, 1, 8, 2);
  let png = build_png(&[(b"IHDR", &ihdr[..12]), (b"IDAT", &[]), (b"IEND", &[])]);
  assert_eq!(parse_png(&png, ParseMode::Lenient), Err(PngError::MissingHeaderChunk));
  assert_eq!(parse_png(&png, ParseMode::Strict), Err(PngError::MissingHeaderChunk));

  // a length field of 12 in front of a full 13 byte payload
  let mut png = PNG_SIGNATURE.to_vec();
  png.extend_from_slice(&12_u32.to_be_bytes());
  png.extend_from_slice(b"IHDR");
  png.extend_from_slice(&ihdr);
  png.extend_from_slice(&png_crc(b"IHDR", &ihdr).to_be_bytes());
  push_chunk(&mut png, b"IDAT", &[]);
  push_chunk(&mut png, b"IEND", &[]);
  assert_eq!(parse_png(&png, ParseMode::Lenient), Err(PngError::MissingHeaderChunk));
  assert_eq!(parse_png(&png, ParseMode::Strict), Err(PngError::MissingHeaderChunk));

  // a good header with a bad CRC is still a header
  let mut png = minimal_png(&[]);
  png[8 + 8 + 13] ^= 1;
  assert!(matches!(
    parse_png(&png, ParseMode::Strict),
    Err(PngError::Structural(StreamWarning::ChecksumMismatch { offset: 8, .. }))
  ));
}

#[test]
fn test_zero_width_is_a_payload_error() {
  let ihdr = ihdr_data(0, 50, 8, 2);
  let png = build_png(&[(b"IHDR", &ihdr[..]), (b"IDAT", &[]), (b"IEND", &[])]);
  let inspection = inspect(&png, ParseMode::Lenient).unwrap();
  assert!(inspection.parsed.warnings.is_empty());
  assert_eq!(inspection.header, None);
  let report = &inspection.reports[0];
  assert!(report.chunk.crc_ok());
  assert!(!report.is_valid());
  assert_eq!(report.summary(), "Zero width or height");
  assert_eq!(summarize(&report.chunk, None), Err(PayloadError::ZeroDimensions));
}

#[test]
fn test_text_chunk() {
  let png = minimal_png(&[(b"tEXt", b"Author\0Jane Doe")]);
  let inspection = inspect(&png, ParseMode::Lenient).unwrap();
  let report = &inspection.reports[1];
  let Ok(ChunkPayload::tEXt(t)) = report.payload else { panic!("{report:?}") };
  assert_eq!(t.keyword(), "Author");
  assert_eq!(t.text(), "Jane Doe");
  assert_eq!(report.text().as_deref(), Some("Jane Doe"));
  assert_eq!(report.summary(), "Keyword: Author, 8 bytes of text");
}

#[test]
fn test_strict_vs_lenient() {
  // no IEND
  let ihdr = ihdr_data(1, 1, 8, 0);
  let png = build_png(&[(b"IHDR", &ihdr[..]), (b"IDAT", &[])]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.warnings, [StreamWarning::MissingTerminator]);
  assert_eq!(parsed.warning_messages(), ["no IEND chunk found, the file may be truncated"]);
  assert_eq!(
    parse_png(&png, ParseMode::Strict),
    Err(PngError::Structural(StreamWarning::MissingTerminator))
  );

  // no IDAT
  let png = build_png(&[(b"IHDR", &ihdr[..]), (b"IEND", &[])]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.warnings, [StreamWarning::MissingImageData]);
  assert!(parse_png(&png, ParseMode::Strict).is_err());

  // trailing bytes after IEND
  let mut png = minimal_png(&[]);
  let end = png.len();
  png.extend_from_slice(&[0; 3]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.chunks.len(), 3);
  assert_eq!(
    parsed.warnings,
    [
      StreamWarning::TrailingData { offset: end, count: 3 },
      StreamWarning::Truncated { offset: end, needed: 12, available: 3 },
    ]
  );
  assert_eq!(
    parse_png(&png, ParseMode::Strict),
    Err(PngError::Structural(StreamWarning::TrailingData { offset: end, count: 3 }))
  );
}

#[test]
fn test_structural_error_displays_the_warning() {
  let w = StreamWarning::TrailingData { offset: 57, count: 3 };
  let e = PngError::from(w);
  assert_eq!(e.to_string(), w.to_string());
  assert!(core::error::Error::source(&e).is_none());
}

#[test]
fn test_oversized_length() {
  let ihdr = ihdr_data(1, 1, 8, 0);
  let mut png = build_png(&[(b"IHDR", &ihdr[..]), (b"IDAT", &[])]);
  let offset = png.len();
  png.extend_from_slice(&0x8000_0000_u32.to_be_bytes());
  png.extend_from_slice(b"tEXt");
  png.extend_from_slice(&[0; 4]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.chunks.len(), 2);
  // the scan stopped, so there's no MissingTerminator on top
  assert_eq!(
    parsed.warnings,
    [
      StreamWarning::LengthTooLarge { offset, length: 0x8000_0000 },
      StreamWarning::Truncated { offset, needed: 8 + 0x8000_0000 + 4, available: 12 },
    ]
  );
  assert_eq!(
    parse_png(&png, ParseMode::Strict),
    Err(PngError::Structural(StreamWarning::LengthTooLarge { offset, length: 0x8000_0000 }))
  );
}

#[test]
fn test_bad_chunk_type() {
  let ihdr = ihdr_data(1, 1, 8, 0);

  // fits in the buffer, so it's hopped over
  let png = build_png(&[(b"IHDR", &ihdr[..]), (b"ab1d", &[1, 2, 3]), (b"IDAT", &[]), (b"IEND", &[])]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  let tys: Vec<_> = parsed.chunks.iter().map(|c| c.ty()).collect();
  assert_eq!(tys, [PngChunkTy::IHDR, PngChunkTy::IDAT, PngChunkTy::IEND]);
  assert_eq!(
    parsed.warnings,
    [StreamWarning::BadChunkType { offset: 33, ty: PngChunkTy(*b"ab1d"), skipped: true }]
  );

  // runs past the end, so the scan stops there
  let mut png = build_png(&[(b"IHDR", &ihdr[..]), (b"IDAT", &[])]);
  let offset = png.len();
  png.extend_from_slice(&100_u32.to_be_bytes());
  png.extend_from_slice(b"ab1d");
  png.extend_from_slice(&[1, 2, 3]);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.chunks.len(), 2);
  let bad_type = StreamWarning::BadChunkType { offset, ty: PngChunkTy(*b"ab1d"), skipped: false };
  assert_eq!(parsed.warnings, [bad_type]);
  assert_eq!(parse_png(&png, ParseMode::Strict), Err(PngError::Structural(bad_type)));
}

#[test]
fn test_header_not_first() {
  let ihdr = ihdr_data(1, 1, 8, 0);
  let png = build_png(&[
    (b"gAMA", &[0, 0, 0xB1, 0x8F]),
    (b"IHDR", &ihdr[..]),
    (b"IDAT", &[]),
    (b"IEND", &[]),
  ]);
  let inspection = inspect(&png, ParseMode::Lenient).unwrap();
  assert_eq!(inspection.parsed.warnings, [StreamWarning::HeaderNotFirst { offset: 24 }]);
  assert_eq!(inspection.header, None);
  assert!(inspect(&png, ParseMode::Strict).is_err());
}

#[test]
fn test_truncated_stream() {
  let mut png = minimal_png(&[]);
  png.truncate(png.len() - 6);
  let parsed = parse_png(&png, ParseMode::Lenient).unwrap();
  assert_eq!(parsed.chunks.len(), 2);
  // the truncation stopped the scan, so a missing IEND isn't reported again
  assert_eq!(parsed.warnings.len(), 1);
  assert!(matches!(parsed.warnings[0], StreamWarning::Truncated { .. }));
}

#[test]
fn test_context_dependent_chunks() {
  let ihdr = ihdr_data(1, 1, 8, 3);
  let png = build_png(&[
    (b"IHDR", &ihdr[..]),
    (b"PLTE", &[0, 0, 0, 255, 255, 255]),
    (b"tRNS", &[0]),
    (b"sBIT", &[5, 6, 5]),
    (b"bKGD", &[1]),
    (b"hIST", &[0, 3, 0, 0]),
    (b"IDAT", &[]),
    (b"IEND", &[]),
  ]);
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  assert!(inspection.reports.iter().all(|r| r.is_valid()), "{:?}", inspection.reports);
  let summaries: Vec<String> = inspection.reports.iter().map(|r| r.summary()).collect();
  assert_eq!(summaries[1], "2 palette entries, first #000000");
  assert_eq!(summaries[2], "Alpha for 1 palette entries (1 fully transparent)");
  assert_eq!(summaries[3], "Significant bits: red 5, green 6, blue 5");
  assert_eq!(summaries[4], "Background palette index 1");
  assert_eq!(summaries[5], "Histogram of 2 palette entries (1 unused)");

  // without a header the same chunks can't be checked
  let trns = inspection.reports[2].chunk;
  assert_eq!(summarize(&trns, None).unwrap(), "1 bytes (no image header, layout unknown)");

  // an alpha color type can't have tRNS
  let rgba = IHDR::try_from(&ihdr_data(1, 1, 8, 6)[..]).unwrap();
  assert!(matches!(
    summarize(&trns, Some(&rgba)),
    Err(PayloadError::NotAllowedForColorType { color_type: 6, .. })
  ));
  // sBIT values can't go over the bit depth
  let sbit = inspection.reports[3].chunk;
  let gray2 = IHDR::try_from(&ihdr_data(1, 1, 2, 0)[..]).unwrap();
  assert!(summarize(&sbit, Some(&gray2)).is_err());
}

#[test]
fn test_color_chunks() {
  let chrm: Vec<u8> = [31270_u32, 32900, 64000, 33000, 30000, 60000, 15000, 6000]
    .iter()
    .flat_map(|v| v.to_be_bytes())
    .collect();
  let png = minimal_png(&[
    (b"gAMA", &45455_u32.to_be_bytes()),
    (b"cHRM", &chrm[..]),
    (b"sRGB", &[0]),
    (b"cICP", &[1, 13, 0, 1]),
    (b"iCCP", b"ICC Profile\0\0\x78\x9C"),
  ]);
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  let summaries: Vec<String> = inspection.reports.iter().map(|r| r.summary()).collect();
  assert_eq!(summaries[1], "Gamma 0.45455");
  assert_eq!(
    summaries[2],
    "White point (0.31270, 0.32900), red (0.64000, 0.33000), green (0.30000, 0.60000), blue (0.15000, 0.06000)"
  );
  assert_eq!(summaries[3], "sRGB, rendering intent 0 (Perceptual)");
  assert_eq!(summaries[4], "Primaries 1, transfer 13 (sRGB), matrix 0, full range");
  assert_eq!(summaries[5], "Profile: ICC Profile, 2 bytes of zlib compressed profile");
}

#[test]
fn test_bad_payloads_stay_local() {
  let png = minimal_png(&[
    (b"gAMA", &[0, 0, 0]),
    (b"sRGB", &[9]),
    (b"tIME", &[0x07, 0xE8, 13, 1, 0, 0, 0]),
    (b"tEXt", b"\0no keyword"),
  ]);
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  let valid: Vec<bool> = inspection.reports.iter().map(|r| r.is_valid()).collect();
  assert_eq!(valid, [true, false, false, false, false, true, true]);
  assert_eq!(inspection.reports[1].summary(), "\"gAMA\" must be exactly 4 bytes, found 3 bytes");
  assert_eq!(inspection.reports[2].summary(), "invalid rendering intent: 9");
  assert_eq!(inspection.reports[3].summary(), "invalid month: 13");
  assert_eq!(inspection.reports[4].summary(), "invalid keyword: empty");
}

#[test]
fn test_unknown_chunks() {
  let png = minimal_png(&[(b"vpAg", &[1, 2, 3]), (b"caBX", &[0; 4]), (b"xTRa", &[])]);
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  let summaries: Vec<String> = inspection.reports.iter().map(|r| r.summary()).collect();
  assert_eq!(summaries[1], "Unknown ancillary chunk (private)");
  assert_eq!(summaries[2], "Unknown ancillary chunk (private)");
  assert_eq!(summaries[3], "Unknown ancillary chunk");
  let critical =
    PngChunk { offset: 0, ty: PngChunkTy(*b"ZZZZ"), data: &[], declared_crc: 0, crc_ok: false };
  assert_eq!(summarize(&critical, None).unwrap(), "Unknown critical chunk");
}

#[test]
fn test_apng_chunks() {
  let mut fctl = [0_u8; 26];
  fctl[7] = 100;
  fctl[11] = 50;
  fctl[21] = 1;
  fctl[23] = 10;
  let mut fdat = 1_u32.to_be_bytes().to_vec();
  fdat.extend_from_slice(&[0x78, 0x9C, 0x03, 0x00]);
  let png = minimal_png(&[(b"acTL", &[0, 0, 0, 2, 0, 0, 0, 0]), (b"fcTL", &fctl[..]), (b"fdAT", &fdat[..])]);
  let inspection = inspect(&png, ParseMode::Strict).unwrap();
  assert!(inspection.is_animated());
  let summaries: Vec<String> = inspection.reports.iter().map(|r| r.summary()).collect();
  assert_eq!(summaries[1], "Animation with 2 frames, loops forever");
  assert_eq!(
    summaries[2],
    "Frame #0: 100 x 50 at (0, 0), delay 1/10 s, dispose None, blend Source"
  );
  assert_eq!(summaries[3], "Frame data #1, 4 bytes of compressed data");
  assert!(summarize(&inspection.reports[3].chunk, None).is_ok());
}

#[test]
fn test_metadata_audit() {
  let xmp = b"XML:com.adobe.xmp\0\0\0\0\0<x:xmpmeta>Iptc4xmpExt:DigitalSourceType=\"http://cv.iptc.org/newscodes/digitalsourcetype/trainedAlgorithmicMedia\"</x:xmpmeta>";
  let png = minimal_png(&[
    (b"tEXt", b"parameters\0a cat in a hat\nSteps: 20, Sampler: Euler a"),
    (b"tEXt", b"Software\0Paint 1.0"),
    (b"iTXt", &xmp[..]),
    (b"zTXt", b"Comment\0\0\x78\x9C\x03\x00"),
    (b"tIME", &[0x07, 0xE8, 2, 29, 12, 0, 0]),
    (b"eXIf", b"MM\0*\0\0\0\x08"),
    (b"caBX", &[0; 16]),
  ]);
  let inspection = inspect(&png, ParseMode::Lenient).unwrap();
  let audit = MetadataAudit::from_inspection(&inspection);
  assert!(audit.is_ai_generated());

  let keywords: Vec<&str> = audit.text_entries.iter().map(|e| e.keyword.as_ref()).collect();
  assert_eq!(keywords, ["parameters", "Software", "XML:com.adobe.xmp", "Comment"]);
  assert_eq!(audit.text_entries[1].text.as_deref(), Some("Paint 1.0"));
  assert_eq!(audit.text_entries[3].text, None);
  assert_eq!(audit.text_entries[3].ty, PngChunkTy::zTXt);

  let kinds: Vec<FindingKind> = audit.findings.iter().map(|f| f.kind).collect();
  assert_eq!(
    kinds,
    [
      FindingKind::GenerationParameters,
      FindingKind::Software,
      FindingKind::Xmp,
      FindingKind::AiSourceType,
      FindingKind::ModificationTime,
      FindingKind::Exif,
      FindingKind::C2paManifest,
    ]
  );
  assert_eq!(audit.findings[0].detail, "prompt: a cat in a hat");
  assert_eq!(audit.findings[1].detail, "Paint 1.0");
  assert_eq!(audit.findings[4].detail, "2024-02-29 12:00:00 UTC");
  assert_eq!(audit.findings[6].detail, "16 byte C2PA manifest store");
}

#[test]
fn test_plain_image_audit() {
  let png = minimal_png(&[(b"tEXt", b"Title\0Sunset")]);
  let inspection = inspect(&png, ParseMode::Lenient).unwrap();
  let audit = MetadataAudit::from_inspection(&inspection);
  assert!(!audit.is_ai_generated());
  assert!(audit.findings.is_empty());
  assert_eq!(audit.text_entries.len(), 1);
}
