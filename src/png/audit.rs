use super::*;

/// A piece of textual metadata found in the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry<'b> {
  /// Which text chunk it came from.
  pub ty: PngChunkTy,
  /// The keyword.
  pub keyword: Cow<'b, str>,
  /// The text, or `None` when it's compressed.
  pub text: Option<Cow<'b, str>>,
}

/// The kinds of provenance marker an audit can find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FindingKind {
  /// A `parameters` text entry, as written by Stable Diffusion web UIs.
  GenerationParameters,
  /// A `prompt` or `workflow` text entry, as written by ComfyUI.
  ComfyWorkflow,
  /// An XMP packet.
  Xmp,
  /// XMP that declares the IPTC `trainedAlgorithmicMedia` source type.
  AiSourceType,
  /// A `Software` text entry.
  Software,
  /// A `caBX` chunk holding a C2PA manifest store.
  C2paManifest,
  /// An `eXIf` chunk.
  Exif,
  /// A `tIME` chunk.
  ModificationTime,
}
impl FindingKind {
  /// If this kind of marker means the image was made by a generative model.
  #[inline]
  #[must_use]
  pub const fn is_ai_marker(self) -> bool {
    matches!(self, Self::GenerationParameters | Self::ComfyWorkflow | Self::AiSourceType)
  }
}

/// One provenance marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Finding {
  /// What was found.
  pub kind: FindingKind,
  /// Human readable details.
  pub detail: String,
}
impl core::fmt::Display for Finding {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:?}: {}", self.kind, self.detail)
  }
}

/// The textual metadata and provenance markers of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataAudit<'b> {
  /// Every text entry, in file order.
  pub text_entries: Vec<TextEntry<'b>>,
  /// Every provenance marker, in file order.
  pub findings: Vec<Finding>,
}
impl<'b> MetadataAudit<'b> {
  /// Looks through the decoded chunks of an inspection.
  ///
  /// Chunks whose payload didn't decode are skipped, except for `caBX` which
  /// is never decoded in the first place.
  #[must_use]
  pub fn from_inspection(inspection: &Inspection<'b>) -> Self {
    let mut audit = Self::default();
    for report in inspection.reports.iter() {
      let ty = report.chunk.ty();
      if ty == PngChunkTy::caBX {
        let detail = format!("{} byte C2PA manifest store", report.chunk.length());
        audit.push(FindingKind::C2paManifest, detail);
        continue;
      }
      let Ok(payload) = &report.payload else { continue };
      match payload {
        ChunkPayload::eXIf(e) => audit.push(FindingKind::Exif, e.to_string()),
        ChunkPayload::tIME(t) => audit.push(FindingKind::ModificationTime, t.to_string()),
        _ => (),
      }
      if let Some(keyword) = payload.keyword() {
        let text = payload.text();
        audit.note_text(&keyword, text.as_deref());
        audit.text_entries.push(TextEntry { ty, keyword, text });
      }
    }
    audit
  }

  /// If any marker says a generative model made the image.
  #[inline]
  #[must_use]
  pub fn is_ai_generated(&self) -> bool {
    self.findings.iter().any(|f| f.kind.is_ai_marker())
  }

  fn push(&mut self, kind: FindingKind, detail: String) {
    log::debug!("audit finding {kind:?}: {detail}");
    self.findings.push(Finding { kind, detail });
  }

  fn note_text(&mut self, keyword: &str, text: Option<&str>) {
    let body = text.unwrap_or("");
    match keyword {
      "parameters" => {
        let prompt = body.lines().next().unwrap_or("");
        self.push(FindingKind::GenerationParameters, format!("prompt: {}", preview(prompt)));
      }
      "prompt" | "workflow" => {
        self.push(FindingKind::ComfyWorkflow, format!("{keyword} ({} bytes of JSON)", body.len()));
      }
      "XML:com.adobe.xmp" => {
        if text.is_none() {
          self.push(FindingKind::Xmp, "compressed XMP packet".to_string());
          return;
        }
        self.push(FindingKind::Xmp, format!("{} byte XMP packet", body.len()));
        if body.contains("trainedAlgorithmicMedia") {
          let detail = "IPTC digital source type trainedAlgorithmicMedia".to_string();
          self.push(FindingKind::AiSourceType, detail);
        }
      }
      "Software" => self.push(FindingKind::Software, preview(body).into_owned()),
      _ => (),
    }
  }
}

/// Shortens text for a one line detail, at a char boundary.
fn preview(s: &str) -> Cow<'_, str> {
  const MAX_CHARS: usize = 60;
  match s.char_indices().nth(MAX_CHARS) {
    Some((cut, _)) => Cow::Owned(format!("{}...", &s[..cut])),
    None => Cow::Borrowed(s),
  }
}

#[test]
fn test_preview() {
  assert_eq!(preview("short"), "short");
  let long = "\u{e9}".repeat(70);
  let p = preview(&long);
  assert_eq!(p.chars().count(), 63);
  assert!(p.ends_with("..."));
}
