/// An encoded image held in the clipboard's image slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardImage {
    pub data: Vec<u8>,
    pub mime: String,
}

/// Capability over the shared clipboard: one text slot and one image slot,
/// last-writer-wins. Implemented by `SystemClipboard` for the real thing
/// and faked in tests.
pub trait ClipboardPort {
    /// Current text slot content; `None` when empty or unavailable.
    fn text(&mut self) -> Option<String>;

    fn set_text(&mut self, text: &str);

    /// Current image slot content as encoded bytes plus mime tag.
    fn image(&mut self) -> Option<ClipboardImage>;

    fn set_image(&mut self, data: &[u8], mime: &str);
}
