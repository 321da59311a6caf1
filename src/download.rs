//! Turn a rendered chart into a same-page download target.
//!
//! The host page carries one anchor per chart, identified by a `download-`
//! prefix plus the chart slug; its target is a `data:` URI holding the full
//! SVG document.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Standard header prepended so the downloaded file is a valid standalone
/// SVG document.
pub const SVG_DOCUMENT_HEADER: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\r\n\
<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\r\n";

// Characters encodeURIComponent leaves unescaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A ready-to-bind download target for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Id of the anchor element this link binds to (`download-<slug>`).
    pub anchor_id: String,
    /// Name of the downloaded artifact, derived from the chart's slug.
    pub file_name: String,
    /// Percent-encoded `data:` URI carrying the headered SVG document.
    pub href: String,
}

/// Build the download link for a chart, if one was actually rendered.
///
/// `svg` is the chart's serialized drawing surface; when it is absent or
/// empty (render failed or has not happened) this is a no-op returning
/// `None` rather than an error, leaving any existing anchor untouched.
pub fn download_link(slug: &str, svg: Option<&str>) -> Option<DownloadLink> {
    let svg = svg?;
    if svg.trim().is_empty() {
        return None;
    }
    let payload = format!("{SVG_DOCUMENT_HEADER}{svg}");
    let encoded = utf8_percent_encode(&payload, COMPONENT);
    Some(DownloadLink {
        anchor_id: format!("download-{slug}"),
        file_name: format!("{slug}.svg"),
        href: format!("data:image/svg+xml;charset=utf-8,{encoded}"),
    })
}
