//! OSM XML document framing around encoded fragments.

use std::io::Write;

use log::info;

use crate::error::DocumentError;
use crate::xml::Escaping;

/// Protocol version declared on the `<osm>` root.
pub const OSM_API_VERSION: &str = "0.6";

/// Generator string used when the caller does not supply one.
pub const DEFAULT_GENERATOR: &str = concat!("osmfile ", env!("CARGO_PKG_VERSION"));

/// Writes the `<osm>` envelope and fragments to a sink.
///
/// The document never opens or closes files; it only writes to and flushes
/// the sink it was given.
///
/// # Examples
/// ```
/// use osmfile_core::OsmDocument;
///
/// # fn main() -> Result<(), osmfile_core::DocumentError> {
/// let mut document = OsmDocument::new(Vec::new(), "survey 1.0");
/// document.header()?;
/// document.write(r#"  <node id="-1" version="1" lat="1" lon="2" uid="3" user="x"/>"#)?;
/// document.footer()?;
/// let xml = String::from_utf8(document.into_inner()).unwrap_or_default();
/// assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n"));
/// assert!(xml.ends_with("</osm>\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OsmDocument<W: Write> {
    sink: W,
    generator: String,
    closed: bool,
}

impl<W: Write> OsmDocument<W> {
    /// Wrap `sink`, announcing `generator` in the root element.
    pub fn new(sink: W, generator: impl Into<String>) -> Self {
        Self {
            sink,
            generator: generator.into(),
            closed: false,
        }
    }

    /// Wrap `sink` using [`DEFAULT_GENERATOR`].
    pub fn with_default_generator(sink: W) -> Self {
        Self::new(sink, DEFAULT_GENERATOR)
    }

    /// Generator announced in the root element.
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Write the XML declaration and the opening `<osm>` tag, then flush.
    ///
    /// The generator is always escaped, whatever mode the fragments use.
    pub fn header(&mut self) -> Result<(), DocumentError> {
        let header = format!(
            "<?xml version='1.0' encoding='UTF-8'?>\n<osm version=\"{OSM_API_VERSION}\" generator=\"{}\">\n",
            Escaping::Full.apply(&self.generator)
        );
        self.write_raw(&header)?;
        self.flush()?;
        info!("started OSM document (generator {})", self.generator);
        Ok(())
    }

    /// Write one fragment followed by a newline.
    pub fn write(&mut self, fragment: &str) -> Result<(), DocumentError> {
        self.write_raw(fragment)?;
        self.write_raw("\n")
    }

    /// Write each fragment on its own line.
    pub fn write_all<I, S>(&mut self, fragments: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for fragment in fragments {
            self.write(fragment.as_ref())?;
        }
        Ok(())
    }

    /// Write the closing `</osm>` tag, flush, and refuse further writes.
    pub fn footer(&mut self) -> Result<(), DocumentError> {
        self.write_raw("</osm>\n")?;
        self.flush()?;
        self.closed = true;
        info!("finished OSM document");
        Ok(())
    }

    /// Whether [`Self::footer`] has completed.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_raw(&mut self, text: &str) -> Result<(), DocumentError> {
        if self.closed {
            return Err(DocumentError::Closed);
        }
        self.sink
            .write_all(text.as_bytes())
            .map_err(|source| DocumentError::Write { source })
    }

    fn flush(&mut self) -> Result<(), DocumentError> {
        self.sink
            .flush()
            .map_err(|source| DocumentError::Flush { source })
    }
}
