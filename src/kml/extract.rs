//! Document walk over KML.
//!
//! Streams the document with `quick_xml` and keeps a stack of open element
//! names. Vertices are buffered per Placemark and labelled when the Placemark
//! closes, because `name` may follow the geometry.

use std::path::Path;

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::coords::{parse_coordinates, parse_track_coord};
use crate::config::SYNTHETIC_LABEL_PREFIX;
use crate::error_handling::KmlError;
use crate::models::Point;

const PLACEMARK: &str = "Placemark";
const NAME: &str = "name";
const COORDINATES: &str = "coordinates";
const LINE_STRING: &str = "LineString";
const POINT: &str = "Point";
const TRACK: &str = "Track";
const TRACK_COORD: &str = "coord";

/// Reads and parses a KML file.
///
/// # Errors
///
/// Returns `KmlError::Io` if the file cannot be read, `KmlError::NotUtf8` if
/// its bytes are not UTF-8 (other declared encodings are not transcoded) and
/// `KmlError::Xml` if it is not well-formed. An empty result is not an error
/// here.
pub fn parse_kml_file(path: &Path) -> Result<Vec<Point>, KmlError> {
    let bytes = std::fs::read(path).map_err(|source| KmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let xml = String::from_utf8(bytes).map_err(|source| KmlError::NotUtf8 {
        path: path.to_path_buf(),
        source,
    })?;
    let points = parse_kml_str(xml.strip_prefix('\u{feff}').unwrap_or(&xml))?;
    debug!("Extracted {} vertices from {}", points.len(), path.display());
    Ok(points)
}

/// Parses a KML document into vertices in document order.
///
/// Recognizes `LineString/coordinates`, `Point/coordinates` and
/// `gx:Track/gx:coord` at any depth inside a Placemark. Namespace prefixes are
/// ignored.
pub fn parse_kml_str(xml: &str) -> Result<Vec<Point>, KmlError> {
    let mut reader = Reader::from_str(xml);
    let mut walker = Walker::default();

    loop {
        let event = reader.read_event().map_err(|source| KmlError::Xml {
            position: reader.error_position() as u64,
            source,
        })?;
        match event {
            Event::Start(e) => walker.open(&String::from_utf8_lossy(e.local_name().as_ref())),
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                walker.open(&name);
                walker.close();
            }
            Event::End(_) => walker.close(),
            Event::Text(e) => {
                let text = e.unescape().map_err(|source| KmlError::Xml {
                    position: reader.buffer_position() as u64,
                    source: quick_xml::Error::from(source),
                })?;
                walker.text(&text);
            }
            Event::CData(e) => walker.text(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.points)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureKind {
    Name,
    Coordinates,
    TrackCoord,
}

/// Text being collected for the element at `depth`.
struct Capture {
    kind: CaptureKind,
    depth: usize,
    text: String,
}

struct PlacemarkBuilder {
    depth: usize,
    name: Option<String>,
    name_seen: bool,
    vertices: Vec<(f64, f64)>,
}

#[derive(Default)]
struct Walker {
    stack: Vec<String>,
    placemark: Option<PlacemarkBuilder>,
    capture: Option<Capture>,
    unnamed: usize,
    points: Vec<Point>,
}

impl Walker {
    fn open(&mut self, name: &str) {
        self.stack.push(name.to_string());
        let depth = self.stack.len();

        if self.placemark.is_none() {
            if name == PLACEMARK {
                self.placemark = Some(PlacemarkBuilder {
                    depth,
                    name: None,
                    name_seen: false,
                    vertices: Vec::new(),
                });
            }
            return;
        }

        // Captures are leaf elements; ignore markup nested inside one
        if self.capture.is_some() {
            return;
        }
        let Some(placemark) = self.placemark.as_ref() else {
            return;
        };

        let parent = self.stack[..depth - 1].last().map(String::as_str);
        let kind = match name {
            NAME if depth == placemark.depth + 1 && !placemark.name_seen => CaptureKind::Name,
            COORDINATES if matches!(parent, Some(LINE_STRING) | Some(POINT)) => {
                CaptureKind::Coordinates
            }
            TRACK_COORD
                if self.stack[placemark.depth..depth - 1]
                    .iter()
                    .any(|ancestor| ancestor == TRACK) =>
            {
                CaptureKind::TrackCoord
            }
            _ => return,
        };

        self.capture = Some(Capture {
            kind,
            depth,
            text: String::new(),
        });
    }

    fn text(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
    }

    fn close(&mut self) {
        let depth = self.stack.len();

        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            if let (Some(capture), Some(placemark)) = (self.capture.take(), self.placemark.as_mut())
            {
                match capture.kind {
                    CaptureKind::Name => {
                        placemark.name_seen = true;
                        let label = capture.text.trim();
                        if !label.is_empty() {
                            placemark.name = Some(label.to_string());
                        }
                    }
                    CaptureKind::Coordinates => {
                        placemark.vertices.extend(parse_coordinates(&capture.text));
                    }
                    CaptureKind::TrackCoord => {
                        placemark.vertices.extend(parse_track_coord(&capture.text));
                    }
                }
            }
        }

        if self.placemark.as_ref().is_some_and(|p| p.depth == depth) {
            if let Some(placemark) = self.placemark.take() {
                self.finish_placemark(placemark);
            }
        }

        self.stack.pop();
    }

    fn finish_placemark(&mut self, placemark: PlacemarkBuilder) {
        let label = match placemark.name {
            Some(name) => name,
            None => {
                let label = format!("{SYNTHETIC_LABEL_PREFIX}{}", self.unnamed);
                self.unnamed += 1;
                label
            }
        };
        debug!(
            "Placemark '{}' contributed {} vertices",
            label,
            placemark.vertices.len()
        );
        self.points.extend(
            placemark
                .vertices
                .into_iter()
                .map(|(lat, lon)| Point::new(lat, lon, label.clone())),
        );
    }
}
