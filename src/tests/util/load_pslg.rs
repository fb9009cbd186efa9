use std::{error, fs, io};

use crate::{formats::PslgDocument, Coords, Segment};

/// A `.poly` document read back from text, headers included
#[derive(Debug)]
pub struct LoadedPslg {
    pub vertex_header: Vec<usize>,
    pub segment_header: Vec<usize>,
    pub vertex_indices: Vec<usize>,
    pub document: PslgDocument,
    pub last_line: String,
}

fn invalid(msg: &str) -> Box<dyn error::Error> {
    Box::new(io::Error::new(io::ErrorKind::InvalidData, msg.to_string()))
}

fn header(line: Option<&str>) -> Result<Vec<usize>, Box<dyn error::Error>> {
    let line = line.ok_or_else(|| invalid("Missing header"))?;
    Ok(line.split(' ').map(str::parse).collect::<Result<_, _>>()?)
}

/// Parse `.poly` text, checking that every record has the expected number of tokens
pub fn parse_pslg(text: &str) -> Result<LoadedPslg, Box<dyn error::Error>> {
    let mut lines = text.lines();
    let mut document = PslgDocument::default();
    let mut vertex_indices = Vec::new();

    let vertex_header = header(lines.next())?;
    let vertex_count = *vertex_header.first().ok_or_else(|| invalid("Empty vertex header"))?;
    for _ in 0..vertex_count {
        let line = lines.next().ok_or_else(|| invalid("Missing vertex"))?;
        let chunks: Vec<_> = line.split(' ').collect();
        if chunks.len() != 3 {
            return Err(invalid("Invalid vertex"));
        }
        vertex_indices.push(chunks[0].parse()?);
        document.vertices.push(Coords::new(chunks[1].parse()?, chunks[2].parse()?));
    }

    let segment_header = header(lines.next())?;
    let segment_count = *segment_header.first().ok_or_else(|| invalid("Empty segment header"))?;
    for _ in 0..segment_count {
        let line = lines.next().ok_or_else(|| invalid("Missing segment"))?;
        let chunks = line.split(' ').map(str::parse).collect::<Result<Vec<usize>, _>>()?;
        if chunks.len() != 3 {
            return Err(invalid("Invalid segment"));
        }
        document.segments.push(Segment { index: chunks[0], start: chunks[1], end: chunks[2] });
    }

    let last_line = lines.next().ok_or_else(|| invalid("Missing hole count"))?.to_string();
    document.hole_count = last_line.parse()?;
    if lines.next().is_some() {
        return Err(invalid("Trailing lines after hole count"));
    }

    Ok(LoadedPslg { vertex_header, segment_header, vertex_indices, document, last_line })
}

/// Load a `.poly` document from a file
pub fn load_pslg(path: &std::path::Path) -> Result<LoadedPslg, Box<dyn error::Error>> {
    parse_pslg(&fs::read_to_string(path)?)
}
