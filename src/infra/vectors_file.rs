// ============================================================
// Layer 6 - Word2Vec Text Format
// ============================================================
// Reads and writes trained vectors in the plain-text format used
// by the original word2vec tool (and readable by most embedding
// libraries):
//
//   <vocab size> <dimensions>
//   <token> <f32> <f32> ... <f32>
//   <token> <f32> <f32> ... <f32>
//   ...
//
// Tokens never contain whitespace (the tokenizer splits on it),
// so a single space is an unambiguous separator. Floats are
// written with Rust's shortest round-trip representation, so a
// save → load cycle reproduces the vectors bit for bit.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use ndarray::Array2;

use crate::domain::error::VectorsError;
use crate::domain::traits::{Persistable, VectorSpace};
use crate::ml::model::KeyedVectors;

impl Persistable for KeyedVectors {
    fn save(&self, path: &Path) -> Result<(), VectorsError> {
        let io_err = |source| VectorsError::Io { path: path.to_path_buf(), source };

        let file = File::create(path).map_err(io_err)?;
        write_text(self, BufWriter::new(file)).map_err(io_err)?;

        tracing::info!(
            "Saved {} vectors ({} dims) to '{}'",
            self.words().len(),
            self.dimensions(),
            path.display()
        );
        Ok(())
    }

    fn load(path: &Path) -> Result<Self, VectorsError> {
        let file = File::open(path).map_err(|source| VectorsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let kv = read_text(BufReader::new(file), path)?;
        tracing::info!("Loaded {} vectors from '{}'", kv.words().len(), path.display());
        Ok(kv)
    }
}

pub fn write_text<W: Write>(kv: &KeyedVectors, mut out: W) -> std::io::Result<()> {
    let dim = kv.dimensions();
    writeln!(out, "{} {}", kv.words().len(), dim)?;

    for (i, word) in kv.words().iter().enumerate() {
        write!(out, "{word}")?;
        for x in kv.row(i) {
            write!(out, " {x}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn read_text<R: BufRead>(input: R, path: &Path) -> Result<KeyedVectors, VectorsError> {
    let io_err = |source| VectorsError::Io { path: path.to_path_buf(), source };
    let mut lines = input.lines();

    // ── Header ───────────────────────────────────────────────────────────────
    let header = lines
        .next()
        .transpose()
        .map_err(io_err)?
        .ok_or_else(|| format_err(1, "empty file, expected '<vocab size> <dimensions>'"))?;

    let mut fields = header.split_whitespace();
    let vocab_size = parse_header_field(fields.next(), "vocab size")?;
    let dim = parse_header_field(fields.next(), "dimensions")?;
    if fields.next().is_some() {
        return Err(format_err(1, "header has more than two fields"));
    }
    if vocab_size.checked_mul(dim).is_none() {
        return Err(format_err(1, format!("{vocab_size} x {dim} components overflows usize")));
    }

    // ── Rows ─────────────────────────────────────────────────────────────────
    // The header is untrusted, so buffers grow with the rows actually read
    let mut words = Vec::new();
    let mut vectors = Vec::new();

    for (n, line) in lines.enumerate() {
        let line_no = n + 2;
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        if words.len() == vocab_size {
            return Err(format_err(line_no, format!("more than {vocab_size} vector rows")));
        }

        let mut parts = line.split_whitespace();
        // non-empty line, so there is a first field
        let token = parts.next().unwrap_or_default();

        let before = vectors.len();
        for part in parts {
            let x: f32 = part
                .parse()
                .map_err(|_| format_err(line_no, format!("'{part}' is not a number")))?;
            vectors.push(x);
        }
        let got = vectors.len() - before;
        if got != dim {
            return Err(format_err(
                line_no,
                format!("token '{token}' has {got} components, expected {dim}"),
            ));
        }
        words.push(token.to_string());
    }

    if words.len() != vocab_size {
        return Err(format_err(
            words.len() + 2,
            format!("header promises {vocab_size} rows, found {}", words.len()),
        ));
    }

    let rows = words.len();
    let matrix = Array2::from_shape_vec((rows, dim), vectors)
        .map_err(|e| format_err(rows + 1, e.to_string()))?;
    KeyedVectors::new(words, matrix)
}

fn parse_header_field(field: Option<&str>, name: &str) -> Result<usize, VectorsError> {
    let field = field.ok_or_else(|| format_err(1, format!("header is missing {name}")))?;
    field
        .parse()
        .map_err(|_| format_err(1, format!("{name} '{field}' is not a non-negative integer")))
}

fn format_err(line: usize, reason: impl Into<String>) -> VectorsError {
    VectorsError::Format { line, reason: reason.into() }
}
