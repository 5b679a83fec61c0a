use anyhow::{bail, Context, Result};
use persistence::{BarcodeCollection, Interval};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses diagrams written by [`PairWriter`](crate::PairWriter).
///
/// Blank lines are skipped. Besides `inf`, a death of `-1` is accepted as
/// infinite, the convention of several other persistence tools.
pub struct PairReader {}

impl PairReader {
    pub fn read_file(path: &Path) -> Result<BarcodeCollection> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Self::read_from(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn read_from<R: BufRead>(r: R) -> Result<BarcodeCollection> {
        let mut barcodes = BarcodeCollection::new();
        for (lineno, line) in r.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (dim, interval) =
                parse_pair(line).with_context(|| format!("line {}: {:?}", lineno + 1, line))?;
            barcodes.push(dim, interval);
        }
        Ok(barcodes)
    }
}

fn parse_pair(line: &str) -> Result<(usize, Interval)> {
    let mut parts = line.split_whitespace();
    let (Some(dim), Some(birth), Some(death), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        bail!("expected 3 fields");
    };

    let dim: usize = dim.parse().context("bad dimension")?;
    let birth: f64 = birth.parse().context("bad birth")?;
    let interval = match death {
        "inf" | "-1" => Interval::essential(birth),
        _ => {
            let death: f64 = death.parse().context("bad death")?;
            if death < birth {
                bail!("death {} precedes birth {}", death, birth);
            }
            Interval::finite(birth, death)
        }
    };
    Ok((dim, interval))
}
