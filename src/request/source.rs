use std::{ fs::File, io::{ BufRead, BufReader }, path::Path };

use tracing::{ debug, trace };

use crate::error::{ ScheduleError, ScheduleResult };

use super::{ Cylinder, CylinderRange };

/// Reads one cylinder number per line.
///
/// Blank lines are skipped so a trailing newline is not an entry. Anything else
/// that is not a non-negative integer rejects the whole source, as does a
/// cylinder that does not fit on the disk. Line numbers in errors are 1-based.
pub fn parse_requests<R: BufRead>(
    reader: R,
    range: CylinderRange,
    origin: &Path
) -> ScheduleResult<Vec<Cylinder>> {
    let mut requests = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ScheduleError::RequestSourceUnavailable {
            path: origin.to_path_buf(),
            source,
        })?;

        let content = line.trim();
        if content.is_empty() {
            trace!(line = line_no, "skipping blank line");
            continue;
        }

        let cylinder = content.parse::<Cylinder>().map_err(|_| ScheduleError::MalformedRequest {
            line: line_no,
            content: content.to_string(),
        })?;

        if !range.contains(cylinder) {
            return Err(ScheduleError::RequestOutOfRange {
                line: line_no,
                cylinder,
                cylinders: range.count(),
            });
        }

        requests.push(cylinder);
    }

    Ok(requests)
}

pub fn load_requests(path: impl AsRef<Path>, range: CylinderRange) -> ScheduleResult<Vec<Cylinder>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScheduleError::RequestSourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let requests = parse_requests(BufReader::new(file), range, path)?;
    debug!(?path, count = requests.len(), "loaded cylinder requests");

    Ok(requests)
}
