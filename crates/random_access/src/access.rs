// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fs::OpenOptions;
use std::io::{Read, Result, Seek as _, SeekFrom, Write as _};
use std::path::Path;

use tracing::{Level, event};

use crate::config::{GREETING, LEAD_LEN};

/// Rewrites the file at `path` in place with one pass of positioned I/O.
///
/// The file is opened for simultaneous reading and writing, without
/// truncation or append mode, so existing content stays addressable at
/// every offset. The pass:
///
/// 1. captures up to [`LEAD_LEN`] leading bytes from position 0,
/// 2. seeks back to offset 0 and stamps [`GREETING`] over the prefix,
/// 3. seeks to one byte before the current end and writes the captured
///    bytes followed by the greeting again.
///
/// The `size - 1` target in step 3 overlaps the old tail by one byte. That
/// offset is the documented behavior of this demonstration and is kept
/// as-is rather than turned into a true append.
///
/// The handle is scope-bound: it closes when this function returns, on
/// success and on error alike.
///
/// # Errors
///
/// Returns an error if the file cannot be opened read-write, or if any
/// seek, read, or write fails.
pub fn splice(path: impl AsRef<Path>) -> Result<()> {
    let mut file = OpenOptions::new().read(true).write(true).open(path.as_ref())?;

    let mut lead = [0_u8; LEAD_LEN];
    let captured = read_lead(&mut file, &mut lead)?;
    event!(Level::TRACE, message = "lead captured", bytes = captured);

    file.seek(SeekFrom::Start(0))?;
    file.write_all(GREETING.as_bytes())?;

    // One byte before the current end. The greeting stamp above guarantees
    // the file is non-empty at this point.
    let size = file.metadata()?.len();
    file.seek(SeekFrom::Start(size - 1))?;
    file.write_all(&lead[..captured])?;
    file.write_all(GREETING.as_bytes())?;
    event!(Level::TRACE, message = "tail written", offset = size - 1, bytes = captured + GREETING.len());

    Ok(())
}

/// Reads from the current position until `buf` is full or EOF is reached,
/// returning the number of bytes actually captured.
///
/// A short count is data, not an error: a file smaller than `buf` simply
/// yields fewer bytes.
fn read_lead(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}
