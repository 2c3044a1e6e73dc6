use log::debug;
use pointclip_core::{ClipError, Result};
use std::io;
use std::path::Path;

/// Checks that `output` may be created by a run reading `input`.
///
/// A missing output is always fine. An existing one is refused unless
/// `overwrite` is set, and refused regardless when it resolves to the input
/// file, since creating the output would truncate the points still to be read.
pub fn check_destination(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    overwrite: bool,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let exists = output
        .try_exists()
        .map_err(|e| ClipError::DestinationUnwritable {
            path: output.to_path_buf(),
            source: e.into(),
        })?;
    if !exists {
        return Ok(());
    }

    if same_file(input, output) {
        return Err(refused(
            output,
            io::ErrorKind::InvalidInput,
            "output is the input file",
        ));
    }
    if !overwrite {
        return Err(refused(
            output,
            io::ErrorKind::AlreadyExists,
            "file exists and overwriting is disabled",
        ));
    }
    debug!("replacing existing {}", output.display());
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn refused(output: &Path, kind: io::ErrorKind, reason: &'static str) -> ClipError {
    ClipError::DestinationUnwritable {
        path: output.to_path_buf(),
        source: Box::new(io::Error::new(kind, reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::check_destination;
    use pointclip_core::ClipError;
    use std::fs;

    fn assert_refused(result: pointclip_core::Result<()>, reason: &str) {
        match result {
            Err(err @ ClipError::DestinationUnwritable { .. }) => {
                assert!(err.to_string().contains(reason), "{err}");
            }
            other => panic!("expected DestinationUnwritable, got {other:?}"),
        }
    }

    #[test]
    fn missing_output_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.las");
        fs::write(&input, b"points").unwrap();
        let output = dir.path().join("out.las");

        check_destination(&input, &output, false).unwrap();
        check_destination(&input, &output, true).unwrap();
    }

    #[test]
    fn existing_output_needs_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.las");
        let output = dir.path().join("out.las");
        fs::write(&input, b"points").unwrap();
        fs::write(&output, b"old").unwrap();

        assert_refused(check_destination(&input, &output, false), "overwriting");
        check_destination(&input, &output, true).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"old");
    }

    #[test]
    fn output_equal_to_input_is_always_refused() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.las");
        fs::write(&input, b"points").unwrap();

        assert_refused(check_destination(&input, &input, true), "input file");
        assert_refused(check_destination(&input, &input, false), "input file");

        // A different spelling of the same path resolves to the same file.
        let aliased = dir.path().join(".").join("in.las");
        assert_refused(check_destination(&input, &aliased, true), "input file");
        assert_eq!(fs::read(&input).unwrap(), b"points");
    }
}
