//! Check command - decode a document and print its canonical encoding.

use std::io::Read;
use std::path::Path;

use common::{normalize, AppResult};
use domain::Shape;

use crate::args::CheckArgs;

/// Execute the check command
pub fn execute(args: CheckArgs, pretty: bool) -> AppResult<String> {
    let shape: Shape = args.shape.parse()?;
    let input = match &args.path {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    run(shape, &input, pretty)
}

/// Normalize `input` as `shape`
pub fn run(shape: Shape, input: &str, pretty: bool) -> AppResult<String> {
    tracing::info!(%shape, "Checking document");
    normalize(shape, input, pretty)
}

fn read_file(path: &Path) -> AppResult<String> {
    tracing::debug!(path = %path.display(), "Reading document");
    Ok(std::fs::read_to_string(path)?)
}

fn read_stdin() -> AppResult<String> {
    tracing::debug!("Reading document from stdin");
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_check_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nickname":"ally","avatarUrl":"http://x/a.png","email":"a@example.com","name":"Alice","id":1}}"#
        )
        .unwrap();

        let args = CheckArgs {
            shape: "user".to_string(),
            path: Some(file.path().to_path_buf()),
        };
        let out = execute(args, false).unwrap();

        assert_eq!(
            out,
            r#"{"id":1,"name":"Alice","email":"a@example.com","avatarUrl":"http://x/a.png","nickname":"ally"}"#
        );
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            shape: "User".to_string(),
            path: Some(dir.path().join("absent.json")),
        };

        let err = execute(args, false).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_check_unknown_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let args = CheckArgs {
            shape: "account".to_string(),
            path: Some(file.path().to_path_buf()),
        };
        let err = execute(args, false).unwrap_err();

        assert_eq!(err.code(), "UNKNOWN_SHAPE");
        assert_eq!(err.exit_code(), 64);
        assert_eq!(err.user_message(), "Unknown shape: account");
    }

    #[test]
    fn test_check_invalid_document() {
        let err = run(Shape::UserSearchQuery, "{}", false).unwrap_err();

        assert_eq!(err.exit_code(), 65);
        assert!(err.is_missing_field());
    }
}
