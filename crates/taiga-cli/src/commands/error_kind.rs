use taiga_bulk::BulkError;
use taiga_client::ClientError;
use taiga_config::ConfigError;
use taiga_core::{CoreError, ErrorKind};
use taiga_favorites::FavoritesError;

/// Find the kind of the first typed error in the chain.
///
/// Anything unrecognized (argument parsing, file reads) is reported as a
/// rejected input.
pub fn classify(error: &anyhow::Error) -> ErrorKind {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<ClientError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<FavoritesError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<BulkError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<CoreError>() {
            return e.kind();
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return ErrorKind::Conflict;
        }
    }
    ErrorKind::Conflict
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn finds_client_error_under_context() {
        let error = Err::<(), _>(ClientError::NotFound {
            entity: "task",
            id: "9".into(),
        })
        .context("task get")
        .unwrap_err();
        assert_eq!(classify(&error), ErrorKind::NotFound);
    }

    #[test]
    fn upstream_failures_are_500() {
        let error = anyhow::Error::from(ClientError::Upstream {
            status: 502,
            message: "Bad Gateway".into(),
        });
        assert_eq!(classify(&error).http_status(), 500);
    }

    #[test]
    fn favorites_conflict_is_400() {
        let error = anyhow::Error::from(FavoritesError::AlreadyExists {
            entity: "Project",
            id: 1,
        });
        assert_eq!(classify(&error).http_status(), 400);
    }

    #[test]
    fn plain_errors_are_rejected_input() {
        assert_eq!(classify(&anyhow::anyhow!("bad flag")), ErrorKind::Conflict);
    }
}
