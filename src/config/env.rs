const ROOT_PREFIX: &str = "CIRCLE_PSLG";

fn var(group_prefix: Option<&str>, key: &str) -> (String, Option<String>) {
    let key = match group_prefix {
        Some(group_prefix) => format!("{}_{}_{}", ROOT_PREFIX, group_prefix, key),
        None => format!("{}_{}", ROOT_PREFIX, key),
    };
    let value = std::env::var(&key).ok();
    (key, value)
}

pub(crate) mod writer {
    use crate::{CoordinatePrecision, PslgError};

    pub(crate) fn precision() -> Result<Option<CoordinatePrecision>, PslgError> {
        const KEY: &str = "PRECISION";

        match super::var(None, KEY) {
            (key, Some(value)) => value
                .parse()
                .map(Some)
                .map_err(|_| PslgError::InvalidEnvironment { key, value }),
            (_, None) => Ok(None),
        }
    }
}

#[cfg(feature = "debugging")]
pub(crate) mod svg {
    use std::path;

    const GROUP_PREFIX: &str = "SVG";

    pub(crate) fn output_path() -> Option<path::PathBuf> {
        const KEY: &str = "OUTPUT_PATH";

        super::var(Some(GROUP_PREFIX), KEY).1.map(path::PathBuf::from)
    }

    pub(crate) fn show_labels() -> bool {
        // Note the show/hide inversion
        const KEY: &str = "HIDE_LABELS";

        super::var(Some(GROUP_PREFIX), KEY).1.is_none()
    }
}
