//! Template resolution.
//!
//! Maps a selection of requested keys onto loaded templates. Resolution is
//! fail-fast and left-to-right: the first unknown key aborts the whole selection.

use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::Template;

/// Resolve `requested` keys against `templates`.
///
/// The result follows the order of `requested`. Each key resolves to the first
/// template carrying it.
pub fn resolve<'a, S: AsRef<str>>(
    templates: &'a [Template],
    requested: &[S],
) -> TemplateResult<Vec<&'a Template>> {
    if requested.is_empty() {
        return Err(TemplateError::NoTemplateSpecified);
    }

    let mut resolved = Vec::with_capacity(requested.len());
    for key in requested {
        let key = key.as_ref();
        let template = templates
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| TemplateError::NotFound(key.to_string()))?;

        debug!("Resolved template '{}' ({} packages)", key, template.pkgs.len());
        resolved.push(template);
    }

    Ok(resolved)
}
