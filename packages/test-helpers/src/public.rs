//! A throwaway directory with dashboard assets.
use std::{env, fs};

use camino::Utf8PathBuf;

use crate::random;

/// Body of the fixture `index.html`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Service Health</title><link rel="stylesheet" href="styles.css"></head>
<body>
<ul class="govuk-task-list">
  <li class="govuk-task-list__item">/health</li>
  <li class="govuk-task-list__item">/health/live</li>
  <li class="govuk-task-list__item">/health/ready</li>
</ul>
</body>
</html>
"#;

/// Body of the fixture `styles.css`.
pub const STYLES_CSS: &str = ".govuk-task-list { list-style: none; }\n";

/// Body of the fixture `docs/index.html`, used to test directory requests.
pub const DOCS_INDEX_HTML: &str = "<html><body>docs</body></html>\n";

/// Creates a new directory under the system temp dir with an `index.html`,
/// a `styles.css` and a `docs/` sub-directory with its own `index.html`.
///
/// # Panics
///
/// Will panic if the temp directory is not valid UTF-8 or the files can't be
/// written.
#[must_use]
pub fn fixture_dir() -> Utf8PathBuf {
    let temp_dir = Utf8PathBuf::from_path_buf(env::temp_dir()).expect("the temp dir should be valid UTF-8");

    let root = temp_dir.join(format!("service_health_public_{}", random::string(16)));

    fs::create_dir_all(root.join("docs")).expect("it should create the fixture directory");
    fs::write(root.join("index.html"), INDEX_HTML).expect("it should write index.html");
    fs::write(root.join("styles.css"), STYLES_CSS).expect("it should write styles.css");
    fs::write(root.join("docs").join("index.html"), DOCS_INDEX_HTML).expect("it should write docs/index.html");

    root
}
