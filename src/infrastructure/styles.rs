//! List styling injected once at startup

use tracing::debug;

use crate::application::ports::outbound::StylePort;

/// Stylesheet scoped to the rendered list markup.
pub const LIST_STYLES: &str = "\
.better-journal-list {
  margin: 5px 0 0 10px;
  list-style: disc inside;
}

.better-journal-list-item {
  margin: 2px 0;
}

.better-journal-list-item a.loot {
  font-weight: 700;
}
";

/// Style sink for feed runs without a page to style into; records the
/// injection in the log instead.
pub struct LogStyleSink;

impl StylePort for LogStyleSink {
    fn inject(&self, id: &str, css: &str) {
        debug!(stylesheet = id, bytes = css.len(), "stylesheet registered");
    }
}
