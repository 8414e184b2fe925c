/// Sink for the stylesheet that scopes the rendered list markup.
/// Invoked once at startup; carries no data dependency.
pub trait StylePort: Send + Sync {
    fn inject(&self, id: &str, css: &str);
}
