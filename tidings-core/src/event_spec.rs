//! Parsing of `"name"` / `"name.namespace"` event specs.

/// An event name with its optional namespace, borrowed from the spec string.
///
/// The first `.` separates the name from the namespace. Everything after it,
/// further dots included, is the namespace.
///
/// ```
/// use tidings_core::EventSpec;
///
/// let spec = EventSpec::parse("click.menu.file");
/// assert_eq!(spec.name(), "click");
/// assert_eq!(spec.namespace(), "menu.file");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpec<'a> {
    name: &'a str,
    namespace: &'a str,
}

impl<'a> EventSpec<'a> {
    /// Split `spec` at its first dot.
    pub fn parse(spec: &'a str) -> Self {
        match spec.split_once('.') {
            Some((name, namespace)) => Self { name, namespace },
            None => Self {
                name: spec,
                namespace: "",
            },
        }
    }

    /// The event name. Empty for specs such as `".foo"`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The namespace, or `""` when none was given.
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Whether a non-empty namespace was given.
    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}
