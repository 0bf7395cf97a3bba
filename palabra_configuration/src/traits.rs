/// Infallible resolution of an unvalidated configuration table.
pub(crate) trait Resolve {
    type Resolved;

    fn resolve(self) -> Self::Resolved;
}

/// Fallible resolution of an unvalidated configuration table that needs access
/// to some already-resolved context (usually the base paths, for placeholder replacement).
pub(crate) trait TryResolveWithContext<'r> {
    type Resolved;
    type Context: 'r;
    type Error;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error>;
}
