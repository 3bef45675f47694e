/// Something that can pull target names out of a manifest's text
pub trait TargetPattern {
    /// Manifest kind this pattern understands, e.g. `"just"`
    fn name(&self) -> &str;

    /// Return the target names found in `source`, in file order
    fn scan(&self, source: &str) -> Vec<String>;
}
