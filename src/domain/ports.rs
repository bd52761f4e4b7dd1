pub trait ConfigProvider {
    /// Raw value of the name input, `None` when it was not supplied.
    fn name(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}
