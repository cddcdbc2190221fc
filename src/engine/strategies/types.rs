/// One fee rule. Implementations report which tier they quote for, so the
/// book can key itself without a separate wiring table.
pub trait FeeStrategy {
    fn tier(&self) -> &'static str;

    fn rate(&self) -> f64;

    fn fee(&self, amount: f64) -> f64 {
        amount * self.rate()
    }
}
